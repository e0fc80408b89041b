use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use serde::Deserialize;
use tracing::debug;

use crate::components::render_error_page;
use crate::theme::ThemeConfig;

pub const STYLESHEET_PATH: &str = "/assets/theme.css";

/// Stylesheet rendered once at startup and shared by every worker.
pub struct ThemeState {
    stylesheet: String,
}

impl ThemeState {
    pub fn new(config: &ThemeConfig) -> Self {
        Self {
            stylesheet: config.stylesheet(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ErrorQuery {
    #[serde(default)]
    message: String,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(error_page).service(stylesheet);
}

#[actix_web::route("/error", method = "GET")]
pub async fn error_page(query: web::Query<ErrorQuery>) -> impl Responder {
    error_response(StatusCode::OK, &query.message)
}

#[actix_web::route("/assets/theme.css", method = "GET")]
pub async fn stylesheet(theme: web::Data<ThemeState>) -> impl Responder {
    HttpResponse::Ok()
        .content_type(mime::TEXT_CSS_UTF_8)
        .body(theme.stylesheet.clone())
}

pub async fn not_found(req: HttpRequest) -> HttpResponse {
    debug!(path = req.path(), "no matching route");
    let message = format!("No route for {}", req.path());
    error_response(StatusCode::NOT_FOUND, &message)
}

pub fn error_response(status: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(mime::TEXT_HTML_UTF_8)
        .body(render_error_page(message, STYLESHEET_PATH))
}
