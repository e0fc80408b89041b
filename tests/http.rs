use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App};

use lanister::handlers::{self, ThemeState, STYLESHEET_PATH};
use lanister::ThemeConfig;

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(ThemeState::new(&ThemeConfig::default())))
                .configure(handlers::configure)
                .default_service(web::to(handlers::not_found)),
        )
        .await
    };
}

#[actix_web::test]
async fn error_page_renders_message() {
    let app = init_app!();
    let req = test::TestRequest::get()
        .uri("/error?message=Network%20unreachable")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp.headers().get(header::CONTENT_TYPE).unwrap();
    assert!(content_type.to_str().unwrap().starts_with("text/html"));

    let body = test::read_body(resp).await;
    let body = std::str::from_utf8(&body).unwrap();
    assert!(body.contains(">Error</p>"));
    assert!(body.contains("Network unreachable"));
    assert!(body.contains(STYLESHEET_PATH));
}

#[actix_web::test]
async fn missing_message_renders_empty() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/error").to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    assert!(std::str::from_utf8(&body).unwrap().contains(">Error</p>"));
}

#[actix_web::test]
async fn json_accept_still_gets_html() {
    let app = init_app!();
    let req = test::TestRequest::get()
        .uri("/error?message=quota%20exceeded")
        .insert_header((header::ACCEPT, "application/json"))
        .to_request();

    let resp = test::call_service(&app, req).await;
    let content_type = resp.headers().get(header::CONTENT_TYPE).unwrap();
    assert!(content_type.to_str().unwrap().starts_with("text/html"));
    let body = test::read_body(resp).await;
    assert!(std::str::from_utf8(&body).unwrap().contains("quota exceeded"));
}

#[actix_web::test]
async fn unknown_route_is_rendered_404() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/nowhere").to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = test::read_body(resp).await;
    let body = std::str::from_utf8(&body).unwrap();
    assert!(body.contains(">Error</p>"));
    assert!(body.contains("No route for /nowhere"));
}

#[actix_web::test]
async fn stylesheet_is_served_as_css() {
    let app = init_app!();
    let req = test::TestRequest::get().uri(STYLESHEET_PATH).to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/css; charset=utf-8"
    );
    let body = test::read_body(resp).await;
    let body = std::str::from_utf8(&body).unwrap();
    assert!(body.contains("@keyframes ken-burns"));
    assert!(body.contains("animate-ken-burns"));
}
