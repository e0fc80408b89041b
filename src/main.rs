use std::path::Path;

use actix_web::{middleware, web, App, HttpServer};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use lanister::config::{Cli, Command, ServeArgs};
use lanister::handlers::{self, ThemeState};
use lanister::{bootstrap, logging, ThemeConfig};

#[actix_web::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    run_bootstrap(cli.root.as_deref())?;

    match cli.resolved_command() {
        Command::Bootstrap => Ok(()),
        Command::Serve(args) => serve(args).await,
    }
}

fn run_bootstrap(root: Option<&Path>) -> Result<()> {
    let report = match root {
        Some(root) => bootstrap::ensure_uploads_dir(root)
            .with_context(|| format!("uploads bootstrap failed under {}", root.display()))?,
        None => bootstrap::ensure_uploads_dir_in_cwd()
            .context("uploads bootstrap failed in the working directory")?,
    };
    for line in report.messages() {
        println!("{line}");
    }
    Ok(())
}

async fn serve(args: ServeArgs) -> Result<()> {
    let theme = match &args.theme {
        Some(path) => ThemeConfig::load(path)?,
        None => ThemeConfig::default(),
    };
    let state = web::Data::new(ThemeState::new(&theme));

    info!(host = %args.host, port = args.port, "starting server");

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(handlers::configure)
            .default_service(web::to(handlers::not_found))
    })
    .bind((args.host.as_str(), args.port))
    .with_context(|| format!("failed to bind {}:{}", args.host, args.port))?
    .run()
    .await
    .context("server terminated with an error")
}
