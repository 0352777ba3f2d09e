use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use clap::Parser;
use env_logger::Env;
use miette::{IntoDiagnostic, Result};
use paydash::application::engine::PayoutQueryEngine;
use paydash::infrastructure::fixture::FixturePayoutSource;
use paydash::interfaces::http;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 3002)]
    port: u16,
}

#[actix_web::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    // The upstream credential is optional; the demo serves fixture data
    // whether or not it is present.
    if std::env::var("STRIPE_SECRET_KEY").is_ok() {
        log::info!("upstream credential found in environment");
    } else {
        log::info!("no upstream credential set, serving fixture data");
    }

    let engine = web::Data::new(PayoutQueryEngine::new(Box::new(FixturePayoutSource::new())));

    log::info!("listening on http://{}:{}", cli.host, cli.port);
    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_header()
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"]);

        App::new()
            .app_data(engine.clone())
            .configure(http::configure)
            .wrap(cors)
    })
    .bind((cli.host.as_str(), cli.port))
    .into_diagnostic()?
    .run()
    .await
    .into_diagnostic()?;

    Ok(())
}
