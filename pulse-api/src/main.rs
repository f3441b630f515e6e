use actix_cors::Cors;
use actix_web::middleware::{Condition, Logger};
use actix_web::{web, App, HttpServer};
use clap::Parser;
use pulse_api::config::ApiConfig;
use pulse_api::form::SurveyPage;
use pulse_api::helpers::sentiment::create_sentiment_classifier;
use pulse_api::routes::configure_routes;
use pulse_api::FeedbackDispatcher;
use pulse_sdk::workflow::WorkflowClient;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "pulse-api", version, about = "Team morale survey server")]
struct Args {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (config, config_path) = ApiConfig::load(args.config)?;
    let _log_guard = init_tracing(&config);
    info!(path = %config_path.display(), "Loaded configuration");

    config.validate()?;

    let classifier = create_sentiment_classifier(&config.sentiment)?;
    if config.sentiment.preload {
        if let Err(e) = classifier.warm_up().await {
            warn!(error = %e, "Sentiment model preload failed, loading on first submission instead");
        }
    }

    let workflow = WorkflowClient::new(
        &config.workflow.endpoint_url,
        config.workflow.timeout_secs.map(Duration::from_secs),
    )?;
    info!(host = %workflow.endpoint_host(), "Delivering feedback to workflow endpoint");

    let dispatcher = Arc::new(FeedbackDispatcher::new(classifier, workflow));
    let survey_page = web::Data::new(SurveyPage::new()?);

    let cors_origins = config
        .cors
        .as_ref()
        .map(|cors| cors.allowed_origins.clone())
        .unwrap_or_default();
    let cors_enabled = !cors_origins.is_empty();

    let bind_addr = config.bind_addr();
    info!("Starting pulse-api server at http://{}", bind_addr);

    HttpServer::new(move || {
        let mut cors = Cors::default()
            .allowed_methods(vec!["GET", "POST"])
            .allow_any_header();
        for origin in &cors_origins {
            cors = cors.allowed_origin(origin);
        }

        App::new()
            .wrap(Condition::new(cors_enabled, cors))
            .wrap(Logger::default())
            .app_data(web::Data::new(dispatcher.clone()))
            .app_data(survey_page.clone())
            .configure(configure_routes)
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    Ok(())
}

/// Log to stdout, and also to daily files when `[logging] directory` is set
fn init_tracing(config: &ApiConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match config
        .logging
        .as_ref()
        .and_then(|logging| logging.directory.clone())
    {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, "pulse-api.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer())
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer())
                .init();
            None
        }
    }
}
