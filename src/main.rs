//! FSM QA Tools server.
//!
//! Loads configuration from the environment, wires the adapters into the
//! tool handlers and serves them over HTTP until Ctrl-C.

use std::process::ExitCode;
use std::sync::Arc;

use fsm_qa_tools::adapters::{
    app_router, MySqlBeatReader, MySqlCheckinRepository, MySqlConnector, ReqwestTransport,
    ToolsAppState,
};
use fsm_qa_tools::application::{
    CheckinCloneHandler, CheckoutHandler, CreateBeatHandler, CreateBeatSettings, FieldTools,
    RetryEnvelope, RetryPolicy,
};
use fsm_qa_tools::config::AppConfig;
use fsm_qa_tools::ports::HttpTransport;
use fsm_qa_tools::telemetry::init_tracing;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        return ExitCode::FAILURE;
    }

    init_tracing(&config.server);

    match serve(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Server failed");
            ExitCode::FAILURE
        }
    }
}

async fn serve(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let transport: Arc<dyn HttpTransport> =
        Arc::new(ReqwestTransport::new(config.service.write_timeout())?);
    let connector = MySqlConnector::from_config(&config.database);

    let envelope = RetryEnvelope::new(
        transport.clone(),
        RetryPolicy::default().with_backoff_unit(config.service.retry_backoff()),
    );
    let beat = CreateBeatHandler::new(
        envelope,
        Arc::new(MySqlBeatReader::new(connector.clone())),
        CreateBeatSettings::from_config(&config.service, config.beat.clone()),
    );
    let checkin = CheckinCloneHandler::from_config(
        Arc::new(MySqlCheckinRepository::new(connector)),
        transport,
        &config.service,
    );
    let tools = Arc::new(FieldTools::new(beat, checkin, CheckoutHandler::new()));

    let app = app_router(ToolsAppState::new(tools), config.server.request_timeout());
    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        base_url = %config.service.base_url(),
        "FSM QA tools listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
