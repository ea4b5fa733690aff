use std::path::Path;
use std::process::ExitCode;

use premia_core::config::PremiaConfig;
use premia_core::errors::PremiaErrorCode;
use premia_observability::init_tracing;
use premia_server::startup;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match PremiaConfig::load(Path::new(".")) {
        Ok(config) => config,
        Err(e) => {
            init_tracing(&PremiaConfig::default().observability);
            tracing::error!(code = e.error_code(), error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.observability);

    // Model load failures are logged with their cause inside `load_state`.
    let state = match startup::load_state(&config) {
        Ok(state) => state,
        Err(_) => return ExitCode::FAILURE,
    };

    let listener = match startup::bind(&config.server).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(code = e.error_code(), error = %e, "could not bind listener");
            return ExitCode::FAILURE;
        }
    };

    match startup::serve(listener, state, config.server.cors).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "server stopped");
            ExitCode::FAILURE
        }
    }
}
