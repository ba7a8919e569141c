#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use std::process::ExitCode;

use crate::error::ServerError;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "authsecure failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let leptos_options = config::load()?;
    let addr = leptos_options.site_addr;

    let app = routes::app(leptos_options);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, "authsecure listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
