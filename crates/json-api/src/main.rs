//! Afterschool Lessons JSON API Server

use std::process;

use salvo::prelude::*;
use tracing::{error, info, warn};

use afterschool_app::context::AppContext;

use crate::{config::ServerConfig, observability::Observability, state::State};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod checkout;
mod config;
mod errors;
mod extensions;
mod healthcheck;
mod images;
mod lessons;
mod observability;
mod orders;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

/// Afterschool JSON API Server entry point
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    let observability = Observability::init(&config).unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialize, must use eprintln"
        )]
        {
            eprintln!("Observability error: {e}");
        }

        process::exit(1);
    });

    info!(log_format = ?observability.log_format(), "logging initialized");

    let app = if config.database.in_memory {
        info!("using in-memory lesson and order store");

        AppContext::in_memory()
    } else if let Some(url) = config.database.database_url.as_deref() {
        match AppContext::from_database_url(
            url,
            config.database.pool_settings(),
            config.database.run_migrations,
        )
        .await
        {
            Ok(app) => app,
            Err(init_error) => {
                error!("failed to initialize app context: {init_error}");

                process::exit(1);
            }
        }
    } else {
        warn!("DATABASE_URL is not set, data routes will respond with 500");

        AppContext::unavailable()
    };

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    let listener = TcpListener::new(addr).bind().await;

    let state = State::from_app_context(app);

    let service = router::service(state.clone(), config.static_files.images_dir.clone());

    let server = Server::new(listener);

    let handle = server.handle();

    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    server.serve(service).await;

    state.app.close().await;

    info!("server stopped");
}
