//! Book Information Assistant HTTP server
//!
//! Actix-web application serving the single page and a JSON API

pub mod page;
pub mod routes;
pub mod state;
pub mod types;

#[cfg(test)]
mod test_support;

use actix_web::{web, App, HttpServer};
use bookinfo_common::{AppConfig, Result};
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;

pub use state::AppState;

/// Start the HTTP server and run until shutdown
///
/// A single worker serves all requests; model calls are further serialized by the lookup gate.
pub async fn start_server(config: AppConfig) -> Result<()> {
    let bind_addr = config.server_bind_address();
    let state = Arc::new(AppState::new(config)?);

    info!("Starting server on http://{}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(routes::configure)
    })
    .workers(1)
    .bind(&bind_addr)?
    .run()
    .await?;

    info!("Server stopped");
    Ok(())
}
