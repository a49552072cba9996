// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    routing::{get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use shift_opt_api::{OptimizeShiftsRequest, OptimizeShiftsResponse, optimize_shifts};
use tracing::info;

/// Shift Optimizer Server - HTTP server for the warehouse shift optimizer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Health check response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    /// Always "ok" while the process serves requests.
    status: String,
}

/// Handler for POST `/optimize` endpoint.
///
/// Runs one optimization over the submitted snapshot. The response is
/// always the envelope: rejected snapshots come back with
/// `success = false` and a message, not an HTTP error. The engine is
/// invoked fresh per request; no state is shared between calls.
async fn handle_optimize(
    Json(request): Json<OptimizeShiftsRequest>,
) -> Json<OptimizeShiftsResponse> {
    info!(
        workers = request.workers.len(),
        warehouses = request.warehouses.len(),
        cargo_loads = request.cargo_loads.len(),
        "Handling optimize request"
    );

    let response: OptimizeShiftsResponse = optimize_shifts(&request);

    info!(
        success = response.success,
        shifts = response.shifts.len(),
        "Returning optimization response"
    );

    Json(response)
}

/// Handler for GET `/health` endpoint.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

/// Builds the application router.
fn build_router() -> Router {
    Router::new()
        .route("/optimize", post(handle_optimize))
        .route("/health", get(handle_health))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Shift Optimizer Server");

    // Build router
    let app: Router = build_router();

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
