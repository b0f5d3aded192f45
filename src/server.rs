// ABOUTME: HTTP server assembly: shared resources, router, middleware stack, and serve loop
// ABOUTME: Wires calculator, search, contact, and health routes behind tracing, request-id, CORS, and timeout layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Server
//!
//! The calculator engine is stateless, so the only shared state is the
//! configuration and the contact service with its email sender.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{body::Body, http::Uri, Router};
use tokio::net::TcpListener;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};

use crate::{
    config::ServerConfig,
    contact::ContactService,
    errors::AppError,
    external::email::{sender_from_config, EmailSender},
    middleware::{create_request_span, setup_cors},
    routes::{CalculatorRoutes, ContactRoutes, HealthRoutes, SearchRoutes},
};

/// Resources shared by every request
pub struct ServerResources {
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
    /// Contact form delivery
    pub contact: ContactService,
}

impl ServerResources {
    /// Build resources with an explicit email sender
    #[must_use]
    pub fn new(config: ServerConfig, sender: Arc<dyn EmailSender>) -> Self {
        let contact = ContactService::new(sender, &config.email);
        Self {
            config: Arc::new(config),
            contact,
        }
    }

    /// Build resources with the sender selected by the email configuration
    #[must_use]
    pub fn from_config(config: ServerConfig) -> Self {
        let sender: Arc<dyn EmailSender> = Arc::from(sender_from_config(&config.email));
        Self::new(config, sender)
    }
}

async fn handle_not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("Route '{}'", uri.path()))
}

/// Assemble every route and the middleware stack
///
/// Layer order, outermost first: request id assignment, tracing span,
/// request id propagation to the response, timeout, CORS.
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let http = &resources.config.http;
    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http().make_span_with(create_request_span::<Body>))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(http.request_timeout()))
        .layer(setup_cors(http));

    Router::new()
        .merge(HealthRoutes::routes())
        .merge(CalculatorRoutes::routes())
        .merge(SearchRoutes::routes())
        .merge(ContactRoutes::routes(resources))
        .fallback(handle_not_found)
        .layer(middleware)
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        return;
    }
    info!("Shutdown signal received, draining connections");
}

/// Bind the configured address and serve until Ctrl-C
///
/// # Errors
///
/// Returns an error if the address is invalid, the port cannot be bound, or
/// the server stops unexpectedly
pub async fn run(resources: Arc<ServerResources>) -> Result<()> {
    let http = &resources.config.http;
    let addr: SocketAddr = format!("{}:{}", http.host, http.port)
        .parse()
        .with_context(|| format!("Invalid listen address {}:{}", http.host, http.port))?;

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(%addr, "HTTP server listening");

    let app = build_router(resources);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("HTTP server stopped");
    Ok(())
}
