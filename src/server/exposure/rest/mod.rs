//! REST API exposure
//!
//! Consumes a `ServerHost` and produces an Axum `Router` with the health
//! routes, the resource routes of every registered entity and any custom
//! routes.

use super::super::host::ServerHost;
use crate::server::middleware::reject_unacceptable;
use anyhow::Result;
use axum::{Json, Router, middleware, routing::get};
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router from a host
    ///
    /// Returns a router with:
    /// - Health check routes
    /// - Resource routes, rejecting unsupported `Accept` headers with 406
    /// - Custom routes
    /// - Request tracing on everything
    pub fn build_router(host: Arc<ServerHost>, custom_routes: Vec<Router>) -> Result<Router> {
        let entity_routes = host
            .entity_registry
            .build_routes(host.app_state())
            .layer(middleware::from_fn(reject_unacceptable));

        let mut app = Self::health_routes().merge(entity_routes);

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        Ok(app.layer(TraceLayer::new_for_http()))
    }

    /// Build health check routes
    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    /// Health check endpoint handler
    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "course-library"
        }))
    }
}
