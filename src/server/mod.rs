//! Server module for building HTTP servers with auto-registered routes
//!
//! This module provides a `ServerBuilder` that registers:
//! - resource routes for all entities declared in modules
//! - the property mappings their handlers sort with
//! - health routes

pub mod builder;
pub mod entity_registry;
pub mod exposure;
pub mod host;
pub mod middleware;
pub mod state;

pub use builder::ServerBuilder;
pub use entity_registry::{EntityDescriptor, EntityRegistry};
pub use exposure::RestExposure;
pub use host::ServerHost;
pub use state::AppState;
