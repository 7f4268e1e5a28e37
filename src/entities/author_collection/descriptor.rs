//! Route descriptor for author collections

use super::handlers::{create_author_collection, get_author_collection};
use crate::server::entity_registry::EntityDescriptor;
use crate::server::state::AppState;
use axum::Router;
use axum::routing::{get, post};

pub struct AuthorCollectionDescriptor;

impl EntityDescriptor for AuthorCollectionDescriptor {
    fn entity_type(&self) -> &str {
        "author_collection"
    }

    fn plural(&self) -> &str {
        "authorcollections"
    }

    fn build_routes(&self, state: AppState) -> Router {
        Router::new()
            .route("/api/authorcollections", post(create_author_collection))
            .route("/api/authorcollections/{ids}", get(get_author_collection))
            .with_state(state)
    }
}
