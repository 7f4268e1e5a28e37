//! Route descriptor for the authors resource

use super::handlers::{authors_options, create_author, delete_author, get_author, list_authors};
use crate::server::entity_registry::EntityDescriptor;
use crate::server::state::AppState;
use axum::Router;
use axum::routing::get;

pub struct AuthorDescriptor;

impl EntityDescriptor for AuthorDescriptor {
    fn entity_type(&self) -> &str {
        "author"
    }

    fn plural(&self) -> &str {
        "authors"
    }

    fn build_routes(&self, state: AppState) -> Router {
        Router::new()
            .route(
                "/api/authors",
                get(list_authors).post(create_author).options(authors_options),
            )
            .route(
                "/api/authors/{author_id}",
                get(get_author).delete(delete_author),
            )
            .with_state(state)
    }
}
