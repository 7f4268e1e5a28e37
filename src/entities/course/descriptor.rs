//! Route descriptor for the courses of an author

use super::handlers::{create_course, delete_course, get_course, list_courses, upsert_course};
use crate::server::entity_registry::EntityDescriptor;
use crate::server::middleware::cache_headers;
use crate::server::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};

pub struct CourseDescriptor;

impl EntityDescriptor for CourseDescriptor {
    fn entity_type(&self) -> &str {
        "course"
    }

    fn plural(&self) -> &str {
        "courses"
    }

    fn build_routes(&self, state: AppState) -> Router {
        Router::new()
            .route(
                "/api/authors/{author_id}/courses",
                get(list_courses).post(create_course),
            )
            .route(
                "/api/authors/{author_id}/courses/{course_id}",
                get(get_course).put(upsert_course).delete(delete_course),
            )
            .layer(middleware::from_fn_with_state(
                state.config.cache.clone(),
                cache_headers,
            ))
            .with_state(state)
    }
}
