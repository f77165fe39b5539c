pub mod collections;
pub mod events;
pub mod health;

use axum::Router;
use rayob_core::content::{
    Clients, Hero, HomeAbout, Milestones, Services, Team, Testimonials, WhyRayob,
};

use crate::middleware::body_limit::body_limit_layer;
use crate::state::AppState;

/// Assemble the full router with all route groups.
pub fn build_router(state: AppState) -> Router {
    let max_body_bytes = state.config().max_body_bytes;

    Router::new()
        .merge(health::routes())
        .merge(events::routes())
        .merge(collections::routes::<Hero>())
        .merge(collections::routes::<Services>())
        .merge(collections::routes::<Testimonials>())
        .merge(collections::routes::<Milestones>())
        .merge(collections::routes::<Clients>())
        .merge(collections::routes::<Team>())
        .merge(collections::routes::<WhyRayob>())
        .merge(collections::routes::<HomeAbout>())
        .layer(body_limit_layer(max_body_bytes))
        .with_state(state)
}
