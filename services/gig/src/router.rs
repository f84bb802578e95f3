use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use gig_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    game::{create_game, delete_game, get_game, list_games, replace_game, update_game},
    health::{healthz, readyz},
    saved::{add_to_saved, list_saved, remove_from_saved},
    tag::{list_developers, list_genres, list_platforms, list_publishers, list_themes},
    user::{create_token, create_user, get_me, update_me},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Users
        .route("/users", post(create_user))
        .route("/users/token", post(create_token))
        .route("/users/@me", get(get_me).patch(update_me))
        // Tags
        .route("/gig/genres", get(list_genres))
        .route("/gig/themes", get(list_themes))
        .route("/gig/platforms", get(list_platforms))
        .route("/gig/developers", get(list_developers))
        .route("/gig/publishers", get(list_publishers))
        // Games
        .route("/gig/games", get(list_games).post(create_game))
        .route(
            "/gig/games/{id}",
            get(get_game)
                .put(replace_game)
                .patch(update_game)
                .delete(delete_game),
        )
        .route(
            "/gig/games/{id}/add-to-saved",
            get(add_to_saved).post(add_to_saved),
        )
        .route(
            "/gig/games/{id}/remove-from-saved",
            get(remove_from_saved).post(remove_from_saved),
        )
        // Saved
        .route("/gig/saved", get(list_saved))
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(TraceLayer::new_for_http())
                .layer(propagate_request_id_layer()),
        )
        .with_state(state)
}
