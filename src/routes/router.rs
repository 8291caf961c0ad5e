use axum::{
    Json, Router,
    extract::{MatchedPath, Request},
    http::{Method, StatusCode, header},
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{self, CorsLayer},
    trace::TraceLayer,
};
use tracing::info_span;

use crate::core::error;
use crate::core::state::AppState;
use crate::routes::{auth, avatars, catalog, profiles};
use crate::utils;

pub(crate) fn routes(state: AppState) -> Router {
    let authorized_routes = Router::new()
        .route("/api/avatar", get(avatars::get))
        .route("/api/profile", get(profiles::list).post(profiles::post))
        .route(
            "/api/profile/{id}",
            get(profiles::get)
                .put(profiles::put)
                .delete(profiles::delete),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            utils::auth::authorize,
        ));

    let router = Router::new()
        .route("/api/", get(health))
        .route("/api/signIn", post(auth::sign_in))
        .route("/api/banners", get(catalog::banners))
        .route("/api/trail-offers", get(catalog::trail_offers))
        .route("/api/trail-offers/{id}", get(catalog::trail_offer))
        .merge(authorized_routes)
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .with_state(state);

    with_layers(router)
}

/// Tracing, panic recovery and CORS, outermost first.
fn with_layers(router: Router) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                    let matched_path = request
                        .extensions()
                        .get::<MatchedPath>()
                        .map(MatchedPath::as_str);

                    info_span!(
                        "request",
                        method = ?request.method(),
                        matched_path,
                    )
                }),
            )
            .layer(CatchPanicLayer::custom(error::handle_panic))
            .layer(
                CorsLayer::new()
                    .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                    .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
                    .allow_origin(cors::Any),
            ),
    )
}

async fn health() -> impl IntoResponse {
    Json(json!({ "message": "Ada Max is alive" }))
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "Page Not Found" })),
    )
}
