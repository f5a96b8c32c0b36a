use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    middleware as axum_middleware, Router,
};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    api,
    error::panic_response,
    middleware::{request_log, REQUEST_ID_HEADER, RESPONSE_TIME_HEADER},
    ApiDoc, AppState,
};

/// Full application router: routes, documentation and middleware stack.
pub fn build_app(state: AppState) -> Router {
    build_app_with(state, Router::new())
}

/// Same as [`build_app`] with `extra` routes mounted under the same
/// middleware stack.
pub fn build_app_with(state: AppState, extra: Router<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([REQUEST_ID_HEADER, RESPONSE_TIME_HEADER]);

    Router::new()
        .merge(api::routes())
        .merge(extra)
        .merge(SwaggerUi::new("/swagger").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(api::not_found)
        .layer(DefaultBodyLimit::max(state.config.body_limit_bytes))
        .layer(
            ServiceBuilder::new()
                .layer(axum_middleware::from_fn_with_state(
                    state.clone(),
                    request_log,
                ))
                .layer(CatchPanicLayer::custom(panic_response))
                .layer(cors),
        )
        .with_state(state)
}
