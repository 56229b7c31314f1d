use axum::{
    extract::DefaultBodyLimit,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    middleware,
    routing::{any, get},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::{uploads, AppState};

use super::{controller, middleware::origin::validate_origin};

pub fn build(state: AppState) -> Router {
    let envy = state.envy.clone();

    let allowed_origins: Vec<HeaderValue> = envy
        .allowed_origins()
        .iter()
        .filter_map(|origin| origin.trim_end_matches('/').parse().ok())
        .collect();
    let allow_origin = match allowed_origins.is_empty() {
        true => AllowOrigin::from(Any),
        false => AllowOrigin::list(allowed_origins),
    };
    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::POST, Method::GET]);

    let body_limit = match envy.max_upload_bytes {
        Some(max) => DefaultBodyLimit::max(max),
        None => DefaultBodyLimit::disable(),
    };

    let mut router = Router::new()
        .route("/", get(controller::get_root))
        // uploads
        .route("/api/upload", any(uploads::controller::upload_file))
        .route("/api/upload/", any(uploads::controller::upload_file))
        .route(
            "/api/uploads/:id",
            get(uploads::controller::get_uploaded_file_by_id),
        );

    // media
    if let Some(mount_path) = envy.media_mount_path() {
        router = router.nest_service(&mount_path, ServeDir::new(envy.media_root()));
    }

    router
        .layer(middleware::from_fn_with_state(state.clone(), validate_origin))
        .layer(body_limit)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
