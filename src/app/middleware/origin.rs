use axum::{
    extract::State,
    http::{header::ORIGIN, Method, Request},
    middleware::Next,
    response::Response,
};

use crate::{
    app::{errors::DefaultApiError, models::api_error::ApiError},
    AppState,
};

/// Rejects state-changing requests whose `Origin` is not in `ALLOWED_ORIGINS`.
///
/// Requests without an `Origin` header come from non-browser clients and pass.
pub async fn validate_origin<B>(
    State(state): State<AppState>,
    request: Request<B>,
    next: Next<B>,
) -> Result<Response, ApiError> {
    let allowed_origins = state.envy.allowed_origins();

    if allowed_origins.is_empty() || is_safe_method(request.method()) {
        return Ok(next.run(request).await);
    }

    let Some(origin) = request.headers().get(ORIGIN) else {
        return Ok(next.run(request).await);
    };

    let allowed = match origin.to_str() {
        Ok(origin) => allowed_origins
            .iter()
            .any(|allowed| allowed.trim_end_matches('/') == origin),
        Err(_) => false,
    };

    if !allowed {
        tracing::warn!(?origin, method = %request.method(), "rejected cross-origin request");
        return Err(DefaultApiError::OriginNotAllowed.value());
    }

    Ok(next.run(request).await)
}

fn is_safe_method(method: &Method) -> bool {
    matches!(
        *method,
        Method::GET | Method::HEAD | Method::OPTIONS | Method::TRACE
    )
}
