//! Session middleware
//!
//! Every request is tied to a session id carried in a cookie. Requests
//! without a valid id get a new one, and the cookie is set on the response.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use uuid::Uuid;

use crate::error::{ErrorDetail, ErrorResponse};
use crate::AppState;

/// Session id resolved for the current request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionId(pub Uuid);

/// Attach a session id to the request, issuing a cookie when needed
pub async fn session_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let cookie_name = state.config.session.cookie_name.clone();

    let existing = jar
        .get(&cookie_name)
        .and_then(|cookie| Uuid::parse_str(cookie.value()).ok());

    let (session_id, is_new) = match existing {
        Some(id) => (id, false),
        None => (Uuid::new_v4(), true),
    };

    request.extensions_mut().insert(SessionId(session_id));
    let response = next.run(request).await;

    if is_new {
        tracing::debug!("Issued session {}", session_id);
        let cookie = Cookie::build((cookie_name, session_id.to_string()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax);
        (jar.add(cookie), response).into_response()
    } else {
        response
    }
}

/// Extractor for the current session id
/// Use this in handlers to reach the session store
#[derive(Clone, Copy, Debug)]
pub struct CurrentSession(pub Uuid);

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionId>()
            .map(|id| CurrentSession(id.0))
            .ok_or_else(|| {
                let error = ErrorResponse {
                    error: ErrorDetail {
                        code: "SESSION_MISSING".to_string(),
                        message_en: "No session attached to request".to_string(),
                        message_pt: "Sessão não encontrada".to_string(),
                        field: None,
                    },
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(error))
            })
    }
}
