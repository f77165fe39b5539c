use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::TypedHeader;
use rayob_core::auth::Claims;

use crate::error::ApiError;
use crate::state::AppState;

/// A caller allowed to change site content: a valid bearer token whose role
/// is `admin` or `staff-member`.
#[derive(Debug, Clone)]
pub struct Editor(pub Claims);

impl FromRequestParts<AppState> for Editor {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::Unauthorized)?;

        let claims = state.token_keys().verify(bearer.token()).map_err(|err| {
            tracing::debug!("Rejected bearer token: {err}");
            ApiError::Unauthorized
        })?;

        if !claims.role.can_edit() {
            return Err(ApiError::Forbidden(
                "this account may not change site content".to_string(),
            ));
        }

        Ok(Editor(claims))
    }
}
