use axum::{
    extract::Request,
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Response},
};
use delivery::{Identity, Role};

use crate::error::AppError;

const ID_HEADER: &str = "x-user-id";
const NAME_HEADER: &str = "x-user-name";
const EMAIL_HEADER: &str = "x-user-email";
const ROLE_HEADER: &str = "x-user-role";

/// Identity extraction middleware for routes that need an authenticated actor.
///
/// The identity provider is an external collaborator; it terminates
/// authentication upstream and forwards the actor as trusted headers. This
/// middleware only reshapes those headers into an [`Identity`] extension and
/// rejects requests where they are missing or malformed. No authorization
/// happens here or anywhere in the core.
pub async fn identity_middleware(mut req: Request, next: Next) -> Response {
    let identity = match identity_from_headers(req.headers()) {
        Ok(identity) => identity,
        Err(reason) => {
            tracing::warn!(reason, "rejecting request without usable identity");
            return AppError::Unauthorized(reason.to_string()).into_response();
        }
    };

    req.extensions_mut().insert(identity);
    next.run(req).await
}

fn identity_from_headers(headers: &HeaderMap) -> Result<Identity, &'static str> {
    let header = |name: &str| -> Option<String> {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .filter(|v| !v.is_empty())
    };

    let id = header(ID_HEADER).ok_or("missing x-user-id header")?;
    let name = header(NAME_HEADER).ok_or("missing x-user-name header")?;
    let email = header(EMAIL_HEADER).ok_or("missing x-user-email header")?;
    let role: Role = header(ROLE_HEADER)
        .ok_or("missing x-user-role header")?
        .parse()
        .map_err(|_| "unknown x-user-role, expected sender, receiver or post-office")?;

    Ok(Identity {
        id,
        name,
        email,
        role,
    })
}
