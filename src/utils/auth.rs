use axum::extract::{Request, State};
use axum::http::{HeaderMap, header};
use axum::middleware::Next;
use axum::response::Response;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::user::Claim;
use crate::utils::token::TokenCodec;

pub(crate) const MISSING_TOKEN: &str = "Token não informado";
pub(crate) const INVALID_TOKEN: &str = "Token inválido";

/// Outcome of checking a request's credentials. The pipeline must branch on
/// it; a rejected request never reaches the handler.
#[derive(Debug)]
pub(crate) enum Access {
    Continue(Claim),
    Reject(Error),
}

/// Reads `Authorization: <scheme> <token>`. A header without a second
/// segment is verified as an empty token and rejected there.
pub(crate) fn check_access(headers: &HeaderMap, codec: &TokenCodec) -> Access {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .map(|value| value.to_str().unwrap_or_default())
        .unwrap_or_default();

    if authorization.is_empty() {
        tracing::debug!("no credentials provided");
        return Access::Reject(Error::auth(MISSING_TOKEN));
    }

    let token = authorization.split(' ').nth(1).unwrap_or_default();

    match codec.verify(token) {
        Ok(claim) => {
            tracing::debug!(user = claim.id, role = ?claim.role, "token verified");
            Access::Continue(claim)
        }
        Err(e) => {
            tracing::debug!("token rejected: {}", e);
            Access::Reject(Error::auth(INVALID_TOKEN))
        }
    }
}

pub(crate) async fn authorize(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, Error> {
    match check_access(request.headers(), &state.codec) {
        Access::Continue(claim) => {
            request.extensions_mut().insert(claim);
            Ok(next.run(request).await)
        }
        Access::Reject(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::user::Role;
    use axum::http::HeaderValue;
    use chrono::{Duration, Utc};

    fn claim() -> Claim {
        Claim {
            id: 1,
            name: "Ada".into(),
            email: "ada@adamax.com".into(),
            role: Role::User,
        }
    }

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    fn rejected_with(access: Access) -> String {
        match access {
            Access::Reject(Error::Auth(message)) => message,
            other => panic!("expected auth rejection, got {:?}", other),
        }
    }

    #[test]
    fn continues_with_verified_claim() {
        let codec = TokenCodec::new("secret");
        let token = codec.issue(&claim(), Duration::hours(1)).unwrap();

        match check_access(&headers(&format!("Bearer {token}")), &codec) {
            Access::Continue(identity) => assert_eq!(identity, claim()),
            other => panic!("expected continue, got {:?}", other),
        }
    }

    #[test]
    fn scheme_name_is_not_checked() {
        let codec = TokenCodec::new("secret");
        let token = codec.issue(&claim(), Duration::hours(1)).unwrap();

        assert!(matches!(
            check_access(&headers(&format!("Token {token}")), &codec),
            Access::Continue(_)
        ));
    }

    #[test]
    fn missing_header_rejects() {
        let codec = TokenCodec::new("secret");

        assert_eq!(rejected_with(check_access(&HeaderMap::new(), &codec)), MISSING_TOKEN);
    }

    #[test]
    fn header_without_token_rejects_as_invalid() {
        let codec = TokenCodec::new("secret");

        assert_eq!(rejected_with(check_access(&headers("Bearer"), &codec)), INVALID_TOKEN);
    }

    #[test]
    fn expired_or_foreign_tokens_reject() {
        let codec = TokenCodec::new("secret");
        let expired = codec
            .issue_at(&claim(), Duration::hours(24), Utc::now() - Duration::hours(25))
            .unwrap();
        let foreign = TokenCodec::new("other")
            .issue(&claim(), Duration::hours(24))
            .unwrap();

        assert_eq!(
            rejected_with(check_access(&headers(&format!("Bearer {expired}")), &codec)),
            INVALID_TOKEN
        );
        assert_eq!(
            rejected_with(check_access(&headers(&format!("Bearer {foreign}")), &codec)),
            INVALID_TOKEN
        );
    }
}
