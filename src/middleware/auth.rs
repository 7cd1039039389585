// src/middleware/auth.rs

use axum::{
    body::Body,
    extract::{FromRequestParts, State},
    http::{Request, header, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::{common::error::AppError, config::AppState, models::auth::Claims};

// O middleware em si: extrai o bearer token, verifica e anexa a
// identidade decodificada à requisição. Roda antes de qualquer handler
// protegido; o login é a única rota que não passa por aqui.
pub async fn auth_guard(
    State(app_state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let token = extract_bearer(auth_header)?;
    let claims = app_state.auth_service.tokens().verify(token)?;

    // Insere a identidade nos "extensions" da requisição
    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

// Ausência de cabeçalho e cabeçalho sem o segmento do token são erros
// distintos, cada um com sua mensagem.
fn extract_bearer(header: Option<&str>) -> Result<&str, AppError> {
    let header = header.ok_or(AppError::MissingToken)?;
    let token = header
        .strip_prefix("Bearer ")
        .ok_or(AppError::MalformedToken)?;
    if token.is_empty() {
        return Err(AppError::MalformedToken);
    }
    Ok(token)
}

// Extrator para obter a identidade autenticada diretamente nos handlers
pub struct AuthenticatedUser(pub Claims);

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthenticatedUser)
            .ok_or(AppError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_header_is_missing_token() {
        assert!(matches!(extract_bearer(None), Err(AppError::MissingToken)));
    }

    #[test]
    fn wrong_scheme_is_malformed() {
        assert!(matches!(
            extract_bearer(Some("Basic abc123")),
            Err(AppError::MalformedToken)
        ));
    }

    #[test]
    fn bearer_without_token_is_malformed() {
        assert!(matches!(
            extract_bearer(Some("Bearer ")),
            Err(AppError::MalformedToken)
        ));
        assert!(matches!(
            extract_bearer(Some("Bearer")),
            Err(AppError::MalformedToken)
        ));
    }

    #[test]
    fn well_formed_header_yields_the_token() {
        assert_eq!(extract_bearer(Some("Bearer abc.def.ghi")).unwrap(), "abc.def.ghi");
    }
}
