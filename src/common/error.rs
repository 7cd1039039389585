use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Requisição sem token")]
    MissingToken,

    #[error("Cabeçalho Authorization malformado")]
    MalformedToken,

    #[error("Token inválido")]
    InvalidToken,

    #[error("Token expirado")]
    ExpiredToken,

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Conta inativa")]
    InactiveAccount,

    #[error("Capacidade '{0}' necessária")]
    MissingCapability(&'static str),

    #[error("Recurso duplicado: {0}")]
    DuplicateResource(String),

    #[error("Recurso não encontrado")]
    NotFound,

    #[error("Usuário sem empresa associada")]
    NoCompany,

    #[error("Falha no envio de e-mail: {0}")]
    MailError(String),

    // Variante para erros de banco de dados
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::MissingToken => (StatusCode::UNAUTHORIZED, "No token provided".to_string()),
            AppError::MalformedToken => (StatusCode::UNAUTHORIZED, "Malformed token".to_string()),
            // Token expirado responde exatamente como token inválido: o
            // cliente não deve conseguir distinguir os dois casos.
            AppError::InvalidToken | AppError::ExpiredToken => {
                (StatusCode::UNAUTHORIZED, "Invalid token".to_string())
            }
            AppError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "E-mail ou senha inválidos.".to_string())
            }
            AppError::InactiveAccount => (StatusCode::FORBIDDEN, "Usuário inativo.".to_string()),
            AppError::MissingCapability(cap) => (
                StatusCode::FORBIDDEN,
                format!("Você precisa da capacidade '{}' para acessar este recurso.", cap),
            ),
            AppError::DuplicateResource(what) => (StatusCode::CONFLICT, what),
            AppError::NotFound => (StatusCode::NOT_FOUND, "Recurso não encontrado.".to_string()),
            AppError::NoCompany => (
                StatusCode::BAD_REQUEST,
                "Usuário não pertence a nenhuma empresa.".to_string(),
            ),

            // Todos os outros erros (DatabaseError, MailError, etc.) viram 500.
            // O `tracing` loga a mensagem detalhada; o cliente recebe o genérico.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Ocorreu um erro inesperado.".to_string(),
                )
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
