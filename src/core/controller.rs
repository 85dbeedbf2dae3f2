use std::sync::Arc;
use axum::http::StatusCode;
use crate::catalog::domain::CatalogService;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;

#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub catalog: Arc<dyn CatalogService>,
}

impl AppState {
    pub fn new(config: Configuration, catalog: Arc<dyn CatalogService>) -> AppState {
        AppState {
            config,
            catalog,
        }
    }
}

pub type ServerError = (StatusCode, String);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, format!("{}", err))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::DuplicateKey { .. } => {
                (StatusCode::CONFLICT, format!("{:?}", err))
            }
            CommandError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, format!("{:?}", err))
            }
            CommandError::Unavailable { .. } => {
                (StatusCode::CONFLICT, format!("{:?}", err))
            }
            CommandError::LimitExceeded { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, format!("{:?}", err))
            }
            CommandError::NotBorrowed { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, format!("{:?}", err))
            }
            CommandError::Validation { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::Serialization { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::Runtime { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use crate::core::command::CommandError;
    use crate::core::controller::ServerError;

    #[tokio::test]
    async fn test_should_map_command_errors() {
        let status = |err: CommandError| ServerError::from(err).0;
        assert_eq!(StatusCode::CONFLICT, status(CommandError::DuplicateKey { message: "test".to_string() }));
        assert_eq!(StatusCode::NOT_FOUND, status(CommandError::NotFound { message: "test".to_string() }));
        assert_eq!(StatusCode::CONFLICT, status(CommandError::Unavailable { message: "test".to_string() }));
        assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, status(CommandError::LimitExceeded { message: "test".to_string(), limit: 2 }));
        assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, status(CommandError::NotBorrowed { message: "test".to_string() }));
        assert_eq!(StatusCode::BAD_REQUEST, status(CommandError::Validation { message: "test".to_string(), reason_code: None }));
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, status(CommandError::Runtime { message: "test".to_string(), reason_code: None }));
    }
}
