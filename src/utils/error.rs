use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CepError {
    #[error("Invalid CEP: {message}")]
    InvalidInput { message: String },

    #[error("CEP not found: {cep}")]
    NotFound { cep: String },

    #[error("Upstream returned {status} for {url}")]
    UpstreamError { status: StatusCode, url: String },

    #[error("Failed to deserialize upstream response ({kind:?}): {source}")]
    DeserializationError {
        kind: DecodeFailure,
        #[source]
        source: serde_json::Error,
    },

    #[error("Address lookup failed: {0}")]
    LookupFailed(#[from] reqwest::Error),

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
    ConfigError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Why a successful response body could not become an `Address`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeFailure {
    /// The body is not JSON at all, or is truncated.
    Malformed,
    /// Valid JSON whose shape or value types do not fit.
    UnexpectedShape,
}

impl DecodeFailure {
    pub fn classify(err: &serde_json::Error) -> Self {
        use serde_json::error::Category;
        match err.classify() {
            Category::Data => DecodeFailure::UnexpectedShape,
            _ => DecodeFailure::Malformed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Upstream,
    Data,
    Network,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl CepError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CepError::InvalidInput {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            CepError::InvalidInput { .. } => ErrorCategory::Input,
            CepError::NotFound { .. } | CepError::UpstreamError { .. } => ErrorCategory::Upstream,
            CepError::DeserializationError { .. } => ErrorCategory::Data,
            CepError::LookupFailed(_) => ErrorCategory::Network,
            CepError::ConfigError { .. } => ErrorCategory::Configuration,
            CepError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CepError::InvalidInput { .. } | CepError::NotFound { .. } => ErrorSeverity::Medium,
            CepError::LookupFailed(_) => ErrorSeverity::Medium,
            CepError::UpstreamError { status, .. } if status.is_server_error() => {
                ErrorSeverity::Medium
            }
            CepError::UpstreamError { .. } | CepError::DeserializationError { .. } => {
                ErrorSeverity::High
            }
            CepError::ConfigError { .. } | CepError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CepError::InvalidInput { message } => format!("CEP inválido: {}", message),
            CepError::NotFound { cep } => format!("Nenhum endereço encontrado para o CEP {}.", cep),
            CepError::UpstreamError { status, .. } => format!(
                "Erro ao consultar o CEP no ViaCEP (HTTP {}).",
                status.as_u16()
            ),
            CepError::DeserializationError { .. } => {
                "Erro ao desserializar resposta do ViaCEP.".to_string()
            }
            CepError::LookupFailed(_) => {
                "Erro desconhecido ao consultar endereço no ViaCEP.".to_string()
            }
            CepError::ConfigError { field, reason, .. } => {
                format!("Configuração inválida em '{}': {}", field, reason)
            }
            CepError::IoError(e) => format!("Erro de entrada/saída: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CepError::InvalidInput { .. } => "Informe um CEP com 8 dígitos, por exemplo 01001-000.",
            CepError::NotFound { .. } => "Confira se o CEP está correto e tente novamente.",
            CepError::UpstreamError { status, .. } if status.is_server_error() => {
                "O serviço ViaCEP está instável; tente novamente em alguns instantes."
            }
            CepError::UpstreamError { .. } => "Verifique o CEP e a URL base configurada.",
            CepError::DeserializationError { .. } => {
                "A resposta do serviço mudou de formato; verifique a URL base configurada."
            }
            CepError::LookupFailed(_) => "Verifique sua conexão com a internet.",
            CepError::ConfigError { .. } => "Corrija os argumentos de linha de comando.",
            CepError::IoError(_) => "Verifique se a entrada padrão está disponível.",
        }
    }
}

pub type Result<T> = std::result::Result<T, CepError>;
