use thiserror::Error;

#[derive(Error, Debug)]
pub enum HolidazeError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Authentication required: {message}")]
    AuthError { message: String },

    #[error("The API rejected the request ({status}): {message}")]
    RequestRejectedError { status: u16, message: String },

    #[error("Booking conflict reported by the server: {message}")]
    BookingConflictError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Api,
    Config,
    Auth,
    Io,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl HolidazeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            HolidazeError::ApiError(_) => ErrorCategory::Network,
            HolidazeError::IoError(_) => ErrorCategory::Io,
            HolidazeError::SerializationError(_) => ErrorCategory::Data,
            HolidazeError::UrlError(_) => ErrorCategory::Config,
            HolidazeError::MissingConfigError { .. }
            | HolidazeError::InvalidConfigValueError { .. }
            | HolidazeError::ConfigValidationError { .. } => ErrorCategory::Config,
            HolidazeError::AuthError { .. } => ErrorCategory::Auth,
            HolidazeError::RequestRejectedError { .. }
            | HolidazeError::BookingConflictError { .. } => ErrorCategory::Api,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // The server-side conflict check is authoritative; the caller can
            // simply pick other dates, so this is not a hard failure.
            HolidazeError::BookingConflictError { .. } => ErrorSeverity::Medium,
            HolidazeError::ApiError(_) => ErrorSeverity::Medium,
            HolidazeError::RequestRejectedError { .. }
            | HolidazeError::AuthError { .. }
            | HolidazeError::SerializationError(_) => ErrorSeverity::High,
            HolidazeError::IoError(_)
            | HolidazeError::UrlError(_)
            | HolidazeError::MissingConfigError { .. }
            | HolidazeError::InvalidConfigValueError { .. }
            | HolidazeError::ConfigValidationError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Network => {
                "Check your network connection and that the API base URL is reachable".to_string()
            }
            ErrorCategory::Api => match self {
                HolidazeError::BookingConflictError { .. } => {
                    "The venue was booked by someone else in the meantime; pick different dates"
                        .to_string()
                }
                _ => "Inspect the reported API message; the request itself may be invalid"
                    .to_string(),
            },
            ErrorCategory::Config => {
                "Fix the configuration value (flags, TOML file or environment) and retry"
                    .to_string()
            }
            ErrorCategory::Auth => {
                "Run `holidaze login` to create a session, or pass a valid access token"
                    .to_string()
            }
            ErrorCategory::Io => "Check file permissions and paths".to_string(),
            ErrorCategory::Data => {
                "The API returned a payload this client does not understand; retry or report it"
                    .to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            HolidazeError::ApiError(e) => format!("Could not reach the booking API: {}", e),
            HolidazeError::AuthError { message } => format!("You are not signed in: {}", message),
            HolidazeError::BookingConflictError { message } => {
                format!("Those dates were just taken: {}", message)
            }
            HolidazeError::RequestRejectedError { message, .. } => {
                format!("The booking API said no: {}", message)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, HolidazeError>;
