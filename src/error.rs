use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
    #[error("ApiError: {0}")]
    Api(#[from] ApiError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
    #[error("DisplayError: {0}")]
    Display(#[from] DisplayError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Authentication required")]
    AuthRequired { message: String, hint: String },
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("Command not implemented: {command}")]
    NotImplemented { command: String },
}

/// Classified API failure. Every transport or HTTP error is normalized
/// into one of these before it crosses a component boundary.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: ErrorKind,
    /// Raw message as received from the transport or server.
    pub message: String,
    /// Message suitable for direct display to the user.
    pub user_message: String,
    pub retryable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Timeout,
    Auth,
    Server,
    Validation,
    Unknown,
}

impl ErrorKind {
    pub fn title(&self) -> &'static str {
        match self {
            ErrorKind::Network => "Network Error",
            ErrorKind::Timeout => "Timeout Error",
            ErrorKind::Server => "Server Error",
            ErrorKind::Auth => "Authentication Error",
            ErrorKind::Validation => "Validation Error",
            ErrorKind::Unknown => "Error",
        }
    }

    fn default_user_message(&self) -> &'static str {
        match self {
            ErrorKind::Network => "Please check your internet connection and try again.",
            ErrorKind::Timeout => "The server is taking too long to respond. Please try again.",
            ErrorKind::Auth => "Your session has expired. Please login again.",
            ErrorKind::Server => {
                "Our servers are temporarily unavailable. Please try again in a few minutes."
            }
            ErrorKind::Validation => "Please check your input and try again.",
            ErrorKind::Unknown => "Something went wrong. Please try again.",
        }
    }

    fn default_retryable(&self) -> bool {
        !matches!(self, ErrorKind::Auth | ErrorKind::Validation)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

impl ApiError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        let message = message.into();
        // Validation messages are assumed already user-appropriate and
        // pass through verbatim.
        let user_message = match kind {
            ErrorKind::Validation => message.clone(),
            _ => kind.default_user_message().to_string(),
        };
        Self {
            kind,
            message,
            user_message,
            retryable: kind.default_retryable(),
        }
    }

    /// Classify from an opaque message string. Substring matching,
    /// first rule wins, so a message containing both "network" and
    /// "Invalid" classifies as Network.
    pub fn from_message(message: impl Into<String>) -> Self {
        let message = message.into();
        let kind = if message.contains("Network request failed")
            || message.contains("No internet")
            || message.contains("network")
        {
            ErrorKind::Network
        } else if message.contains("timeout")
            || message.contains("Timeout")
            || message.contains("timed out")
        {
            ErrorKind::Timeout
        } else if message.contains("Unauthorized")
            || message.contains("401")
            || message.contains("Invalid credentials")
        {
            ErrorKind::Auth
        } else if message.contains("500")
            || message.contains("502")
            || message.contains("503")
            || message.contains("Server error")
        {
            ErrorKind::Server
        } else if message.contains("Validation")
            || message.contains("Invalid")
            || message.contains("required")
        {
            ErrorKind::Validation
        } else {
            ErrorKind::Unknown
        };
        Self::new(kind, message)
    }

    /// Classify from an HTTP status code. The status is authoritative
    /// where it is unambiguous; anything else falls back to message
    /// matching.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        match status {
            401 | 403 => Self::new(ErrorKind::Auth, message),
            408 | 504 => Self::new(ErrorKind::Timeout, message),
            500..=599 => Self::new(ErrorKind::Server, message),
            _ => Self::from_message(message),
        }
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Timeout, message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Network, message)
    }
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Keyring error: {0}")]
    KeyringError(String),
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration save failed")]
    ConfigSaveFailed,
    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String, hint: String },
    #[error("Invalid configuration value for '{field}': {value}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("Table formatting failed: {0}")]
    TableFormat(String),
    #[error("Terminal output error: {0}")]
    TerminalOutput(String),
}

impl AppError {
    pub fn display_friendly(&self) -> String {
        match self {
            AppError::Api(api_error) => api_error.user_message.clone(),
            _ => format!("{}", self),
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Api(api_error) => match api_error.kind {
                ErrorKind::Auth => Some("'resv-cli auth login' to start a new session".to_string()),
                ErrorKind::Network | ErrorKind::Timeout => {
                    Some("Check your internet connection and try again".to_string())
                }
                _ if api_error.retryable => Some("Try the command again".to_string()),
                _ => None,
            },
            AppError::Cli(CliError::AuthRequired { hint, .. }) => Some(hint.clone()),
            AppError::Config(ConfigError::FileNotFound { hint, .. }) => Some(hint.clone()),
            _ => None,
        }
    }
}
