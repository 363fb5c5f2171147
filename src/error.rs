use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum GoofyError {
    #[error("missing required argument <TEXT>")]
    #[diagnostic(help("Pass the text to hash, or '-' to read it from stdin"))]
    MissingText,

    #[error("Failed to read stdin: {source}")]
    StdinRead {
        #[source]
        source: std::io::Error,
    },

    #[error("Stdin is not valid UTF-8: {source}")]
    #[diagnostic(help("Convert the input to UTF-8 before piping it in"))]
    InvalidStdinEncoding {
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Failed to serialize response JSON: {source}")]
    ResponseSerialization {
        #[source]
        source: serde_json::Error,
    },
}

impl GoofyError {
    /// Usage errors are followed by the help text on stderr.
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::MissingText)
    }

    pub fn to_error_response(&self) -> ErrorResponse {
        let kind = match self {
            Self::MissingText => "invalid_usage",
            Self::StdinRead { .. } => "io_error",
            Self::InvalidStdinEncoding { .. } => "invalid_encoding",
            Self::ResponseSerialization { .. } => "serialization_error",
        };

        ErrorResponse {
            error: ErrorBody {
                r#type: kind.to_string(),
                message: self.to_string(),
                suggestion: self.help().map(|help| help.to_string()),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub r#type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}
