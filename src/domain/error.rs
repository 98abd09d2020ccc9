use thiserror::Error;

/// Failure raised by a provider connector.
///
/// Every variant carries a human-readable message and maps to an HTTP-like
/// status through [`ConnectorError::status_hint`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectorError {
    /// Credential rejected before any network call (format check).
    #[error("{0}")]
    InvalidCredential(String),

    /// The provider answered with a non-success status.
    #[error("{message}")]
    UpstreamRejected { status: u16, message: String },

    /// The request never produced a response (DNS, connect, timeout).
    #[error("{0}")]
    Transport(String),

    /// The provider answered 2xx but the body lacked the expected fields.
    #[error("{0}")]
    UnexpectedResponse(String),

    /// The model's category is not one this connector knows how to serve.
    #[error("{provider} connector does not support '{category}' models")]
    UnsupportedCategory { provider: String, category: String },

    #[error("{0} is not implemented for this provider")]
    Unimplemented(String),
}

impl ConnectorError {
    pub fn invalid_credential(msg: impl Into<String>) -> Self {
        Self::InvalidCredential(msg.into())
    }

    pub fn upstream(status: u16, msg: impl Into<String>) -> Self {
        Self::UpstreamRejected {
            status,
            message: msg.into(),
        }
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn unexpected_response(msg: impl Into<String>) -> Self {
        Self::UnexpectedResponse(msg.into())
    }

    pub fn unsupported_category(provider: impl Into<String>, category: impl Into<String>) -> Self {
        Self::UnsupportedCategory {
            provider: provider.into(),
            category: category.into(),
        }
    }

    pub fn status_hint(&self) -> u16 {
        match self {
            Self::InvalidCredential(_) => 401,
            // An upstream that answered with something outside 4xx/5xx is still a failure.
            Self::UpstreamRejected { status, .. } if (400..600).contains(status) => *status,
            Self::UpstreamRejected { .. } => 500,
            Self::Transport(_) | Self::UnexpectedResponse(_) | Self::UnsupportedCategory { .. } => {
                500
            }
            Self::Unimplemented(_) => 501,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn is_credential_error(&self) -> bool {
        matches!(self.status_hint(), 401 | 403)
    }
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Catalog and registry disagree (unknown provider key, bad category).
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error(transparent)]
    Connector(#[from] ConnectorError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl DomainError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// HTTP status used when this error crosses the transport boundary.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidInput(_) => 400,
            Self::NotFound(_) => 404,
            Self::Connector(e) => e.status_hint(),
            Self::Configuration(_) | Self::Catalog(_) | Self::IoError(_) => 500,
        }
    }

    /// Message shown to callers, without the variant prefix.
    pub fn client_message(&self) -> String {
        match self {
            Self::InvalidInput(msg)
            | Self::NotFound(msg)
            | Self::Configuration(msg)
            | Self::Catalog(msg) => msg.clone(),
            Self::Connector(e) => e.message(),
            Self::IoError(e) => e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_hints_follow_error_taxonomy() {
        assert_eq!(ConnectorError::invalid_credential("bad").status_hint(), 401);
        assert_eq!(ConnectorError::upstream(403, "forbidden").status_hint(), 403);
        assert_eq!(ConnectorError::upstream(302, "moved").status_hint(), 500);
        assert_eq!(ConnectorError::transport("down").status_hint(), 500);
        assert_eq!(ConnectorError::unexpected_response("no choices").status_hint(), 500);
        assert_eq!(ConnectorError::Unimplemented("sendRequest".into()).status_hint(), 501);
    }

    #[test]
    fn domain_status_codes_keep_config_and_lookup_distinct() {
        assert_eq!(DomainError::invalid_input("x").status_code(), 400);
        assert_eq!(DomainError::not_found("Model not found").status_code(), 404);
        assert_eq!(DomainError::configuration("no connector").status_code(), 500);

        let err: DomainError = ConnectorError::invalid_credential("Invalid API key format").into();
        assert_eq!(err.status_code(), 401);
        assert_eq!(err.client_message(), "Invalid API key format");
    }

    #[test]
    fn credential_errors_are_classified() {
        assert!(ConnectorError::upstream(401, "bad key").is_credential_error());
        assert!(ConnectorError::invalid_credential("bad key").is_credential_error());
        assert!(!ConnectorError::transport("down").is_credential_error());
    }
}
