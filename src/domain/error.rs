use thiserror::Error;

/// Every failure the assistant can produce.
///
/// The `Display` output of the non-fatal variants is exactly what the user
/// sees in the response box.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("API error: {0}")]
    Upstream(String),

    #[error("Error: Unexpected response format from API")]
    UnexpectedFormat,

    #[error("An error occurred: {0}")]
    Transport(String),
}

impl DomainError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_strings() {
        assert_eq!(DomainError::upstream("bad key").to_string(), "API error: bad key");
        assert_eq!(
            DomainError::UnexpectedFormat.to_string(),
            "Error: Unexpected response format from API"
        );
        assert_eq!(
            DomainError::transport("connection refused").to_string(),
            "An error occurred: connection refused"
        );
    }
}
