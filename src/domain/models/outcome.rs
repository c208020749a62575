use crate::domain::DomainError;

/// Result of one question: either the model's answer or a display-ready
/// failure message. Both are shown to the user the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Answer(String),
    Failure(String),
}

impl Outcome {
    pub fn is_answer(&self) -> bool {
        matches!(self, Outcome::Answer(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    pub fn text(&self) -> &str {
        match self {
            Outcome::Answer(text) | Outcome::Failure(text) => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Outcome::Answer(text) | Outcome::Failure(text) => text,
        }
    }
}

impl From<Result<String, DomainError>> for Outcome {
    fn from(result: Result<String, DomainError>) -> Self {
        match result {
            Ok(answer) => Outcome::Answer(answer),
            Err(e) => Outcome::Failure(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ok_is_answer() {
        let outcome = Outcome::from(Ok("Use monocrystalline panels.".to_string()));
        assert_eq!(outcome, Outcome::Answer("Use monocrystalline panels.".to_string()));
        assert!(outcome.is_answer());
        assert!(!outcome.is_failure());
    }

    #[test]
    fn test_from_err_uses_display_string() {
        let outcome = Outcome::from(Err(DomainError::upstream("bad key")));
        assert_eq!(outcome, Outcome::Failure("API error: bad key".to_string()));
        assert!(outcome.is_failure());
    }

    #[test]
    fn test_text_is_the_same_for_both_variants() {
        assert_eq!(Outcome::Answer("a".into()).text(), "a");
        assert_eq!(Outcome::Failure("b".into()).into_text(), "b");
    }
}
