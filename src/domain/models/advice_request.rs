use super::ExpertiseLevel;

/// A single question put to the assistant.
///
/// `expertise` is kept as a free string: unknown values are passed through to
/// the prompt untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdviceRequest {
    query: String,
    expertise: String,
}

impl AdviceRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            expertise: ExpertiseLevel::default().as_str().to_string(),
        }
    }

    pub fn with_expertise(mut self, expertise: impl Into<String>) -> Self {
        self.expertise = expertise.into();
        self
    }

    pub fn expertise(&self) -> &str {
        &self.expertise
    }

    /// The user message sent to the model. Expertise travels as prompt text
    /// only, never as a separate API parameter.
    pub fn user_prompt(&self) -> String {
        format!(
            "User expertise level: {}\nQuery: {}",
            self.expertise, self.query
        )
    }
}
