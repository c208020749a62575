/// The expertise levels offered by the form.
///
/// The assistant never validates against this set: whatever string the caller
/// supplies is forwarded into the prompt. These variants only drive the
/// selector and the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExpertiseLevel {
    #[default]
    General,
    Technical,
    Expert,
}

impl ExpertiseLevel {
    pub const ALL: [ExpertiseLevel; 3] = [
        ExpertiseLevel::General,
        ExpertiseLevel::Technical,
        ExpertiseLevel::Expert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpertiseLevel::General => "general",
            ExpertiseLevel::Technical => "technical",
            ExpertiseLevel::Expert => "expert",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == s)
    }
}

impl std::fmt::Display for ExpertiseLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_general() {
        assert_eq!(ExpertiseLevel::default(), ExpertiseLevel::General);
        assert_eq!(ExpertiseLevel::default().as_str(), "general");
    }

    #[test]
    fn test_parse_known_levels() {
        assert_eq!(ExpertiseLevel::parse("technical"), Some(ExpertiseLevel::Technical));
        assert_eq!(ExpertiseLevel::parse("expert"), Some(ExpertiseLevel::Expert));
        assert_eq!(ExpertiseLevel::parse("Expert"), None);
        assert_eq!(ExpertiseLevel::parse("wizard"), None);
    }
}
