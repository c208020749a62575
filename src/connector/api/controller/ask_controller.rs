use anyhow::Result;

use super::super::Container;

pub struct AskController<'a> {
    container: &'a Container,
}

impl<'a> AskController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// Answers and failures come back the same way: as the text to display.
    pub async fn ask(&self, query: String, expertise: String) -> Result<String> {
        let use_case = self.container.ask_use_case();
        let outcome = use_case.ask(&query, &expertise).await;
        Ok(outcome.into_text())
    }
}
