//! Prompt template rendering.

/// Substitution marker recognized in the configured template.
const PROMPT_MARKER: &str = "{prompt}";

/// A fixed template string with a single substitution point.
///
/// The template comes from deployment configuration and is immutable for
/// the process lifetime.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    template: String,
}

impl PromptTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Replace the first occurrence of the marker with the caller's text.
    ///
    /// The text is inserted verbatim, without escaping. A template that
    /// carries no marker is returned unchanged.
    pub fn render(&self, prompt: &str) -> String {
        self.template.replacen(PROMPT_MARKER, prompt, 1)
    }
}
