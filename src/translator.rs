//! Language-pair translation core: prompt assembly and the completion call.
//!
//! The service is stateless. Its only dependency is a [`ChatCompletion`]
//! capability injected at construction, so everything up to the network
//! boundary is testable without a live endpoint.

use crate::languages;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Fixed fallback shown to users when a translation attempt fails.
///
/// Outer surfaces map any [`TranslateError`] to this string; the error
/// itself carries the cause for logging.
pub const FAILURE_MESSAGE: &str = "Translation failed. Please try again later.";

/// A role-tagged chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// Failure of a single translation call.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("translation API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("malformed API response: {0}")]
    Malformed(String),
}

/// Capability that turns a message sequence into a completion.
///
/// The production implementor is [`crate::openai::OpenAiClient`]; tests
/// substitute canned responses.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    async fn complete(&self, messages: &[Message]) -> Result<String, TranslateError>;
}

/// System instruction describing the annotation convention.
const SYSTEM_PROMPT: &str = "You are a translation engine. Every user message ends with two \
annotations: the source language wrapped in double curly braces and the target language \
wrapped in double square brackets. A source of {{Auto}} means you must detect the language \
of the text yourself. Reply with the translated text only, without annotations or commentary.";

/// Worked examples steering the model's output format and tone.
const EXAMPLES: [(&str, &str); 3] = [
    ("Hola mundo {{Español}} [[English]]", "Hello world"),
    (
        "Where is the train station? {{English}} [[Deutsch]]",
        "Wo ist der Bahnhof?",
    ),
    ("Guten Morgen {{Auto}} [[Español]]", "Buenos días"),
];

/// Annotate the input text with the resolved source and target names.
fn annotate(text: &str, source_name: &str, target_name: &str) -> String {
    format!("{} {{{{{}}}}} [[{}]]", text, source_name, target_name)
}

/// Build the full message sequence for one translation request.
///
/// Unknown codes resolve to an empty display name rather than rejecting
/// the request; the annotation format tolerates empty bracket contents.
pub fn build_messages(source: &str, target: &str, text: &str) -> Vec<Message> {
    let source_name = languages::input_name(source).unwrap_or_default();
    let target_name = languages::output_name(target).unwrap_or_default();

    let mut messages = Vec::with_capacity(EXAMPLES.len() * 2 + 2);
    messages.push(Message::system(SYSTEM_PROMPT));
    for (input, output) in EXAMPLES {
        messages.push(Message::user(input));
        messages.push(Message::assistant(output));
    }
    messages.push(Message::user(annotate(text, source_name, target_name)));
    messages
}

/// Stateless translation service over an injected completion capability.
#[derive(Clone)]
pub struct TranslationService {
    completion: Arc<dyn ChatCompletion>,
}

impl TranslationService {
    pub fn new(completion: Arc<dyn ChatCompletion>) -> Self {
        Self { completion }
    }

    /// Translate `text` from `source` to `target`.
    ///
    /// When source and target are equal the text is returned unchanged
    /// without contacting the completion backend. The equality check runs
    /// before any registry lookup.
    pub async fn translate(
        &self,
        source: &str,
        target: &str,
        text: &str,
    ) -> Result<String, TranslateError> {
        if source == target {
            return Ok(text.to_string());
        }

        let messages = build_messages(source, target, text);
        self.completion.complete(&messages).await
    }
}
