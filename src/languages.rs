//! Language catalog: single source of truth for supported languages.
//!
//! Input languages are what a user may declare as the source of the text,
//! including the auto-detect sentinel. Output languages are the valid
//! translation targets and never include the sentinel.

use serde::Serialize;

/// A supported language: short identifier plus display name.
///
/// Display names are native names ("Español", not "Spanish") because they
/// are embedded verbatim in the prompt annotations sent to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    /// Short language code ("en", "es", "de") or the auto sentinel
    pub code: &'static str,

    /// Native display name
    pub name: &'static str,
}

/// Source-only sentinel instructing the model to detect the language itself.
pub const AUTO_CODE: &str = "auto";

const AUTO: Language = Language {
    code: AUTO_CODE,
    name: "Auto",
};
const ENGLISH: Language = Language {
    code: "en",
    name: "English",
};
const SPANISH: Language = Language {
    code: "es",
    name: "Español",
};
const GERMAN: Language = Language {
    code: "de",
    name: "Deutsch",
};

/// Languages a user may pick as the source of the text.
///
/// Returns a fresh catalog on every call; the order is fixed and the
/// auto-detect sentinel always comes first.
pub fn input_languages() -> Vec<Language> {
    vec![AUTO, ENGLISH, SPANISH, GERMAN]
}

/// Languages a user may pick as the translation target.
///
/// Returns a fresh catalog on every call. Never includes the auto sentinel.
pub fn output_languages() -> Vec<Language> {
    vec![ENGLISH, SPANISH, GERMAN]
}

/// Resolve a source-language code to its display name.
pub fn input_name(code: &str) -> Option<&'static str> {
    input_languages()
        .iter()
        .find(|lang| lang.code == code)
        .map(|lang| lang.name)
}

/// Resolve a target-language code to its display name.
pub fn output_name(code: &str) -> Option<&'static str> {
    output_languages()
        .iter()
        .find(|lang| lang.code == code)
        .map(|lang| lang.name)
}
