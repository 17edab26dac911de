#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum LanguageId {
    TypeScript,
    Markdown,
    Rust,
    Json,
    PlainText,
}

impl LanguageId {
    /// Guesses from the text after the last dot; unknown extensions are plain text.
    pub fn from_name(name: &str) -> Self {
        let Some((_, ext)) = name.rsplit_once('.') else {
            return Self::PlainText;
        };
        match ext.to_ascii_lowercase().as_str() {
            "ts" | "tsx" => Self::TypeScript,
            "md" => Self::Markdown,
            "rs" => Self::Rust,
            "json" => Self::Json,
            _ => Self::PlainText,
        }
    }

    pub fn language_id(self) -> &'static str {
        match self {
            Self::TypeScript => "typescript",
            Self::Markdown => "markdown",
            Self::Rust => "rust",
            Self::Json => "json",
            Self::PlainText => "plaintext",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/language.rs"]
mod tests;
