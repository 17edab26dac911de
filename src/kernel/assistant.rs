//! Scripted assistant replies.
//!
//! Keyword rules are checked in order against the lowercased prompt and the
//! first hit wins. Prompts that match nothing get a random canned suggestion.

use rand::seq::IndexedRandom;

use crate::models::WorkspaceNode;

pub const TEST_REPLY: &str =
    "I'll outline a Vitest suite that covers the critical render and interaction paths.";
pub const REFACTOR_REPLY: &str =
    "Let's refactor this by splitting the component and introducing composable primitives.";
pub const FIX_REPLY: &str =
    "I'll craft a focused patch that resolves the bug and adds regression coverage.";
pub const EXPLAIN_REPLY: &str = "Let me break down the important pieces of this file for you.";
const EXPLAIN_WITH_CONTEXT_PREFIX: &str = "Here's a walkthrough based on the current file: ";

pub static CANNED_RESPONSES: &[&str] = &[
    "Let's explore how we can simplify this file and remove unnecessary state.",
    "I can scaffold unit tests targeting the core hooks and flows.",
    "Consider extracting shared logic into a utility to keep components lean.",
    "We should annotate the API surface with JSDoc to improve discoverability.",
];

/// `context_snippet` is used verbatim; see [`context_snippet`] for the
/// normalization callers are expected to apply.
pub fn reply(prompt: &str, context_snippet: Option<&str>) -> String {
    let normalized = prompt.to_lowercase();

    if normalized.contains("test") {
        return TEST_REPLY.to_string();
    }
    if normalized.contains("refactor") {
        return REFACTOR_REPLY.to_string();
    }
    if ["bug", "fix", "error"].iter().any(|kw| normalized.contains(kw)) {
        return FIX_REPLY.to_string();
    }
    if normalized.contains("explain") {
        return match context_snippet {
            Some(snippet) if !snippet.is_empty() => {
                format!("{EXPLAIN_WITH_CONTEXT_PREFIX}{snippet}")
            }
            _ => EXPLAIN_REPLY.to_string(),
        };
    }

    CANNED_RESPONSES
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(EXPLAIN_REPLY)
        .to_string()
}

/// First `limit` chars of the trimmed file content with every whitespace run
/// collapsed to one space. `None` for folders and empty files.
pub fn context_snippet(file: &WorkspaceNode, limit: usize) -> Option<String> {
    let content = file.content().filter(|c| !c.is_empty())?;

    let mut out = String::new();
    let mut in_space = false;
    for ch in content.trim().chars().take(limit) {
        if ch.is_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(ch);
            in_space = false;
        }
    }

    (!out.is_empty()).then_some(out)
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/assistant.rs"]
mod tests;
