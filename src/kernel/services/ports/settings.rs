use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_reply_latency_ms")]
    pub reply_latency_ms: u64,
    #[serde(default = "default_context_snippet_chars")]
    pub context_snippet_chars: usize,
    #[serde(default)]
    pub close_tab_focus: CloseTabFocus,
    #[serde(default = "default_new_file_name")]
    pub new_file_name: String,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

/// Where the active selection goes after a tab closes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CloseTabFocus {
    /// Always move to the last remaining tab, even when a background tab closed.
    #[default]
    LastRemaining,
    /// Keep the active tab if it is still open.
    KeepActive,
}

impl Settings {
    pub fn reply_latency(&self) -> Duration {
        Duration::from_millis(self.reply_latency_ms)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reply_latency_ms: default_reply_latency_ms(),
            context_snippet_chars: default_context_snippet_chars(),
            close_tab_focus: CloseTabFocus::default(),
            new_file_name: default_new_file_name(),
            log_filter: default_log_filter(),
        }
    }
}

fn default_reply_latency_ms() -> u64 {
    600
}

fn default_context_snippet_chars() -> usize {
    240
}

fn default_new_file_name() -> String {
    "feature.tsx".to_string()
}

fn default_log_filter() -> String {
    "agentic_workspace=info".to_string()
}
