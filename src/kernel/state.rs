use serde::Serialize;
use std::sync::Arc;

use crate::kernel::seed::{initial_workspace, INITIAL_ACTIVE_FILE, WELCOME_MESSAGE};
use crate::models::chat::now_millis;
use crate::models::{
    deep_clone, filter_tree, find_node, flatten_files, ChatMessage, ChatRole, MessageId,
    WorkspaceNode, WorkspaceTree,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PaletteState {
    pub query: String,
    pub selected: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkspaceState {
    pub files: WorkspaceTree,
    pub active_file_id: Option<String>,
    /// Display order of the tab strip.
    pub open_tabs: Vec<String>,
    /// Append-only.
    pub chat: Vec<ChatMessage>,
    pub is_command_palette_open: bool,
    pub palette: PaletteState,
}

impl WorkspaceState {
    pub fn new(files: WorkspaceTree) -> Self {
        Self {
            files,
            active_file_id: None,
            open_tabs: Vec::new(),
            chat: Vec::new(),
            is_command_palette_open: false,
            palette: PaletteState::default(),
        }
    }

    /// The sample workspace with `src/app.tsx` open and a welcome message.
    pub fn seeded() -> Self {
        let mut state = Self::new(deep_clone(initial_workspace()));
        state.active_file_id = Some(INITIAL_ACTIVE_FILE.to_string());
        state.open_tabs = vec![INITIAL_ACTIVE_FILE.to_string()];
        state.chat.push(ChatMessage {
            id: MessageId::generate(),
            role: ChatRole::Assistant,
            text: WELCOME_MESSAGE.to_string(),
            timestamp: now_millis(),
        });
        state
    }

    /// Open tabs resolved to file nodes, in tab order. Tabs that no longer
    /// point at a file are skipped here but stay in `open_tabs`.
    pub fn open_files(&self) -> Vec<Arc<WorkspaceNode>> {
        let files = flatten_files(&self.files);
        self.open_tabs
            .iter()
            .filter_map(|tab| files.iter().find(|file| &file.id == tab).cloned())
            .collect()
    }

    pub fn active_file(&self) -> Option<&Arc<WorkspaceNode>> {
        let id = self.active_file_id.as_deref()?;
        find_node(&self.files, id)
    }

    pub fn explorer_view(&self, query: &str) -> WorkspaceTree {
        filter_tree(&self.files, query)
    }
}
