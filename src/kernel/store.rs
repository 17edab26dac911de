use std::sync::Arc;

use uuid::Uuid;

use super::assistant::{self, context_snippet};
use super::palette::{self, PaletteCommand, PALETTE_ITEMS};
use super::services::ports::{CloseTabFocus, Settings};
use super::{Action, Effect, LanguageId, PaletteState, WorkspaceError, WorkspaceState};
use crate::models::chat::now_millis;
use crate::models::{
    duplicate_id, insert_child, same_tree, update_content, ChatDraft, ChatMessage, ChatRole,
    MessageId, WorkspaceNode, WorkspaceTree,
};

const NEW_FILE_PLACEHOLDER: &str = "// TODO: Prompt the assistant to scaffold this file\n";

#[derive(Debug, Default)]
pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
    /// Set when the action was refused; the state is untouched in that case.
    pub rejection: Option<WorkspaceError>,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self::default()
    }

    fn changed(state_changed: bool) -> Self {
        Self {
            state_changed,
            ..Self::default()
        }
    }

    fn rejected(err: WorkspaceError) -> Self {
        Self {
            rejection: Some(err),
            ..Self::default()
        }
    }

    fn merge(&mut self, other: DispatchResult) {
        self.effects.extend(other.effects);
        self.state_changed |= other.state_changed;
        if self.rejection.is_none() {
            self.rejection = other.rejection;
        }
    }
}

pub struct Store {
    state: WorkspaceState,
    settings: Settings,
}

impl Store {
    pub fn new(state: WorkspaceState, settings: Settings) -> Self {
        Self { state, settings }
    }

    pub fn seeded(settings: Settings) -> Self {
        Self::new(WorkspaceState::seeded(), settings)
    }

    pub fn state(&self) -> &WorkspaceState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn open_files(&self) -> Vec<Arc<WorkspaceNode>> {
        self.state.open_files()
    }

    pub fn active_file(&self) -> Option<&Arc<WorkspaceNode>> {
        self.state.active_file()
    }

    pub fn explorer_view(&self, query: &str) -> WorkspaceTree {
        self.state.explorer_view(query)
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        tracing::debug!(?action, "dispatch");
        match action {
            Action::AddFile { parent_id, node } => self.add_file(parent_id.as_deref(), node),
            Action::CreateFile { parent_id, name } => self.create_file(parent_id.as_deref(), &name),
            Action::OpenFile(file_id) => self.open_file(file_id),
            Action::UpdateFileContent { file_id, content } => {
                let files = update_content(&self.state.files, &file_id, &content);
                self.replace_files(files)
            }
            Action::CloseTab(file_id) => self.close_tab(&file_id),
            Action::ChatSubmit(draft) => self.submit_chat(draft),
            Action::AssistantReplyDue { prompt, reply_to } => {
                self.append_assistant_reply(&prompt, &reply_to)
            }
            Action::SetCommandPalette(open) => self.set_command_palette(open),
            Action::PaletteAppend(ch) => {
                if !self.state.is_command_palette_open {
                    return DispatchResult::unchanged();
                }
                self.state.palette.query.push(ch);
                self.state.palette.selected = 0;
                DispatchResult::changed(true)
            }
            Action::PaletteBackspace => {
                if !self.state.is_command_palette_open || self.state.palette.query.pop().is_none()
                {
                    return DispatchResult::unchanged();
                }
                self.state.palette.selected = 0;
                DispatchResult::changed(true)
            }
            Action::PaletteMoveSelection(delta) => self.move_palette_selection(delta),
            Action::PaletteRun => self.run_palette_selection(),
        }
    }

    fn add_file(&mut self, parent_id: Option<&str>, node: WorkspaceNode) -> DispatchResult {
        if let Some(dup) = duplicate_id(&self.state.files, &node).map(str::to_owned) {
            tracing::warn!(id = %dup, "rejected insert with duplicate id");
            return DispatchResult::rejected(WorkspaceError::DuplicateId(dup));
        }
        let files = insert_child(&self.state.files, parent_id, node);
        self.replace_files(files)
    }

    fn create_file(&mut self, parent_id: Option<&str>, name: &str) -> DispatchResult {
        let name = name.trim();
        if name.is_empty() {
            return DispatchResult::unchanged();
        }

        let mut suffix = Uuid::new_v4().simple().to_string();
        suffix.truncate(5);
        let id = format!("{name}-{suffix}");
        let node = WorkspaceNode::file(id.clone(), name)
            .with_language(LanguageId::from_name(name).language_id())
            .with_content(NEW_FILE_PLACEHOLDER);

        let mut result = self.add_file(parent_id, node);
        if result.state_changed {
            result.merge(self.open_file(id));
        }
        result
    }

    fn replace_files(&mut self, files: WorkspaceTree) -> DispatchResult {
        if same_tree(&files, &self.state.files) {
            return DispatchResult::unchanged();
        }
        self.state.files = files;
        DispatchResult::changed(true)
    }

    /// Re-opening an already open tab only moves the selection.
    fn open_file(&mut self, file_id: String) -> DispatchResult {
        let mut changed = false;
        if !self.state.open_tabs.contains(&file_id) {
            self.state.open_tabs.push(file_id.clone());
            changed = true;
        }
        if self.state.active_file_id.as_deref() != Some(file_id.as_str()) {
            self.state.active_file_id = Some(file_id);
            changed = true;
        }
        DispatchResult::changed(changed)
    }

    fn close_tab(&mut self, file_id: &str) -> DispatchResult {
        let before = self.state.open_tabs.len();
        self.state.open_tabs.retain(|tab| tab != file_id);
        if self.state.open_tabs.len() == before {
            return DispatchResult::unchanged();
        }

        let last = self.state.open_tabs.last().cloned();
        let next_active = match self.settings.close_tab_focus {
            CloseTabFocus::LastRemaining => last,
            CloseTabFocus::KeepActive => match self.state.active_file_id.take() {
                Some(active) if self.state.open_tabs.contains(&active) => Some(active),
                _ => last,
            },
        };
        self.state.active_file_id = next_active;
        DispatchResult::changed(true)
    }

    /// Epoch millis, never earlier than the last transcript entry.
    fn next_timestamp(&self) -> i64 {
        let now = now_millis();
        self.state
            .chat
            .last()
            .map_or(now, |last| now.max(last.timestamp))
    }

    fn push_chat(&mut self, role: ChatRole, text: String) -> MessageId {
        let id = MessageId::generate();
        let timestamp = self.next_timestamp();
        self.state.chat.push(ChatMessage {
            id: id.clone(),
            role,
            text,
            timestamp,
        });
        id
    }

    fn submit_chat(&mut self, draft: ChatDraft) -> DispatchResult {
        let prompt = draft.text.clone();
        let reply_to = self.push_chat(draft.role, draft.text);
        tracing::debug!(message_id = %reply_to, "chat message appended");

        DispatchResult {
            effects: vec![Effect::ScheduleAssistantReply {
                prompt,
                reply_to,
                delay: self.settings.reply_latency(),
            }],
            state_changed: true,
            rejection: None,
        }
    }

    fn append_assistant_reply(&mut self, prompt: &str, reply_to: &MessageId) -> DispatchResult {
        let snippet = self
            .state
            .active_file()
            .and_then(|file| context_snippet(file, self.settings.context_snippet_chars));
        let text = assistant::reply(prompt, snippet.as_deref());
        let id = self.push_chat(ChatRole::Assistant, text);
        tracing::debug!(message_id = %id, reply_to = %reply_to, "assistant reply appended");
        DispatchResult::changed(true)
    }

    /// Explicit set, not a flip. Closing also clears the query.
    fn set_command_palette(&mut self, open: bool) -> DispatchResult {
        let mut changed = self.state.is_command_palette_open != open;
        self.state.is_command_palette_open = open;
        if !open && self.state.palette != PaletteState::default() {
            self.state.palette = PaletteState::default();
            changed = true;
        }
        DispatchResult::changed(changed)
    }

    fn move_palette_selection(&mut self, delta: isize) -> DispatchResult {
        if !self.state.is_command_palette_open {
            return DispatchResult::unchanged();
        }
        let count = palette::match_indices(&self.state.palette.query).len();
        if count == 0 {
            return DispatchResult::unchanged();
        }

        let prev = self.state.palette.selected.min(count - 1);
        let next = prev.saturating_add_signed(delta).min(count - 1);
        self.state.palette.selected = next;
        DispatchResult::changed(next != prev)
    }

    fn run_palette_selection(&mut self) -> DispatchResult {
        if !self.state.is_command_palette_open {
            return DispatchResult::unchanged();
        }
        let command = palette::match_indices(&self.state.palette.query)
            .get(self.state.palette.selected)
            .map(|&i| PALETTE_ITEMS[i].command);

        let mut result = self.set_command_palette(false);
        match command {
            Some(PaletteCommand::NewFile) => {
                let name = self.settings.new_file_name.clone();
                result.merge(self.create_file(None, &name));
            }
            Some(PaletteCommand::FocusChat) => result.effects.push(Effect::FocusChatInput),
            Some(PaletteCommand::FormatFile) => result.effects.push(Effect::FormatActiveFile),
            Some(PaletteCommand::OpenSettings) => result.effects.push(Effect::OpenSettings),
            None => {}
        }
        result
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
