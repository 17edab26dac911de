use crate::models::{ChatDraft, MessageId, WorkspaceNode};

#[derive(Debug, Clone)]
pub enum Action {
    AddFile {
        parent_id: Option<String>,
        node: WorkspaceNode,
    },
    CreateFile {
        parent_id: Option<String>,
        name: String,
    },
    OpenFile(String),
    UpdateFileContent {
        file_id: String,
        content: String,
    },
    CloseTab(String),
    ChatSubmit(ChatDraft),
    AssistantReplyDue {
        prompt: String,
        reply_to: MessageId,
    },
    SetCommandPalette(bool),
    PaletteAppend(char),
    PaletteBackspace,
    PaletteMoveSelection(isize),
    PaletteRun,
}
