//! Single-worker command queue around a [`Store`].
//!
//! Every command is applied to completion, including any scheduled assistant
//! reply, before the next one is taken off the queue. Two chat submissions
//! therefore always produce user/assistant pairs that never interleave.

use std::sync::Arc;

use tokio::sync::watch;

use super::bus::{kernel_bus, KernelBusReceiver, KernelBusSender, KernelMessage};
use crate::kernel::{Action, DispatchResult, Effect, Store, WorkspaceError, WorkspaceState};
use crate::models::{ChatDraft, ChatMessage, WorkspaceNode};

/// What one queued command did.
#[derive(Debug, Default)]
pub struct Completion {
    pub result: DispatchResult,
    /// Transcript entries appended while the command ran, in order.
    pub appended: Vec<ChatMessage>,
}

pub struct WorkspaceHost {
    store: Store,
    rx: KernelBusReceiver,
    snapshots: watch::Sender<Arc<WorkspaceState>>,
}

impl WorkspaceHost {
    /// Spawns the worker on the current tokio runtime. The worker stops once
    /// every handle is dropped.
    pub fn spawn(store: Store) -> WorkspaceHandle {
        let (bus, rx) = kernel_bus();
        let (snapshots, snapshot_rx) = watch::channel(Arc::new(store.state().clone()));
        let host = Self {
            store,
            rx,
            snapshots,
        };
        tokio::spawn(host.run());

        WorkspaceHandle {
            bus,
            snapshots: snapshot_rx,
        }
    }

    async fn run(mut self) {
        tracing::info!("workspace worker started");
        while let Some(msg) = self.rx.recv().await {
            match msg {
                KernelMessage::Dispatch { action, reply } => {
                    let completion = self.execute(action).await;
                    let _ = reply.send(completion);
                }
            }
        }
        tracing::info!("workspace worker stopped");
    }

    async fn execute(&mut self, action: Action) -> Completion {
        let chat_len = self.store.state().chat.len();
        let mut result = self.apply(action);

        let mut passthrough = Vec::new();
        for effect in std::mem::take(&mut result.effects) {
            match effect {
                Effect::ScheduleAssistantReply {
                    prompt,
                    reply_to,
                    delay,
                } => {
                    tokio::time::sleep(delay).await;
                    let reply = self.apply(Action::AssistantReplyDue { prompt, reply_to });
                    result.state_changed |= reply.state_changed;
                    passthrough.extend(reply.effects);
                }
                other => passthrough.push(other),
            }
        }
        result.effects = passthrough;

        Completion {
            result,
            appended: self.store.state().chat[chat_len..].to_vec(),
        }
    }

    fn apply(&mut self, action: Action) -> DispatchResult {
        let result = self.store.dispatch(action);
        if result.state_changed {
            self.snapshots
                .send_replace(Arc::new(self.store.state().clone()));
        }
        result
    }
}

/// Cloneable front door to a running [`WorkspaceHost`].
#[derive(Clone)]
pub struct WorkspaceHandle {
    bus: KernelBusSender,
    snapshots: watch::Receiver<Arc<WorkspaceState>>,
}

impl WorkspaceHandle {
    pub async fn dispatch(&self, action: Action) -> Result<Completion, WorkspaceError> {
        self.bus.request(action).await
    }

    async fn command(&self, action: Action) -> Result<(), WorkspaceError> {
        match self.dispatch(action).await?.result.rejection {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    pub async fn add_file(
        &self,
        parent_id: Option<&str>,
        node: WorkspaceNode,
    ) -> Result<(), WorkspaceError> {
        self.command(Action::AddFile {
            parent_id: parent_id.map(str::to_owned),
            node,
        })
        .await
    }

    pub async fn create_file(
        &self,
        parent_id: Option<&str>,
        name: impl Into<String>,
    ) -> Result<(), WorkspaceError> {
        self.command(Action::CreateFile {
            parent_id: parent_id.map(str::to_owned),
            name: name.into(),
        })
        .await
    }

    pub async fn open_file(&self, file_id: impl Into<String>) -> Result<(), WorkspaceError> {
        self.command(Action::OpenFile(file_id.into())).await
    }

    pub async fn update_file_content(
        &self,
        file_id: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<(), WorkspaceError> {
        self.command(Action::UpdateFileContent {
            file_id: file_id.into(),
            content: content.into(),
        })
        .await
    }

    pub async fn close_tab(&self, file_id: impl Into<String>) -> Result<(), WorkspaceError> {
        self.command(Action::CloseTab(file_id.into())).await
    }

    pub async fn toggle_command_palette(&self, open: bool) -> Result<(), WorkspaceError> {
        self.command(Action::SetCommandPalette(open)).await
    }

    /// Resolves after the assistant reply has landed. Returns the user entry
    /// followed by the reply, both as minted by the store.
    pub async fn push_chat_message(
        &self,
        draft: ChatDraft,
    ) -> Result<Vec<ChatMessage>, WorkspaceError> {
        Ok(self.dispatch(Action::ChatSubmit(draft)).await?.appended)
    }

    pub fn snapshot(&self) -> Arc<WorkspaceState> {
        Arc::clone(&self.snapshots.borrow())
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<WorkspaceState>> {
        self.snapshots.clone()
    }

    pub fn open_files(&self) -> Vec<Arc<WorkspaceNode>> {
        self.snapshot().open_files()
    }

    pub fn active_file(&self) -> Option<Arc<WorkspaceNode>> {
        self.snapshot().active_file().cloned()
    }
}
