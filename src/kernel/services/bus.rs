use tokio::sync::{mpsc, oneshot};

use super::host::Completion;
use crate::kernel::{Action, WorkspaceError};

#[derive(Debug)]
pub enum KernelMessage {
    Dispatch {
        action: Action,
        reply: oneshot::Sender<Completion>,
    },
}

#[derive(Clone)]
pub struct KernelBusSender {
    tx: mpsc::UnboundedSender<KernelMessage>,
}

pub struct KernelBusReceiver {
    rx: mpsc::UnboundedReceiver<KernelMessage>,
}

pub fn kernel_bus() -> (KernelBusSender, KernelBusReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (KernelBusSender { tx }, KernelBusReceiver { rx })
}

impl KernelBusSender {
    pub fn send(&self, msg: KernelMessage) -> Result<(), WorkspaceError> {
        self.tx.send(msg).map_err(|_| WorkspaceError::Closed)
    }

    /// Queues `action` and resolves once the worker has fully applied it.
    pub async fn request(&self, action: Action) -> Result<Completion, WorkspaceError> {
        let (reply, rx) = oneshot::channel();
        self.send(KernelMessage::Dispatch { action, reply })?;
        rx.await.map_err(|_| WorkspaceError::Closed)
    }
}

impl KernelBusReceiver {
    pub async fn recv(&mut self) -> Option<KernelMessage> {
        self.rx.recv().await
    }
}
