use std::time::Duration;

use crate::models::MessageId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Dispatch `Action::AssistantReplyDue` once `delay` has passed.
    ScheduleAssistantReply {
        prompt: String,
        reply_to: MessageId,
        delay: Duration,
    },
    FocusChatInput,
    FormatActiveFile,
    OpenSettings,
}
