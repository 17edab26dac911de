use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkspaceError {
    #[error("node id `{0}` already exists in the workspace")]
    DuplicateId(String),
    #[error("workspace worker has stopped")]
    Closed,
    #[error("settings error: {0}")]
    Settings(String),
}
