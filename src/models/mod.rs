//! 数据模型层

pub mod chat;
pub mod file_tree;

pub use chat::{ChatDraft, ChatMessage, ChatRole, MessageId};
pub use file_tree::{
    deep_clone, duplicate_id, filter_tree, find_node, flatten_files, insert_child, same_tree,
    update_content, NodeBody, NodeKind, WorkspaceNode, WorkspaceTree,
};
