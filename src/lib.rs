//! agentic-workspace - 模拟开发工作区的状态核心
//!
//! 模块结构：
//! - models: 数据模型（WorkspaceNode 树, ChatMessage）
//! - kernel: 无界面核心（State, Action, Effect, Store, 助手回复）
//! - kernel::services: 设置加载与串行命令队列（WorkspaceHost）

pub mod kernel;
pub mod models;
