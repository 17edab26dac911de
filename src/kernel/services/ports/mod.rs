//! Service ports: data contracts shared by the kernel and its adapters.

pub mod settings;

pub use settings::{CloseTabFocus, Settings};
