//! Headless workspace core (state/action/effect).

pub mod action;
pub mod assistant;
pub mod effect;
pub mod error;
pub mod language;
pub mod palette;
pub mod seed;
pub mod services;
pub mod state;
pub mod store;

pub use action::Action;
pub use effect::Effect;
pub use error::WorkspaceError;
pub use language::LanguageId;
pub use palette::{PaletteCommand, PaletteItem, PALETTE_ITEMS};
pub use state::{PaletteState, WorkspaceState};
pub use store::{DispatchResult, Store};
