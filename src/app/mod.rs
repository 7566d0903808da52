//! Application-Layer: Selektion, Events, Commands und History.

pub mod commands;
pub mod document;
pub mod error;
pub mod events;
pub mod history;
pub mod selection;
pub mod session;

pub use commands::{RenameGroupsCommand, ReplaceSelectionCommand, TranslateObjectsCommand};
pub use document::EditorDocument;
pub use error::{EditError, HandlerError};
pub use events::{EventChannel, EventHandler, SubscriptionToken};
pub use history::{Command, CommandHistory, CommandKind};
pub use selection::{Selection, SelectionEventData, SelectionMode, SelectionState};
pub use session::EditorSession;
