//! Konkrete, rückgängig machbare Bearbeitungen.
//!
//! Jeder Command erfasst beim ersten `perform_do` seinen Undo-Zustand und
//! arbeitet danach nur noch mit den erfassten Handles.

mod rename_groups;
mod replace_selection;
mod translate_objects;

pub use rename_groups::RenameGroupsCommand;
pub use replace_selection::ReplaceSelectionCommand;
pub use translate_objects::TranslateObjectsCommand;
