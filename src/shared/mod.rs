//! Geteilte Typen für schichtübergreifende Verträge.
//!
//! Enthält die Laufzeit-Konfiguration, die sowohl vom Modell (`core`)
//! als auch vom Edit-Kern (`app`) gelesen wird.

pub mod options;

pub use options::EditorOptions;
pub use options::{HISTORY_MAX_DEPTH, MRU_TEXTURE_LIMIT, POINT_ENTITY_SIZE};
