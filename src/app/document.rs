//! Das Dokument, auf dem Commands arbeiten: Karte plus Selektions-Stack.

use super::selection::Selection;
use crate::core::BrushMap;
use crate::shared::EditorOptions;

/// Karte und Selektion als eine Einheit für Commands
#[derive(Debug, Default)]
pub struct EditorDocument {
    /// Dokumentmodell (Besitzer aller Objekte)
    pub map: BrushMap,
    /// Selektions-Stack mit Event-Kanälen
    pub selection: Selection,
}

impl EditorDocument {
    /// Erstellt ein leeres Dokument gemäß den Optionen.
    pub fn new(options: &EditorOptions) -> Self {
        Self {
            map: BrushMap::with_point_entity_size(options.point_entity_size),
            selection: Selection::new(options.effective_mru_limit()),
        }
    }

    /// Erstellt ein Dokument für eine bereits aufgebaute Karte.
    pub fn with_map(map: BrushMap, options: &EditorOptions) -> Self {
        Self {
            map,
            selection: Selection::new(options.effective_mru_limit()),
        }
    }
}
