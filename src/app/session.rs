//! Editor-Sitzung: Dokument plus History hinter einer schmalen Fassade.

use super::document::EditorDocument;
use super::error::EditError;
use super::history::{Command, CommandHistory};
use crate::core::BrushMap;
use crate::shared::EditorOptions;

/// Bündelt Dokument und Undo/Redo-History einer geöffneten Karte.
#[derive(Debug, Default)]
pub struct EditorSession {
    document: EditorDocument,
    history: CommandHistory,
}

impl EditorSession {
    /// Erstellt eine Sitzung mit leerer Karte.
    pub fn new(options: &EditorOptions) -> Self {
        Self {
            document: EditorDocument::new(options),
            history: CommandHistory::from_options(options),
        }
    }

    /// Erstellt eine Sitzung für eine vorhandene Karte.
    pub fn with_map(map: BrushMap, options: &EditorOptions) -> Self {
        log::info!(
            "Sitzung geöffnet: {} Entities, {} Brushes",
            map.entity_count(),
            map.brush_count()
        );
        Self {
            document: EditorDocument::with_map(map, options),
            history: CommandHistory::from_options(options),
        }
    }

    /// Führt einen Command aus und nimmt ihn in die History auf.
    pub fn submit(&mut self, command: impl Command) -> Result<(), EditError> {
        self.submit_boxed(Box::new(command))
    }

    /// Wie `submit`, für bereits geboxte Commands.
    pub fn submit_boxed(&mut self, command: Box<dyn Command>) -> Result<(), EditError> {
        self.history.execute(&mut self.document, command)
    }

    /// Macht den letzten Schritt rückgängig.
    pub fn undo(&mut self) -> Result<(), EditError> {
        self.history.undo(&mut self.document)
    }

    /// Stellt den zuletzt rückgängig gemachten Schritt wieder her.
    pub fn redo(&mut self) -> Result<(), EditError> {
        self.history.redo(&mut self.document)
    }

    /// Wiederholt den letzten Schritt auf der aktuellen Selektion.
    pub fn repeat_last(&mut self) -> Result<(), EditError> {
        self.history.repeat_last(&mut self.document)
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Aktuelles Dokument.
    pub fn document(&self) -> &EditorDocument {
        &self.document
    }

    /// Direkter Zugriff auf das Dokument, z.B. für Selektions-Beobachter
    /// oder nicht rückgängig machbare Änderungen.
    pub fn document_mut(&mut self) -> &mut EditorDocument {
        &mut self.document
    }

    /// Undo/Redo-History.
    pub fn history(&self) -> &CommandHistory {
        &self.history
    }
}
