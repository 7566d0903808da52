//! Command-basierte Undo/Redo-History.
//!
//! Ausgeführte Commands liegen auf dem Undo-Stack, rückgängig gemachte auf
//! dem Redo-Stack. Jeder Command gehört zu jedem Zeitpunkt genau einem der
//! beiden Stacks.

mod command;

pub use command::{Command, CommandKind};

use super::document::EditorDocument;
use super::error::EditError;
use crate::shared::{EditorOptions, HISTORY_MAX_DEPTH};

/// Undo/Redo-Manager über besessene Commands
pub struct CommandHistory {
    undo_stack: Vec<Box<dyn Command>>,
    redo_stack: Vec<Box<dyn Command>>,
    max_depth: usize,
    collate: bool,
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new_with_capacity(HISTORY_MAX_DEPTH)
    }
}

impl std::fmt::Debug for CommandHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandHistory")
            .field("undo", &self.undo_stack.iter().map(|c| c.name()).collect::<Vec<_>>())
            .field("redo", &self.redo_stack.iter().map(|c| c.name()).collect::<Vec<_>>())
            .field("max_depth", &self.max_depth)
            .field("collate", &self.collate)
            .finish()
    }
}

impl CommandHistory {
    /// Erstellt eine History mit maximaler Undo-Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        let max_depth = max_depth.max(1);
        Self {
            undo_stack: Vec::with_capacity(max_depth.min(64)),
            redo_stack: Vec::new(),
            max_depth,
            collate: true,
        }
    }

    /// Erstellt eine History gemäß den Optionen.
    pub fn from_options(options: &EditorOptions) -> Self {
        let mut history = Self::new_with_capacity(options.history_max_depth);
        history.collate = options.collate_commands;
        history
    }

    /// Schaltet das Zusammenfassen aufeinanderfolgender Commands.
    pub fn set_collation(&mut self, enabled: bool) {
        self.collate = enabled;
    }

    /// Führt einen Command aus und nimmt ihn in die History auf.
    ///
    /// Schlägt `perform_do` fehl, wird der Command verworfen und die History
    /// bleibt unverändert. Bei Erfolg wird der Redo-Stack geleert.
    pub fn execute(
        &mut self,
        document: &mut EditorDocument,
        command: Box<dyn Command>,
    ) -> Result<(), EditError> {
        let collate = self.collate;
        self.execute_with(document, command, collate)
    }

    fn execute_with(
        &mut self,
        document: &mut EditorDocument,
        mut command: Box<dyn Command>,
        collate: bool,
    ) -> Result<(), EditError> {
        if let Err(err) = command.perform_do(document) {
            log::warn!("Befehl '{}' abgelehnt: {}", command.name(), err);
            return Err(err);
        }
        self.redo_stack.clear();

        if collate {
            if let Some(top) = self.undo_stack.last_mut() {
                if top.collate_with(command.as_ref()) {
                    log::debug!(
                        "Befehl '{}' mit vorherigem Schritt zusammengefasst",
                        command.name()
                    );
                    return Ok(());
                }
            }
        }

        log::info!("Befehl '{}' ausgeführt", command.name());
        self.undo_stack.push(command);
        if self.undo_stack.len() > self.max_depth {
            self.undo_stack.remove(0);
        }
        Ok(())
    }

    /// Macht den obersten Command rückgängig und legt ihn auf den Redo-Stack.
    pub fn undo(&mut self, document: &mut EditorDocument) -> Result<(), EditError> {
        let Some(mut command) = self.undo_stack.pop() else {
            log::debug!("Undo: nichts zu tun");
            return Err(EditError::NothingToUndo);
        };
        if let Err(err) = command.perform_undo(document) {
            return Err(self.discard_after_failure(command.name(), "rückgängig machen", err));
        }
        log::info!("Undo ausgeführt: {}", command.name());
        self.redo_stack.push(command);
        Ok(())
    }

    /// Wendet den obersten Redo-Command erneut an und legt ihn auf den Undo-Stack.
    pub fn redo(&mut self, document: &mut EditorDocument) -> Result<(), EditError> {
        let Some(mut command) = self.redo_stack.pop() else {
            log::debug!("Redo: nichts zu tun");
            return Err(EditError::NothingToRedo);
        };
        if let Err(err) = command.perform_do(document) {
            return Err(self.discard_after_failure(command.name(), "wiederherstellen", err));
        }
        log::info!("Redo ausgeführt: {}", command.name());
        self.undo_stack.push(command);
        Ok(())
    }

    /// Wiederholt den zuletzt ausgeführten Command als neuen Undo-Schritt.
    pub fn repeat_last(&mut self, document: &mut EditorDocument) -> Result<(), EditError> {
        let repeated = {
            let doc: &EditorDocument = document;
            self.undo_stack
                .last()
                .filter(|command| command.is_repeatable(doc))
                .and_then(|command| command.repeat(doc))
        }
        .ok_or(EditError::NotRepeatable)?;
        self.execute_with(document, repeated, false)
    }

    /// Undo/Redo ist mitten in der Buchführung gescheitert: beide Stacks
    /// werden verworfen, da ihr Inhalt nicht mehr zum Dokument passt.
    fn discard_after_failure(
        &mut self,
        command: &str,
        action: &'static str,
        source: EditError,
    ) -> EditError {
        log::error!(
            "'{}' ließ sich nicht {}: {}; History wird verworfen",
            command,
            action,
            source
        );
        self.clear();
        EditError::HistoryCorrupted {
            command: command.to_string(),
            action,
            source: Box::new(source),
        }
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Anzahl der Undo-Schritte.
    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    /// Anzahl der Redo-Schritte.
    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    /// Name des Commands, den `undo` rückgängig machen würde.
    pub fn undo_name(&self) -> Option<&str> {
        self.undo_stack.last().map(|c| c.name())
    }

    /// Name des Commands, den `redo` wiederherstellen würde.
    pub fn redo_name(&self) -> Option<&str> {
        self.redo_stack.last().map(|c| c.name())
    }

    /// Verwirft die gesamte History.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
