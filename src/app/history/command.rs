//! Vertrag für rückgängig machbare Bearbeitungen.

use crate::app::document::EditorDocument;
use crate::app::error::EditError;
use std::any::Any;

/// Typkennung eines Commands, u.a. für die Zusammenfassbarkeit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommandKind(&'static str);

impl CommandKind {
    /// Erstellt eine Kennung; der Name muss pro Command-Typ eindeutig sein.
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Name der Kennung.
    pub fn name(&self) -> &'static str {
        self.0
    }
}

/// Eine rückgängig machbare Bearbeitung des Dokuments.
///
/// Nach dem Übergeben an die `CommandHistory` gehört der Command exklusiv
/// der History.
pub trait Command: Any {
    /// Typkennung dieses Commands.
    fn kind(&self) -> CommandKind;

    /// Anzeigename (z.B. für Menüeinträge "Rückgängig: ...").
    fn name(&self) -> &str;

    /// Wendet die Bearbeitung an.
    ///
    /// Beim ersten Aufruf wird der für Undo nötige Zustand erfasst. Schlägt
    /// der Aufruf fehl, darf das Dokument nicht verändert sein.
    fn perform_do(&mut self, document: &mut EditorDocument) -> Result<(), EditError>;

    /// Macht eine zuvor erfolgreich angewendete Bearbeitung exakt rückgängig.
    fn perform_undo(&mut self, document: &mut EditorDocument) -> Result<(), EditError>;

    /// Ob ein erneutes Anwenden auf den aktuellen Zustand sinnvoll ist.
    fn is_repeatable(&self, _document: &EditorDocument) -> bool {
        false
    }

    /// Erzeugt einen frischen Command, der diese Bearbeitung wiederholt.
    fn repeat(&self, _document: &EditorDocument) -> Option<Box<dyn Command>> {
        None
    }

    /// Versucht, den direkt folgenden Command `next` in diesen aufzunehmen.
    ///
    /// `next` wurde bereits angewendet. Bei `true` übernimmt dieser Eintrag
    /// dessen Wirkung (eigener Undo-Zustand bleibt erhalten) und `next` wird
    /// verworfen. Bei `false` bleibt dieser Eintrag unverändert.
    fn collate_with(&mut self, _next: &dyn Command) -> bool {
        false
    }

    /// Zugriff für typsichere Downcasts in `collate_with`.
    fn as_any(&self) -> &dyn Any;
}
