//! Fehler-Taxonomie des Edit-Kerns.

/// Fehler, den ein Beobachter an den Publisher zurückgibt.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Alle Fehler von Selektion, Event-Kanal und Command-History.
#[derive(Debug, thiserror::Error)]
pub enum EditError {
    /// Strukturelle Vorbedingung verletzt (z.B. Basis-Selektion poppen)
    #[error("Vorbedingung verletzt: {0}")]
    PreconditionViolation(&'static str),
    /// Geometrieabfrage ohne selektierte Objekte
    #[error("Selektion ist leer")]
    EmptySelection,
    /// Undo-Stack ist leer
    #[error("Nichts zum Rückgängigmachen")]
    NothingToUndo,
    /// Redo-Stack ist leer
    #[error("Nichts zum Wiederherstellen")]
    NothingToRedo,
    /// Letzter Command ist im aktuellen Zustand nicht wiederholbar
    #[error("Letzter Befehl ist nicht wiederholbar")]
    NotRepeatable,
    /// Ein Command konnte nicht auf das Dokument angewendet werden
    #[error("Befehl '{command}' fehlgeschlagen: {reason}")]
    PerformFailed {
        /// Anzeigename des Commands
        command: String,
        /// Grund des Fehlschlags
        reason: String,
    },
    /// Undo/Redo scheiterte nach begonnener Buchführung; History wurde verworfen
    #[error("History verworfen: {command} ließ sich nicht {action}")]
    HistoryCorrupted {
        /// Anzeigename des Commands
        command: String,
        /// "rückgängig machen" oder "wiederherstellen"
        action: &'static str,
        /// Ursprünglicher Fehler des Commands
        #[source]
        source: Box<EditError>,
    },
    /// Ein Beobachter eines Event-Kanals ist fehlgeschlagen
    #[error("Beobachter auf Kanal '{channel}' fehlgeschlagen: {source}")]
    ObserverFailed {
        /// Name des Kanals
        channel: &'static str,
        /// Fehler des Beobachters
        #[source]
        source: HandlerError,
    },
}

impl EditError {
    /// Kurzform für `PerformFailed`.
    pub fn perform_failed(command: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::PerformFailed {
            command: command.into(),
            reason: reason.into(),
        }
    }
}
