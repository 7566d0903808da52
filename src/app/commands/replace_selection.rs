//! Selektionsänderung als rückgängig machbarer Schritt.

use crate::app::document::EditorDocument;
use crate::app::error::EditError;
use crate::app::history::{Command, CommandKind};
use crate::app::selection::SelectionState;
use crate::core::{BrushId, EntityId, FaceId};
use std::any::Any;

/// Neue Selektion, die der Command installiert
#[derive(Debug, Clone, PartialEq, Eq)]
enum Replacement {
    Objects {
        entities: Vec<EntityId>,
        brushes: Vec<BrushId>,
    },
    Faces(Vec<FaceId>),
    Clear,
}

/// Ersetzt die aktive Selektion; Undo stellt den vorherigen Zustand her.
#[derive(Debug, Clone)]
pub struct ReplaceSelectionCommand {
    replacement: Replacement,
    previous: Option<SelectionState>,
    installed: Option<SelectionState>,
}

impl ReplaceSelectionCommand {
    /// Typkennung
    pub const KIND: CommandKind = CommandKind::new("replace_selection");

    fn with(replacement: Replacement) -> Self {
        Self {
            replacement,
            previous: None,
            installed: None,
        }
    }

    /// Selektiert genau die gegebenen Entities und Brushes.
    pub fn objects(entities: Vec<EntityId>, brushes: Vec<BrushId>) -> Self {
        Self::with(Replacement::Objects { entities, brushes })
    }

    /// Selektiert genau die gegebenen Flächen.
    pub fn faces(faces: Vec<FaceId>) -> Self {
        Self::with(Replacement::Faces(faces))
    }

    /// Hebt die Selektion auf.
    pub fn clear() -> Self {
        Self::with(Replacement::Clear)
    }

    fn validate(&self, document: &EditorDocument) -> Result<(), EditError> {
        let map = &document.map;
        let alive = match &self.replacement {
            Replacement::Objects { entities, brushes } => {
                entities.iter().all(|e| map.contains_entity(*e))
                    && brushes.iter().all(|b| map.contains_brush(*b))
            }
            Replacement::Faces(faces) => faces.iter().all(|f| map.contains_face(*f)),
            Replacement::Clear => true,
        };
        if alive {
            Ok(())
        } else {
            Err(EditError::perform_failed(self.name(), "Objekt existiert nicht mehr"))
        }
    }

    fn install(&self, document: &mut EditorDocument) -> Result<(), EditError> {
        match &self.replacement {
            Replacement::Objects { entities, brushes } => {
                document.selection.replace_selection(entities, brushes)
            }
            Replacement::Faces(faces) => {
                document.selection.replace_face_selection(&document.map, faces)
            }
            Replacement::Clear => document.selection.remove_all(),
        }
    }
}

impl Command for ReplaceSelectionCommand {
    fn kind(&self) -> CommandKind {
        Self::KIND
    }

    fn name(&self) -> &str {
        "Selektion ändern"
    }

    fn perform_do(&mut self, document: &mut EditorDocument) -> Result<(), EditError> {
        if let Some(installed) = &self.installed {
            return document.selection.restore_state(installed.clone());
        }

        self.validate(document)?;
        let previous = document.selection.snapshot();
        if let Err(err) = self.install(document) {
            // Zurückrollen mit Events, damit Beobachter wieder synchron sind
            if let Err(rollback) = document.selection.restore_state(previous) {
                log::warn!("Beobachter beim Zurückrollen fehlgeschlagen: {}", rollback);
            }
            return Err(err);
        }
        self.installed = Some(document.selection.snapshot());
        self.previous = Some(previous);
        Ok(())
    }

    fn perform_undo(&mut self, document: &mut EditorDocument) -> Result<(), EditError> {
        let Some(previous) = &self.previous else {
            return Err(EditError::perform_failed(self.name(), "wurde nie ausgeführt"));
        };
        document.selection.restore_state(previous.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::error::HandlerError;
    use crate::app::history::CommandHistory;
    use crate::app::selection::{SelectionEventData, SelectionMode};
    use crate::render::SelectionHighlights;
    use glam::Vec3;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn document_with_two_brushes() -> (EditorDocument, BrushId, BrushId) {
        let mut document = EditorDocument::default();
        let world = document.map.add_entity("worldspawn", Vec3::ZERO);
        let a = document
            .map
            .add_box_brush(world, Vec3::ZERO, Vec3::ONE, None)
            .expect("Brush a");
        let b = document
            .map
            .add_box_brush(world, Vec3::X * 4.0, Vec3::X * 5.0 + Vec3::ONE, None)
            .expect("Brush b");
        (document, a, b)
    }

    #[test]
    fn test_undo_stellt_vorherige_selektion_her() {
        let (mut document, a, b) = document_with_two_brushes();
        document.selection.add_brush(a).expect("add");
        let before = document.selection.snapshot();
        let mut history = CommandHistory::default();

        history
            .execute(
                &mut document,
                Box::new(ReplaceSelectionCommand::objects(Vec::new(), vec![b])),
            )
            .expect("execute");
        assert_eq!(document.selection.brushes().len(), 1);
        assert!(document.selection.brushes().contains(&b));

        history.undo(&mut document).expect("undo");
        assert_eq!(document.selection.snapshot(), before);

        history.redo(&mut document).expect("redo");
        assert!(document.selection.brushes().contains(&b));
        assert!(!document.selection.brushes().contains(&a));
    }

    #[test]
    fn test_flaechen_selektion_setzt_modus() {
        let (mut document, a, _) = document_with_two_brushes();
        let face = document.map.brush(a).expect("Brush").faces()[0];
        let mut history = CommandHistory::default();

        history
            .execute(&mut document, Box::new(ReplaceSelectionCommand::faces(vec![face])))
            .expect("execute");

        assert_eq!(document.selection.mode(), SelectionMode::Faces);
        assert!(document.selection.partial_brushes().contains(&a));
    }

    #[test]
    fn test_clear_leert_selektion() {
        let (mut document, a, b) = document_with_two_brushes();
        document.selection.add_brushes(&[a, b]).expect("add");
        let mut history = CommandHistory::default();

        history
            .execute(&mut document, Box::new(ReplaceSelectionCommand::clear()))
            .expect("execute");
        assert!(document.selection.is_empty());

        history.undo(&mut document).expect("undo");
        assert_eq!(document.selection.brushes().len(), 2);
    }

    #[test]
    fn test_veraltetes_handle_wird_abgelehnt() {
        let (mut document, a, b) = document_with_two_brushes();
        assert!(document.map.remove_brush(b));
        document.selection.add_brush(a).expect("add");
        let mut history = CommandHistory::default();

        let err = history
            .execute(
                &mut document,
                Box::new(ReplaceSelectionCommand::objects(Vec::new(), vec![b])),
            )
            .expect_err("Fehler erwartet");

        assert!(matches!(err, EditError::PerformFailed { .. }));
        assert!(document.selection.brushes().contains(&a));
        assert!(!history.can_undo());
    }

    #[test]
    fn test_beobachterfehler_rollt_selektion_zurueck() {
        let (mut document, a, b) = document_with_two_brushes();
        let (highlights, _) = SelectionHighlights::attach(&mut document.selection);
        document.selection.add_brush(a).expect("add");
        let before = document.selection.snapshot();
        document
            .selection
            .selection_added
            .subscribe(|_: &SelectionEventData| -> Result<(), HandlerError> {
                Err("Renderer nicht bereit".into())
            });
        let mut history = CommandHistory::default();

        let err = history
            .execute(
                &mut document,
                Box::new(ReplaceSelectionCommand::objects(Vec::new(), vec![b])),
            )
            .expect_err("Fehler erwartet");

        assert!(matches!(err, EditError::ObserverFailed { .. }));
        assert_eq!(document.selection.snapshot(), before);
        assert!(!history.can_undo());
        let highlights = highlights.borrow();
        assert_eq!(
            highlights.brushes(),
            document.selection.brushes(),
            "Highlights müssen nach dem Zurückrollen zur Selektion passen"
        );
        assert!(highlights.brushes().contains(&a));
    }

    #[test]
    fn test_events_in_reihenfolge_entfernt_dann_hinzugefuegt() {
        let (mut document, a, b) = document_with_two_brushes();
        document.selection.add_brush(a).expect("add");
        let log: Rc<RefCell<Vec<String>>> = Rc::default();
        let removed_log = Rc::clone(&log);
        document.selection.selection_removed.subscribe(move |data: &SelectionEventData| {
            removed_log.borrow_mut().push(format!("entfernt {}", data.len()));
            Ok(())
        });
        let added_log = Rc::clone(&log);
        document.selection.selection_added.subscribe(move |data: &SelectionEventData| {
            added_log.borrow_mut().push(format!("hinzugefügt {}", data.len()));
            Ok(())
        });
        let mut history = CommandHistory::default();

        history
            .execute(
                &mut document,
                Box::new(ReplaceSelectionCommand::objects(Vec::new(), vec![a, b])),
            )
            .expect("execute");

        assert_eq!(*log.borrow(), vec!["entfernt 1", "hinzugefügt 2"]);
    }
}
