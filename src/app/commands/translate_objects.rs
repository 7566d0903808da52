//! Verschieben der selektierten Entities und Brushes.
//!
//! Vorher- und Nachher-Geometrie werden exakt gespeichert, damit Undo und
//! Redo keine Rundungsfehler anhäufen.

use crate::app::document::EditorDocument;
use crate::app::error::EditError;
use crate::app::history::{Command, CommandKind};
use crate::core::{BrushId, BrushMap, EntityId, FaceId};
use glam::Vec3;
use indexmap::IndexSet;
use std::any::Any;

/// Ziel-Objekte, erfasst aus der Selektion beim ersten `perform_do`
#[derive(Debug, Clone, PartialEq, Eq)]
struct Targets {
    entities: Vec<EntityId>,
    brushes: Vec<BrushId>,
}

/// Exakte Geometrie der betroffenen Objekte
#[derive(Debug, Clone, Default, PartialEq)]
struct GeometrySnapshot {
    origins: Vec<(EntityId, Vec3)>,
    faces: Vec<(FaceId, Vec<Vec3>)>,
}

impl GeometrySnapshot {
    /// Erfasst Ursprünge der Entities und Punkte aller betroffenen Flächen.
    fn capture(map: &BrushMap, targets: &Targets) -> Option<Self> {
        let mut origins = Vec::with_capacity(targets.entities.len());
        let mut face_ids: IndexSet<FaceId> = IndexSet::new();

        for entity_id in &targets.entities {
            let entity = map.entity(*entity_id)?;
            origins.push((*entity_id, entity.origin));
            for brush_id in entity.brushes() {
                face_ids.extend(map.brush(*brush_id)?.faces().iter().copied());
            }
        }
        for brush_id in &targets.brushes {
            face_ids.extend(map.brush(*brush_id)?.faces().iter().copied());
        }

        let faces = face_ids
            .into_iter()
            .map(|id| map.face(id).map(|face| (id, face.points.clone())))
            .collect::<Option<Vec<_>>>()?;
        Some(Self { origins, faces })
    }

    fn translated(&self, delta: Vec3) -> Self {
        Self {
            origins: self
                .origins
                .iter()
                .map(|(id, origin)| (*id, *origin + delta))
                .collect(),
            faces: self
                .faces
                .iter()
                .map(|(id, points)| (*id, points.iter().map(|p| *p + delta).collect()))
                .collect(),
        }
    }

    fn is_alive(&self, map: &BrushMap) -> bool {
        self.origins.iter().all(|(id, _)| map.contains_entity(*id))
            && self.faces.iter().all(|(id, _)| map.contains_face(*id))
    }

    fn apply(&self, map: &mut BrushMap) {
        for (id, origin) in &self.origins {
            if let Some(entity) = map.entity_mut(*id) {
                entity.origin = *origin;
            }
        }
        for (id, points) in &self.faces {
            if let Some(face) = map.face_mut(*id) {
                face.points.clone_from(points);
            }
        }
    }
}

/// Verschiebt die selektierten Entities (samt ihrer Brushes) und Brushes.
#[derive(Debug, Clone)]
pub struct TranslateObjectsCommand {
    delta: Vec3,
    targets: Option<Targets>,
    before: GeometrySnapshot,
    after: GeometrySnapshot,
}

impl TranslateObjectsCommand {
    /// Typkennung
    pub const KIND: CommandKind = CommandKind::new("translate_objects");

    /// Erstellt einen Verschiebe-Command für die aktuelle Selektion.
    pub fn translate(delta: Vec3) -> Self {
        Self {
            delta,
            targets: None,
            before: GeometrySnapshot::default(),
            after: GeometrySnapshot::default(),
        }
    }

    /// Gesamte Verschiebung (nach Zusammenfassen die Summe).
    pub fn delta(&self) -> Vec3 {
        self.delta
    }
}

fn selected_targets(document: &EditorDocument) -> Targets {
    Targets {
        entities: document.selection.entities().iter().copied().collect(),
        brushes: document.selection.brushes().iter().copied().collect(),
    }
}

impl Command for TranslateObjectsCommand {
    fn kind(&self) -> CommandKind {
        Self::KIND
    }

    fn name(&self) -> &str {
        "Objekte verschieben"
    }

    fn perform_do(&mut self, document: &mut EditorDocument) -> Result<(), EditError> {
        if self.targets.is_some() {
            if !self.after.is_alive(&document.map) {
                return Err(EditError::perform_failed(self.name(), "Objekt existiert nicht mehr"));
            }
            self.after.apply(&mut document.map);
            return Ok(());
        }

        let targets = selected_targets(document);
        if targets.entities.is_empty() && targets.brushes.is_empty() {
            return Err(EditError::perform_failed(self.name(), "keine Objekte selektiert"));
        }
        let Some(before) = GeometrySnapshot::capture(&document.map, &targets) else {
            return Err(EditError::perform_failed(self.name(), "Objekt existiert nicht mehr"));
        };
        let after = before.translated(self.delta);
        after.apply(&mut document.map);
        log::debug!(
            "{} Entity(s), {} Fläche(n) verschoben um {:?}",
            after.origins.len(),
            after.faces.len(),
            self.delta
        );

        self.targets = Some(targets);
        self.before = before;
        self.after = after;
        Ok(())
    }

    fn perform_undo(&mut self, document: &mut EditorDocument) -> Result<(), EditError> {
        if self.targets.is_none() {
            return Err(EditError::perform_failed(self.name(), "wurde nie ausgeführt"));
        }
        if !self.before.is_alive(&document.map) {
            return Err(EditError::perform_failed(self.name(), "Objekt existiert nicht mehr"));
        }
        self.before.apply(&mut document.map);
        Ok(())
    }

    fn is_repeatable(&self, document: &EditorDocument) -> bool {
        !document.selection.entities().is_empty() || !document.selection.brushes().is_empty()
    }

    fn repeat(&self, _document: &EditorDocument) -> Option<Box<dyn Command>> {
        Some(Box::new(Self::translate(self.delta)))
    }

    fn collate_with(&mut self, next: &dyn Command) -> bool {
        if next.kind() != Self::KIND {
            return false;
        }
        let Some(other) = next.as_any().downcast_ref::<Self>() else {
            return false;
        };
        if self.targets.is_none() || self.targets != other.targets {
            return false;
        }
        self.delta += other.delta;
        self.after = other.after.clone();
        true
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
