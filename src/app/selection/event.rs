use crate::core::{BrushId, EntityId, FaceId};

/// Payload einer Selektionsänderung: genau die betroffenen Objekte eines Batches
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionEventData {
    /// Betroffene Entities
    pub entities: Vec<EntityId>,
    /// Betroffene Brushes
    pub brushes: Vec<BrushId>,
    /// Betroffene Flächen
    pub faces: Vec<FaceId>,
}

impl SelectionEventData {
    /// Gibt `true` zurück, wenn der Batch keine Objekte enthält.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty() && self.brushes.is_empty() && self.faces.is_empty()
    }

    /// Gesamtzahl der Objekte im Batch.
    pub fn len(&self) -> usize {
        self.entities.len() + self.brushes.len() + self.faces.len()
    }
}

impl From<EntityId> for SelectionEventData {
    fn from(entity: EntityId) -> Self {
        Self {
            entities: vec![entity],
            ..Self::default()
        }
    }
}

impl From<BrushId> for SelectionEventData {
    fn from(brush: BrushId) -> Self {
        Self {
            brushes: vec![brush],
            ..Self::default()
        }
    }
}

impl From<FaceId> for SelectionEventData {
    fn from(face: FaceId) -> Self {
        Self {
            faces: vec![face],
            ..Self::default()
        }
    }
}

impl From<Vec<EntityId>> for SelectionEventData {
    fn from(entities: Vec<EntityId>) -> Self {
        Self {
            entities,
            ..Self::default()
        }
    }
}

impl From<Vec<BrushId>> for SelectionEventData {
    fn from(brushes: Vec<BrushId>) -> Self {
        Self {
            brushes,
            ..Self::default()
        }
    }
}

impl From<Vec<FaceId>> for SelectionEventData {
    fn from(faces: Vec<FaceId>) -> Self {
        Self {
            faces,
            ..Self::default()
        }
    }
}

impl From<(Vec<EntityId>, Vec<BrushId>)> for SelectionEventData {
    fn from((entities, brushes): (Vec<EntityId>, Vec<BrushId>)) -> Self {
        Self {
            entities,
            brushes,
            faces: Vec::new(),
        }
    }
}
