//! Abfrage-Schnittstelle, über die Selektion und Commands das Modell sehen.

use super::{BBox, BrushId, EntityId, FaceId};

/// Struktur- und Geometrieabfragen auf dem Dokumentmodell.
///
/// Alle Methoden akzeptieren veraltete Handles und liefern dann `None`
/// bzw. eine leere Liste.
pub trait MapGeometry {
    /// Brush, zu dem eine Fläche gehört.
    fn face_brush(&self, face: FaceId) -> Option<BrushId>;
    /// Alle Flächen eines Brushes.
    fn brush_faces(&self, brush: BrushId) -> &[FaceId];
    /// Besitzende Entity eines Brushes.
    fn brush_entity(&self, brush: BrushId) -> Option<EntityId>;
    /// Bounding-Box einer Entity.
    fn entity_bounds(&self, entity: EntityId) -> Option<BBox>;
    /// Bounding-Box eines Brushes.
    fn brush_bounds(&self, brush: BrushId) -> Option<BBox>;
    /// Bounding-Box einer Fläche.
    fn face_bounds(&self, face: FaceId) -> Option<BBox>;
}
