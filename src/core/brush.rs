//! Brushes und ihre Flächen.

use super::{BBox, BrushId, EntityId, FaceId, TextureId};
use glam::Vec3;

/// Konvexer Brush, bestehend aus Flächen
#[derive(Debug, Clone)]
pub struct Brush {
    /// Besitzende Entity
    pub entity: EntityId,
    /// Flächen dieses Brushes
    pub(crate) faces: Vec<FaceId>,
}

impl Brush {
    /// Flächen dieses Brushes.
    pub fn faces(&self) -> &[FaceId] {
        &self.faces
    }
}

/// Eine Brush-Fläche (Polygon)
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    /// Besitzender Brush
    pub brush: BrushId,
    /// Eckpunkte des Polygons
    pub points: Vec<Vec3>,
    /// Zugewiesene Textur
    pub texture: Option<TextureId>,
}

impl Face {
    /// Bounding-Box der Eckpunkte. `None` bei Fläche ohne Punkte.
    pub fn bounds(&self) -> Option<BBox> {
        BBox::from_points(self.points.iter().copied())
    }
}
