//! Entities: Punkt-Entities mit Ursprung oder Brush-Entities mit eigenen Brushes.

use super::{BrushId, GroupId};
use glam::Vec3;

/// Eine Entity der Karte
#[derive(Debug, Clone)]
pub struct Entity {
    /// Klassenname (z.B. `worldspawn`, `light`)
    pub classname: String,
    /// Ursprung in Weltkoordinaten
    pub origin: Vec3,
    /// Gruppe, zu der die Entity gehört
    pub group: Option<GroupId>,
    /// Brushes dieser Entity (in Einfügereihenfolge)
    pub(crate) brushes: Vec<BrushId>,
}

impl Entity {
    /// Erstellt eine Entity ohne Brushes und ohne Gruppe.
    pub fn new(classname: impl Into<String>, origin: Vec3) -> Self {
        Self {
            classname: classname.into(),
            origin,
            group: None,
            brushes: Vec::new(),
        }
    }

    /// Brushes dieser Entity.
    pub fn brushes(&self) -> &[BrushId] {
        &self.brushes
    }

    /// Punkt-Entities besitzen keine Brushes.
    pub fn is_point_entity(&self) -> bool {
        self.brushes.is_empty()
    }
}
