//! Core-Domänentypen: Handles, Bounding-Boxes und das Brush-Dokumentmodell.

pub mod bounds;
pub mod brush;
/// Dokumentmodell der Karte
///
/// - BrushMap: Besitzer aller Entities, Brushes, Flächen, Texturen und Gruppen
/// - MapGeometry: Abfrage-Schnittstelle für Selektion und Commands
pub mod brush_map;
pub mod entity;
pub mod geometry;
pub mod handles;
pub mod texture;

pub use bounds::BBox;
pub use brush::{Brush, Face};
pub use brush_map::{BrushMap, FaceSpec};
pub use entity::Entity;
pub use geometry::MapGeometry;
pub use handles::{BrushId, EntityId, FaceId, GroupId, TextureId};
pub use texture::{Group, Texture};
