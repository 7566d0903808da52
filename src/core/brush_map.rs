//! Die BrushMap: Arena aller Entities, Brushes, Flächen, Texturen und Gruppen.
//!
//! Die BrushMap ist der Besitzer aller Modellobjekte. Selektion und History
//! halten ausschließlich Handles (`EntityId`, `BrushId`, ...), deren
//! Gültigkeit hier über die Slot-Maps geprüft wird.

use super::{
    BBox, Brush, BrushId, Entity, EntityId, Face, FaceId, Group, GroupId, MapGeometry, Texture,
    TextureId,
};
use crate::shared::options::POINT_ENTITY_SIZE;
use glam::Vec3;
use slotmap::SlotMap;

/// Flächen-Beschreibung für `add_brush`: Polygonpunkte und optionale Textur.
pub type FaceSpec = (Vec<Vec3>, Option<TextureId>);

/// Vollständiges Dokumentmodell einer Brush-Karte
#[derive(Debug, Clone)]
pub struct BrushMap {
    entities: SlotMap<EntityId, Entity>,
    brushes: SlotMap<BrushId, Brush>,
    faces: SlotMap<FaceId, Face>,
    textures: SlotMap<TextureId, Texture>,
    groups: SlotMap<GroupId, Group>,
    /// Kantenlänge der Bounding-Box von Punkt-Entities
    point_entity_size: f32,
}

impl Default for BrushMap {
    fn default() -> Self {
        Self::new()
    }
}

impl BrushMap {
    /// Erstellt eine leere Karte mit Standardgröße für Punkt-Entities.
    pub fn new() -> Self {
        Self::with_point_entity_size(POINT_ENTITY_SIZE)
    }

    /// Erstellt eine leere Karte mit eigener Punkt-Entity-Größe.
    pub fn with_point_entity_size(point_entity_size: f32) -> Self {
        Self {
            entities: SlotMap::with_key(),
            brushes: SlotMap::with_key(),
            faces: SlotMap::with_key(),
            textures: SlotMap::with_key(),
            groups: SlotMap::with_key(),
            point_entity_size,
        }
    }

    /// Kantenlänge der Bounding-Box von Punkt-Entities.
    pub fn point_entity_size(&self) -> f32 {
        self.point_entity_size
    }

    // ── Aufbau ──────────────────────────────────────────────────────

    /// Fügt eine Entity hinzu.
    pub fn add_entity(&mut self, classname: impl Into<String>, origin: Vec3) -> EntityId {
        self.entities.insert(Entity::new(classname, origin))
    }

    /// Fügt einen Brush mit den gegebenen Flächen zu einer Entity hinzu.
    ///
    /// Gibt `None` zurück, wenn die Entity nicht (mehr) existiert.
    pub fn add_brush(&mut self, entity: EntityId, faces: Vec<FaceSpec>) -> Option<BrushId> {
        if !self.entities.contains_key(entity) {
            return None;
        }

        let brush_id = self.brushes.insert(Brush {
            entity,
            faces: Vec::with_capacity(faces.len()),
        });
        let face_ids: Vec<FaceId> = faces
            .into_iter()
            .map(|(points, texture)| {
                self.faces.insert(Face {
                    brush: brush_id,
                    points,
                    texture,
                })
            })
            .collect();

        if let Some(brush) = self.brushes.get_mut(brush_id) {
            brush.faces = face_ids;
        }
        if let Some(owner) = self.entities.get_mut(entity) {
            owner.brushes.push(brush_id);
        }
        Some(brush_id)
    }

    /// Fügt einen achsenparallelen Quader-Brush (6 Flächen) hinzu.
    pub fn add_box_brush(
        &mut self,
        entity: EntityId,
        a: Vec3,
        b: Vec3,
        texture: Option<TextureId>,
    ) -> Option<BrushId> {
        let bbox = BBox::new(a, b);
        let (lo, hi) = (bbox.min, bbox.max);
        let v = |x: f32, y: f32, z: f32| Vec3::new(x, y, z);

        let sides = vec![
            vec![v(lo.x, lo.y, lo.z), v(lo.x, lo.y, hi.z), v(lo.x, hi.y, hi.z), v(lo.x, hi.y, lo.z)],
            vec![v(hi.x, lo.y, lo.z), v(hi.x, hi.y, lo.z), v(hi.x, hi.y, hi.z), v(hi.x, lo.y, hi.z)],
            vec![v(lo.x, lo.y, lo.z), v(hi.x, lo.y, lo.z), v(hi.x, lo.y, hi.z), v(lo.x, lo.y, hi.z)],
            vec![v(lo.x, hi.y, lo.z), v(lo.x, hi.y, hi.z), v(hi.x, hi.y, hi.z), v(hi.x, hi.y, lo.z)],
            vec![v(lo.x, lo.y, lo.z), v(lo.x, hi.y, lo.z), v(hi.x, hi.y, lo.z), v(hi.x, lo.y, lo.z)],
            vec![v(lo.x, lo.y, hi.z), v(hi.x, lo.y, hi.z), v(hi.x, hi.y, hi.z), v(lo.x, hi.y, hi.z)],
        ];

        self.add_brush(
            entity,
            sides.into_iter().map(|points| (points, texture)).collect(),
        )
    }

    /// Registriert eine Textur.
    pub fn add_texture(&mut self, name: impl Into<String>) -> TextureId {
        self.textures.insert(Texture { name: name.into() })
    }

    /// Legt eine neue, leere Gruppe an.
    pub fn add_group(&mut self, name: impl Into<String>) -> GroupId {
        self.groups.insert(Group { name: name.into() })
    }

    /// Ordnet eine Entity einer Gruppe zu (oder löst sie mit `None`).
    ///
    /// Gibt `false` zurück, wenn Entity oder Gruppe veraltet sind.
    pub fn set_entity_group(&mut self, entity: EntityId, group: Option<GroupId>) -> bool {
        if let Some(group) = group {
            if !self.groups.contains_key(group) {
                return false;
            }
        }
        match self.entities.get_mut(entity) {
            Some(e) => {
                e.group = group;
                true
            }
            None => false,
        }
    }

    // ── Entfernen ───────────────────────────────────────────────────

    /// Entfernt einen Brush samt seiner Flächen.
    pub fn remove_brush(&mut self, brush_id: BrushId) -> bool {
        let Some(brush) = self.brushes.remove(brush_id) else {
            return false;
        };
        for face in brush.faces {
            self.faces.remove(face);
        }
        if let Some(owner) = self.entities.get_mut(brush.entity) {
            owner.brushes.retain(|b| *b != brush_id);
        }
        true
    }

    /// Entfernt eine Entity samt aller ihrer Brushes.
    pub fn remove_entity(&mut self, entity_id: EntityId) -> bool {
        let Some(entity) = self.entities.remove(entity_id) else {
            return false;
        };
        for brush_id in entity.brushes {
            if let Some(brush) = self.brushes.remove(brush_id) {
                for face in brush.faces {
                    self.faces.remove(face);
                }
            }
        }
        true
    }

    // ── Lookups ─────────────────────────────────────────────────────

    /// Entity zu einem Handle.
    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id)
    }

    /// Mutable Entity zu einem Handle.
    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(id)
    }

    /// Brush zu einem Handle.
    pub fn brush(&self, id: BrushId) -> Option<&Brush> {
        self.brushes.get(id)
    }

    /// Fläche zu einem Handle.
    pub fn face(&self, id: FaceId) -> Option<&Face> {
        self.faces.get(id)
    }

    /// Mutable Fläche zu einem Handle.
    pub fn face_mut(&mut self, id: FaceId) -> Option<&mut Face> {
        self.faces.get_mut(id)
    }

    /// Textur zu einem Handle.
    pub fn texture(&self, id: TextureId) -> Option<&Texture> {
        self.textures.get(id)
    }

    /// Sucht eine Textur über ihren Namen.
    pub fn find_texture(&self, name: &str) -> Option<TextureId> {
        self.textures
            .iter()
            .find(|(_, texture)| texture.name == name)
            .map(|(id, _)| id)
    }

    /// Gruppe zu einem Handle.
    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.get(id)
    }

    /// Mutable Gruppe zu einem Handle.
    pub fn group_mut(&mut self, id: GroupId) -> Option<&mut Group> {
        self.groups.get_mut(id)
    }

    /// Iteriert über alle Entities.
    pub fn entities(&self) -> impl Iterator<Item = (EntityId, &Entity)> + '_ {
        self.entities.iter()
    }

    /// Prüft, ob ein Entity-Handle noch gültig ist.
    pub fn contains_entity(&self, id: EntityId) -> bool {
        self.entities.contains_key(id)
    }

    /// Prüft, ob ein Brush-Handle noch gültig ist.
    pub fn contains_brush(&self, id: BrushId) -> bool {
        self.brushes.contains_key(id)
    }

    /// Prüft, ob ein Flächen-Handle noch gültig ist.
    pub fn contains_face(&self, id: FaceId) -> bool {
        self.faces.contains_key(id)
    }

    /// Anzahl der Entities
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Anzahl der Brushes
    pub fn brush_count(&self) -> usize {
        self.brushes.len()
    }

    /// Anzahl der Flächen
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Anzahl der Gruppen
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

}

impl MapGeometry for BrushMap {
    fn face_brush(&self, face: FaceId) -> Option<BrushId> {
        self.faces.get(face).map(|f| f.brush)
    }

    fn brush_faces(&self, brush: BrushId) -> &[FaceId] {
        self.brushes
            .get(brush)
            .map_or(&[][..], |b| b.faces.as_slice())
    }

    fn brush_entity(&self, brush: BrushId) -> Option<EntityId> {
        self.brushes.get(brush).map(|b| b.entity)
    }

    fn entity_bounds(&self, entity: EntityId) -> Option<BBox> {
        let entity = self.entities.get(entity)?;
        if entity.is_point_entity() {
            return Some(BBox::around(entity.origin, self.point_entity_size * 0.5));
        }
        BBox::merge_all(
            entity
                .brushes
                .iter()
                .filter_map(|brush| self.brush_bounds(*brush)),
        )
    }

    fn brush_bounds(&self, brush: BrushId) -> Option<BBox> {
        BBox::merge_all(
            self.brush_faces(brush)
                .iter()
                .filter_map(|face| self.face_bounds(*face)),
        )
    }

    fn face_bounds(&self, face: FaceId) -> Option<BBox> {
        self.faces.get(face)?.bounds()
    }
}
