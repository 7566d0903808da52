//! Selektions-Stack: geschachtelte, beobachtbare Selektionskontexte.
//!
//! Nur der oberste Zustand wird gelesen oder verändert. `push` dupliziert den
//! obersten Zustand, `pop` verwirft ihn; beide lösen keine Events aus.
//! Mutationen veröffentlichen genau die tatsächlich hinzugefügten bzw.
//! entfernten Objekte auf `selection_added` / `selection_removed`.
//!
//! Abfragen, die Referenzen liefern (`entities()`, `faces()`, ...), gelten nur
//! bis zur nächsten Mutation bzw. bis zum nächsten `push`/`pop`.

mod event;
mod state;

pub use event::SelectionEventData;
pub use state::{SelectionMode, SelectionState};

use super::error::EditError;
use super::events::EventChannel;
use crate::core::{BBox, BrushId, EntityId, FaceId, MapGeometry, TextureId};
use glam::Vec3;
use indexmap::IndexSet;

/// Stack von Selektionszuständen mit Event-Kanälen
#[derive(Debug)]
pub struct Selection {
    /// Basis-Kontext, lebt so lange wie die Selektion selbst
    base: SelectionState,
    /// Mit `push` aufgelegte Kontexte, oberster zuletzt
    pushed: Vec<SelectionState>,
    /// Maximale Länge der MRU-Texturliste
    mru_limit: usize,
    /// Wird mit den neu hinzugefügten Objekten ausgelöst
    pub selection_added: EventChannel<SelectionEventData>,
    /// Wird mit den tatsächlich entfernten Objekten ausgelöst
    pub selection_removed: EventChannel<SelectionEventData>,
}

impl Default for Selection {
    fn default() -> Self {
        Self::new(crate::shared::MRU_TEXTURE_LIMIT)
    }
}

impl Selection {
    /// Erstellt eine leere Selektion mit einem Basis-Kontext.
    pub fn new(mru_limit: usize) -> Self {
        Self {
            base: SelectionState::new(),
            pushed: Vec::new(),
            mru_limit: mru_limit.max(1),
            selection_added: EventChannel::new("selection_added"),
            selection_removed: EventChannel::new("selection_removed"),
        }
    }

    fn current(&self) -> &SelectionState {
        self.pushed.last().unwrap_or(&self.base)
    }

    fn current_mut(&mut self) -> &mut SelectionState {
        match self.pushed.last_mut() {
            Some(state) => state,
            None => &mut self.base,
        }
    }

    fn publish_added(&mut self, data: SelectionEventData) -> Result<(), EditError> {
        if data.is_empty() {
            return Ok(());
        }
        self.selection_added.publish(&data)
    }

    fn publish_removed(&mut self, data: SelectionEventData) -> Result<(), EditError> {
        if data.is_empty() {
            return Ok(());
        }
        self.selection_removed.publish(&data)
    }

    // ── Stack ───────────────────────────────────────────────────────

    /// Legt eine Kopie des aktuellen Zustands als neuen Kontext auf.
    pub fn push(&mut self) {
        let top = self.current().clone();
        self.pushed.push(top);
    }

    /// Verwirft den obersten Kontext.
    ///
    /// Der Basis-Kontext kann nicht entfernt werden.
    pub fn pop(&mut self) -> Result<(), EditError> {
        self.pushed
            .pop()
            .map(|_| ())
            .ok_or(EditError::PreconditionViolation(
                "Basis-Selektion kann nicht entfernt werden",
            ))
    }

    /// Anzahl der Kontexte (mindestens 1).
    pub fn depth(&self) -> usize {
        1 + self.pushed.len()
    }

    /// Kopie des aktiven Zustands.
    pub fn snapshot(&self) -> SelectionState {
        self.current().clone()
    }

    /// Ersetzt den aktiven Zustand durch einen zuvor erfassten Snapshot.
    ///
    /// Meldet die bisherige Mitgliedschaft als entfernt und die des
    /// Snapshots als hinzugefügt.
    pub fn restore_state(&mut self, state: SelectionState) -> Result<(), EditError> {
        let installed = state.membership();
        let previous = std::mem::replace(self.current_mut(), state);
        self.publish_removed(previous.membership())?;
        self.publish_added(installed)
    }

    // ── Abfragen ────────────────────────────────────────────────────

    /// Aktueller Selektionsmodus.
    pub fn mode(&self) -> SelectionMode {
        self.current().mode
    }

    /// Leer, wenn weder Entities noch Brushes noch Flächen selektiert sind.
    pub fn is_empty(&self) -> bool {
        self.current().is_empty()
    }

    /// Selektierte Entities.
    pub fn entities(&self) -> &IndexSet<EntityId> {
        &self.current().entities
    }

    /// Selektierte Brushes.
    pub fn brushes(&self) -> &IndexSet<BrushId> {
        &self.current().brushes
    }

    /// Teilweise selektierte Brushes.
    pub fn partial_brushes(&self) -> &IndexSet<BrushId> {
        &self.current().partial_brushes
    }

    /// Direkt selektierte Flächen.
    pub fn faces(&self) -> &IndexSet<FaceId> {
        &self.current().faces
    }

    /// Zuletzt benutzte Texturen, neueste zuletzt.
    pub fn mru_textures(&self) -> &[TextureId] {
        &self.current().mru_textures
    }

    /// Zuletzt benutzte Textur.
    pub fn texture(&self) -> Option<TextureId> {
        self.current().mru_textures.last().copied()
    }

    /// Alle Flächen selektierter oder teilweise selektierter Brushes.
    pub fn brush_faces<M>(&self, model: &M) -> Vec<FaceId>
    where
        M: MapGeometry + ?Sized,
    {
        let state = self.current();
        let mut faces = IndexSet::new();
        for brush in state.brushes.iter().chain(state.partial_brushes.iter()) {
            faces.extend(model.brush_faces(*brush).iter().copied());
        }
        faces.into_iter().collect()
    }

    /// Direkt selektierte Flächen vereinigt mit `brush_faces`, ohne Duplikate.
    pub fn all_faces<M>(&self, model: &M) -> Vec<FaceId>
    where
        M: MapGeometry + ?Sized,
    {
        let mut faces: IndexSet<FaceId> = self.current().faces.clone();
        faces.extend(self.brush_faces(model));
        faces.into_iter().collect()
    }

    /// Gemeinsame Entity aller selektierten Brushes, falls eindeutig.
    pub fn brush_selection_entity<M>(&self, model: &M) -> Option<EntityId>
    where
        M: MapGeometry + ?Sized,
    {
        let mut brushes = self.current().brushes.iter();
        let first = model.brush_entity(*brushes.next()?)?;
        brushes
            .all(|brush| model.brush_entity(*brush) == Some(first))
            .then_some(first)
    }

    /// Bounding-Box über alle selektierten Flächen, Brushes und Entities.
    pub fn bounds<M>(&self, model: &M) -> Result<BBox, EditError>
    where
        M: MapGeometry + ?Sized,
    {
        let state = self.current();
        if state.is_empty() {
            return Err(EditError::EmptySelection);
        }
        let boxes = state
            .faces
            .iter()
            .filter_map(|f| model.face_bounds(*f))
            .chain(state.brushes.iter().filter_map(|b| model.brush_bounds(*b)))
            .chain(state.entities.iter().filter_map(|e| model.entity_bounds(*e)));
        BBox::merge_all(boxes).ok_or(EditError::EmptySelection)
    }

    /// Mittelpunkt von `bounds`.
    pub fn center<M>(&self, model: &M) -> Result<Vec3, EditError>
    where
        M: MapGeometry + ?Sized,
    {
        self.bounds(model).map(|bbox| bbox.center())
    }

    // ── Hinzufügen ──────────────────────────────────────────────────

    /// Setzt eine Textur an das Ende der MRU-Liste.
    pub fn add_texture(&mut self, texture: TextureId) {
        let limit = self.mru_limit;
        self.current_mut().touch_texture(texture, limit);
    }

    /// Setzt mehrere Texturen nacheinander an das Ende der MRU-Liste.
    pub fn add_textures(&mut self, textures: &[TextureId]) {
        let limit = self.mru_limit;
        let state = self.current_mut();
        for texture in textures {
            state.touch_texture(*texture, limit);
        }
    }

    /// Selektiert eine Entity.
    pub fn add_entity(&mut self, entity: EntityId) -> Result<(), EditError> {
        self.add_entities(&[entity])
    }

    /// Selektiert Entities; bereits selektierte werden nicht erneut gemeldet.
    pub fn add_entities(&mut self, entities: &[EntityId]) -> Result<(), EditError> {
        let state = self.current_mut();
        let added: Vec<EntityId> = entities
            .iter()
            .copied()
            .filter(|e| state.entities.insert(*e))
            .collect();
        state.update_mode();
        self.publish_added(added.into())
    }

    /// Selektiert einen Brush.
    pub fn add_brush(&mut self, brush: BrushId) -> Result<(), EditError> {
        self.add_brushes(&[brush])
    }

    /// Selektiert Brushes; bereits selektierte werden nicht erneut gemeldet.
    pub fn add_brushes(&mut self, brushes: &[BrushId]) -> Result<(), EditError> {
        let state = self.current_mut();
        let added: Vec<BrushId> = brushes
            .iter()
            .copied()
            .filter(|b| state.brushes.insert(*b))
            .collect();
        state.update_mode();
        self.publish_added(added.into())
    }

    /// Selektiert eine Fläche.
    pub fn add_face<M>(&mut self, model: &M, face: FaceId) -> Result<(), EditError>
    where
        M: MapGeometry + ?Sized,
    {
        self.add_faces(model, &[face])
    }

    /// Selektiert Flächen und aktualisiert die Teil-Brushes.
    pub fn add_faces<M>(&mut self, model: &M, faces: &[FaceId]) -> Result<(), EditError>
    where
        M: MapGeometry + ?Sized,
    {
        let state = self.current_mut();
        let added: Vec<FaceId> = faces
            .iter()
            .copied()
            .filter(|f| state.faces.insert(*f))
            .collect();
        refresh_partial_brushes(state, model, &added);
        state.update_mode();
        self.publish_added(added.into())
    }

    // ── Entfernen ───────────────────────────────────────────────────

    /// Deselektiert eine Entity.
    pub fn remove_entity(&mut self, entity: EntityId) -> Result<(), EditError> {
        self.remove_entities(&[entity])
    }

    /// Deselektiert Entities; nicht selektierte werden ignoriert.
    pub fn remove_entities(&mut self, entities: &[EntityId]) -> Result<(), EditError> {
        let state = self.current_mut();
        let removed: Vec<EntityId> = entities
            .iter()
            .copied()
            .filter(|e| state.entities.shift_remove(e))
            .collect();
        state.update_mode();
        self.publish_removed(removed.into())
    }

    /// Deselektiert einen Brush.
    pub fn remove_brush<M>(&mut self, model: &M, brush: BrushId) -> Result<(), EditError>
    where
        M: MapGeometry + ?Sized,
    {
        self.remove_brushes(model, &[brush])
    }

    /// Deselektiert Brushes samt ihrer selektierten Flächen.
    ///
    /// Der Brush verlässt auch die Menge der Teil-Brushes.
    pub fn remove_brushes<M>(&mut self, model: &M, brushes: &[BrushId]) -> Result<(), EditError>
    where
        M: MapGeometry + ?Sized,
    {
        let state = self.current_mut();
        let mut removed = SelectionEventData::default();
        for brush in brushes {
            if state.brushes.shift_remove(brush) {
                removed.brushes.push(*brush);
            }
            state.partial_brushes.shift_remove(brush);
            for face in model.brush_faces(*brush) {
                if state.faces.shift_remove(face) {
                    removed.faces.push(*face);
                }
            }
        }
        state.update_mode();
        self.publish_removed(removed)
    }

    /// Deselektiert eine Fläche.
    pub fn remove_face<M>(&mut self, model: &M, face: FaceId) -> Result<(), EditError>
    where
        M: MapGeometry + ?Sized,
    {
        self.remove_faces(model, &[face])
    }

    /// Deselektiert Flächen und aktualisiert die Teil-Brushes.
    pub fn remove_faces<M>(&mut self, model: &M, faces: &[FaceId]) -> Result<(), EditError>
    where
        M: MapGeometry + ?Sized,
    {
        let state = self.current_mut();
        let removed: Vec<FaceId> = faces
            .iter()
            .copied()
            .filter(|f| state.faces.shift_remove(f))
            .collect();
        refresh_partial_brushes(state, model, &removed);
        state.update_mode();
        self.publish_removed(removed.into())
    }

    /// Leert die Selektion (Entities, Brushes, Flächen) des aktiven Kontexts.
    ///
    /// Die MRU-Texturliste bleibt erhalten.
    pub fn remove_all(&mut self) -> Result<(), EditError> {
        let removed = self.current_mut().clear_membership();
        self.publish_removed(removed)
    }

    // ── Ersetzen ────────────────────────────────────────────────────

    /// Ersetzt die Selektion durch die gegebenen Entities und Brushes.
    ///
    /// Meldet zuerst alles Entfernte, dann alles Installierte, auch wenn
    /// Objekte in beiden Mengen vorkommen.
    pub fn replace_selection(
        &mut self,
        entities: &[EntityId],
        brushes: &[BrushId],
    ) -> Result<(), EditError> {
        let state = self.current_mut();
        let removed = state.clear_membership();
        let added = SelectionEventData {
            entities: entities
                .iter()
                .copied()
                .filter(|e| state.entities.insert(*e))
                .collect(),
            brushes: brushes
                .iter()
                .copied()
                .filter(|b| state.brushes.insert(*b))
                .collect(),
            faces: Vec::new(),
        };
        state.update_mode();
        self.publish_removed(removed)?;
        self.publish_added(added)
    }

    /// Ersetzt die Selektion durch die gegebenen Flächen.
    pub fn replace_face_selection<M>(
        &mut self,
        model: &M,
        faces: &[FaceId],
    ) -> Result<(), EditError>
    where
        M: MapGeometry + ?Sized,
    {
        let state = self.current_mut();
        let removed = state.clear_membership();
        let added: Vec<FaceId> = faces
            .iter()
            .copied()
            .filter(|f| state.faces.insert(*f))
            .collect();
        refresh_partial_brushes(state, model, &added);
        state.update_mode();
        self.publish_removed(removed)?;
        self.publish_added(added.into())
    }
}

/// Aktualisiert den Teil-Status aller Brushes der gegebenen Flächen.
fn refresh_partial_brushes<M>(state: &mut SelectionState, model: &M, faces: &[FaceId])
where
    M: MapGeometry + ?Sized,
{
    let brushes: IndexSet<BrushId> = faces.iter().filter_map(|f| model.face_brush(*f)).collect();
    for brush in brushes {
        state.refresh_partial_brush(model, brush);
    }
}
