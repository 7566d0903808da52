use super::SelectionEventData;
use crate::core::{BrushId, EntityId, FaceId, MapGeometry, TextureId};
use indexmap::IndexSet;

/// Selektionsmodus, abgeleitet aus den nicht-leeren Mengen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// Nichts selektiert
    #[default]
    None,
    /// Einzelne Flächen selektiert
    Faces,
    /// Nur Brushes selektiert
    Brushes,
    /// Nur Entities selektiert
    Entities,
    /// Brushes und Entities gleichzeitig selektiert
    BrushesAndEntities,
}

/// Ein Selektions-Snapshot (ein Eintrag des Selektions-Stacks)
///
/// Alle Mengen sind geordnet (`IndexSet`) für deterministische
/// Event- und Abfragereihenfolge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    /// Selektierte Entities in Einfügereihenfolge
    pub entities: IndexSet<EntityId>,
    /// Vollständig selektierte Brushes
    pub brushes: IndexSet<BrushId>,
    /// Brushes, von denen einige, aber nicht alle Flächen selektiert sind
    pub partial_brushes: IndexSet<BrushId>,
    /// Einzeln selektierte Flächen
    pub faces: IndexSet<FaceId>,
    /// Zuletzt benutzte Texturen, neueste zuletzt
    pub mru_textures: Vec<TextureId>,
    /// Aus den Mengen abgeleiteter Modus
    pub mode: SelectionMode,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Leer, wenn weder Entities noch Brushes noch Flächen selektiert sind.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty() && self.brushes.is_empty() && self.faces.is_empty()
    }

    /// Berechnet den Modus aus den aktuellen Mengen neu.
    pub fn update_mode(&mut self) {
        self.mode = if !self.faces.is_empty() {
            SelectionMode::Faces
        } else if !self.brushes.is_empty() && !self.entities.is_empty() {
            SelectionMode::BrushesAndEntities
        } else if !self.brushes.is_empty() {
            SelectionMode::Brushes
        } else if !self.entities.is_empty() {
            SelectionMode::Entities
        } else {
            SelectionMode::None
        };
    }

    /// Aktuelle Mitgliedschaft als Event-Payload.
    pub fn membership(&self) -> SelectionEventData {
        SelectionEventData {
            entities: self.entities.iter().copied().collect(),
            brushes: self.brushes.iter().copied().collect(),
            faces: self.faces.iter().copied().collect(),
        }
    }

    /// Leert Entities, Brushes, Teil-Brushes und Flächen.
    ///
    /// Die MRU-Texturliste bleibt erhalten. Gibt die vorherige
    /// Mitgliedschaft zurück.
    pub fn clear_membership(&mut self) -> SelectionEventData {
        let previous = SelectionEventData {
            entities: self.entities.drain(..).collect(),
            brushes: self.brushes.drain(..).collect(),
            faces: self.faces.drain(..).collect(),
        };
        self.partial_brushes.clear();
        self.update_mode();
        previous
    }

    /// Aktualisiert den Teil-Status eines Brushes anhand seiner selektierten Flächen.
    pub(crate) fn refresh_partial_brush<M>(&mut self, model: &M, brush: BrushId)
    where
        M: MapGeometry + ?Sized,
    {
        let faces = model.brush_faces(brush);
        let selected = faces.iter().filter(|f| self.faces.contains(*f)).count();
        if selected > 0 && selected < faces.len() {
            self.partial_brushes.insert(brush);
        } else {
            self.partial_brushes.shift_remove(&brush);
        }
    }

    /// Schiebt eine Textur an das Ende der MRU-Liste und kürzt vorne.
    pub(crate) fn touch_texture(&mut self, texture: TextureId, limit: usize) {
        self.mru_textures.retain(|t| *t != texture);
        self.mru_textures.push(texture);
        if self.mru_textures.len() > limit {
            let overflow = self.mru_textures.len() - limit;
            self.mru_textures.drain(..overflow);
        }
    }
}
