//! Highlight-Zustand des Viewports, gespeist aus den Selektions-Events.
//!
//! Der Renderer liest nur diese Mengen und fragt nie die Selektion selbst ab.

use crate::app::{Selection, SelectionEventData, SubscriptionToken};
use crate::core::{BrushId, EntityId, FaceId};
use indexmap::IndexSet;
use std::cell::RefCell;
use std::rc::Rc;

/// Geteilter Zeiger auf die Highlights, wie ihn `attach` liefert.
pub type SharedHighlights = Rc<RefCell<SelectionHighlights>>;

/// Registrierungen eines `SelectionHighlights` auf beiden Kanälen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSubscription {
    added: SubscriptionToken,
    removed: SubscriptionToken,
}

/// Hervorgehobene Objekte des Viewports
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionHighlights {
    entities: IndexSet<EntityId>,
    brushes: IndexSet<BrushId>,
    faces: IndexSet<FaceId>,
}

impl SelectionHighlights {
    /// Erstellt einen leeren Highlight-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registriert neue Highlights als Beobachter auf beiden Selektions-Kanälen.
    pub fn attach(selection: &mut Selection) -> (SharedHighlights, HighlightSubscription) {
        let highlights: SharedHighlights = Rc::new(RefCell::new(Self::new()));

        let sink = Rc::clone(&highlights);
        let added = selection
            .selection_added
            .subscribe(move |data: &SelectionEventData| {
                sink.borrow_mut().apply_added(data);
                Ok(())
            });
        let sink = Rc::clone(&highlights);
        let removed = selection
            .selection_removed
            .subscribe(move |data: &SelectionEventData| {
                sink.borrow_mut().apply_removed(data);
                Ok(())
            });

        (highlights, HighlightSubscription { added, removed })
    }

    /// Meldet die Highlights wieder ab.
    pub fn detach(selection: &mut Selection, subscription: HighlightSubscription) {
        selection.selection_added.unsubscribe(subscription.added);
        selection.selection_removed.unsubscribe(subscription.removed);
    }

    /// Übernimmt hinzugefügte Objekte.
    pub fn apply_added(&mut self, data: &SelectionEventData) {
        self.entities.extend(data.entities.iter().copied());
        self.brushes.extend(data.brushes.iter().copied());
        self.faces.extend(data.faces.iter().copied());
    }

    /// Entfernt gemeldete Objekte.
    pub fn apply_removed(&mut self, data: &SelectionEventData) {
        for entity in &data.entities {
            self.entities.shift_remove(entity);
        }
        for brush in &data.brushes {
            self.brushes.shift_remove(brush);
        }
        for face in &data.faces {
            self.faces.shift_remove(face);
        }
    }

    /// Hervorgehobene Entities
    pub fn entities(&self) -> &IndexSet<EntityId> {
        &self.entities
    }

    /// Hervorgehobene Brushes
    pub fn brushes(&self) -> &IndexSet<BrushId> {
        &self.brushes
    }

    /// Hervorgehobene Flächen
    pub fn faces(&self) -> &IndexSet<FaceId> {
        &self.faces
    }

    /// Gibt `true` zurück, wenn nichts hervorgehoben ist.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty() && self.brushes.is_empty() && self.faces.is_empty()
    }
}
