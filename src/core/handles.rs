//! Generationale Handles auf Objekte der BrushMap.
//!
//! Selektion und Commands halten nur diese Schlüssel, niemals Referenzen.
//! Wird ein Objekt entfernt, liefert jeder Lookup mit dem alten Schlüssel
//! `None` (Generationszähler der Slot-Map).

slotmap::new_key_type! {
    /// Handle auf eine Entity (Punkt- oder Brush-Entity).
    pub struct EntityId;
    /// Handle auf einen Brush.
    pub struct BrushId;
    /// Handle auf eine Brush-Fläche.
    pub struct FaceId;
    /// Handle auf eine Textur.
    pub struct TextureId;
    /// Handle auf eine benannte Gruppe.
    pub struct GroupId;
}
