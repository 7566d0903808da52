//! Brush Edit Core Library.
//! Selektion, Events und Undo/Redo eines Brush-Karteneditors, als Library
//! exportiert für Viewport, Werkzeuge und Tests.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;

pub use app::{
    Command, CommandHistory, CommandKind, EditError, EditorDocument, EditorSession, EventChannel,
    EventHandler, HandlerError, RenameGroupsCommand, ReplaceSelectionCommand, Selection,
    SelectionEventData, SelectionMode, SelectionState, SubscriptionToken,
    TranslateObjectsCommand,
};
pub use core::{
    BBox, Brush, BrushId, BrushMap, Entity, EntityId, Face, FaceId, FaceSpec, Group, GroupId,
    MapGeometry, Texture, TextureId,
};
pub use render::SelectionHighlights;
pub use shared::EditorOptions;
