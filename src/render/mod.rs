//! Viewport-seitige Beobachter des Edit-Kerns.

mod selection_highlights;

pub use selection_highlights::{HighlightSubscription, SelectionHighlights, SharedHighlights};
