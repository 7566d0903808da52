//! Texturen und Gruppen: reine Namensträger im Modell.

/// Textur-Referenz (nur Name, Pixeldaten liegen außerhalb des Kerns)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    /// Texturname, wie er in der Karte referenziert wird
    pub name: String,
}

/// Benannte Gruppe von Entities
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Anzeigename der Gruppe
    pub name: String,
}
