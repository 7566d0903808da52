//! Zentrale Konfiguration des Edit-Kerns.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Selektion ───────────────────────────────────────────────────────

/// Maximale Länge der Liste zuletzt benutzter Texturen.
pub const MRU_TEXTURE_LIMIT: usize = 10;

// ── History ─────────────────────────────────────────────────────────

/// Maximale Anzahl Undo-Schritte, ältere Einträge werden verworfen.
pub const HISTORY_MAX_DEPTH: usize = 200;

// ── Modell ──────────────────────────────────────────────────────────

/// Kantenlänge der Bounding-Box von Punkt-Entities (Welteinheiten).
pub const POINT_ENTITY_SIZE: f32 = 16.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `brush_edit_core.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    /// Länge der MRU-Texturliste (mindestens 1)
    pub mru_texture_limit: usize,
    /// Maximale Undo-Tiefe
    pub history_max_depth: usize,
    /// Aufeinanderfolgende, passende Commands zu einem Undo-Schritt zusammenfassen
    pub collate_commands: bool,
    /// Kantenlänge der Bounding-Box von Punkt-Entities
    pub point_entity_size: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            mru_texture_limit: MRU_TEXTURE_LIMIT,
            history_max_depth: HISTORY_MAX_DEPTH,
            collate_commands: true,
            point_entity_size: POINT_ENTITY_SIZE,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("brush_edit_core"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("brush_edit_core.toml")
    }

    /// Effektive MRU-Länge (eine Liste der Länge 0 wäre nutzlos).
    pub fn effective_mru_limit(&self) -> usize {
        self.mru_texture_limit.max(1)
    }
}
