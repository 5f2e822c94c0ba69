//! # src/error.rs
//!
//! Definiert den zentralen Fehlertyp für die gesamte validation_core-Bibliothek.
//! Verwendet `thiserror` zur einfachen Erstellung von aussagekräftigen Fehlern
//! und zur automatischen Konvertierung von untergeordneten Fehlertypen.

use thiserror::Error;

/// Der zentrale Fehlertyp für alle Operationen in der `validation_core`-Bibliothek.
///
/// Dieser Enum fasst Fehler aus allen Modulen (Parser, Definitionen, Serialisierung)
/// an einem Ort zusammen und bildet die einheitliche Fehler-API der Bibliothek.
/// Validierungs-Befunde selbst sind keine Fehler in diesem Sinne: Sie werden als
/// Einträge im `ValidationResult` zurückgegeben, nicht über diesen Typ.
#[derive(Error, Debug)]
pub enum ValidationCoreError {
    /// Ein Fehler bei der Konvertierung eines Kandidaten in einen exakten Dezimalwert.
    #[error("Amount Conversion Error: {0}")]
    AmountConversion(#[from] rust_decimal::Error),

    /// Der Kandidat hat einen Typ, der nicht als Dezimalzahl interpretierbar ist
    /// (z.B. Boolean, Array oder Objekt).
    #[error("Unsupported candidate type: {0}")]
    UnsupportedCandidateType(String),

    /// Ein Fehler bei der Verarbeitung von JSON (Serialisierung oder Deserialisierung).
    #[error("JSON Processing Error: {0}")]
    Json(#[from] serde_json::Error),

    /// Ein Fehler bei der Deserialisierung von TOML (z.B. beim Laden einer Matcher-Definition).
    #[error("TOML Deserialization Error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Die Limit-Konfiguration einer Matcher-Definition ist in sich widersprüchlich.
    #[error("Invalid limit configuration: {0}")]
    LimitConfiguration(String),
}
