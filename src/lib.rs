//! # validation_core
//!
//! Die Kernlogik eines wiederverwendbaren Dezimalzahl-Validierungsbausteins.
//! Diese Bibliothek stellt die Datenstrukturen und Funktionen bereit, um
//! beliebige Eingabewerte als wohlgeformte Dezimalzahlen innerhalb
//! konfigurierbarer Präzisions-Limits zu klassifizieren.

// Deklariert die Hauptmodule der Bibliothek und macht sie öffentlich.
pub mod error;
pub mod models;
pub mod services;

// Re-exportiert die wichtigsten öffentlichen Typen für eine einfachere Nutzung.
// Anstatt `validation_lib::services::decimal_matcher::DecimalNumberMatcher`
// können Benutzer nun `validation_lib::DecimalNumberMatcher` schreiben.

// Modelle
pub use models::matcher_definition::{DefinitionMetadata, LimitRules, MatcherDefinition};
pub use models::validation_result::{ValidationError, ValidationErrorKind, ValidationResult};

// Services
pub use services::decimal_matcher::{
    codes, load_matcher_definition, DecimalNumberMatcher, DigitLimits, MAX_DIGITS_COUNT,
};
pub use services::decimal_parser::{parse_candidate, ExactDecimal};

// Fehler-API
pub use error::ValidationCoreError;
