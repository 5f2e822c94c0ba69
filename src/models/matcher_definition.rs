//! # matcher_definition.rs
//!
//! Definiert die Rust-Datenstrukturen für extern (z.B. als TOML-Dokument)
//! gepflegte Matcher-Konfigurationen. Die Struktur trennt beschreibende
//! Metadaten von den eigentlichen Limit-Regeln und verwendet `serde` für
//! die Serialisierung und Deserialisierung.

use serde::{Serialize, Deserialize};

use crate::error::ValidationCoreError;
use crate::services::decimal_matcher::DigitLimits;

/// Beschreibende Metadaten einer Matcher-Definition, inklusive optionaler Felder.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct DefinitionMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Die Limit-Regeln, die zur Validierung eines Dezimalwerts herangezogen werden.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct LimitRules {
    /// Maximale Gesamtzahl signifikanter Stellen. Fehlt der Wert, gilt das
    /// Standard-Limit von `MAX_DIGITS_COUNT`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_digits: Option<u32>,
    /// Maximale Anzahl an Nachkommastellen. Nur in Kombination mit
    /// `max_digits` zulässig.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_decimal_places: Option<u32>,
}

/// Das Haupt-Struct, das eine vollständige Matcher-Definition kapselt.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct MatcherDefinition {
    #[serde(default)]
    pub metadata: DefinitionMetadata,
    #[serde(default)]
    pub limits: LimitRules,
}

impl MatcherDefinition {
    /// Übersetzt die deklarativen Limit-Regeln in die geschlossene
    /// `DigitLimits`-Konfiguration des Matchers.
    ///
    /// Die drei zulässigen Kombinationen entsprechen den drei
    /// Konstruktions-Varianten des Matchers. Ein Nachkommastellen-Limit ohne
    /// Gesamtstellen-Limit ist unzulässig.
    ///
    /// # Returns
    /// Ein `Result`, das entweder die `DigitLimits` oder einen
    /// `ValidationCoreError::LimitConfiguration` enthält.
    pub fn digit_limits(&self) -> Result<DigitLimits, ValidationCoreError> {
        match (self.limits.max_digits, self.limits.max_decimal_places) {
            (None, None) => Ok(DigitLimits::Default),
            (Some(max_digits), None) => Ok(DigitLimits::TotalDigits(max_digits)),
            (Some(max_digits), Some(max_places)) => {
                Ok(DigitLimits::TotalAndDecimalPlaces(max_digits, max_places))
            }
            (None, Some(_)) => Err(ValidationCoreError::LimitConfiguration(
                "max_decimal_places requires max_digits to be set as well.".to_string(),
            )),
        }
    }
}
