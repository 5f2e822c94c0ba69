//! # decimal_matcher.rs
//!
//! Enthält die Logik zur Validierung, dass ein Kandidaten-Wert eine
//! wohlgeformte Dezimalzahl innerhalb konfigurierbarer Präzisions-Limits
//! darstellt. Der Matcher ist als Blatt-Regel für ein übergeordnetes
//! Validierungs-Framework gedacht: Er klassifiziert Werte nur, er rundet
//! oder normalisiert sie nicht.

use serde_json::Value;

use crate::error::ValidationCoreError;
use crate::models::matcher_definition::MatcherDefinition;
use crate::models::validation_result::ValidationResult;
use crate::services::decimal_parser::{parse_candidate, ExactDecimal};

/// Standard-Limit für die Gesamtzahl signifikanter Stellen, wenn der Matcher
/// ohne eigene Konfiguration erzeugt wird.
pub const MAX_DIGITS_COUNT: u32 = 11;

/// Die stabilen Fehlercodes des Matchers. Aufrufer verzweigen oder
/// lokalisieren über diese Kennungen, nicht über die Fehlertexte.
pub mod codes {
    /// Der Wert ist keine interpretierbare Dezimalzahl.
    pub const INVALID_DECIMAL: &str = "doubleNumber.e001";
    /// Die Gesamtzahl signifikanter Stellen überschreitet das Limit.
    pub const MAX_DIGITS_EXCEEDED: &str = "doubleNumber.e002";
    /// Die Anzahl der Nachkommastellen überschreitet das Limit.
    pub const MAX_DECIMAL_PLACES_EXCEEDED: &str = "doubleNumber.e003";
}

/// Die drei zulässigen Limit-Konfigurationen des Matchers.
///
/// Der ursprüngliche Kontrakt unterscheidet nach Konstruktions-Stelligkeit
/// (kein, ein oder zwei Parameter). Hier wird das als geschlossener Enum
/// abgebildet: Eine Nachkommastellen-Grenze ohne Gesamtstellen-Grenze ist
/// damit nicht darstellbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitLimits {
    /// Keine eigene Konfiguration: Gesamtstellen-Limit `MAX_DIGITS_COUNT`,
    /// Nachkommastellen unbegrenzt.
    Default,
    /// Nur die Gesamtzahl der Stellen ist begrenzt.
    TotalDigits(u32),
    /// Gesamtstellen und Nachkommastellen sind gemeinsam begrenzt.
    TotalAndDecimalPlaces(u32, u32),
}

impl DigitLimits {
    /// Das effektive Gesamtstellen-Limit dieser Konfiguration.
    fn max_digits(&self) -> u32 {
        match self {
            DigitLimits::Default => MAX_DIGITS_COUNT,
            DigitLimits::TotalDigits(max_digits) => *max_digits,
            DigitLimits::TotalAndDecimalPlaces(max_digits, _) => *max_digits,
        }
    }

    /// Das Nachkommastellen-Limit, falls eines konfiguriert wurde.
    fn max_decimal_places(&self) -> Option<u32> {
        match self {
            DigitLimits::TotalAndDecimalPlaces(_, max_places) => Some(*max_places),
            _ => None,
        }
    }
}

/// Validiert, dass ein Wert eine Dezimalzahl (oder `null`) darstellt und die
/// konfigurierten Präzisions-Limits einhält.
///
/// Der Matcher hält ausschließlich seine unveränderliche Konfiguration und
/// kann deshalb gefahrlos geteilt und parallel verwendet werden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalNumberMatcher {
    limits: DigitLimits,
}

impl DecimalNumberMatcher {
    /// Erzeugt einen Matcher mit dem Standard-Limit von `MAX_DIGITS_COUNT`
    /// Gesamtstellen und unbegrenzten Nachkommastellen.
    pub fn new() -> Self {
        Self { limits: DigitLimits::Default }
    }

    /// Erzeugt einen Matcher, der nur die Gesamtzahl der Stellen begrenzt.
    /// Das angegebene Limit ersetzt den Standardwert von `MAX_DIGITS_COUNT`.
    pub fn with_max_digits(max_digits: u32) -> Self {
        Self { limits: DigitLimits::TotalDigits(max_digits) }
    }

    /// Erzeugt einen Matcher, der Gesamtstellen und Nachkommastellen
    /// gemeinsam begrenzt. Beide Bedingungen müssen erfüllt sein.
    pub fn with_limits(max_digits: u32, max_decimal_places: u32) -> Self {
        Self { limits: DigitLimits::TotalAndDecimalPlaces(max_digits, max_decimal_places) }
    }

    /// Erzeugt einen Matcher aus einer deklarativen `MatcherDefinition`.
    ///
    /// # Returns
    /// Ein `Result`, das entweder den konfigurierten Matcher oder einen
    /// `ValidationCoreError` enthält, falls die Definition unzulässig ist.
    pub fn from_definition(definition: &MatcherDefinition) -> Result<Self, ValidationCoreError> {
        Ok(Self { limits: definition.digit_limits()? })
    }

    /// Die aktive Limit-Konfiguration des Matchers.
    pub fn limits(&self) -> DigitLimits {
        self.limits
    }

    /// Prüft einen Kandidaten-Wert gegen die konfigurierten Limits.
    ///
    /// Die Operation ist total: Sie liefert immer ein `ValidationResult` und
    /// gibt Parser-Fehler niemals an den Aufrufer weiter. Die drei Prüfungen
    /// laufen unabhängig voneinander, ein Ergebnis kann also mehrere
    /// Fehlercodes gleichzeitig enthalten.
    ///
    /// # Arguments
    /// * `candidate` - Der zu prüfende Wert beliebiger Form.
    ///
    /// # Returns
    /// Ein `ValidationResult`; ein leeres Ergebnis bedeutet, dass der Wert
    /// gültig ist.
    pub fn match_value(&self, candidate: &Value) -> ValidationResult {
        let mut result = ValidationResult::new();

        // Parser-Fehler werden hier vollständig absorbiert: Ein nicht
        // interpretierbarer Wert wird zum Fehlercode e001, ein fehlender
        // Wert (null) bleibt gültig.
        let decimal = match parse_candidate(candidate) {
            Ok(parsed) => parsed,
            Err(_) => {
                result.add_invalid_type_error(
                    codes::INVALID_DECIMAL,
                    "The value is not a valid decimal number.",
                );
                None
            }
        };

        if is_precision_greater(decimal.as_ref(), self.limits.max_digits()) {
            result.add_invalid_type_error(
                codes::MAX_DIGITS_EXCEEDED,
                "The value exceeded maximum number of digits.",
            );
        }

        if is_dec_places_greater(decimal.as_ref(), self.limits.max_decimal_places()) {
            result.add_invalid_type_error(
                codes::MAX_DECIMAL_PLACES_EXCEEDED,
                "The value exceeded maximum number of decimal places.",
            );
        }

        result
    }
}

impl Default for DecimalNumberMatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Ein fehlender Wert hat keine Stellen und kann kein Limit überschreiten.
fn is_precision_greater(decimal: Option<&ExactDecimal>, max_digits: u32) -> bool {
    decimal.map_or(false, |value| value.precision() > max_digits)
}

/// Ohne konfiguriertes Limit (oder ohne Wert) gibt es keine Überschreitung.
fn is_dec_places_greater(decimal: Option<&ExactDecimal>, max_places: Option<u32>) -> bool {
    match (decimal, max_places) {
        (Some(value), Some(max_places)) => value.decimal_places() > max_places,
        _ => false,
    }
}

/// Nimmt einen TOML-String entgegen und deserialisiert ihn in eine `MatcherDefinition`.
pub fn load_matcher_definition(toml_str: &str) -> Result<MatcherDefinition, ValidationCoreError> {
    let definition: MatcherDefinition = toml::from_str(toml_str)?;
    Ok(definition)
}
