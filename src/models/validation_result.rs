//! # validation_result.rs
//!
//! Definiert den Ergebnis-Container, in dem eine Regel-Auswertung ihre
//! Validierungsfehler sammelt. Ein leeres Ergebnis bedeutet, dass der
//! geprüfte Wert gültig ist.

use serde::{Serialize, Deserialize};
use std::fmt;

use crate::error::ValidationCoreError;

/// Unterscheidet die Kategorien, unter denen ein Validierungsfehler gemeldet wird.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Der Wert hat einen falschen Typ oder ein nicht interpretierbares Format.
    InvalidType,
    /// Der Wert ist typkorrekt, verletzt aber eine inhaltliche Regel.
    InvalidValue,
}

/// Ein einzelner, typisierter Validierungsfehler mit stabilem Code.
///
/// Der `code` ist die programmatische Kennung, über die Aufrufer verzweigen
/// oder lokalisieren; die `message` ist die englische Standard-Beschreibung
/// für Logs und Fehlerberichte.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub code: String,
    pub message: String,
    pub kind: ValidationErrorKind,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Sammelt die Validierungsfehler einer einzelnen Regel-Auswertung.
///
/// Der Container wird pro Auswertung frisch erzeugt und besitzt keinen
/// geteilten Zustand. Die Reihenfolge der Einträge entspricht der Reihenfolge,
/// in der die Prüfungen fehlgeschlagen sind.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Erzeugt ein leeres, gültiges Ergebnis.
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Fügt einen Fehler der Kategorie `InvalidType` hinzu.
    ///
    /// # Arguments
    /// * `code` - Der stabile Fehlercode (z.B. "doubleNumber.e001").
    /// * `message` - Die menschenlesbare Standard-Beschreibung.
    pub fn add_invalid_type_error(&mut self, code: &str, message: &str) {
        self.errors.push(ValidationError {
            code: code.to_string(),
            message: message.to_string(),
            kind: ValidationErrorKind::InvalidType,
        });
    }

    /// Fügt einen Fehler der Kategorie `InvalidValue` hinzu.
    pub fn add_invalid_value_error(&mut self, code: &str, message: &str) {
        self.errors.push(ValidationError {
            code: code.to_string(),
            message: message.to_string(),
            kind: ValidationErrorKind::InvalidValue,
        });
    }

    /// Gibt `true` zurück, wenn keine Fehler gesammelt wurden.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Die gesammelten Fehler in Einfüge-Reihenfolge.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Prüft, ob ein Fehler mit dem angegebenen Code enthalten ist.
    pub fn has_error_code(&self, code: &str) -> bool {
        self.errors.iter().any(|error| error.code == code)
    }

    /// Serialisiert das Ergebnis in einen formatierten JSON-String,
    /// z.B. für die Übergabe an das aufrufende Framework.
    pub fn to_json(&self) -> Result<String, ValidationCoreError> {
        let json_str = serde_json::to_string_pretty(self)?;
        Ok(json_str)
    }
}
