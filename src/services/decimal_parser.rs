//! # decimal_parser.rs
//!
//! Enthält die Parser-Schicht, die beliebige Kandidaten-Werte in exakte
//! Dezimalwerte überführt. Die hier festgelegte Zähl-Konvention für
//! signifikante Stellen und Nachkommastellen ist die verbindliche Grundlage
//! für alle Limit-Prüfungen des Matchers.

use rust_decimal::Decimal;
use serde_json::Value;

use crate::error::ValidationCoreError;

/// Ein exakter Dezimalwert mit normalisierter Darstellung.
///
/// Bei der Konstruktion werden nachlaufende Nullen im Nachkommateil entfernt,
/// "0.50" und "0.5" sind also derselbe Wert. Für die Stellen-Zählung gilt:
/// - Führende Nullen und nachlaufende Nullen im Nachkommateil zählen nicht.
/// - Nachlaufende Nullen im ganzzahligen Teil zählen ("987000" hat 6 Stellen).
/// - Null selbst hat genau eine signifikante Stelle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExactDecimal {
    inner: Decimal,
}

impl ExactDecimal {
    fn new(value: Decimal) -> Self {
        Self { inner: value.normalize() }
    }

    /// Die Gesamtzahl signifikanter Stellen: ganzzahliger Teil und
    /// Nachkommateil zusammen, ohne Vorzeichen und Dezimalpunkt.
    pub fn precision(&self) -> u32 {
        let mut remaining = self.inner.mantissa().unsigned_abs();
        let mut digits = 1u32;
        while remaining >= 10 {
            remaining /= 10;
            digits += 1;
        }
        digits
    }

    /// Die Anzahl der Stellen nach dem Dezimalpunkt (0 für ganzzahlige Werte).
    pub fn decimal_places(&self) -> u32 {
        self.inner.scale()
    }
}

/// Versucht, einen beliebigen Kandidaten-Wert als exakten Dezimalwert zu
/// interpretieren. Dezimaltrennzeichen ist immer ".".
///
/// - `null` steht laut Kontrakt für "kein Wert" und liefert `Ok(None)`.
/// - Strings und JSON-Zahlen werden ohne Rundungsverlust geparst;
///   Exponenten-Schreibweise (z.B. "1.5e3") wird akzeptiert.
/// - Alle übrigen Typen (Boolean, Array, Objekt) sind nicht interpretierbar.
///
/// # Arguments
/// * `candidate` - Der zu interpretierende Wert beliebiger Form.
///
/// # Returns
/// Ein `Result`, das bei Erfolg `None` (kein Wert) oder den geparsten
/// `ExactDecimal` enthält, andernfalls einen `ValidationCoreError`.
pub fn parse_candidate(candidate: &Value) -> Result<Option<ExactDecimal>, ValidationCoreError> {
    match candidate {
        Value::Null => Ok(None),
        Value::String(literal) => parse_literal(literal).map(Some),
        Value::Number(number) => parse_literal(&number.to_string()).map(Some),
        other => Err(ValidationCoreError::UnsupportedCandidateType(
            type_name(other).to_string(),
        )),
    }
}

/// Parst ein einzelnes Dezimal-Literal exakt, also ohne stille Rundung.
fn parse_literal(literal: &str) -> Result<ExactDecimal, ValidationCoreError> {
    let parsed = Decimal::from_str_exact(literal).or_else(|primary| {
        // from_str_exact kennt keine Exponenten-Schreibweise.
        if literal.contains('e') || literal.contains('E') {
            Decimal::from_scientific(literal)
        } else {
            Err(primary)
        }
    })?;
    Ok(ExactDecimal::new(parsed))
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
