//! Form state store: one `TrackRecord` per catalog instrument.
//!
//! DESIGN
//! ======
//! The store is keyed by `(Instrument, Field)` only. Widget identifiers and
//! HTTP paths are mapped onto that pair by the caller, so nothing here knows
//! about the UI. Every update validates before writing; a rejected update
//! leaves the previous value in place.
//!
//! Records live in a fixed array indexed by `Instrument::index`, so every
//! catalog instrument has exactly one record from construction onward and a
//! read can never miss.

use serde::{Deserialize, Serialize};

use crate::catalog::{Bpm, Instrument, MAX_BPM, MIN_BPM, MusicalKey, ProductionStatus};

// =============================================================================
// FIELDS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Bpm,
    Key,
    Notes,
    Status,
    Gear,
}

impl Field {
    /// Form column order.
    pub const ALL: [Self; 5] = [Self::Bpm, Self::Key, Self::Notes, Self::Status, Self::Gear];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bpm => "bpm",
            Self::Key => "key",
            Self::Notes => "notes",
            Self::Status => "status",
            Self::Gear => "gear",
        }
    }

    /// Parse a field name.
    ///
    /// # Errors
    ///
    /// Unknown names return `FormError::UnknownField`, a lookup failure.
    pub fn parse(raw: &str) -> Result<Self, FormError> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == raw)
            .ok_or_else(|| FormError::UnknownField(raw.to_owned()))
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Untyped field value as it crosses the UI boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(i64),
    Text(String),
}

impl FieldValue {
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }
}

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),
    #[error("unknown field: {0}")]
    UnknownField(String),
    #[error("invalid {field}: {reason}")]
    Validation { field: Field, reason: String },
}

impl FormError {
    /// Lookup failures name something outside the catalog; the rest are
    /// out-of-domain values.
    #[must_use]
    pub fn is_lookup(&self) -> bool {
        matches!(self, Self::UnknownInstrument(_) | Self::UnknownField(_))
    }

    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownInstrument(_) => "E_UNKNOWN_INSTRUMENT",
            Self::UnknownField(_) => "E_UNKNOWN_FIELD",
            Self::Validation { .. } => "E_VALIDATION",
        }
    }

    fn invalid(field: Field, reason: impl Into<String>) -> Self {
        Self::Validation { field, reason: reason.into() }
    }
}

// =============================================================================
// TRACK RECORD
// =============================================================================

/// Editable fields for one instrument.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TrackRecord {
    pub bpm: Bpm,
    pub key: MusicalKey,
    pub notes: String,
    pub status: ProductionStatus,
    pub gear: String,
}

impl TrackRecord {
    #[must_use]
    pub fn value(&self, field: Field) -> FieldValue {
        match field {
            Field::Bpm => FieldValue::Number(i64::from(self.bpm.get())),
            Field::Key => FieldValue::text(self.key.as_str()),
            Field::Notes => FieldValue::text(self.notes.clone()),
            Field::Status => FieldValue::text(self.status.as_str()),
            Field::Gear => FieldValue::text(self.gear.clone()),
        }
    }

    /// Validate `value` for `field`, then overwrite. No write on error.
    fn apply(&mut self, field: Field, value: FieldValue) -> Result<(), FormError> {
        match (field, value) {
            (Field::Bpm, FieldValue::Number(n)) => {
                self.bpm = Bpm::new(n)
                    .ok_or_else(|| FormError::invalid(field, format!("{n} is outside {MIN_BPM}..={MAX_BPM}")))?;
            }
            (Field::Key, FieldValue::Text(s)) => {
                self.key = MusicalKey::from_name(&s)
                    .ok_or_else(|| FormError::invalid(field, format!("'{s}' is not a known key")))?;
            }
            (Field::Status, FieldValue::Text(s)) => {
                self.status = ProductionStatus::from_name(&s)
                    .ok_or_else(|| FormError::invalid(field, format!("'{s}' is not a known production status")))?;
            }
            (Field::Notes, FieldValue::Text(s)) => self.notes = s,
            (Field::Gear, FieldValue::Text(s)) => self.gear = s,
            (Field::Bpm, FieldValue::Text(_)) => return Err(FormError::invalid(field, "expected an integer")),
            (_, FieldValue::Number(_)) => return Err(FormError::invalid(field, "expected text")),
        }
        Ok(())
    }
}

// =============================================================================
// FORM STATE
// =============================================================================

/// Per-session form contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    records: [TrackRecord; Instrument::ALL.len()],
}

impl FormState {
    /// A fully initialized store with every instrument at defaults.
    #[must_use]
    pub fn new() -> Self {
        Self { records: std::array::from_fn(|_| TrackRecord::default()) }
    }

    /// Seed defaults for every instrument without a record.
    ///
    /// The store is seeded in `new` and a slot is never emptied, so this
    /// never overwrites: repeated calls keep every edit.
    #[allow(clippy::unused_self)]
    pub fn initialize(&mut self) {}

    /// Typed read used when snapshotting.
    #[must_use]
    pub fn record(&self, instrument: Instrument) -> &TrackRecord {
        &self.records[instrument.index()]
    }

    /// Read one field.
    ///
    /// # Errors
    ///
    /// Returns `FormError::UnknownInstrument` if `instrument` is not in the catalog.
    pub fn get(&self, instrument: &str, field: Field) -> Result<FieldValue, FormError> {
        let instrument = lookup(instrument)?;
        Ok(self.record(instrument).value(field))
    }

    /// Validate and overwrite one field.
    ///
    /// # Errors
    ///
    /// Returns `FormError::UnknownInstrument` for names outside the catalog and
    /// `FormError::Validation` when `value` is outside the field's domain. The
    /// stored value is unchanged on error.
    pub fn set(&mut self, instrument: &str, field: Field, value: FieldValue) -> Result<(), FormError> {
        let instrument = lookup(instrument)?;
        self.set_typed(instrument, field, value)
    }

    /// Like `set`, but takes the raw text an HTML input submits.
    ///
    /// # Errors
    ///
    /// Same as `set`; a non-integer BPM is a validation error.
    pub fn set_raw(&mut self, instrument: &str, field: Field, raw: &str) -> Result<(), FormError> {
        let instrument = lookup(instrument)?;
        let value = parse_raw(field, raw)?;
        self.set_typed(instrument, field, value)
    }

    fn set_typed(&mut self, instrument: Instrument, field: Field, value: FieldValue) -> Result<(), FormError> {
        self.records[instrument.index()].apply(field, value)
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

fn lookup(instrument: &str) -> Result<Instrument, FormError> {
    Instrument::from_name(instrument).ok_or_else(|| FormError::UnknownInstrument(instrument.to_owned()))
}

fn parse_raw(field: Field, raw: &str) -> Result<FieldValue, FormError> {
    match field {
        Field::Bpm => raw
            .trim()
            .parse::<i64>()
            .map(FieldValue::Number)
            .map_err(|_| FormError::invalid(field, format!("'{raw}' is not an integer"))),
        Field::Key | Field::Notes | Field::Status | Field::Gear => Ok(FieldValue::text(raw)),
    }
}

#[cfg(test)]
#[path = "form_test.rs"]
mod tests;
