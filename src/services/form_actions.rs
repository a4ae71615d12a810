//! User actions against one session: batched form edits and submit.
//!
//! DESIGN
//! ======
//! The HTML form posts every widget at once as `<instrument slug>.<field>`
//! pairs. Each pair is applied on its own; a rejected value is reported and
//! the rest of the form still goes through. Submit then snapshots whatever
//! the form holds.

use tracing::{debug, warn};

use crate::catalog::Instrument;
use crate::form::{Field, FormError, FormState};
use crate::state::SessionState;
use crate::submission::{SubmissionSnapshot, snapshot};

/// One form value that could not be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRejection {
    pub widget: String,
    pub code: &'static str,
    pub message: String,
}

impl FieldRejection {
    fn new(widget: &str, err: &FormError) -> Self {
        Self { widget: widget.to_owned(), code: err.error_code(), message: err.to_string() }
    }
}

#[must_use]
pub fn widget_name(instrument: Instrument, field: Field) -> String {
    format!("{}.{}", instrument.slug(), field.as_str())
}

/// Map a widget name back to its storage key.
///
/// # Errors
///
/// Returns a lookup error when the slug or field is not recognised.
pub fn parse_widget_name(name: &str) -> Result<(Instrument, Field), FormError> {
    let (slug, field) = name
        .rsplit_once('.')
        .ok_or_else(|| FormError::UnknownField(name.to_owned()))?;
    let instrument = Instrument::from_slug(slug).ok_or_else(|| FormError::UnknownInstrument(slug.to_owned()))?;
    Ok((instrument, Field::parse(field)?))
}

/// Apply every `(widget, raw value)` pair independently.
pub fn apply_form_submission(form: &mut FormState, pairs: &[(String, String)]) -> Vec<FieldRejection> {
    let mut rejections = Vec::new();
    for (widget, raw) in pairs {
        let applied = parse_widget_name(widget)
            .and_then(|(instrument, field)| form.set_raw(instrument.as_str(), field, raw));
        if let Err(err) = applied {
            warn!(%widget, error = %err, "form value rejected");
            rejections.push(FieldRejection::new(widget, &err));
        }
    }
    rejections
}

// =============================================================================
// SUBMIT
// =============================================================================

#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    pub snapshot: SubmissionSnapshot,
    /// The form had not changed since the previous submit.
    pub unchanged: bool,
}

/// Snapshot the session's form and make it the current submission.
pub fn submit(session: &mut SessionState) -> SubmitOutcome {
    let snapshot = snapshot(&session.form);
    let unchanged = session.last_submission.as_ref() == Some(&snapshot);
    if unchanged {
        debug!("resubmitted without changes");
    }
    session.last_submission = Some(snapshot.clone());
    SubmitOutcome { snapshot, unchanged }
}

#[cfg(test)]
#[path = "form_actions_test.rs"]
mod tests;
