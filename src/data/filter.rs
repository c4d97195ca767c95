use thiserror::Error;

use super::model::DataPoint;

// ---------------------------------------------------------------------------
// Filter specification: the active constraints per dimension
// ---------------------------------------------------------------------------

/// Layer selection equivalent to "no layer constraint". A UI convention from
/// the combo box, not a value that occurs in the data.
pub const LAYER_ALL: &str = "All";

/// The active query. `None` on any field means "no constraint on this
/// dimension". Year bounds are inclusive; an exact-year query is expressed
/// as `year_from == year_to`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub country: Option<String>,
    pub indicator: Option<String>,
    pub year_from: Option<i32>,
    pub year_to: Option<i32>,
    pub layer: Option<String>,
}

impl FilterSpec {
    fn has_layer_constraint(&self) -> bool {
        self.layer.as_deref().is_some_and(|l| l != LAYER_ALL)
    }
}

// ---------------------------------------------------------------------------
// Evaluation errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The record store is empty (nothing loaded, or an empty document).
    /// Distinct from a bad filter so the UI can word the message accordingly.
    #[error("no data points are loaded")]
    NoData,

    /// Inverted year range supplied by the user.
    #[error("invalid year range: {from} is after {to}")]
    InvalidYearRange { from: i32, to: i32 },
}

// ---------------------------------------------------------------------------
// Evaluator
// ---------------------------------------------------------------------------

/// Return indices of points that pass every active constraint in `spec`.
///
/// The result preserves the relative order of `points` (stable filter) and is
/// recomputed in full on every call; the function is pure and never mutates
/// its inputs.
///
/// A point survives when all of the following hold:
/// * `spec.country` / `spec.indicator` are unset or match exactly
///   (case-sensitive, no partial match)
/// * its year falls inside the inclusive `[year_from, year_to]` range,
///   treating an unset bound as open
/// * its layer matches, where `None` and [`LAYER_ALL`] mean unconstrained
/// * its value is a finite number; null/NaN points are dropped regardless
///   of the spec, even an empty one
///
/// Fails with [`EvalError::InvalidYearRange`] when both bounds are set and
/// inverted (no partial result is produced), and with [`EvalError::NoData`]
/// when `points` is empty.
pub fn evaluate(points: &[DataPoint], spec: &FilterSpec) -> Result<Vec<usize>, EvalError> {
    if points.is_empty() {
        return Err(EvalError::NoData);
    }
    if let (Some(from), Some(to)) = (spec.year_from, spec.year_to) {
        if from > to {
            return Err(EvalError::InvalidYearRange { from, to });
        }
    }

    let indices = points
        .iter()
        .enumerate()
        .filter(|(_, p)| matches_spec(p, spec))
        .map(|(i, _)| i)
        .collect();
    Ok(indices)
}

fn matches_spec(point: &DataPoint, spec: &FilterSpec) -> bool {
    if let Some(country) = &spec.country {
        if point.country != *country {
            return false;
        }
    }
    if let Some(indicator) = &spec.indicator {
        if point.indicator != *indicator {
            return false;
        }
    }
    if let Some(from) = spec.year_from {
        if point.year < from {
            return false;
        }
    }
    if let Some(to) = spec.year_to {
        if point.year > to {
            return false;
        }
    }
    if spec.has_layer_constraint() {
        // A missing layer never matches a concrete constraint.
        if point.layer.as_deref() != spec.layer.as_deref() {
            return false;
        }
    }
    point.has_value()
}
