use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// DataPoint – one (indicator, country, year) observation
// ---------------------------------------------------------------------------

/// Label substituted at display time for missing layer/unit fields.
/// The transformation pipeline also emits it literally, so it doubles as a
/// sentinel that option derivation keeps out of the selectable sets.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// A single observation from the consolidated dataset (one row).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub indicator: String,
    pub country: String,
    pub year: i32,
    /// Observed value; `None` when the source cell was empty or null.
    /// Points without a finite value never survive filtering.
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    /// Categorical tier label (e.g. "Basic", "Intermediate", "Advanced").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Sheet of the source workbook this row came from, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet_source: Option<String>,
}

impl DataPoint {
    /// Whether the point carries a usable numeric value.
    pub fn has_value(&self) -> bool {
        self.value.is_some_and(f64::is_finite)
    }

    /// Layer for display, falling back to [`UNKNOWN_LABEL`].
    pub fn layer_label(&self) -> &str {
        non_empty(self.layer.as_deref()).unwrap_or(UNKNOWN_LABEL)
    }

    /// Unit for display, falling back to [`UNKNOWN_LABEL`].
    pub fn unit_label(&self) -> &str {
        non_empty(self.unit.as_deref()).unwrap_or(UNKNOWN_LABEL)
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

// ---------------------------------------------------------------------------
// DatasetMetadata – the optional manifest block of the JSON document
// ---------------------------------------------------------------------------

/// Manifest written by the offline transformation step. Every field is
/// optional; an absent manifest behaves like an empty one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub total_data_points: Option<usize>,
    pub indicators: Vec<String>,
    pub countries: Vec<String>,
    pub years: Vec<i32>,
    pub categories: Vec<String>,
}

// ---------------------------------------------------------------------------
// IndicatorDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset. Read-only after load: the app replaces the whole
/// value on a new load and never mutates individual points.
#[derive(Debug, Clone, Default)]
pub struct IndicatorDataset {
    /// All data points, in document order.
    pub points: Vec<DataPoint>,
    /// Manifest block (defaulted when the document omits it).
    pub metadata: DatasetMetadata,
}

impl IndicatorDataset {
    pub fn new(points: Vec<DataPoint>, metadata: DatasetMetadata) -> Self {
        IndicatorDataset { points, metadata }
    }

    /// Number of data points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Display title, preferring the manifest's.
    pub fn title(&self) -> &str {
        non_empty(self.metadata.title.as_deref()).unwrap_or("Indicator dataset")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(value: Option<f64>) -> DataPoint {
        DataPoint {
            indicator: "Energy availability".into(),
            country: "Albania".into(),
            year: 2019,
            value,
            category: "Foundational Capabilities".into(),
            subcategory: None,
            layer: None,
            unit: None,
            sheet_source: None,
        }
    }

    #[test]
    fn has_value_rejects_none_and_nan() {
        assert!(point(Some(5.0)).has_value());
        assert!(!point(None).has_value());
        assert!(!point(Some(f64::NAN)).has_value());
        assert!(!point(Some(f64::INFINITY)).has_value());
    }

    #[test]
    fn display_labels_fall_back_to_unknown() {
        let mut p = point(Some(1.0));
        assert_eq!(p.layer_label(), UNKNOWN_LABEL);
        assert_eq!(p.unit_label(), UNKNOWN_LABEL);

        p.layer = Some(String::new());
        assert_eq!(p.layer_label(), UNKNOWN_LABEL);

        p.layer = Some("Basic".into());
        p.unit = Some("kWh per capita".into());
        assert_eq!(p.layer_label(), "Basic");
        assert_eq!(p.unit_label(), "kWh per capita");
    }
}
