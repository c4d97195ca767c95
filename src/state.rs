use crate::color::LayerColors;
use crate::data::filter::{EvalError, FilterSpec, evaluate};
use crate::data::model::IndicatorDataset;
use crate::data::options::{FilterOptions, derive_options};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering. There is no hidden module
/// state anywhere: the dataset, the active filter and the current result all
/// live here and are updated evaluate-then-commit.
#[derive(Default)]
pub struct AppState {
    /// Loaded dataset (None until the user opens a file).
    pub dataset: Option<IndicatorDataset>,

    /// Selectable values for the filter widgets, derived at load time.
    pub options: FilterOptions,

    /// Colours for the table's layer badges.
    pub layer_colors: LayerColors,

    /// The active filter.
    pub filter: FilterSpec,

    /// Indices of points passing the current filter (cached result).
    pub visible_indices: Vec<usize>,

    /// Outcome of the last evaluation. On failure the previous
    /// `visible_indices` are kept on screen and the error is shown as a
    /// notice instead.
    pub eval_error: Option<EvalError>,

    /// Load / parse error message shown in the top bar.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl AppState {
    /// Ingest a newly loaded dataset: derive options, seed the year range
    /// from the observed bounds, and run the initial evaluation.
    pub fn set_dataset(&mut self, dataset: IndicatorDataset) {
        self.options = derive_options(&dataset.points, &dataset.metadata);
        self.layer_colors = LayerColors::new(&self.options.layers);

        self.filter = FilterSpec::default();
        if let Some((min, max)) = self.options.year_bounds() {
            self.filter.year_from = Some(min);
            self.filter.year_to = Some(max);
        }

        self.visible_indices = Vec::new();
        self.dataset = Some(dataset);
        self.status_message = None;
        self.loading = false;
        self.apply_filter();
    }

    /// Record a failed load: empty out the option sets and show the message.
    /// The dashboard stays interactive; the user can try another file.
    pub fn set_load_error(&mut self, message: String) {
        self.dataset = None;
        self.options = FilterOptions::default();
        self.layer_colors = LayerColors::default();
        self.filter = FilterSpec::default();
        self.visible_indices = Vec::new();
        self.eval_error = None;
        self.status_message = Some(message);
        self.loading = false;
    }

    /// Re-run the evaluator against the current filter. On success the
    /// result is committed atomically; on failure the previously displayed
    /// result is left untouched.
    pub fn apply_filter(&mut self) {
        let Some(ds) = &self.dataset else {
            self.visible_indices = Vec::new();
            self.eval_error = Some(EvalError::NoData);
            return;
        };
        match evaluate(&ds.points, &self.filter) {
            Ok(indices) => {
                self.visible_indices = indices;
                self.eval_error = None;
            }
            Err(err) => {
                self.eval_error = Some(err);
            }
        }
    }

    /// Reset every dimension to unconstrained (year range back to the
    /// observed bounds) and re-evaluate.
    pub fn reset_filter(&mut self) {
        self.filter = FilterSpec::default();
        if let Some((min, max)) = self.options.year_bounds() {
            self.filter.year_from = Some(min);
            self.filter.year_to = Some(max);
        }
        self.apply_filter();
    }

    /// Count for the "N points after filter" summary.
    pub fn visible_count(&self) -> usize {
        self.visible_indices.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{DataPoint, DatasetMetadata};

    fn point(country: &str, year: i32, value: Option<f64>) -> DataPoint {
        DataPoint {
            indicator: "Energy availability".into(),
            country: country.into(),
            year,
            value,
            category: String::new(),
            subcategory: None,
            layer: Some("Basic".into()),
            unit: None,
            sheet_source: None,
        }
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::default();
        state.set_dataset(IndicatorDataset::new(
            vec![
                point("Albania", 2015, Some(1.0)),
                point("Serbia", 2019, Some(2.0)),
                point("Kosovo", 2021, None),
            ],
            DatasetMetadata::default(),
        ));
        state
    }

    #[test]
    fn set_dataset_seeds_year_bounds_and_evaluates() {
        let state = loaded_state();
        assert_eq!(state.filter.year_from, Some(2015));
        assert_eq!(state.filter.year_to, Some(2021));
        // Null-valued Kosovo point is dropped by the evaluator.
        assert_eq!(state.visible_indices, vec![0, 1]);
        assert_eq!(state.eval_error, None);
    }

    #[test]
    fn invalid_range_keeps_the_previous_result() {
        let mut state = loaded_state();
        let before = state.visible_indices.clone();

        state.filter.year_from = Some(2020);
        state.filter.year_to = Some(2016);
        state.apply_filter();

        assert_eq!(
            state.eval_error,
            Some(EvalError::InvalidYearRange { from: 2020, to: 2016 })
        );
        assert_eq!(state.visible_indices, before);

        // Fixing the range recovers without reloading.
        state.filter.year_to = Some(2021);
        state.apply_filter();
        assert_eq!(state.eval_error, None);
        assert_eq!(state.visible_indices, vec![1]);
    }

    #[test]
    fn empty_match_is_a_valid_result_not_an_error() {
        let mut state = loaded_state();
        state.filter.country = Some("Montenegro".into());
        state.apply_filter();
        assert_eq!(state.eval_error, None);
        assert!(state.visible_indices.is_empty());
    }

    #[test]
    fn evaluating_without_a_dataset_reports_no_data() {
        let mut state = AppState::default();
        state.apply_filter();
        assert_eq!(state.eval_error, Some(EvalError::NoData));
        assert!(state.visible_indices.is_empty());
    }

    #[test]
    fn load_error_empties_options_and_stays_recoverable() {
        let mut state = loaded_state();
        state.set_load_error("Error: parsing consolidated dataset JSON".into());
        assert!(state.dataset.is_none());
        assert!(state.options.countries.is_empty());
        assert!(state.status_message.is_some());

        // A subsequent successful load fully recovers.
        state.set_dataset(IndicatorDataset::new(
            vec![point("Albania", 2019, Some(1.0))],
            DatasetMetadata::default(),
        ));
        assert_eq!(state.visible_count(), 1);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn reset_restores_the_unconstrained_view() {
        let mut state = loaded_state();
        state.filter.country = Some("Albania".into());
        state.apply_filter();
        assert_eq!(state.visible_indices, vec![0]);

        state.reset_filter();
        assert_eq!(state.visible_indices, vec![0, 1]);
        assert_eq!(state.filter.year_from, Some(2015));
    }
}
