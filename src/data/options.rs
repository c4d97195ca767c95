use std::collections::BTreeSet;

use super::model::{DataPoint, DatasetMetadata, UNKNOWN_LABEL};

// ---------------------------------------------------------------------------
// Selectable filter options derived from the record store
// ---------------------------------------------------------------------------

/// Distinct, sorted value sets for populating the filter widgets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    /// Lexicographically sorted country names.
    pub countries: Vec<String>,
    /// Lexicographically sorted indicator names (manifest-sourced when
    /// available, otherwise derived from the records).
    pub indicators: Vec<String>,
    /// Numerically ascending years, zero/placeholder years excluded.
    pub years: Vec<i32>,
    /// Lexicographically sorted layer labels, excluding empty and the
    /// "Unknown" sentinel. Records carrying those still filter normally.
    pub layers: Vec<String>,
}

impl FilterOptions {
    /// Minimum and maximum observed year, for seeding the range selector.
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        match (self.years.first(), self.years.last()) {
            (Some(&min), Some(&max)) => Some((min, max)),
            _ => None,
        }
    }
}

/// Derive all selectable option sets from the loaded points and manifest.
pub fn derive_options(points: &[DataPoint], metadata: &DatasetMetadata) -> FilterOptions {
    let countries: BTreeSet<&str> = points.iter().map(|p| p.country.as_str()).collect();

    let years: BTreeSet<i32> = points.iter().map(|p| p.year).filter(|&y| y != 0).collect();

    let layers: BTreeSet<&str> = points
        .iter()
        .filter_map(|p| p.layer.as_deref())
        .filter(|l| !l.is_empty() && *l != UNKNOWN_LABEL)
        .collect();

    FilterOptions {
        countries: countries.into_iter().map(str::to_owned).collect(),
        indicators: indicator_options(points, metadata),
        years: years.into_iter().collect(),
        layers: layers.into_iter().map(str::to_owned).collect(),
    }
}

/// Indicator names for the selector. Prefers the manifest list (the
/// transformation step writes one); falls back to deriving distinct values
/// from the records when the manifest is absent or empty.
pub fn indicator_options(points: &[DataPoint], metadata: &DatasetMetadata) -> Vec<String> {
    let source: BTreeSet<&str> = if metadata.indicators.is_empty() {
        points.iter().map(|p| p.indicator.as_str()).collect()
    } else {
        metadata.indicators.iter().map(String::as_str).collect()
    };
    source.into_iter().map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(country: &str, indicator: &str, year: i32, layer: Option<&str>) -> DataPoint {
        DataPoint {
            indicator: indicator.into(),
            country: country.into(),
            year,
            value: Some(1.0),
            category: String::new(),
            subcategory: None,
            layer: layer.map(str::to_owned),
            unit: None,
            sheet_source: None,
        }
    }

    #[test]
    fn countries_are_distinct_and_sorted() {
        let points = vec![
            point("Serbia", "A", 2019, None),
            point("Albania", "A", 2019, None),
            point("Serbia", "B", 2020, None),
        ];
        let opts = derive_options(&points, &DatasetMetadata::default());
        assert_eq!(opts.countries, vec!["Albania", "Serbia"]);
    }

    #[test]
    fn years_are_numeric_sorted_and_zero_is_dropped() {
        let points = vec![
            point("Albania", "A", 2021, None),
            point("Albania", "A", 0, None),
            point("Albania", "A", 2015, None),
            point("Albania", "A", 2021, None),
        ];
        let opts = derive_options(&points, &DatasetMetadata::default());
        assert_eq!(opts.years, vec![2015, 2021]);
        assert_eq!(opts.year_bounds(), Some((2015, 2021)));
    }

    #[test]
    fn year_bounds_of_empty_set_is_none() {
        let opts = derive_options(&[], &DatasetMetadata::default());
        assert_eq!(opts.year_bounds(), None);
    }

    #[test]
    fn layers_exclude_empty_and_unknown_sentinel() {
        let points = vec![
            point("Albania", "A", 2019, Some("Intermediate")),
            point("Albania", "A", 2019, Some("Basic")),
            point("Albania", "A", 2019, Some("Unknown")),
            point("Albania", "A", 2019, Some("")),
            point("Albania", "A", 2019, None),
        ];
        let opts = derive_options(&points, &DatasetMetadata::default());
        assert_eq!(opts.layers, vec!["Basic", "Intermediate"]);
    }

    #[test]
    fn indicators_prefer_the_manifest() {
        let points = vec![point("Albania", "From records", 2019, None)];
        let metadata = DatasetMetadata {
            indicators: vec!["Zeta".into(), "Alpha".into()],
            ..DatasetMetadata::default()
        };
        assert_eq!(indicator_options(&points, &metadata), vec!["Alpha", "Zeta"]);
    }

    #[test]
    fn indicators_fall_back_to_records_when_manifest_empty() {
        let points = vec![
            point("Albania", "Energy reliability", 2019, None),
            point("Albania", "Energy availability", 2019, None),
        ];
        let opts = derive_options(&points, &DatasetMetadata::default());
        assert_eq!(
            opts.indicators,
            vec!["Energy availability", "Energy reliability"]
        );
    }
}
