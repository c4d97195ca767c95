use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use super::model::{DataPoint, DatasetMetadata, IndicatorDataset};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load an indicator dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json` – consolidated dataset document (recommended; the output of the
///   offline transformation step)
/// * `.csv`  – flat table, one data point per row
pub fn load_file(path: &Path) -> Result<IndicatorDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "json" => {
            let text = std::fs::read_to_string(path).context("reading JSON file")?;
            parse_json(&text)
        }
        "csv" => {
            let file = std::fs::File::open(path).context("opening CSV file")?;
            parse_csv(file)
        }
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// JSON parsing
// ---------------------------------------------------------------------------

/// Expected JSON schema:
///
/// ```json
/// {
///   "metadata": { "title": "...", "indicators": [...], "countries": [...] },
///   "data_points": [
///     { "indicator": "Energy availability", "country": "Albania",
///       "year": 2019, "value": 2650.4, "category": "...",
///       "subcategory": "...", "layer": "Basic", "unit": "kWh per capita" }
///   ]
/// }
/// ```
///
/// Both top-level keys are optional: a document without `data_points` is an
/// empty dataset, and a missing `metadata` block defaults to empty.
pub fn parse_json(text: &str) -> Result<IndicatorDataset> {
    #[derive(Default, Deserialize)]
    #[serde(default)]
    struct DatasetDocument {
        metadata: DatasetMetadata,
        data_points: Vec<DataPoint>,
    }

    let doc: DatasetDocument =
        serde_json::from_str(text).context("parsing consolidated dataset JSON")?;
    Ok(IndicatorDataset::new(doc.data_points, doc.metadata))
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names. `indicator`, `country` and
/// `year` are required; `value` may be empty (treated as missing); any of
/// `category`, `subcategory`, `layer`, `unit`, `sheet_source` are optional.
pub fn parse_csv<R: std::io::Read>(input: R) -> Result<IndicatorDataset> {
    let mut reader = csv::Reader::from_reader(input);
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(str::to_owned)
        .collect();

    let col = |name: &str| headers.iter().position(|h| h == name);
    let indicator_idx = col("indicator").context("CSV missing 'indicator' column")?;
    let country_idx = col("country").context("CSV missing 'country' column")?;
    let year_idx = col("year").context("CSV missing 'year' column")?;
    let value_idx = col("value");
    let category_idx = col("category");
    let subcategory_idx = col("subcategory");
    let layer_idx = col("layer");
    let unit_idx = col("unit");
    let sheet_idx = col("sheet_source");

    let mut points = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let field = |idx: Option<usize>| -> Option<String> {
            idx.and_then(|i| record.get(i))
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
        };

        let year_raw = record.get(year_idx).unwrap_or("");
        let year: i32 = year_raw
            .trim()
            .parse()
            .with_context(|| format!("CSV row {row_no}: '{year_raw}' is not a year"))?;

        let value = match field(value_idx) {
            Some(raw) => Some(
                raw.trim()
                    .parse::<f64>()
                    .with_context(|| format!("CSV row {row_no}: '{raw}' is not a number"))?,
            ),
            None => None,
        };

        points.push(DataPoint {
            indicator: record.get(indicator_idx).unwrap_or("").to_owned(),
            country: record.get(country_idx).unwrap_or("").to_owned(),
            year,
            value,
            category: field(category_idx).unwrap_or_default(),
            subcategory: field(subcategory_idx),
            layer: field(layer_idx),
            unit: field(unit_idx),
            sheet_source: field(sheet_idx),
        });
    }

    Ok(IndicatorDataset::new(points, DatasetMetadata::default()))
}
