use serde_json::{Value, json};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// (name, category, subcategory, layer, unit, baseline, yearly growth)
const INDICATORS: &[(&str, &str, &str, &str, &str, f64, f64)] = &[
    (
        "Energy availability",
        "Foundational Capabilities",
        "Enabling Infrastructure - Energy",
        "Basic",
        "kWh per capita",
        2600.0,
        45.0,
    ),
    (
        "Energy reliability",
        "Foundational Capabilities",
        "Enabling Infrastructure - Energy",
        "Basic",
        "%",
        28.0,
        -1.2,
    ),
    (
        "Access to digital connectivity",
        "Foundational Capabilities",
        "Enabling Infrastructure - Digital",
        "Basic",
        "per 100 people",
        17.0,
        1.4,
    ),
    (
        "Quality of connectivity",
        "Foundational Capabilities",
        "Enabling Infrastructure - Digital",
        "Basic",
        "Mbps",
        22.0,
        4.5,
    ),
    (
        "Productive investments",
        "Foundational Capabilities",
        "Production Capabilities - Basic",
        "Basic",
        "% of GDP",
        21.0,
        0.3,
    ),
    (
        "Operational efficiency",
        "Foundational Capabilities",
        "Production Capabilities - Intermediate",
        "Intermediate",
        "certificates",
        420.0,
        18.0,
    ),
    (
        "Research effort",
        "Digital Capabilities",
        "Innovation Capabilities - Intermediate (Effort)",
        "Intermediate",
        "% of GDP",
        0.45,
        0.02,
    ),
    (
        "Industrial competitiveness in digital technologies",
        "Digital Capabilities",
        "Deployment & Adaptation",
        "Advanced",
        "index",
        0.18,
        0.01,
    ),
];

const COUNTRIES: &[(&str, f64)] = &[
    ("Albania", 0.82),
    ("Bosnia and Herzegovina", 0.88),
    ("Kosovo", 0.74),
    ("Montenegro", 0.95),
    ("North Macedonia", 0.91),
    ("Serbia", 1.12),
];

const YEARS: std::ops::RangeInclusive<i32> = 2015..=2023;

fn main() {
    let mut rng = SimpleRng::new(42);
    let mut data_points: Vec<Value> = Vec::new();

    for (indicator, category, subcategory, layer, unit, baseline, growth) in INDICATORS {
        for (country, factor) in COUNTRIES {
            for year in YEARS {
                // Leave a few holes so the dashboard's null handling has
                // something to chew on.
                let value = if rng.next_f64() < 0.04 {
                    Value::Null
                } else {
                    let trend = baseline + growth * f64::from(year - 2015);
                    let v = rng.gauss(trend * factor, trend.abs() * 0.03);
                    json!((v * 100.0).round() / 100.0)
                };

                data_points.push(json!({
                    "indicator": indicator,
                    "country": country,
                    "year": year,
                    "value": value,
                    "category": category,
                    "subcategory": subcategory,
                    "layer": layer,
                    "unit": unit,
                    "sheet_source": "generated",
                }));
            }
        }
    }

    let mut indicators: Vec<&str> = INDICATORS.iter().map(|i| i.0).collect();
    indicators.sort_unstable();
    let mut categories: Vec<&str> = INDICATORS.iter().map(|i| i.1).collect();
    categories.sort_unstable();
    categories.dedup();
    let countries: Vec<&str> = COUNTRIES.iter().map(|c| c.0).collect();

    let document = json!({
        "metadata": {
            "title": "Western Balkans Dashboard Data (sample)",
            "description": "Deterministic sample dataset for the indicator dashboard",
            "total_data_points": data_points.len(),
            "indicators": indicators,
            "countries": countries,
            "years": YEARS.collect::<Vec<i32>>(),
            "categories": categories,
        },
        "data_points": data_points,
    });

    let output_path = "sample_dataset.json";
    let text = serde_json::to_string_pretty(&document).expect("Failed to serialize dataset");
    std::fs::write(output_path, text).expect("Failed to write output file");

    println!(
        "Wrote {} data points ({} indicators × {} countries) to {output_path}",
        document["data_points"].as_array().map_or(0, Vec::len),
        INDICATORS.len(),
        COUNTRIES.len()
    );
}
