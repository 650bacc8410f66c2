//! Generate a synthetic launch dataset for trying the dashboard without the
//! real export.
//!
//! Writes `spacex_launch_dash.csv` and `spacex_launch_dash.parquet` into the
//! current directory.

use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

use spacex_dash::data::{LaunchRecord, Outcome};

/// xoshiro256** PRNG (seeded via splitmix64) so the sample is reproducible
/// without extra deps.
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut z = seed;
        for slot in &mut s {
            z = z.wrapping_add(0x9e3779b97f4a7c15);
            let mut x = z;
            x = (x ^ (x >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
            x = (x ^ (x >> 27)).wrapping_mul(0x94d049bb133111eb);
            *slot = x ^ (x >> 31);
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
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

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

const SITES: [&str; 4] = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];

/// Booster categories in chronological order with their success probability
/// and typical payload ceiling.
const BOOSTERS: [(&str, f64, f64); 5] = [
    ("v1.0", 0.0, 700.0),
    ("v1.1", 0.3, 4500.0),
    ("FT", 0.8, 7000.0),
    ("B4", 0.55, 9600.0),
    ("B5", 1.0, 9600.0),
];

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let mut records = Vec::new();

    for flight in 1..=56u32 {
        // Earlier flights use earlier boosters.
        let era = ((flight - 1) as usize * BOOSTERS.len()) / 56;
        let (category, p_success, ceiling) = BOOSTERS[era];
        let site = if category == "v1.0" { SITES[0] } else { rng.pick(&SITES) };
        let payload_mass = (rng.next_f64() * ceiling).round();
        let outcome = if rng.next_f64() < p_success {
            Outcome::Success
        } else {
            Outcome::Failure
        };

        records.push(LaunchRecord {
            flight_number: Some(flight),
            site: site.to_string(),
            outcome,
            payload_mass,
            booster_version: Some(format!("F9 {category}  B{:04}", 1000 + flight)),
            booster_category: category.to_string(),
        });
    }

    let csv_path = "spacex_launch_dash.csv";
    let mut writer = csv::Writer::from_path(csv_path).context("creating CSV")?;
    for record in &records {
        writer.serialize(record).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV")?;

    let parquet_path = "spacex_launch_dash.parquet";
    write_parquet(parquet_path, &records)?;

    println!("Wrote {} launches to {csv_path} and {parquet_path}", records.len());
    Ok(())
}

fn write_parquet(path: &str, records: &[LaunchRecord]) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("Launch Site", DataType::Utf8, false),
        Field::new("class", DataType::Int64, false),
        Field::new("Payload Mass (kg)", DataType::Float64, false),
        Field::new("Booster Version Category", DataType::Utf8, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(StringArray::from_iter_values(records.iter().map(|r| r.site.as_str()))),
            Arc::new(Int64Array::from_iter_values(records.iter().map(|r| r.outcome.as_class() as i64))),
            Arc::new(Float64Array::from_iter_values(records.iter().map(|r| r.payload_mass))),
            Arc::new(StringArray::from_iter_values(records.iter().map(|r| r.booster_category.as_str()))),
        ],
    )
    .context("building record batch")?;

    let file = std::fs::File::create(path).context("creating parquet file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing parquet batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}
