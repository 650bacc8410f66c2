use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{Array, AsArray, Float32Array, Float64Array, Int32Array, Int64Array, StringArray};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use super::DataError;
use super::model::{LaunchRecord, Outcome, RecordSet};

const SITE_COLUMN: &str = "Launch Site";
const PAYLOAD_COLUMN: &str = "Payload Mass (kg)";
const CLASS_COLUMN: &str = "class";
const BOOSTER_COLUMN: &str = "Booster Version Category";

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the launch records from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with at least `Launch Site`, `Payload Mass (kg)`,
///   `class` and `Booster Version Category`; other columns are ignored
/// * `.json`    – `[{ "Launch Site": ..., "class": 1, ... }, ...]`
/// * `.parquet` – flat columns with the same names
pub fn load_file(path: &Path) -> Result<RecordSet, DataError> {
    load_any(path).map_err(|e| DataError::DataUnavailable {
        path: path.to_path_buf(),
        reason: format!("{e:#}"),
    })
}

fn load_any(path: &Path) -> Result<RecordSet> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => {
            let file = std::fs::File::open(path).context("opening CSV")?;
            read_csv(file)?
        }
        "json" => load_json(path)?,
        "parquet" | "pq" => load_parquet(path)?,
        other => bail!("Unsupported file extension: .{other}"),
    };

    Ok(RecordSet::from_records(records))
}

/// Parse CSV launch records from any reader (file, socket, in-memory bytes).
pub fn load_csv_reader<R: Read>(reader: R) -> Result<RecordSet, DataError> {
    read_csv(reader)
        .map(RecordSet::from_records)
        .map_err(|e| DataError::DataUnavailable {
            path: "<reader>".into(),
            reason: format!("{e:#}"),
        })
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// The exported dataset carries an unnamed index column plus flight number
/// and booster version; serde picks out the columns it knows and skips the
/// rest.
fn read_csv<R: Read>(reader: R) -> Result<Vec<LaunchRecord>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let headers = reader.headers().context("reading CSV headers")?.clone();
    for required in [SITE_COLUMN, PAYLOAD_COLUMN, CLASS_COLUMN, BOOSTER_COLUMN] {
        if !headers.iter().any(|h| h == required) {
            bail!("CSV missing '{required}' column");
        }
    }

    // Row numbers in messages are 1-based data rows (the header is not counted).
    let mut records = Vec::new();
    for (idx, result) in reader.deserialize::<LaunchRecord>().enumerate() {
        let row_no = idx + 1;
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        validate(&record, row_no)?;
        records.push(record);
    }
    Ok(records)
}

fn validate(record: &LaunchRecord, row: usize) -> Result<()> {
    if !record.payload_mass.is_finite() || record.payload_mass < 0.0 {
        bail!("Row {row}: payload mass {} is not a non-negative number", record.payload_mass);
    }
    if record.site.is_empty() {
        bail!("Row {row}: empty launch site");
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Launch Site": "CCAFS LC-40",
///     "class": 0,
///     "Payload Mass (kg)": 0.0,
///     "Booster Version Category": "v1.0"
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<Vec<LaunchRecord>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let records: Vec<LaunchRecord> = serde_json::from_str(&text).context("parsing JSON")?;
    for (idx, record) in records.iter().enumerate() {
        validate(record, idx + 1)?;
    }
    Ok(records)
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with one flat column per field.
///
/// `class` may be stored as any integer or float type (Pandas writes int64,
/// Polars may write int32); payload mass as int or float.
fn load_parquet(path: &Path) -> Result<Vec<LaunchRecord>> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let site_col = column(&batch, SITE_COLUMN)?;
        let payload_col = column(&batch, PAYLOAD_COLUMN)?;
        let class_col = column(&batch, CLASS_COLUMN)?;
        let booster_col = column(&batch, BOOSTER_COLUMN)?;

        for row in 0..batch.num_rows() {
            let row_no = records.len() + 1;
            let class = extract_f64(class_col, row)
                .with_context(|| format!("Row {row_no}: failed to read '{CLASS_COLUMN}'"))?;
            let outcome = class_to_outcome(class).with_context(|| format!("Row {row_no}"))?;

            let record = LaunchRecord {
                flight_number: None,
                site: extract_string(site_col, row)
                    .with_context(|| format!("Row {row_no}: failed to read '{SITE_COLUMN}'"))?,
                outcome,
                payload_mass: extract_f64(payload_col, row)
                    .with_context(|| format!("Row {row_no}: failed to read '{PAYLOAD_COLUMN}'"))?,
                booster_version: None,
                booster_category: extract_string(booster_col, row)
                    .with_context(|| format!("Row {row_no}: failed to read '{BOOSTER_COLUMN}'"))?,
            };
            validate(&record, row_no)?;
            records.push(record);
        }
    }

    Ok(records)
}

// -- Parquet / Arrow helpers --

fn column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a Arc<dyn Array>> {
    let idx = batch
        .schema()
        .index_of(name)
        .map_err(|_| anyhow::anyhow!("Parquet file missing '{name}' column"))?;
    Ok(batch.column(idx))
}

fn class_to_outcome(class: f64) -> Result<Outcome> {
    if class == 0.0 {
        Ok(Outcome::Failure)
    } else if class == 1.0 {
        Ok(Outcome::Success)
    } else {
        bail!("class must be 0 or 1, got {class}")
    }
}

fn extract_string(col: &Arc<dyn Array>, row: usize) -> Result<String> {
    if col.is_null(row) {
        bail!("null value");
    }
    match col.data_type() {
        DataType::Utf8 => {
            let arr = col
                .as_any()
                .downcast_ref::<StringArray>()
                .context("expected StringArray")?;
            Ok(arr.value(row).to_string())
        }
        DataType::LargeUtf8 => Ok(col.as_string::<i64>().value(row).to_string()),
        other => bail!("Expected a string column, got {other:?}"),
    }
}

fn extract_f64(col: &Arc<dyn Array>, row: usize) -> Result<f64> {
    if col.is_null(row) {
        bail!("null value");
    }
    let any = col.as_any();
    match col.data_type() {
        DataType::Float64 => Ok(any.downcast_ref::<Float64Array>().context("expected Float64Array")?.value(row)),
        DataType::Float32 => Ok(any.downcast_ref::<Float32Array>().context("expected Float32Array")?.value(row) as f64),
        DataType::Int64 => Ok(any.downcast_ref::<Int64Array>().context("expected Int64Array")?.value(row) as f64),
        DataType::Int32 => Ok(any.downcast_ref::<Int32Array>().context("expected Int32Array")?.value(row) as f64),
        other => bail!("Expected a numeric column, got {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPORT: &str = "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,2,CCAFS LC-40,0,0.0,F9 v1.0  B0004,v1.0
2,3,CCAFS LC-40,0,525.0,F9 v1.0  B0005,v1.0
3,4,CCAFS LC-40,0,500.0,F9 v1.0  B0006,v1.0
4,6,VAFB SLC-4E,1,500.0,F9 v1.1  B1003,v1.1
";

    #[test]
    fn parses_dashboard_export() {
        let set = load_csv_reader(EXPORT.as_bytes()).unwrap();
        assert_eq!(set.len(), 5);
        let last = &set.records()[4];
        assert_eq!(last.site, "VAFB SLC-4E");
        assert_eq!(last.outcome, Outcome::Success);
        assert_eq!(last.payload_mass, 500.0);
        assert_eq!(last.booster_category, "v1.1");
        assert_eq!(last.flight_number, Some(6));
        assert_eq!(last.booster_version.as_deref(), Some("F9 v1.1  B1003"));
    }

    #[test]
    fn minimal_columns_are_enough() {
        let csv = "Launch Site,Payload Mass (kg),class,Booster Version Category\nKSC LC-39A,5300,1,FT\n";
        let set = load_csv_reader(csv.as_bytes()).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.records()[0].flight_number, None);
    }

    #[test]
    fn missing_column_is_unavailable() {
        let csv = "Launch Site,class,Booster Version Category\nKSC LC-39A,1,FT\n";
        let err = load_csv_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DataError::DataUnavailable { .. }));
        assert!(err.to_string().contains("Payload Mass (kg)"));
    }

    #[test]
    fn bad_class_is_unavailable() {
        let csv = "Launch Site,Payload Mass (kg),class,Booster Version Category\nKSC LC-39A,5300,2,FT\n";
        assert!(matches!(
            load_csv_reader(csv.as_bytes()),
            Err(DataError::DataUnavailable { .. })
        ));
    }

    #[test]
    fn negative_payload_is_unavailable() {
        let csv = "Launch Site,Payload Mass (kg),class,Booster Version Category\nKSC LC-39A,-1,1,FT\n";
        let err = load_csv_reader(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("non-negative"));
    }

    #[test]
    fn header_only_loads_as_empty() {
        let csv = "Launch Site,Payload Mass (kg),class,Booster Version Category\n";
        let set = load_csv_reader(csv.as_bytes()).unwrap();
        assert!(set.is_empty());
        assert!(matches!(set.payload_bounds(), Err(DataError::EmptyDataset)));
    }

    #[test]
    fn errors_name_the_data_row() {
        let csv = "Launch Site,Payload Mass (kg),class,Booster Version Category\n\
                   KSC LC-39A,5300,1,FT\n\
                   KSC LC-39A,5300,7,FT\n";
        let err = load_csv_reader(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("CSV row 2"), "{err}");

        let csv = "Launch Site,Payload Mass (kg),class,Booster Version Category\nKSC LC-39A,-5,1,FT\n";
        let err = load_csv_reader(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Row 1:"), "{err}");
    }

    /// Scratch directory under the system temp dir, removed on drop.
    struct ScratchDir(std::path::PathBuf);

    impl ScratchDir {
        fn new(tag: &str) -> Self {
            let dir = std::env::temp_dir().join(format!("spacex-dash-loader-{tag}-{}", std::process::id()));
            std::fs::create_dir_all(&dir).unwrap();
            ScratchDir(dir)
        }
    }

    impl Drop for ScratchDir {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.0);
        }
    }

    fn write_parquet(path: &Path, classes: Vec<i64>) {
        use arrow::datatypes::{Field, Schema};
        use parquet::arrow::ArrowWriter;

        let n = classes.len();
        let schema = Arc::new(Schema::new(vec![
            Field::new(SITE_COLUMN, DataType::Utf8, false),
            Field::new(CLASS_COLUMN, DataType::Int64, false),
            Field::new(PAYLOAD_COLUMN, DataType::Int32, false),
            Field::new(BOOSTER_COLUMN, DataType::Utf8, false),
        ]));
        let sites: Vec<&str> = ["KSC LC-39A", "VAFB SLC-4E"].into_iter().cycle().take(n).collect();
        let payloads: Vec<i32> = (0..n as i32).map(|i| 500 + i * 1000).collect();
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(StringArray::from(sites)),
                Arc::new(Int64Array::from(classes)),
                Arc::new(Int32Array::from(payloads)),
                Arc::new(StringArray::from(vec!["FT"; n])),
            ],
        )
        .unwrap();

        let file = std::fs::File::create(path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();
    }

    #[test]
    fn parquet_with_integer_columns_loads() {
        let scratch = ScratchDir::new("ok");
        let path = scratch.0.join("launches.parquet");
        write_parquet(&path, vec![1, 0, 1]);

        let set = load_file(&path).unwrap();
        assert_eq!(
            set.records(),
            &[
                LaunchRecord::new("KSC LC-39A", 500.0, Outcome::Success, "FT"),
                LaunchRecord::new("VAFB SLC-4E", 1500.0, Outcome::Failure, "FT"),
                LaunchRecord::new("KSC LC-39A", 2500.0, Outcome::Success, "FT"),
            ]
        );
    }

    #[test]
    fn parquet_bad_class_is_unavailable() {
        let scratch = ScratchDir::new("bad-class");
        let path = scratch.0.join("launches.parquet");
        write_parquet(&path, vec![1, 2]);

        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, DataError::DataUnavailable { .. }));
        assert!(err.to_string().contains("Row 2"), "{err}");
        assert!(err.to_string().contains("class must be 0 or 1"), "{err}");
    }

    #[test]
    fn missing_file_is_unavailable() {
        let path = Path::new("definitely/not/here/spacex_launch_dash.csv");
        match load_file(path) {
            Err(DataError::DataUnavailable { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected DataUnavailable, got {other:?}"),
        }
    }

    #[test]
    fn unknown_extension_is_unavailable() {
        let err = load_file(Path::new("launches.xlsx")).unwrap_err();
        assert!(err.to_string().contains("Unsupported file extension"));
    }

    #[test]
    fn class_values_map_to_outcomes() {
        assert_eq!(class_to_outcome(1.0).unwrap(), Outcome::Success);
        assert_eq!(class_to_outcome(0.0).unwrap(), Outcome::Failure);
        assert!(class_to_outcome(0.5).is_err());
    }
}
