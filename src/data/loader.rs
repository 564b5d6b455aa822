use std::io::{Cursor, Read};
use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader, Xlsx};
use serde::Deserialize;
use thiserror::Error;

use super::model::{RouteDataset, RouteRecord};

/// The worksheet the route cost workbook keeps its data on.
pub const SHEET_NAME: &str = "Sheet1";

/// Every column the source sheet must carry, in source order. COMMISSION and
/// COST/LITRE are validated here and dropped; the rest map onto
/// [`RouteRecord`] fields.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    "ORIGIN",
    "DESTINATION",
    "Fleet",
    "Month",
    "TRIP RATE",
    "DISPATCH",
    "PROFIT",
    "COMMISSION",
    "COST/LITRE",
];

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Everything that can go wrong turning an uploaded file into a
/// [`RouteDataset`]. Filtering and aggregation downstream are infallible.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    #[error("reading file: {0}")]
    Io(#[from] std::io::Error),

    #[error("reading workbook: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("workbook has no sheet named '{0}'")]
    MissingSheet(String),

    #[error("missing required column '{0}'")]
    MissingColumn(String),

    #[error("row {row}, column '{column}': expected a number, got '{value}'")]
    BadNumber {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("reading CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("reading JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a route cost dataset from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.xlsx` / `.xlsm` / `.xls` / `.ods` – workbook with a "Sheet1" sheet
/// * `.csv`  – header row with the same column names
/// * `.json` – records-oriented array (`df.to_json(orient='records')`)
pub fn load_path(path: &Path) -> Result<RouteDataset, IngestError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "xlsx" | "xlsm" | "xls" | "ods" => load_workbook(path),
        "csv" => load_csv(std::fs::File::open(path)?),
        "json" => load_json(&std::fs::read_to_string(path)?),
        other => Err(IngestError::UnsupportedExtension(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// Workbook loader (calamine)
// ---------------------------------------------------------------------------

fn load_workbook(path: &Path) -> Result<RouteDataset, IngestError> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range(SHEET_NAME)
        .map_err(|_| IngestError::MissingSheet(SHEET_NAME.to_string()))?;
    records_from_range(&range)
}

/// Parse an in-memory `.xlsx` byte stream. Keeps ingestion testable without
/// touching the filesystem.
pub fn load_xlsx_bytes(bytes: &[u8]) -> Result<RouteDataset, IngestError> {
    let mut workbook: Xlsx<_> =
        Xlsx::new(Cursor::new(bytes)).map_err(calamine::Error::from)?;
    let range = workbook
        .worksheet_range(SHEET_NAME)
        .map_err(|_| IngestError::MissingSheet(SHEET_NAME.to_string()))?;
    records_from_range(&range)
}

/// Build records from a worksheet range: header row first, then one record
/// per non-empty row.
fn records_from_range(range: &Range<Data>) -> Result<RouteDataset, IngestError> {
    let mut rows = range.rows();
    let header = rows.next().ok_or_else(|| {
        IngestError::MissingColumn(REQUIRED_COLUMNS[0].to_string())
    })?;

    let header: Vec<String> = header.iter().map(cell_to_string).collect();

    // Eager column validation so malformed sheets fail here, not mid-render.
    let col = |name: &'static str| -> Result<usize, IngestError> {
        header
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| IngestError::MissingColumn(name.to_string()))
    };
    let origin_idx = col("ORIGIN")?;
    let destination_idx = col("DESTINATION")?;
    let fleet_idx = col("Fleet")?;
    let month_idx = col("Month")?;
    let trip_rate_idx = col("TRIP RATE")?;
    let dispatch_idx = col("DISPATCH")?;
    let profit_idx = col("PROFIT")?;
    col("COMMISSION")?;
    col("COST/LITRE")?;

    let empty = Data::Empty;
    let mut records = Vec::new();
    for (row_no, row) in rows.enumerate() {
        if row.iter().all(|c| matches!(c, Data::Empty)) {
            continue;
        }
        let cell = |idx: usize| row.get(idx).unwrap_or(&empty);

        records.push(RouteRecord {
            origin: cell_to_string(cell(origin_idx)),
            destination: cell_to_string(cell(destination_idx)),
            fleet: cell_to_string(cell(fleet_idx)),
            month: cell_to_string(cell(month_idx)),
            trip_rate: cell_to_f64(cell(trip_rate_idx), row_no, "TRIP RATE")?,
            dispatch: cell_to_f64(cell(dispatch_idx), row_no, "DISPATCH")?,
            profit: cell_to_f64(cell(profit_idx), row_no, "PROFIT")?,
        });
    }

    Ok(RouteDataset::new(records))
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

fn cell_to_f64(cell: &Data, row: usize, column: &'static str) -> Result<f64, IngestError> {
    match cell {
        Data::Float(f) => Ok(*f),
        Data::Int(i) => Ok(*i as f64),
        // Numbers occasionally arrive as text cells; accept them if they parse.
        Data::String(s) => s.trim().replace(',', "").parse::<f64>().map_err(|_| {
            IngestError::BadNumber {
                row,
                column,
                value: s.clone(),
            }
        }),
        other => Err(IngestError::BadNumber {
            row,
            column,
            value: cell_to_string(other),
        }),
    }
}

// ---------------------------------------------------------------------------
// CSV / JSON loaders
// ---------------------------------------------------------------------------

/// One raw row with all nine source columns. The two trailing columns are
/// required to be present but are dropped in the [`RouteRecord`] conversion.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "ORIGIN")]
    origin: String,
    #[serde(rename = "DESTINATION")]
    destination: String,
    #[serde(rename = "Fleet")]
    fleet: String,
    #[serde(rename = "Month")]
    month: String,
    #[serde(rename = "TRIP RATE")]
    trip_rate: f64,
    #[serde(rename = "DISPATCH")]
    dispatch: f64,
    #[serde(rename = "PROFIT")]
    profit: f64,
    #[serde(rename = "COMMISSION")]
    #[allow(dead_code)]
    commission: f64,
    #[serde(rename = "COST/LITRE")]
    #[allow(dead_code)]
    cost_per_litre: f64,
}

impl From<RawRow> for RouteRecord {
    fn from(raw: RawRow) -> Self {
        RouteRecord {
            origin: raw.origin,
            destination: raw.destination,
            fleet: raw.fleet,
            month: raw.month,
            trip_rate: raw.trip_rate,
            dispatch: raw.dispatch,
            profit: raw.profit,
        }
    }
}

/// Parse CSV with a header row matching the workbook column names.
pub fn load_csv<R: Read>(reader: R) -> Result<RouteDataset, IngestError> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(IngestError::MissingColumn(required.to_string()));
        }
    }

    let mut records = Vec::new();
    for row in csv_reader.deserialize::<RawRow>() {
        records.push(row?.into());
    }
    Ok(RouteDataset::new(records))
}

/// Parse a records-oriented JSON array with the same keys as the workbook
/// columns.
pub fn load_json(text: &str) -> Result<RouteDataset, IngestError> {
    let raw: Vec<RawRow> = serde_json::from_str(text)?;
    Ok(RouteDataset::new(raw.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV_HEADER: &str =
        "ORIGIN,DESTINATION,Fleet,Month,TRIP RATE,DISPATCH,PROFIT,COMMISSION,COST/LITRE";

    #[test]
    fn csv_rows_ingest_and_drop_unused_columns() {
        let csv = format!(
            "{CSV_HEADER}\n\
             LAGOS,ABUJA,DAF,JULY,500000,120000,180000,5000,1.2\n\
             KANO,ABUJA,MACK,AUGUST,450000,110000,150000,4500,1.1\n"
        );
        let ds = load_csv(csv.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].origin, "LAGOS");
        assert_eq!(ds.records[0].trip_rate, 500_000.0);
        assert_eq!(ds.records[1].month, "AUGUST");
    }

    #[test]
    fn csv_missing_required_column_is_rejected_eagerly() {
        let csv = "ORIGIN,DESTINATION,Fleet,Month,TRIP RATE,DISPATCH,PROFIT\n\
                   LAGOS,ABUJA,DAF,JULY,1,2,3\n";
        match load_csv(csv.as_bytes()) {
            Err(IngestError::MissingColumn(col)) => assert_eq!(col, "COMMISSION"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn json_records_ingest() {
        let json = r#"[
            {"ORIGIN": "LAGOS", "DESTINATION": "KADUNA", "Fleet": "DAF",
             "Month": "SEPTEMBER", "TRIP RATE": 300000.0, "DISPATCH": 80000.0,
             "PROFIT": 90000.0, "COMMISSION": 3000.0, "COST/LITRE": 1.05}
        ]"#;
        let ds = load_json(json).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records[0].destination, "KADUNA");
        assert_eq!(ds.records[0].derived_cost(), 290_000.0);
    }

    #[test]
    fn garbage_bytes_are_an_ingest_error() {
        let err = load_xlsx_bytes(b"this is not a spreadsheet").unwrap_err();
        assert!(matches!(err, IngestError::Workbook(_)));
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let err = load_path(Path::new("routes.pdf")).unwrap_err();
        assert!(matches!(err, IngestError::UnsupportedExtension(ext) if ext == "pdf"));
    }

    #[test]
    fn workbook_range_parsing_validates_columns() {
        // Build a range by hand: header missing PROFIT.
        let mut range = Range::new((0, 0), (1, 8));
        let header = [
            "ORIGIN", "DESTINATION", "Fleet", "Month", "TRIP RATE", "DISPATCH",
            "margin", "COMMISSION", "COST/LITRE",
        ];
        for (i, h) in header.iter().enumerate() {
            range.set_value((0, i as u32), Data::String(h.to_string()));
        }
        match records_from_range(&range) {
            Err(IngestError::MissingColumn(col)) => assert_eq!(col, "PROFIT"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn workbook_range_parses_rows_and_skips_blank_lines() {
        let mut range = Range::new((0, 0), (3, 8));
        for (i, h) in REQUIRED_COLUMNS.iter().enumerate() {
            range.set_value((0, i as u32), Data::String(h.to_string()));
        }
        let row = [
            Data::String("LAGOS".into()),
            Data::String("ABUJA".into()),
            Data::String("DAF".into()),
            Data::String("JULY".into()),
            Data::Float(500_000.0),
            Data::Float(120_000.0),
            Data::Float(180_000.0),
            Data::Float(5_000.0),
            Data::Float(1.2),
        ];
        for (i, cell) in row.iter().enumerate() {
            range.set_value((1, i as u32), cell.clone());
        }
        // Row 2 left entirely empty, row 3 a second record with an int rate.
        let mut row2 = row.clone();
        row2[4] = Data::Int(450_000);
        for (i, cell) in row2.iter().enumerate() {
            range.set_value((3, i as u32), cell.clone());
        }

        let ds = records_from_range(&range).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].profit, 180_000.0);
        assert_eq!(ds.records[1].trip_rate, 450_000.0);
    }

    #[test]
    fn non_numeric_rate_cell_is_a_bad_number() {
        let mut range = Range::new((0, 0), (1, 8));
        for (i, h) in REQUIRED_COLUMNS.iter().enumerate() {
            range.set_value((0, i as u32), Data::String(h.to_string()));
        }
        for i in 0..9u32 {
            range.set_value((1, i), Data::String("n/a".into()));
        }
        match records_from_range(&range) {
            Err(IngestError::BadNumber { column, .. }) => assert_eq!(column, "TRIP RATE"),
            other => panic!("expected BadNumber, got {other:?}"),
        }
    }
}
