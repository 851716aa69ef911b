use crate::traits::TelemetrySource;
use crate::Result;
use demolyzer_types::{Column, ColumnLayout, TelemetryTable, TickRecord};
use std::io;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Reads a table that was already extracted to CSV
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvTableSource;

impl TelemetrySource for CsvTableSource {
    fn id(&self) -> &'static str {
        "csv"
    }

    fn load(&self, recording: &Path) -> Result<TelemetryTable> {
        read_table_from_path(recording)
    }
}

/// Parse a telemetry table from CSV.
///
/// Headers are validated before any row is read, so a missing column fails
/// immediately.
pub fn read_table<R: io::Read>(reader: R) -> Result<TelemetryTable> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let layout = ColumnLayout::resolve(rdr.headers()?.iter())?;

    let mut rows = Vec::new();
    for (index, record) in rdr.records().enumerate() {
        let record = record?;
        rows.push(layout.parse_row(index + 1, |i| record.get(i))?);
    }

    Ok(TelemetryTable::new(rows))
}

pub fn read_table_from_path(path: &Path) -> Result<TelemetryTable> {
    let file = std::fs::File::open(path)?;
    let table = read_table(io::BufReader::new(file))?;
    debug!(path = %path.display(), rows = table.len(), "read telemetry table");
    Ok(table)
}

/// Write a table with canonical headers. Missing numeric values become empty cells.
pub fn write_table<W: io::Write>(writer: W, table: &TelemetryTable) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(Column::ALL.iter().map(|c| c.name()))?;

    for record in table {
        wtr.write_record(row_cells(record))?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write a table to `path` atomically.
///
/// Rows go to a temporary file in the destination directory, which is renamed
/// over `path` only once fully written. A failed write never leaves partial
/// content at `path`.
pub fn write_table_to_path(path: &Path, table: &TelemetryTable) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    write_table(io::BufWriter::new(tmp.as_file_mut()), table)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

fn row_cells(record: &TickRecord) -> [String; 8] {
    [
        record.tick.to_string(),
        record
            .player_id
            .as_ref()
            .map(|id| id.to_string())
            .unwrap_or_default(),
        record.player_name.clone().unwrap_or_default(),
        record.state.to_string(),
        float_cell(record.pitch),
        float_cell(record.view),
        float_cell(record.position.x),
        float_cell(record.position.y),
    ]
}

fn float_cell(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use demolyzer_testing::TableBuilder;

    #[test]
    fn test_read_table_with_dataframe_headers() {
        let csv = "\
tick,players_info.steamId,players_info.name,players_state,pitchAngle,viewAngle,position.x,position.y,team
1,765,alice,Alive,10,350,0,0,CT
1,,,Alive,,,,,
2,765,alice,Alive,15,10,3,4,CT
";
        let table = read_table(csv.as_bytes()).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.rows()[1].player_id, None);
        assert!(table.rows()[1].pitch.is_nan());
        assert_eq!(table.rows()[2].view, 10.0);
        assert_eq!(table.rows()[2].player_name.as_deref(), Some("alice"));
    }

    #[test]
    fn test_read_table_missing_column_fails_before_rows() {
        let csv = "tick,player_id,player_name,pitch,view,x,y\n1,P,p,0,0,0,0\n";
        let err = read_table(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            Error::Table(demolyzer_types::Error::MissingColumn { column: "state" })
        ));
    }

    #[test]
    fn test_write_then_read_preserves_rows() {
        let builder = TableBuilder::new()
            .row(1, "P", "Alive", 10.5, 350.0, 0.0, 0.0)
            .anonymous(1, "Alive")
            .row(2, "P", "Death", f64::NAN, 10.0, 3.0, 4.0);
        let table = builder.clone().build();

        let mut buf = Vec::new();
        write_table(&mut buf, &table).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, builder.to_csv());

        let back = read_table(text.as_bytes()).unwrap();
        assert_eq!(back.len(), 3);
        assert_eq!(back.rows()[0], table.rows()[0]);
        assert!(back.rows()[2].pitch.is_nan());
    }

    #[test]
    fn test_write_to_path_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("match.csv");
        let table = TableBuilder::new().state(1, "P", "Alive").build();

        write_table_to_path(&path, &table).unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(read_table_from_path(&path).unwrap(), table);
    }

    #[test]
    fn test_failed_write_leaves_destination_untouched() {
        let dir = tempfile::tempdir().unwrap();
        // A directory at the destination makes the final rename fail
        let path = dir.path().join("match.csv");
        std::fs::create_dir(&path).unwrap();
        let table = TableBuilder::new()
            .state(1, "P", "Alive")
            .state(2, "P", "Alive")
            .build();

        let err = write_table_to_path(&path, &table).unwrap_err();

        assert!(matches!(err, Error::Io(_)));
        assert!(path.is_dir());
        assert_eq!(std::fs::read_dir(&path).unwrap().count(), 0);
        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
