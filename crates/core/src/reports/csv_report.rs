//! CSV export of uniformly shaped records

use contracts::reports::ReportRecord;

use super::{ExportContext, ReportError};
use crate::shared::export::{ExportedFile, CONTENT_TYPE_CSV};
use crate::shared::format::file_date_stamp;

/// Types that can be exported as a CSV row
///
/// The header of a file comes from its first record; callers keep every
/// record of one export in the same shape.
pub trait CsvExportable {
    /// Column names, in output order
    fn csv_headers(&self) -> Vec<String>;

    /// Values, in the same order as the headers
    fn csv_row(&self) -> Vec<String>;
}

impl CsvExportable for ReportRecord {
    fn csv_headers(&self) -> Vec<String> {
        self.keys().map(str::to_string).collect()
    }

    fn csv_row(&self) -> Vec<String> {
        self.values().map(str::to_string).collect()
    }
}

/// Render records as comma-separated text
///
/// Values containing a comma, a double quote or a line break are quoted,
/// with inner quotes doubled. Rows are not reconciled against the header.
pub fn render_csv<T: CsvExportable>(data: &[T]) -> Result<Vec<u8>, ReportError> {
    let first = data.first().ok_or(ReportError::NoData)?;

    let mut out = Vec::new();
    write_row(&mut out, &first.csv_headers())?;
    for item in data {
        write_row(&mut out, &item.csv_row())?;
    }
    Ok(out)
}

/// Append one record and its line break
///
/// A row with no text at all is a bare line break; the csv writer alone
/// would emit `""` for a single empty field.
fn write_row(out: &mut Vec<u8>, fields: &[String]) -> Result<(), ReportError> {
    let blank = match fields {
        [] => true,
        [only] => only.is_empty(),
        _ => false,
    };
    if blank {
        out.push(b'\n');
        return Ok(());
    }

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(&mut *out);
    writer.write_record(fields)?;
    writer.flush()?;
    Ok(())
}

/// Build `{prefix}_{YYYYMMDD}.csv` and save it
pub fn generate_csv_report<T: CsvExportable>(
    data: &[T],
    filename_prefix: &str,
    ctx: &ExportContext<'_>,
) -> Result<ExportedFile, ReportError> {
    if data.is_empty() {
        tracing::warn!("CSV export '{}' skipped: no data", filename_prefix);
        return Err(ReportError::NoData);
    }

    let bytes = render_csv(data)?;
    let file = ExportedFile {
        file_name: format!("{}_{}.csv", filename_prefix, file_date_stamp(ctx.clock.now())),
        content_type: CONTENT_TYPE_CSV,
        bytes,
    };

    ctx.sink.save(&file)?;
    tracing::info!("CSV export {} ready: {} rows", file.file_name, data.len());
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::clock::FixedClock;
    use crate::shared::config::ReportConfig;
    use crate::shared::export::MemorySink;
    use chrono::NaiveDate;

    fn clock() -> FixedClock {
        FixedClock(
            NaiveDate::from_ymd_opt(2024, 3, 5)
                .unwrap()
                .and_hms_opt(14, 30, 0)
                .unwrap(),
        )
    }

    fn export<T: CsvExportable>(
        data: &[T],
        prefix: &str,
        sink: &MemorySink,
    ) -> Result<ExportedFile, ReportError> {
        let clock = clock();
        let settings = ReportConfig::default();
        let ctx = ExportContext {
            clock: &clock,
            sink,
            settings: &settings,
        };
        generate_csv_report(data, prefix, &ctx)
    }

    #[test]
    fn test_empty_input_produces_no_file() {
        let sink = MemorySink::new();
        let result = export::<ReportRecord>(&[], "compras", &sink);
        assert!(matches!(result, Err(ReportError::NoData)));
        assert!(sink.files().is_empty());
    }

    #[test]
    fn test_comma_values_are_quoted() {
        let sink = MemorySink::new();
        let data = vec![ReportRecord::new().field("a", 1).field("b", "x,y")];
        let file = export(&data, "compras", &sink).unwrap();

        assert_eq!(file.file_name, "compras_20240305.csv");
        assert_eq!(file.content_type, CONTENT_TYPE_CSV);
        assert_eq!(file.text().unwrap(), "a,b\n1,\"x,y\"\n");
        assert_eq!(sink.files(), vec![file]);
    }

    #[test]
    fn test_header_follows_first_record_order() {
        let data = vec![
            ReportRecord::new().field("time", "Now").field("index", "1.56"),
            ReportRecord::new().field("time", "1 day ago").field("index", "1.67"),
        ];
        let text = String::from_utf8(render_csv(&data).unwrap()).unwrap();
        assert_eq!(text, "time,index\nNow,1.56\n1 day ago,1.67\n");
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        let data = vec![ReportRecord::new().field("name", "Lens \"A\"")];
        let text = String::from_utf8(render_csv(&data).unwrap()).unwrap();
        assert_eq!(text, "name\n\"Lens \"\"A\"\"\"\n");
    }

    #[test]
    fn test_lone_empty_field_is_a_blank_line() {
        let data = vec![ReportRecord::new().field("a", "")];
        let text = String::from_utf8(render_csv(&data).unwrap()).unwrap();
        assert_eq!(text, "a\n\n");

        // Empty fields next to others stay bare
        let data = vec![ReportRecord::new().field("a", "").field("b", "")];
        let text = String::from_utf8(render_csv(&data).unwrap()).unwrap();
        assert_eq!(text, "a,b\n,\n");
    }

    #[test]
    fn test_same_input_same_bytes() {
        let data = vec![ReportRecord::new().field("a", 1.5).field("b", "x")];
        let first = export(&data, "p", &MemorySink::new()).unwrap();
        let second = export(&data, "p", &MemorySink::new()).unwrap();
        assert_eq!(first, second);
    }
}
