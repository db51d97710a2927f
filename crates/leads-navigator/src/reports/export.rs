use std::fmt;
use std::io::Write;
use std::str::FromStr;

use serde::Serialize;

use super::{
    DepartmentReportRow, DomainReportRow, ReadinessReportRow, Report, ReportError, ReportRows,
    RetentionReportRow,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(format!("unknown export format '{value}' (expected csv or json)")),
        }
    }
}

/// Write the report rows to `writer`: one CSV record per row, or the whole report as JSON.
pub fn write_report<W: Write>(
    report: &Report,
    format: ExportFormat,
    mut writer: W,
) -> Result<(), ReportError> {
    match format {
        ExportFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, report)?;
            writeln!(writer)?;
            Ok(())
        }
        ExportFormat::Csv => match &report.rows {
            ReportRows::Domains(rows) => write_csv(writer, &DomainReportRow::HEADER, rows),
            ReportRows::Departments(rows) => write_csv(writer, &DepartmentReportRow::HEADER, rows),
            ReportRows::Readiness(rows) => write_csv(writer, &ReadinessReportRow::HEADER, rows),
            ReportRows::Retention(rows) => write_csv(writer, &RetentionReportRow::HEADER, rows),
        },
    }
}

/// The header comes from `header` rather than the first row so an empty report still has one.
fn write_csv<W: Write, T: Serialize>(
    writer: W,
    header: &[&str],
    rows: &[T],
) -> Result<(), ReportError> {
    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv.write_record(header)?;
    for row in rows {
        csv.serialize(row)?;
    }
    csv.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidates::bundled_candidates;
    use crate::leads::LeadsFramework;
    use crate::reports::{build_report, ReportKind, ReportRequest};

    fn render(kind: ReportKind, format: ExportFormat) -> String {
        let candidates = bundled_candidates().expect("bundled seed parses");
        let report = build_report(
            kind,
            &candidates,
            &LeadsFramework::standard(),
            &ReportRequest::default(),
        )
        .expect("report builds");
        let mut buffer = Vec::new();
        write_report(&report, format, &mut buffer).expect("report writes");
        String::from_utf8(buffer).expect("utf-8 output")
    }

    #[test]
    fn readiness_csv_has_header_and_one_row_per_rating() {
        let output = render(ReportKind::Readiness, ExportFormat::Csv);
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines[0], "readinessRating,timeToReadiness,candidates");
        assert_eq!(lines[1], "Ready,<1 year,2");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn retention_csv_leaves_missing_values_blank() {
        let output = render(ReportKind::Retention, ExportFormat::Csv);
        let header = output.lines().next().expect("header");

        assert_eq!(
            header,
            "candidateId,candidate,department,riskOfLoss,impactOfLoss,factors,reasonForLeaving"
        );
        assert!(output.lines().nth(1).expect("first row").contains(",High,"));
    }

    #[test]
    fn empty_csv_report_still_has_header() {
        let candidates = bundled_candidates().expect("bundled seed parses");
        let request = ReportRequest {
            department: Some("Nowhere".to_string()),
            ..ReportRequest::default()
        };
        let report = build_report(
            ReportKind::Retention,
            &candidates,
            &LeadsFramework::standard(),
            &request,
        )
        .expect("report builds");

        let mut buffer = Vec::new();
        write_report(&report, ExportFormat::Csv, &mut buffer).expect("report writes");
        let output = String::from_utf8(buffer).expect("utf-8 output");

        assert_eq!(
            output,
            "candidateId,candidate,department,riskOfLoss,impactOfLoss,factors,reasonForLeaving\n"
        );
    }

    #[test]
    fn header_names_match_serialized_fields() {
        let output = render(ReportKind::Department, ExportFormat::Csv);
        let mut reader = csv::Reader::from_reader(output.as_bytes());
        let header = reader.headers().expect("header row").clone();

        assert_eq!(header.iter().collect::<Vec<_>>(), DepartmentReportRow::HEADER);
        assert_eq!(reader.records().count(), 4);
    }

    #[test]
    fn json_export_carries_kind_and_rows() {
        let output = render(ReportKind::Department, ExportFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&output).expect("valid json");

        assert_eq!(value["kind"], "department");
        assert_eq!(value["rows"].as_array().map(Vec::len), Some(4));
    }

    #[test]
    fn parses_formats() {
        assert_eq!("CSV".parse::<ExportFormat>(), Ok(ExportFormat::Csv));
        assert_eq!(" json ".parse::<ExportFormat>(), Ok(ExportFormat::Json));
        assert!("xml".parse::<ExportFormat>().is_err());
    }
}
