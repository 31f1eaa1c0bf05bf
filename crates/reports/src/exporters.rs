//! Report exporters - CSV, JSON, Markdown.
//!
//! Each exporter renders any [`ReportData`] to a `String` in its format.

/// Trait for exporting reports to different formats
pub trait ReportExporter {
    /// Export to the target format
    fn export(&self, report: &dyn ReportData) -> String;

    /// Get the file extension for this format
    fn extension(&self) -> &'static str;

    /// Get the MIME type for this format
    fn mime_type(&self) -> &'static str;
}

/// Trait for data that can be exported
pub trait ReportData {
    /// Get the report title
    fn title(&self) -> &str;

    /// Get column headers
    fn headers(&self) -> Vec<String>;

    /// Get data rows
    fn rows(&self) -> Vec<Vec<String>>;

    /// Get summary statistics as key-value pairs
    fn summary(&self) -> Vec<(String, String)>;
}

// ============================================================================
// CSV Exporter
// ============================================================================

/// CSV format exporter
pub struct CsvExporter {
    delimiter: char,
    include_header: bool,
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }
}

impl CsvExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn without_header(mut self) -> Self {
        self.include_header = false;
        self
    }

    fn escape_field(&self, field: &str) -> String {
        if field.contains(self.delimiter) || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    fn write_row(&self, output: &mut String, fields: &[String]) {
        let escaped: Vec<String> = fields.iter().map(|f| self.escape_field(f)).collect();
        output.push_str(&escaped.join(&self.delimiter.to_string()));
        output.push('\n');
    }
}

impl ReportExporter for CsvExporter {
    fn export(&self, report: &dyn ReportData) -> String {
        let mut output = String::new();

        if self.include_header {
            self.write_row(&mut output, &report.headers());
        }
        for row in report.rows() {
            self.write_row(&mut output, &row);
        }

        output
    }

    fn extension(&self) -> &'static str {
        "csv"
    }

    fn mime_type(&self) -> &'static str {
        "text/csv"
    }
}

// ============================================================================
// JSON Exporter
// ============================================================================

/// JSON format exporter
pub struct JsonExporter {
    pretty: bool,
}

impl Default for JsonExporter {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl JsonExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }
}

impl ReportExporter for JsonExporter {
    fn export(&self, report: &dyn ReportData) -> String {
        let headers = report.headers();

        let json_rows: Vec<serde_json::Value> = report
            .rows()
            .iter()
            .map(|row| {
                let mut obj = serde_json::Map::new();
                for (i, header) in headers.iter().enumerate() {
                    let value = row.get(i).cloned().unwrap_or_default();
                    obj.insert(header.clone(), serde_json::Value::String(value));
                }
                serde_json::Value::Object(obj)
            })
            .collect();

        let summary_obj: serde_json::Map<String, serde_json::Value> = report
            .summary()
            .into_iter()
            .map(|(k, v)| (k, serde_json::Value::String(v)))
            .collect();

        let output = serde_json::json!({
            "title": report.title(),
            "summary": summary_obj,
            "data": json_rows,
        });

        if self.pretty {
            serde_json::to_string_pretty(&output).unwrap_or_default()
        } else {
            serde_json::to_string(&output).unwrap_or_default()
        }
    }

    fn extension(&self) -> &'static str {
        "json"
    }

    fn mime_type(&self) -> &'static str {
        "application/json"
    }
}

// ============================================================================
// Markdown Exporter
// ============================================================================

/// Markdown format exporter
pub struct MarkdownExporter {
    include_summary: bool,
}

impl Default for MarkdownExporter {
    fn default() -> Self {
        Self {
            include_summary: true,
        }
    }
}

impl MarkdownExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn without_summary(mut self) -> Self {
        self.include_summary = false;
        self
    }
}

impl ReportExporter for MarkdownExporter {
    fn export(&self, report: &dyn ReportData) -> String {
        let mut output = String::new();

        output.push_str(&format!("# {}\n\n", report.title()));

        if self.include_summary {
            output.push_str("## Summary\n\n");
            for (key, value) in report.summary() {
                output.push_str(&format!("- **{}**: {}\n", key, value));
            }
            output.push('\n');
        }

        output.push_str("## Data\n\n");

        let headers = report.headers();
        if !headers.is_empty() {
            output.push_str("| ");
            output.push_str(&headers.join(" | "));
            output.push_str(" |\n");

            output.push_str("| ");
            output.push_str(
                &headers
                    .iter()
                    .map(|_| "---")
                    .collect::<Vec<_>>()
                    .join(" | "),
            );
            output.push_str(" |\n");

            for row in report.rows() {
                output.push_str("| ");
                output.push_str(&row.join(" | "));
                output.push_str(" |\n");
            }
        }

        output
    }

    fn extension(&self) -> &'static str {
        "md"
    }

    fn mime_type(&self) -> &'static str {
        "text/markdown"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal fixture so exporter behavior is tested independently of
    /// the concrete report types
    struct FixtureReport;

    impl ReportData for FixtureReport {
        fn title(&self) -> &str {
            "Fixture Report"
        }

        fn headers(&self) -> Vec<String> {
            vec!["Name".to_string(), "Note".to_string()]
        }

        fn rows(&self) -> Vec<Vec<String>> {
            vec![
                vec!["John".to_string(), "plain".to_string()],
                vec!["Alice".to_string(), "has, comma and \"quotes\"".to_string()],
            ]
        }

        fn summary(&self) -> Vec<(String, String)> {
            vec![("Rows".to_string(), "2".to_string())]
        }
    }

    #[test]
    fn test_csv_exporter() {
        let exporter = CsvExporter::new();
        let output = exporter.export(&FixtureReport);

        assert!(output.starts_with("Name,Note\n"));
        assert!(output.contains("John,plain\n"));
        // quoted field with doubled quotes
        assert!(output.contains("Alice,\"has, comma and \"\"quotes\"\"\"\n"));
        assert_eq!(exporter.extension(), "csv");
    }

    #[test]
    fn test_csv_without_header() {
        let output = CsvExporter::new().without_header().export(&FixtureReport);
        assert!(output.starts_with("John,plain\n"));
    }

    #[test]
    fn test_csv_custom_delimiter() {
        let output = CsvExporter::new()
            .with_delimiter(';')
            .export(&FixtureReport);
        assert!(output.starts_with("Name;Note\n"));
        // comma no longer needs quoting, the embedded quotes still do
        assert!(output.contains("Alice;\"has, comma and \"\"quotes\"\"\"\n"));
    }

    #[test]
    fn test_json_exporter() {
        let exporter = JsonExporter::new();
        let output = exporter.export(&FixtureReport);

        assert!(output.contains("\"title\": \"Fixture Report\""));
        assert!(output.contains("\"Name\": \"John\""));
        assert!(output.contains("\"Rows\": \"2\""));
        assert_eq!(exporter.extension(), "json");
    }

    #[test]
    fn test_json_compact() {
        let output = JsonExporter::new().compact().export(&FixtureReport);
        assert!(!output.contains("  "));
        assert!(output.contains("\"title\":\"Fixture Report\""));
    }

    #[test]
    fn test_markdown_exporter() {
        let exporter = MarkdownExporter::new();
        let output = exporter.export(&FixtureReport);

        assert!(output.starts_with("# Fixture Report\n"));
        assert!(output.contains("## Summary\n"));
        assert!(output.contains("- **Rows**: 2\n"));
        assert!(output.contains("| Name | Note |\n"));
        assert!(output.contains("| --- | --- |\n"));
        assert!(output.contains("| John | plain |\n"));
        assert_eq!(exporter.extension(), "md");
    }

    #[test]
    fn test_markdown_without_summary() {
        let output = MarkdownExporter::new()
            .without_summary()
            .export(&FixtureReport);
        assert!(!output.contains("## Summary"));
        assert!(output.contains("## Data"));
    }
}
