//! Output formatting utilities

use crate::application::FixReport;

/// Format the single confirmation line printed after a run.
pub fn format_report(report: &FixReport) -> String {
    format!("Fixed XML tags in {}", report.file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_confirmation() {
        let report = FixReport {
            file_name: "test_xmlvalidator.cpp".to_string(),
            literal_replacements: 2,
            single_char_replacements: 1,
        };

        assert_eq!(
            format_report(&report),
            "Fixed XML tags in test_xmlvalidator.cpp"
        );
    }

    #[test]
    fn test_format_does_not_depend_on_counts() {
        let report = FixReport {
            file_name: "test_xmlvalidator.cpp".to_string(),
            literal_replacements: 0,
            single_char_replacements: 0,
        };

        assert_eq!(
            format_report(&report),
            "Fixed XML tags in test_xmlvalidator.cpp"
        );
    }
}
