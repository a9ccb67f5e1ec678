//! Seal-registration spreadsheet filling.
//!
//! Target values land in fixed merged cell ranges. Writing into a merged
//! range requires lifting the merge, writing the range's top-left cell, and
//! restoring the same range; the range addresses come from the template
//! contract and must not be altered.

use std::path::Path;

use umya_spreadsheet::{reader, writer, Worksheet};

use super::DocumentError;

/// Write `value` into the merged `range` (e.g. `"AH7:BC9"`) of `sheet`.
///
/// Works whether or not the merge already exists; the range is merged
/// afterwards either way.
pub fn set_merged_cell_value(sheet: &mut Worksheet, range: &str, value: &str) {
    sheet
        .get_merge_cells_mut()
        .retain(|merged| merged.get_range() != range);
    let top_left = range.split(':').next().unwrap_or(range);
    sheet.get_cell_mut(top_left).set_value(value);
    sheet.add_merge_cells(range);
}

/// Fill the seal-registration template with `values` (range→value pairs)
/// and write the workbook to `output`, overwriting any previous run.
pub fn fill_seal_form(
    template: &Path,
    output: &Path,
    values: &[(String, String)],
) -> Result<(), DocumentError> {
    let mut book = reader::xlsx::read(template)
        .map_err(|e| DocumentError::Spreadsheet(format!("{:?}", e)))?;
    let sheet = book
        .get_sheet_mut(&0)
        .ok_or_else(|| DocumentError::Spreadsheet("workbook has no sheets".to_string()))?;

    for (range, value) in values {
        set_merged_cell_value(sheet, range, value);
    }

    writer::xlsx::write(&book, output).map_err(|e| DocumentError::Spreadsheet(format!("{:?}", e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seal_values() -> Vec<(String, String)> {
        vec![
            ("AH7:BC9".to_string(), "Sakura Trading LLC".to_string()),
            ("AH10:BC13".to_string(), " 東京都港区芝公園４丁目２−８".to_string()),
            ("G51:AC51".to_string(), "2025年6月15日".to_string()),
        ]
    }

    #[test]
    fn test_set_merged_cell_value_restores_the_merge() {
        let mut book = umya_spreadsheet::new_file();
        let sheet = book.get_sheet_mut(&0).unwrap();
        sheet.add_merge_cells("AH7:BC9");

        set_merged_cell_value(sheet, "AH7:BC9", "Sakura Trading LLC");

        assert_eq!(sheet.get_value("AH7"), "Sakura Trading LLC");
        assert!(sheet
            .get_merge_cells()
            .iter()
            .any(|merged| merged.get_range() == "AH7:BC9"));
    }

    #[test]
    fn test_set_merged_cell_value_merges_even_without_prior_merge() {
        let mut book = umya_spreadsheet::new_file();
        let sheet = book.get_sheet_mut(&0).unwrap();

        set_merged_cell_value(sheet, "G51:AC51", "2025年6月15日");

        assert_eq!(sheet.get_value("G51"), "2025年6月15日");
        assert!(sheet
            .get_merge_cells()
            .iter()
            .any(|merged| merged.get_range() == "G51:AC51"));
    }

    #[test]
    fn test_fill_seal_form_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let template_path = dir.path().join("template.xlsx");
        let output_path = dir.path().join("out.xlsx");

        let mut template = umya_spreadsheet::new_file();
        let sheet = template.get_sheet_mut(&0).unwrap();
        for (range, _) in seal_values() {
            sheet.add_merge_cells(range);
        }
        writer::xlsx::write(&template, &template_path).unwrap();

        fill_seal_form(&template_path, &output_path, &seal_values()).unwrap();

        let book = reader::xlsx::read(&output_path).unwrap();
        let sheet = book.get_sheet(&0).unwrap();
        assert_eq!(sheet.get_value("AH7"), "Sakura Trading LLC");
        assert_eq!(sheet.get_value("G51"), "2025年6月15日");
        assert_eq!(sheet.get_merge_cells().len(), seal_values().len());
    }

    #[test]
    fn test_fill_seal_form_missing_template_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = fill_seal_form(
            &dir.path().join("absent.xlsx"),
            &dir.path().join("out.xlsx"),
            &seal_values(),
        );
        assert!(result.is_err());
    }
}
