//! Find a sheet in spreadsheet metadata by title or id.

use std::fmt;

use sheetkit_types::{SheetProperties, Spreadsheet};

use crate::error::{GridError, GridResult};

/// Find a sheet by exact title.
pub fn find_sheet_by_name<'a>(spreadsheet: &'a Spreadsheet, name: &str) -> Option<&'a SheetProperties> {
    spreadsheet
        .sheets
        .iter()
        .map(|sheet| &sheet.properties)
        .find(|props| props.title.as_deref() == Some(name))
}

/// Find a sheet by its numeric id.
pub fn find_sheet_by_id(spreadsheet: &Spreadsheet, id: i64) -> Option<&SheetProperties> {
    spreadsheet
        .sheets
        .iter()
        .map(|sheet| &sheet.properties)
        .find(|props| props.sheet_id == Some(id))
}

/// How to pick a sheet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SheetSelector {
    Name(String),
    Id(i64),
}

impl SheetSelector {
    /// Resolve against spreadsheet metadata.
    pub fn select<'a>(&self, spreadsheet: &'a Spreadsheet) -> GridResult<&'a SheetProperties> {
        let found = match self {
            SheetSelector::Name(name) => find_sheet_by_name(spreadsheet, name),
            SheetSelector::Id(id) => find_sheet_by_id(spreadsheet, *id),
        };
        found.ok_or_else(|| GridError::sheet_not_found(self))
    }
}

impl fmt::Display for SheetSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetSelector::Name(name) => write!(f, "'{name}'"),
            SheetSelector::Id(id) => write!(f, "id {id}"),
        }
    }
}

impl From<&str> for SheetSelector {
    fn from(name: &str) -> Self {
        SheetSelector::Name(name.to_string())
    }
}

impl From<String> for SheetSelector {
    fn from(name: String) -> Self {
        SheetSelector::Name(name)
    }
}

impl From<i64> for SheetSelector {
    fn from(id: i64) -> Self {
        SheetSelector::Id(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn spreadsheet() -> Spreadsheet {
        serde_json::from_value(json!({
            "spreadsheetId": "abc",
            "sheets": [
                {"properties": {"sheetId": 0, "title": "Data"}},
                {"properties": {"sheetId": 1234, "title": "Summary"}}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_find_by_name() {
        let ss = spreadsheet();
        assert_eq!(find_sheet_by_name(&ss, "Summary").unwrap().sheet_id, Some(1234));
        assert!(find_sheet_by_name(&ss, "summary").is_none());
    }

    #[test]
    fn test_find_by_id() {
        let ss = spreadsheet();
        assert_eq!(
            find_sheet_by_id(&ss, 0).unwrap().title.as_deref(),
            Some("Data")
        );
        assert!(find_sheet_by_id(&ss, 99).is_none());
    }

    #[test]
    fn test_selector_not_found() {
        let ss = spreadsheet();
        let err = SheetSelector::from("Missing").select(&ss).unwrap_err();
        assert_eq!(err.to_string(), "Sheet not found: 'Missing'");

        let err = SheetSelector::from(7_i64).select(&ss).unwrap_err();
        assert_eq!(err.to_string(), "Sheet not found: id 7");
    }
}
