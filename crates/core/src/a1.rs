//! A1 notation for building grid ranges from human-written addresses.

use sheetkit_types::GridRange;

use crate::error::{GridError, GridResult};

fn invalid(notation: &str) -> GridError {
    GridError::InvalidRange(notation.to_string())
}

/// Drop a leading `Sheet!` or `'My Sheet'!` qualifier.
fn strip_sheet_prefix(notation: &str) -> &str {
    notation.rsplit_once('!').map_or(notation, |(_, cell)| cell)
}

/// Parse A1-style cell notation (e.g. "A1", "$B$2", "AA10").
/// Returns (row, column) as 0-based indices.
pub fn parse_a1(notation: &str) -> GridResult<(u32, u32)> {
    let cell: String = strip_sheet_prefix(notation.trim())
        .chars()
        .filter(|c| *c != '$')
        .collect::<String>()
        .to_ascii_uppercase();

    let split_pos = cell
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(|| invalid(notation))?;
    let (col_part, row_part) = cell.split_at(split_pos);
    if col_part.is_empty() {
        return Err(invalid(notation));
    }

    let col = parse_column_letters(col_part).ok_or_else(|| invalid(notation))?;
    let row = row_part
        .parse::<u32>()
        .ok()
        .filter(|row| *row > 0)
        .ok_or_else(|| invalid(notation))?;

    Ok((row - 1, col))
}

/// Parse A1-style range notation (e.g. "A1:C3"). A single cell is a
/// one-cell range. Corners are normalized so start <= end.
/// Returns inclusive ((start_row, start_col), (end_row, end_col)).
pub fn parse_a1_range(notation: &str) -> GridResult<((u32, u32), (u32, u32))> {
    let body = strip_sheet_prefix(notation.trim());
    let Some((first, second)) = body.split_once(':') else {
        let cell = parse_a1(body)?;
        return Ok((cell, cell));
    };

    let (start_row, start_col) = parse_a1(first)?;
    let (end_row, end_col) = parse_a1(second)?;

    Ok((
        (start_row.min(end_row), start_col.min(end_col)),
        (start_row.max(end_row), start_col.max(end_col)),
    ))
}

/// Half-open [`GridRange`] covering an A1 range on `sheet_id`.
///
/// ```
/// use sheetkit_core::a1::grid_range_from_a1;
///
/// let range = grid_range_from_a1(0, "B2:D5").unwrap();
/// assert_eq!(range.start_row_index, Some(1));
/// assert_eq!(range.end_row_index, Some(5));
/// assert_eq!(range.start_column_index, Some(1));
/// assert_eq!(range.end_column_index, Some(4));
/// ```
pub fn grid_range_from_a1(sheet_id: i64, notation: &str) -> GridResult<GridRange> {
    let ((start_row, start_col), (end_row, end_col)) = parse_a1_range(notation)?;
    Ok(GridRange::new(
        sheet_id,
        start_row,
        end_row + 1,
        start_col,
        end_col + 1,
    ))
}

/// A=0, B=1, ... Z=25, AA=26. `None` on non-letters or overflow.
fn parse_column_letters(letters: &str) -> Option<u32> {
    let mut col: u32 = 0;
    for b in letters.bytes() {
        if !b.is_ascii_uppercase() {
            return None;
        }
        col = col.checked_mul(26)?.checked_add(u32::from(b - b'A') + 1)?;
    }
    col.checked_sub(1)
}

/// Convert 0-based column index to column letters
/// 0=A, 1=B, ... 25=Z, 26=AA, ...
pub fn column_letters(col: u32) -> String {
    let mut result = Vec::new();
    let mut n = u64::from(col) + 1;

    while n > 0 {
        n -= 1;
        result.push(b'A' + (n % 26) as u8);
        n /= 26;
    }

    result.reverse();
    String::from_utf8_lossy(&result).into_owned()
}

/// (0, 0) = "A1"
pub fn to_a1(row: u32, col: u32) -> String {
    format!("{}{}", column_letters(col), u64::from(row) + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_a1() {
        assert_eq!(parse_a1("A1").unwrap(), (0, 0));
        assert_eq!(parse_a1("B1").unwrap(), (0, 1));
        assert_eq!(parse_a1("A2").unwrap(), (1, 0));
        assert_eq!(parse_a1("Z1").unwrap(), (0, 25));
        assert_eq!(parse_a1("AA1").unwrap(), (0, 26));
        assert_eq!(parse_a1("ZZ1").unwrap(), (0, 701));
        assert_eq!(parse_a1("aa1").unwrap(), (0, 26));
        assert_eq!(parse_a1("$C$4").unwrap(), (3, 2));
        assert_eq!(parse_a1("'My Sheet'!B3").unwrap(), (2, 1));
    }

    #[test]
    fn test_parse_a1_errors() {
        assert!(parse_a1("").is_err());
        assert!(parse_a1("A").is_err());
        assert!(parse_a1("1").is_err());
        assert!(parse_a1("A0").is_err());
        assert!(parse_a1("A1B").is_err());
        assert!(parse_a1("ß1").is_err());
        assert!(parse_a1("Aé1").is_err());
        assert!(parse_a1("ZZZZZZZZ1").is_err());
        assert!(matches!(parse_a1("?1"), Err(GridError::InvalidRange(_))));
    }

    #[test]
    fn test_parse_a1_range() {
        assert_eq!(parse_a1_range("A1:C3").unwrap(), ((0, 0), (2, 2)));
        assert_eq!(parse_a1_range("C3:A1").unwrap(), ((0, 0), (2, 2)));
        assert_eq!(parse_a1_range("B2").unwrap(), ((1, 1), (1, 1)));
        assert_eq!(parse_a1_range("Data!A1:B2").unwrap(), ((0, 0), (1, 1)));
    }

    #[test]
    fn test_grid_range_from_a1_is_half_open() {
        let range = grid_range_from_a1(3, "A1").unwrap();
        assert_eq!(range.sheet_id, 3);
        assert_eq!(range.row_count(), Some(1));
        assert_eq!(range.column_count(), Some(1));
    }

    #[test]
    fn test_column_letters() {
        assert_eq!(column_letters(0), "A");
        assert_eq!(column_letters(25), "Z");
        assert_eq!(column_letters(26), "AA");
        assert_eq!(column_letters(701), "ZZ");
        assert_eq!(column_letters(702), "AAA");
        assert_eq!(to_a1(99, 25), "Z100");
    }

    #[test]
    fn test_roundtrip() {
        for row in 0..5 {
            for col in 0..60 {
                assert_eq!(parse_a1(&to_a1(row, col)).unwrap(), (row, col));
            }
        }
    }
}
