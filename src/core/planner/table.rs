//! Fixed-width course table rendering
//!
//! Column widths match the course row produced by `Course`'s `Display` impl,
//! with a three-character position column in front.

use crate::core::models::Course;
use std::fmt::{self, Write};

/// Total width of the separator line under the header
pub const TABLE_WIDTH: usize = 98;

/// Write the header row and separator line.
///
/// # Errors
/// Propagates errors from the underlying writer.
pub fn write_header<W: Write>(out: &mut W) -> fmt::Result {
    let header = format!(
        "{:<3} {:<30} {:<15} {:<5} {:<10} {}",
        "No.", "Course Name", "Department", "Code", "Section", "Instructor"
    );
    writeln!(out, "{header}")?;
    writeln!(out, "{}", "-".repeat(TABLE_WIDTH))
}

/// Write one course row prefixed by its 1-based position.
///
/// # Errors
/// Propagates errors from the underlying writer.
pub fn write_row<W: Write>(out: &mut W, position: usize, course: &Course) -> fmt::Result {
    writeln!(out, "{position:<3} {course}")
}

/// Render a complete table for the given `(position, course)` rows.
#[must_use]
pub fn render<'a, I>(rows: I) -> String
where
    I: IntoIterator<Item = (usize, &'a Course)>,
{
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_header(&mut out);
    for (position, course) in rows {
        let _ = write_row(&mut out, position, course);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table_has_header_only() {
        let table = render(std::iter::empty());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("No. Course Name"));
        assert!(lines[0].ends_with("Instructor"));
        assert_eq!(lines[1], "-".repeat(TABLE_WIDTH));
    }

    #[test]
    fn test_rows_keep_given_positions() {
        let course = Course::new("Physics", "PHY", 150, 1, "Lee").unwrap();
        let table = render([(3, &course)]);
        let row = table.lines().nth(2).unwrap();

        assert!(row.starts_with("3   Physics"));
        assert!(row.ends_with("Lee"));
    }

    #[test]
    fn test_header_columns_align_with_rows() {
        let course = Course::new("Physics", "PHY", 150, 1, "Lee").unwrap();
        let table = render([(1, &course)]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0].find("Department"), lines[2].find("PHY"));
        assert_eq!(lines[0].find("Instructor"), lines[2].find("Lee"));
    }
}
