//! Single-record tabular frame.
//!
//! A [`Frame`] is an ordered mapping from column name to [`Cell`], holding
//! exactly one record as it flows through the preprocessing stages. Column
//! order is semantic: one-hot expansion appends indicator columns at the
//! end of the frame, and the final order must reproduce the layout the
//! scoring artifact was fit against.

/// A single value in a frame: either raw text or an encoded number.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Raw text, as received from the caller.
    Text(String),
    /// Encoded numeric value.
    Number(f64),
}

impl Cell {
    /// Returns the text content, if this cell is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            Cell::Number(_) => None,
        }
    }

    /// Returns the numeric content, if this cell is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Text(_) => None,
            Cell::Number(n) => Some(*n),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

/// An ordered single-row collection of named cells.
///
/// # Example
///
/// ```
/// use churn_pipeline::frame::{Cell, Frame};
///
/// let mut frame = Frame::new();
/// frame.push("tenure", Cell::Number(5.0));
/// frame.push("Contract", Cell::from("One year"));
/// assert_eq!(frame.width(), 2);
/// assert_eq!(frame.get("tenure"), Some(&Cell::Number(5.0)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    columns: Vec<(String, Cell)>,
}

impl Frame {
    /// Creates an empty frame.
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    /// Appends a column at the end of the frame.
    pub fn push(&mut self, name: impl Into<String>, cell: Cell) {
        self.columns.push((name.into(), cell));
    }

    /// Returns the cell for `name`, if present.
    pub fn get(&self, name: &str) -> Option<&Cell> {
        self.columns
            .iter()
            .find(|(col, _)| col == name)
            .map(|(_, cell)| cell)
    }

    /// Replaces the cell for `name` in place, keeping its position.
    ///
    /// Returns `false` if the column is not present.
    pub fn set(&mut self, name: &str, cell: Cell) -> bool {
        match self.columns.iter_mut().find(|(col, _)| col == name) {
            Some((_, slot)) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    /// Removes the column `name`, returning its cell.
    pub fn remove(&mut self, name: &str) -> Option<Cell> {
        let idx = self.columns.iter().position(|(col, _)| col == name)?;
        Some(self.columns.remove(idx).1)
    }

    /// Returns `true` if the frame has a column named `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.columns.iter().any(|(col, _)| col == name)
    }

    /// Returns the number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if the frame has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterates over `(name, cell)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Cell)> {
        self.columns.iter().map(|(name, cell)| (name.as_str(), cell))
    }

    /// Iterates mutably over `(name, cell)` pairs in column order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Cell)> {
        self.columns
            .iter_mut()
            .map(|(name, cell)| (name.as_str(), cell))
    }

    /// Returns the column names in order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(name, _)| name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order() {
        let mut frame = Frame::new();
        frame.push("a", Cell::Number(1.0));
        frame.push("b", Cell::from("x"));
        frame.push("c", Cell::Number(3.0));
        assert_eq!(frame.column_names(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let mut frame = Frame::new();
        frame.push("a", Cell::Number(1.0));
        frame.push("b", Cell::Number(2.0));
        frame.push("c", Cell::Number(3.0));

        assert_eq!(frame.remove("b"), Some(Cell::Number(2.0)));
        assert_eq!(frame.column_names(), vec!["a", "c"]);
        assert_eq!(frame.remove("missing"), None);
    }

    #[test]
    fn test_set_keeps_position() {
        let mut frame = Frame::new();
        frame.push("a", Cell::from("Yes"));
        frame.push("b", Cell::from("No"));

        assert!(frame.set("a", Cell::Number(1.0)));
        assert_eq!(frame.column_names(), vec!["a", "b"]);
        assert_eq!(frame.get("a"), Some(&Cell::Number(1.0)));
        assert!(!frame.set("missing", Cell::Number(0.0)));
    }

    #[test]
    fn test_cell_accessors() {
        assert_eq!(Cell::from("Yes").as_text(), Some("Yes"));
        assert_eq!(Cell::from("Yes").as_number(), None);
        assert_eq!(Cell::Number(2.5).as_number(), Some(2.5));
        assert_eq!(Cell::Number(2.5).as_text(), None);
    }
}
