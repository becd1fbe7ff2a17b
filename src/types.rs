use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

//==============================================================================
// Cell Values
//==============================================================================

/// A single scalar cell value.
///
/// Integer, float, and date-serial cells from the backend all coerce to
/// `Number`; ISO date strings and cell error codes coerce to `Text`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    #[default]
    Empty,
    Number(f64),
    Text(String),
    Bool(bool),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Cell::Empty => "Empty",
            Cell::Number(_) => "Number",
            Cell::Text(_) => "Text",
            Cell::Bool(_) => "Bool",
        }
    }
}

impl fmt::Display for Cell {
    /// Renders the value the way a header name would be read from it:
    /// whole numbers print without a decimal point, empty cells print as
    /// an empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            Cell::Text(s) => write!(f, "{}", s),
            Cell::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Number(value as f64)
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Cell::Bool(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

//==============================================================================
// Rows
//==============================================================================

/// One row of a sheet, as handed to the surrounding pipeline.
///
/// A row is `Mapped` only when the reader's header set has exactly as many
/// names as the row has cells; otherwise it is returned positionally.
#[derive(Debug, Clone, PartialEq)]
pub enum Row {
    /// Positional cell values
    Values(Vec<Cell>),
    /// Header name → value pairs, in header declaration order
    Mapped(Vec<(String, Cell)>),
}

impl Row {
    /// Number of cells in the row
    pub fn len(&self) -> usize {
        match self {
            Row::Values(cells) => cells.len(),
            Row::Mapped(pairs) => pairs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cell at a positional index
    pub fn get(&self, index: usize) -> Option<&Cell> {
        match self {
            Row::Values(cells) => cells.get(index),
            Row::Mapped(pairs) => pairs.get(index).map(|(_, cell)| cell),
        }
    }

    /// Cell under a header name (mapped rows only)
    pub fn value(&self, name: &str) -> Option<&Cell> {
        match self {
            Row::Values(_) => None,
            Row::Mapped(pairs) => pairs
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, cell)| cell),
        }
    }
}

impl Serialize for Row {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Row::Values(cells) => cells.serialize(serializer),
            Row::Mapped(pairs) => {
                let mut map = serializer.serialize_map(Some(pairs.len()))?;
                for (name, cell) in pairs {
                    map.serialize_entry(name, cell)?;
                }
                map.end()
            }
        }
    }
}
