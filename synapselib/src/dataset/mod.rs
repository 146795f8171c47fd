use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub mod error;
pub mod loader;
pub mod shift;
pub mod folds;
pub mod mse;

pub mod prelude {
    pub use super::{DataValue, DataEntry, Dataset};

    pub use super::error::*;
    pub use super::loader::*;
    pub use super::shift::*;
    pub use super::mse::*;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
/// Single cell of a dataset entry.
pub enum DataValue {
    Bool(bool),
    Number(f64),
    String(String)
}

impl DataValue {
    #[inline]
    /// Return stored number, or `None` if the value is not a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None
        }
    }
}

impl From<f64> for DataValue {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for DataValue {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for DataValue {
    #[inline]
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for DataValue {
    #[inline]
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

/// Record of a dataset: column name to its value.
pub type DataEntry = BTreeMap<String, DataValue>;

/// Ordered list of records sharing the same columns.
pub type Dataset = Vec<DataEntry>;

#[cfg(test)]
/// Build dataset entry from the list of columns and values.
pub(crate) fn entry<const N: usize>(columns: [(&str, DataValue); N]) -> DataEntry {
    columns.into_iter()
        .map(|(column, value)| (column.to_string(), value))
        .collect()
}

#[test]
fn test_data_value() {
    assert_eq!(DataValue::from(1.5).as_number(), Some(1.5));
    assert_eq!(DataValue::from("1.5").as_number(), None);
    assert_eq!(DataValue::from(true).as_number(), None);
}
