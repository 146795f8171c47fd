use thiserror::Error;

pub type DatasetResult<T> = Result<T, DatasetError>;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Can't run MSE on an empty dataset")]
    EmptyDataset,

    #[error("Could not find column '{0}' in dataset")]
    UnknownColumn(String),

    #[error("Original dataset and predicted dataset have different sizes: {original}, {predicted}")]
    UnmatchedLengths {
        original: usize,
        predicted: usize
    },

    #[error("Column '{column}' of entry {index} is not a number")]
    NonNumericValue {
        column: String,
        index: usize
    },

    #[error("Failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse dataset: {0}")]
    Json(#[from] serde_json::Error)
}
