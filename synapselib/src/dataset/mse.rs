use super::prelude::*;

/// Calculate mean squared error between values of the given
/// column of the original and predicted datasets.
///
/// ```
/// use synapselib::prelude::*;
///
/// let original = parse_dataset(r#"[{ "status": 1 }, { "status": 0 }]"#).unwrap();
/// let predicted = parse_dataset(r#"[{ "status": 0 }, { "status": 0 }]"#).unwrap();
///
/// assert_eq!(mean_squared_error(&original, &predicted, "status").unwrap(), 0.5);
/// ```
pub fn mean_squared_error(
    dataset: &[DataEntry],
    predicted: &[DataEntry],
    column: &str
) -> DatasetResult<f64> {
    if dataset.is_empty() {
        return Err(DatasetError::EmptyDataset);
    }

    let original_values = column_values(dataset, column)?;
    let predicted_values = column_values(predicted, column)?;

    if original_values.len() != predicted_values.len() {
        return Err(DatasetError::UnmatchedLengths {
            original: original_values.len(),
            predicted: predicted_values.len()
        });
    }

    let error = original_values.iter()
        .zip(predicted_values.iter())
        .map(|(original, predicted)| (original - predicted).powi(2))
        .sum::<f64>();

    Ok(error / original_values.len() as f64)
}

fn column_values(dataset: &[DataEntry], column: &str) -> DatasetResult<Vec<f64>> {
    dataset.iter()
        .enumerate()
        .map(|(index, entry)| {
            let value = entry.get(column)
                .ok_or_else(|| DatasetError::UnknownColumn(column.to_string()))?;

            value.as_number().ok_or_else(|| DatasetError::NonNumericValue {
                column: column.to_string(),
                index
            })
        })
        .collect()
}

#[cfg(test)]
fn statuses(values: &[f64]) -> Dataset {
    values.iter()
        .enumerate()
        .map(|(i, status)| super::entry([("id", (i as f64 + 1.0).into()), ("status", (*status).into())]))
        .collect()
}

#[test]
fn test_mean_squared_error() -> Result<(), DatasetError> {
    let dataset = statuses(&[1.0, 0.0, 0.0, 1.0]);
    let predicted = statuses(&[0.0, 0.0, 0.0, 0.0]);

    assert_eq!(mean_squared_error(&dataset, &predicted, "status")?, 0.5);
    assert_eq!(mean_squared_error(&dataset, &dataset, "status")?, 0.0);

    Ok(())
}

#[test]
fn test_mean_squared_error_empty_dataset() {
    let error = mean_squared_error(&[], &[], "status").unwrap_err();

    assert!(matches!(error, DatasetError::EmptyDataset));
    assert_eq!(error.to_string(), "Can't run MSE on an empty dataset");
}

#[test]
fn test_mean_squared_error_unknown_column() {
    let dataset = statuses(&[1.0, 0.0, 0.0, 1.0]);
    let predicted = statuses(&[0.0, 0.0, 0.0, 0.0]);

    let error = mean_squared_error(&dataset, &predicted, "statuses").unwrap_err();

    assert!(matches!(&error, DatasetError::UnknownColumn(column) if column == "statuses"));
    assert_eq!(error.to_string(), "Could not find column 'statuses' in dataset");
}

#[test]
fn test_mean_squared_error_unmatched_lengths() {
    let dataset = statuses(&[1.0, 0.0, 0.0, 1.0]);
    let predicted = statuses(&[0.0, 0.0, 0.0]);

    let error = mean_squared_error(&dataset, &predicted, "status").unwrap_err();

    assert!(matches!(error, DatasetError::UnmatchedLengths { original: 4, predicted: 3 }));
    assert_eq!(error.to_string(), "Original dataset and predicted dataset have different sizes: 4, 3");
}

#[test]
fn test_mean_squared_error_non_numeric() {
    let dataset = statuses(&[1.0, 0.0]);
    let mut predicted = statuses(&[0.0, 0.0]);

    predicted[1].insert(String::from("status"), "0".into());

    let error = mean_squared_error(&dataset, &predicted, "status").unwrap_err();

    assert!(matches!(error, DatasetError::NonNumericValue { index: 1, .. }));
}
