use std::collections::BTreeMap;

use super::prelude::*;

/// Amount subtracted from the values of each shifted column.
pub type Shifts = BTreeMap<String, f64>;

/// Reduce numeric values of every given column to a single shift.
///
/// The fold function is called as `reduce(previous, current, index, values)`
/// for each numeric value of the column in the dataset order, starting
/// from `initial_value`. Entries without the column or with a non-numeric
/// value in it are not folded.
pub fn compute_shifts(
    dataset: &[DataEntry],
    columns: &[impl AsRef<str>],
    reduce: impl Fn(f64, f64, usize, &[f64]) -> f64,
    initial_value: f64
) -> Shifts {
    columns.iter()
        .map(|column| {
            let column = column.as_ref();

            let values = dataset.iter()
                .filter_map(|entry| entry.get(column).and_then(DataValue::as_number))
                .collect::<Vec<f64>>();

            let shift = values.iter()
                .enumerate()
                .fold(initial_value, |previous, (index, current)| {
                    reduce(previous, *current, index, &values)
                });

            tracing::debug!(column, shift, "column shift computed");

            (column.to_string(), shift)
        })
        .collect()
}

/// Subtract shifts from the numeric values of the entry's columns.
///
/// Columns missing from the shifts, and non-numeric values
/// are left untouched. Return the same updated entry.
pub fn shift_entry<'a>(entry: &'a mut DataEntry, shifts: &Shifts) -> &'a mut DataEntry {
    for (column, shift) in shifts {
        if let Some(DataValue::Number(value)) = entry.get_mut(column) {
            *value -= shift;
        }
    }

    entry
}

/// Compute shifts of the given columns once and apply them
/// to every entry of the dataset in place.
pub fn shift_dataset<'a>(
    dataset: &'a mut Dataset,
    columns: &[impl AsRef<str>],
    reduce: impl Fn(f64, f64, usize, &[f64]) -> f64,
    initial_value: f64
) -> &'a mut Dataset {
    let shifts = compute_shifts(dataset, columns, reduce, initial_value);

    for entry in dataset.iter_mut() {
        shift_entry(entry, &shifts);
    }

    dataset
}

#[cfg(test)]
fn boxes_dataset() -> Dataset {
    use super::entry;

    vec![
        entry([("id", 1.0.into()), ("length", 152.0.into()), ("width", 40.0.into()),  ("depth", 10.0.into())]),
        entry([("id", 2.0.into()), ("length", 13.0.into()),  ("width", 70.0.into()),  ("depth", 80.0.into())]),
        entry([("id", 3.0.into()), ("length", 132.0.into()), ("width", 100.0.into()), ("depth", 100.0.into())]),
        entry([("id", 4.0.into()), ("length", 200.0.into()), ("width", 120.0.into()), ("depth", 5.0.into())])
    ]
}

#[cfg(test)]
fn boxes_shifts() -> Shifts {
    Shifts::from([
        (String::from("length"), 124.25),
        (String::from("width"), 82.5)
    ])
}

#[test]
fn test_compute_shifts() {
    let shifts = compute_shifts(&boxes_dataset(), &["length", "width"], super::folds::mean, 0.0);

    assert_eq!(shifts, boxes_shifts());
}

#[test]
fn test_compute_shifts_with_other_folds() {
    let dataset = boxes_dataset();

    let sums = compute_shifts(&dataset, &["length"], super::folds::sum, 0.0);
    let mins = compute_shifts(&dataset, &["width"], super::folds::min, f64::INFINITY);
    let maxs = compute_shifts(&dataset, &["depth"], super::folds::max, f64::NEG_INFINITY);

    assert_eq!(sums["length"], 497.0);
    assert_eq!(mins["width"], 40.0);
    assert_eq!(maxs["depth"], 100.0);

    // Unknown column folds nothing.
    let shifts = compute_shifts(&dataset, &["height"], super::folds::sum, 3.0);

    assert_eq!(shifts["height"], 3.0);
}

#[test]
fn test_shift_entry() {
    use super::entry;

    let mut dataset = boxes_dataset();

    let expected = entry([("id", 1.0.into()), ("length", 27.75.into()), ("width", (-42.5).into()), ("depth", 10.0.into())]);

    assert_eq!(shift_entry(&mut dataset[0], &boxes_shifts()), &expected);
}

#[test]
/// Non-numeric values are not shifted.
fn test_shift_entry_non_numeric() {
    use super::entry;

    let mut dataset = boxes_dataset();

    dataset[0].insert(String::from("width"), "40".into());

    let expected = entry([("id", 1.0.into()), ("length", 27.75.into()), ("width", "40".into()), ("depth", 10.0.into())]);

    assert_eq!(shift_entry(&mut dataset[0], &boxes_shifts()), &expected);
}

#[test]
fn test_shift_dataset() {
    use super::entry;

    let mut dataset = boxes_dataset();

    let expected = vec![
        entry([("id", 1.0.into()), ("length", 27.75.into()),    ("width", (-42.5).into()), ("depth", 10.0.into())]),
        entry([("id", 2.0.into()), ("length", (-111.25).into()), ("width", (-12.5).into()), ("depth", 80.0.into())]),
        entry([("id", 3.0.into()), ("length", 7.75.into()),     ("width", 17.5.into()),    ("depth", 100.0.into())]),
        entry([("id", 4.0.into()), ("length", 75.75.into()),    ("width", 37.5.into()),    ("depth", 5.0.into())])
    ];

    assert_eq!(shift_dataset(&mut dataset, &["length", "width"], super::folds::mean, 0.0), &expected);

    // Entries were updated in place.
    assert_eq!(dataset, expected);
}
