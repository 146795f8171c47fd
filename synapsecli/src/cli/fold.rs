use clap::ValueEnum;

use synapselib::dataset::folds;

/// Fold function signature accepted by `compute_shifts`.
pub type FoldFunction = fn(f64, f64, usize, &[f64]) -> f64;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
/// Way of computing a column's shift.
pub enum Fold {
    #[default]
    /// Shift by the column's mean value.
    Mean,

    /// Shift by the sum of the column's values.
    Sum,

    /// Shift by the column's minimal value.
    Min,

    /// Shift by the column's maximal value.
    Max
}

impl Fold {
    #[inline]
    pub fn function(&self) -> FoldFunction {
        match self {
            Self::Mean => folds::mean,
            Self::Sum  => folds::sum,
            Self::Min  => folds::min,
            Self::Max  => folds::max
        }
    }

    #[inline]
    pub fn initial_value(&self) -> f64 {
        match self {
            Self::Mean | Self::Sum => 0.0,

            Self::Min => f64::INFINITY,
            Self::Max => f64::NEG_INFINITY
        }
    }
}

#[test]
fn test_folds() {
    let values = [152.0, 13.0, 132.0, 200.0];

    let shift = |fold: Fold| {
        values.iter()
            .enumerate()
            .fold(fold.initial_value(), |previous, (index, current)| {
                fold.function()(previous, *current, index, &values)
            })
    };

    assert_eq!(shift(Fold::Mean), 124.25);
    assert_eq!(shift(Fold::Sum), 497.0);
    assert_eq!(shift(Fold::Min), 13.0);
    assert_eq!(shift(Fold::Max), 200.0);
}
