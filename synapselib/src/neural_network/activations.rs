use super::prelude::*;

#[inline]
pub fn linear<F: Float>(x: F) -> F {
    x
}

#[inline]
/// Logistic function, `1 / (1 + e^-x)`.
pub fn sigmoid<F: Float>(x: F) -> F {
    F::ONE / (F::ONE + (-x).exp())
}

#[inline]
pub fn tanh<F: Float>(x: F) -> F {
    x.tanh()
}

#[inline]
pub fn relu<F: Float>(x: F) -> F {
    if x > F::ZERO { x } else { F::ZERO }
}

/// Resolve activation function by its name.
///
/// Known names are `linear`, `sigmoid` (or `logistic`), `tanh` and `relu`.
/// Return `None` for any other name.
pub fn activation_by_name<F: Float>(name: &str) -> Option<fn(F) -> F> {
    match name.to_ascii_lowercase().as_str() {
        "linear"               => Some(linear as fn(F) -> F),
        "sigmoid" | "logistic" => Some(sigmoid as fn(F) -> F),
        "tanh"                 => Some(tanh as fn(F) -> F),
        "relu"                 => Some(relu as fn(F) -> F),

        _ => None
    }
}

#[test]
fn test_sigmoid() {
    assert_eq!(sigmoid(0.0_f64), 0.5);

    assert!((sigmoid(7.0_f64) - 0.999089).abs() < 1e-6);
    assert!((sigmoid(3.0_f64) - 0.9525741268224334).abs() < 1e-12);
}

#[test]
fn test_relu() {
    assert_eq!(relu(-2.5_f32), 0.0);
    assert_eq!(relu(2.5_f32), 2.5);
}

#[test]
fn test_activation_by_name() {
    let function = activation_by_name::<f64>("Sigmoid").expect("sigmoid should be known");

    assert_eq!(function(0.0), 0.5);

    assert!(activation_by_name::<f64>("tanh").is_some());
    assert!(activation_by_name::<f64>("softmax").is_none());
}
