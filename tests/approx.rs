#![cfg(feature = "approx")]

use approx::{assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq};

use ndgrid::Array;

#[test]
fn abs_diff_eq_on_arrays() {
    let a = Array::from_vec(&[2, 2], vec![1.0f64, 2.0, 3.0, 4.0]).unwrap();
    let b = &a + 1e-9;
    assert_abs_diff_eq!(a, b, epsilon = 1e-6);
    assert_abs_diff_ne!(a, b, epsilon = 1e-12);
}

#[test]
fn relative_eq_on_arrays() {
    let a = Array::from_vec(&[3], vec![1.0f64, 1e10, 1e-10]).unwrap();
    let b = Array::from_vec(&[3], vec![1.0, 1.00001e10, 1.1e-10]).unwrap();
    assert_relative_eq!(a, b, max_relative = 1e-1);
}

#[test]
fn different_shapes_are_never_close() {
    let a = Array::from_vec(&[2], vec![1.0f64, 2.0]).unwrap();
    let b = Array::from_vec(&[2, 1], vec![1.0f64, 2.0]).unwrap();
    assert_abs_diff_ne!(a, b, epsilon = 1.0);
}
