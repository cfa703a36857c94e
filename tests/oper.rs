use ndgrid::{Array, Axis, ErrorKind};

fn arange(shape: &[usize]) -> Array<i32> {
    let n: usize = shape.iter().product();
    Array::from_vec(shape, (1..=n as i32).collect()).unwrap()
}

#[test]
fn reduce_axis_sums() {
    let a = arange(&[3, 1, 2]);

    let s0 = a.reduce_axis(Axis(0), None, |acc, &x| acc + x);
    assert_eq!(s0.shape(), &[1, 2]);
    assert_eq!(s0.to_vec(), [9, 12]);

    let s1 = a.reduce_axis(Axis(1), None, |acc, &x| acc + x);
    assert_eq!(s1.shape(), &[3, 2]);
    assert_eq!(s1.to_vec(), [1, 2, 3, 4, 5, 6]);

    let s2 = a.reduce_axis(Axis(2), None, |acc, &x| acc + x);
    assert_eq!(s2.shape(), &[3, 1]);
    assert_eq!(s2.to_vec(), [3, 7, 11]);

    // an axis past the rank folds along the last axis
    let s9 = a.reduce_axis(Axis(9), None, |acc, &x| acc + x);
    assert_eq!(s9, s2);
}

#[test]
fn reduce_axis_with_initial_value() {
    let a = arange(&[2, 3]);
    let maxed = a.reduce_axis(Axis(1), Some(100), |acc, &x| acc.max(x));
    assert_eq!(maxed.to_vec(), [100, 100]);
    let summed = a.reduce_axis(Axis(0), Some(10), |acc, &x| acc + x);
    assert_eq!(summed.to_vec(), [15, 17, 19]);
}

#[test]
fn reduce_axis_of_1d_has_shape_one() {
    let a = arange(&[4]);
    let s = a.reduce_axis(Axis(0), None, |acc, &x| acc + x);
    assert_eq!(s.shape(), &[1]);
    assert_eq!(s.to_vec(), [10]);
}

#[test]
fn reduce_axis_on_a_view() {
    let a = arange(&[3, 4]);
    let v = a.slice(&ndgrid::iv![0..=2, 1..=2]);
    let s = v.reduce_axis(Axis(1), None, |acc, &x| acc + x);
    assert_eq!(s.shape(), &[3]);
    assert_eq!(s.to_vec(), [5, 13, 21]);
}

#[test]
fn arithmetic_between_arrays() {
    let a = arange(&[2, 2]);
    let b = arange(&[2, 2]);
    assert_eq!((&a + &b).to_vec(), [2, 4, 6, 8]);
    assert_eq!((&a - &b).sum(), 0);
    assert_eq!((&a * &b).to_vec(), [1, 4, 9, 16]);
    assert_eq!((&b / &a).to_vec(), [1, 1, 1, 1]);
    assert_eq!((&b % &a).to_vec(), [0, 0, 0, 0]);
    // by-value forms consume their operands
    assert_eq!((a + b).to_vec(), [2, 4, 6, 8]);
}

#[test]
fn arithmetic_with_scalars() {
    let a = arange(&[2, 2]);
    assert_eq!((&a + 10).to_vec(), [11, 12, 13, 14]);
    assert_eq!((&a * 2).to_vec(), [2, 4, 6, 8]);
    assert_eq!((10 - &a).to_vec(), [9, 8, 7, 6]);
    assert_eq!((12 / &a).to_vec(), [12, 6, 4, 3]);
}

#[test]
fn compound_assignment() {
    let mut a = arange(&[2, 2]);
    a += 10;
    assert_eq!(a.to_vec(), [11, 12, 13, 14]);
    let b = arange(&[2, 2]);
    a -= &b;
    assert_eq!(a.to_vec(), [10; 4]);
    a *= 3;
    assert_eq!(a.to_vec(), [30; 4]);
    a /= &b;
    assert_eq!(a.to_vec(), [30, 15, 10, 7]);
}

#[test]
fn compound_assignment_rebinds_rather_than_writing_through() {
    let a = arange(&[4]);
    let mut v = a.slice(&ndgrid::iv![1..=2]);
    v += 100;
    // `v = v + 100` allocates; the parent stays untouched
    assert_eq!(v.to_vec(), [102, 103]);
    assert_eq!(a.to_vec(), [1, 2, 3, 4]);
}

#[test]
fn unary_operators() {
    let a = Array::from_vec(&[3], vec![1i32, -2, 3]).unwrap();
    assert_eq!((-&a).to_vec(), [-1, 2, -3]);
    let m = Array::from_vec(&[2], vec![true, false]).unwrap();
    assert_eq!((!&m).to_vec(), [false, true]);
}

#[test]
fn bitwise_operators() {
    let a = Array::from_vec(&[3], vec![0b110u8, 0b011, 0b101]).unwrap();
    let b = Array::from_vec(&[3], vec![0b010u8, 0b010, 0b010]).unwrap();
    assert_eq!((&a & &b).to_vec(), [0b010, 0b010, 0b000]);
    assert_eq!((&a | &b).to_vec(), [0b110, 0b011, 0b111]);
    assert_eq!((&a ^ &b).to_vec(), [0b100, 0b001, 0b111]);
    assert_eq!((&a << 1u8).to_vec(), [0b1100, 0b0110, 0b1010]);
    assert_eq!((&a >> 1u8).to_vec(), [0b011, 0b001, 0b010]);
    let masks = Array::from_vec(&[2], vec![true, false]).unwrap();
    assert_eq!((true & &masks).to_vec(), [true, false]);
}

#[test]
#[should_panic(expected = "IncompatibleShape")]
fn operator_shape_mismatch_panics() {
    let a = arange(&[2, 2]);
    let b = arange(&[4]);
    let _ = &a + &b;
}

#[test]
fn comparison_methods() {
    let a = Array::from_vec(&[4], vec![1, 5, 3, 3]).unwrap();
    let b = Array::from_vec(&[4], vec![4, 2, 3, 1]).unwrap();
    assert_eq!(a.elem_lt(&b).unwrap().to_vec(), [true, false, false, false]);
    assert_eq!(a.elem_le(&b).unwrap().to_vec(), [true, false, true, false]);
    assert_eq!(a.elem_gt(&b).unwrap().to_vec(), [false, true, false, true]);
    assert_eq!(a.elem_ge(&b).unwrap().to_vec(), [false, true, true, true]);
    assert_eq!(a.elem_eq(&b).unwrap().to_vec(), [false, false, true, false]);
    assert_eq!(a.elem_ne(&b).unwrap().to_vec(), [true, true, false, true]);

    let c = Array::from_vec(&[2, 2], vec![1, 5, 3, 3]).unwrap();
    assert_eq!(a.elem_lt(&c).unwrap_err().kind(), ErrorKind::IncompatibleShape);
}

#[test]
fn matching_walks() {
    let a = arange(&[2, 3]);
    let b = arange(&[2, 3]);
    assert!(a.all_match(&b, |x, y| x == y));
    assert!(a.all_equal(&b));
    assert!(!a.any_match(&b, |x, y| x != y));

    let c = &b + 1;
    assert!(!a.all_equal(&c));
    assert!(a.any_match(&c, |x, y| y - x == 1));

    // shape mismatch is false, not an error
    let flat = arange(&[6]);
    assert!(!a.all_match(&flat, |x, y| x == y));
    assert!(!a.any_match(&flat, |x, y| x == y));

    // two empty arrays match vacuously
    let e1 = Array::<i32>::zeros(&[0]).unwrap();
    let e2 = Array::<i32>::zeros(&[0]).unwrap();
    assert!(e1.all_match(&e2, |x, y| x == y));
    assert!(!e1.any_match(&e2, |x, y| x == y));
    assert!(e1 == e2);
}

#[test]
fn close_and_all_close() {
    let a = Array::from_vec(&[3], vec![1.0f64, 2.0, 0.0]).unwrap();
    let b = Array::from_vec(&[3], vec![1.0 + 1e-9, 2.1, 1e-9]).unwrap();
    let c = a.close_default(&b).unwrap();
    assert_eq!(c.to_vec(), [true, false, true]);

    assert!(!a.all_close_default(&b));
    assert!(a.all_close(&b, 0.2, 0.0));

    // zero tolerances mean exact equality
    let exact = a.close(&a.clone(), 0.0, 0.0).unwrap();
    assert!(exact.all());

    // shape mismatch is an error for the elementwise form
    let flat = Array::from_vec(&[3, 1], vec![1.0f64, 2.0, 0.0]).unwrap();
    assert_eq!(
        a.close_default(&flat).unwrap_err().kind(),
        ErrorKind::IncompatibleShape
    );
    // and `false` for the predicate form
    assert!(!a.all_close_default(&flat));
}

#[test]
fn filter_and_find_compose() {
    let a = arange(&[3, 1, 2]);
    let evens = a.filter(|&x| x % 2 == 0);
    assert_eq!(evens.shape(), &[3]);
    assert_eq!(evens.to_vec(), [2, 4, 6]);

    let where_even = a.find(|&x| x % 2 == 0);
    assert_eq!(where_even.to_vec(), [1, 3, 5]);
    assert_eq!(a.take_flat(&where_even).unwrap(), evens);

    let none = a.filter(|&x| x > 100);
    assert!(none.is_empty());
}

#[test]
fn sums_and_products() {
    let a = arange(&[2, 3]);
    assert_eq!(a.sum(), 21);
    assert_eq!(a.product(), 720);
    let empty = Array::<i32>::zeros(&[0]).unwrap();
    assert_eq!(empty.sum(), 0);
    assert_eq!(empty.product(), 1);
}

#[test]
fn fold_in_walk_order() {
    let a = arange(&[2, 2]);
    let collected = a.fold(Vec::new(), |mut acc, &x| {
        acc.push(x);
        acc
    });
    assert_eq!(collected, [1, 2, 3, 4]);
}
