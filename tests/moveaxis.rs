use ndaxes::prelude::*;
use ndaxes::{plan_moveaxis, AxesPlan, ErrorKind};

fn sample() -> ArcArray<i64> {
    ArcArray::from_shape_fn((3, 4, 5), |ix| (ix[0] * 100 + ix[1] * 10 + ix[2]) as i64)
}

#[test]
fn move_shapes() {
    let x = sample();
    assert_eq!(moveaxis(&x, 0, -1).unwrap().shape(), &[4, 5, 3]);
    assert_eq!(moveaxis(&x, -1, 0).unwrap().shape(), &[5, 3, 4]);
    assert_eq!(moveaxis(&x, [0, 1], [-1, -2]).unwrap().shape(), &[5, 4, 3]);
    assert_eq!(moveaxis(&x, [0, 1, 2], [-1, -2, -3]).unwrap().shape(), &[5, 4, 3]);
    assert_eq!(moveaxis(&x, vec![2usize], vec![1usize]).unwrap().shape(), &[3, 5, 4]);
    assert_eq!(moveaxis(&x, &[1isize][..], &[0isize][..]).unwrap().shape(), &[4, 3, 5]);
}

#[test]
fn move_matches_transpose() {
    let x = sample();
    let t = transpose(&x).unwrap();
    let m = moveaxis(&x, [0, 1], [-1, -2]).unwrap();
    assert_eq!(m, t);
    assert_eq!(m.strides(), t.strides());
    assert_eq!(m, x.view().reversed_axes());
}

#[test]
fn move_is_a_view() {
    let x = sample();
    let y = moveaxis(&x, 0, -1).unwrap();
    assert!(y.shares_storage(&x));
    assert_eq!(y.strides(), &[5, 1, 20]);
    assert_eq!(y.get(&[3, 4, 2]), Some(&234));
}

#[test]
fn move_in_place() {
    let x = sample();
    let y = moveaxis(&x, [0, 1, 2], [0, 1, 2]).unwrap();
    assert_eq!(y.shape(), x.shape());
    assert_eq!(y.strides(), x.strides());
    assert_eq!(plan_moveaxis(3, &1, &1).unwrap(), AxesPlan::Permutation(vec![0, 1, 2]));
}

#[test]
fn move_method_matches_function() {
    let x = sample();
    assert_eq!(x.move_axes(0, -1).unwrap(), moveaxis(&x, 0, -1).unwrap());
}

#[test]
fn move_length_mismatch() {
    let x = sample();
    let err = moveaxis(&x, [0, 1], [0]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(
        err.to_string(),
        "`source` and `destination` arguments must have the same number of elements"
    );
}

#[test]
fn move_bad_axes() {
    let x = sample();
    let err = moveaxis(&x, 3, 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AxisOutOfRange);
    assert_eq!(err.to_string(), "source: axis 3 is out of bounds for array of dimension 3");

    let err = moveaxis(&x, 0, -4).unwrap_err();
    assert_eq!(err.to_string(), "destination: axis -4 is out of bounds for array of dimension 3");

    let err = moveaxis(&x, [0, -3], [1, 2]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RepeatedAxis);
    assert_eq!(err.to_string(), "repeated axis in `source` argument");
}

#[test]
fn move_plain_vectors() {
    let y = moveaxis(vec![1.5f32, 2.5], 0, 0).unwrap();
    assert_eq!(y.shape(), &[2]);
    assert_eq!(y.to_vec(), vec![1.5, 2.5]);
    let z = moveaxis(vec![vec![1u8, 2]], 1, 0).unwrap();
    assert_eq!(z.shape(), &[2, 1]);
}
