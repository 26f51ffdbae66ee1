use ndaxes::prelude::*;
use ndaxes::{ErrorKind, Ix};

#[test]
fn swapaxes_exchanges_two_axes() {
    let a = ArcArray::from_shape_fn((2, 3, 4), |ix| ix[0] * 100 + ix[1] * 10 + ix[2]);
    let s = swapaxes(&a, 0, 2).unwrap();
    assert_eq!(s.shape(), &[4, 3, 2]);
    assert_eq!(s.strides(), &[1, 4, 12]);
    assert!(s.shares_storage(&a));
    assert_eq!(s.get(&[3, 1, 0]), Some(&13));

    let mut m = a.view();
    m.swap_axes(0, 2);
    assert_eq!(m, s);
    assert_eq!(swapaxes(&a, 1, -3).unwrap().shape(), &[3, 2, 4]);
    assert_eq!(swapaxes(&a, 3, 0).unwrap_err().kind(), ErrorKind::AxisOutOfRange);
}

#[test]
fn views_outlive_source() {
    let view = {
        let a = ArcArray::from_shape_vec((2, 2), vec![1, 2, 3, 4]).unwrap();
        transpose(&a).unwrap()
    };
    assert!(view.is_unique());
    assert_eq!(view.to_vec(), vec![1, 3, 2, 4]);
}

#[test]
fn writes_do_not_leak_into_aliases() {
    let a = ArcArray::from_shape_vec((2, 3), (0..6).collect::<Vec<i32>>()).unwrap();
    let mut t = transpose(&a).unwrap();
    assert!(!t.is_unique());

    *t.get_mut(&[2, 1]).unwrap() = 50;
    assert!(t.is_unique());
    assert!(!t.shares_storage(&a));
    assert_eq!(t.get(&[2, 1]), Some(&50));
    assert_eq!(a.get(&[1, 2]), Some(&5));
    assert_eq!(t.get_mut(&[3, 0]), None);
}

#[test]
fn metadata_is_per_handle() {
    let a = ArcArray::<u8>::zeros((2, 3, 4));
    let mut b = a.view();
    b.swap_axes(0, 1);
    assert_eq!(a.shape(), &[2, 3, 4]);
    assert_eq!(b.shape(), &[3, 2, 4]);
}

#[test]
#[should_panic]
fn permuted_axes_rejects_non_permutation() {
    let a = ArcArray::<u8>::zeros((2, 3, 4));
    let _ = a.permuted_axes(&[0, 0, 1]);
}

/// A shape-only stand-in, showing that the axis functions accept any type
/// that can permute its axes.
#[derive(Clone, Debug, PartialEq)]
struct Shape(Vec<Ix>);

impl Permute for Shape {
    type Output = Shape;

    fn ndim(&self) -> usize {
        self.0.len()
    }

    fn view(&self) -> Shape {
        self.clone()
    }

    fn permuted_axes(&self, axes: &[Ix]) -> Shape {
        Shape(axes.iter().map(|&ax| self.0[ax]).collect())
    }
}

#[test]
fn custom_permute_types() {
    let s = Shape(vec![3, 4, 5, 6]);
    assert_eq!(rollaxis(&s, 3, 1).unwrap(), Shape(vec![3, 6, 4, 5]));
    assert_eq!(moveaxis(&s, [0, 1], [-1, -2]).unwrap(), Shape(vec![5, 6, 4, 3]));
    assert_eq!(transpose(&s).unwrap(), Shape(vec![6, 5, 4, 3]));
    assert_eq!(swapaxes(&s, 0, 1).unwrap(), Shape(vec![4, 3, 5, 6]));
    assert_eq!(rollaxis(&s, 1, 2).unwrap(), s);
}
