use ndbuffer::prelude::*;

#[test]
fn resize_pads_with_zero() {
    let mut a = NdArray::<f64>::from_nested(vec![1, 2, 3, 4]).unwrap();
    a.resize(&[6], None).unwrap();
    assert_eq!(a.shape(), &[6]);
    assert_eq!(a.as_slice(), &[1., 2., 3., 4., 0., 0.]);
}

#[test]
fn resize_keeps_flat_prefix() {
    let mut a = NdArray::<u8>::from_nested(vec![[1, 2], [3, 4]]).unwrap();
    a.resize(&[3, 3], Some(9.)).unwrap();
    assert_eq!(a.as_slice(), &[1, 2, 3, 4, 9, 9, 9, 9, 9]);
    assert_eq!(a.get(&[1]).unwrap().view().unwrap().as_slice(), &[4, 9, 9]);

    a.resize(&[1, 3], None).unwrap();
    assert_eq!(a.as_slice(), &[1, 2, 3]);
}

#[test]
fn resize_to_empty_and_back() {
    let mut a = NdArray::<u16>::from_nested(vec![1, 2]).unwrap();
    a.resize(&[0], None).unwrap();
    assert!(a.is_empty());
    a.resize(&[2, 1], Some(70000.)).unwrap();
    assert_eq!(a.as_slice(), &[4464, 4464]);
    assert!(a.resize(&[], None).is_err());
    assert_eq!(a.shape(), &[2, 1]);
}

#[test]
fn reshape_round_trip() {
    let a = NdArray::<f32>::from_shape_vec(&[2, 3, 4], (0..24).map(|x| x as f32).collect()).unwrap();
    let b = a.to_shape(&[6, 4]).unwrap();
    assert_eq!(b.shape(), &[6, 4]);
    assert_eq!(b.as_slice(), a.as_slice());
    assert_eq!(b.into_shape(&[2, 3, 4]).unwrap(), a);
}

#[test]
fn reshape_requires_same_size() {
    let mut a = NdArray::<u8>::zeros(&[2, 3]).unwrap();
    let err = a.reshape(&[4, 2]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DimensionMismatch);
    assert_eq!(err.to_string(), "Dimension mismatch (8 != 6)");
    assert_eq!(a.shape(), &[2, 3]);
}

#[test]
fn squeeze_drops_unit_axes() {
    let a = NdArray::<u8>::zeros(&[1, 3, 1, 2]).unwrap();
    assert_eq!(a.squeeze().shape(), &[3, 2]);
    let b = NdArray::<u8>::zeros(&[1, 1]).unwrap();
    assert_eq!(b.squeeze().shape(), &[1]);
}
