use ndbuffer::prelude::*;
use ndbuffer::DiagSource;

use quickcheck::{quickcheck, TestResult};

/// Map arbitrary input to a small non-empty shape.
fn small_shape(dims: &[u8]) -> Vec<usize> {
    let mut shape: Vec<usize> = dims.iter().take(4).map(|&d| d as usize % 4 + 1).collect();
    if shape.is_empty() {
        shape.push(1);
    }
    shape
}

fn filled(shape: &[usize]) -> NdArray<f64> {
    let n = shape.iter().product::<usize>();
    NdArray::from_shape_vec(shape, (0..n).map(|x| x as f64 * 0.5).collect()).unwrap()
}

quickcheck! {
    fn set_then_get_scalar(dims: Vec<u8>, seed: usize, value: u16) -> bool {
        let shape = small_shape(&dims);
        let mut a = NdArray::<u16>::zeros(&shape).unwrap();
        let index: Vec<usize> = shape.iter().map(|&d| seed % d).collect();
        a.set(&index, value).unwrap();
        a.get(&index).unwrap().scalar() == Some(value)
    }

    fn reshape_to_flat_and_back(dims: Vec<u8>) -> bool {
        let shape = small_shape(&dims);
        let a = filled(&shape);
        let flat = a.to_shape(&[a.len()]).unwrap();
        flat.as_slice() == a.as_slice() && flat.into_shape(&shape).unwrap() == a
    }

    fn swap_rows_is_involution(rows: u8, cols: u8, i: usize, j: usize) -> TestResult {
        let (rows, cols) = (rows as usize % 6, cols as usize % 6);
        if rows == 0 {
            return TestResult::discard();
        }
        let a = filled(&[rows, cols]);
        let mut b = a.clone();
        b.swap_rows(i % rows, j % rows).unwrap();
        b.swap_rows(i % rows, j % rows).unwrap();
        TestResult::from_bool(a == b)
    }

    fn record_round_trip(dims: Vec<u8>, values: Vec<u32>) -> bool {
        let shape = small_shape(&dims);
        let n = shape.iter().product::<usize>();
        let data = values.into_iter().cycle().take(n).collect::<Vec<_>>();
        if data.len() != n {
            return true;
        }
        let a = NdArray::from_shape_vec(&shape, data).unwrap();
        NdArray::<u32>::from_record(&a.to_record()).unwrap() == a
    }

    fn clone_is_independent(dims: Vec<u8>, value: f64) -> TestResult {
        if value.is_nan() || value == 0. {
            return TestResult::discard();
        }
        let shape = small_shape(&dims);
        let a = filled(&shape);
        let mut b = a.clone();
        b.fill(value);
        b.resize(&[a.len() + 1], None).unwrap();
        TestResult::from_bool(a == filled(&shape))
    }

    fn subset_of_everything_is_identity(dims: Vec<u8>) -> bool {
        let shape = small_shape(&dims);
        let a = filled(&shape);
        let index = IndexSet::new(shape.iter().map(|&d| AxisSelect::from(0..d)).collect());
        a.subset(&index).unwrap().into_array() == Some(a)
    }

    fn diagonal_matrix_rebuilds(values: Vec<u32>) -> bool {
        let n = values.len() % 8;
        if n == 0 {
            return true;
        }
        let mut a = NdArray::<u32>::zeros(&[n, n]).unwrap();
        for (i, &x) in values.iter().take(n).enumerate() {
            a.set(&[i, i], x).unwrap();
        }
        let d = a.diagonal(0).unwrap();
        NdArray::from_diag(&[n, n], DiagSource::Array(d), 0, None).unwrap() == a
    }
}
