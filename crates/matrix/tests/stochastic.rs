//! Integration tests for column normalization and the stochasticity check.

use aeolus_matrix::{Matrix, STOCHASTIC_TOLERANCE};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_nonnegative(rows: usize, columns: usize, seed: u64) -> Matrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut m = Matrix::new(rows, columns);
    for row in 1..=rows {
        for column in 1..=columns {
            m.set(row, column, rng.random_range(0.0..50.0));
        }
    }
    m
}

#[test]
fn test_normalized_random_matrix_is_stochastic() {
    let mut m = random_nonnegative(12, 12, 42);
    m.normalize_columns();
    assert!(m.is_column_stochastic(STOCHASTIC_TOLERANCE));
    for column in 1..=12 {
        assert!((m.column_sum(column) - 1.0).abs() < 1e-12);
    }
}

#[test]
fn test_zeroed_columns_fall_back_to_uniform() {
    let mut m = random_nonnegative(8, 5, 7);
    for row in 1..=8 {
        m.set(row, 2, 0.0);
        m.set(row, 5, 0.0);
    }
    m.normalize_columns();
    assert!(m.is_column_stochastic(STOCHASTIC_TOLERANCE));
    for row in 1..=8 {
        assert_eq!(m.get(row, 2), 0.125);
        assert_eq!(m.get(row, 5), 0.125);
    }
}

#[test]
fn test_product_of_stochastic_matrices_is_stochastic() {
    let mut a = random_nonnegative(9, 9, 1);
    let mut b = random_nonnegative(9, 9, 2);
    a.normalize_columns();
    b.normalize_columns();
    let product = a.multiply(&b).unwrap();
    assert!(product.is_column_stochastic(STOCHASTIC_TOLERANCE));
}

#[test]
fn test_one_hot_product_selects_a_distribution() {
    let mut m = random_nonnegative(6, 6, 3);
    m.normalize_columns();
    let mut one_hot = Matrix::new(6, 1);
    one_hot.set(4, 1, 1.0);

    let picked = m.multiply(&one_hot).unwrap();
    assert_eq!(picked.rows(), 6);
    assert_eq!(picked.columns(), 1);
    for row in 1..=6 {
        assert_eq!(picked.get(row, 1), m.get(row, 4));
    }
    assert!((picked.column_sum(1) - 1.0).abs() < 1e-12);
}
