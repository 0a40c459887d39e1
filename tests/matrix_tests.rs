use corrgrid::{CorrelationMatrix, RowType};

fn titles(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("Row {i}")).collect()
}

fn row_types(n: usize) -> Vec<RowType> {
    vec![RowType::Numeric; n]
}

fn square(n: usize, value: f64) -> Vec<Vec<f64>> {
    vec![vec![value; n]; n]
}

#[test]
fn construction_requires_matching_lengths() {
    let n = 4;
    assert!(CorrelationMatrix::new(row_types(n), titles(n), square(n, 0.5), square(n, 0.25)).is_ok());

    assert!(CorrelationMatrix::new(row_types(3), titles(n), square(n, 0.5), square(n, 0.25)).is_err());
    assert!(CorrelationMatrix::new(row_types(n), titles(3), square(n, 0.5), square(n, 0.25)).is_err());
    assert!(CorrelationMatrix::new(row_types(n), titles(n), square(3, 0.5), square(n, 0.25)).is_err());
    assert!(CorrelationMatrix::new(row_types(n), titles(n), square(n, 0.5), square(3, 0.25)).is_err());
}

#[test]
fn construction_rejects_empty_matrix() {
    assert!(CorrelationMatrix::new(vec![], vec![], vec![], vec![]).is_err());
}

#[test]
fn length_matches_input() {
    let n = 6;
    let matrix =
        CorrelationMatrix::new(row_types(n), titles(n), square(n, 0.5), square(n, 0.25)).unwrap();
    assert_eq!(matrix.len(), n);
    assert_eq!(matrix.titles().len(), n);
    assert_eq!(matrix.row_types().len(), n);
}

#[test]
fn signed_value_follows_correlation_sign() {
    let mut correlations = square(3, 0.0);
    let mut squared = square(3, 0.0);
    correlations[0][1] = 0.5;
    squared[0][1] = 0.25;
    correlations[0][2] = -0.3;
    squared[0][2] = 0.09;
    let matrix = CorrelationMatrix::new(row_types(3), titles(3), correlations, squared).unwrap();

    assert_eq!(matrix.signed_value(0, 1), 0.25);
    assert_eq!(matrix.signed_value(0, 2), -0.09);
    // Zero correlation keeps the positive branch.
    assert_eq!(matrix.signed_value(1, 2), 0.0);
}

#[test]
fn nan_short_circuits_the_sign_branch() {
    let mut correlations = square(3, 0.5);
    let mut squared = square(3, 0.25);
    correlations[0][1] = f64::NAN;
    squared[1][2] = f64::NAN;
    let matrix = CorrelationMatrix::new(row_types(3), titles(3), correlations, squared).unwrap();

    assert!(matrix.signed_value(0, 1).is_nan());
    assert!(matrix.signed_value(1, 2).is_nan());
    assert!(!matrix.signed_value(0, 2).is_nan());
}

#[test]
fn short_rows_read_as_missing_values() {
    let mut correlations = square(4, 0.5);
    let mut squared = square(4, 0.25);
    correlations[1].truncate(2);
    squared[1].truncate(2);
    let matrix = CorrelationMatrix::new(row_types(4), titles(4), correlations, squared).unwrap();

    assert!(matrix.correlation(1, 3).is_nan());
    assert!(matrix.signed_value(1, 3).is_nan());
    assert_eq!(matrix.signed_value(1, 1), 0.25);
}
