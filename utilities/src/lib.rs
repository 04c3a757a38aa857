use nalgebra::{Matrix3, Vector3};

/// Default relative tolerance used by the plain assert helpers.
pub const DEFAULT_RELTOL: f64 = 1e-9;

pub fn assert_equal(left: f64, right: f64) {
    assert_equal_reltol(left, right, DEFAULT_RELTOL);
}

pub fn assert_equal_reltol(left: f64, right: f64, reltol: f64) {
    let scale = left.abs().max(right.abs());
    if scale < f64::EPSILON {
        // both values are effectively zero
        return;
    }
    let rel_diff = (left - right).abs() / scale;
    assert!(
        rel_diff < reltol,
        "Assertion failed: left ({}) and right ({}) are not approximately equal. Relative difference: {}",
        left,
        right,
        rel_diff
    );
}

/// Component comparison scaled by the larger vector norm, so a zero
/// component of an otherwise large vector compares cleanly.
pub fn assert_vector_equal(left: &Vector3<f64>, right: &Vector3<f64>) {
    assert_vector_equal_reltol(left, right, DEFAULT_RELTOL);
}

pub fn assert_vector_equal_reltol(left: &Vector3<f64>, right: &Vector3<f64>, reltol: f64) {
    let scale = left.norm().max(right.norm());
    if scale < f64::EPSILON {
        return;
    }
    for i in 0..3 {
        let rel_diff = (left[i] - right[i]).abs() / scale;
        assert!(
            rel_diff < reltol,
            "Assertion failed: component {} of left ({}) and right ({}) are not approximately equal. Relative difference: {}",
            i,
            left[i],
            right[i],
            rel_diff
        );
    }
}

/// Entry comparison scaled by the larger Frobenius norm.
pub fn assert_matrix_equal(left: &Matrix3<f64>, right: &Matrix3<f64>) {
    assert_matrix_equal_reltol(left, right, DEFAULT_RELTOL);
}

pub fn assert_matrix_equal_reltol(left: &Matrix3<f64>, right: &Matrix3<f64>, reltol: f64) {
    let scale = left.norm().max(right.norm());
    if scale < f64::EPSILON {
        return;
    }
    for i in 0..3 {
        for j in 0..3 {
            let rel_diff = (left[(i, j)] - right[(i, j)]).abs() / scale;
            assert!(
                rel_diff < reltol,
                "Assertion failed: entry ({},{}) of left ({}) and right ({}) are not approximately equal. Relative difference: {}",
                i,
                j,
                left[(i, j)],
                right[(i, j)],
                rel_diff
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Matrix3, Vector3};

    #[test]
    fn test_scalar_within_tolerance() {
        assert_equal(1.0000000001, 1.0);
        assert_equal(0.0, 0.0);
        assert_equal(0.0, -0.0);
        assert_equal_reltol(1.0, 1.0001, 1e-3);
    }

    #[test]
    #[should_panic]
    fn test_scalar_detects_difference() {
        assert_equal(1.0, 1.001);
    }

    #[test]
    fn test_vector_zero_component_of_large_vector() {
        let left = Vector3::new(1.0e6, 0.0, 0.0);
        let right = Vector3::new(1.0e6, 1.0e-6, 0.0);
        assert_vector_equal(&left, &right);
    }

    #[test]
    #[should_panic]
    fn test_vector_detects_difference() {
        let left = Vector3::new(1.0, 2.0, 3.0);
        let right = Vector3::new(1.0, 2.0, 3.1);
        assert_vector_equal(&left, &right);
    }

    #[test]
    fn test_matrix_within_tolerance() {
        let left = Matrix3::identity() * 3.0;
        let right = Matrix3::identity() * (3.0 + 1e-12);
        assert_matrix_equal(&left, &right);
    }

    #[test]
    #[should_panic]
    fn test_matrix_detects_difference() {
        let left = Matrix3::identity();
        let right = Matrix3::identity() * 1.01;
        assert_matrix_equal(&left, &right);
    }
}
