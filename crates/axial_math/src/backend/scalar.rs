//! Portable scalar backend

use super::{Backend, Lanes, MatLanes};

/// Per-component arithmetic, available on every target
#[derive(Clone, Copy, Debug, Default)]
pub struct Scalar;

impl Backend for Scalar {
    const NAME: &'static str = "scalar";

    #[inline]
    fn add(a: Lanes, b: Lanes) -> Lanes {
        [a[0] + b[0], a[1] + b[1], a[2] + b[2], a[3] + b[3]]
    }

    #[inline]
    fn sub(a: Lanes, b: Lanes) -> Lanes {
        [a[0] - b[0], a[1] - b[1], a[2] - b[2], a[3] - b[3]]
    }

    #[inline]
    fn neg(a: Lanes) -> Lanes {
        [-a[0], -a[1], -a[2], -a[3]]
    }

    #[inline]
    fn scale(a: Lanes, s: f32) -> Lanes {
        [a[0] * s, a[1] * s, a[2] * s, a[3] * s]
    }

    #[inline]
    fn dot2(a: Lanes, b: Lanes) -> f32 {
        a[0] * b[0] + a[1] * b[1]
    }

    #[inline]
    fn dot3(a: Lanes, b: Lanes) -> f32 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    #[inline]
    fn dot4(a: Lanes, b: Lanes) -> f32 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3]
    }

    #[inline]
    fn cross(a: Lanes, b: Lanes) -> Lanes {
        [
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
            // w·w − w·w, matching the shuffled SSE form
            a[3] * b[3] - a[3] * b[3],
        ]
    }

    /// Column `j` of the result is `Σk a[k] · b[j][k]`, summed pairwise
    #[allow(clippy::needless_range_loop)]
    fn mat_mul(a: &MatLanes, b: &MatLanes) -> MatLanes {
        let mut result = [[0.0f32; 4]; 4];

        for j in 0..4 {
            for i in 0..4 {
                result[j][i] = (a[0][i] * b[j][0] + a[1][i] * b[j][1])
                    + (a[2][i] * b[j][2] + a[3][i] * b[j][3]);
            }
        }

        result
    }

    #[inline]
    fn mat_vec(m: &MatLanes, v: Lanes) -> Lanes {
        let row = |i: usize| (m[0][i] * v[0] + m[1][i] * v[1]) + (m[2][i] * v[2] + m[3][i] * v[3]);
        [row(0), row(1), row(2), row(3)]
    }

    fn transpose(m: &MatLanes) -> MatLanes {
        [
            [m[0][0], m[1][0], m[2][0], m[3][0]],
            [m[0][1], m[1][1], m[2][1], m[3][1]],
            [m[0][2], m[1][2], m[2][2], m[3][2]],
            [m[0][3], m[1][3], m[2][3], m[3][3]],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_ops() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let b = [5.0, 6.0, 7.0, 8.0];

        assert_eq!(Scalar::dot4(a, b), 70.0);
        assert_eq!(Scalar::dot3(a, b), 38.0);
        assert_eq!(Scalar::dot2(a, b), 17.0);
        assert_eq!(Scalar::add(a, b), [6.0, 8.0, 10.0, 12.0]);
        assert_eq!(Scalar::sub(b, a), [4.0, 4.0, 4.0, 4.0]);
        assert_eq!(Scalar::scale(a, 2.0), [2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn test_neg_flips_sign_of_zero() {
        let n = Scalar::neg([0.0, 1.0, -2.0, 0.0]);
        assert!(n[0].is_sign_negative());
        assert_eq!(n[1], -1.0);
        assert_eq!(n[2], 2.0);
    }

    #[test]
    fn test_cross_basis() {
        let x = [1.0, 0.0, 0.0, 0.0];
        let y = [0.0, 1.0, 0.0, 0.0];
        assert_eq!(Scalar::cross(x, y), [0.0, 0.0, 1.0, 0.0]);
        assert_eq!(Scalar::cross(y, x), [0.0, 0.0, -1.0, 0.0]);
    }

    #[test]
    fn test_mat_vec_columns() {
        // Column-major: lane 3 holds the translation
        let m = [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [1.0, 2.0, 3.0, 1.0],
        ];
        assert_eq!(Scalar::mat_vec(&m, [0.0, 0.0, 0.0, 1.0]), [1.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn test_quat_mul_basis() {
        // i * j = k, j * i = -k
        let i = [0.0, 1.0, 0.0, 0.0];
        let j = [0.0, 0.0, 1.0, 0.0];
        assert_eq!(Scalar::quat_mul(i, j), [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(Scalar::quat_mul(j, i), [0.0, 0.0, 0.0, -1.0]);
        // i * i = -1
        assert_eq!(Scalar::quat_mul(i, i), [-1.0, 0.0, 0.0, 0.0]);
    }
}
