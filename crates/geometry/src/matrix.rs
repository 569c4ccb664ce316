use std::ops::Mul;

use super::vector::Vec3;

/// A dense `R x C` matrix stored row-major.
///
/// Vectors are treated as rows, so a transform is applied as `v * M` and a
/// stack of vectors is transformed in one product by placing them as rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix<const R: usize, const C: usize> {
    pub rows: [[f64; C]; R],
}

/// Elementary 3D rotation in row-vector convention.
pub type RotationMatrix = Matrix<3, 3>;

impl<const R: usize, const C: usize> Matrix<R, C> {
    pub fn zeros() -> Self {
        Self {
            rows: [[0.0; C]; R],
        }
    }

    pub fn from_rows(rows: [[f64; C]; R]) -> Self {
        Self { rows }
    }

    pub fn row(&self, index: usize) -> [f64; C] {
        self.rows[index]
    }

    /// Matrix product `self * other`.
    ///
    /// Entries of `self` that are exactly zero contribute nothing and are
    /// skipped; rotation matrices are mostly zeros.
    pub fn multiply<const K: usize>(&self, other: &Matrix<C, K>) -> Matrix<R, K> {
        let mut result = Matrix::<R, K>::zeros();
        for i in 0..R {
            for k in 0..C {
                let left = self.rows[i][k];
                if left == 0.0 {
                    continue;
                }
                for j in 0..K {
                    result.rows[i][j] += left * other.rows[k][j];
                }
            }
        }
        result
    }
}

impl<const N: usize> Matrix<N, N> {
    pub fn identity() -> Self {
        let mut m = Self::zeros();
        for i in 0..N {
            m.rows[i][i] = 1.0;
        }
        m
    }
}

impl<const R: usize> Matrix<R, 3> {
    pub fn row_vec3(&self, index: usize) -> Vec3 {
        Vec3::from_array(self.row(index))
    }
}

impl RotationMatrix {
    /// Rotation around the X axis by `angle` radians.
    pub fn rotation_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        #[rustfmt::skip]
        let rows = [
            [1.0, 0.0, 0.0],
            [0.0, c,   s  ],
            [0.0, -s,  c  ],
        ];
        Self { rows }
    }

    /// Rotation around the Y axis by `angle` radians.
    pub fn rotation_y(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        #[rustfmt::skip]
        let rows = [
            [c,   0.0, -s ],
            [0.0, 1.0, 0.0],
            [s,   0.0, c  ],
        ];
        Self { rows }
    }
}

impl<const R: usize, const C: usize, const K: usize> Mul<Matrix<C, K>> for Matrix<R, C> {
    type Output = Matrix<R, K>;
    fn mul(self, rhs: Matrix<C, K>) -> Self::Output {
        self.multiply(&rhs)
    }
}
