// src/numerics/types/matrix.rs
// Row-major matrix built from `R` row vectors of dimension `C`.

use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, Neg, Sub, SubAssign};

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::{NumericsError, Result};
use super::traits::Scalar;
use super::vector::Vector;

/// Matrix with `R` rows and `C` columns.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Matrix<T: Scalar = f32, const R: usize = 3, const C: usize = 3> {
    rows: [Vector<T, C>; R],
}

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    pub const fn new(rows: [Vector<T, C>; R]) -> Self {
        Self { rows }
    }

    pub fn zeroed() -> Self {
        Self::splat(T::ZERO)
    }

    /// Matrix with every element set to `value`.
    pub fn splat(value: T) -> Self {
        Self {
            rows: [Vector::splat(value); R],
        }
    }

    /// Construct a matrix from row arrays.
    pub fn from_rows(rows: [[T; C]; R]) -> Self {
        Self {
            rows: rows.map(Vector::new),
        }
    }

    /// Construct a matrix from column arrays.
    pub fn from_columns(columns: [[T; R]; C]) -> Self {
        Self {
            rows: core::array::from_fn(|i| Vector::new(core::array::from_fn(|j| columns[j][i]))),
        }
    }

    /// Returns (rows, cols).
    pub const fn shape(&self) -> (usize, usize) {
        (R, C)
    }

    pub fn row(&self, index: usize) -> &Vector<T, C> {
        &self.rows[index]
    }

    pub fn row_mut(&mut self, index: usize) -> &mut Vector<T, C> {
        &mut self.rows[index]
    }

    /// Checked row access.
    ///
    /// # Errors
    /// `NumericsError::IndexOutOfRange` when `index >= R`.
    pub fn try_row(&self, index: usize) -> Result<&Vector<T, C>> {
        self.rows
            .get(index)
            .ok_or(NumericsError::IndexOutOfRange { index, len: R })
    }

    pub fn column(&self, index: usize) -> Vector<T, R> {
        Vector::new(core::array::from_fn(|i| self.rows[i][index]))
    }

    /// Checked element access.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &Vector<T, C>> {
        self.rows.iter()
    }

    pub fn transpose(&self) -> Matrix<T, C, R> {
        Matrix {
            rows: core::array::from_fn(|j| self.column(j)),
        }
    }

    /// `result[i][j] = lhs[i] * rhs[j]`.
    pub fn outer_product(lhs: &Vector<T, R>, rhs: &Vector<T, C>) -> Self {
        Self {
            rows: core::array::from_fn(|i| Vector::new(core::array::from_fn(|j| lhs[i] * rhs[j]))),
        }
    }

    /// Elementwise product.
    pub fn hadamard_product(lhs: &Self, rhs: &Self) -> Self {
        Self {
            rows: core::array::from_fn(|i| Vector::hadamard_product(&lhs.rows[i], &rhs.rows[i])),
        }
    }

    fn map(&self, f: impl Fn(T) -> T) -> Self {
        Self {
            rows: self
                .rows
                .map(|row| Vector::new(core::array::from_fn(|j| f(row[j])))),
        }
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    pub fn identity() -> Self {
        let mut m = Self::zeroed();
        for i in 0..N {
            m.rows[i][i] = T::ONE;
        }
        m
    }

    /// Swap two rows in place.
    pub fn swap_rows(&mut self, r1: usize, r2: usize) {
        self.rows.swap(r1, r2);
    }
}

impl<T: Scalar, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl<T: Scalar, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", row)?;
        }
        Ok(())
    }
}

impl<T: Scalar, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.rows[row][col]
    }
}

impl<T: Scalar, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.rows[row][col]
    }
}

impl<T: Scalar, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T, R, C> {
    fn from(rows: [[T; C]; R]) -> Self {
        Self::from_rows(rows)
    }
}

impl<T: Scalar, const R: usize, const C: usize> Add for Matrix<T, R, C> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            rows: core::array::from_fn(|i| self.rows[i] + other.rows[i]),
        }
    }
}

impl<T: Scalar, const R: usize, const C: usize> Sub for Matrix<T, R, C> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            rows: core::array::from_fn(|i| self.rows[i] - other.rows[i]),
        }
    }
}

impl<T: Scalar, const R: usize, const C: usize> AddAssign for Matrix<T, R, C> {
    fn add_assign(&mut self, other: Self) {
        for (a, b) in self.rows.iter_mut().zip(other.rows) {
            *a += b;
        }
    }
}

impl<T: Scalar, const R: usize, const C: usize> SubAssign for Matrix<T, R, C> {
    fn sub_assign(&mut self, other: Self) {
        for (a, b) in self.rows.iter_mut().zip(other.rows) {
            *a -= b;
        }
    }
}

impl<T, const R: usize, const C: usize> Neg for Matrix<T, R, C>
where
    T: Scalar + Neg<Output = T>,
{
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|e| -e)
    }
}

impl<T: Scalar, const R: usize, const K: usize, const C: usize> Mul<Matrix<T, K, C>>
    for Matrix<T, R, K>
{
    type Output = Matrix<T, R, C>;

    fn mul(self, rhs: Matrix<T, K, C>) -> Matrix<T, R, C> {
        Matrix {
            rows: core::array::from_fn(|i| {
                Vector::new(core::array::from_fn(|j| {
                    (0..K).fold(T::ZERO, |acc, k| acc + self.rows[i][k] * rhs.rows[k][j])
                }))
            }),
        }
    }
}

impl<T: Scalar, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C> {
    type Output = Vector<T, R>;

    fn mul(self, rhs: Vector<T, C>) -> Vector<T, R> {
        Vector::new(core::array::from_fn(|i| {
            (0..C).fold(T::ZERO, |acc, j| acc + self.rows[i][j] * rhs[j])
        }))
    }
}

// Scalar multiplication and division act on every element and are generated
// per primitive, like the vector scalar operators.
macro_rules! impl_matrix_scalar_ops {
    ($($t:ty),* $(,)?) => {
        $(
            impl<const R: usize, const C: usize> Mul<$t> for Matrix<$t, R, C> {
                type Output = Self;

                fn mul(self, scalar: $t) -> Self {
                    self.map(|e| e * scalar)
                }
            }

            impl<const R: usize, const C: usize> Mul<Matrix<$t, R, C>> for $t {
                type Output = Matrix<$t, R, C>;

                fn mul(self, m: Matrix<$t, R, C>) -> Matrix<$t, R, C> {
                    m * self
                }
            }

            impl<const R: usize, const C: usize> Div<$t> for Matrix<$t, R, C> {
                type Output = Self;

                fn div(self, scalar: $t) -> Self {
                    self.map(|e| e / scalar)
                }
            }
        )*
    };
}

impl_matrix_scalar_ops!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

// Matrices serialize as a tuple of row tuples.
impl<T, const R: usize, const C: usize> Serialize for Matrix<T, R, C>
where
    T: Scalar + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(R)?;
        for row in &self.rows {
            tuple.serialize_element(row)?;
        }
        tuple.end()
    }
}

impl<'de, T, const R: usize, const C: usize> Deserialize<'de> for Matrix<T, R, C>
where
    T: Scalar + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_tuple(R, MatrixVisitor::<T, R, C>(PhantomData))
    }
}

struct MatrixVisitor<T, const R: usize, const C: usize>(PhantomData<T>);

impl<'de, T, const R: usize, const C: usize> Visitor<'de> for MatrixVisitor<T, R, C>
where
    T: Scalar + Deserialize<'de>,
{
    type Value = Matrix<T, R, C>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a tuple of {} rows with {} elements each", R, C)
    }

    fn visit_seq<A>(self, mut seq: A) -> core::result::Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut rows = [Vector::<T, C>::zeroed(); R];
        for (i, slot) in rows.iter_mut().enumerate() {
            *slot = seq
                .next_element()?
                .ok_or_else(|| <A::Error as de::Error>::invalid_length(i, &self))?;
        }
        Ok(Matrix { rows })
    }
}
