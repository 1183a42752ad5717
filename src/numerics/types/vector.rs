// src/numerics/types/vector.rs
// Fixed-dimension vector generic over its element type and dimension.
// Reductions are produced in the element's compute type (see traits.rs).

use core::fmt;
use core::marker::PhantomData;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use num_traits::{AsPrimitive, Float};
use rand::distributions::uniform::SampleUniform;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::{NumericsError, Result};
use super::traits::{ComputeOf, Compute, Dimension, HasW, HasX, HasY, HasZ, Scalar};
use crate::numerics::math;

/// Vector is an ordered, fixed-length sequence of `N` scalars.
///
/// The dimension is part of the type, so a vector is never resized and lives
/// wherever its owner puts it. Copying duplicates the elements; a moved-from
/// binding is unusable, and a copied-from one is left untouched.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Vector<T: Scalar = f32, const N: usize = 3> {
    data: [T; N],
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Number of elements.
    pub const DIMENSION: usize = N;

    /// Construct a vector from an array of elements.
    pub const fn new(data: [T; N]) -> Self {
        Self { data }
    }

    /// Vector with every element zero.
    pub fn zeroed() -> Self {
        Self::splat(T::ZERO)
    }

    /// Vector with every element set to `value`.
    pub fn splat(value: T) -> Self {
        Self { data: [value; N] }
    }

    /// Build a vector from the first `N` values of a slice, converting each
    /// element with `as` semantics. Extra values are ignored.
    ///
    /// # Errors
    /// `NumericsError::InvalidArgument` when the slice holds fewer than `N`
    /// values.
    ///
    /// # Examples
    /// ```
    /// use mia::numerics::types::vector::Vector;
    ///
    /// let v = Vector::<f32, 3>::from_slice(&[1, 2, 3, 4]).unwrap();
    /// assert_eq!(v, Vector::new([1.0, 2.0, 3.0]));
    /// assert!(Vector::<f32, 3>::from_slice(&[1, 2]).is_err());
    /// ```
    pub fn from_slice<U>(values: &[U]) -> Result<Self>
    where
        U: AsPrimitive<T>,
    {
        if values.len() < N {
            tracing::debug!(expected = N, actual = values.len(), "rejected vector slice");
            return Err(NumericsError::InvalidArgument {
                expected: N,
                actual: values.len(),
            });
        }

        Ok(Self {
            data: core::array::from_fn(|i| values[i].as_()),
        })
    }

    /// Build a vector from the first `N` items of an iterator. Items beyond
    /// `N` are not consumed.
    ///
    /// # Errors
    /// `NumericsError::InvalidArgument` when the iterator ends early.
    pub fn try_from_iter<U, I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = U>,
        U: AsPrimitive<T>,
    {
        let mut data = [T::ZERO; N];
        let mut taken = 0;
        for (slot, value) in data.iter_mut().zip(values) {
            *slot = value.as_();
            taken += 1;
        }

        if taken < N {
            tracing::debug!(expected = N, actual = taken, "rejected vector iterator");
            return Err(NumericsError::InvalidArgument {
                expected: N,
                actual: taken,
            });
        }

        Ok(Self { data })
    }

    /// Build a vector from the leading elements of a vector of equal or
    /// larger dimension, converting the element type.
    ///
    /// # Errors
    /// `NumericsError::InvalidArgument` when `M < N`.
    pub fn truncate_from<U, const M: usize>(other: &Vector<U, M>) -> Result<Self>
    where
        U: Scalar + AsPrimitive<T>,
    {
        Self::from_slice(other.as_slice())
    }

    /// Elementwise conversion into another element type (`as` semantics).
    pub fn cast<U>(&self) -> Vector<U, N>
    where
        U: Scalar,
        T: AsPrimitive<U>,
    {
        Vector {
            data: self.data.map(|e| e.as_()),
        }
    }

    /// Number of elements, always `N`.
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Checked access to the element at `index`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Checked mutable access to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_array(self) -> [T; N] {
        self.data
    }

    /// Iterate over the elements in index order. Reverse with `.rev()`.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    fn map(&self, f: impl Fn(T) -> T) -> Self {
        Self {
            data: self.data.map(f),
        }
    }

    fn zip_map(lhs: &Self, rhs: &Self, f: impl Fn(T, T) -> T) -> Self {
        Self {
            data: core::array::from_fn(|i| f(lhs.data[i], rhs.data[i])),
        }
    }

    /// Sum of the pairwise products, accumulated in the compute type.
    pub fn dot_product(lhs: &Self, rhs: &Self) -> ComputeOf<T> {
        lhs.data
            .iter()
            .zip(rhs.data.iter())
            .fold(<ComputeOf<T> as Scalar>::ZERO, |acc, (&a, &b)| {
                acc + a.to_compute() * b.to_compute()
            })
    }

    /// Squared Euclidean length.
    pub fn magnitude_squared(&self) -> ComputeOf<T> {
        Self::dot_product(self, self)
    }

    /// Euclidean length.
    pub fn magnitude(&self) -> ComputeOf<T> {
        self.magnitude_squared().sqrt()
    }

    /// Copy of the vector divided by its own magnitude.
    ///
    /// A zero vector is not special-cased: floating elements become NaN and
    /// integer elements panic on the division by zero.
    pub fn normalized(&self) -> Self {
        let magnitude = self.magnitude();
        self.map(|e| T::from_compute(e.to_compute() / magnitude))
    }

    /// Divide the vector in place by its magnitude and return the magnitude
    /// it had before. The result always equals [`Vector::normalized`], so
    /// integer vectors truncate per element rather than collapsing to zero.
    ///
    /// The zero vector behaves as in [`Vector::normalized`].
    pub fn normalize(&mut self) -> ComputeOf<T> {
        let magnitude = self.magnitude();
        for e in self.data.iter_mut() {
            *e = T::from_compute(e.to_compute() / magnitude);
        }
        magnitude
    }

    /// Elementwise `(1 - alpha) * from + alpha * to`. `alpha` is not clamped.
    pub fn lerp(from: &Self, to: &Self, alpha: ComputeOf<T>) -> Self {
        let one_minus_alpha = <ComputeOf<T> as Scalar>::ONE - alpha;
        Self::zip_map(from, to, |a, b| {
            T::from_compute(one_minus_alpha * a.to_compute() + alpha * b.to_compute())
        })
    }

    /// Squared length of `rhs - lhs`.
    ///
    /// Differences are taken as absolute values, so unsigned elements never
    /// underflow.
    pub fn distance_squared(lhs: &Self, rhs: &Self) -> ComputeOf<T> {
        lhs.data
            .iter()
            .zip(rhs.data.iter())
            .fold(<ComputeOf<T> as Scalar>::ZERO, |acc, (&a, &b)| {
                let (a, b) = (a.to_compute(), b.to_compute());
                let diff = if a > b { a - b } else { b - a };
                acc + diff * diff
            })
    }

    /// Length of `rhs - lhs`.
    pub fn distance(lhs: &Self, rhs: &Self) -> ComputeOf<T> {
        Self::distance_squared(lhs, rhs).sqrt()
    }

    /// Angle between two vectors in radians.
    ///
    /// Returns zero when either vector has zero magnitude, or when round-off
    /// pushes the cosine above one. Never NaN.
    pub fn angle(lhs: &Self, rhs: &Self) -> ComputeOf<T> {
        let zero = <ComputeOf<T> as Scalar>::ZERO;
        let divisor = lhs.magnitude() * rhs.magnitude();
        if divisor == zero {
            return zero;
        }

        let cosine = Self::dot_product(lhs, rhs) / divisor;
        if cosine <= <ComputeOf<T> as Scalar>::ONE {
            cosine.acos()
        } else {
            zero
        }
    }

    /// Elementwise product.
    pub fn hadamard_product(lhs: &Self, rhs: &Self) -> Self {
        Self::zip_map(lhs, rhs, |a, b| a * b)
    }

    /// Elementwise quotient.
    pub fn hadamard_division(lhs: &Self, rhs: &Self) -> Self {
        Self::zip_map(lhs, rhs, |a, b| a / b)
    }

    /// Componentwise minimum.
    pub fn min(lhs: &Self, rhs: &Self) -> Self {
        Self::zip_map(lhs, rhs, |a, b| if b < a { b } else { a })
    }

    /// Componentwise maximum.
    pub fn max(lhs: &Self, rhs: &Self) -> Self {
        Self::zip_map(lhs, rhs, |a, b| if b > a { b } else { a })
    }
}

impl<T, const N: usize> Vector<T, N>
where
    T: Scalar + SampleUniform + Neg<Output = T>,
{
    /// Vector whose elements are uniform in `[-range, range]`.
    pub fn random_range(range: T) -> Self {
        Self::random_range_with(&mut rand::thread_rng(), range)
    }

    pub fn random_range_with<R: Rng + ?Sized>(rng: &mut R, range: T) -> Self {
        Self {
            data: core::array::from_fn(|_| math::random_range_with(rng, range)),
        }
    }
}

impl<T, const N: usize> Vector<T, N>
where
    T: Scalar + Float,
    StandardNormal: Distribution<T>,
{
    /// Random direction of unit magnitude. A zero-dimensional vector has no
    /// direction and comes back as the empty vector.
    pub fn random_unit_vector() -> Self {
        Self::random_unit_vector_with(&mut rand::thread_rng())
    }

    /// Same as [`Vector::random_unit_vector`] with an explicit generator.
    ///
    /// Every element is drawn from the standard normal distribution and the
    /// sample is normalized, which gives uniform directions in any dimension.
    pub fn random_unit_vector_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if N == 0 {
            return Self::zeroed();
        }

        let zero = <ComputeOf<T> as Scalar>::ZERO;
        loop {
            let candidate = Self {
                data: core::array::from_fn(|_| StandardNormal.sample(rng)),
            };
            // An all-zero draw has no direction; draw again.
            if candidate.magnitude_squared() > zero {
                return candidate.normalized();
            }
        }
    }
}

impl<T: Scalar, const N: usize> Vector<T, N>
where
    Dimension<N>: HasX,
{
    pub fn x(&self) -> T {
        self.data[0]
    }

    pub fn x_mut(&mut self) -> &mut T {
        &mut self.data[0]
    }
}

impl<T: Scalar, const N: usize> Vector<T, N>
where
    Dimension<N>: HasY,
{
    pub fn y(&self) -> T {
        self.data[1]
    }

    pub fn y_mut(&mut self) -> &mut T {
        &mut self.data[1]
    }
}

impl<T: Scalar, const N: usize> Vector<T, N>
where
    Dimension<N>: HasZ,
{
    /// Third element. Only vectors with at least three elements have one:
    ///
    /// ```compile_fail
    /// use mia::numerics::Vector;
    ///
    /// let v = Vector::<f32, 2>::new([1.0, 2.0]);
    /// let _ = v.z();
    /// ```
    pub fn z(&self) -> T {
        self.data[2]
    }

    pub fn z_mut(&mut self) -> &mut T {
        &mut self.data[2]
    }
}

impl<T: Scalar, const N: usize> Vector<T, N>
where
    Dimension<N>: HasW,
{
    /// Fourth element, for vectors of four or more elements.
    ///
    /// ```compile_fail
    /// use mia::numerics::Vector;
    ///
    /// let v = Vector::<i32, 3>::new([1, 2, 3]);
    /// let _ = v.w();
    /// ```
    pub fn w(&self) -> T {
        self.data[3]
    }

    pub fn w_mut(&mut self) -> &mut T {
        &mut self.data[3]
    }
}

// Canonical directions, 2D: y up, x right.
impl<T: Scalar> Vector<T, 2> {
    pub fn zero() -> Self {
        Self::zeroed()
    }

    pub fn one() -> Self {
        Self::splat(T::ONE)
    }

    pub fn up() -> Self {
        Self::new([T::ZERO, T::ONE])
    }

    pub fn right() -> Self {
        Self::new([T::ONE, T::ZERO])
    }
}

impl<T: Scalar + Neg<Output = T>> Vector<T, 2> {
    pub fn down() -> Self {
        Self::new([T::ZERO, -T::ONE])
    }

    pub fn left() -> Self {
        Self::new([-T::ONE, T::ZERO])
    }
}

// Canonical directions, 3D: y up, x right, z forward.
impl<T: Scalar> Vector<T, 3> {
    pub fn zero() -> Self {
        Self::zeroed()
    }

    pub fn one() -> Self {
        Self::splat(T::ONE)
    }

    pub fn up() -> Self {
        Self::new([T::ZERO, T::ONE, T::ZERO])
    }

    pub fn right() -> Self {
        Self::new([T::ONE, T::ZERO, T::ZERO])
    }

    pub fn forward() -> Self {
        Self::new([T::ZERO, T::ZERO, T::ONE])
    }
}

impl<T: Scalar + Neg<Output = T>> Vector<T, 3> {
    /// Standard 3D cross product, for signed element types.
    ///
    /// ```
    /// use mia::numerics::Vector;
    ///
    /// let x = Vector::<i32, 3>::right();
    /// let y = Vector::<i32, 3>::up();
    /// assert_eq!(Vector::cross_product(&x, &y), Vector::forward());
    /// ```
    ///
    /// Other dimensions have no cross product:
    ///
    /// ```compile_fail
    /// use mia::numerics::Vector;
    ///
    /// let a = Vector::<f32, 2>::new([1.0, 0.0]);
    /// let _ = Vector::cross_product(&a, &a);
    /// ```
    ///
    /// ```compile_fail
    /// use mia::numerics::Vector;
    ///
    /// let a = Vector::<f64, 4>::splat(1.0);
    /// let _ = Vector::cross_product(&a, &a);
    /// ```
    ///
    /// Neither do unsigned elements, whose differences would underflow:
    ///
    /// ```compile_fail
    /// use mia::numerics::Vector;
    ///
    /// let a = Vector::<u32, 3>::up();
    /// let b = Vector::<u32, 3>::right();
    /// let _ = Vector::cross_product(&a, &b);
    /// ```
    pub fn cross_product(lhs: &Self, rhs: &Self) -> Self {
        let [ax, ay, az] = lhs.data;
        let [bx, by, bz] = rhs.data;
        Self::new([ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx])
    }

    pub fn down() -> Self {
        Self::new([T::ZERO, -T::ONE, T::ZERO])
    }

    pub fn left() -> Self {
        Self::new([-T::ONE, T::ZERO, T::ZERO])
    }

    pub fn back() -> Self {
        Self::new([T::ZERO, T::ZERO, -T::ONE])
    }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl<T: Scalar, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, e) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", e)?;
        }
        write!(f, ")")
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T: Scalar, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T: Scalar + Neg<Output = T>, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|e| -e)
    }
}

impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::zip_map(&self, &other, |a, b| a + b)
    }
}

impl<T: Scalar, const N: usize> Sub for Vector<T, N> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::zip_map(&self, &other, |a, b| a - b)
    }
}

impl<T: Scalar, const N: usize> AddAssign for Vector<T, N> {
    fn add_assign(&mut self, other: Self) {
        for (a, b) in self.data.iter_mut().zip(other.data) {
            *a = *a + b;
        }
    }
}

impl<T: Scalar, const N: usize> SubAssign for Vector<T, N> {
    fn sub_assign(&mut self, other: Self) {
        for (a, b) in self.data.iter_mut().zip(other.data) {
            *a = *a - b;
        }
    }
}

// Scalar operators are generated per primitive. `$c` is the compute type of
// `$t`: multiplication and division take a compute-type scalar and cast the
// product back, addition and subtraction broadcast an element.
macro_rules! impl_scalar_ops {
    ($($t:ty => $c:ty),* $(,)?) => {
        $(
            impl<const N: usize> Mul<$c> for Vector<$t, N> {
                type Output = Self;

                fn mul(self, scalar: $c) -> Self {
                    self.map(|e| <$t>::from_compute(e.to_compute() * scalar))
                }
            }

            impl<const N: usize> Mul<Vector<$t, N>> for $c {
                type Output = Vector<$t, N>;

                fn mul(self, v: Vector<$t, N>) -> Vector<$t, N> {
                    v * self
                }
            }

            impl<const N: usize> Div<$c> for Vector<$t, N> {
                type Output = Self;

                fn div(self, scalar: $c) -> Self {
                    self.map(|e| <$t>::from_compute(e.to_compute() / scalar))
                }
            }

            impl<const N: usize> Div<Vector<$t, N>> for $c {
                type Output = Vector<$t, N>;

                fn div(self, v: Vector<$t, N>) -> Vector<$t, N> {
                    v.map(|e| <$t>::from_compute(self / e.to_compute()))
                }
            }

            impl<const N: usize> MulAssign<$c> for Vector<$t, N> {
                fn mul_assign(&mut self, scalar: $c) {
                    *self = *self * scalar;
                }
            }

            impl<const N: usize> DivAssign<$c> for Vector<$t, N> {
                fn div_assign(&mut self, scalar: $c) {
                    *self = *self / scalar;
                }
            }

            impl<const N: usize> Add<$t> for Vector<$t, N> {
                type Output = Self;

                fn add(self, scalar: $t) -> Self {
                    self.map(|e| e + scalar)
                }
            }

            impl<const N: usize> Add<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                fn add(self, v: Vector<$t, N>) -> Vector<$t, N> {
                    v.map(|e| self + e)
                }
            }

            impl<const N: usize> Sub<$t> for Vector<$t, N> {
                type Output = Self;

                fn sub(self, scalar: $t) -> Self {
                    self.map(|e| e - scalar)
                }
            }

            impl<const N: usize> Sub<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                fn sub(self, v: Vector<$t, N>) -> Vector<$t, N> {
                    v.map(|e| self - e)
                }
            }

            impl<const N: usize> AddAssign<$t> for Vector<$t, N> {
                fn add_assign(&mut self, scalar: $t) {
                    *self = *self + scalar;
                }
            }

            impl<const N: usize> SubAssign<$t> for Vector<$t, N> {
                fn sub_assign(&mut self, scalar: $t) {
                    *self = *self - scalar;
                }
            }
        )*
    };
}

impl_scalar_ops!(
    i8 => i8, i16 => i16, i32 => i32, i64 => i64, i128 => i128, isize => isize,
    u8 => u8, u16 => u16, u32 => u32, u64 => u64, u128 => u128, usize => usize,
    f32 => f32,
);

#[cfg(not(feature = "narrow-f64-compute"))]
impl_scalar_ops!(f64 => f64);
#[cfg(feature = "narrow-f64-compute")]
impl_scalar_ops!(f64 => f32);

// Conversions between Vector<T, N> and arrays [T; N]

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(data: [T; N]) -> Self {
        Self { data }
    }
}

impl<T: Scalar, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(v: Vector<T, N>) -> Self {
        v.data
    }
}

impl<T, const N: usize> TryFrom<&[T]> for Vector<T, N>
where
    T: Scalar + AsPrimitive<T>,
{
    type Error = NumericsError;

    fn try_from(values: &[T]) -> Result<Self> {
        Self::from_slice(values)
    }
}

impl<T: Scalar, const N: usize> AsRef<[T]> for Vector<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T: Scalar, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = core::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T: Scalar, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T: Scalar, const N: usize> IntoIterator for &'a mut Vector<T, N> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

// Vectors serialize as fixed-length tuples, e.g. (x, y, z).
impl<T, const N: usize> Serialize for Vector<T, N>
where
    T: Scalar + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(N)?;
        for e in &self.data {
            tuple.serialize_element(e)?;
        }
        tuple.end()
    }
}

impl<'de, T, const N: usize> Deserialize<'de> for Vector<T, N>
where
    T: Scalar + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_tuple(N, VectorVisitor::<T, N>(PhantomData))
    }
}

struct VectorVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T, const N: usize> Visitor<'de> for VectorVisitor<T, N>
where
    T: Scalar + Deserialize<'de>,
{
    type Value = Vector<T, N>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a tuple of {} elements", N)
    }

    fn visit_seq<A>(self, mut seq: A) -> core::result::Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut data = [T::ZERO; N];
        for (i, slot) in data.iter_mut().enumerate() {
            *slot = seq
                .next_element()?
                .ok_or_else(|| <A::Error as de::Error>::invalid_length(i, &self))?;
        }
        Ok(Vector { data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_is_zero() {
        let v = Vector::<f32, 4>::default();
        assert!(v.iter().all(|&e| e == 0.0));

        let v = Vector::<u8, 7>::zeroed();
        assert!(v.iter().all(|&e| e == 0));
    }

    #[test]
    fn test_constructors() {
        let a = [1, 2, 3, 4, 5];
        let b = [6.0_f64, 7.0, 8.0, 9.0];

        let v1 = Vector::<i32, 3>::splat(4);
        let v2 = Vector::<i32, 3>::from_slice(&a).unwrap();
        let v3 = Vector::<i32, 3>::try_from_iter(b).unwrap();
        let v4: Vector<i32, 3> = Vector::try_from(&a[..3]).unwrap();

        assert_eq!(v1, Vector::new([4, 4, 4]));
        assert_eq!(v2, Vector::new([1, 2, 3]));
        assert_eq!(v3, Vector::new([6, 7, 8]));
        assert_eq!(v4, v2);
    }

    #[test]
    fn test_short_input_is_invalid_argument() {
        let err = Vector::<f32, 4>::from_slice(&[1.0, 2.0]).unwrap_err();
        assert_eq!(err, NumericsError::InvalidArgument { expected: 4, actual: 2 });

        let err = Vector::<f32, 3>::try_from_iter([1, 2]).unwrap_err();
        assert_eq!(err, NumericsError::InvalidArgument { expected: 3, actual: 2 });
    }

    #[test]
    fn test_conversion_truncates_integers() {
        let v = Vector::<i32, 3>::from_slice(&[1.9_f32, -2.7, 3.2]).unwrap();
        assert_eq!(v, Vector::new([1, -2, 3]));

        let c: Vector<u8, 2> = Vector::<f64, 2>::new([250.7, 3.1]).cast();
        assert_eq!(c, Vector::new([250, 3]));
    }

    #[test]
    fn test_truncate_from_larger_dimension() {
        let v4 = Vector::<f64, 4>::new([1.0, 2.0, 3.0, 4.0]);
        let v2 = Vector::<i32, 2>::truncate_from(&v4).unwrap();
        assert_eq!(v2, Vector::new([1, 2]));

        let err = Vector::<f32, 4>::truncate_from(&Vector::<f32, 3>::one()).unwrap_err();
        assert_eq!(err, NumericsError::InvalidArgument { expected: 4, actual: 3 });
    }

    #[test]
    fn test_copy_is_independent() {
        let a = Vector::<f32, 3>::new([1.0, 2.0, 3.0]);
        let mut b = a;
        b[0] = 10.0;
        assert_eq!(a[0], 1.0);
        assert_eq!(b[0], 10.0);
    }

    #[test]
    fn test_checked_access() {
        let mut v = Vector::<i32, 3>::new([1, 2, 3]);
        assert_eq!(v.get(2), Some(&3));
        assert_eq!(v.get(3), None);

        if let Some(e) = v.get_mut(1) {
            *e = 20;
        }
        assert_eq!(v[1], 20);
        assert!(v.get_mut(3).is_none());
    }

    #[test]
    fn test_named_accessors() {
        let mut v = Vector::<f32, 4>::new([1.0, 2.0, 3.0, 4.0]);
        assert_eq!((v.x(), v.y(), v.z(), v.w()), (1.0, 2.0, 3.0, 4.0));

        *v.z_mut() = 30.0;
        *v.w_mut() += 1.0;
        assert_eq!(v, Vector::new([1.0, 2.0, 30.0, 5.0]));

        let mut p = Vector::<i32, 2>::new([5, 6]);
        *p.x_mut() = 7;
        assert_eq!((p.x(), p.y()), (7, 6));
    }

    #[test]
    fn test_arithmetic() {
        let a = Vector::<f32, 3>::new([1.0, 2.0, 3.0]);
        let b = Vector::<f32, 3>::new([4.0, 5.0, 6.0]);

        let sum = a + b;
        assert_eq!(sum, Vector::new([5.0, 7.0, 9.0]));
        assert_eq!(sum - a, b);
        assert_eq!(-a, Vector::new([-1.0, -2.0, -3.0]));

        let mut c = a;
        c += b;
        c -= Vector::splat(1.0);
        assert_eq!(c, Vector::new([4.0, 6.0, 8.0]));
    }

    #[test]
    fn test_scalar_arithmetic() {
        let v = Vector::<f32, 3>::new([1.0, 2.0, 3.0]);
        assert_eq!(v * 2.0, Vector::new([2.0, 4.0, 6.0]));
        assert_eq!(2.0 * v, v * 2.0);
        assert_eq!(v / 2.0, Vector::new([0.5, 1.0, 1.5]));
        assert_eq!(6.0 / v, Vector::new([6.0, 3.0, 2.0]));
        assert_eq!(v + 1.0, Vector::new([2.0, 3.0, 4.0]));
        assert_eq!(1.0 - v, Vector::new([0.0, -1.0, -2.0]));

        let mut m = v;
        m *= 3.0;
        m /= 1.5;
        m += 1.0;
        m -= 0.5;
        assert_eq!(m, Vector::new([2.5, 4.5, 6.5]));
    }

    #[test]
    fn test_integer_scalar_division_truncates() {
        let v = Vector::<i32, 3>::new([7, -7, 9]);
        assert_eq!(v / 2, Vector::new([3, -3, 4]));
        assert_eq!(v * 3, Vector::new([21, -21, 27]));
    }

    #[test]
    fn test_equality() {
        let a = Vector::<i32, 3>::new([1, 2, 3]);
        assert_eq!(a, Vector::new([1, 2, 3]));
        assert_ne!(a, Vector::new([1, 2, 4]));
    }

    #[test]
    fn test_magnitude() {
        let v = Vector::<f32, 3>::new([1.0, 2.0, 3.0]);
        assert_eq!(v.magnitude_squared(), 14.0);
        assert_relative_eq!(v.magnitude(), 3.741_657_4, epsilon = 1e-6);

        let i = Vector::<i32, 3>::new([1, 2, 3]);
        assert_eq!(i.magnitude_squared(), 14);
        assert_eq!(i.magnitude(), 3);
    }

    #[test]
    fn test_dot_and_cross_product() {
        let v1 = Vector::<f32, 3>::new([1.0, 0.0, 0.0]);
        let v2 = Vector::<f32, 3>::new([0.0, 1.0, 0.0]);

        assert_eq!(Vector::cross_product(&v1, &v2), Vector::new([0.0, 0.0, 1.0]));
        assert_eq!(Vector::dot_product(&v1, &v2), 0.0);
        assert_relative_eq!(Vector::angle(&v1, &v2), 1.570_796_3, epsilon = 1e-6);

        let a = Vector::<i32, 3>::new([1, 2, 3]);
        let b = Vector::<i32, 3>::new([4, 5, 6]);
        assert_eq!(Vector::cross_product(&a, &b), Vector::new([-3, 6, -3]));
        assert_eq!(Vector::cross_product(&b, &a), -Vector::cross_product(&a, &b));
        assert_eq!(Vector::cross_product(&a, &a), Vector::<i32, 3>::zero());
    }

    #[test]
    fn test_normalize() {
        let v = Vector::<f64, 3>::new([3.0, 0.0, 4.0]);
        let n = v.normalized();
        assert_relative_eq!(n.magnitude(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(n[0], 0.6, epsilon = 1e-6);

        let mut m = Vector::<f32, 2>::new([0.0, -2.0]);
        let before = m.normalize();
        assert_eq!(before, 2.0);
        assert_eq!(m, Vector::new([0.0, -1.0]));
    }

    #[test]
    fn test_integer_normalize_matches_normalized() {
        let v = Vector::<i32, 3>::new([5, 0, 0]);
        assert_eq!(v.normalized(), Vector::new([1, 0, 0]));

        let mut m = v;
        assert_eq!(m.normalize(), 5);
        assert_eq!(m, v.normalized());

        let mut d = Vector::<f64, 3>::new([3.0, 0.0, 4.0]);
        let expected = d.normalized();
        d.normalize();
        assert_eq!(d, expected);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "overflow")]
    fn test_integer_reduction_overflow_panics_in_debug() {
        // 12 * 12 does not fit in i8
        let _ = Vector::<i8, 3>::new([12, 0, 0]).magnitude_squared();
    }

    #[test]
    fn test_normalized_zero_vector_is_nan() {
        let n = Vector::<f32, 3>::zeroed().normalized();
        assert!(n.iter().all(|e| e.is_nan()));
    }

    #[test]
    fn test_lerp() {
        let a = Vector::<f32, 2>::new([0.0, 10.0]);
        let b = Vector::<f32, 2>::new([10.0, 20.0]);
        assert_eq!(Vector::lerp(&a, &b, 0.0), a);
        assert_eq!(Vector::lerp(&a, &b, 1.0), b);
        assert_eq!(Vector::lerp(&a, &b, 0.5), Vector::new([5.0, 15.0]));
        assert_eq!(Vector::lerp(&a, &b, 2.0), Vector::new([20.0, 30.0]));
    }

    #[test]
    fn test_distance() {
        let a = Vector::<f32, 3>::new([1.0, 2.0, 3.0]);
        let b = Vector::<f32, 3>::new([4.0, 6.0, 3.0]);
        assert_eq!(Vector::distance_squared(&a, &b), 25.0);
        assert_eq!(Vector::distance(&a, &b), 5.0);
        assert_eq!(Vector::distance(&b, &a), 5.0);
        assert_eq!(Vector::distance(&a, &a), 0.0);

        let u = Vector::<u32, 2>::new([1, 9]);
        let w = Vector::<u32, 2>::new([4, 5]);
        assert_eq!(Vector::distance(&u, &w), 5);
        assert_eq!(Vector::distance(&w, &u), 5);
    }

    #[test]
    fn test_angle_edge_cases() {
        let zero = Vector::<f32, 3>::zeroed();
        let right = Vector::<f32, 3>::right();
        assert_eq!(Vector::angle(&zero, &right), 0.0);

        let v = Vector::<f32, 3>::new([0.1, 0.2, 0.3]);
        let scaled = v * 7.0;
        let angle = Vector::angle(&v, &scaled);
        assert!(!angle.is_nan());
        assert_relative_eq!(angle, 0.0, epsilon = 1e-3);

        let opposite = Vector::angle(&v, &-v);
        assert!(!opposite.is_nan());
        assert_relative_eq!(opposite, core::f32::consts::PI, epsilon = 1e-3);

        let nan = Vector::<f32, 3>::splat(f32::NAN);
        assert_eq!(Vector::angle(&nan, &right), 0.0);
    }

    #[test]
    fn test_hadamard_min_max() {
        let a = Vector::<i32, 4>::new([1, -2, 3, 8]);
        let b = Vector::<i32, 4>::new([2, 5, -1, 2]);
        assert_eq!(Vector::hadamard_product(&a, &b), Vector::new([2, -10, -3, 16]));
        assert_eq!(Vector::hadamard_division(&a, &b), Vector::new([0, 0, -3, 4]));
        assert_eq!(Vector::min(&a, &b), Vector::new([1, -2, -1, 2]));
        assert_eq!(Vector::max(&a, &b), Vector::new([2, 5, 3, 8]));
    }

    #[test]
    fn test_constants_2d() {
        assert_eq!(Vector::<f32, 2>::zero(), Vector::new([0.0, 0.0]));
        assert_eq!(Vector::<f32, 2>::one(), Vector::new([1.0, 1.0]));
        assert_eq!(Vector::<i32, 2>::up(), Vector::new([0, 1]));
        assert_eq!(Vector::<i32, 2>::down(), Vector::new([0, -1]));
        assert_eq!(Vector::<i32, 2>::left(), Vector::new([-1, 0]));
        assert_eq!(Vector::<i32, 2>::right(), Vector::new([1, 0]));
    }

    #[test]
    fn test_constants_3d() {
        assert_eq!(Vector::<f32, 3>::zero(), Vector::new([0.0, 0.0, 0.0]));
        assert_eq!(Vector::<f32, 3>::one(), Vector::new([1.0, 1.0, 1.0]));
        assert_eq!(Vector::<f32, 3>::up(), Vector::new([0.0, 1.0, 0.0]));
        assert_eq!(Vector::<f32, 3>::down(), Vector::new([0.0, -1.0, 0.0]));
        assert_eq!(Vector::<f32, 3>::left(), Vector::new([-1.0, 0.0, 0.0]));
        assert_eq!(Vector::<f32, 3>::right(), Vector::new([1.0, 0.0, 0.0]));
        assert_eq!(Vector::<f32, 3>::forward(), Vector::new([0.0, 0.0, 1.0]));
        assert_eq!(Vector::<f32, 3>::back(), Vector::new([0.0, 0.0, -1.0]));

        let mut up = Vector::<f32, 3>::up();
        up[1] = 5.0;
        assert_eq!(Vector::<f32, 3>::up()[1], 1.0);
    }

    #[test]
    fn test_iteration() {
        let mut v = Vector::<i32, 4>::new([1, 2, 3, 4]);
        let forward: Vec<i32> = v.iter().copied().collect();
        let reverse: Vec<i32> = v.iter().rev().copied().collect();
        assert_eq!(forward, vec![1, 2, 3, 4]);
        assert_eq!(reverse, vec![4, 3, 2, 1]);

        for e in &mut v {
            *e *= 10;
        }
        assert_eq!(v.into_array(), [10, 20, 30, 40]);

        let rebuilt = Vector::<i32, 4>::try_from_iter(v).unwrap();
        assert_eq!(rebuilt, v);
    }

    #[test]
    fn test_display() {
        let v = Vector::<i32, 3>::new([1, -2, 3]);
        assert_eq!(v.to_string(), "(1, -2, 3)");
        assert_eq!(Vector::<f32, 0>::zeroed().to_string(), "()");
    }

    #[test]
    fn test_random_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let v = Vector::<f32, 8>::random_range_with(&mut rng, 2.0);
        assert!(v.iter().all(|e| (-2.0..=2.0).contains(e)));

        let i = Vector::<i32, 8>::random_range(1);
        assert!(i.iter().all(|e| (-1..=1).contains(e)));
    }

    #[test]
    fn test_random_unit_vector() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..32 {
            let v = Vector::<f32, 3>::random_unit_vector_with(&mut rng);
            assert_relative_eq!(v.magnitude(), 1.0, epsilon = 1e-5);
        }
        let v = Vector::<f64, 4>::random_unit_vector();
        assert_relative_eq!(v.magnitude(), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_random_unit_vector_high_dimension() {
        let mut rng = StdRng::seed_from_u64(32);
        for _ in 0..16 {
            let v = Vector::<f32, 32>::random_unit_vector_with(&mut rng);
            assert_relative_eq!(v.magnitude(), 1.0, epsilon = 1e-5);
        }

        let wide = Vector::<f64, 64>::random_unit_vector();
        assert_relative_eq!(wide.magnitude(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_bincode_roundtrip() {
        let config = bincode::config::standard();
        let v = Vector::<f32, 3>::new([1.0, 2.0, 3.0]);

        let encoded = bincode::serde::encode_to_vec(v, config).unwrap();
        assert!(!encoded.is_empty());

        let (decoded, _len): (Vector<f32, 3>, _) =
            bincode::serde::decode_from_slice(&encoded, config).unwrap();
        assert_eq!(v, decoded);
    }

    #[test]
    fn test_bincode_generic_roundtrip() {
        let config = bincode::config::standard();

        let v_i16 = Vector::<i16, 5>::new([1, -2, 3, -4, 5]);
        let enc = bincode::serde::encode_to_vec(v_i16, config).unwrap();
        let (dec, _): (Vector<i16, 5>, _) = bincode::serde::decode_from_slice(&enc, config).unwrap();
        assert_eq!(v_i16, dec);

        let v_f64 = Vector::<f64, 2>::new([10.0, 20.0]);
        let enc = bincode::serde::encode_to_vec(v_f64, config).unwrap();
        let (dec, _): (Vector<f64, 2>, _) = bincode::serde::decode_from_slice(&enc, config).unwrap();
        assert_eq!(v_f64, dec);
    }
}
