// src/numerics/types/traits.rs
// Element-type traits for the numeric types and the dimension markers used
// to gate axis accessors at compile time.

use core::fmt::{Debug, Display};
use core::ops::{Add, Div, Mul, Sub};

/// Scalar is the element type of every vector and matrix: any built-in
/// signed/unsigned integer or floating point type.
///
/// Every scalar names a [`Compute`] type. Reductions (dot product,
/// magnitude, distance, angle) and scalar multiplication are carried out in
/// that type and converted back with `as` semantics, so integer elements
/// truncate rather than round.
///
/// Integer arithmetic follows Rust's overflow rules in the element type
/// itself: an intermediate product or sum that leaves the range of `T` (for
/// example squaring 12 in `i8`) panics in debug builds and wraps in release
/// builds. Use a wider element type when reductions may exceed it.
pub trait Scalar:
    Copy
    + Default
    + Debug
    + Display
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Type in which reductions over `Self` are produced.
    type Compute: Compute;

    const ZERO: Self;
    const ONE: Self;

    /// Widen (or narrow) an element into the compute type.
    fn to_compute(self) -> Self::Compute;

    /// Convert a compute-type value back into an element.
    fn from_compute(value: Self::Compute) -> Self;
}

/// Shorthand for the compute type of `T`.
pub type ComputeOf<T> = <T as Scalar>::Compute;

/// Compute is a scalar that reductions can be finished in.
///
/// Integer implementations route `sqrt` and `acos` through `f64` and
/// truncate the result.
pub trait Compute: Scalar<Compute = Self> {
    fn sqrt(self) -> Self;

    /// Arc cosine. Arguments below -1 are treated as -1.
    fn acos(self) -> Self;
}

macro_rules! impl_integer_scalar {
    ($($t:ty),* $(,)?) => {
        $(
            impl Scalar for $t {
                type Compute = $t;

                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn to_compute(self) -> $t {
                    self
                }

                #[inline]
                fn from_compute(value: $t) -> Self {
                    value
                }
            }

            impl Compute for $t {
                #[inline]
                fn sqrt(self) -> Self {
                    (self as f64).sqrt() as $t
                }

                #[inline]
                fn acos(self) -> Self {
                    (self as f64).max(-1.0).acos() as $t
                }
            }
        )*
    };
}

macro_rules! impl_float_scalar {
    ($t:ty => $c:ty) => {
        impl Scalar for $t {
            type Compute = $c;

            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            #[inline]
            fn to_compute(self) -> $c {
                self as $c
            }

            #[inline]
            fn from_compute(value: $c) -> Self {
                value as $t
            }
        }
    };
}

macro_rules! impl_float_compute {
    ($t:ident) => {
        impl Compute for $t {
            #[inline]
            fn sqrt(self) -> Self {
                $t::sqrt(self)
            }

            #[inline]
            fn acos(self) -> Self {
                $t::acos(self.max(-1.0))
            }
        }
    };
}

impl_integer_scalar!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl_float_scalar!(f32 => f32);
impl_float_compute!(f32);

#[cfg(not(feature = "narrow-f64-compute"))]
impl_float_scalar!(f64 => f64);
#[cfg(not(feature = "narrow-f64-compute"))]
impl_float_compute!(f64);

// Reductions over f64 elements run in single precision.
#[cfg(feature = "narrow-f64-compute")]
impl_float_scalar!(f64 => f32);

/// Type-level carrier for a vector dimension.
///
/// Axis accessors are only implemented for dimensions that carry the matching
/// marker trait, so `z()` on a `Vector<T, 2>` is a type error.
pub struct Dimension<const N: usize>;

/// Dimension has an `x` axis (N >= 1).
pub trait HasX: private::Sealed {}
/// Dimension has a `y` axis (N >= 2).
pub trait HasY: HasX {}
/// Dimension has a `z` axis (N >= 3).
pub trait HasZ: HasY {}
/// Dimension has a `w` axis (N >= 4).
pub trait HasW: HasZ {}

mod private {
    pub trait Sealed {}
}

macro_rules! impl_axis {
    ($axis:ident => $($n:literal),* $(,)?) => {
        $(impl $axis for Dimension<$n> {})*
    };
}

macro_rules! impl_sealed {
    ($($n:literal),* $(,)?) => {
        $(impl private::Sealed for Dimension<$n> {})*
    };
}

// Named axes are provided up to 32 dimensions.
impl_sealed!(
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16,
    17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32
);
impl_axis!(HasX =>
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16,
    17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32
);
impl_axis!(HasY =>
    2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16,
    17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32
);
impl_axis!(HasZ =>
    3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16,
    17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32
);
impl_axis!(HasW =>
    4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16,
    17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32
);
