// src/numerics/math.rs
// Scalar helpers shared by the numeric types: clamping, interpolation,
// random sampling and power-of-two rounding.

use core::ops::Neg;

use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Standard};
use rand::Rng;

use super::types::traits::Scalar;

/// Clamp `x` into `[lower, upper]`.
pub fn clamp<T: PartialOrd>(x: T, lower: T, upper: T) -> T {
    let capped = if x > upper { upper } else { x };
    if capped < lower {
        lower
    } else {
        capped
    }
}

/// Linear interpolation between `start` and `end`. `k` is not clamped, so
/// values outside `[0, 1]` extrapolate.
pub fn lerp<T: Scalar>(start: T, end: T, k: T) -> T {
    start * (T::ONE - k) + end * k
}

/// True when `value` lies in the half-open range `[start, end)`.
pub fn in_range<T: PartialOrd>(value: T, start: T, end: T) -> bool {
    value >= start && value < end
}

/// Sample from the standard distribution of `T` (`[0, 1)` for floats) using
/// the thread-local generator.
pub fn random<T>() -> T
where
    Standard: Distribution<T>,
{
    random_with(&mut rand::thread_rng())
}

/// Same as [`random`] with an explicit generator.
pub fn random_with<T, R>(rng: &mut R) -> T
where
    Standard: Distribution<T>,
    R: Rng + ?Sized,
{
    rng.gen()
}

/// Uniform sample in `[-range, range]`.
pub fn random_range<T>(range: T) -> T
where
    T: SampleUniform + PartialOrd + Neg<Output = T> + Copy,
{
    random_range_with(&mut rand::thread_rng(), range)
}

/// Same as [`random_range`] with an explicit generator. A negative `range`
/// is treated as its magnitude.
pub fn random_range_with<T, R>(rng: &mut R, range: T) -> T
where
    T: SampleUniform + PartialOrd + Neg<Output = T> + Copy,
    R: Rng + ?Sized,
{
    let (low, high) = if range < -range { (range, -range) } else { (-range, range) };
    rng.gen_range(low..=high)
}

/// Uniform sample in `[start, end)`. Returns `start` when the range is empty.
pub fn random_in_range<T>(start: T, end: T) -> T
where
    T: SampleUniform + PartialOrd + Copy,
{
    random_in_range_with(&mut rand::thread_rng(), start, end)
}

/// Same as [`random_in_range`] with an explicit generator.
pub fn random_in_range_with<T, R>(rng: &mut R, start: T, end: T) -> T
where
    T: SampleUniform + PartialOrd + Copy,
    R: Rng + ?Sized,
{
    if start < end {
        rng.gen_range(start..end)
    } else {
        start
    }
}

/// Rounding up to the next power of two.
pub trait PowerOfTwo: Sized {
    /// Smallest power of two that is `>= self`. Inputs below one yield one;
    /// `None` when the result does not fit in `Self` (or is not finite).
    fn round_up_power_of_2(self) -> Option<Self>;
}

macro_rules! impl_power_of_two_unsigned {
    ($($t:ty),*) => {
        $(
            impl PowerOfTwo for $t {
                fn round_up_power_of_2(self) -> Option<Self> {
                    self.max(1).checked_next_power_of_two()
                }
            }
        )*
    };
}

macro_rules! impl_power_of_two_signed {
    ($($t:ty => $u:ty),*) => {
        $(
            impl PowerOfTwo for $t {
                fn round_up_power_of_2(self) -> Option<Self> {
                    let rounded = (self.max(1) as $u).checked_next_power_of_two()?;
                    <$t>::try_from(rounded).ok()
                }
            }
        )*
    };
}

macro_rules! impl_power_of_two_float {
    ($($t:ident),*) => {
        $(
            impl PowerOfTwo for $t {
                fn round_up_power_of_2(self) -> Option<Self> {
                    if self.is_nan() {
                        return None;
                    }
                    if self <= 1.0 {
                        return Some(1.0);
                    }
                    let rounded = $t::powf(2.0, self.log2().ceil());
                    rounded.is_finite().then_some(rounded)
                }
            }
        )*
    };
}

impl_power_of_two_unsigned!(u8, u16, u32, u64, u128, usize);
impl_power_of_two_signed!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize);
impl_power_of_two_float!(f32, f64);

/// Free-function form of [`PowerOfTwo::round_up_power_of_2`].
pub fn round_up_power_of_2<T: PowerOfTwo>(x: T) -> Option<T> {
    x.round_up_power_of_2()
}

/// Round `value` up to a multiple of `size_of::<T>()`.
pub fn round_up_type_bound<T>(value: usize) -> usize {
    let size = core::mem::size_of::<T>().max(1);
    value.div_ceil(size) * size
}
