// src/numerics/types/aliases.rs
// Per-dimension aliases over Vector.

use super::vector::Vector;

pub type Vector2<T = f32> = Vector<T, 2>;
pub type Vector3<T = f32> = Vector<T, 3>;
pub type Vector4<T = f32> = Vector<T, 4>;

pub type Vector2d = Vector<f64, 2>;
pub type Vector3d = Vector<f64, 3>;
pub type Vector4d = Vector<f64, 4>;

pub type Vector2i = Vector<i32, 2>;
pub type Vector3i = Vector<i32, 3>;
pub type Vector4i = Vector<i32, 4>;

/// Points share the vector representation.
pub type Point3<T = f32> = Vector<T, 3>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_defaults() {
        let v: Vector3 = Vector3::new([0.0, 0.0, 1.0]);
        assert_eq!(v.z(), 1.0_f32);

        let d = Vector2d::new([1.5, 2.5]);
        assert_eq!(d.x(), 1.5_f64);

        let i = Vector4i::splat(3);
        assert_eq!(i.w(), 3);
    }

    #[test]
    fn test_point_alias_behaviour() {
        let p: Point3 = Point3::new([1.0, 2.0, 3.0]);
        let q: Point3 = Point3::new([4.0, 6.0, 3.0]);
        assert_eq!(Vector3::distance(&p, &q), 5.0);
    }
}
