//! Constrained generic addition.
//!
//! [`Numeric`] is the compile-time constraint "is a whole or real number".
//! It is sealed and implemented for every primitive integer and float, so
//! `add::<String>` or `add::<bool>` is rejected by the type checker rather
//! than at runtime.
//!
//! ```compile_fail
//! use firstcmake_utils::add;
//! let _ = add(String::from("a"), String::from("b"));
//! ```

use std::fmt::{Debug, Display};

mod sealed {
    pub trait Sealed {}
}

/// Primitive integer or floating-point type.
///
/// Addition follows the type's native semantics: integers wrap on
/// overflow, floats follow IEEE-754.
pub trait Numeric: sealed::Sealed + Copy + PartialEq + PartialOrd + Debug + Display {
    /// `true` for integer kinds, `false` for floating-point kinds.
    const IS_INTEGRAL: bool;

    /// Native addition. Never panics and never saturates.
    fn native_add(self, rhs: Self) -> Self;
}

macro_rules! numeric_impl_int {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Numeric for $t {
                const IS_INTEGRAL: bool = true;

                #[inline(always)]
                fn native_add(self, rhs: $t) -> $t {
                    <$t>::wrapping_add(self, rhs)
                }
            }
        )*
    };
}

macro_rules! numeric_impl_float {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Numeric for $t {
                const IS_INTEGRAL: bool = false;

                #[inline(always)]
                fn native_add(self, rhs: $t) -> $t {
                    self + rhs
                }
            }
        )*
    };
}

numeric_impl_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
numeric_impl_float!(f32, f64);

/// Add two values of the same numeric type.
///
/// # Examples
/// ```
/// use firstcmake_utils::add;
/// assert_eq!(add(5, 3), 8);
/// assert_eq!(add(i8::MAX, 1), i8::MIN);
/// assert_eq!(add(10.25, 5.75), 16.0);
/// ```
#[inline]
pub fn add<T: Numeric>(a: T, b: T) -> T {
    a.native_add(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_integers() {
        assert_eq!(add(5, 3), 8);
        assert_eq!(add(-7i64, 2), -5);
        assert_eq!(add(0u8, 0), 0);
    }

    #[test]
    fn add_wraps_on_overflow() {
        assert_eq!(add(u8::MAX, 1), 0);
        assert_eq!(add(i32::MAX, 1), i32::MIN);
        assert_eq!(add(i64::MIN, -1), i64::MAX);
        assert_eq!(add(usize::MAX, 2), 1);
    }

    #[test]
    fn add_floats() {
        assert!((add(2.5f32, 1.7f32) - 4.2).abs() < 1e-6);
        assert_eq!(add(10.25f64, 5.75), 16.0);
        assert_eq!(add(0.1f64, 0.2), 0.1 + 0.2);
    }

    #[test]
    fn add_float_specials() {
        assert!(add(f64::NAN, 1.0).is_nan());
        assert_eq!(add(f32::MAX, f32::MAX), f32::INFINITY);
        assert_eq!(add(f64::INFINITY, 1.0), f64::INFINITY);
    }

    #[test]
    fn integral_flag() {
        assert!(<i32 as Numeric>::IS_INTEGRAL);
        assert!(<u128 as Numeric>::IS_INTEGRAL);
        assert!(!<f32 as Numeric>::IS_INTEGRAL);
        assert!(!<f64 as Numeric>::IS_INTEGRAL);
    }
}
