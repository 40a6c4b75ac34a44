use num_traits::{Num, ToPrimitive, Zero};
use std::fmt::Debug;

/// A numeric type usable as a quadtree coordinate.
///
/// The only behavior that differs between coordinate types is how a length
/// is split in two. Integer types cannot halve an odd length exactly, so the
/// remainder goes to the lower (west/north) half. Floating point types halve
/// exactly.
pub trait Coordinate: Copy + PartialOrd + Debug + Num + ToPrimitive {
    /// Splits `len` into `(lower, upper)` with `lower + upper == len`.
    fn split(len: Self) -> (Self, Self);

    /// Whether `len` is usable as a width or height.
    fn is_valid_len(len: Self) -> bool;

    fn is_finite_coord(self) -> bool {
        true
    }

    /// `self + len`, or `None` when the far edge is not representable.
    fn checked_end(self, len: Self) -> Option<Self>;
}

macro_rules! impl_integer_coordinate {
    ($($t:ty),*) => {
        $(
            impl Coordinate for $t {
                #[inline(always)]
                fn split(len: Self) -> (Self, Self) {
                    let half = len / 2;
                    (half + len % 2, half)
                }

                #[inline(always)]
                fn is_valid_len(len: Self) -> bool {
                    len >= <$t as Zero>::zero()
                }

                #[inline(always)]
                fn checked_end(self, len: Self) -> Option<Self> {
                    <$t>::checked_add(self, len)
                }
            }
        )*
    };
}

macro_rules! impl_float_coordinate {
    ($($t:ty),*) => {
        $(
            impl Coordinate for $t {
                #[inline(always)]
                fn split(len: Self) -> (Self, Self) {
                    let half = len / 2.0;
                    (half, half)
                }

                #[inline(always)]
                fn is_valid_len(len: Self) -> bool {
                    <$t>::is_finite(len) && len >= 0.0
                }

                #[inline(always)]
                fn is_finite_coord(self) -> bool {
                    <$t>::is_finite(self)
                }

                #[inline(always)]
                fn checked_end(self, len: Self) -> Option<Self> {
                    let end = self + len;
                    if end.is_finite() {
                        Some(end)
                    } else {
                        None
                    }
                }
            }
        )*
    };
}

impl_integer_coordinate!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float_coordinate!(f32, f64);

#[cfg(test)]
mod tests {
    use super::Coordinate;

    #[test]
    fn integer_split_gives_remainder_to_lower_half() {
        assert_eq!(i32::split(100), (50, 50));
        assert_eq!(i32::split(7), (4, 3));
        assert_eq!(u8::split(1), (1, 0));
        assert_eq!(i64::split(0), (0, 0));
    }

    #[test]
    fn float_split_halves_exactly() {
        assert_eq!(f32::split(7.0), (3.5, 3.5));
        assert_eq!(f64::split(1.0), (0.5, 0.5));
    }

    #[test]
    fn length_validity() {
        assert!(i32::is_valid_len(0));
        assert!(!i32::is_valid_len(-1));
        assert!(u32::is_valid_len(0));
        assert!(f32::is_valid_len(0.0));
        assert!(!f32::is_valid_len(-0.5));
        assert!(!f64::is_valid_len(f64::NAN));
        assert!(!f64::is_valid_len(f64::INFINITY));
        assert!(!f32::NAN.is_finite_coord());
        assert!(5i32.is_finite_coord());
    }

    #[test]
    fn far_edge_overflow_is_detected() {
        assert_eq!(10i32.checked_end(5), Some(15));
        assert_eq!((i32::MAX - 5).checked_end(10), None);
        assert_eq!(250u8.checked_end(6), None);
        assert_eq!(1.5f32.checked_end(2.0), Some(3.5));
        assert_eq!(f64::MAX.checked_end(f64::MAX), None);
    }
}
