//! Range-checked numeric conversions
//!
//! Every narrowing conversion here either returns a value equal (as a
//! mathematical integer) to its input, or fails with the argument name and the
//! bound it violated. Nothing truncates, wraps or reinterprets bits.
//!
//! Widening conversions (`u32_as_index`, `u32_as_dbl`, identifier to `int`)
//! cannot fail and return plain values.

use crate::error::{ConversionError, Result};
use crate::widen::{Widen, wide_le};

/// Host index type (signed, pointer-sized)
///
/// Only targets with pointers wider than 32 bits are supported; on 32-bit
/// targets the assertion below fails the build.
pub type Index = libc::ptrdiff_t;

/// Platform C `int`
pub type CInt = libc::c_int;

// Every u32 must fit in the index domain for `u32_as_index` to be a pure
// widening.
const _: () = assert!(
    std::mem::size_of::<Index>() > std::mem::size_of::<u32>(),
    "the host index type must be wider than u32"
);

/// A non-negative target domain `[0, MAX]`
pub trait Bounded: Sized {
    /// Type name used in error messages
    const NAME: &'static str;
    /// Symbolic name of `MAX` used in error messages
    const BOUND: &'static str;
    const MAX: u64;

    /// Build the value from a widened integer already known to lie in `[0, MAX]`
    fn from_checked(wide: i128) -> Self;
}

impl Bounded for u32 {
    const NAME: &'static str = "u32";
    const BOUND: &'static str = "UINT32_MAX";
    const MAX: u64 = u32::MAX as u64;

    fn from_checked(wide: i128) -> Self {
        wide as u32
    }
}

impl Bounded for u16 {
    const NAME: &'static str = "u16";
    const BOUND: &'static str = "UINT16_MAX";
    const MAX: u64 = u16::MAX as u64;

    fn from_checked(wide: i128) -> Self {
        wide as u16
    }
}

impl Bounded for CInt {
    const NAME: &'static str = "int";
    const BOUND: &'static str = "INT_MAX";
    const MAX: u64 = CInt::MAX as u64;

    fn from_checked(wide: i128) -> Self {
        wide as CInt
    }
}

/// The range error for target `T`
pub fn range_error<T: Bounded>(arg: &str) -> ConversionError {
    ConversionError::out_of_range(arg, T::NAME, T::BOUND, T::MAX)
}

/// Narrow any integer into the domain `[0, T::MAX]`
///
/// Both the value and the bound are widened before comparing, so the result
/// does not depend on the relative widths of the source and target types.
pub fn narrow<T: Bounded, V: Widen>(value: V, arg: &str) -> Result<T> {
    let wide = value.widen();
    if wide < 0 || !wide_le(value, T::MAX) {
        return Err(range_error::<T>(arg));
    }
    Ok(T::from_checked(wide))
}

/// Convert a host index to `u32`
pub fn index_as_u32(x: Index, arg: &str) -> Result<u32> {
    narrow::<u32, _>(x, arg)
}

/// Widen a `u32` to a host index
pub fn u32_as_index(x: u32) -> Index {
    x as Index
}

/// Convert a double holding a whole number to `u32`
///
/// Checks run in order: missing (NaN), range, then fractional part.
pub fn dbl_as_u32(x: f64, arg: &str) -> Result<u32> {
    if x.is_nan() {
        return Err(ConversionError::missing(arg));
    }
    if x > f64::from(u32::MAX) || x < 0.0 {
        return Err(range_error::<u32>(arg));
    }
    if x.floor() != x {
        return Err(ConversionError::not_whole_number(arg));
    }
    Ok(x as u32)
}

/// Widen a `u32` to a double (exact)
pub fn u32_as_dbl(x: u32) -> f64 {
    f64::from(x)
}

/// Convert a `u32` to a C `int`
///
/// The lower bound can't be violated by an unsigned source, but `narrow`
/// checks it anyway on the widened value.
pub fn u32_as_int(x: u32, arg: &str) -> Result<CInt> {
    narrow::<CInt, _>(x, arg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use rand::Rng;

    #[test]
    fn test_index_as_u32_bounds() {
        assert_eq!(index_as_u32(0, "x"), Ok(0));
        assert_eq!(index_as_u32(u32::MAX as Index, "x"), Ok(u32::MAX));
        assert_eq!(index_as_u32(-1, "x").unwrap_err().kind(), ErrorKind::Range);
        assert_eq!(
            index_as_u32(u32::MAX as Index + 1, "x").unwrap_err().kind(),
            ErrorKind::Range
        );
        assert_eq!(
            index_as_u32(Index::MIN, "x").unwrap_err().kind(),
            ErrorKind::Range
        );
    }

    #[test]
    fn test_index_as_u32_error_names_arg() {
        let err = index_as_u32(-5, "start").unwrap_err();
        assert_eq!(
            err,
            ConversionError::out_of_range("start", "u32", "UINT32_MAX", 4_294_967_295)
        );
    }

    #[test]
    fn test_index_round_trip_sampled() {
        let mut rng = rand::thread_rng();
        for _ in 0..10_000 {
            let v: Index = rng.gen_range(0..=u32::MAX as Index);
            let narrowed = index_as_u32(v, "x").unwrap();
            assert_eq!(u32_as_index(narrowed), v);
        }
    }

    #[test]
    fn test_index_out_of_range_sampled() {
        let mut rng = rand::thread_rng();
        for _ in 0..10_000 {
            let below: Index = rng.gen_range(Index::MIN..0);
            assert!(index_as_u32(below, "x").is_err());
            let above: Index = rng.gen_range(u32::MAX as Index + 1..=Index::MAX);
            assert!(index_as_u32(above, "x").is_err());
        }
    }

    #[test]
    fn test_dbl_as_u32_whole_numbers() {
        assert_eq!(dbl_as_u32(0.0, "x"), Ok(0));
        assert_eq!(dbl_as_u32(-0.0, "x"), Ok(0));
        assert_eq!(dbl_as_u32(42.0, "x"), Ok(42));
        assert_eq!(dbl_as_u32(4_294_967_295.0, "x"), Ok(u32::MAX));
    }

    #[test]
    fn test_dbl_as_u32_nan_is_missing() {
        assert_eq!(
            dbl_as_u32(f64::NAN, "x"),
            Err(ConversionError::missing("x"))
        );
    }

    #[test]
    fn test_dbl_as_u32_out_of_range() {
        for x in [-1.0, 4_294_967_296.0, f64::INFINITY, f64::NEG_INFINITY, -0.5] {
            assert_eq!(
                dbl_as_u32(x, "x").unwrap_err().kind(),
                ErrorKind::Range,
                "{x}"
            );
        }
    }

    #[test]
    fn test_dbl_as_u32_fractional() {
        assert_eq!(
            dbl_as_u32(3.5, "x"),
            Err(ConversionError::not_whole_number("x"))
        );
        assert_eq!(
            dbl_as_u32(0.25, "x").unwrap_err().kind(),
            ErrorKind::NotWholeNumber
        );
    }

    #[test]
    fn test_dbl_check_order_range_before_fraction() {
        // Both out of range and fractional: range wins
        assert_eq!(
            dbl_as_u32(4_294_967_295.5, "x").unwrap_err().kind(),
            ErrorKind::Range
        );
    }

    #[test]
    fn test_dbl_round_trip_sampled() {
        let mut rng = rand::thread_rng();
        for _ in 0..10_000 {
            let v: u32 = rng.r#gen();
            assert_eq!(dbl_as_u32(u32_as_dbl(v), "x"), Ok(v));
        }
    }

    #[test]
    fn test_u32_as_int() {
        assert_eq!(u32_as_int(0, "n"), Ok(0));
        assert_eq!(u32_as_int(CInt::MAX as u32, "n"), Ok(CInt::MAX));
        let err = u32_as_int(CInt::MAX as u32 + 1, "n").unwrap_err();
        assert_eq!(
            err,
            ConversionError::out_of_range("n", "int", "INT_MAX", CInt::MAX as u64)
        );
        assert!(u32_as_int(u32::MAX, "n").is_err());
    }

    #[test]
    fn test_narrow_generic_u16() {
        assert_eq!(narrow::<u16, _>(65_535i32, "v"), Ok(u16::MAX));
        assert!(narrow::<u16, _>(65_536i32, "v").is_err());
        assert!(narrow::<u16, _>(-1i64, "v").is_err());
        assert_eq!(narrow::<u16, _>(7u64, "v"), Ok(7));
    }
}
