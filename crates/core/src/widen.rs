//! Lossless widening for cross-width comparisons
//!
//! The host index type is pointer-sized, so depending on the platform it is
//! narrower or wider than `u32`. A directional cast between the two is never
//! safe in both directions. Instead, every operand is widened into `i128`,
//! which holds every value of every integer type used at the boundary, and the
//! comparison happens there.

/// An integer that widens into `i128` without loss
pub trait Widen: Copy {
    fn widen(self) -> i128;
}

macro_rules! impl_widen_from {
    ($($t:ty),* $(,)?) => {
        $(
            impl Widen for $t {
                #[inline]
                fn widen(self) -> i128 {
                    i128::from(self)
                }
            }
        )*
    };
}

impl_widen_from!(i8, i16, i32, i64, u8, u16, u32, u64);

// Pointer-sized integers have no `From` impl into i128. Pointer widths are at
// most 64 bits, so the sign-extending cast is exact.
impl Widen for isize {
    #[inline]
    fn widen(self) -> i128 {
        self as i128
    }
}

impl Widen for usize {
    #[inline]
    fn widen(self) -> i128 {
        self as i128
    }
}

/// Compare two integers of any width as mathematical integers
#[inline]
pub fn wide_le<A: Widen, B: Widen>(a: A, b: B) -> bool {
    a.widen() <= b.widen()
}
