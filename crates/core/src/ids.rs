//! 16-bit native identifier domains
//!
//! The native ABI uses `u16` for symbol ids, field ids and parse state ids.
//! They share a representation but mean different things, so each gets its own
//! newtype. Moving a value from one domain to another requires an explicit
//! `from_raw(other.raw())`.

use crate::convert::{Bounded, CInt, narrow};
use crate::error::Result;
use serde::Serialize;
use std::fmt;

/// Common surface of the identifier newtypes
pub trait NativeId: Bounded + Copy {
    /// Wrap a raw `u16` (every `u16` is a valid identifier)
    fn from_raw(raw: u16) -> Self;

    /// The raw `u16`
    fn raw(self) -> u16;

    /// Convert a host `int`, failing outside `[0, UINT16_MAX]`
    fn from_int(x: CInt, arg: &str) -> Result<Self> {
        narrow::<Self, _>(x, arg)
    }

    /// Widen to a host `int`
    fn to_int(self) -> CInt {
        CInt::from(self.raw())
    }
}

macro_rules! define_native_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        #[serde(transparent)]
        #[repr(transparent)]
        pub struct $name(u16);

        impl Bounded for $name {
            const NAME: &'static str = stringify!($name);
            const BOUND: &'static str = "UINT16_MAX";
            const MAX: u64 = u16::MAX as u64;

            fn from_checked(wide: i128) -> Self {
                $name(wide as u16)
            }
        }

        impl NativeId for $name {
            fn from_raw(raw: u16) -> Self {
                $name(raw)
            }

            fn raw(self) -> u16 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_native_id!(
    /// Grammar symbol id
    SymbolId
);

define_native_id!(
    /// Grammar field id
    FieldId
);

define_native_id!(
    /// Parse table state id
    StateId
);
