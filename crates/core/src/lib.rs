//! Hostbridge Core: checked conversions at a host/native value boundary
//!
//! A dynamically-typed host hands values to a fixed-width native ABI and gets
//! values back. This crate holds the pure checks that guard that crossing:
//! nothing here touches thread-local state or performs I/O.
//!
//! # Modules
//!
//! - `error`: Structured `ConversionError` and its `ErrorKind`
//! - `widen`: Lossless widening used for every cross-width comparison
//! - `convert`: Index, double, `u32` and `int` conversions
//! - `ids`: Symbol, field and state id newtypes over `u16`
//! - `strings`: Nul-terminated and sized string equality

pub mod convert;
pub mod error;
pub mod ids;
pub mod strings;
pub mod widen;

// Re-export key types and functions
pub use convert::{
    Bounded, CInt, Index, dbl_as_u32, index_as_u32, narrow, range_error, u32_as_dbl, u32_as_index,
    u32_as_int,
};
pub use error::{ConversionError, ErrorKind, Result};
pub use ids::{FieldId, NativeId, StateId, SymbolId};
pub use strings::{str_equal, str_equal_raw, str_equal_sized, str_equal_sized_raw};
pub use widen::{Widen, wide_le};
