//! In-memory evaluation of the bit-test query operators.
//!
//! Reproduces the server's `$bitsAllClear`, `$bitsAllSet`, `$bitsAnyClear`
//! and `$bitsAnySet` semantics over integer and binary field values without
//! a round trip to the database.

mod bits;
mod decode;
mod dispatch;

pub use bits::{BITS_ALL_CLEAR, BITS_ALL_SET, BITS_ANY_CLEAR, BITS_ANY_SET, BitTest};
pub use decode::decode_binary;
pub use dispatch::{evaluator, matches};
