//! Line formatting — pure functions over a caller-supplied buffer, so the
//! writer can hold its lock without any formatting state of its own.

mod header;
mod pad;

pub use header::{format_header, push_message};
pub use pad::push_decimal;
