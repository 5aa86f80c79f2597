//! Utility functions

pub mod align;
pub mod byte_buffer;

pub use align::{pad_binary, pad_json, round_up};
pub use byte_buffer::ByteBuffer;
