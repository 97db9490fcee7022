//! Snapshot and sprite I/O (PNG).

mod codec;

pub use codec::{decode_png, read_png, PngEncoder};
