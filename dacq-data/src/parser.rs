mod hex;
mod numeric;

pub use hex::hex_bytes;
pub use numeric::{integer, real};
