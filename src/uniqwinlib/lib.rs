mod hex;
mod search;

pub use hex::{parse_hex, HexBytes};
pub use search::{find_unique, find_window};
