//! Barrel-partitioned inverted index storage

mod buffer;
mod codec;
mod manager;
mod store;

pub use buffer::*;
pub use codec::*;
pub use manager::*;
pub use store::*;
