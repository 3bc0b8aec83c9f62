pub mod codec;
pub mod store;

pub use store::Storage;
