//! Binary file storage.

mod local;

pub use local::LocalImageStore;
