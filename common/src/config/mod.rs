mod source;
mod store;
mod validate;

pub use source::{ConfigSource, FileConfigSource, MemoryConfigSource};
pub use store::{ConfigStore, from_yaml, to_yaml};
pub use validate::Validate;
