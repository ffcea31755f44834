mod types;

pub use types::{ProfileError, Result};
