mod core;

pub use core::{ZoneKind, ZoneRegistry};
