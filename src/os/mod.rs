//! OS-level primitives: environment snapshots and platform conventions.

pub mod env;
pub mod platform;
