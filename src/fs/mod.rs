//! Path string utilities.
//!
//! Resolved base directories are plain strings rather than [`Path`](std::path::Path)s: they
//! may be directory lists, and are escaped for embedding into comma-separated option values.
//! [`concat_fnames`] joins them with the separator of an explicit [`Platform`](crate::os::platform::Platform).

mod concat;

pub use concat::{concat_fnames, ends_with_separator};
