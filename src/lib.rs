//! Stdpaths - XDG base directory resolution.
//!
//! This crate resolves configuration, data, state, cache and runtime directories following the
//! XDG Base Directory convention, with Windows fallbacks, and builds application paths below
//! them. Resolution reads an [`Env`](os::env::Env) snapshot and never touches the filesystem.
//! The only other input is the host's home directory lookup, used when the snapshot has no home
//! variable and paths are resolved for the current platform.

pub mod config_files;
pub mod fs;
pub mod os;
