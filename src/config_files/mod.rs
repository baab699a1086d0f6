//! Configuration file utilities and standard directory paths.
//!
//! Provides helpers for locating configuration and data files following the XDG Base
//! Directory convention.
//!
//! ```rust,no_run
//! # use stdpaths::config_files::{stdpaths::{HomeKind, StdPaths}, xdg::{self, BaseDirKind}};
//! # use stdpaths::os::env::Env;
//! # fn foo() -> Option<()> {
//! let env = Env::new();
//!
//! let config_dirs = xdg::var(&env, BaseDirKind::ConfigDirs)?;
//! let init = StdPaths::new(&env, "nvim").user_conf_subpath("init.lua");
//! let undo = StdPaths::new(&env, "nvim").subpath(HomeKind::Data, "undo", 2, true);
//! # None
//! # }
//! ```

use std::{env::home_dir, path::PathBuf};

use crate::os::{env::Env, platform::Platform};

pub mod list;
pub mod stdpaths;
pub mod xdg;

/// User home directory as seen through `env`.
///
/// Consults `$HOME`, then `%USERPROFILE%` on Windows. If neither is set to a non-empty value,
/// falls back to [`std::env::home_dir`], but only when `platform` is
/// [`Platform::current`]: the host's home means nothing under another platform's conventions.
pub fn home(env: &Env, platform: Platform) -> Option<PathBuf> {
    let vars: &[&str] = match platform {
        Platform::Unix => &["HOME"],
        Platform::Windows => &["HOME", "USERPROFILE"],
    };
    vars.iter()
        .filter_map(|var| env.get_os(var))
        .find(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(|| (platform == Platform::current()).then(home_dir).flatten())
}

/// Expand a default template: `$VAR` and `${VAR}` are substituted from `env`, then a leading
/// `~` becomes [`home`]. Unknown variables are left as is, and the home directory itself is
/// never expanded.
///
/// # Returns
/// [`None`] if the template starts with `~` but no UTF-8 home directory can be found.
///
/// # Examples
///
/// ```rust
/// use stdpaths::config_files::expand_template;
/// use stdpaths::os::{env::Env, platform::Platform};
///
/// let env: Env = [("HOME", "/home/user"), ("APP", "nvim")].into_iter().collect();
/// assert_eq!(
///     expand_template("~/.config/$APP", &env, Platform::Unix).as_deref(),
///     Some("/home/user/.config/nvim"),
/// );
/// assert_eq!(expand_template("/etc/xdg/", &env, Platform::Unix).as_deref(), Some("/etc/xdg/"));
/// ```
pub fn expand_template(template: &str, env: &Env, platform: Platform) -> Option<String> {
    let expand_vars = |input: &str| {
        shellexpand::env_with_context_no_errors(input, |name: &str| env.get(name).ok())
            .into_owned()
    };
    let is_separator = |c: char| platform.is_path_separator(c);
    match template.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with(is_separator) => {
            let home = home(env, platform)?;
            let home = home.to_str()?;
            if rest.is_empty() {
                return Some(home.to_owned());
            }
            let home = home.trim_end_matches(is_separator);
            Some(format!("{home}{}", expand_vars(rest)))
        }
        _ => Some(expand_vars(template)),
    }
}

/// Escape every `,` in `path` with a preceding backslash, so it can be stored as one entry of a
/// comma-separated list.
///
/// ```rust
/// use stdpaths::config_files::escape_list_separator;
///
/// assert_eq!(escape_list_separator("a,b,,c"), r"a\,b\,\,c");
/// assert_eq!(escape_list_separator("abc"), "abc");
/// ```
pub fn escape_list_separator(path: &str) -> String {
    let mut escaped = String::with_capacity(path.len() + path.matches(',').count());
    for c in path.chars() {
        if c == ',' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
