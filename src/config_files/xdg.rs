//! XDG Base Directory Specification support.
//!
//! Implements cross-platform resolution of the XDG base directory variables, with fallbacks
//! for Windows, which lacks native equivalents of most of them.

use std::fmt;

use tracing::{debug, warn};

use crate::config_files::{expand_template, list};
use crate::os::{env::Env, env::EnvStrError, platform::Platform};

/// Base directory, named after the XDG variable holding it.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum BaseDirKind {
    /// `$XDG_CONFIG_HOME`.
    ConfigHome,
    /// `$XDG_DATA_HOME`.
    DataHome,
    /// `$XDG_STATE_HOME`.
    StateHome,
    /// `$XDG_CACHE_HOME`.
    CacheHome,
    /// `$XDG_RUNTIME_DIR`. Has no default on any platform.
    RuntimeDir,
    /// `$XDG_CONFIG_DIRS`, a directory list.
    ConfigDirs,
    /// `$XDG_DATA_DIRS`, a directory list.
    DataDirs,
}

impl BaseDirKind {
    /// Every kind, in declaration order.
    pub const ALL: [BaseDirKind; 7] = [
        Self::ConfigHome,
        Self::DataHome,
        Self::StateHome,
        Self::CacheHome,
        Self::RuntimeDir,
        Self::ConfigDirs,
        Self::DataDirs,
    ];

    /// Name of the XDG environment variable for `self`.
    pub const fn env_var(self) -> &'static str {
        match self {
            Self::ConfigHome => "XDG_CONFIG_HOME",
            Self::DataHome => "XDG_DATA_HOME",
            Self::StateHome => "XDG_STATE_HOME",
            Self::CacheHome => "XDG_CACHE_HOME",
            Self::RuntimeDir => "XDG_RUNTIME_DIR",
            Self::ConfigDirs => "XDG_CONFIG_DIRS",
            Self::DataDirs => "XDG_DATA_DIRS",
        }
    }

    /// Whether the value is a separator-delimited directory list rather than a single path.
    pub const fn is_list(self) -> bool {
        matches!(self, Self::ConfigDirs | Self::DataDirs)
    }
}

impl fmt::Display for BaseDirKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.env_var())
    }
}

/// Where the value of a [`BaseDirKind`] comes from on a given platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariableSpec {
    /// XDG variable, always consulted first.
    pub env_var: &'static str,
    /// Platform variable consulted if `env_var` is unset.
    pub fallback_var: Option<&'static str>,
    /// Template used if neither variable applies. May start with `~`.
    pub default: Option<&'static str>,
}

impl VariableSpec {
    const fn new(
        kind: BaseDirKind,
        fallback_var: Option<&'static str>,
        default: Option<&'static str>,
    ) -> Self {
        Self {
            env_var: kind.env_var(),
            fallback_var,
            default,
        }
    }

    /// Look up the compiled-in spec of `kind` on `platform`.
    pub const fn lookup(kind: BaseDirKind, platform: Platform) -> Self {
        use BaseDirKind::*;
        match platform {
            Platform::Unix => match kind {
                ConfigHome => Self::new(kind, None, Some("~/.config")),
                DataHome => Self::new(kind, None, Some("~/.local/share")),
                StateHome => Self::new(kind, None, Some("~/.local/state")),
                CacheHome => Self::new(kind, None, Some("~/.cache")),
                RuntimeDir => Self::new(kind, None, None),
                ConfigDirs => Self::new(kind, None, Some("/etc/xdg/")),
                DataDirs => Self::new(kind, None, Some("/usr/local/share/:/usr/share/")),
            },
            Platform::Windows => match kind {
                ConfigHome | DataHome | StateHome => {
                    Self::new(kind, Some("LOCALAPPDATA"), Some(r"~\AppData\Local"))
                }
                CacheHome => Self::new(kind, Some("TEMP"), Some(r"~\AppData\Local\Temp")),
                RuntimeDir | ConfigDirs | DataDirs => Self::new(kind, None, None),
            },
        }
    }
}

/// Get the value of `kind` on the current platform.
///
/// See [`var_for`].
pub fn var(env: &Env, kind: BaseDirKind) -> Option<String> {
    var_for(env, kind, Platform::current())
}

/// Get the value of `kind`, following the conventions of `platform`.
///
/// Resolution order:
///     1. The XDG variable, if set. An empty value is returned as is, it never falls through.
///     2. The platform fallback variable, if there is one and it is set to a non-empty value.
///     3. The default template, with `~` and `$VAR` expanded through `env`.
///
/// Directory lists are then deduplicated with [`list::dedup`]. A fallback variable that isn't
/// UTF-8 is skipped as if unset.
///
/// # Returns
///
/// [`None`] if none of the above applies, e.g. for [`BaseDirKind::RuntimeDir`] without
/// `$XDG_RUNTIME_DIR`, or for a home-relative default when there is no home directory. Also
/// [`None`] if the XDG variable is set but isn't UTF-8: an explicit override never falls
/// through to a default.
///
/// # Examples
///
/// ```rust
/// use stdpaths::config_files::xdg::{var_for, BaseDirKind};
/// use stdpaths::os::{env::Env, platform::Platform};
///
/// let env: Env = [
///     ("HOME", "/home/user"),
///     ("XDG_CACHE_HOME", ""),
///     ("XDG_DATA_DIRS", "/usr/share:/opt/share:/usr/share"),
/// ]
/// .into_iter()
/// .collect();
///
/// let var = |kind| var_for(&env, kind, Platform::Unix);
/// assert_eq!(var(BaseDirKind::ConfigHome).as_deref(), Some("/home/user/.config"));
/// assert_eq!(var(BaseDirKind::CacheHome).as_deref(), Some(""));
/// assert_eq!(var(BaseDirKind::DataDirs).as_deref(), Some("/usr/share:/opt/share"));
/// assert_eq!(var(BaseDirKind::RuntimeDir), None);
/// ```
pub fn var_for(env: &Env, kind: BaseDirKind, platform: Platform) -> Option<String> {
    let spec = VariableSpec::lookup(kind, platform);

    let value = match env.get(spec.env_var) {
        Ok(value) => {
            debug!(%kind, source = "env", "resolved base directory");
            Some(value.to_owned())
        }
        Err(err @ EnvStrError::NonUTF8(_)) => {
            warn!(%err, "ignoring explicit override, it is not UTF-8");
            None
        }
        Err(EnvStrError::Missing(_)) => fallback(env, kind, spec, platform),
    };

    if kind.is_list() {
        value.map(|value| list::dedup(&value, platform.list_separator()))
    } else {
        value
    }
}

/// Value of `kind` when its XDG variable is unset.
fn fallback(
    env: &Env,
    kind: BaseDirKind,
    spec: VariableSpec,
    platform: Platform,
) -> Option<String> {
    if let Some(value) = spec
        .fallback_var
        .and_then(|var| lookup(env, var))
        .filter(|value| !value.is_empty())
    {
        debug!(%kind, source = "fallback", "resolved base directory");
        Some(value.to_owned())
    } else if let Some(template) = spec.default {
        let expanded = expand_template(template, env, platform);
        match expanded {
            Some(_) => debug!(%kind, source = "default", "resolved base directory"),
            None => warn!(%kind, template, "no home directory to expand default"),
        }
        expanded
    } else {
        debug!(%kind, source = "none", "base directory is not set");
        None
    }
}

fn lookup<'a>(env: &'a Env, var: &str) -> Option<&'a str> {
    match env.get(var) {
        Ok(value) => Some(value),
        Err(EnvStrError::Missing(_)) => None,
        Err(err @ EnvStrError::NonUTF8(_)) => {
            warn!(%err, "ignoring environmental variable");
            None
        }
    }
}
