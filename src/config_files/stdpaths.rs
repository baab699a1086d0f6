//! Application directories under the XDG base directories.
//!
//! [`StdPaths`] appends the application name to a base directory from
//! [`xdg`](crate::config_files::xdg), and builds file paths below it.
//!
//! ```rust
//! use stdpaths::config_files::stdpaths::{HomeKind, StdPaths};
//! use stdpaths::os::{env::Env, platform::Platform};
//!
//! let env: Env = [("HOME", "/home/user")].into_iter().collect();
//! let paths = StdPaths::new(&env, "nvim").with_platform(Platform::Unix);
//!
//! assert_eq!(paths.home(HomeKind::Config).as_deref(), Some("/home/user/.config/nvim"));
//! assert_eq!(paths.user_conf_subpath("init.lua"), "/home/user/.config/nvim/init.lua");
//! assert_eq!(
//!     paths.user_data_subpath("swap", 2, false),
//!     "/home/user/.local/share/nvim/swap//",
//! );
//! ```

use tracing::warn;

use crate::config_files::xdg::{self, BaseDirKind};
use crate::fs::concat_fnames;
use crate::os::{env::Env, platform::Platform};

/// Base directories that hold a per-application home.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum HomeKind {
    /// Below `$XDG_CONFIG_HOME`.
    Config,
    /// Below `$XDG_DATA_HOME`.
    Data,
    /// Below `$XDG_STATE_HOME`.
    State,
}

impl From<HomeKind> for BaseDirKind {
    fn from(kind: HomeKind) -> Self {
        match kind {
            HomeKind::Config => BaseDirKind::ConfigHome,
            HomeKind::Data => BaseDirKind::DataHome,
            HomeKind::State => BaseDirKind::StateHome,
        }
    }
}

/// Resolves the directories of one application.
///
/// Nothing is cached: every call re-reads `env`.
#[derive(Debug, Clone)]
pub struct StdPaths<'a> {
    env: &'a Env,
    app_name: String,
    app_name_var: Option<String>,
    platform: Platform,
}

impl<'a> StdPaths<'a> {
    /// Directories of `app_name`, resolved through `env` on the current platform.
    pub fn new(env: &'a Env, app_name: impl Into<String>) -> Self {
        Self {
            env,
            app_name: app_name.into(),
            app_name_var: None,
            platform: Platform::current(),
        }
    }

    /// Follow the conventions of `platform` instead of the current one.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Let environmental variable `var`, when set to a non-empty value, replace the
    /// application name.
    ///
    /// ```rust
    /// use stdpaths::config_files::stdpaths::StdPaths;
    /// use stdpaths::os::env::Env;
    ///
    /// let env: Env = [("NVIM_APPNAME", "nvim-minimal")].into_iter().collect();
    /// let paths = StdPaths::new(&env, "nvim").with_app_name_var("NVIM_APPNAME");
    /// assert_eq!(paths.app_name(), "nvim-minimal");
    /// ```
    pub fn with_app_name_var(mut self, var: impl Into<String>) -> Self {
        self.app_name_var = Some(var.into());
        self
    }

    /// Platform whose conventions are followed, see [`StdPaths::with_platform`].
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Effective application name.
    pub fn app_name(&self) -> &str {
        self.app_name_var
            .as_deref()
            .and_then(|var| self.env.get(var).ok())
            .filter(|name| !name.is_empty())
            .unwrap_or(self.app_name.as_str())
    }

    /// Name of the application directory below `kind`.
    ///
    /// On Windows config, data and state all default to `%LOCALAPPDATA%`, so data lives in
    /// `{app}-data` to stay apart from config. State shares the data directory there.
    fn app_dir_name(&self, kind: HomeKind) -> String {
        let app_name = self.app_name();
        match (self.platform, kind) {
            (Platform::Windows, HomeKind::Data | HomeKind::State) => format!("{app_name}-data"),
            _ => app_name.to_owned(),
        }
    }

    /// Get `{base}/{app}` for the base directory of `kind`.
    ///
    /// # Returns
    ///
    /// [`None`] if the base directory is unknown, `Some("")` if it was explicitly set to the
    /// empty string. No directory name is appended to either.
    pub fn home(&self, kind: HomeKind) -> Option<String> {
        let base = xdg::var_for(self.env, kind.into(), self.platform)?;
        if base.is_empty() {
            return Some(base);
        }
        Some(concat_fnames(&base, &self.app_dir_name(kind), self.platform))
    }

    /// Get `{home}/{component}` for [`StdPaths::home`] of `kind`.
    ///
    /// If `escape_list_separator` is set, every `,` is escaped with a backslash so the result
    /// can be stored as one entry of a comma-separated option. Then `trailing_separators` path
    /// separators are appended, and those are never escaped.
    ///
    /// Without a home directory, the result is `component` on its own.
    pub fn subpath(
        &self,
        kind: HomeKind,
        component: &str,
        trailing_separators: usize,
        escape_list_separator: bool,
    ) -> String {
        let home = self.home(kind).unwrap_or_else(|| {
            warn!(?kind, app = self.app_name(), "no home directory, using a relative path");
            String::new()
        });
        let joined = concat_fnames(&home, component, self.platform);
        let mut path = if escape_list_separator {
            super::escape_list_separator(&joined)
        } else {
            joined
        };
        path.reserve_exact(trailing_separators);
        path.extend(std::iter::repeat_n(self.platform.path_separator(), trailing_separators));
        path
    }

    /// Get `{config home}/{fname}`.
    pub fn user_conf_subpath(&self, fname: &str) -> String {
        self.subpath(HomeKind::Config, fname, 0, false)
    }

    /// Get `{data home}/{fname}`, with [`StdPaths::subpath`] options.
    pub fn user_data_subpath(
        &self,
        fname: &str,
        trailing_separators: usize,
        escape_list_separator: bool,
    ) -> String {
        self.subpath(HomeKind::Data, fname, trailing_separators, escape_list_separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config_files::escape_list_separator;
    use claim::{assert_none, assert_some, assert_some_eq};
    use tempfile::Builder;

    fn env(vars: &[(&str, &str)]) -> Env {
        vars.iter().copied().collect()
    }

    #[test]
    fn unix_homes() {
        let env = env(&[("HOME", "/home/u")]);
        let paths = StdPaths::new(&env, "nvim").with_platform(Platform::Unix);
        assert_some_eq!(paths.home(HomeKind::Config), "/home/u/.config/nvim");
        assert_some_eq!(paths.home(HomeKind::Data), "/home/u/.local/share/nvim");
        assert_some_eq!(paths.home(HomeKind::State), "/home/u/.local/state/nvim");
    }

    #[test]
    fn windows_config_and_data_differ() {
        let env = env(&[("LOCALAPPDATA", r"C:\Users\u\AppData\Local")]);
        let paths = StdPaths::new(&env, "nvim").with_platform(Platform::Windows);
        let config = assert_some!(paths.home(HomeKind::Config));
        let data = assert_some!(paths.home(HomeKind::Data));
        assert_eq!(config, r"C:\Users\u\AppData\Local\nvim");
        assert_eq!(data, r"C:\Users\u\AppData\Local\nvim-data");
        assert_ne!(config, data);
    }

    #[test]
    fn unix_data_name_has_no_suffix() {
        let env = env(&[("XDG_CONFIG_HOME", "/x"), ("XDG_DATA_HOME", "/x")]);
        let paths = StdPaths::new(&env, "nvim").with_platform(Platform::Unix);
        assert_some_eq!(paths.home(HomeKind::Config), "/x/nvim");
        assert_some_eq!(paths.home(HomeKind::Data), "/x/nvim");
    }

    #[test]
    fn empty_base_stays_empty() {
        let env = env(&[("HOME", "/home/u"), ("XDG_CONFIG_HOME", "")]);
        let paths = StdPaths::new(&env, "nvim").with_platform(Platform::Unix);
        assert_some_eq!(paths.home(HomeKind::Config), "");
        assert_eq!(paths.user_conf_subpath("init.lua"), "init.lua");
    }

    #[cfg(unix)]
    #[test]
    fn missing_base_is_absent() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;
        let env: Env = [(OsString::from("HOME"), OsString::from_vec(vec![b'/', 0xff]))]
            .into_iter()
            .collect();
        let paths = StdPaths::new(&env, "nvim").with_platform(Platform::Unix);
        assert_none!(paths.home(HomeKind::Config));
        assert_eq!(paths.subpath(HomeKind::Config, "init.lua", 1, false), "init.lua/");
    }

    #[test]
    fn base_with_trailing_separator() {
        let env = env(&[("XDG_DATA_HOME", "/data/")]);
        let paths = StdPaths::new(&env, "nvim").with_platform(Platform::Unix);
        assert_some_eq!(paths.home(HomeKind::Data), "/data/nvim");
    }

    #[test]
    fn escape_and_trailing_separator() {
        let env = env(&[("XDG_DATA_HOME", "/data")]);
        let paths = StdPaths::new(&env, "nvim").with_platform(Platform::Unix);
        let home = assert_some!(paths.home(HomeKind::Data));
        let joined = concat_fnames(&home, "a,b.txt", Platform::Unix);

        let path = paths.subpath(HomeKind::Data, "a,b.txt", 1, true);
        assert_eq!(path, r"/data/nvim/a\,b.txt/");
        assert_eq!(path.len(), joined.len() + 1 + 1);
    }

    #[test]
    fn no_escape_requested() {
        let env = env(&[("XDG_DATA_HOME", "/da,ta")]);
        let paths = StdPaths::new(&env, "nvim").with_platform(Platform::Unix);
        assert_eq!(paths.user_data_subpath("a,b", 0, false), "/da,ta/nvim/a,b");
        assert_eq!(paths.user_data_subpath("a,b", 0, true), r"/da\,ta/nvim/a\,b");
    }

    #[test]
    fn windows_trailing_separators() {
        let env = env(&[("XDG_DATA_HOME", r"D:\data")]);
        let paths = StdPaths::new(&env, "nvim").with_platform(Platform::Windows);
        assert_eq!(paths.user_data_subpath("undo", 2, true), r"D:\data\nvim-data\undo\\");
    }

    #[test]
    fn platform_defaults_to_current() {
        let env = env(&[]);
        assert_eq!(StdPaths::new(&env, "nvim").platform(), Platform::current());
        let paths = StdPaths::new(&env, "nvim").with_platform(Platform::Windows);
        assert_eq!(paths.platform(), Platform::Windows);
    }

    #[test]
    fn app_name_override() {
        let env = env(&[("HOME", "/home/u"), ("APPNAME", "other")]);
        let paths = StdPaths::new(&env, "nvim")
            .with_platform(Platform::Unix)
            .with_app_name_var("APPNAME");
        assert_eq!(paths.user_conf_subpath("init.lua"), "/home/u/.config/other/init.lua");

        let env = self::env(&[("HOME", "/home/u"), ("APPNAME", "")]);
        let paths = StdPaths::new(&env, "nvim").with_app_name_var("APPNAME");
        assert_eq!(paths.app_name(), "nvim");
    }

    #[test]
    fn comma_in_real_home() {
        let home = Builder::new().prefix("home,").tempdir().expect("needed for tests");
        let home = home.path().to_str().expect("tempdir is UTF-8");
        let env = env(&[("HOME", home)]);
        let paths = StdPaths::new(&env, "nvim").with_platform(Platform::Unix);

        let path = paths.user_data_subpath("site", 1, true);
        assert_eq!(path, format!("{}/.local/share/nvim/site/", escape_list_separator(home)));
        assert!(path.contains(r"home\,"));
        assert_eq!(path.matches(',').count(), path.matches(r"\,").count());
    }
}
