use std::collections::HashMap;
use std::ffi::{OsStr, OsString};

use thiserror::Error;

/// Owned snapshot of the process environment.
///
/// Lookups fall back to a case-insensitive match on Windows, whose environmental variables are
/// case-insensitive. A variable set to the empty string is still *set*: [`Env::get_os`] returns
/// `Some("")` for it, which base directory resolution treats as a deliberate override.
///
/// The snapshot never writes to the process environment, and later changes to the process
/// environment are only observed after [`Env::reload`].
#[derive(Debug, Clone)]
pub struct Env {
    keys: HashMap<OsString, OsString>,

    normalised_keys: HashMap<OsString, OsString>,
}

/// Errors encountered when getting environmental variable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvStrError {
    /// Variable `Missing.0` is not set.
    #[error("there is no environmental variable `${0:?}`")]
    Missing(OsString),

    /// Variable `NonUTF8.0` is set, but its value is not an UTF-8 string.
    #[error("environmental variable `${0:?}` is not an UTF-8 string")]
    NonUTF8(OsString),
}

impl Env {
    /// Snapshot the current process environment.
    pub fn new() -> Self {
        Self::new_from(std::env::vars_os().collect())
    }

    /// Create new [`Env`] using `env` as existing environmental variables.
    pub fn new_from(env: HashMap<OsString, OsString>) -> Self {
        Self {
            normalised_keys: Env::normalize_map(&env),
            keys: env,
        }
    }

    fn normalize_key(key: impl AsRef<OsStr>) -> OsString {
        key.as_ref().to_ascii_uppercase()
    }

    fn normalize_map(keys: &HashMap<OsString, OsString>) -> HashMap<OsString, OsString> {
        keys.iter()
            .map(|(key, value)| (Env::normalize_key(key), value.clone()))
            .collect()
    }

    /// Replace the snapshot with `env`.
    pub fn reload_from(&mut self, env: HashMap<OsString, OsString>) {
        self.normalised_keys = Env::normalize_map(&env);
        self.keys = env;
    }

    /// Replace the snapshot with the current process environment.
    pub fn reload(&mut self) {
        self.reload_from(std::env::vars_os().collect())
    }

    /// Get environmental variable pointed by `key`.
    ///
    /// # Returns
    /// `None` if `key` is not set, `Some` otherwise. `Some("")` means the variable is set to
    /// the empty string.
    ///
    /// # Examples
    /// ```rust
    /// use std::ffi::OsStr;
    /// use stdpaths::os::env::Env;
    ///
    /// let env: Env = [("XDG_CONFIG_HOME", "")].into_iter().collect();
    /// assert_eq!(env.get_os("XDG_CONFIG_HOME"), Some(OsStr::new("")));
    /// assert_eq!(env.get_os("XDG_DATA_HOME"), None);
    /// ```
    pub fn get_os(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        let key = key.as_ref();
        match self.keys.get(key) {
            Some(x) => Some(x),
            None => {
                if cfg!(target_os = "windows") {
                    self.normalised_keys
                        .get(&Env::normalize_key(key))
                        .map(|x| x.as_ref())
                } else {
                    None
                }
            }
        }
    }

    /// Whether `key` is set, possibly to the empty string.
    pub fn contains(&self, key: impl AsRef<OsStr>) -> bool {
        self.get_os(key).is_some()
    }

    /// Get environmental variable pointed by `key` and convert it to UTF-8.
    ///
    /// # Returns
    /// `Ok` for a set UTF-8 variable, even an empty one. See [`EnvStrError`] for the failure
    /// cases.
    ///
    /// # Examples
    /// ```rust
    /// use stdpaths::os::env::{Env, EnvStrError};
    ///
    /// let env: Env = [("HOME", "/home/user")].into_iter().collect();
    /// assert_eq!(env.get("HOME"), Ok("/home/user"));
    /// assert!(matches!(env.get("TEMP"), Err(EnvStrError::Missing(_))));
    /// ```
    pub fn get(&self, key: impl AsRef<OsStr>) -> Result<&str, EnvStrError> {
        let key = key.as_ref();
        self.get_os(key)
            .ok_or_else(|| EnvStrError::Missing(key.to_os_string()))?
            .to_str()
            .ok_or_else(|| EnvStrError::NonUTF8(key.to_os_string()))
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> FromIterator<(K, V)> for Env
where
    K: Into<OsString>,
    V: Into<OsString>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new_from(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}
