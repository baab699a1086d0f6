//! Platform conventions relevant to base directory resolution.

/// Platform family whose conventions drive path resolution.
///
/// Most callers want [`Platform::current`]. Taking it as a value instead of branching on
/// `cfg!` everywhere lets callers (and tests) resolve Windows paths on a Unix host and vice
/// versa.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Platform {
    /// Anything that is not Windows: Linux, macOS, the BSDs.
    Unix,
    /// Windows, where XDG variables are rarely set and `%LOCALAPPDATA%` takes their place.
    Windows,
}

impl Platform {
    /// Platform of the compilation target.
    pub const fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Unix
        }
    }

    /// Preferred separator between path components.
    pub const fn path_separator(self) -> char {
        match self {
            Self::Unix => '/',
            Self::Windows => '\\',
        }
    }

    /// Separator between entries of a directory list, like `$XDG_DATA_DIRS`.
    pub const fn list_separator(self) -> char {
        match self {
            Self::Unix => ':',
            Self::Windows => ';',
        }
    }

    /// Whether `c` ends a path component. Windows accepts both slashes.
    pub const fn is_path_separator(self, c: char) -> bool {
        match self {
            Self::Unix => c == '/',
            Self::Windows => c == '/' || c == '\\',
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}
