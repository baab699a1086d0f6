use crate::os::platform::Platform;

/// Whether `path` ends in a path separator of `platform`.
pub fn ends_with_separator(path: &str, platform: Platform) -> bool {
    path.chars()
        .next_back()
        .is_some_and(|c| platform.is_path_separator(c))
}

/// Join `base` and `fname` into a new string.
///
/// A separator is inserted between them only if `base` is non-empty and doesn't already end in
/// one, so `"a/"` and `"a"` both join with `"b"` into `"a/b"`. `fname` is appended verbatim.
///
/// # Examples
///
/// ```rust
/// use stdpaths::fs::concat_fnames;
/// use stdpaths::os::platform::Platform;
///
/// assert_eq!(concat_fnames("/etc", "xdg", Platform::Unix), "/etc/xdg");
/// assert_eq!(concat_fnames("/etc/", "xdg", Platform::Unix), "/etc/xdg");
/// assert_eq!(concat_fnames("", "xdg", Platform::Unix), "xdg");
/// assert_eq!(concat_fnames(r"C:\Users", "nvim", Platform::Windows), r"C:\Users\nvim");
/// ```
pub fn concat_fnames(base: &str, fname: &str, platform: Platform) -> String {
    let mut joined = String::with_capacity(base.len() + 1 + fname.len());
    joined.push_str(base);
    if !base.is_empty() && !ends_with_separator(base, platform) {
        joined.push(platform.path_separator());
    }
    joined.push_str(fname);
    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_double_separator() {
        assert_eq!(concat_fnames("/a/", "b", Platform::Unix), "/a/b");
        assert_eq!(concat_fnames(r"C:\a\", "b", Platform::Windows), r"C:\a\b");
        assert_eq!(concat_fnames("C:/a/", "b", Platform::Windows), "C:/a/b");
    }

    #[test]
    fn backslash_is_not_a_unix_separator() {
        assert_eq!(concat_fnames(r"a\", "b", Platform::Unix), r"a\/b");
    }

    #[test]
    fn empty_fname_keeps_separator() {
        assert_eq!(concat_fnames("/a", "", Platform::Unix), "/a/");
    }

    #[test]
    fn ends_with() {
        assert!(ends_with_separator("/", Platform::Unix));
        assert!(!ends_with_separator("", Platform::Unix));
        assert!(!ends_with_separator("a", Platform::Windows));
        assert!(ends_with_separator("a/", Platform::Windows));
    }
}
