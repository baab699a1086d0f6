//! Directory lists, like `$XDG_DATA_DIRS`.

use std::collections::HashSet;

/// Non-empty entries of `list`, in order.
///
/// ```rust
/// use stdpaths::config_files::list;
///
/// let dirs: Vec<_> = list::split("/usr/local/share::/usr/share:", ':').collect();
/// assert_eq!(dirs, ["/usr/local/share", "/usr/share"]);
/// ```
pub fn split(list: &str, separator: char) -> impl Iterator<Item = &str> {
    list.split(separator).filter(|dir| !dir.is_empty())
}

/// Remove duplicate directories from `list`.
///
/// Entries are compared byte for byte, the first occurrence wins and relative order is kept.
/// Empty entries are dropped. Applying it twice is the same as applying it once.
///
/// ```rust
/// use stdpaths::config_files::list::dedup;
///
/// assert_eq!(dedup("/usr/local/share:/usr/share:/usr/share", ':'), "/usr/local/share:/usr/share");
/// assert_eq!(dedup("a::a", ':'), "a");
/// ```
pub fn dedup(list: &str, separator: char) -> String {
    let mut seen = HashSet::new();
    let mut dirs = Vec::new();
    for dir in split(list, separator) {
        if seen.insert(dir) {
            dirs.push(dir);
        }
    }

    let mut deduped = String::with_capacity(list.len());
    for (i, dir) in dirs.into_iter().enumerate() {
        if i > 0 {
            deduped.push(separator);
        }
        deduped.push_str(dir);
    }
    deduped
}
