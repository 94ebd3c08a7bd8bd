//! Selection of files to rewrite

use super::walker::WalkEntry;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// Suffix a file name must end with, compared case-insensitively
pub const EXTENSION: &str = ".sol";

fn extension_regex() -> &'static Regex {
    static EXTENSION_REGEX: OnceLock<Regex> = OnceLock::new();
    EXTENSION_REGEX.get_or_init(|| {
        Regex::new(&format!(r"(?i){}$", regex::escape(EXTENSION)))
            .expect("Invalid extension regex")
    })
}

/// Whether the path's file name ends in `.sol`, ignoring case
pub fn matches_extension(path: &Path) -> bool {
    path.file_name()
        .map(|name| extension_regex().is_match(&name.to_string_lossy()))
        .unwrap_or(false)
}

/// A walk entry is rewritten when it is a regular file with a matching name
pub fn is_eligible(entry: &WalkEntry) -> bool {
    entry.is_file() && matches_extension(entry.path())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewrite::walker::EntryKind;
    use yare::parameterized;

    #[parameterized(
        lowercase = { "src/Token.sol", true },
        uppercase = { "test/B.SOL", true },
        mixed_case = { "src/c.Sol", true },
        nested = { "src/a/b/c/Deep.sol", true },
        dotfile = { "src/.sol", true },
        backup = { "src/Token.sol.bak", false },
        no_dot = { "src/asol", false },
        other_extension = { "src/C.txt", false },
        solidity_json = { "src/Token.sol.json", false },
        sol_in_directory_name = { "src/lib.sol/readme.md", false },
    )]
    fn test_matches_extension(path: &str, expected: bool) {
        assert_eq!(matches_extension(Path::new(path)), expected);
    }

    #[test]
    fn test_directory_is_not_eligible() {
        let entry = WalkEntry::new("src/vendor.sol", EntryKind::Directory);
        assert!(!is_eligible(&entry));
    }

    #[test]
    fn test_other_kinds_are_not_eligible() {
        let entry = WalkEntry::new("src/pipe.sol", EntryKind::Other);
        assert!(!is_eligible(&entry));
    }

    #[test]
    fn test_matching_file_is_eligible() {
        let entry = WalkEntry::new("test/B.SOL", EntryKind::File);
        assert!(is_eligible(&entry));
    }

    #[test]
    fn test_non_matching_file_is_not_eligible() {
        let entry = WalkEntry::new("src/C.txt", EntryKind::File);
        assert!(!is_eligible(&entry));
    }
}
