//! Shared helpers: dates, paths and pluralization.

pub mod date;
pub mod path;

/// Return "s" suffix for plural counts
///
/// - `plural_s(0)` -> `"s"`
/// - `plural_s(1)` -> `""`
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun, e.g. `plural_count(3, "file")` -> `"3 files"`.
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "file"), "0 files");
        assert_eq!(plural_count(1, "file"), "1 file");
        assert_eq!(plural_count(2, "issue"), "2 issues");
    }
}
