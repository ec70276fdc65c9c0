//! Shared helpers used by both the `fieldcopy` runtime and its derive macro.
//!
//! Anything here must stay dependency-free so the proc-macro crate can use
//! it at expansion time.

pub mod naming;

/// Whitespace-only and empty names are treated as absent.
#[must_use]
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\n"));
        assert!(!is_blank(" a "));
    }
}
