//! Grapheme cluster iteration.
//!
//! Segmentation works on extended grapheme clusters so that a mark is never
//! inserted between a base character and the combining marks that follow it.

use unicode_segmentation::UnicodeSegmentation;

/// Iterate over grapheme clusters with byte indices.
pub fn grapheme_indices(s: &str) -> impl Iterator<Item = (usize, &str)> {
    s.grapheme_indices(true)
}

/// First scalar value of a grapheme cluster.
///
/// Returns `'\0'` for an empty string, which never happens for clusters
/// produced by [`grapheme_indices`].
#[inline]
#[must_use]
pub fn base_char(grapheme: &str) -> char {
    grapheme.chars().next().unwrap_or('\0')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combining_marks_stay_with_base() {
        let text = "/\u{0301}a";
        let clusters: Vec<_> = grapheme_indices(text).map(|(_, g)| g).collect();
        assert_eq!(clusters, vec!["/\u{0301}", "a"]);
        assert_eq!(base_char(clusters[0]), '/');
    }

    #[test]
    fn indices_are_byte_offsets() {
        let indices: Vec<_> = grapheme_indices("אב/c").map(|(i, _)| i).collect();
        assert_eq!(indices, vec![0, 2, 4, 5]);
    }

    #[test]
    fn crlf_is_one_cluster() {
        assert_eq!(grapheme_indices("a\r\nb").count(), 3);
    }
}
