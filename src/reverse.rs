//! Code point and grapheme reversal.
//!
//! `reverse` works on `char`s (Unicode scalar values), so multi-byte
//! characters survive intact. Clusters built from several code points, such
//! as `"e\u{301}"` or family emoji joined with ZWJ, come out in a different
//! order and may render differently. Use `reverse_graphemes` when the
//! user-perceived characters have to stay whole.

use tracing::trace;
use unicode_segmentation::UnicodeSegmentation;

// ============================================================================
// Two-pointer swap
// ============================================================================

/// Reverse a slice in place by swapping mirrored positions.
///
/// `i` walks forward from the start and `j` backward from the end until they
/// meet; an odd-length slice leaves its middle element where it was.
pub fn reverse_in_place<T>(items: &mut [T]) {
    if items.len() < 2 {
        return;
    }

    let mut i = 0;
    let mut j = items.len() - 1;
    while i < j {
        items.swap(i, j);
        i += 1;
        j -= 1;
    }
}

// ============================================================================
// String reversal
// ============================================================================

/// Return `s` with its code points in reverse order.
///
/// ```
/// assert_eq!(scratchpad::reverse("hello"), "olleh");
/// assert_eq!(scratchpad::reverse("日本語"), "語本日");
/// ```
pub fn reverse(s: &str) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    trace!(bytes = s.len(), code_points = chars.len(), "reversing by code point");
    reverse_in_place(&mut chars);
    chars.into_iter().collect()
}

/// Return `s` with its extended grapheme clusters in reverse order.
pub fn reverse_graphemes(s: &str) -> String {
    let mut clusters: Vec<&str> = s.graphemes(true).collect();
    trace!(bytes = s.len(), graphemes = clusters.len(), "reversing by grapheme");
    reverse_in_place(&mut clusters);
    clusters.concat()
}
