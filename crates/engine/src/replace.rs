//! Literal substring replacement over raw bytes.

use memchr::memmem;

/// Replace every non-overlapping occurrence of `needle` in `haystack`,
/// scanning left to right. Returns the new content and the number of
/// replacements made.
///
/// An empty `needle` matches nothing.
pub fn replace_literal(haystack: &[u8], needle: &[u8], replacement: &[u8]) -> (Vec<u8>, usize) {
    if needle.is_empty() {
        return (haystack.to_vec(), 0);
    }

    let finder = memmem::Finder::new(needle);
    let mut out = Vec::with_capacity(haystack.len());
    let mut last = 0;
    let mut count = 0;

    for start in finder.find_iter(haystack) {
        out.extend_from_slice(&haystack[last..start]);
        out.extend_from_slice(replacement);
        last = start + needle.len();
        count += 1;
    }
    out.extend_from_slice(&haystack[last..]);

    (out, count)
}

/// Number of non-overlapping occurrences of `needle` in `haystack`.
pub fn count_literal(haystack: &[u8], needle: &[u8]) -> usize {
    if needle.is_empty() {
        return 0;
    }
    memmem::find_iter(haystack, needle).count()
}
