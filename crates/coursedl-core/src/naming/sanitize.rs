//! Path-segment sanitization.

/// Characters that are unsafe in file names on common filesystems.
pub const DEFAULT_DISALLOWED_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Substitute for every disallowed character.
pub const REPLACEMENT: char = '_';

/// Replaces each character of `name` found in `disallowed` with `_`.
///
/// Nothing else changes: no trimming, no collapsing, no length limit. Empty input
/// stays empty. Idempotent as long as `disallowed` does not contain `_`.
pub fn sanitize_segment(name: &str, disallowed: &[char]) -> String {
    name.chars()
        .map(|c| if disallowed.contains(&c) { REPLACEMENT } else { c })
        .collect()
}

/// [`sanitize_segment`] with [`DEFAULT_DISALLOWED_CHARS`].
pub fn sanitize_filename(name: &str) -> String {
    sanitize_segment(name, &DEFAULT_DISALLOWED_CHARS)
}
