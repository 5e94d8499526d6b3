//! Splitting test names into group id and test id.

/// The two trailing components of a test name.
///
/// For `"t12b"` the group id is `"12"` and the suffix is `"b"`; the leading
/// `"t"` is the prefix, which callers derive from the lengths of these parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestId<'a> {
    pub group_id: &'a str,
    pub suffix: &'a str,
}

impl TestId<'_> {
    /// Length of everything that precedes the group id in `name`.
    pub fn prefix_len(&self, name: &str) -> usize {
        name.len() - self.group_id.len() - self.suffix.len()
    }
}

/// Split `name` into its trailing letters and the digits just before them.
///
/// Never fails: a name without trailing letters has an empty suffix, and a
/// name without digits before the suffix has an empty group id.
pub fn split(name: &str) -> TestId<'_> {
    let suffix_start = trailing_start(name, |byte| byte.is_ascii_alphabetic());
    let (rest, suffix) = name.split_at(suffix_start);
    let gid_start = trailing_start(rest, |byte| byte.is_ascii_digit());
    TestId {
        group_id: &rest[gid_start..],
        suffix,
    }
}

/// Byte offset where the maximal trailing run of bytes matching `pred` begins.
fn trailing_start(text: &str, pred: impl Fn(u8) -> bool) -> usize {
    text.bytes()
        .rposition(|byte| !pred(byte))
        .map_or(0, |pos| pos + 1)
}
