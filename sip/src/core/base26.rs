//! Lowercase-letter odometer used to walk test id suffixes.

/// Advance `digits` by one in base 26 over `a..=z`.
///
/// The last letter is incremented; a letter passing `z` wraps to `a` and
/// carries into the letter before it. A carry out of the first letter grows
/// the counter by one (`""` becomes `"a"`, `"zz"` becomes `"aaa"`) as long as
/// the result stays within `max_len` letters.
///
/// Returns `false` when the counter would need more than `max_len` letters;
/// the buffer then holds the wrapped value (all `a`).
pub fn increment_base26(digits: &mut Vec<u8>, max_len: usize) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit < b'z' {
            *digit += 1;
            return true;
        }
        *digit = b'a';
    }
    if digits.len() >= max_len {
        return false;
    }
    digits.insert(0, b'a');
    true
}
