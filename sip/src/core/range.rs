//! Expansion of test range expressions.
//!
//! A range is either a single test name or `begin-end`, where either side may
//! abbreviate the other: `4a-5c`, `4a-d` (group id inherited from `begin`),
//! `4-8c` (suffix inherited from `end`), `t4z-t5b` (explicit prefix).
//!
//! Names are the product of the group id span and the suffix span. The one
//! exception is a begin suffix above the end suffix across different groups
//! (`4y-5b`): the suffix then runs on past `z` into the next group, giving
//! `4y 4z 5a 5b`.

use crate::core::base26::increment_base26;
use crate::core::test_id::split;
use crate::error::{RangeError, SipfileError};

/// Validate `range` and return the names it denotes, in ascending
/// `(group id, suffix)` order.
///
/// Every check runs before the iterator is returned, so an error never
/// follows partial output.
pub fn expand(range: &str) -> Result<TestRange, SipfileError> {
    let Some((begin, end)) = range.split_once('-') else {
        return Ok(TestRange {
            state: RangeState::Single(Some(range.to_string())),
        });
    };
    let fail = |reason| SipfileError::invalid_range(range, reason);

    if end.is_empty() {
        return Err(fail(RangeError::TrailingHyphen));
    }

    let begin_test = split(begin);
    let end_test = split(end);
    let prefix = &begin[..begin_test.prefix_len(begin)];
    let end_prefix = &end[..end_test.prefix_len(end)];
    if !end_prefix.is_empty() && end_prefix != prefix {
        return Err(fail(RangeError::PrefixMismatch));
    }

    let begin_gid = parse_group_id(begin_test.group_id).map_err(fail)?;
    let end_gid = if end_test.group_id.is_empty() {
        begin_gid
    } else {
        parse_group_id(end_test.group_id).map_err(fail)?
    };

    let end_tid = end_test.suffix.to_ascii_lowercase().into_bytes();
    let mut begin_tid = begin_test.suffix.to_ascii_lowercase().into_bytes();
    if begin_tid.is_empty() {
        begin_tid = end_tid.clone();
    }
    if begin_tid.len() != end_tid.len() {
        return Err(fail(RangeError::SuffixLengthMismatch));
    }
    let wrap = begin_tid > end_tid;
    if wrap && begin_gid >= end_gid {
        return Err(fail(RangeError::BeginAfterEnd));
    }

    if begin_gid > end_gid {
        return Ok(TestRange {
            state: RangeState::Done,
        });
    }
    Ok(TestRange {
        state: RangeState::Span(Span {
            prefix: prefix.to_string(),
            gid: begin_gid,
            end_gid,
            tid: begin_tid.clone(),
            begin_tid,
            end_tid,
            wrap,
        }),
    })
}

/// Empty group ids count as `0`.
fn parse_group_id(digits: &str) -> Result<u64, RangeError> {
    if digits.is_empty() {
        return Ok(0);
    }
    digits.parse().map_err(|_| RangeError::GroupIdTooLarge)
}

/// Iterator over the test names of one validated range.
#[derive(Debug, Clone)]
pub struct TestRange {
    state: RangeState,
}

#[derive(Debug, Clone)]
enum RangeState {
    Single(Option<String>),
    Span(Span),
    Done,
}

#[derive(Debug, Clone)]
struct Span {
    prefix: String,
    gid: u64,
    end_gid: u64,
    tid: Vec<u8>,
    begin_tid: Vec<u8>,
    end_tid: Vec<u8>,
    /// Suffix carries into the group id instead of restarting per group.
    wrap: bool,
}

impl Span {
    fn current(&self) -> String {
        let mut name = format!("{}{}", self.prefix, self.gid);
        name.extend(self.tid.iter().copied().map(char::from));
        name
    }

    /// Move to the next name; returns `false` after the last one.
    fn advance(&mut self) -> bool {
        if self.wrap {
            if self.gid == self.end_gid && self.tid == self.end_tid {
                return false;
            }
            if !increment_base26(&mut self.tid, self.end_tid.len()) {
                self.gid += 1;
            }
            return true;
        }
        if self.tid != self.end_tid {
            return increment_base26(&mut self.tid, self.end_tid.len());
        }
        if self.gid == self.end_gid {
            return false;
        }
        self.gid += 1;
        self.tid.clone_from(&self.begin_tid);
        true
    }
}

impl Iterator for TestRange {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        match &mut self.state {
            RangeState::Single(name) => {
                let name = name.take();
                self.state = RangeState::Done;
                name
            }
            RangeState::Span(span) => {
                let name = span.current();
                if !span.advance() {
                    self.state = RangeState::Done;
                }
                Some(name)
            }
            RangeState::Done => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(range: &str) -> Vec<String> {
        expand(range).expect("valid range").collect()
    }

    fn reason(range: &str) -> RangeError {
        match expand(range) {
            Err(SipfileError::InvalidRange { reason, .. }) => reason,
            other => panic!("expected invalid range, got {other:?}"),
        }
    }

    #[test]
    fn single_name_is_verbatim() {
        assert_eq!(names("7"), vec!["7"]);
        assert_eq!(names("Sample1A"), vec!["Sample1A"]);
    }

    #[test]
    fn spans_groups_and_suffixes() {
        assert_eq!(names("4a-5c"), vec!["4a", "4b", "4c", "5a", "5b", "5c"]);
    }

    #[test]
    fn begin_suffix_inherited_from_end() {
        assert_eq!(names("4-8c"), vec!["4c", "5c", "6c", "7c", "8c"]);
    }

    #[test]
    fn end_group_inherited_from_begin() {
        assert_eq!(names("4a-d"), vec!["4a", "4b", "4c", "4d"]);
    }

    #[test]
    fn suffix_carry_crosses_z() {
        assert_eq!(names("t4z-t5b"), vec!["t4z", "t5a", "t5b"]);
        assert_eq!(names("1az-bb"), vec!["1az", "1ba", "1bb"]);
    }

    #[test]
    fn wrapping_suffix_spans_several_groups() {
        let all = names("1z-3a");
        assert_eq!(all.len(), 1 + 26 + 1);
        assert_eq!(all[..3], ["1z", "2a", "2b"]);
        assert_eq!(all[26..], ["2z", "3a"]);
    }

    #[test]
    fn numeric_only_span() {
        assert_eq!(names("8-11"), vec!["8", "9", "10", "11"]);
    }

    #[test]
    fn suffixes_are_lowercased() {
        assert_eq!(names("3A-3C"), vec!["3a", "3b", "3c"]);
    }

    #[test]
    fn explicit_matching_prefix_is_allowed() {
        assert_eq!(names("test1-test2"), vec!["test1", "test2"]);
        assert_eq!(names("test1-2"), vec!["test1", "test2"]);
    }

    #[test]
    fn begin_group_after_end_group_is_empty() {
        assert!(names("5a-3a").is_empty());
    }

    #[test]
    fn group_id_maximum_does_not_overflow() {
        let max = u64::MAX.to_string();
        let range = format!("{max}a-{max}b");
        assert_eq!(names(&range), vec![format!("{max}a"), format!("{max}b")]);
    }

    #[test]
    fn rejects_trailing_hyphen() {
        assert_eq!(reason("5-"), RangeError::TrailingHyphen);
    }

    #[test]
    fn rejects_begin_after_end() {
        assert_eq!(reason("5c-5a"), RangeError::BeginAfterEnd);
    }

    #[test]
    fn rejects_suffix_length_mismatch() {
        assert_eq!(reason("5c-5ab"), RangeError::SuffixLengthMismatch);
    }

    #[test]
    fn rejects_prefix_mismatch() {
        assert_eq!(reason("a1-b2"), RangeError::PrefixMismatch);
    }

    #[test]
    fn rejects_group_id_overflow_on_either_side() {
        assert_eq!(reason("18446744073709551616a-b"), RangeError::GroupIdTooLarge);
        assert_eq!(reason("1-18446744073709551616"), RangeError::GroupIdTooLarge);
    }

    #[test]
    fn expansions_are_strictly_ordered() {
        for range in ["4a-5c", "4-8c", "4a-d", "t4z-t5b", "1aa-2cz", "9-12", "1y-3b"] {
            let keys: Vec<(u64, String)> = names(range)
                .iter()
                .map(|name| {
                    let id = split(name);
                    (id.group_id.parse().expect("gid"), id.suffix.to_string())
                })
                .collect();
            assert!(
                keys.windows(2).all(|pair| pair[0] < pair[1]),
                "{range} not strictly ordered: {keys:?}"
            );
        }
    }

    #[test]
    fn expansion_is_restartable() {
        let range = expand("2a-3e").expect("valid");
        let first: Vec<String> = range.clone().collect();
        let second: Vec<String> = range.collect();
        assert_eq!(first, second);
        assert_eq!(first, names("2a-3e"));
        assert_eq!(first.len(), 10);
    }
}
