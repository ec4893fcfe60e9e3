//! Wildcard matching for custom node filters.
//!
//! A pattern contains zero or more `*` wildcards. The decision is a
//! containment heuristic, deliberately weaker than glob or regex
//! matching: every literal fragment between `*` boundaries must occur
//! somewhere in the candidate (in any order), no two adjacent fragments
//! may appear literally concatenated, the candidate must be at least as
//! long as the pattern, and when the pattern does not end in `*` the
//! candidate must end with the pattern's last character. Callers that
//! want exact matching compare for equality instead of calling this.

/// Decide whether `candidate` satisfies the wildcard `pattern`.
///
/// Fragment occurrence is order-insensitive: `foo*bar` accepts a
/// candidate that contains `bar` before `foo`, provided the other gates
/// hold. `foo*bar` rejects `foobar` because the fragments appear
/// literally concatenated with nothing in between.
#[must_use]
pub fn wildcard_match(pattern: &str, candidate: &str) -> bool {
    if candidate.chars().count() < pattern.chars().count() {
        return false;
    }
    let fragments = split_fragments(pattern);
    for fragment in &fragments {
        if !candidate.contains(fragment.as_str()) {
            return false;
        }
    }
    for pair in fragments.windows(2) {
        let joined = format!("{}{}", pair[0], pair[1]);
        if candidate.contains(&joined) {
            return false;
        }
    }
    let pattern_last = pattern.chars().last();
    if pattern_last != Some('*') && pattern_last != candidate.chars().last() {
        return false;
    }
    true
}

/// Split `pattern` at each `*`: the piece before the first star, the
/// pieces between consecutive stars, and the piece after the last star
/// when the pattern does not end with one. A pattern without stars is a
/// single fragment. Leading or doubled stars yield empty fragments,
/// which participate in the adjacency check like any other fragment.
fn split_fragments(pattern: &str) -> Vec<String> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut fragments = Vec::new();
    let mut start = 0;
    for (i, ch) in chars.iter().enumerate() {
        if *ch == '*' {
            fragments.push(chars[start..i].iter().collect());
            start = i + 1;
        }
    }
    if start != chars.len() {
        fragments.push(chars[start..].iter().collect());
    }
    fragments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragments_split_at_stars() {
        assert_eq!(split_fragments("foo*bar"), vec!["foo", "bar"]);
        assert_eq!(split_fragments("a*b*c"), vec!["a", "b", "c"]);
        assert_eq!(split_fragments("plain"), vec!["plain"]);
        assert_eq!(split_fragments("tail*"), vec!["tail"]);
        assert_eq!(split_fragments("*lead"), vec!["", "lead"]);
        assert_eq!(split_fragments("a**b"), vec!["a", "", "b"]);
        assert_eq!(split_fragments("*"), vec![""]);
    }

    #[test]
    fn interior_wildcard_matches() {
        assert!(wildcard_match("foo*bar", "fooXYZbar"));
        assert!(wildcard_match("foo*bar", "foo.bar"));
    }

    #[test]
    fn adjacent_concatenation_is_rejected() {
        // The fragments are present but appear glued together.
        assert!(!wildcard_match("foo*bar", "foobar"));
        assert!(!wildcard_match("foo*bar", "XfoobarY.bar"));
    }

    #[test]
    fn last_character_must_agree_without_trailing_star() {
        assert!(!wildcard_match("foo*bar", "barfoo"));
        assert!(!wildcard_match("foo*bar", "barXfoo"));
        assert!(!wildcard_match("foo*bar", "fooXbarX"));
        assert!(wildcard_match("foo*bar", "bazbarXfoor"));
    }

    #[test]
    fn fragment_order_is_not_enforced() {
        // bar occurs before foo; every gate still holds.
        assert!(wildcard_match("foo*bar", "barXfooXbar"));
    }

    #[test]
    fn shorter_candidate_always_fails() {
        assert!(!wildcard_match("foo*bar", "fobar"));
        assert!(!wildcard_match("abc*", "ab"));
    }

    #[test]
    fn trailing_star_skips_the_last_character_gate() {
        assert!(wildcard_match("foo*", "fooX"));
        assert!(wildcard_match("foo*", "Xfoo"));
        assert!(!wildcard_match("foo*", "fo"));
    }

    #[test]
    fn lone_star_matches_any_nonempty_candidate() {
        assert!(wildcard_match("*", "x"));
        assert!(wildcard_match("*", "anything"));
        assert!(!wildcard_match("*", ""));
    }

    #[test]
    fn leading_star_excludes_itself() {
        // ["", "lead"] forces "lead" to be both present and absent.
        assert!(!wildcard_match("*lead", "Xlead"));
        assert!(!wildcard_match("*lead", "led"));
    }

    #[test]
    fn doubled_star_excludes_itself() {
        // ["a", "", "b"]: the pairs "a"+"" and ""+"b" forbid both
        // fragments anywhere in the candidate.
        assert!(!wildcard_match("a**b", "aXYb"));
        assert!(!wildcard_match("a**b", "ab"));
    }

    #[test]
    fn starless_pattern_requires_containment_and_last_character() {
        assert!(wildcard_match("abc", "abc"));
        assert!(wildcard_match("abc", "XabcYc"));
        assert!(!wildcard_match("abc", "abX"));
    }
}
