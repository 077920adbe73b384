//! Glob matching for key patterns.
//!
//! Supports the pattern language of Redis `KEYS`:
//!
//! - `*` matches any run of characters, including none
//! - `?` matches exactly one character
//! - `[abc]`, `[a-z]` match one character from a class; `[^abc]` or `[!abc]`
//!   negate it
//! - `\x` matches `x` literally

/// Returns `true` if `text` matches the glob `pattern`.
pub fn glob_match(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();

    let (mut p, mut t) = (0, 0);
    // Position of the last `*` seen and the text index it is currently absorbing up to.
    let mut backtrack: Option<(usize, usize)> = None;

    while t < text.len() {
        match pattern.get(p) {
            Some('*') => {
                backtrack = Some((p, t));
                p += 1;
                continue;
            }
            Some(_) => {
                if let Some(width) = match_one(&pattern[p..], text[t]) {
                    p += width;
                    t += 1;
                    continue;
                }
            }
            None => {}
        }

        match backtrack {
            Some((star, absorbed)) => {
                p = star + 1;
                t = absorbed + 1;
                backtrack = Some((star, t));
            }
            None => return false,
        }
    }

    pattern[p..].iter().all(|&c| c == '*')
}

/// Matches a single non-`*` pattern element at the start of `pattern` against `c`.
///
/// Returns the number of pattern characters consumed on a match.
fn match_one(pattern: &[char], c: char) -> Option<usize> {
    match pattern[0] {
        '?' => Some(1),
        '\\' if pattern.len() > 1 => (pattern[1] == c).then_some(2),
        '[' => match_class(&pattern[1..], c).map(|width| width + 1),
        literal => (literal == c).then_some(1),
    }
}

/// Matches a character class body (the part after `[`).
fn match_class(body: &[char], c: char) -> Option<usize> {
    let mut i = 0;
    let negated = matches!(body.first(), Some('^') | Some('!'));
    if negated {
        i += 1;
    }

    let mut matched = false;
    while i < body.len() && body[i] != ']' {
        if body[i] == '\\' && i + 1 < body.len() {
            matched |= body[i + 1] == c;
            i += 2;
        } else if i + 2 < body.len() && body[i + 1] == '-' && body[i + 2] != ']' {
            let (lo, hi) = if body[i] <= body[i + 2] {
                (body[i], body[i + 2])
            } else {
                (body[i + 2], body[i])
            };
            matched |= lo <= c && c <= hi;
            i += 3;
        } else {
            matched |= body[i] == c;
            i += 1;
        }
    }

    // Consume the closing bracket when present; an unterminated class runs to the end.
    let width = if i < body.len() { i + 1 } else { i };
    (matched != negated).then_some(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_matches_everything() {
        assert!(glob_match("*", ""));
        assert!(glob_match("*", "anything at all"));
        assert!(glob_match("**", "abc"));
    }

    #[test]
    fn test_literal() {
        assert!(glob_match("user:1", "user:1"));
        assert!(!glob_match("user:1", "user:10"));
        assert!(!glob_match("user:1", "User:1"));
        assert!(!glob_match("", "a"));
        assert!(glob_match("", ""));
    }

    #[test]
    fn test_prefix_suffix_and_infix_star() {
        assert!(glob_match("user:*", "user:42"));
        assert!(glob_match("user:*", "user:"));
        assert!(!glob_match("user:*", "session:42"));
        assert!(glob_match("*:42", "user:42"));
        assert!(glob_match("h*llo", "heeeello"));
        assert!(glob_match("a*b*c", "axxbyyc"));
        assert!(!glob_match("a*b*c", "axxbyy"));
    }

    #[test]
    fn test_question_mark() {
        assert!(glob_match("h?llo", "hello"));
        assert!(glob_match("h?llo", "hallo"));
        assert!(!glob_match("h?llo", "hllo"));
        assert!(glob_match("??", "日本"));
    }

    #[test]
    fn test_classes() {
        assert!(glob_match("h[ae]llo", "hello"));
        assert!(glob_match("h[ae]llo", "hallo"));
        assert!(!glob_match("h[ae]llo", "hillo"));
        assert!(glob_match("h[^e]llo", "hallo"));
        assert!(!glob_match("h[^e]llo", "hello"));
        assert!(glob_match("h[!e]llo", "hbllo"));
        assert!(glob_match("h[a-b]llo", "hbllo"));
        assert!(!glob_match("h[a-b]llo", "hcllo"));
        assert!(glob_match("key[0-9]", "key7"));
        assert!(glob_match("key[9-0]", "key7"));
    }

    #[test]
    fn test_escapes() {
        assert!(glob_match(r"what\?", "what?"));
        assert!(!glob_match(r"what\?", "whatx"));
        assert!(glob_match(r"a\*b", "a*b"));
        assert!(!glob_match(r"a\*b", "axb"));
        assert!(glob_match(r"[\]]", "]"));
    }

    #[test]
    fn test_unterminated_class() {
        assert!(glob_match("[ab", "a"));
        assert!(!glob_match("[ab", "c"));
    }
}
