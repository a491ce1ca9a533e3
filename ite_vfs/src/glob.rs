//! DOS-style wildcard matching for savefile and archive member listings.
//!
//! Patterns understand `*` (any run of characters, including none), `?`
//! (exactly one character) and `#` (exactly one ASCII digit). Everything
//! else matches literally. Savefile names are matched case-insensitively.

/// Match `text` against `pattern`. Case folding is ASCII-only.
pub fn matches(pattern: &str, text: &str, ignore_case: bool) -> bool {
    matches_bytes(pattern.as_bytes(), text.as_bytes(), ignore_case)
}

fn matches_bytes(pattern: &[u8], text: &[u8], fold: bool) -> bool {
    let Some((&head, rest)) = pattern.split_first() else {
        return text.is_empty();
    };

    match head {
        b'*' => (0..=text.len()).any(|skip| matches_bytes(rest, &text[skip..], fold)),
        b'?' => match text.split_first() {
            Some((_, tail)) => matches_bytes(rest, tail, fold),
            None => false,
        },
        b'#' => match text.split_first() {
            Some((&ch, tail)) if ch.is_ascii_digit() => matches_bytes(rest, tail, fold),
            _ => false,
        },
        literal => match text.split_first() {
            Some((&ch, tail)) if byte_eq(literal, ch, fold) => matches_bytes(rest, tail, fold),
            _ => false,
        },
    }
}

fn byte_eq(a: u8, b: u8, fold: bool) -> bool {
    if fold {
        a.eq_ignore_ascii_case(&b)
    } else {
        a == b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_matches_any_run() {
        assert!(matches("*", "", false));
        assert!(matches("ite.###", "ite.042", false));
        assert!(matches("ite.*", "ite.042", false));
        assert!(matches("*.042", "ite.042", false));
        assert!(!matches("ite.*", "tales.042", false));
    }

    #[test]
    fn question_mark_needs_exactly_one_char() {
        assert!(matches("sav?", "save", false));
        assert!(!matches("sav?", "sav", false));
        assert!(!matches("sav?", "saves", false));
    }

    #[test]
    fn hash_matches_single_digit() {
        assert!(matches("slot##", "slot07", false));
        assert!(!matches("slot##", "slot7", false));
        assert!(!matches("slot##", "slotXY", false));
    }

    #[test]
    fn case_folding_is_opt_in() {
        assert!(matches("Kq1.000", "kq1.000", true));
        assert!(!matches("Kq1.000", "kq1.000", false));
    }

    #[test]
    fn star_backtracks_across_literals() {
        assert!(matches("*.cmp", "a.b.cmp", false));
        assert!(!matches("*.cmp", "a.cmpx", false));
    }
}
