//! Answer text normalization.

/// Normalize typed answer text before comparison.
///
/// Collapses whitespace runs to a single space, trims both ends, and drops
/// whitespace touching the `/` separator: `" 1   1 / 2 "` becomes `"1 1/2"`.
pub fn clean_input(input: &str) -> String {
    let collapsed = input.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.replace(" /", "/").replace("/ ", "/")
}

/// Compare typed text against a canonical answer string.
///
/// Only the spelling is compared: `"2/4"` is not accepted for `"1/2"`.
pub fn is_correct(input: &str, canonical: &str) -> bool {
    clean_input(input) == canonical
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_and_trims() {
        assert_eq!(clean_input(" 1   1 / 2 "), "1 1/2");
        assert_eq!(clean_input("\t3\n"), "3");
        assert_eq!(clean_input("   "), "");
    }

    #[test]
    fn removes_space_on_either_side_of_slash() {
        assert_eq!(clean_input("7 /10"), "7/10");
        assert_eq!(clean_input("7/ 10"), "7/10");
        assert_eq!(clean_input("-1  11 /  12"), "-1 11/12");
    }

    #[test]
    fn normalizing_twice_is_a_no_op() {
        for input in [" 1   1 / 2 ", "2", "  -7 / 10", "a  b / c", ""] {
            let once = clean_input(input);
            assert_eq!(clean_input(&once), once);
        }
    }

    #[test]
    fn equivalent_but_unsimplified_answer_is_wrong() {
        assert!(!is_correct("2/4", "1/2"));
        assert!(!is_correct("3/2", "1 1/2"));
        assert!(is_correct("  1 1 /2", "1 1/2"));
    }

    #[test]
    fn malformed_text_is_just_wrong() {
        assert!(!is_correct("one half", "1/2"));
        assert!(!is_correct("", "0"));
    }
}
