/// Produces a display-ready name: strips everything outside the allowed
/// character set, trims, and title-cases the remainder.
///
/// Always returns a string, possibly empty when nothing usable remained.
pub fn normalize_name(value: &str) -> String {
    let filtered: String = value.chars().filter(|ch| is_name_char(*ch)).collect();
    title_case(filtered.trim_matches(is_space))
}

/// Whitespace as contact exports use it: Unicode whitespace plus the ASCII
/// information separators U+001C..U+001F.
pub(crate) fn is_space(ch: char) -> bool {
    ch.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&ch)
}

fn is_name_char(ch: char) -> bool {
    ch.is_ascii_alphabetic() || is_space(ch) || ch == '-' || ch == '\''
}

// A letter starts a new word whenever the previous character is not a letter,
// so fragments after hyphens and apostrophes are capitalised too.
fn title_case(value: &str) -> String {
    let mut output = String::with_capacity(value.len());
    let mut previous_is_letter = false;

    for ch in value.chars() {
        if ch.is_ascii_alphabetic() {
            if previous_is_letter {
                output.push(ch.to_ascii_lowercase());
            } else {
                output.push(ch.to_ascii_uppercase());
            }
            previous_is_letter = true;
        } else {
            output.push(ch);
            previous_is_letter = false;
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_emoji_and_title_cases() {
        assert_eq!(normalize_name("jo\u{2728}hn"), "John");
        assert_eq!(normalize_name("o'brien-smith"), "O'Brien-Smith");
    }

    #[test]
    fn removes_digits_and_punctuation() {
        assert_eq!(normalize_name("  mary.ann 2nd!  "), "Maryann Nd");
        assert_eq!(normalize_name("\u{1f600}\u{1f600}"), "");
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn lowercases_interior_letters() {
        assert_eq!(normalize_name("McDONALD"), "Mcdonald");
        assert_eq!(normalize_name("ANNE marie"), "Anne Marie");
    }

    #[test]
    fn keeps_interior_whitespace_as_is() {
        assert_eq!(normalize_name("\tvan  der berg \n"), "Van  Der Berg");
    }

    #[test]
    fn information_separators_count_as_whitespace() {
        assert_eq!(normalize_name("ann\u{1c}marie"), "Ann\u{1c}Marie");
        assert_eq!(normalize_name("\u{1f}bo\u{1d}"), "Bo");
        assert!(is_space('\u{1e}'));
        assert!(!is_space('\u{1b}'));
    }

    #[test]
    fn drops_non_ascii_letters() {
        assert_eq!(normalize_name("Jos\u{e9}"), "Jos");
        assert_eq!(normalize_name("\u{c9}mile"), "Mile");
    }

    #[test]
    fn normalization_is_idempotent() {
        let samples = [
            "jo\u{2728}hn",
            "o'brien-smith",
            "  --ANNE-marie--  ",
            "d'angelo  o'neil",
            "ann\u{1c}marie\u{1f}",
            "\u{1f389}",
            "x",
        ];

        for sample in samples {
            let once = normalize_name(sample);
            assert_eq!(normalize_name(&once), once, "not idempotent for {sample:?}");
        }
    }
}
