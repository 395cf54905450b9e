// Case-insensitive matching over character slices.
//
// All offsets in this crate count Unicode scalar values, so a slice of the
// word can always be turned back into the exact original text.

/// Case-insensitive equality of two characters.
pub(crate) fn eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

pub(crate) fn starts_with(hay: &[char], needle: &[char]) -> bool {
    needle.len() <= hay.len()
        && hay
            .iter()
            .zip(needle)
            .all(|(&h, &n)| eq_ignore_case(h, n))
}

pub(crate) fn ends_with(hay: &[char], needle: &[char]) -> bool {
    needle.len() <= hay.len() && starts_with(&hay[hay.len() - needle.len()..], needle)
}

/// First offset at which `needle` occurs in `hay`. An empty needle never
/// matches.
pub(crate) fn find(hay: &[char], needle: &[char]) -> Option<usize> {
    if needle.is_empty() || needle.len() > hay.len() {
        return None;
    }
    (0..=hay.len() - needle.len()).find(|&i| starts_with(&hay[i..], needle))
}

pub(crate) fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

pub(crate) fn is_consonant(c: char) -> bool {
    c.is_ascii_alphabetic() && !is_vowel(c)
}

/// Strip the attachment hyphens (and surrounding whitespace) from an affix
/// as written by the analysis service, e.g. "-ful" or "un-".
pub(crate) fn bare_affix(affix: &str) -> &str {
    affix.trim().trim_matches('-').trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_find_ignores_case() {
        assert_eq!(find(&c("UnHelpful"), &c("help")), Some(2));
        assert_eq!(find(&c("unhelpful"), &c("HELP")), Some(2));
        assert_eq!(find(&c("unhelpful"), &c("kind")), None);
    }

    #[test]
    fn test_find_first_occurrence() {
        assert_eq!(find(&c("abcabc"), &c("bc")), Some(1));
    }

    #[test]
    fn test_find_empty_needle() {
        assert_eq!(find(&c("word"), &c("")), None);
    }

    #[test]
    fn test_starts_and_ends_with() {
        assert!(starts_with(&c("Reread"), &c("re")));
        assert!(!starts_with(&c("r"), &c("re")));
        assert!(ends_with(&c("kindNESS"), &c("ness")));
        assert!(!ends_with(&c("ss"), &c("ness")));
    }

    #[test]
    fn test_vowels_and_consonants() {
        assert!(is_vowel('A'));
        assert!(is_consonant('t'));
        assert!(!is_consonant('e'));
        assert!(!is_consonant('-'));
        assert!(!is_vowel('y'));
    }

    #[test]
    fn test_bare_affix() {
        assert_eq!(bare_affix("-ful"), "ful");
        assert_eq!(bare_affix("un-"), "un");
        assert_eq!(bare_affix(" --ness "), "ness");
        assert_eq!(bare_affix("-"), "");
    }
}
