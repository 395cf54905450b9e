// Part-of-speech abbreviation for compact display.

/// Full names (and already-short forms) mapped to display abbreviations, in
/// lookup order for the fuzzy pass.
const ABBREVIATIONS: &[(&str, &str)] = &[
    ("noun", "n"),
    ("nouns", "n"),
    ("verb", "v"),
    ("verbs", "v"),
    ("adjective", "adj"),
    ("adjectives", "adj"),
    ("adj", "adj"),
    ("adverb", "adv"),
    ("adverbs", "adv"),
    ("adv", "adv"),
    ("pronoun", "pron"),
    ("pronouns", "pron"),
    ("pron", "pron"),
    ("preposition", "prep"),
    ("prepositions", "prep"),
    ("prep", "prep"),
    ("conjunction", "conj"),
    ("conjunctions", "conj"),
    ("conj", "conj"),
    ("interjection", "interj"),
    ("interjections", "interj"),
    ("interj", "interj"),
    ("numeral", "num"),
    ("numerals", "num"),
    ("num", "num"),
    ("article", "art"),
    ("articles", "art"),
    ("art", "art"),
];

/// Abbreviate a part of speech such as "Adjective" to "adj".
///
/// An exact (case-insensitive) hit wins. Otherwise the first table entry
/// whose name contains the input, or is contained in it, is used; this
/// covers values like "transitive verb". Unrecognised input is returned
/// unchanged.
pub fn abbreviate(part_of_speech: &str) -> String {
    let normalized = part_of_speech.trim().to_lowercase();
    if normalized.is_empty() {
        return part_of_speech.to_string();
    }

    if let Some((_, abbr)) = ABBREVIATIONS.iter().find(|(name, _)| *name == normalized) {
        return abbr.to_string();
    }

    ABBREVIATIONS
        .iter()
        .find(|(name, _)| normalized.contains(name) || name.contains(normalized.as_str()))
        .map(|(_, abbr)| abbr.to_string())
        .unwrap_or_else(|| part_of_speech.to_string())
}
