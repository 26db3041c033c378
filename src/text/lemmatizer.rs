// file: src/text/lemmatizer.rs
// description: rule-based reduction of inflected English words to their dictionary form
// reference: exception tables first, then per-class suffix detachment rules

use crate::text::lexicon::{
    ADJECTIVE_EXCEPTIONS, ADVERB_EXCEPTIONS, INVARIANT_WORDS, NOUN_EXCEPTIONS, VERB_EXCEPTIONS,
};
use crate::text::pos::PosTag;

/// Final consonants English doubles before `-ed`, `-ing`, `-er` and `-est`.
const DOUBLING_CONSONANTS: &[u8] = b"bdgmnprt";

/// Stem endings that lost a silent `e` before the suffix.
const SILENT_E_ENDINGS: &[&str] = &["iz", "bl", "dg", "rs"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LemmaMode {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl From<PosTag> for LemmaMode {
    fn from(tag: PosTag) -> Self {
        match tag {
            PosTag::Adjective => LemmaMode::Adjective,
            PosTag::Verb => LemmaMode::Verb,
            PosTag::Adverb => LemmaMode::Adverb,
            PosTag::Noun | PosTag::Other => LemmaMode::Noun,
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Lemmatizer;

impl Lemmatizer {
    pub fn new() -> Self {
        Self
    }

    /// Returns the base form of a lower-case `word`; unknown shapes come back unchanged.
    pub fn lemmatize(&self, word: &str, mode: LemmaMode) -> String {
        let exceptions = match mode {
            LemmaMode::Noun => &*NOUN_EXCEPTIONS,
            LemmaMode::Verb => &*VERB_EXCEPTIONS,
            LemmaMode::Adjective => &*ADJECTIVE_EXCEPTIONS,
            LemmaMode::Adverb => &*ADVERB_EXCEPTIONS,
        };

        if let Some(lemma) = exceptions.get(word) {
            return (*lemma).to_string();
        }

        if INVARIANT_WORDS.contains(word) || !word.bytes().all(|b| b.is_ascii_lowercase()) {
            return word.to_string();
        }

        let lemma = match mode {
            LemmaMode::Noun => self.noun(word),
            LemmaMode::Verb => self.verb(word),
            LemmaMode::Adjective => self.adjective(word),
            LemmaMode::Adverb => None,
        };

        lemma.unwrap_or_else(|| word.to_string())
    }

    fn noun(&self, word: &str) -> Option<String> {
        if word.len() > 4
            && let Some(stem) = word.strip_suffix("ies")
        {
            return Some(format!("{stem}y"));
        }

        if let Some(stem) = word.strip_suffix("es")
            && stem.len() >= 2
            && ends_with_sibilant(stem)
        {
            return Some(stem.to_string());
        }

        self.strip_plural_s(word)
    }

    fn verb(&self, word: &str) -> Option<String> {
        if word.ends_with('s') {
            return self.noun(word);
        }

        if word.len() > 4
            && let Some(stem) = word.strip_suffix("ied")
        {
            return Some(format!("{stem}y"));
        }

        if word.ends_with("eed") {
            return None;
        }

        if let Some(stem) = word.strip_suffix("ed")
            && stem.len() >= 2
            && has_vowel(stem)
        {
            return Some(restore_stem(stem));
        }

        if let Some(stem) = word.strip_suffix("ing")
            && stem.len() >= 2
            && has_vowel(stem)
        {
            return Some(restore_stem(stem));
        }

        None
    }

    fn adjective(&self, word: &str) -> Option<String> {
        if word.len() > 5
            && let Some(stem) = word.strip_suffix("iest")
        {
            return Some(format!("{stem}y"));
        }

        if word.len() > 4
            && let Some(stem) = word.strip_suffix("ier")
        {
            return Some(format!("{stem}y"));
        }

        for suffix in ["est", "er"] {
            if let Some(stem) = word.strip_suffix(suffix)
                && let Some(undoubled) = undouble(stem)
            {
                return Some(undoubled.to_string());
            }
        }

        None
    }

    fn strip_plural_s(&self, word: &str) -> Option<String> {
        let stem = word.strip_suffix('s')?;

        if stem.len() < 3 || ["s", "u", "i"].iter().any(|end| stem.ends_with(end)) {
            return None;
        }

        Some(stem.to_string())
    }
}

/// Stems whose plural takes `-es` rather than `-s`: `class`, `church`, `dish`, `box`, `buzz`.
///
/// `ache`, `size` and `niche` keep their `e`, so only a consonant may precede a final `ch`.
fn ends_with_sibilant(stem: &str) -> bool {
    let bytes = stem.as_bytes();
    let n = bytes.len();

    if stem.ends_with("ss") || stem.ends_with("sh") || stem.ends_with("zz") || stem.ends_with('x') {
        return true;
    }

    stem.ends_with("ch")
        && n >= 3
        && !(is_vowel(bytes[n - 3]) && (n < 4 || !is_vowel(bytes[n - 4])))
}

fn is_vowel(b: u8) -> bool {
    matches!(b, b'a' | b'e' | b'i' | b'o' | b'u')
}

/// `y` counts as a vowel anywhere but the first letter (`fly`, `try`).
fn has_vowel(stem: &str) -> bool {
    stem.bytes()
        .enumerate()
        .any(|(i, b)| is_vowel(b) || (i > 0 && b == b'y'))
}

/// `stopp` -> `stop`, but `add` and `call` are left alone.
fn undouble(stem: &str) -> Option<&str> {
    let bytes = stem.as_bytes();
    let n = bytes.len();
    if n < 4 {
        return None;
    }

    let last = bytes[n - 1];
    let doubled = last == bytes[n - 2] && DOUBLING_CONSONANTS.contains(&last);
    let after_short_vowel = is_vowel(bytes[n - 3]) && !is_vowel(bytes[n - 4]);

    (doubled && after_short_vowel).then(|| &stem[..n - 1])
}

/// Consonant-vowel-consonant stems of one syllable take a silent `e` (`hop` -> `hope`).
fn is_short_syllable(stem: &str) -> bool {
    let bytes = stem.as_bytes();
    let n = bytes.len();
    if n < 2 {
        return false;
    }

    let last = bytes[n - 1];
    let consonant_end = !is_vowel(last) && !matches!(last, b'w' | b'x' | b'y');
    let single_vowel = is_vowel(bytes[n - 2]);
    let leading_consonants = bytes[..n - 2].iter().all(|b| !is_vowel(*b));

    consonant_end && single_vowel && leading_consonants
}

fn restore_stem(stem: &str) -> String {
    if let Some(undoubled) = undouble(stem) {
        return undoubled.to_string();
    }

    let needs_e = is_short_syllable(stem)
        || stem.ends_with('v')
        || stem.ends_with('c')
        || SILENT_E_ENDINGS.iter().any(|end| stem.ends_with(end))
        || ends_with_consonant_at(stem);

    if needs_e {
        format!("{stem}e")
    } else {
        stem.to_string()
    }
}

/// `rotat` -> `rotate` while `treat` and `eat` stay put.
fn ends_with_consonant_at(stem: &str) -> bool {
    let bytes = stem.as_bytes();
    let n = bytes.len();
    n >= 3 && stem.ends_with("at") && !is_vowel(bytes[n - 3])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lemma(word: &str, mode: LemmaMode) -> String {
        Lemmatizer::new().lemmatize(word, mode)
    }

    #[test]
    fn test_mode_from_tag_defaults_to_noun() {
        assert_eq!(LemmaMode::from(PosTag::Other), LemmaMode::Noun);
        assert_eq!(LemmaMode::from(PosTag::Noun), LemmaMode::Noun);
        assert_eq!(LemmaMode::from(PosTag::Verb), LemmaMode::Verb);
        assert_eq!(LemmaMode::from(PosTag::Adjective), LemmaMode::Adjective);
        assert_eq!(LemmaMode::from(PosTag::Adverb), LemmaMode::Adverb);
    }

    #[test]
    fn test_noun_plurals() {
        assert_eq!(lemma("foxes", LemmaMode::Noun), "fox");
        assert_eq!(lemma("cats", LemmaMode::Noun), "cat");
        assert_eq!(lemma("cities", LemmaMode::Noun), "city");
        assert_eq!(lemma("classes", LemmaMode::Noun), "class");
        assert_eq!(lemma("churches", LemmaMode::Noun), "church");
        assert_eq!(lemma("children", LemmaMode::Noun), "child");
        assert_eq!(lemma("houses", LemmaMode::Noun), "house");
        assert_eq!(lemma("buzzes", LemmaMode::Noun), "buzz");
        assert_eq!(lemma("beaches", LemmaMode::Noun), "beach");
    }

    #[test]
    fn test_plurals_keep_their_final_e_or_a() {
        assert_eq!(lemma("sizes", LemmaMode::Noun), "size");
        assert_eq!(lemma("headaches", LemmaMode::Noun), "headache");
        assert_eq!(lemma("aches", LemmaMode::Noun), "ache");
        assert_eq!(lemma("niches", LemmaMode::Noun), "niche");
        assert_eq!(lemma("ideas", LemmaMode::Noun), "idea");
        assert_eq!(lemma("areas", LemmaMode::Noun), "area");
    }

    #[test]
    fn test_noun_singulars_untouched() {
        for word in ["glass", "status", "analysis", "this", "its", "fox", "news", "idea", "bias"] {
            assert_eq!(lemma(word, LemmaMode::Noun), word);
        }
    }

    #[test]
    fn test_verb_inflections() {
        assert_eq!(lemma("running", LemmaMode::Verb), "run");
        assert_eq!(lemma("jumped", LemmaMode::Verb), "jump");
        assert_eq!(lemma("making", LemmaMode::Verb), "make");
        assert_eq!(lemma("hoped", LemmaMode::Verb), "hope");
        assert_eq!(lemma("stopped", LemmaMode::Verb), "stop");
        assert_eq!(lemma("tried", LemmaMode::Verb), "try");
        assert_eq!(lemma("flying", LemmaMode::Verb), "fly");
        assert_eq!(lemma("calling", LemmaMode::Verb), "call");
        assert_eq!(lemma("added", LemmaMode::Verb), "add");
        assert_eq!(lemma("opened", LemmaMode::Verb), "open");
        assert_eq!(lemma("rotating", LemmaMode::Verb), "rotate");
        assert_eq!(lemma("treated", LemmaMode::Verb), "treat");
        assert_eq!(lemma("giving", LemmaMode::Verb), "give");
        assert_eq!(lemma("was", LemmaMode::Verb), "be");
        assert_eq!(lemma("went", LemmaMode::Verb), "go");
    }

    #[test]
    fn test_verb_false_suffixes() {
        assert_eq!(lemma("need", LemmaMode::Verb), "need");
        assert_eq!(lemma("bring", LemmaMode::Verb), "bring");
        assert_eq!(lemma("thing", LemmaMode::Verb), "thing");
        assert_eq!(lemma("evening", LemmaMode::Verb), "evening");
        assert_eq!(lemma("indeed", LemmaMode::Verb), "indeed");
    }

    #[test]
    fn test_adjective_degrees() {
        assert_eq!(lemma("happiest", LemmaMode::Adjective), "happy");
        assert_eq!(lemma("happier", LemmaMode::Adjective), "happy");
        assert_eq!(lemma("better", LemmaMode::Adjective), "good");
        assert_eq!(lemma("biggest", LemmaMode::Adjective), "big");
        assert_eq!(lemma("famous", LemmaMode::Adjective), "famous");
    }

    #[test]
    fn test_adverbs_only_use_exceptions() {
        assert_eq!(lemma("quickly", LemmaMode::Adverb), "quickly");
        assert_eq!(lemma("harder", LemmaMode::Adverb), "hard");
    }

    #[test]
    fn test_non_ascii_and_numbers_unchanged() {
        assert_eq!(lemma("1990s", LemmaMode::Noun), "1990s");
        assert_eq!(lemma("cafés", LemmaMode::Noun), "cafés");
    }

    #[test]
    fn test_lemmas_are_stable() {
        for word in ["run", "jump", "make", "fox", "city", "happy"] {
            for mode in [LemmaMode::Noun, LemmaMode::Verb] {
                let once = lemma(word, mode);
                assert_eq!(lemma(&once, mode), once);
            }
        }
    }
}
