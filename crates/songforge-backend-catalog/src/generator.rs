//! Locale-aware lexical generator.
//!
//! A `LexicalGenerator` owns one PCG32 stream keyed by a 32-bit seed and draws
//! words, names and filler prose from a locale's [`Lexicon`]. Output depends
//! only on (locale, seed, call order).

use rand::Rng;
use rand_pcg::Pcg32;
use songforge_spec::Locale;

use crate::lexicon::{lexicon, Lexicon};
use crate::rng::create_rng;

/// Fewest words in a generated sentence.
const MIN_SENTENCE_WORDS: usize = 3;
/// Most words in a generated sentence.
const MAX_SENTENCE_WORDS: usize = 10;
/// Sentences per generated paragraph.
const SENTENCES_PER_PARAGRAPH: usize = 3;

/// Seeded word, name and prose source for one locale.
#[derive(Debug, Clone)]
pub struct LexicalGenerator {
    lexicon: &'static Lexicon,
    rng: Pcg32,
}

impl LexicalGenerator {
    /// Creates a generator for `locale` seeded with `seed`.
    pub fn new(locale: Locale, seed: u32) -> Self {
        Self {
            lexicon: lexicon(locale),
            rng: create_rng(seed),
        }
    }

    /// An adjective-like word, lower case as stored in the lexicon.
    pub fn adjective(&mut self) -> String {
        self.pick(self.lexicon.adjectives).to_string()
    }

    /// A person's full name, filled from one of the locale's name formats.
    pub fn full_name(&mut self) -> String {
        let format = self.pick(self.lexicon.name_formats);
        self.fill(format)
    }

    /// An organization name, filled from one of the locale's company formats.
    pub fn company_name(&mut self) -> String {
        let format = self.pick(self.lexicon.company_formats);
        self.fill(format)
    }

    /// A three-word product name: adjective, material, noun.
    pub fn product_name(&mut self) -> String {
        let adjective = self.pick(self.lexicon.product_adjectives);
        let material = self.pick(self.lexicon.product_materials);
        let noun = self.pick(self.lexicon.product_nouns);
        format!("{} {} {}", adjective, material, noun)
    }

    /// One capitalized sentence of filler words ending in a period.
    pub fn sentence(&mut self) -> String {
        let count = self.rng.gen_range(MIN_SENTENCE_WORDS..=MAX_SENTENCE_WORDS);
        let words: Vec<&str> = (0..count)
            .map(|_| self.pick(self.lexicon.filler_words))
            .collect();
        let mut sentence = capitalize(&words.join(" "));
        sentence.push('.');
        sentence
    }

    /// A paragraph of filler sentences.
    pub fn paragraph(&mut self) -> String {
        let sentences: Vec<String> = (0..SENTENCES_PER_PARAGRAPH)
            .map(|_| self.sentence())
            .collect();
        sentences.join(" ")
    }

    /// `count` paragraphs separated by `\n`.
    pub fn paragraphs(&mut self, count: usize) -> String {
        let paragraphs: Vec<String> = (0..count).map(|_| self.paragraph()).collect();
        paragraphs.join("\n")
    }

    fn pick(&mut self, words: &'static [&'static str]) -> &'static str {
        if words.is_empty() {
            return "";
        }
        words[self.rng.gen_range(0..words.len())]
    }

    /// Expands `{first}`, `{last}`, `{title}`, `{suffix}` and `{prefix}`,
    /// drawing a fresh word for every occurrence in template order.
    fn fill(&mut self, template: &str) -> String {
        let mut out = String::with_capacity(template.len() + 16);
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let tail = &rest[open..];
            let Some(close) = tail.find('}') else {
                out.push_str(tail);
                return out;
            };

            let word = match &tail[1..close] {
                "first" => self.pick(self.lexicon.first_names),
                "last" => self.pick(self.lexicon.last_names),
                "title" => self.pick(self.lexicon.name_titles),
                "suffix" => self.pick(self.lexicon.company_suffixes),
                "prefix" => self.pick(self.lexicon.company_prefixes),
                _ => &tail[..=close],
            };
            out.push_str(word);
            rest = &tail[close + 1..];
        }

        out.push_str(rest);
        out
    }
}

/// Upper-cases the first character, leaving the rest untouched.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = LexicalGenerator::new(Locale::EnUs, 7);
        let mut b = LexicalGenerator::new(Locale::EnUs, 7);

        assert_eq!(a.adjective(), b.adjective());
        assert_eq!(a.full_name(), b.full_name());
        assert_eq!(a.company_name(), b.company_name());
        assert_eq!(a.product_name(), b.product_name());
        assert_eq!(a.paragraphs(3), b.paragraphs(3));
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut a = LexicalGenerator::new(Locale::EnUs, 1);
        let mut b = LexicalGenerator::new(Locale::EnUs, 2);
        assert_ne!(a.paragraphs(2), b.paragraphs(2));
    }

    #[test]
    fn test_adjective_from_lexicon() {
        for locale in Locale::ALL {
            let mut gen = LexicalGenerator::new(locale, 99);
            for _ in 0..50 {
                let word = gen.adjective();
                assert!(lexicon(locale).adjectives.contains(&word.as_str()));
            }
        }
    }

    #[test]
    fn test_names_have_no_unfilled_placeholders() {
        for locale in Locale::ALL {
            let mut gen = LexicalGenerator::new(locale, 5);
            for _ in 0..100 {
                let person = gen.full_name();
                let company = gen.company_name();
                assert!(!person.contains('{'), "{}", person);
                assert!(!company.contains('{'), "{}", company);
                assert!(company.split_whitespace().next().is_some(), "{}", company);
            }
        }
    }

    #[test]
    fn test_product_name_has_three_words() {
        let mut gen = LexicalGenerator::new(Locale::EnUs, 11);
        for _ in 0..20 {
            assert_eq!(gen.product_name().split(' ').count(), 3);
        }
    }

    #[test]
    fn test_sentence_shape() {
        let mut gen = LexicalGenerator::new(Locale::DeDe, 3);
        for _ in 0..50 {
            let sentence = gen.sentence();
            assert!(sentence.ends_with('.'));
            let first = sentence.chars().next().unwrap();
            assert!(first.is_uppercase(), "{}", sentence);
            let words = sentence.split(' ').count();
            assert!((MIN_SENTENCE_WORDS..=MAX_SENTENCE_WORDS).contains(&words));
        }
    }

    #[test]
    fn test_paragraphs_separated_by_newline() {
        let mut gen = LexicalGenerator::new(Locale::UkUa, 17);
        let text = gen.paragraphs(3);
        assert_eq!(text.split('\n').count(), 3);
        assert!(text.split('\n').all(|p| !p.is_empty()));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("quiet"), "Quiet");
        assert_eq!(capitalize("über"), "Über");
        assert_eq!(capitalize("тихий"), "Тихий");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_fill_keeps_unknown_placeholder() {
        let mut gen = LexicalGenerator::new(Locale::EnUs, 1);
        assert_eq!(gen.fill("{nope} x"), "{nope} x");
        assert_eq!(gen.fill("open {brace"), "open {brace");
    }
}
