//! Locale registry: vocabulary tables per locale.
//!
//! Each locale supplies the word lists the lexical generator draws from and
//! a fixed twelve-entry genre list. Templates use `{first}`, `{last}`,
//! `{suffix}`, `{prefix}` and `{title}` placeholders.

mod de_de;
mod en_us;
mod uk_ua;

use songforge_spec::Locale;

/// Number of genres every locale provides.
pub const GENRE_COUNT: usize = 12;

/// Vocabulary for one locale.
#[derive(Debug)]
pub struct Lexicon {
    /// Locale these tables belong to.
    pub locale: Locale,
    /// Genre vocabulary in draw order.
    pub genres: [&'static str; GENRE_COUNT],
    /// Adjective-like words for titles.
    pub adjectives: &'static [&'static str],
    /// Given names.
    pub first_names: &'static [&'static str],
    /// Family names.
    pub last_names: &'static [&'static str],
    /// Honorifics used by some name formats (`{title}`).
    pub name_titles: &'static [&'static str],
    /// Person name templates.
    pub name_formats: &'static [&'static str],
    /// Legal-form suffixes for organizations (`{suffix}`).
    pub company_suffixes: &'static [&'static str],
    /// Legal-form prefixes for organizations (`{prefix}`).
    pub company_prefixes: &'static [&'static str],
    /// Organization name templates.
    pub company_formats: &'static [&'static str],
    /// First word of a product name.
    pub product_adjectives: &'static [&'static str],
    /// Middle word of a product name.
    pub product_materials: &'static [&'static str],
    /// Last word of a product name.
    pub product_nouns: &'static [&'static str],
    /// Words for filler prose.
    pub filler_words: &'static [&'static str],
}

/// Look up the vocabulary for a locale.
pub fn lexicon(locale: Locale) -> &'static Lexicon {
    match locale {
        Locale::EnUs => &en_us::LEXICON,
        Locale::DeDe => &de_de::LEXICON,
        Locale::UkUa => &uk_ua::LEXICON,
    }
}

/// Genre vocabulary for a locale.
pub fn genres(locale: Locale) -> &'static [&'static str; GENRE_COUNT] {
    &lexicon(locale).genres
}

/// Latin filler words shared by locales whose prose falls back to lorem ipsum.
pub(crate) const LATIN_WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in", "reprehenderit",
    "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur", "excepteur", "sint",
    "occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui", "officia", "deserunt",
    "mollit", "anim", "id", "est", "laborum", "vero", "accusamus", "iusto", "odio", "dignissimos",
    "ducimus", "blanditiis", "praesentium", "voluptatum", "deleniti", "atque", "corrupti",
    "quos", "dolores", "quas", "molestias", "tempora", "soluta", "nobis", "eligendi", "optio",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_locale_has_twelve_distinct_genres() {
        for locale in Locale::ALL {
            let genres = genres(locale);
            let mut unique: Vec<&str> = genres.to_vec();
            unique.sort_unstable();
            unique.dedup();
            assert_eq!(unique.len(), GENRE_COUNT, "duplicate genre in {}", locale);
        }
    }

    #[test]
    fn test_lexicon_locale_matches() {
        for locale in Locale::ALL {
            assert_eq!(lexicon(locale).locale, locale);
        }
    }

    #[test]
    fn test_word_lists_are_populated() {
        for locale in Locale::ALL {
            let lex = lexicon(locale);
            assert!(lex.adjectives.len() >= 20);
            assert!(!lex.first_names.is_empty());
            assert!(!lex.last_names.is_empty());
            assert!(!lex.name_formats.is_empty());
            assert!(!lex.company_formats.is_empty());
            assert!(!lex.product_adjectives.is_empty());
            assert!(!lex.product_materials.is_empty());
            assert!(!lex.product_nouns.is_empty());
            assert!(lex.filler_words.len() >= 20);
        }
    }

    #[test]
    fn test_templates_only_use_available_placeholders() {
        for locale in Locale::ALL {
            let lex = lexicon(locale);
            for format in lex.name_formats.iter().chain(lex.company_formats) {
                if format.contains("{title}") {
                    assert!(!lex.name_titles.is_empty(), "{}: {}", locale, format);
                }
                if format.contains("{suffix}") {
                    assert!(!lex.company_suffixes.is_empty(), "{}: {}", locale, format);
                }
                if format.contains("{prefix}") {
                    assert!(!lex.company_prefixes.is_empty(), "{}: {}", locale, format);
                }
            }
        }
    }
}
