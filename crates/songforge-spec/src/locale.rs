//! Supported locales.
//!
//! Locales form a closed set. Unknown identifiers never fail: they resolve to
//! [`Locale::DEFAULT`].

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A supported content locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English (United States).
    #[default]
    EnUs,
    /// German (Germany).
    DeDe,
    /// Ukrainian (Ukraine).
    UkUa,
}

impl Locale {
    /// Locale used when an identifier is unknown.
    pub const DEFAULT: Locale = Locale::EnUs;

    /// All supported locales, in display order.
    pub const ALL: [Locale; 3] = [Locale::EnUs, Locale::DeDe, Locale::UkUa];

    /// Returns the BCP 47 style tag (e.g., "en-US").
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::DeDe => "de-DE",
            Locale::UkUa => "uk-UA",
        }
    }

    /// Strictly parse a tag. Matching ignores ASCII case and accepts `_` as
    /// the separator.
    pub fn parse(tag: &str) -> Option<Locale> {
        let tag = tag.trim();
        Self::ALL.into_iter().find(|locale| {
            let known = locale.tag();
            known.len() == tag.len()
                && known
                    .bytes()
                    .zip(tag.bytes())
                    .all(|(a, b)| a.eq_ignore_ascii_case(&b) || (a == b'-' && b == b'_'))
        })
    }

    /// Resolve a tag, falling back to [`Locale::DEFAULT`] when unknown.
    pub fn resolve(tag: &str) -> Locale {
        Self::parse(tag).unwrap_or(Self::DEFAULT)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Locale::resolve(&tag))
    }
}
