//! Page generation.
//!
//! One Mulberry32 stream seeded with the page seed drives the structural
//! choices of every slot on the page (title length, artist form, single vs.
//! album, genre). Text for each slot comes from a [`LexicalGenerator`] seeded
//! with that slot's item seed and advanced across title, artist and album.

use songforge_spec::{
    item_seed, page_seed, GenerationRequest, Locale, Mulberry32, SongSummary, SINGLE_ALBUM,
};

use crate::generator::{capitalize, LexicalGenerator};
use crate::lexicon::genres;
use crate::likes::live_likes;

/// Draws above this make a two-word title, otherwise three words.
const TWO_WORD_TITLE_THRESHOLD: f64 = 0.5;
/// Draws above this make a band artist, otherwise a person.
const BAND_THRESHOLD: f64 = 0.5;
/// Draws above this make the song a single.
const SINGLE_THRESHOLD: f64 = 0.7;

/// Generates one page of the catalog.
///
/// Pure apart from likes. `page_size == 0` yields an empty page; the caller
/// is responsible for rejecting non-positive pages before calling.
pub fn generate_page(
    locale: Locale,
    user_seed: u64,
    page: u64,
    page_size: u32,
    avg_likes: f64,
) -> Vec<SongSummary> {
    let seed = page_seed(user_seed, page);
    let mut rng = Mulberry32::new(seed);
    let genre_list = genres(locale);
    let first_index = page
        .wrapping_sub(1)
        .wrapping_mul(u64::from(page_size))
        .wrapping_add(1);

    tracing::debug!(
        locale = %locale,
        user_seed,
        page,
        page_size,
        page_seed = seed,
        "generating catalog page"
    );

    (0..page_size)
        .map(|slot| {
            let item = item_seed(seed, slot);
            let mut text = LexicalGenerator::new(locale, item);

            let word_count = if rng.next_f64() > TWO_WORD_TITLE_THRESHOLD { 2 } else { 3 };
            let title = song_title(&mut text, word_count);

            let artist = if rng.next_f64() > BAND_THRESHOLD {
                band_name(&mut text)
            } else {
                text.full_name()
            };

            let album = if rng.next_f64() > SINGLE_THRESHOLD {
                SINGLE_ALBUM.to_string()
            } else {
                text.product_name()
            };

            let genre = genre_list[rng.next_index(genre_list.len())].to_string();

            SongSummary {
                index: first_index.wrapping_add(u64::from(slot)),
                title,
                artist,
                album,
                genre,
                likes: live_likes(avg_likes),
                item_seed: item,
            }
        })
        .collect()
}

/// Generates the page described by a request.
pub fn generate_request(request: &GenerationRequest) -> Vec<SongSummary> {
    generate_page(
        request.locale,
        request.user_seed,
        request.page,
        request.page_size,
        request.avg_likes,
    )
}

fn song_title(text: &mut LexicalGenerator, word_count: usize) -> String {
    let words: Vec<String> = (0..word_count)
        .map(|_| capitalize(&text.adjective()))
        .collect();
    words.join(" ")
}

/// First two whitespace tokens of an organization name.
fn band_name(text: &mut LexicalGenerator) -> String {
    let company = text.company_name();
    let tokens: Vec<&str> = company.split_whitespace().take(2).collect();
    tokens.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn without_likes(songs: &[SongSummary]) -> Vec<SongSummary> {
        songs
            .iter()
            .cloned()
            .map(|mut s| {
                s.likes = 0;
                s
            })
            .collect()
    }

    #[test]
    fn test_page_is_deterministic() {
        let a = generate_page(Locale::EnUs, 12345, 2, 20, 0.0);
        let b = generate_page(Locale::EnUs, 12345, 2, 20, 0.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_page_deterministic_apart_from_likes() {
        let a = generate_page(Locale::DeDe, 777, 1, 20, 3.5);
        let b = generate_page(Locale::DeDe, 777, 1, 20, 3.5);
        assert_eq!(without_likes(&a), without_likes(&b));
    }

    #[test]
    fn test_indices_for_third_page() {
        let songs = generate_page(Locale::EnUs, 1, 3, 20, 0.0);
        let indices: Vec<u64> = songs.iter().map(|s| s.index).collect();
        assert_eq!(indices, (41..=60).collect::<Vec<u64>>());
    }

    #[test]
    fn test_empty_page() {
        assert!(generate_page(Locale::EnUs, 1, 1, 0, 0.0).is_empty());
    }

    #[test]
    fn test_item_seeds_are_consecutive() {
        let songs = generate_page(Locale::UkUa, 99, 4, 10, 0.0);
        let base = page_seed(99, 4);
        for (slot, song) in songs.iter().enumerate() {
            assert_eq!(song.item_seed, base.wrapping_add(slot as u32));
        }
    }

    #[test]
    fn test_likes_within_range() {
        let songs = generate_page(Locale::EnUs, 5, 1, 200, 2.5);
        assert!(songs.iter().all(|s| s.likes == 2 || s.likes == 3));
    }

    #[test]
    fn test_genres_come_from_locale_vocabulary() {
        let vocabulary = genres(Locale::DeDe);
        for page in 1..=5 {
            for song in generate_page(Locale::DeDe, 31337, page, 50, 0.0) {
                assert!(vocabulary.contains(&song.genre.as_str()), "{}", song.genre);
            }
        }
    }

    #[test]
    fn test_page_changes_content() {
        let first = generate_page(Locale::EnUs, 42, 1, 20, 0.0);
        let second = generate_page(Locale::EnUs, 42, 2, 20, 0.0);
        let titles = |songs: &[SongSummary]| songs.iter().map(|s| s.title.clone()).collect::<Vec<_>>();
        assert_ne!(titles(&first), titles(&second));
    }

    #[test]
    fn test_title_word_counts() {
        for song in generate_page(Locale::EnUs, 8, 1, 100, 0.0) {
            let words = song.title.split(' ').count();
            assert!(words == 2 || words == 3, "{}", song.title);
            assert!(song.title.split(' ').all(|w| w.chars().next().unwrap().is_uppercase()));
        }
    }

    #[test]
    fn test_band_names_have_at_most_two_tokens() {
        let mut text = LexicalGenerator::new(Locale::EnUs, 4);
        for _ in 0..50 {
            let band = band_name(&mut text);
            let tokens = band.split_whitespace().count();
            assert!((1..=2).contains(&tokens), "{}", band);
        }
    }

    #[test]
    fn test_mix_of_singles_and_albums() {
        let songs = generate_page(Locale::EnUs, 2024, 1, 200, 0.0);
        assert!(songs.iter().any(|s| s.is_single()));
        assert!(songs.iter().any(|s| !s.is_single()));
    }

    #[test]
    fn test_generate_request_matches_page() {
        let request = GenerationRequest::new(Locale::UkUa, 10, 2, 15, 0.0);
        assert_eq!(
            generate_request(&request),
            generate_page(Locale::UkUa, 10, 2, 15, 0.0)
        );
    }
}
