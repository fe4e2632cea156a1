use songforge_spec::Locale;

use super::{Lexicon, LATIN_WORDS};

pub(super) static LEXICON: Lexicon = Lexicon {
    locale: Locale::DeDe,
    genres: [
        "Rock",
        "Pop",
        "Schlager",
        "Techno",
        "Metal",
        "Jazz",
        "Volksmusik",
        "Hip Hop",
        "Punk",
        "Electronic",
        "Klassik",
        "Indie",
    ],
    adjectives: &[
        "leise", "laut", "golden", "dunkel", "hell", "wild", "sanft", "kalt", "warm", "ewig",
        "verloren", "blau", "rot", "grün", "schnell", "langsam", "tief", "hoch", "frei", "still",
        "bitter", "süß", "klar", "neblig", "einsam", "glücklich", "traurig", "mutig", "müde",
        "wach", "heimlich", "fern", "nah", "leer", "voll", "brennend", "gläsern", "silbern",
        "rau", "weich", "stürmisch", "zart",
    ],
    first_names: &[
        "Lukas", "Leon", "Finn", "Jonas", "Paul", "Felix", "Emma", "Mia", "Hannah", "Sophie",
        "Lena", "Lea", "Anna", "Marie", "Julia", "Laura", "Maximilian", "Elias", "Noah", "Ben",
        "Tim", "Jan", "Katharina", "Sabine", "Jürgen", "Klaus", "Uwe", "Monika", "Petra",
        "Stefan",
    ],
    last_names: &[
        "Müller", "Schmidt", "Schneider", "Fischer", "Weber", "Meyer", "Wagner", "Becker",
        "Schulz", "Hoffmann", "Schäfer", "Koch", "Bauer", "Richter", "Klein", "Wolf", "Schröder",
        "Neumann", "Schwarz", "Zimmermann", "Braun", "Krüger", "Hofmann", "Hartmann", "Lange",
        "Schmitt", "Werner", "Krause", "Meier", "Lehmann",
    ],
    name_titles: &["Dr.", "Prof. Dr."],
    name_formats: &[
        "{first} {last}",
        "{first} {last}",
        "{first} {last}",
        "{first} {last}",
        "{first} {last}",
        "{title} {first} {last}",
    ],
    company_suffixes: &["GmbH", "AG", "KG", "GmbH & Co. KG", "e.V.", "OHG", "KGaA"],
    company_prefixes: &[],
    company_formats: &["{last} {suffix}", "{last}-{last}", "{last}, {last} und {last}"],
    product_adjectives: &[
        "Ergonomisch", "Rustikal", "Intelligent", "Großartig", "Unglaublich", "Fantastisch",
        "Praktisch", "Elegant", "Handgemacht", "Raffiniert", "Klein", "Modern", "Luxuriös",
    ],
    product_materials: &[
        "Stahl", "Holz", "Beton", "Kunststoff", "Baumwolle", "Granit", "Gummi", "Metall", "Seide",
        "Bronze", "Marmor", "Keramik",
    ],
    product_nouns: &[
        "Stuhl", "Auto", "Computer", "Tastatur", "Maus", "Fahrrad", "Ball", "Handschuhe", "Hose",
        "Hemd", "Tisch", "Schuhe", "Hut", "Handtücher", "Seife", "Käse", "Pizza", "Salat",
        "Würstchen", "Brezel",
    ],
    filler_words: LATIN_WORDS,
};
