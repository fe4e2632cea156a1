use songforge_spec::Locale;

use super::{Lexicon, LATIN_WORDS};

pub(super) static LEXICON: Lexicon = Lexicon {
    locale: Locale::EnUs,
    genres: [
        "Rock",
        "Pop",
        "Jazz",
        "Blues",
        "Hip Hop",
        "Electronic",
        "Country",
        "R&B",
        "Metal",
        "Folk",
        "Indie",
        "Classical",
    ],
    adjectives: &[
        "quiet", "golden", "electric", "hollow", "velvet", "broken", "restless", "silver",
        "crimson", "distant", "frozen", "gentle", "wild", "lonely", "bright", "hidden", "sweet",
        "bitter", "endless", "faded", "lucky", "midnight", "neon", "paper", "rusty", "sacred",
        "shallow", "shiny", "sleepy", "smooth", "stormy", "sunny", "tender", "thirsty", "vivid",
        "wandering", "wicked", "young", "ancient", "brave", "careless", "cosmic", "dusty",
        "fearless", "fragile", "glassy", "heavy", "humble", "jagged", "mellow", "misty", "proud",
    ],
    first_names: &[
        "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
        "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas",
        "Sarah", "Charles", "Karen", "Daniel", "Nancy", "Matthew", "Lisa", "Anthony", "Betty",
        "Mark", "Sandra", "Steven", "Ashley", "Kevin", "Emily", "Brian", "Donna", "Ethan",
        "Michelle", "Noah", "Olivia", "Liam", "Ava",
    ],
    last_names: &[
        "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
        "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas",
        "Taylor", "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris",
        "Sanchez", "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King",
        "Wright", "Scott", "Torres", "Nguyen", "Hill", "Flores",
    ],
    name_titles: &["Mr.", "Mrs.", "Ms.", "Miss", "Dr."],
    name_formats: &[
        "{first} {last}",
        "{first} {last}",
        "{first} {last}",
        "{first} {last}",
        "{title} {first} {last}",
    ],
    company_suffixes: &["Inc", "LLC", "Group", "and Sons"],
    company_prefixes: &[],
    company_formats: &["{last} {suffix}", "{last} - {last}", "{last}, {last} and {last}"],
    product_adjectives: &[
        "Small", "Ergonomic", "Rustic", "Intelligent", "Gorgeous", "Incredible", "Fantastic",
        "Practical", "Sleek", "Awesome", "Generic", "Handcrafted", "Handmade", "Licensed",
        "Refined", "Unbranded", "Tasty", "Modern", "Elegant", "Luxurious",
    ],
    product_materials: &[
        "Steel", "Wooden", "Concrete", "Plastic", "Cotton", "Granite", "Rubber", "Metal", "Soft",
        "Fresh", "Frozen", "Bronze", "Silk", "Marble", "Ceramic",
    ],
    product_nouns: &[
        "Chair", "Car", "Computer", "Keyboard", "Mouse", "Bike", "Ball", "Gloves", "Pants",
        "Shirt", "Table", "Shoes", "Hat", "Towels", "Soap", "Tuna", "Chicken", "Fish", "Cheese",
        "Bacon", "Pizza", "Salad", "Sausages", "Chips",
    ],
    filler_words: LATIN_WORDS,
};
