use songforge_spec::Locale;

use super::Lexicon;

pub(super) static LEXICON: Lexicon = Lexicon {
    locale: Locale::UkUa,
    genres: [
        "Рок",
        "Поп",
        "Джаз",
        "Блюз",
        "Хіп-хоп",
        "Електронна",
        "Фольк",
        "Метал",
        "Інді",
        "Класична",
        "Реп",
        "Панк",
    ],
    adjectives: &[
        "тихий", "гучний", "золотий", "темний", "світлий", "дикий", "ніжний", "холодний",
        "теплий", "вічний", "загублений", "синій", "червоний", "зелений", "швидкий", "повільний",
        "глибокий", "високий", "вільний", "гіркий", "солодкий", "ясний", "туманний", "самотній",
        "щасливий", "сумний", "сміливий", "втомлений", "далекий", "близький", "порожній",
        "срібний", "скляний", "м'який", "осінній", "весняний", "нічний", "ранковий", "зоряний",
        "вітряний",
    ],
    first_names: &[
        "Олександр", "Андрій", "Дмитро", "Максим", "Іван", "Богдан", "Тарас", "Олег", "Сергій",
        "Микола", "Олена", "Оксана", "Наталія", "Ірина", "Марія", "Анна", "Софія", "Катерина",
        "Юлія", "Тетяна",
    ],
    last_names: &[
        "Шевченко", "Коваленко", "Бондаренко", "Ткаченко", "Кравченко", "Олійник", "Шевчук",
        "Поліщук", "Бойко", "Ковальчук", "Мельник", "Савченко", "Руденко", "Мороз", "Лисенко",
        "Петренко", "Марченко", "Павленко", "Кузьменко", "Гончаренко",
    ],
    name_titles: &[],
    name_formats: &["{first} {last}", "{last} {first}"],
    company_suffixes: &[],
    company_prefixes: &["ТОВ", "ПП", "ПАТ", "ПрАТ", "ФОП"],
    company_formats: &["{prefix} {last}", "{prefix} «{last}»", "{prefix} {first}"],
    product_adjectives: &[
        "Ергономічний", "Практичний", "Неймовірний", "Фантастичний", "Елегантний", "Саморобний",
        "Вишуканий", "Маленький", "Сучасний", "Розкішний",
    ],
    product_materials: &[
        "сталевий", "дерев'яний", "бетонний", "пластиковий", "бавовняний", "гранітний",
        "гумовий", "металевий", "шовковий", "мармуровий",
    ],
    product_nouns: &[
        "стілець", "автомобіль", "комп'ютер", "годинник", "велосипед", "м'яч", "стіл",
        "капелюх", "светр", "ніж", "кошик", "ліхтар",
    ],
    filler_words: &[
        "світло", "вітер", "пісня", "місто", "ніч", "ранок", "море", "дорога", "серце", "тиша",
        "голос", "небо", "річка", "поле", "зоря", "осінь", "весна", "мрія", "вогонь", "дощ",
        "ліс", "хвиля", "час", "слово", "тінь", "гора", "сад", "шлях", "обрій", "сон", "і", "у",
        "на", "під", "над", "через", "крізь", "де", "коли", "знову", "завжди", "тихо", "далеко",
        "співає", "лине", "сяє", "чекає", "пам'ятає", "кличе", "тримає",
    ],
};
