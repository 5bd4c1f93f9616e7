//! Display-string lookup.
//!
//! Domain values only carry keys (`colors`, `colors_desc`, `beginner`). The
//! front end resolves them through a [`Localizer`] at render time.

use std::borrow::Cow;
use std::collections::HashMap;

use crate::model::Language;

pub trait Localizer: Send + Sync {
    /// Resolves `key` for `language`.
    ///
    /// Falls back to English when the language lacks a translation, and to the
    /// key itself when nothing matches.
    fn text<'a>(&'a self, key: &'a str, language: Language) -> Cow<'a, str>;
}

/// Key → per-language string map.
#[derive(Debug, Clone, Default)]
pub struct StringTable {
    entries: HashMap<String, HashMap<Language, String>>,
}

const BUILTIN: &[(&str, &str, &str)] = &[
    ("app_name", "CardLingua", "CardLingua"),
    ("app_subtitle", "Learn English with Flashcards", "Kartlarla İngilizce Öğren"),
    ("beginner", "Beginner", "Başlangıç"),
    ("beginner_desc", "Basic Words", "Temel Kelimeler"),
    ("intermediate", "Intermediate", "Orta Seviye"),
    ("intermediate_desc", "Common Phrases", "Günlük İfadeler"),
    ("advanced", "Advanced", "İleri Seviye"),
    ("advanced_desc", "Complex Words", "Karmaşık Kelimeler"),
    ("expert", "Expert", "Uzman"),
    ("expert_desc", "Advanced Terms", "İleri Düzey Terimler"),
    ("locked", "Locked", "Kilitli"),
    ("complete", "Complete", "Tamamlandı"),
    ("score", "Score", "Puan"),
    ("accuracy", "Accuracy", "Doğruluk"),
    ("correct_answers", "Correct Answers", "Doğru Cevaplar"),
    ("incorrect_answers", "Incorrect Answers", "Yanlış Cevaplar"),
    ("play_again", "Try Again", "Tekrar Dene"),
    ("back_to_menu", "Back to Menu", "Menüye Dön"),
    ("progress", "Progress", "İlerleme"),
    ("percent_complete", "% Complete", "% Tamamlandı"),
    (
        "game_over",
        "Congratulations! You have completed all the cards!",
        "Tebrikler! Tüm kartları tamamladınız!",
    ),
    ("basic_greetings", "Basic Greetings", "Temel Selamlaşma"),
    ("basic_greetings_desc", "Learn essential greetings", "Temel selamlaşmaları öğren"),
    ("numbers", "Numbers", "Sayılar"),
    ("numbers_desc", "Basic numbers and counting", "Temel sayılar ve sayma"),
    ("colors", "Colors", "Renkler"),
    ("colors_desc", "Basic colors", "Temel renkler"),
    ("family", "Family", "Aile"),
    ("family_desc", "Family members", "Aile üyeleri"),
    ("daily_conversations", "Daily Conversations", "Günlük Konuşmalar"),
    ("daily_conversations_desc", "Basic daily dialogues", "Temel günlük diyaloglar"),
    ("shopping_phrases", "Shopping Phrases", "Alışveriş İfadeleri"),
    ("shopping_phrases_desc", "Common shopping expressions", "Temel alışveriş ifadeleri"),
    ("travel_phrases", "Travel Phrases", "Seyahat İfadeleri"),
    ("travel_phrases_desc", "Essential travel expressions", "Temel seyahat ifadeleri"),
    ("business_turkish", "Business English", "İş İngilizcesi"),
    ("business_turkish_desc", "Business terminology", "İş dünyası terimleri"),
    ("medical_terms", "Medical Terms", "Tıbbi Terimler"),
    ("medical_terms_desc", "Healthcare vocabulary", "Sağlık terimleri"),
    ("technology", "Technology", "Teknoloji"),
    ("technology_desc", "Tech terminology", "Teknoloji terimleri"),
    ("philosophy_ethics", "Philosophy & Ethics", "Felsefe ve Etik"),
    ("philosophy_ethics_desc", "Philosophical terms", "Felsefi terimler"),
    ("quantum_physics", "Quantum Physics", "Kuantum Fiziği"),
    ("quantum_physics_desc", "Physics terminology", "Fizik terimleri"),
    ("neuroscience", "Neuroscience", "Nörobilim"),
    ("neuroscience_desc", "Brain science terms", "Beyin bilimi terimleri"),
];

impl StringTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Strings shipped with the app for the built-in catalog and result screen.
    #[must_use]
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for (key, en, tr) in BUILTIN {
            table.insert(*key, Language::En, *en);
            table.insert(*key, Language::Tr, *tr);
        }
        table
    }

    pub fn insert(
        &mut self,
        key: impl Into<String>,
        language: Language,
        value: impl Into<String>,
    ) {
        self.entries
            .entry(key.into())
            .or_default()
            .insert(language, value.into());
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl Localizer for StringTable {
    fn text<'a>(&'a self, key: &'a str, language: Language) -> Cow<'a, str> {
        let Some(translations) = self.entries.get(key) else {
            return Cow::Borrowed(key);
        };
        translations
            .get(&language)
            .or_else(|| translations.get(&Language::En))
            .map_or(Cow::Borrowed(key), |s| Cow::Borrowed(s.as_str()))
    }
}
