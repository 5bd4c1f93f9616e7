//! Card decoration: an optional emoji shown next to the source text.

use std::collections::HashMap;

use crate::model::Word;

pub trait IconLookup: Send + Sync {
    fn icon_for(&self, word: &Word) -> Option<&str>;
}

/// Emoji keyed by lowercase source text.
#[derive(Debug, Clone, Default)]
pub struct EmojiIcons {
    by_text: HashMap<String, String>,
}

const BUILTIN: &[(&str, &str)] = &[
    ("hello", "👋"),
    ("good morning", "🌅"),
    ("good night", "🌙"),
    ("goodbye", "👋"),
    ("thank you", "🙏"),
    ("please", "🙏"),
    ("nice to meet you", "🤝"),
    ("one", "❶"),
    ("two", "❷"),
    ("three", "❸"),
    ("four", "❹"),
    ("five", "❺"),
    ("ten", "❿"),
    ("red", "🔴"),
    ("blue", "🔵"),
    ("green", "🟢"),
    ("yellow", "🟡"),
    ("black", "⚫"),
    ("white", "⚪"),
    ("orange", "🟠"),
    ("purple", "🟣"),
    ("brown", "🟤"),
    ("gold", "🥇"),
    ("silver", "🥈"),
    ("light", "💡"),
    ("dark", "🌑"),
    ("mother", "👩"),
    ("father", "👨"),
    ("sister", "👧"),
    ("brother", "👦"),
    ("grandmother", "👵"),
    ("grandfather", "👴"),
    ("child", "👶"),
    ("parents", "👫"),
    ("airport", "✈️"),
    ("train station", "🚉"),
    ("passport", "🛂"),
    ("computer", "💻"),
    ("internet", "🌐"),
    ("hospital", "🏥"),
    ("pharmacy", "💊"),
    ("doctor", "👨‍⚕️"),
    ("meeting", "🤝"),
    ("budget", "💰"),
];

impl EmojiIcons {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn builtin() -> Self {
        let mut icons = Self::new();
        for (text, emoji) in BUILTIN {
            icons.insert(text, *emoji);
        }
        icons
    }

    pub fn insert(&mut self, source_text: &str, icon: impl Into<String>) {
        self.by_text
            .insert(source_text.trim().to_lowercase(), icon.into());
    }
}

impl IconLookup for EmojiIcons {
    fn icon_for(&self, word: &Word) -> Option<&str> {
        self.by_text
            .get(&word.source_text().trim().to_lowercase())
            .map(String::as_str)
    }
}
