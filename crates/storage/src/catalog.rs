//! Bundled vocabulary shipped with the app.

use lingua_core::catalog::StaticCatalog;
use lingua_core::error::Error;
use lingua_core::model::{DifficultyTier, Section, SectionId, Word};

struct SectionSeed {
    id: &'static str,
    tier: DifficultyTier,
    order: u32,
    icon: &'static str,
    words: &'static [(&'static str, &'static str)],
}

/// Builds the catalog of bundled sections.
///
/// # Errors
///
/// Returns an error only if the bundled data is malformed.
pub fn builtin_catalog() -> Result<StaticCatalog, Error> {
    let mut sections = Vec::with_capacity(SEEDS.len());
    for seed in SEEDS {
        let words = seed
            .words
            .iter()
            .map(|(source, target)| Word::new(*source, *target, seed.tier))
            .collect::<Result<Vec<_>, _>>()?;
        let section = Section::new(SectionId::new(seed.id)?, seed.tier, seed.order, words)
            .with_icon_key(seed.icon);
        sections.push(section);
    }
    Ok(StaticCatalog::new(sections)?)
}

const SEEDS: &[SectionSeed] = &[
    SectionSeed {
        id: "basic_greetings",
        tier: DifficultyTier::Beginner,
        order: 1,
        icon: "greetings",
        words: &[
            ("Hello", "Merhaba"),
            ("Good morning", "Günaydın"),
            ("Good afternoon", "İyi günler"),
            ("Good evening", "İyi akşamlar"),
            ("Good night", "İyi geceler"),
            ("Goodbye", "Hoşça kal"),
            ("See you later", "Görüşürüz"),
            ("How are you?", "Nasılsın?"),
            ("I'm fine", "İyiyim"),
            ("Thank you", "Teşekkür ederim"),
            ("You're welcome", "Rica ederim"),
            ("Please", "Lütfen"),
            ("Nice to meet you", "Tanıştığıma memnun oldum"),
            ("What's your name?", "Adın ne?"),
            ("My name is...", "Benim adım..."),
        ],
    },
    SectionSeed {
        id: "numbers",
        tier: DifficultyTier::Beginner,
        order: 2,
        icon: "numbers",
        words: &[
            ("Zero", "Sıfır"),
            ("One", "Bir"),
            ("Two", "İki"),
            ("Three", "Üç"),
            ("Four", "Dört"),
            ("Five", "Beş"),
            ("Six", "Altı"),
            ("Seven", "Yedi"),
            ("Eight", "Sekiz"),
            ("Nine", "Dokuz"),
            ("Ten", "On"),
            ("Twenty", "Yirmi"),
            ("Thirty", "Otuz"),
            ("Forty", "Kırk"),
            ("Fifty", "Elli"),
        ],
    },
    SectionSeed {
        id: "colors",
        tier: DifficultyTier::Beginner,
        order: 3,
        icon: "palette",
        words: &[
            ("Red", "Kırmızı"),
            ("Blue", "Mavi"),
            ("Green", "Yeşil"),
            ("Yellow", "Sarı"),
            ("Black", "Siyah"),
            ("White", "Beyaz"),
            ("Orange", "Turuncu"),
            ("Purple", "Mor"),
            ("Pink", "Pembe"),
            ("Brown", "Kahverengi"),
            ("Gray", "Gri"),
            ("Gold", "Altın"),
            ("Silver", "Gümüş"),
            ("Light", "Açık"),
            ("Dark", "Koyu"),
        ],
    },
    SectionSeed {
        id: "family",
        tier: DifficultyTier::Beginner,
        order: 4,
        icon: "family",
        words: &[
            ("Mother", "Anne"),
            ("Father", "Baba"),
            ("Sister", "Kız kardeş"),
            ("Brother", "Erkek kardeş"),
            ("Grandmother", "Büyükanne"),
            ("Grandfather", "Büyükbaba"),
            ("Aunt", "Teyze"),
            ("Uncle", "Amca"),
            ("Cousin", "Kuzen"),
            ("Child", "Çocuk"),
            ("Son", "Oğul"),
            ("Daughter", "Kız"),
            ("Wife", "Eş"),
            ("Husband", "Koca"),
            ("Parents", "Ebeveynler"),
        ],
    },
    SectionSeed {
        id: "daily_conversations",
        tier: DifficultyTier::Intermediate,
        order: 1,
        icon: "conversations",
        words: &[
            ("How was your day?", "Günün nasıl geçti?"),
            ("What do you do for work?", "Ne iş yapıyorsun?"),
            ("I'm learning Turkish", "Türkçe öğreniyorum"),
            ("Where do you live?", "Nerede yaşıyorsun?"),
            ("I like this place", "Bu yeri seviyorum"),
            ("Can you help me?", "Bana yardım edebilir misin?"),
            ("Of course", "Tabii ki"),
            ("I don't understand", "Anlamıyorum"),
            ("Can you speak slowly?", "Yavaş konuşabilir misin?"),
            ("What time is it?", "Saat kaç?"),
        ],
    },
    SectionSeed {
        id: "shopping_phrases",
        tier: DifficultyTier::Intermediate,
        order: 2,
        icon: "shopping",
        words: &[
            ("How much is this?", "Bu ne kadar?"),
            ("It's too expensive", "Çok pahalı"),
            ("Do you have this in blue?", "Bunun mavisi var mı?"),
            ("I'll take it", "Bunu alacağım"),
            ("Can I try it on?", "Deneyebilir miyim?"),
            ("Where is the fitting room?", "Deneme kabini nerede?"),
            ("Do you accept credit cards?", "Kredi kartı kabul ediyor musunuz?"),
            ("Is there a discount?", "İndirim var mı?"),
            ("Receipt", "Fiş"),
            ("Change", "Para üstü"),
        ],
    },
    SectionSeed {
        id: "travel_phrases",
        tier: DifficultyTier::Intermediate,
        order: 3,
        icon: "travel",
        words: &[
            ("Airport", "Havalimanı"),
            ("Could you show me the way?", "Yolu gösterebilir misiniz?"),
            ("I'm lost", "Kayboldum"),
            ("Train station", "Tren istasyonu"),
            ("One ticket please", "Bir bilet lütfen"),
            ("When is the next bus?", "Bir sonraki otobüs ne zaman?"),
            ("Hotel reservation", "Otel rezervasyonu"),
            ("Tourist information", "Turist bilgilendirme"),
            ("Passport", "Pasaport"),
            ("Baggage claim", "Bagaj teslim"),
        ],
    },
    SectionSeed {
        id: "business_turkish",
        tier: DifficultyTier::Advanced,
        order: 1,
        icon: "business",
        words: &[
            ("Meeting", "Toplantı"),
            ("Presentation", "Sunum"),
            ("Project", "Proje"),
            ("Deadline", "Son teslim tarihi"),
            ("Report", "Rapor"),
            ("Budget", "Bütçe"),
            ("Investment", "Yatırım"),
            ("Contract", "Sözleşme"),
            ("Negotiation", "Pazarlık"),
            ("Partnership", "Ortaklık"),
        ],
    },
    SectionSeed {
        id: "medical_terms",
        tier: DifficultyTier::Advanced,
        order: 2,
        icon: "medical",
        words: &[
            ("Headache", "Baş ağrısı"),
            ("Fever", "Ateş"),
            ("Blood pressure", "Tansiyon"),
            ("Prescription", "Reçete"),
            ("Pharmacy", "Eczane"),
            ("Emergency", "Acil durum"),
            ("Hospital", "Hastane"),
            ("Doctor", "Doktor"),
            ("Treatment", "Tedavi"),
            ("Appointment", "Randevu"),
        ],
    },
    SectionSeed {
        id: "technology",
        tier: DifficultyTier::Advanced,
        order: 3,
        icon: "technology",
        words: &[
            ("Computer", "Bilgisayar"),
            ("Software", "Yazılım"),
            ("Hardware", "Donanım"),
            ("Internet", "İnternet"),
            ("Database", "Veritabanı"),
            ("Cloud computing", "Bulut bilişim"),
            ("Artificial Intelligence", "Yapay Zeka"),
            ("Programming", "Programlama"),
            ("Network", "Ağ"),
            ("Cybersecurity", "Siber güvenlik"),
        ],
    },
    SectionSeed {
        id: "philosophy_ethics",
        tier: DifficultyTier::Expert,
        order: 1,
        icon: "philosophy",
        words: &[
            ("Moral philosophy", "Ahlak felsefesi"),
            ("Epistemology", "Bilgi kuramı"),
            ("Metaphysics", "Metafizik"),
            ("Existentialism", "Varoluşçuluk"),
            ("Phenomenology", "Fenomenoloji"),
            ("Rationalism", "Akılcılık"),
            ("Empiricism", "Deneycilik"),
            ("Dialectics", "Diyalektik"),
            ("Determinism", "Belirlenimcilik"),
            ("Free will", "Özgür irade"),
        ],
    },
    SectionSeed {
        id: "quantum_physics",
        tier: DifficultyTier::Expert,
        order: 2,
        icon: "quantum",
        words: &[
            ("Quantum mechanics", "Kuantum mekaniği"),
            ("Wave function", "Dalga fonksiyonu"),
            ("Superposition", "Süperpozisyon"),
            ("Entanglement", "Dolanıklık"),
            ("Uncertainty principle", "Belirsizlik ilkesi"),
            ("Quantum field", "Kuantum alanı"),
            ("Wave-particle duality", "Dalga-parçacık ikiliği"),
            ("Quantum state", "Kuantum durumu"),
            ("Observable", "Gözlenebilir"),
            ("Quantum tunneling", "Kuantum tünelleme"),
        ],
    },
    SectionSeed {
        id: "neuroscience",
        tier: DifficultyTier::Expert,
        order: 3,
        icon: "brain",
        words: &[
            ("Neural network", "Sinir ağı"),
            ("Synaptic plasticity", "Sinaptik plastisite"),
            ("Neurotransmitter", "Nörotransmitter"),
            ("Brain mapping", "Beyin haritalama"),
            ("Cognitive function", "Bilişsel işlev"),
            ("Neural pathway", "Sinirsel yolak"),
            ("Neuroplasticity", "Nöroplastisite"),
            ("Cerebral cortex", "Serebral korteks"),
            ("Neurodegenerative", "Nörodejeneratif"),
            ("Brain-computer interface", "Beyin-bilgisayar arayüzü"),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use lingua_core::catalog::Catalog;

    #[test]
    fn builtin_catalog_loads() {
        let catalog = builtin_catalog().unwrap();
        assert_eq!(catalog.len(), 13);
        for tier in DifficultyTier::ALL {
            let sections = catalog.sections_for_tier(tier);
            assert!(!sections.is_empty(), "{tier} has no sections");
            assert!(sections[0].is_first_in_tier());
        }
    }

    #[test]
    fn greetings_open_the_beginner_tier() {
        let catalog = builtin_catalog().unwrap();
        let first = &catalog.sections_for_tier(DifficultyTier::Beginner)[0];
        assert_eq!(first.id().as_str(), "basic_greetings");
        assert_eq!(first.words().len(), 15);
        assert_eq!(first.icon_key(), Some("greetings"));
    }
}
