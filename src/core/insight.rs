//! Journal insight: themes, a bounded sentiment score and feedback text.
//!
//! Unlike the keyword report, matching here is by substring on the
//! lowercased entry (sentiment, themes) and by ASCII word boundary,
//! case-insensitively, on the raw entry (self/group words).

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::fmt;

use crate::error::{LexisError, Result};

/// Entries shorter than this many UTF-16 code units are rejected
pub const MIN_ENTRY_LEN: usize = 10;

const NEUTRAL_SCORE: i32 = 50;
const KEYWORD_WEIGHT: i32 = 10;

const POSITIVE_STEMS: &[&str] = &[
    "mutlu", "harika", "güzel", "seviyorum", "başardım", "gurur", "huzur", "iyi", "keyif",
    "sevinç", "umut",
];

const NEGATIVE_STEMS: &[&str] = &[
    "üzgün", "kötü", "sinir", "kızgın", "korku", "endişe", "stres", "kaygı", "yalnız", "bıktım",
    "zor",
];

// Checked in order; a theme is added once if any of its stems is present
const THEME_STEMS: &[(Theme, &[&str])] = &[
    (Theme::Academic, &["okul", "ders", "sınav"]),
    (Theme::Social, &["arkadaş", "sosyal"]),
    (Theme::Family, &["aile", "anne", "baba"]),
    (Theme::Twinship, &["ikiz", "kardeş"]),
    (Theme::DecisionMaking, &["karar", "seçtim"]),
    (Theme::Boundaries, &["sınır", "hayır"]),
    (Theme::Future, &["gelecek", "hedef"]),
];

lazy_static! {
    static ref SELF_WORDS: Regex =
        Regex::new(r"(?i)(?-u:\b)(?:ben|benim|kendim|kendi|bana|beni)(?-u:\b)").unwrap();

    static ref GROUP_WORDS: Regex =
        Regex::new(r"(?i)(?-u:\b)(?:biz|bizim|ikizim|kardeşim|beraber|birlikte)(?-u:\b)")
            .unwrap();
}

/// Topic detected in a journal entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Theme {
    #[serde(rename = "Akademik")]
    Academic,
    #[serde(rename = "Sosyal")]
    Social,
    #[serde(rename = "Aile")]
    Family,
    #[serde(rename = "İkizlik")]
    Twinship,
    #[serde(rename = "Karar Alma")]
    DecisionMaking,
    #[serde(rename = "Sınır Koyma")]
    Boundaries,
    #[serde(rename = "Gelecek")]
    Future,
    #[serde(rename = "Genel")]
    General,
}

/// Sentiment bucket of a 0..=100 score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SentimentLabel {
    #[serde(rename = "Pozitif 😊")]
    Positive,
    #[serde(rename = "Nötr 😐")]
    Neutral,
    #[serde(rename = "Negatif 😔")]
    Negative,
}

impl SentimentLabel {
    pub fn from_score(score: u8) -> Self {
        if score >= 60 {
            SentimentLabel::Positive
        } else if score <= 40 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Pozitif 😊",
            SentimentLabel::Neutral => "Nötr 😐",
            SentimentLabel::Negative => "Negatif 😔",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Insight for a single journal entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JournalInsight {
    pub sentiment: SentimentLabel,
    #[serde(rename = "sentimentScore")]
    pub sentiment_score: u8,
    pub me_ratio: f64,
    pub we_ratio: f64,
    pub themes: Vec<Theme>,
    pub feedback: String,
}

/// Builds the journal insight for `entry`.
///
/// Fails only when the entry is shorter than [`MIN_ENTRY_LEN`].
pub fn journal_insight(entry: &str) -> Result<JournalInsight> {
    let length = entry.encode_utf16().count();
    if length < MIN_ENTRY_LEN {
        return Err(LexisError::EntryTooShort {
            length,
            min: MIN_ENTRY_LEN,
        });
    }

    let lower = entry.to_lowercase();

    let sentiment_score = sentiment_score(&lower);
    let sentiment = SentimentLabel::from_score(sentiment_score);

    let me_words = SELF_WORDS.find_iter(entry).count();
    let we_words = GROUP_WORDS.find_iter(entry).count();
    let me_ratio = me_words as f64 / (me_words + we_words).max(1) as f64;
    // Complement of me_ratio, so an entry with neither kind of word reads as all "we"
    let we_ratio = 1.0 - me_ratio;

    Ok(JournalInsight {
        sentiment,
        sentiment_score,
        me_ratio,
        we_ratio,
        themes: detect_themes(&lower),
        feedback: feedback(me_ratio, sentiment_score),
    })
}

/// 50 plus 10 per positive stem present minus 10 per negative stem present,
/// clamped to 0..=100. Each stem counts at most once.
pub fn sentiment_score(lower: &str) -> u8 {
    let present = |stems: &[&str]| stems.iter().filter(|s| lower.contains(*s)).count() as i32;
    let raw = NEUTRAL_SCORE + KEYWORD_WEIGHT * (present(POSITIVE_STEMS) - present(NEGATIVE_STEMS));
    raw.clamp(0, 100) as u8
}

pub fn detect_themes(lower: &str) -> Vec<Theme> {
    let themes: Vec<Theme> = THEME_STEMS
        .iter()
        .filter(|(_, stems)| stems.iter().any(|s| lower.contains(s)))
        .map(|(theme, _)| *theme)
        .collect();

    if themes.is_empty() {
        vec![Theme::General]
    } else {
        themes
    }
}

pub fn feedback(me_ratio: f64, sentiment_score: u8) -> String {
    let focus = if me_ratio > 0.6 {
        "Yazında bireysel odak yüksek - bireyselleşme sürecinde olumlu bir işaret! "
    } else if me_ratio < 0.4 {
        "Yazında ikizin ve \"biz\" kavramı öne çıkıyor. Kendi alanını da oluşturmaya çalış. "
    } else {
        "Dengeli bir bakış açısı görüyorum. "
    };

    let mood = if sentiment_score >= 70 {
        "Olumlu bir ruh hali içindesin!"
    } else if sentiment_score <= 30 {
        "Kendine nazik ol ve destek almaktan çekinme."
    } else {
        "Her duygu geçerlidir, yazmaya devam et."
    };

    format!("{focus}{mood}")
}
