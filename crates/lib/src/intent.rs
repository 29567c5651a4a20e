//! # Intent Detection
//!
//! Classifies a message into one of the five intents by plain substring
//! containment. The keyword lists are checked in a fixed order and the first
//! list with a hit wins; a message matching none of them is an inquiry.
//!
//! Matching is deliberately naive: short keywords such as `hi` also hit inside
//! longer words, and a message that both greets and complains is a greeting.

use crate::types::Intent;
use tracing::debug;

pub const GREETING_KEYWORDS: &[&str] = &[
    "halo",
    "hai",
    "hi",
    "hello",
    "selamat pagi",
    "selamat siang",
    "selamat sore",
    "selamat malam",
    "pagi",
    "siang",
    "sore",
    "malam",
];

pub const FAREWELL_KEYWORDS: &[&str] = &[
    "bye",
    "dadah",
    "sampai jumpa",
    "see you",
    "terima kasih",
    "sudah cukup",
    "selesai",
    "oke thanks",
    "ok thx",
];

pub const COMPLAINT_KEYWORDS: &[&str] = &[
    "marah",
    "kesal",
    "buruk",
    "lemot",
    "lambat",
    "error",
    "rusak",
    "gak bisa",
    "tidak bisa",
    "ga bisa",
    "bermasalah",
    "jelek",
    "payah",
    "susah",
    "ribet",
    "males",
    "bingung banget",
    "pusing",
    "stress",
    "menyebalkan",
    "kesel banget",
    "cape",
    "capek",
];

pub const PRAISE_KEYWORDS: &[&str] = &[
    "terima kasih",
    "makasih",
    "thanks",
    "bagus",
    "mantap",
    "keren",
    "hebat",
    "membantu",
    "baik",
    "top",
    "oke banget",
    "perfect",
    "helpful",
    "appreciate",
    "grateful",
    "nice",
    "good job",
];

/// Precedence order of the keyword lists.
const RULES: &[(Intent, &[&str])] = &[
    (Intent::Greeting, GREETING_KEYWORDS),
    (Intent::Farewell, FAREWELL_KEYWORDS),
    (Intent::Complaint, COMPLAINT_KEYWORDS),
    (Intent::Praise, PRAISE_KEYWORDS),
];

/// Returns the first keyword of `keywords` contained in the already lower-cased `text`.
pub(crate) fn first_hit<'a>(text: &str, keywords: &[&'a str]) -> Option<&'a str> {
    keywords.iter().copied().find(|k| text.contains(k))
}

/// Detects the intent of a user message.
pub fn detect_intent(message: &str) -> Intent {
    let lower = message.to_lowercase();
    for (intent, keywords) in RULES {
        if let Some(keyword) = first_hit(&lower, keywords) {
            debug!(%intent, keyword, "Intent keyword matched");
            return *intent;
        }
    }
    Intent::Inquiry
}
