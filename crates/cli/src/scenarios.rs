//! # Validation Scenarios
//!
//! The fixed conversations replayed by `campusbot-cli check`, grouped by the
//! behaviour they exercise, and the sample ratings submitted for passing replies.

use campusbot::{Formality, Hierarchy, Intent};

#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub message: &'static str,
    pub hierarchy: Hierarchy,
    pub formality: Formality,
    pub expected: Intent,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ScenarioGroup {
    pub category: &'static str,
    pub scenarios: &'static [Scenario],
}

pub const SCENARIO_GROUPS: &[ScenarioGroup] = &[
    ScenarioGroup {
        category: "Hierarchy Awareness",
        scenarios: &[
            Scenario {
                message: "Wifi lemot banget!",
                hierarchy: Hierarchy::StudentToStaff,
                formality: Formality::Casual,
                expected: Intent::Complaint,
                description: "Student complaint to staff (casual)",
            },
            Scenario {
                message: "Wifi lemot banget!",
                hierarchy: Hierarchy::StudentToDosen,
                formality: Formality::Formal,
                expected: Intent::Complaint,
                description: "Student complaint to lecturer (formal)",
            },
            Scenario {
                message: "Wifi lemot banget!",
                hierarchy: Hierarchy::PeerToPeer,
                formality: Formality::Casual,
                expected: Intent::Complaint,
                description: "Student complaint to peer (casual)",
            },
        ],
    },
    ScenarioGroup {
        category: "Context Detection",
        scenarios: &[
            Scenario {
                message: "Makasih banyak infonya!",
                hierarchy: Hierarchy::StudentToStaff,
                formality: Formality::Casual,
                expected: Intent::Praise,
                description: "Praise detection",
            },
            Scenario {
                message: "Cara daftar ulang semester depan?",
                hierarchy: Hierarchy::StudentToStaff,
                formality: Formality::Casual,
                expected: Intent::Inquiry,
                description: "Inquiry detection",
            },
            Scenario {
                message: "Halo, selamat pagi!",
                hierarchy: Hierarchy::StudentToDosen,
                formality: Formality::Formal,
                expected: Intent::Greeting,
                description: "Greeting detection",
            },
            Scenario {
                message: "Oke, sudah cukup. Dadah!",
                hierarchy: Hierarchy::PeerToPeer,
                formality: Formality::Casual,
                expected: Intent::Farewell,
                description: "Farewell detection",
            },
        ],
    },
    ScenarioGroup {
        category: "Campus Information",
        scenarios: &[
            Scenario {
                message: "Info tentang beasiswa apa saja?",
                hierarchy: Hierarchy::StudentToStaff,
                formality: Formality::Formal,
                expected: Intent::Inquiry,
                description: "Scholarship information",
            },
            Scenario {
                message: "Jadwal perpustakaan buka tutup?",
                hierarchy: Hierarchy::StudentToStaff,
                formality: Formality::Casual,
                expected: Intent::Inquiry,
                description: "Library opening hours",
            },
            Scenario {
                message: "Cara bayar SPP cicilan?",
                hierarchy: Hierarchy::StudentToStaff,
                formality: Formality::Formal,
                expected: Intent::Inquiry,
                description: "Tuition payment information",
            },
        ],
    },
    ScenarioGroup {
        category: "Cultural Sensitivity",
        scenarios: &[
            Scenario {
                message: "Maaf pak, sistemnya error terus",
                hierarchy: Hierarchy::StudentToDosen,
                formality: Formality::Formal,
                expected: Intent::Complaint,
                description: "Respectful complaint to lecturer",
            },
            Scenario {
                message: "Thanks banget ya bro!",
                hierarchy: Hierarchy::PeerToPeer,
                formality: Formality::Casual,
                expected: Intent::Praise,
                description: "Casual thanks to peer",
            },
        ],
    },
];

/// Scores and feedback submitted for passing replies, used in turn.
pub const RATING_SAMPLES: &[(u8, &str)] = &[
    (5, "Sangat membantu dan sesuai budaya"),
    (4, "Baik tapi bisa lebih natural"),
    (3, "Cukup membantu"),
    (2, "Kurang sesuai ekspektasi"),
    (1, "Tidak membantu sama sekali"),
];

/// Iterates over every scenario with its group's category.
pub fn all_scenarios() -> impl Iterator<Item = (&'static str, &'static Scenario)> {
    SCENARIO_GROUPS
        .iter()
        .flat_map(|group| group.scenarios.iter().map(move |s| (group.category, s)))
}
