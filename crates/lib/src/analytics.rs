//! # Research Analytics
//!
//! Aggregate counters over the stored chat turns and ratings. `Analytics` is what
//! gets persisted to `analytics.json` after every write; `ResearchSummary` is a
//! derived report built on demand.

use crate::{
    store::{Interaction, Rating},
    topics::GENERAL_TOPIC,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Rounds to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `part / whole * 100`, or zero when there is nothing to divide by.
fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

fn mean(values: impl IntoIterator<Item = f64>) -> f64 {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

fn empty_rating_distribution() -> BTreeMap<u8, usize> {
    (1..=5).map(|score| (score, 0)).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub total_sessions: usize,
    pub total_messages: usize,
    pub average_rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub context_distribution: BTreeMap<String, usize>,
    #[serde(default)]
    pub hierarchy_distribution: BTreeMap<String, usize>,
    #[serde(default)]
    pub formality_distribution: BTreeMap<String, usize>,
    #[serde(default = "empty_rating_distribution")]
    pub rating_distribution: BTreeMap<u8, usize>,
    #[serde(default)]
    pub topic_distribution: BTreeMap<String, usize>,
}

impl Default for Analytics {
    fn default() -> Self {
        Self {
            total_sessions: 0,
            total_messages: 0,
            average_rating: 0.0,
            last_updated: None,
            context_distribution: BTreeMap::new(),
            hierarchy_distribution: BTreeMap::new(),
            formality_distribution: BTreeMap::new(),
            rating_distribution: empty_rating_distribution(),
            topic_distribution: BTreeMap::new(),
        }
    }
}

impl Analytics {
    /// Recomputes every counter from scratch.
    pub fn compute(sessions: &[Interaction], ratings: &[Rating]) -> Self {
        let unique_sessions: HashSet<Option<&str>> =
            sessions.iter().map(|s| s.session_id.as_deref()).collect();

        let mut analytics = Analytics {
            total_sessions: unique_sessions.len(),
            total_messages: sessions.len(),
            average_rating: round2(mean(ratings.iter().map(|r| f64::from(r.rating)))),
            last_updated: Some(Utc::now()),
            ..Default::default()
        };

        for session in sessions {
            let meta = &session.metadata;
            *analytics
                .context_distribution
                .entry(meta.detected_context.to_string())
                .or_default() += 1;
            *analytics
                .hierarchy_distribution
                .entry(meta.hierarchy.to_string())
                .or_default() += 1;
            *analytics
                .formality_distribution
                .entry(meta.formality.to_string())
                .or_default() += 1;
            if !meta.topic.is_empty() && meta.topic != GENERAL_TOPIC {
                *analytics
                    .topic_distribution
                    .entry(meta.topic.clone())
                    .or_default() += 1;
            }
        }

        for rating in ratings {
            *analytics
                .rating_distribution
                .entry(rating.rating)
                .or_default() += 1;
        }

        analytics
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataCollection {
    pub total_sessions: usize,
    pub total_interactions: usize,
    pub total_ratings: usize,
    pub data_completeness: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CulturalAdaptation {
    /// Mean rating per hierarchy.
    pub hierarchy_effectiveness: BTreeMap<String, f64>,
    pub formality_preferences: BTreeMap<String, usize>,
    pub context_accuracy: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSatisfaction {
    pub overall_rating: f64,
    pub rating_distribution: BTreeMap<u8, usize>,
    /// Share of ratings of four stars or more, as a percentage.
    pub satisfaction_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemPerformance {
    pub average_response_time: f64,
    pub topics_handled: usize,
    pub cultural_elements_used: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    pub data_collection: DataCollection,
    pub cultural_adaptation: CulturalAdaptation,
    pub user_satisfaction: UserSatisfaction,
    pub system_performance: SystemPerformance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataQuality {
    pub sessions: usize,
    pub ratings: usize,
    /// Rounded percentage with a trailing `%`, e.g. `"67%"`.
    pub completeness: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchSummary {
    pub insights: Insights,
    pub generated_at: DateTime<Utc>,
    pub data_quality: DataQuality,
}

impl ResearchSummary {
    pub fn compute(sessions: &[Interaction], ratings: &[Rating], analytics: &Analytics) -> Self {
        let mut by_hierarchy: BTreeMap<String, Vec<f64>> = BTreeMap::new();
        for rating in ratings {
            by_hierarchy
                .entry(rating.hierarchy.to_string())
                .or_default()
                .push(f64::from(rating.rating));
        }
        let hierarchy_effectiveness = by_hierarchy
            .into_iter()
            .map(|(hierarchy, scores)| (hierarchy, round2(mean(scores))))
            .collect();

        let satisfied = ratings.iter().filter(|r| r.rating >= 4).count();
        let completeness = percentage(ratings.len(), sessions.len());

        ResearchSummary {
            insights: Insights {
                data_collection: DataCollection {
                    total_sessions: analytics.total_sessions,
                    total_interactions: sessions.len(),
                    total_ratings: ratings.len(),
                    data_completeness: completeness,
                },
                cultural_adaptation: CulturalAdaptation {
                    hierarchy_effectiveness,
                    formality_preferences: analytics.formality_distribution.clone(),
                    context_accuracy: analytics.context_distribution.clone(),
                },
                user_satisfaction: UserSatisfaction {
                    overall_rating: analytics.average_rating,
                    rating_distribution: analytics.rating_distribution.clone(),
                    satisfaction_rate: percentage(satisfied, ratings.len()),
                },
                system_performance: SystemPerformance {
                    average_response_time: mean(
                        sessions.iter().map(|s| s.metadata.response_time as f64),
                    ),
                    topics_handled: analytics.topic_distribution.len(),
                    cultural_elements_used: sessions
                        .iter()
                        .filter(|s| s.metadata.cultural_elements.indonesian_context)
                        .count(),
                },
            },
            generated_at: Utc::now(),
            data_quality: DataQuality {
                sessions: sessions.len(),
                ratings: ratings.len(),
                completeness: format!("{}%", completeness.round()),
            },
        }
    }
}
