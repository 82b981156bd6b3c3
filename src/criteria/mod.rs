mod validation;

pub use validation::validate_criteria;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Number of criteria in a valid set. The scoring thresholds assume this count.
pub const CRITERIA_COUNT: usize = 6;

/// One fixed yes/no question used to assess funder fit.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Criterion {
    /// Stable identifier, unique within the set (e.g. "geographical-alignment")
    pub id: String,
    /// The question shown to the user
    pub label: String,
    /// What a "yes" answer means
    pub description: String,
}

fn criterion(id: &str, label: &str, description: &str) -> Criterion {
    Criterion {
        id: id.to_string(),
        label: label.to_string(),
        description: description.to_string(),
    }
}

/// The built-in criterion set, in step order.
pub fn default_criteria() -> Vec<Criterion> {
    vec![
        criterion(
            "geographical-alignment",
            "Does the funder prioritize nonprofits in your geographical area?",
            "The funder has a specific focus or preference for supporting organizations within your geographical region.",
        ),
        criterion(
            "focus-alignment",
            "Is there an alignment with your nonprofit's program(s) and the funder's focus area(s)?",
            "The grant-making organization's focus areas align well with the programs and initiatives of your nonprofit.",
        ),
        criterion(
            "established-contact",
            "Do you have a relationship with the funder?",
            "Had at least one meaningful conversation with a representative who confirms alignment with our mission and funding strategies.",
        ),
        criterion(
            "funded-in-past",
            "Has the funder funded nonprofits that are similar in geography, focus, or sector?",
            "The organization has a track record of providing grants to nonprofit organizations similar to ours in terms of location, mission, or field of work.",
        ),
        criterion(
            "similar-programs",
            "Does the funder have a track record of funding similar programs that your nonprofit offers?",
            "The funder has a history of supporting projects or programs that closely align with the initiatives offered by your nonprofit.",
        ),
        criterion(
            "aligned-giving-range",
            "Does the funder have a giving range that aligns with the capacity and time you have to submit the proposal?",
            "The funder's typical grant amount matches the effort required for proposal submission and aligns with our organizational capacity.",
        ),
    ]
}

/// The current yes/no value for every criterion, keyed by criterion id.
///
/// Entries exist for exactly the ids the set was built from; setting an
/// unknown id is a no-op.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerSet {
    values: HashMap<String, bool>,
}

impl AnswerSet {
    /// All-false answers over the given criterion set.
    pub fn new(criteria: &[Criterion]) -> Self {
        Self {
            values: criteria.iter().map(|c| (c.id.clone(), false)).collect(),
        }
    }

    pub fn set(&mut self, id: &str, value: bool) {
        if let Some(slot) = self.values.get_mut(id) {
            *slot = value;
        }
    }

    pub fn toggle(&mut self, id: &str) {
        if let Some(slot) = self.values.get_mut(id) {
            *slot = !*slot;
        }
    }

    pub fn get(&self, id: &str) -> bool {
        self.values.get(id).copied().unwrap_or(false)
    }

    /// Count of criteria answered "yes".
    pub fn count_yes(&self) -> u32 {
        self.values.values().filter(|answered| **answered).count() as u32
    }

    /// Set every answer back to "no".
    pub fn clear(&mut self) {
        for value in self.values.values_mut() {
            *value = false;
        }
    }
}
