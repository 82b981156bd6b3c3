use std::collections::HashSet;

use super::{Criterion, CRITERIA_COUNT};

/// Validate a criterion set at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_criteria(criteria: &[Criterion]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if criteria.len() != CRITERIA_COUNT {
        errors.push(format!(
            "criteria: expected exactly {} entries, found {}",
            CRITERIA_COUNT,
            criteria.len()
        ));
    }

    let mut seen = HashSet::new();
    for (i, criterion) in criteria.iter().enumerate() {
        if criterion.id.trim().is_empty() {
            errors.push(format!("criteria[{}].id: must not be empty", i));
        } else if !seen.insert(criterion.id.as_str()) {
            errors.push(format!(
                "criteria[{}].id: duplicate id '{}'",
                i, criterion.id
            ));
        }
        if criterion.label.trim().is_empty() {
            errors.push(format!("criteria[{}].label: must not be empty", i));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
