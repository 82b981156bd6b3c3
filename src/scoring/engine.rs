use serde::{Serialize, Serializer};

use super::messages;
use crate::criteria::AnswerSet;

/// One of the four outcome buckets a score maps into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    LowPriority,
    PotentialNeedsWork,
    GoodFitLimitedFunds,
    StrongMatch,
}

impl Quadrant {
    /// Map a score to its quadrant. Scores above 5 classify like 5.
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=2 => Quadrant::LowPriority,
            3 => Quadrant::PotentialNeedsWork,
            4 => Quadrant::GoodFitLimitedFunds,
            _ => Quadrant::StrongMatch,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Quadrant::LowPriority => "Low Priority",
            Quadrant::PotentialNeedsWork => "Potential, Needs Work",
            Quadrant::GoodFitLimitedFunds => "Good Fit, Limited Funds",
            Quadrant::StrongMatch => "Strong Match",
        }
    }

    /// Hex color token associated with this quadrant.
    pub fn color(&self) -> &'static str {
        match self {
            Quadrant::LowPriority => "#FF4136",
            Quadrant::PotentialNeedsWork => "#FF851B",
            Quadrant::GoodFitLimitedFunds => "#2ECC40",
            Quadrant::StrongMatch => "#0074D9",
        }
    }

    /// Placement on the 2x2 fit chart, in percent of chart width and height.
    pub fn position(&self) -> Position {
        match self {
            Quadrant::LowPriority => Position { x: 25, y: 75 },
            Quadrant::PotentialNeedsWork => Position { x: 25, y: 25 },
            Quadrant::GoodFitLimitedFunds => Position { x: 75, y: 75 },
            Quadrant::StrongMatch => Position { x: 75, y: 25 },
        }
    }
}

impl Serialize for Quadrant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

/// The full outcome of one completed assessment pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub score: u32,
    pub quadrant: Quadrant,
    pub color: &'static str,
    pub position: Position,
    pub explanation: String,
    pub recommendation: String,
}

/// Count of criteria answered "yes".
pub fn score(answers: &AnswerSet) -> u32 {
    answers.count_yes()
}

/// Map a score and funder name to the full assessment.
/// Total and deterministic over all reachable scores.
pub fn classify(score: u32, funder_name: &str) -> Assessment {
    let quadrant = Quadrant::from_score(score);
    Assessment {
        score,
        quadrant,
        color: quadrant.color(),
        position: quadrant.position(),
        explanation: messages::explanation(quadrant, funder_name),
        recommendation: messages::recommendation(score, funder_name),
    }
}

/// Score the answer set and classify it in one pass.
pub fn assess(answers: &AnswerSet, funder_name: &str) -> Assessment {
    classify(score(answers), funder_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::default_criteria;

    fn answers_with_yes(count: usize) -> AnswerSet {
        let criteria = default_criteria();
        let mut answers = AnswerSet::new(&criteria);
        for criterion in criteria.iter().take(count) {
            answers.set(&criterion.id, true);
        }
        answers
    }

    #[test]
    fn test_score_counts_yes_answers() {
        for n in 0..=6 {
            assert_eq!(score(&answers_with_yes(n)), n as u32);
        }
    }

    #[test]
    fn test_quadrant_thresholds() {
        assert_eq!(Quadrant::from_score(0), Quadrant::LowPriority);
        assert_eq!(Quadrant::from_score(1), Quadrant::LowPriority);
        assert_eq!(Quadrant::from_score(2), Quadrant::LowPriority);
        assert_eq!(Quadrant::from_score(3), Quadrant::PotentialNeedsWork);
        assert_eq!(Quadrant::from_score(4), Quadrant::GoodFitLimitedFunds);
        assert_eq!(Quadrant::from_score(5), Quadrant::StrongMatch);
        assert_eq!(Quadrant::from_score(6), Quadrant::StrongMatch);
    }

    #[test]
    fn test_classify_is_deterministic() {
        for s in 0..=6 {
            assert_eq!(classify(s, "Acme"), classify(s, "Acme"));
        }
    }

    #[test]
    fn test_all_no_is_low_priority() {
        let result = assess(&answers_with_yes(0), "");
        assert_eq!(result.score, 0);
        assert_eq!(result.quadrant, Quadrant::LowPriority);
        assert_eq!(result.color, "#FF4136");
        assert_eq!(result.position, Position { x: 25, y: 75 });
    }

    #[test]
    fn test_three_yes_is_potential() {
        let result = assess(&answers_with_yes(3), "");
        assert_eq!(result.score, 3);
        assert_eq!(result.quadrant, Quadrant::PotentialNeedsWork);
        assert_eq!(result.color, "#FF851B");
        assert_eq!(result.position, Position { x: 25, y: 25 });
    }

    #[test]
    fn test_four_yes_is_good_fit() {
        let result = assess(&answers_with_yes(4), "");
        assert_eq!(result.quadrant, Quadrant::GoodFitLimitedFunds);
        assert_eq!(result.color, "#2ECC40");
        assert_eq!(result.position, Position { x: 75, y: 75 });
    }

    #[test]
    fn test_five_yes_is_strong_match_with_name() {
        let result = assess(&answers_with_yes(5), "Acme Foundation");
        assert_eq!(result.quadrant, Quadrant::StrongMatch);
        assert_eq!(result.color, "#0074D9");
        assert_eq!(result.position, Position { x: 75, y: 25 });
        assert!(result.explanation.contains("Acme Foundation"));
        assert!(result.recommendation.contains("Acme Foundation"));
    }

    #[test]
    fn test_six_yes_classifies_like_five() {
        let five = classify(5, "Acme");
        let six = classify(6, "Acme");
        assert_eq!(six.quadrant, five.quadrant);
        assert_eq!(six.explanation, five.explanation);
        assert_eq!(six.recommendation, five.recommendation);
    }

    #[test]
    fn test_empty_name_uses_fallback_reference() {
        for s in 0..=6 {
            let result = classify(s, "");
            assert!(result.explanation.contains("This funder"));
        }
    }

    #[test]
    fn test_assessment_serializes_to_json() {
        let result = classify(4, "Acme");
        let value: serde_json::Value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["score"], 4);
        assert_eq!(value["quadrant"], "Good Fit, Limited Funds");
        assert_eq!(value["color"], "#2ECC40");
        assert_eq!(value["position"]["x"], 75);
        assert_eq!(value["position"]["y"], 75);
    }
}
