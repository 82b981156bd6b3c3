use super::Quadrant;

/// Name used in message templates when the user left the funder name blank.
const FALLBACK_REFERENCE: &str = "This funder";

fn funder_reference(funder_name: &str) -> &str {
    if funder_name.is_empty() {
        FALLBACK_REFERENCE
    } else {
        funder_name
    }
}

/// The one-sentence verdict for a quadrant, with the funder name substituted.
pub fn explanation(quadrant: Quadrant, funder_name: &str) -> String {
    let who = funder_reference(funder_name);
    match quadrant {
        Quadrant::LowPriority => {
            format!("{} may not align well with our current goals or capacity.", who)
        }
        Quadrant::PotentialNeedsWork => format!(
            "There's potential with {}, but more research or relationship building may be needed.",
            who
        ),
        Quadrant::GoodFitLimitedFunds => format!(
            "{} aligns well with our mission, but funding may be competitive.",
            who
        ),
        Quadrant::StrongMatch => {
            format!("{} strongly aligns with our goals and has high potential.", who)
        }
    }
}

/// The longer next-steps paragraph, keyed by score bucket.
/// Scores of 5 and above share the strongest bucket; 0 and 1 share the lowest.
pub fn recommendation(score: u32, funder_name: &str) -> String {
    let who = funder_reference(funder_name);
    match score {
        5.. => format!(
            "The opportunity with {} shows excellent potential. Your nonprofit should \
             strongly consider pursuing this grant. The strong alignment across all \
             criteria suggests a high likelihood of success. Prioritize this application \
             and allocate resources accordingly.",
            who
        ),
        4 => format!(
            "This grant opportunity from {} is a good fit for your nonprofit. It's \
             recommended to pursue it, but be prepared for competition. Focus on \
             highlighting your unique strengths and how they align with {}'s priorities. \
             Consider reaching out to {} to build a stronger relationship.",
            who, who, who
        ),
        3 => format!(
            "There's potential in this opportunity with {}, but it requires careful \
             consideration. Your nonprofit should conduct more research and possibly \
             reach out to {} for clarification. If you decide to apply, emphasize the \
             areas where you align strongly and address potential concerns proactively \
             in your proposal.",
            who, who
        ),
        2 => format!(
            "This opportunity with {} has limited alignment with your nonprofit's \
             current situation. While not impossible, pursuing this grant may require \
             significant effort for a lower chance of success. Consider if the potential \
             funding justifies the resources needed for a competitive application.",
            who
        ),
        _ => format!(
            "Based on the current alignment, your nonprofit might want to prioritize \
             other opportunities over {}. The effort required for this application may \
             not justify the low potential for success. However, if {} is a strategic \
             funder, consider building a relationship for future opportunities that may \
             align better with your organization.",
            who, who
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explanation_substitutes_name() {
        let text = explanation(Quadrant::StrongMatch, "Acme Foundation");
        assert!(text.contains("Acme Foundation"));
        assert!(!text.contains("This funder"));
    }

    #[test]
    fn test_explanation_falls_back_when_name_empty() {
        for quadrant in [
            Quadrant::LowPriority,
            Quadrant::PotentialNeedsWork,
            Quadrant::GoodFitLimitedFunds,
            Quadrant::StrongMatch,
        ] {
            assert!(explanation(quadrant, "").contains("This funder"));
        }
    }

    #[test]
    fn test_recommendation_buckets_are_distinct() {
        let texts: Vec<_> = [0, 2, 3, 4, 5]
            .iter()
            .map(|&s| recommendation(s, "Acme"))
            .collect();
        for (i, a) in texts.iter().enumerate() {
            for b in texts.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_recommendation_edges() {
        // 0 and 1 share the lowest bucket; 5 and 6 share the strongest.
        assert_eq!(recommendation(0, "Acme"), recommendation(1, "Acme"));
        assert_eq!(recommendation(5, "Acme"), recommendation(6, "Acme"));
    }

    #[test]
    fn test_recommendation_falls_back_when_name_empty() {
        for score in 0..=6 {
            assert!(recommendation(score, "").contains("This funder"));
        }
    }
}
