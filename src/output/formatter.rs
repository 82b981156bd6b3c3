use std::io::IsTerminal;

use anyhow::Result;
use chrono::Local;
use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::criteria::Criterion;
use crate::scoring::{Assessment, Quadrant};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Terminal width, defaulting to 80 columns for pipes
fn get_terminal_width() -> usize {
    terminal_size()
        .map(|(Width(w), _)| w as usize)
        .unwrap_or(80)
}

/// Wrap text at word boundaries to the given width
fn wrap_text(text: &str, width: usize) -> String {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines.join("\n")
}

fn quadrant_rgb(quadrant: Quadrant) -> (u8, u8, u8) {
    match quadrant {
        Quadrant::LowPriority => (255, 65, 54),
        Quadrant::PotentialNeedsWork => (255, 133, 27),
        Quadrant::GoodFitLimitedFunds => (46, 204, 64),
        Quadrant::StrongMatch => (0, 116, 217),
    }
}

/// Format the full assessment report for the non-interactive path.
pub fn format_report(assessment: &Assessment, funder_name: &str, use_colors: bool) -> String {
    let width = get_terminal_width().min(100);
    let who = if funder_name.is_empty() {
        "This funder"
    } else {
        funder_name
    };
    let date = Local::now().format("%Y-%m-%d");
    let heading = format!("GrantLaunch Analysis for {} ({})", who, date);
    let verdict = assessment.quadrant.label();
    let score_line = format!("Score:    {}/6", assessment.score);
    let explanation = wrap_text(&assessment.explanation, width.saturating_sub(2));
    let recommendation = wrap_text(&assessment.recommendation, width.saturating_sub(2));

    if use_colors {
        let (r, g, b) = quadrant_rgb(assessment.quadrant);
        format!(
            "{}\n\n  {}\n  Verdict:  {}\n\n{}\n\n{}\n\n{}\n",
            heading.bold(),
            score_line,
            verdict.truecolor(r, g, b).bold(),
            indent(&explanation),
            "Recommendation".bold().underline(),
            indent(&recommendation)
        )
    } else {
        format!(
            "{}\n\n  {}\n  Verdict:  {}\n\n{}\n\nRecommendation\n\n{}\n",
            heading,
            score_line,
            verdict,
            indent(&explanation),
            indent(&recommendation)
        )
    }
}

/// List the effective criterion set with the ids `score --yes` accepts.
pub fn format_criteria_list(criteria: &[Criterion], use_colors: bool) -> String {
    let width = get_terminal_width().min(100);
    criteria
        .iter()
        .enumerate()
        .map(|(i, criterion)| {
            let label = wrap_text(&criterion.label, width.saturating_sub(3));
            let description = wrap_text(&criterion.description, width.saturating_sub(3));
            if use_colors {
                format!(
                    "{}. {}\n{}\n{}",
                    i + 1,
                    criterion.id.cyan().bold(),
                    indent(&label),
                    indent(&description).dimmed()
                )
            } else {
                format!(
                    "{}. {}\n{}\n{}",
                    i + 1,
                    criterion.id,
                    indent(&label),
                    indent(&description)
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Encode the assessment as pretty-printed JSON.
pub fn render_json(assessment: &Assessment) -> Result<String> {
    Ok(serde_json::to_string_pretty(assessment)?)
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("  {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::default_criteria;
    use crate::scoring::classify;

    #[test]
    fn test_wrap_text_respects_width() {
        let text = "one two three four five six seven eight nine ten";
        let wrapped = wrap_text(text, 12);
        for line in wrapped.lines() {
            assert!(line.chars().count() <= 12, "line too long: '{}'", line);
        }
        // No words lost
        assert_eq!(wrapped.replace('\n', " "), text);
    }

    #[test]
    fn test_wrap_text_keeps_overlong_word_whole() {
        let wrapped = wrap_text("tiny extraordinarily-long-word end", 8);
        assert!(wrapped.contains("extraordinarily-long-word"));
    }

    #[test]
    fn test_report_contains_verdict_score_and_name() {
        let assessment = classify(5, "Acme Foundation");
        let report = format_report(&assessment, "Acme Foundation", false);
        assert!(report.contains("Strong Match"));
        assert!(report.contains("5/6"));
        assert!(report.contains("Acme Foundation"));
        assert!(report.contains("Recommendation"));
    }

    #[test]
    fn test_report_uses_fallback_reference() {
        let assessment = classify(0, "");
        let report = format_report(&assessment, "", false);
        assert!(report.contains("GrantLaunch Analysis for This funder"));
        assert!(report.contains("Low Priority"));
    }

    #[test]
    fn test_criteria_list_shows_every_id() {
        let criteria = default_criteria();
        let listing = format_criteria_list(&criteria, false);
        for criterion in &criteria {
            assert!(listing.contains(&criterion.id));
        }
    }

    #[test]
    fn test_render_json_carries_all_fields() {
        let assessment = classify(3, "Acme");
        let json = render_json(&assessment).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["score"], 3);
        assert_eq!(value["quadrant"], "Potential, Needs Work");
        assert_eq!(value["color"], "#FF851B");
        assert!(value["explanation"].as_str().unwrap().contains("Acme"));
        assert!(value["recommendation"].as_str().unwrap().contains("Acme"));
    }
}
