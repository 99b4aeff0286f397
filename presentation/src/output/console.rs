//! Console output formatter for debate results

use colored::Colorize;
use debate_application::DebateOutcome;

/// Formats debate outcomes for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete outcome: transcript plus verdict
    pub fn format(outcome: &DebateOutcome) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Agent Debate Results"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Topic:".cyan().bold(),
            outcome.topic
        ));

        output.push_str(&Self::section_header("Transcript"));
        for entry in &outcome.transcript {
            output.push_str(&format!(
                "{} {}: {}\n",
                format!("[Round {}]", entry.round).dimmed(),
                entry.role.to_string().yellow().bold(),
                entry.text
            ));
        }

        output.push_str(&Self::section_header("Verdict"));
        output.push_str(&Self::verdict_body(outcome));

        output.push_str(&Self::footer());
        output
    }

    /// Format as JSON
    pub fn format_json(outcome: &DebateOutcome) -> String {
        serde_json::to_string_pretty(outcome).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the verdict only (concise output)
    pub fn format_verdict_only(outcome: &DebateOutcome) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n\n", "=== Debate Verdict ===".cyan().bold()));
        output.push_str(&format!("{} {}\n\n", "Topic:".bold(), outcome.topic));
        output.push_str(&Self::verdict_body(outcome));

        output
    }

    fn verdict_body(outcome: &DebateOutcome) -> String {
        let verdict = &outcome.verdict;
        let mut body = String::new();

        body.push_str(&format!(
            "{} {}\n",
            "Winner:".green().bold(),
            verdict.winner
        ));
        body.push_str(&format!("{} {}\n", "Reason:".bold(), verdict.reason));

        body.push_str(&format!("\n{}\n", "Scores:".cyan().bold()));
        for (role, score) in &verdict.scores {
            body.push_str(&format!("  {}: {}\n", role, score));
        }

        body.push_str(&format!("\n{}\n", "Rounds spoken:".cyan().bold()));
        for (role, count) in &verdict.counts {
            body.push_str(&format!("  {}: {}\n", role, count));
        }

        if !verdict.coherence_issues.is_empty() {
            body.push_str(&format!("\n{}\n", "Coherence issues:".yellow().bold()));
            for issue in &verdict.coherence_issues {
                body.push_str(&format!("  entry {}: {}\n", issue.index, issue.text));
            }
        }

        body
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use debate_domain::{CoherenceIssue, RoleId, Topic, TranscriptEntry, Verdict};
    use std::collections::BTreeMap;

    fn outcome() -> DebateOutcome {
        let mut scores = BTreeMap::new();
        scores.insert(RoleId::new("Scientist"), 6);
        scores.insert(RoleId::new("Philosopher"), 6);

        let mut counts = BTreeMap::new();
        counts.insert(RoleId::new("Scientist"), 1);
        counts.insert(RoleId::new("Philosopher"), 1);

        DebateOutcome {
            topic: Topic::new("Should AI be regulated?"),
            transcript: vec![
                TranscriptEntry::new("Scientist", "AI must be regulated.", 1),
                TranscriptEntry::new("Philosopher", "Regulation stifles progress.", 2),
            ],
            verdict: Verdict {
                winner: RoleId::new("Scientist"),
                reason: "Presented more grounded, risk-based arguments.".to_string(),
                scores,
                counts,
                coherence_issues: vec![],
            },
        }
    }

    #[test]
    fn test_full_format_includes_every_round_and_the_winner() {
        colored::control::set_override(false);
        let text = ConsoleFormatter::format(&outcome());
        assert!(text.contains("Topic: Should AI be regulated?"));
        assert!(text.contains("[Round 1] Scientist: AI must be regulated."));
        assert!(text.contains("[Round 2] Philosopher: Regulation stifles progress."));
        assert!(text.contains("Winner: Scientist"));
        assert!(!text.contains("Coherence issues"));
    }

    #[test]
    fn test_coherence_issues_are_listed_when_present() {
        colored::control::set_override(false);
        let mut outcome = outcome();
        outcome.verdict.coherence_issues.push(CoherenceIssue {
            index: 1,
            text: "AI must be regulated.".to_string(),
        });
        let text = ConsoleFormatter::format(&outcome);
        assert!(text.contains("Coherence issues:"));
        assert!(text.contains("entry 1: AI must be regulated."));
    }

    #[test]
    fn test_verdict_only_skips_the_transcript() {
        colored::control::set_override(false);
        let text = ConsoleFormatter::format_verdict_only(&outcome());
        assert!(text.contains("Winner: Scientist"));
        assert!(!text.contains("[Round 1]"));
    }

    #[test]
    fn test_json_format_round_trips() {
        let text = ConsoleFormatter::format_json(&outcome());
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["verdict"]["winner"], "Scientist");
        assert_eq!(value["transcript"].as_array().unwrap().len(), 2);
    }
}
