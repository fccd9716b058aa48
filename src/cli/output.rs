//! Output formatting for CLI commands.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, PlumeArgs};
use crate::engine::AnalysisResult;
use crate::error::Result;
use crate::history::SavedAnalysis;

/// Result of analyzing one input.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// File path, or `-` for stdin.
    pub source: String,
    /// `None` when the input was blank.
    pub analysis: Option<AnalysisResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_id: Option<String>,
}

/// Saved analyses, newest first.
#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryListing {
    pub entries: Vec<SavedAnalysis>,
}

/// A saved entry together with a fresh analysis of its text.
#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryEntryReport {
    pub entry: SavedAnalysis,
    pub analysis: Option<AnalysisResult>,
}

/// Outcome of a history mutation.
#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryChange {
    pub removed: usize,
    pub remaining: usize,
}

/// Types that have a human-readable rendering.
pub trait HumanOutput {
    /// Render as plain text for a terminal.
    fn to_human(&self) -> String;
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &PlumeArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 && !message.is_empty() {
                println!("{message}");
                println!();
            }
            print!("{}", result.to_human());
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

fn output_json<T: Serialize>(result: &T, args: &PlumeArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

/// Render one analysis result as a text block.
pub fn render_analysis(result: &AnalysisResult) -> String {
    let mut out = String::new();
    let engagement = &result.engagement;

    let _ = writeln!(
        out,
        "Engagement score: {} ({})",
        engagement.score,
        engagement.tier()
    );
    let _ = writeln!(out, "Word count:       {}", result.word_count);
    let _ = writeln!(
        out,
        "Sentiment:        {} (score {:.2}, +{} / -{})",
        result.sentiment.label,
        result.sentiment.score,
        result.sentiment.positive_count,
        result.sentiment.negative_count
    );
    let _ = writeln!(
        out,
        "Readability:      {} ({} sentences, {} words/sentence)",
        result.readability.readability_level,
        result.readability.total_sentences,
        result.readability.avg_words_per_sentence
    );

    if result.hashtags.is_empty() {
        let _ = writeln!(out, "Hashtags:         none");
    } else {
        let _ = writeln!(out, "Hashtags:         {}", result.hashtags.join(" "));
    }

    for sentence in &result.readability.long_sentences {
        let _ = writeln!(out, "  long: {sentence}");
    }

    if engagement.suggestions.is_empty() {
        let _ = writeln!(out, "Suggestions:      none, looking good");
    } else {
        let _ = writeln!(out, "Suggestions:");
        for (i, suggestion) in engagement.suggestions.iter().enumerate() {
            let _ = writeln!(
                out,
                "  {}. [{}] {}: {}",
                i + 1,
                suggestion.kind,
                suggestion.title,
                suggestion.description
            );
        }
    }

    out
}

impl HumanOutput for AnalysisReport {
    fn to_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "── {} ──", self.source);
        match &self.analysis {
            Some(result) => out.push_str(&render_analysis(result)),
            None => {
                let _ = writeln!(out, "Nothing to analyze");
            }
        }
        if let Some(id) = &self.saved_id {
            let _ = writeln!(out, "Saved as {id}");
        }
        out
    }
}

impl HumanOutput for Vec<AnalysisReport> {
    fn to_human(&self) -> String {
        self.iter()
            .map(HumanOutput::to_human)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl HumanOutput for HistoryListing {
    fn to_human(&self) -> String {
        if self.entries.is_empty() {
            return "No saved analyses yet.\n".to_string();
        }

        let mut out = String::new();
        for entry in &self.entries {
            let created = entry.created_at.format("%Y-%m-%d %H:%M:%S UTC");
            match &entry.summary {
                Some(summary) => {
                    let _ = writeln!(
                        out,
                        "{}  {}  {} words · score {} · {}",
                        entry.id, created, summary.word_count, summary.score, summary.sentiment
                    );
                }
                None => {
                    let _ = writeln!(out, "{}  {}", entry.id, created);
                }
            }
            let _ = writeln!(out, "    {}", entry.preview().replace('\n', " "));
        }
        out
    }
}

impl HumanOutput for HistoryEntryReport {
    fn to_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{}  saved {}",
            self.entry.id,
            self.entry.created_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", self.entry.text.trim_end());
        let _ = writeln!(out);
        match &self.analysis {
            Some(result) => out.push_str(&render_analysis(result)),
            None => {
                let _ = writeln!(out, "Nothing to analyze");
            }
        }
        out
    }
}

impl HumanOutput for HistoryChange {
    fn to_human(&self) -> String {
        format!(
            "Removed {} entr{}, {} remaining\n",
            self.removed,
            if self.removed == 1 { "y" } else { "ies" },
            self.remaining
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{ContentEngine, FixedCtaSelector};
    use std::sync::Arc;

    fn analysis(text: &str) -> Option<AnalysisResult> {
        ContentEngine::default()
            .with_cta_selector(Arc::new(FixedCtaSelector(0)))
            .analyze(text)
    }

    #[test]
    fn test_render_analysis() {
        let rendered = render_analysis(&analysis("Hi. Bye.").unwrap());

        assert!(rendered.contains("Word count:       2"));
        assert!(rendered.contains("Readability:      easy (2 sentences, 1 words/sentence)"));
        assert!(rendered.contains("Hashtags:         #bye"));
        assert!(rendered.contains("[cta] Add a Call-to-Action"));
    }

    #[test]
    fn test_blank_report() {
        let report = AnalysisReport {
            source: "-".to_string(),
            analysis: None,
            saved_id: None,
        };
        assert!(report.to_human().contains("Nothing to analyze"));

        let json = serde_json::to_value(&report).unwrap();
        assert!(json["analysis"].is_null());
        assert!(json.get("savedId").is_none());
    }

    #[test]
    fn test_history_change_wording() {
        let one = HistoryChange {
            removed: 1,
            remaining: 4,
        };
        assert_eq!(one.to_human(), "Removed 1 entry, 4 remaining\n");
    }
}
