use nf_core::{Metrics, Result, Review, ScoringInput, ScoringProvider, Tier};
use std::fmt;

const POSITIVE_WORDS: [&str; 10] = [
    "breakthrough", "improve", "improved", "success", "promising",
    "benefit", "growth", "agreement", "relief", "advance",
];

const NEGATIVE_WORDS: [&str; 10] = [
    "crisis", "shortage", "disaster", "failure", "decline",
    "concern", "risk", "collapse", "threat", "scandal",
];

const TOXIC_WORDS: [&str; 6] = ["idiot", "stupid", "hate", "moron", "disgusting", "liar"];

/// Deterministic provider driven by simple text features.
pub struct HeuristicScorer;

impl fmt::Debug for HeuristicScorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeuristicScorer").finish()
    }
}

impl Default for HeuristicScorer {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Default)]
struct Features {
    words: usize,
    letters: usize,
    uppercase: usize,
    exclamations: usize,
    has_source: bool,
    has_figures: bool,
    has_quotes: bool,
    positive: usize,
    negative: usize,
    toxic: usize,
}

impl Features {
    fn extract(input: &ScoringInput) -> Self {
        let mut text = String::new();
        if let Some(title) = &input.title {
            text.push_str(title);
            text.push('\n');
        }
        text.push_str(&input.content);

        let mut features = Features {
            has_source: input.url.is_some() || text.contains("http"),
            has_figures: text.chars().any(|c| c.is_ascii_digit()),
            has_quotes: text.contains('"'),
            exclamations: text.matches('!').count(),
            ..Default::default()
        };

        for c in text.chars().filter(|c| c.is_alphabetic()) {
            features.letters += 1;
            if c.is_uppercase() {
                features.uppercase += 1;
            }
        }

        for word in text.split_whitespace() {
            features.words += 1;
            let word = word
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase();
            if POSITIVE_WORDS.contains(&word.as_str()) {
                features.positive += 1;
            }
            if NEGATIVE_WORDS.contains(&word.as_str()) {
                features.negative += 1;
            }
            if TOXIC_WORDS.contains(&word.as_str()) {
                features.toxic += 1;
            }
        }

        features
    }

    fn uppercase_ratio(&self) -> f64 {
        if self.letters == 0 {
            0.0
        } else {
            self.uppercase as f64 / self.letters as f64
        }
    }

    fn per_word(&self, count: usize) -> f64 {
        if self.words == 0 {
            0.0
        } else {
            count as f64 / self.words as f64
        }
    }

    fn metrics(&self) -> Metrics {
        let mut credibility = 0.5;
        if self.has_source {
            credibility += 0.2;
        }
        if self.has_figures {
            credibility += 0.1;
        }
        if self.has_quotes {
            credibility += 0.1;
        }
        credibility -= (self.per_word(self.exclamations) * 2.0).min(0.3);

        let bias = self.uppercase_ratio() + self.per_word(self.exclamations) * 2.0;
        let sentiment = 0.5 + 0.1 * (self.positive as f64 - self.negative as f64);
        let toxicity = self.per_word(self.toxic) * 5.0;

        Metrics::new(credibility, bias, sentiment, toxicity)
    }

    fn feedback(&self, metrics: &Metrics) -> Vec<String> {
        let mut notes = Vec::new();
        if !self.has_source {
            notes.push("Consider adding additional sources to strengthen credibility.".to_string());
        }
        if !self.has_figures {
            notes.push("Some statements may benefit from more specific data points.".to_string());
        }
        if self.exclamations > 0 {
            notes.push("Sensational punctuation lowers perceived reliability.".to_string());
        }
        if self.toxic > 0 {
            notes.push("Language may be perceived as hostile or abusive.".to_string());
        }
        if nf_core::trust::tier(1.0 - metrics.bias) == Tier::Good {
            notes.push("Overall balanced perspective, minimal bias detected.".to_string());
        }
        notes
    }
}

impl HeuristicScorer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl ScoringProvider for HeuristicScorer {
    fn name(&self) -> &str {
        "heuristic"
    }

    async fn score(&self, input: &ScoringInput) -> Result<Metrics> {
        Ok(Features::extract(input).metrics())
    }

    async fn review(&self, input: &ScoringInput) -> Result<Review> {
        let features = Features::extract(input);
        let metrics = features.metrics();
        Ok(Review {
            metrics,
            status: None,
            feedback: features.feedback(&metrics),
        })
    }
}
