use serde::Serialize;

use semantic_median::{PositionEstimate, RankingResult, ScoreRecord};

/// A word and its position on the anchor axis
#[derive(Debug, Clone, Serialize)]
pub struct AxisLabel {
    pub word: String,
    pub position: f32,
}

/// JSON has no NaN or infinity, so `position` is `null` for those and this
/// tag carries which one it was
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PositionKind {
    Finite,
    Nan,
    Infinity,
    NegativeInfinity,
}

impl PositionKind {
    pub fn of(value: f32) -> Self {
        if value.is_nan() {
            Self::Nan
        } else if value == f32::INFINITY {
            Self::Infinity
        } else if value == f32::NEG_INFINITY {
            Self::NegativeInfinity
        } else {
            Self::Finite
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessReport {
    #[serde(flatten)]
    pub estimate: PositionEstimate,
    pub position_kind: PositionKind,
    pub axis: Vec<AxisLabel>,
}

impl GuessReport {
    pub fn new(estimate: PositionEstimate, axis: Vec<AxisLabel>) -> Self {
        Self {
            position_kind: PositionKind::of(estimate.position),
            estimate,
            axis,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonReport<'a> {
    pub word1: &'a str,
    pub word2: &'a str,
    pub best: Option<&'a str>,
    pub ranking: &'a RankingResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guess: Option<GuessReport>,
}

fn ranking_line(rank: usize, record: &ScoreRecord, word1: &str, word2: &str) -> String {
    format!(
        "{rank}. '{}' | Avg. Similarity: {:.4} | Similarity to '{word1}': {:.4} | \
         Similarity to '{word2}': {:.4} | Balance Penalty: {:.4}",
        record.word, record.avg_similarity, record.sim1, record.sim2, record.balance_penalty
    )
}

pub fn render_ranking(result: &RankingResult, word1: &str, word2: &str, top_n: usize) -> String {
    let mut out = format!("Top {top_n} semantic median words between '{word1}' and '{word2}':\n");
    for (i, record) in result.top_n.iter().enumerate() {
        out.push_str(&ranking_line(i + 1, record, word1, word2));
        out.push('\n');
    }
    match result.best() {
        Some(best) => out.push_str(&format!(
            "The best semantic median word between '{word1}' and '{word2}' is: '{}'\n",
            best.word
        )),
        None => out.push_str("No suitable common word found.\n"),
    }
    out
}

pub fn render_guess(guess: &GuessReport, word1: &str, word2: &str) -> String {
    let estimate = &guess.estimate;
    let mut out = format!(
        "Position of '{}' between '{word1}' (0) and '{word2}' (1): {:.4}\n",
        estimate.guess, estimate.position
    );
    if !estimate.position.is_finite() || !(0.0..=1.0).contains(&estimate.position) {
        out.push_str("(similarities have mixed signs or cancel out; position is outside [0, 1])\n");
    }
    out.push_str("Semantic positions along the anchor axis:\n");
    for label in &guess.axis {
        out.push_str(&format!("  {:<20} {:>9.4}\n", label.word, label.position));
    }
    out
}

pub fn unknown_guess(guess: &str) -> String {
    format!("The word '{guess}' is not in the model's vocabulary.\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(word: &str, avg: f32, sim1: f32, sim2: f32) -> ScoreRecord {
        ScoreRecord {
            word: word.to_string(),
            vocab_index: 0,
            avg_similarity: avg,
            sim1,
            sim2,
            balance_penalty: (sim1 - sim2).abs(),
        }
    }

    fn sample() -> RankingResult {
        let all = vec![record("beach", 0.5, 0.8, 0.6), record("paddle", 0.0, 0.3, 0.9)];
        RankingResult {
            top_n: all[..1].to_vec(),
            all,
            scanned: 5,
            excluded: 3,
        }
    }

    #[test]
    fn test_render_ranking() {
        let text = render_ranking(&sample(), "tropical", "canoe", 1);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "Top 1 semantic median words between 'tropical' and 'canoe':"
        );
        assert_eq!(
            lines[1],
            "1. 'beach' | Avg. Similarity: 0.5000 | Similarity to 'tropical': 0.8000 | \
             Similarity to 'canoe': 0.6000 | Balance Penalty: 0.2000"
        );
        assert_eq!(
            lines[2],
            "The best semantic median word between 'tropical' and 'canoe' is: 'beach'"
        );
    }

    #[test]
    fn test_render_empty_ranking() {
        let text = render_ranking(&RankingResult::default(), "sun", "sea", 10);
        assert!(text.ends_with("No suitable common word found.\n"));
    }

    #[test]
    fn test_render_guess_flags_out_of_range() {
        let guess = GuessReport::new(
            PositionEstimate {
                guess: "odd".to_string(),
                sim1: -0.2,
                sim2: 0.6,
                position: 1.5,
            },
            vec![AxisLabel {
                word: "odd".to_string(),
                position: 0.25,
            }],
        );
        let text = render_guess(&guess, "a", "b");
        assert!(text.contains("1.5000"));
        assert!(text.contains("outside [0, 1]"));
        assert!(text.contains("odd"));
    }

    #[test]
    fn test_json_report_shape() {
        let result = sample();
        let report = JsonReport {
            word1: "tropical",
            word2: "canoe",
            best: result.best().map(|r| r.word.as_str()),
            ranking: &result,
            guess: Some(GuessReport::new(
                PositionEstimate {
                    guess: "void".to_string(),
                    sim1: 0.0,
                    sim2: 0.0,
                    position: f32::NAN,
                },
                vec![],
            )),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["best"], "beach");
        assert_eq!(json["ranking"]["topN"][0]["word"], "beach");
        assert_eq!(json["ranking"]["excluded"], 3);
        // non-finite positions are serialized as null
        assert!(json["guess"]["position"].is_null());
        assert_eq!(json["guess"]["positionKind"], "nan");
        assert_eq!(json["guess"]["guess"], "void");
    }

    #[test]
    fn test_position_kind_keeps_non_finite_values_apart() {
        let kind = |position: f32| {
            let report = GuessReport::new(
                PositionEstimate {
                    guess: "g".to_string(),
                    sim1: 0.5,
                    sim2: -0.5,
                    position,
                },
                vec![],
            );
            let json = serde_json::to_value(&report).unwrap();
            json["positionKind"].as_str().unwrap().to_string()
        };
        assert_eq!(kind(0.25), "finite");
        assert_eq!(kind(-3.0), "finite");
        assert_eq!(kind(f32::NAN), "nan");
        assert_eq!(kind(f32::INFINITY), "infinity");
        assert_eq!(kind(f32::NEG_INFINITY), "negativeInfinity");
    }

    #[test]
    fn test_unknown_guess_message() {
        assert_eq!(
            unknown_guess("kayak"),
            "The word 'kayak' is not in the model's vocabulary.\n"
        );
    }
}
