use std::io::{BufRead, Write};
use std::time::Instant;

use semantic_median::{
    estimate_detailed, project_words, EmbeddingProvider, MedianError, RankingEngine,
    RankingResult,
};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::AppError;
use crate::report::{render_guess, render_ranking, unknown_guess, AxisLabel, GuessReport, JsonReport};

/// Rank the anchors, then place an optional guess, writing the report to `out`
pub fn run<P, R, W>(config: &Config, provider: &P, input: R, out: &mut W) -> Result<(), AppError>
where
    P: EmbeddingProvider + ?Sized,
    R: BufRead,
    W: Write,
{
    let (word1, word2) = (config.word1.as_str(), config.word2.as_str());
    let engine = RankingEngine::new(config.ranking_config());

    info!(
        word1,
        word2,
        workers = engine.worker_count(provider.vocabulary().len()),
        vocabulary = provider.vocabulary().len(),
        "ranking vocabulary"
    );
    let started = Instant::now();
    let result = engine.rank(word1, word2, provider)?;
    info!(
        scanned = result.scanned,
        excluded = result.excluded,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "ranking finished"
    );

    if !config.json {
        write!(out, "{}", render_ranking(&result, word1, word2, config.top_n))?;
    }

    let guess = match (&config.guess, config.interactive) {
        (Some(guess), _) => Some(guess.clone()),
        (None, true) => prompt_guess(config, input, out)?,
        (None, false) => None,
    };

    let guess_report = match guess {
        Some(guess) if provider.contains(&guess) => {
            Some(build_guess(&guess, word1, word2, &result, provider)?)
        }
        Some(guess) => {
            warn!(%guess, "guess not in vocabulary");
            if !config.json {
                write!(out, "{}", unknown_guess(&guess))?;
            }
            None
        }
        None => None,
    };

    if config.json {
        let report = JsonReport {
            word1,
            word2,
            best: result.best().map(|r| r.word.as_str()),
            ranking: &result,
            guess: guess_report,
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else if let Some(guess) = &guess_report {
        write!(out, "{}", render_guess(guess, word1, word2))?;
    }

    out.flush()?;
    Ok(())
}

fn prompt_guess<R: BufRead, W: Write>(
    config: &Config,
    mut input: R,
    out: &mut W,
) -> Result<Option<String>, AppError> {
    if !config.json {
        write!(
            out,
            "Enter your guess for the word that fits between '{}' and '{}': ",
            config.word1, config.word2
        )?;
        out.flush()?;
    }

    let mut line = String::new();
    input.read_line(&mut line)?;
    if !config.json {
        writeln!(out)?;
    }
    let guess = line.trim();
    Ok((!guess.is_empty()).then(|| guess.to_string()))
}

fn build_guess<P: EmbeddingProvider + ?Sized>(
    guess: &str,
    word1: &str,
    word2: &str,
    result: &RankingResult,
    provider: &P,
) -> Result<GuessReport, AppError> {
    let estimate = estimate_detailed(guess, word1, word2, provider)?;
    debug!(
        %guess,
        sim1 = estimate.sim1,
        sim2 = estimate.sim2,
        position = estimate.position,
        "guess position"
    );

    let mut words = vec![word1, word2];
    if let Some(best) = result.best() {
        words.push(best.word.as_str());
    }
    words.push(guess);

    let axis = match project_words(provider, word1, word2, &words) {
        Ok(positions) => words
            .iter()
            .zip(positions)
            .map(|(word, position)| AxisLabel {
                word: word.to_string(),
                position,
            })
            .collect(),
        Err(MedianError::DegenerateAxis) => {
            warn!(word1, word2, "anchors share one vector, skipping axis projection");
            Vec::new()
        }
        Err(err) => return Err(err.into()),
    };

    Ok(GuessReport::new(estimate, axis))
}
