//! Completion evaluation.
//!
//! Scores model-generated code completions against reference answers,
//! line by line. Two scores are produced per sample: a character-level
//! edit-similarity ratio (0..100) over normalized text, and a smoothed
//! BLEU-4 n-gram overlap score over whitespace tokens. This pipeline is
//! independent of the extraction side and shares no state with it.

pub mod bleu;

use crate::error::{MineError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use similar::TextDiff;
use std::fs;
use std::path::Path;

/// Parameterized placeholder literals like `<STR_LIT:utf-8>`; the payload
/// replaces the whole marker.
static PARAM_LIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<(?:STR|NUM|CHAR)_LIT:(.*?)>").expect("literal regex compiles"));

/// Scores for one answer/prediction pair.
#[derive(Debug, Clone, Serialize)]
pub struct EvalResult {
    /// Whitespace-normalized reference answer.
    pub answer: String,

    /// Whitespace-normalized prediction.
    pub prediction: String,

    /// Edit-similarity ratio, 0..100.
    pub edit_sim: f64,

    /// Smoothed BLEU-4 score, 0..100.
    pub bleu: f64,
}

/// Aggregate scores over a whole prediction file.
#[derive(Debug, Clone)]
pub struct EvalReport {
    /// Per-sample scores, in input order.
    pub results: Vec<EvalResult>,

    /// Mean edit similarity across samples.
    pub edit_sim: f64,

    /// Corpus-level smoothed BLEU-4.
    pub bleu: f64,
}

impl EvalReport {
    /// The human-readable summary line for this report.
    pub fn summary(&self) -> String {
        format!("Edit sim: {:.2}, BLEU: {:.2}", self.edit_sim, self.bleu)
    }
}

/// Normalize the placeholder literals a completion model emits.
///
/// `<EOL>` becomes a newline, indentation markers become spaces, bare
/// literal markers become neutral literals, parameterized markers keep
/// their payload. The result is whitespace-normalized to single spaces.
pub fn post_process(code: &str) -> String {
    let code = code
        .replace("<EOL>", "\n")
        .replace("<INDENT>", " ")
        .replace("<DEDENT>", " ")
        .replace("<NUM_LIT>", "0")
        .replace("<STR_LIT>", "")
        .replace("<CHAR_LIT>", "");
    let code = PARAM_LIT.replace_all(&code, "$1");
    code.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Character-level similarity ratio between two strings, scaled 0..100.
pub fn edit_similarity(prediction: &str, answer: &str) -> f64 {
    f64::from(TextDiff::from_chars(prediction, answer).ratio()) * 100.0
}

/// Score a prediction file against an answer file.
///
/// Both files hold one sample per line and must have the same number of
/// lines; a count mismatch is fatal. Edit similarity is computed over
/// post-processed text, BLEU over the raw whitespace tokens.
pub fn evaluate(answers_path: &Path, predictions_path: &Path) -> Result<EvalReport> {
    let answers = read_lines(answers_path)?;
    let predictions = read_lines(predictions_path)?;

    if answers.len() != predictions.len() {
        return Err(MineError::SampleCountMismatch {
            answers: answers.len(),
            predictions: predictions.len(),
        });
    }

    let mut results = Vec::with_capacity(answers.len());
    let mut total_edit_sim = 0.0;
    let mut reference_tokens = Vec::with_capacity(answers.len());
    let mut prediction_tokens = Vec::with_capacity(predictions.len());

    for (answer, prediction) in answers.iter().zip(&predictions) {
        let processed_answer = post_process(answer.trim());
        let processed_prediction = post_process(prediction.trim());
        let edit_sim = edit_similarity(&processed_prediction, &processed_answer);
        total_edit_sim += edit_sim;

        let answer_toks: Vec<String> = answer.split_whitespace().map(str::to_string).collect();
        let prediction_toks: Vec<String> =
            prediction.split_whitespace().map(str::to_string).collect();
        let sample_bleu = bleu::sentence_bleu(&answer_toks, &prediction_toks);

        results.push(EvalResult {
            answer: answer_toks.join(" "),
            prediction: prediction_toks.join(" "),
            edit_sim,
            bleu: sample_bleu,
        });
        reference_tokens.push(answer_toks);
        prediction_tokens.push(prediction_toks);
    }

    let corpus_bleu = bleu::corpus_bleu(&reference_tokens, &prediction_tokens);
    let mean_edit_sim = if results.is_empty() {
        0.0
    } else {
        total_edit_sim / results.len() as f64
    };

    Ok(EvalReport {
        results,
        edit_sim: mean_edit_sim,
        bleu: corpus_bleu,
    })
}

/// Serialize per-sample results to a JSON file.
pub fn write_results(path: &Path, results: &[EvalResult]) -> Result<()> {
    let file = fs::File::create(path).map_err(|e| MineError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::to_writer(file, results)?;
    Ok(())
}

/// Read a sample file into its lines.
fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| MineError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(content.lines().map(str::to_string).collect())
}
