//! Smoothed BLEU-4 scoring.
//!
//! N-gram overlap with add-one smoothing on every order and the standard
//! brevity penalty, over pre-tokenized samples. Scores are scaled 0..100.

use std::collections::HashMap;

/// Highest n-gram order considered.
const MAX_ORDER: usize = 4;

/// Count every n-gram of the token list up to `max_order`.
fn ngram_counts(tokens: &[String], max_order: usize) -> HashMap<Vec<String>, usize> {
    let mut counts = HashMap::new();
    for order in 1..=max_order {
        if tokens.len() < order {
            break;
        }
        for window in tokens.windows(order) {
            *counts.entry(window.to_vec()).or_insert(0) += 1;
        }
    }
    counts
}

/// Corpus-level smoothed BLEU-4 over aligned reference/translation pairs.
pub fn corpus_bleu(references: &[Vec<String>], translations: &[Vec<String>]) -> f64 {
    let mut matches_by_order = [0usize; MAX_ORDER];
    let mut possible_by_order = [0usize; MAX_ORDER];
    let mut reference_length = 0usize;
    let mut translation_length = 0usize;

    for (reference, translation) in references.iter().zip(translations) {
        reference_length += reference.len();
        translation_length += translation.len();

        let reference_counts = ngram_counts(reference, MAX_ORDER);
        let translation_counts = ngram_counts(translation, MAX_ORDER);

        for (ngram, count) in &translation_counts {
            let overlap = (*count).min(*reference_counts.get(ngram).unwrap_or(&0));
            if overlap > 0 {
                matches_by_order[ngram.len() - 1] += overlap;
            }
        }
        for order in 1..=MAX_ORDER {
            if translation.len() >= order {
                possible_by_order[order - 1] += translation.len() - order + 1;
            }
        }
    }

    if reference_length == 0 || translation_length == 0 {
        return 0.0;
    }

    let mut log_precision_sum = 0.0;
    for order in 0..MAX_ORDER {
        let precision = (matches_by_order[order] as f64 + 1.0)
            / (possible_by_order[order] as f64 + 1.0);
        log_precision_sum += precision.ln();
    }
    let geo_mean = (log_precision_sum / MAX_ORDER as f64).exp();

    let ratio = translation_length as f64 / reference_length as f64;
    let brevity_penalty = if ratio >= 1.0 {
        1.0
    } else {
        (1.0 - 1.0 / ratio).exp()
    };

    geo_mean * brevity_penalty * 100.0
}

/// BLEU for a single reference/translation pair.
pub fn sentence_bleu(reference: &[String], translation: &[String]) -> f64 {
    corpus_bleu(&[reference.to_vec()], &[translation.to_vec()])
}
