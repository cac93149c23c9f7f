//! Similarity ranking of catalog records against a query subject
//!
//! Builds a TF-IDF corpus from the fetched records, scores every record
//! against the subject string and returns the best-matching ids.

mod similarity;
mod stop_words;
mod tfidf;

pub use similarity::cosine_similarity;
pub use stop_words::is_stop_word;
pub use tfidf::TfidfVectorizer;

use std::cmp::Ordering;

use crate::store::VideoRecord;

/// Scores closer than this are the same match quality. Guards the
/// fetch-order tie-break against float rounding noise.
const SCORE_EPSILON: f32 = 1e-6;

/// Rank records by similarity to the subject, best first
///
/// Returns at most `top_k` ids. The vectorizer is fitted over the record
/// text blobs and the same fitted model transforms the subject, so both
/// sides live in one vector space. Score index i corresponds to record
/// index i until the final sort, which is stable: scores within
/// `SCORE_EPSILON` count as equal and keep the fetch order.
pub fn rank_videos(records: &[VideoRecord], subject: &str, top_k: usize) -> Vec<String> {
    if records.is_empty() {
        return Vec::new();
    }

    let blobs: Vec<String> = records.iter().map(VideoRecord::text_blob).collect();
    let vectorizer = TfidfVectorizer::fit(&blobs);
    let subject_vector = vectorizer.transform(subject);

    let mut scored: Vec<(&str, f32)> = records
        .iter()
        .zip(&blobs)
        .map(|(record, blob)| {
            let document_vector = vectorizer.transform(blob);
            let score = cosine_similarity(&subject_vector, &document_vector);
            (record.id.as_str(), score)
        })
        .collect();

    // Stable sort: ties preserve corpus fetch order.
    scored.sort_by(|a, b| compare_scores(a.1, b.1));

    scored
        .into_iter()
        .take(top_k)
        .map(|(id, _)| id.to_string())
        .collect()
}

/// Descending score order, near-equal scores treated as equal
fn compare_scores(a: f32, b: f32) -> Ordering {
    if (a - b).abs() <= SCORE_EPSILON {
        Ordering::Equal
    } else {
        b.partial_cmp(&a).unwrap_or(Ordering::Equal)
    }
}
