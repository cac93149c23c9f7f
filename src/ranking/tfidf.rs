//! TF-IDF vectorization
//!
//! Fit once over the corpus, then transform any text against the fitted
//! vocabulary and IDF weights. A vectorizer is scoped to a single ranking
//! call; nothing is shared or cached across invocations, which is what
//! keeps the corpus vectors and the query vector in the same space.
//!
//! Weighting follows the conventional smoothed scheme: raw term frequency
//! times `ln((1 + n_docs) / (1 + doc_freq)) + 1`, L2-normalized per vector.

use std::collections::{HashMap, HashSet};

use super::stop_words::is_stop_word;

/// Term-weighting model fitted over one corpus
pub struct TfidfVectorizer {
    /// Term to column index, axes in sorted term order
    vocabulary: HashMap<String, usize>,
    /// Smoothed inverse document frequency per column
    idf: Vec<f32>,
}

impl TfidfVectorizer {
    /// Fit vocabulary and IDF weights over the given documents
    ///
    /// Stop words are excluded before the vocabulary is built. Column
    /// order is sorted term order so repeated fits over the same corpus
    /// produce identical vectors.
    pub fn fit(documents: &[String]) -> Self {
        let n_docs = documents.len();
        let mut document_freq: HashMap<String, usize> = HashMap::new();

        for document in documents {
            let unique_terms: HashSet<String> = tokenize(document).into_iter().collect();
            for term in unique_terms {
                *document_freq.entry(term).or_insert(0) += 1;
            }
        }

        let mut terms: Vec<&String> = document_freq.keys().collect();
        terms.sort();

        let mut vocabulary = HashMap::with_capacity(terms.len());
        let mut idf = Vec::with_capacity(terms.len());
        for (column, term) in terms.into_iter().enumerate() {
            let df = document_freq[term];
            vocabulary.insert(term.clone(), column);
            idf.push(((1.0 + n_docs as f32) / (1.0 + df as f32)).ln() + 1.0);
        }

        Self { vocabulary, idf }
    }

    /// Transform a text into an L2-normalized weight vector
    ///
    /// Terms outside the fitted vocabulary contribute nothing. A text with
    /// no in-vocabulary terms yields the zero vector.
    pub fn transform(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.vocabulary.len()];

        for term in tokenize(text) {
            if let Some(&column) = self.vocabulary.get(&term) {
                vector[column] += self.idf[column];
            }
        }

        l2_normalize(&mut vector);
        vector
    }

    /// Number of terms in the fitted vocabulary
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }
}

/// Lowercase and split into word tokens, dropping stop words
///
/// A token is a run of word characters at least two characters long;
/// single-character tokens carry no ranking signal and are discarded.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|token| token.chars().count() >= 2)
        .filter(|token| !is_stop_word(token))
        .map(str::to_string)
        .collect()
}

// f64 accumulation: documents with identical term-weight multisets must
// get identical norms regardless of which columns the weights land in.
fn l2_normalize(vector: &mut [f32]) {
    let norm = vector
        .iter()
        .map(|&x| f64::from(x) * f64::from(x))
        .sum::<f64>()
        .sqrt();
    if norm > 0.0 {
        for value in vector.iter_mut() {
            *value = (f64::from(*value) / norm) as f32;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn corpus(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn tokenize_lowercases_and_splits() {
        assert_eq!(tokenize("Algebra Basics!"), vec!["algebra", "basics"]);
    }

    #[test]
    fn tokenize_drops_stop_words_and_short_tokens() {
        assert_eq!(tokenize("the cat on a mat"), vec!["cat", "mat"]);
        assert_eq!(tokenize("x y z"), Vec::<String>::new());
    }

    #[test]
    fn vocabulary_excludes_stop_words() {
        let vectorizer = TfidfVectorizer::fit(&corpus(&["the quick fox", "the lazy dog"]));
        assert_eq!(vectorizer.vocabulary_len(), 4);
        assert!(!vectorizer.vocabulary.contains_key("the"));
    }

    #[test]
    fn idf_follows_smoothed_formula() {
        // "shared" appears in both documents, "rare" in one.
        let vectorizer = TfidfVectorizer::fit(&corpus(&["shared rare", "shared other"]));
        let shared = vectorizer.vocabulary["shared"];
        let rare = vectorizer.vocabulary["rare"];
        assert_relative_eq!(
            vectorizer.idf[shared],
            (3.0f32 / 3.0).ln() + 1.0,
            epsilon = 1e-6
        );
        assert_relative_eq!(
            vectorizer.idf[rare],
            (3.0f32 / 2.0).ln() + 1.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn transformed_vectors_are_unit_length() {
        let vectorizer = TfidfVectorizer::fit(&corpus(&["algebra basics", "cooking pasta"]));
        let vector = vectorizer.transform("algebra basics");
        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert_relative_eq!(norm, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn out_of_vocabulary_terms_are_dropped_silently() {
        let vectorizer = TfidfVectorizer::fit(&corpus(&["algebra basics"]));
        let vector = vectorizer.transform("chemistry");
        assert!(vector.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn repeated_terms_raise_the_weight() {
        let vectorizer = TfidfVectorizer::fit(&corpus(&["math math drills", "history ancient"]));
        let math = vectorizer.vocabulary["math"];
        let drills = vectorizer.vocabulary["drills"];
        let vector = vectorizer.transform("math math drills");
        // Same IDF (both terms occur in one document), twice the frequency.
        assert!(vector[math] > vector[drills]);
    }

    #[test]
    fn fit_is_deterministic() {
        let documents = corpus(&["beta alpha gamma", "alpha delta"]);
        let a = TfidfVectorizer::fit(&documents);
        let b = TfidfVectorizer::fit(&documents);
        assert_eq!(a.transform("alpha gamma"), b.transform("alpha gamma"));
    }
}
