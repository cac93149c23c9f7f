//! Catalog access for video records
//!
//! The store is a pure I/O boundary: an equality filter on (grade, subject)
//! against an external document collection. `VideoStore` is the seam that
//! lets tests substitute an in-memory catalog for the MongoDB client.

mod mongo;

pub use mongo::MongoVideoStore;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// A catalog entry, validated at the store boundary
///
/// Grade is only ever an equality filter, so it is not carried on the
/// record. Description is the one field the catalog may omit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoRecord {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub subject: String,
}

impl VideoRecord {
    /// Concatenated text used for similarity scoring
    ///
    /// Title, description (empty when absent) and subject joined with
    /// single spaces, matching the corpus layout the ranker expects.
    pub fn text_blob(&self) -> String {
        format!(
            "{} {} {}",
            self.title,
            self.description.as_deref().unwrap_or(""),
            self.subject
        )
    }
}

/// Read-only catalog lookup by exact (grade, subject) match
pub trait VideoStore {
    /// Fetch every record whose grade and subject fields equal the given
    /// filter values. An absent subject filters on null, the same way an
    /// absent grade does. Returns an empty vec when nothing matches. A
    /// single attempt: connection and query failures propagate to the
    /// caller.
    fn find_by_grade_and_subject(
        &self,
        grade: &serde_json::Value,
        subject: Option<&str>,
    ) -> Result<Vec<VideoRecord>>;
}
