//! MongoDB-backed catalog store (sync client)

use anyhow::{bail, Context, Result};
use mongodb::bson::{doc, to_bson, Bson, Document};
use mongodb::sync::{Client, Collection};

use crate::config::Config;

use super::{VideoRecord, VideoStore};

/// Catalog store backed by a MongoDB collection
pub struct MongoVideoStore {
    collection: Collection<Document>,
}

impl MongoVideoStore {
    /// Connect to the store described by the configuration
    ///
    /// One connection attempt, no retry. The driver's own server-selection
    /// timeout bounds the wait on an unreachable server.
    pub fn connect(config: &Config) -> Result<Self> {
        let client = Client::with_uri_str(&config.uri)
            .context("Failed to connect to MongoDB")?;
        let collection = client
            .database(&config.database)
            .collection::<Document>(&config.collection);

        Ok(Self { collection })
    }
}

impl VideoStore for MongoVideoStore {
    fn find_by_grade_and_subject(
        &self,
        grade: &serde_json::Value,
        subject: Option<&str>,
    ) -> Result<Vec<VideoRecord>> {
        let grade =
            to_bson(grade).context("Grade is not representable as a BSON filter value")?;
        let filter = build_filter(grade, subject);

        let cursor = self
            .collection
            .find(filter)
            .run()
            .context("Failed to query the video collection")?;

        let mut records = Vec::new();
        for document in cursor {
            let document = document.context("Failed to read a video document")?;
            records.push(record_from_document(&document)?);
        }
        Ok(records)
    }
}

/// Build the exact-match query document
///
/// An absent subject filters on BSON null, matching how an absent grade
/// field behaves: it matches documents where the field is null or missing,
/// not documents with an empty string.
fn build_filter(grade: Bson, subject: Option<&str>) -> Document {
    let subject = match subject {
        Some(subject) => Bson::String(subject.to_string()),
        None => Bson::Null,
    };
    doc! { "grade": grade, "subject": subject }
}

/// Validate a raw document into a `VideoRecord`
///
/// `_id`, `title` and `subject` are required and fail fast when absent;
/// `description` is optional. ObjectId identifiers are rendered as their
/// hex form, matching how the catalog refers to them elsewhere.
fn record_from_document(document: &Document) -> Result<VideoRecord> {
    let id = match document.get("_id") {
        Some(Bson::ObjectId(oid)) => oid.to_hex(),
        Some(Bson::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => bail!("Video document is missing the _id field"),
    };

    let title = match document.get_str("title") {
        Ok(title) => title.to_string(),
        Err(_) => bail!("Video document {id} is missing the title field"),
    };

    let subject = match document.get_str("subject") {
        Ok(subject) => subject.to_string(),
        Err(_) => bail!("Video document {id} is missing the subject field"),
    };

    let description = document.get_str("description").ok().map(str::to_string);

    Ok(VideoRecord {
        id,
        title,
        description,
        subject,
    })
}
