//! Submission hand-off.
//!
//! The wizard never performs the submission itself: it emits a draft and waits
//! for the host to report the outcome. [`SubmissionHandler`] is the seam hosts
//! implement; [`JsonFileSubmitter`] stores each listing as a JSON file.

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::Utc;
use uuid::Uuid;

use crate::errors::{Result, WizardError};
use crate::listing::{ListingDraft, ListingRecord};
use crate::utils::persistence;

const LISTING_EXTENSION: &str = "json";

/// Acknowledgement returned by a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub listing_id: Uuid,
    pub location: Option<PathBuf>,
}

pub trait SubmissionHandler {
    fn submit(&mut self, draft: &ListingDraft) -> Result<SubmissionReceipt>;
}

impl<F> SubmissionHandler for F
where
    F: FnMut(&ListingDraft) -> Result<SubmissionReceipt>,
{
    fn submit(&mut self, draft: &ListingDraft) -> Result<SubmissionReceipt> {
        self(draft)
    }
}

/// Persists listings as `<dir>/<id>.json`.
#[derive(Debug, Clone)]
pub struct JsonFileSubmitter {
    dir: PathBuf,
    user_id: Option<String>,
}

impl JsonFileSubmitter {
    pub fn new(dir: impl Into<PathBuf>, user_id: Option<String>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir, user_id })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn listing_path(&self, id: &Uuid) -> PathBuf {
        self.dir.join(format!("{}.{}", id, LISTING_EXTENSION))
    }

    /// Loads every stored listing, oldest first.
    pub fn load_all(&self) -> Result<Vec<ListingRecord>> {
        let mut records = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(LISTING_EXTENSION) {
                continue;
            }
            let data = fs::read_to_string(&path)?;
            records.push(serde_json::from_str::<ListingRecord>(&data)?);
        }
        records.sort_by_key(|record| record.created_at);
        Ok(records)
    }
}

impl SubmissionHandler for JsonFileSubmitter {
    fn submit(&mut self, draft: &ListingDraft) -> Result<SubmissionReceipt> {
        let record = ListingRecord::from_draft(draft, self.user_id.clone(), Utc::now());
        let path = self.listing_path(&record.id);
        persistence::save_json_atomic(&record, &path).map_err(|err| {
            WizardError::Submission(format!("could not store {}: {err}", path.display()))
        })?;
        tracing::info!(listing_id = %record.id, path = %path.display(), "listing stored");
        Ok(SubmissionReceipt {
            listing_id: record.id,
            location: Some(path),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::find_country;
    use tempfile::tempdir;

    fn draft() -> ListingDraft {
        ListingDraft {
            category: "Castles".into(),
            location: find_country("GB").cloned().unwrap(),
            guest_count: 6,
            room_count: 3,
            bathroom_count: 2,
            image_src: "https://example.com/keep.jpg".into(),
            price: 420,
            title: "Tower suite".into(),
            description: "Spiral stairs included.".into(),
        }
    }

    #[test]
    fn json_submitter_writes_one_file_per_listing() {
        let dir = tempdir().unwrap();
        let mut submitter = JsonFileSubmitter::new(dir.path(), Some("user-1".into())).unwrap();

        let receipt = submitter.submit(&draft()).unwrap();
        let path = receipt.location.clone().unwrap();
        assert!(path.exists());
        assert!(!persistence::tmp_path(&path).exists());

        let records = submitter.load_all().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, receipt.listing_id);
        assert_eq!(records[0].location_value, "GB");
        assert_eq!(records[0].user_id.as_deref(), Some("user-1"));
    }

    #[test]
    fn closures_act_as_handlers() {
        let mut calls = 0;
        let mut handler = |_: &ListingDraft| -> Result<SubmissionReceipt> {
            calls += 1;
            Err(WizardError::Submission("offline".into()))
        };
        assert!(handler.submit(&draft()).is_err());
        assert_eq!(calls, 1);
    }
}
