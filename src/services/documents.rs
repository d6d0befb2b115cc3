//! Document review service - KYC verification workflow.

use serde_json::json;

use super::entity_store::{EntityClient, EntityStore};
use super::parse_all;
use crate::domain::{Document, EntityKind, NewDocument, VerificationStatus};
use crate::errors::{AppResult, OptionExt};

/// Review operations backing the documents screen.
pub struct DocumentReview {
    entities: EntityClient,
}

impl DocumentReview {
    pub fn new(store: &EntityStore) -> Self {
        Self {
            entities: store.client(EntityKind::Document),
        }
    }

    /// All submissions, newest first.
    pub async fn list(&self) -> AppResult<Vec<Document>> {
        let records = self.entities.list(Some("-created_date"), None).await?;
        parse_all(&records)
    }

    /// Submissions in the given verification status.
    pub async fn by_status(&self, status: VerificationStatus) -> AppResult<Vec<Document>> {
        let records = self
            .entities
            .filter(json!({ "verification_status": status }))
            .await?;
        parse_all(&records)
    }

    /// Record a submission for review.
    pub async fn submit(&self, document: NewDocument) -> AppResult<Document> {
        self.entities.create(document).await?.parse()
    }

    /// Approve a submission, clearing any previous rejection reason.
    pub async fn approve(&self, id: &str) -> AppResult<Document> {
        self.entities
            .update(
                id,
                json!({
                    "verification_status": VerificationStatus::Approved,
                    "rejection_reason": "",
                }),
            )
            .await?
            .ok_or_not_found()?
            .parse()
    }

    /// Reject a submission with a reason shown to the user.
    pub async fn reject(&self, id: &str, reason: &str) -> AppResult<Document> {
        self.entities
            .update(
                id,
                json!({
                    "verification_status": VerificationStatus::Rejected,
                    "rejection_reason": reason,
                }),
            )
            .await?
            .ok_or_not_found()?
            .parse()
    }

    /// Submission tallies for the status cards.
    pub async fn status_counts(&self) -> AppResult<Vec<(VerificationStatus, usize)>> {
        let documents = self.list().await?;
        Ok(VerificationStatus::ALL
            .iter()
            .map(|status| {
                let count = documents
                    .iter()
                    .filter(|d| d.verification_status == *status)
                    .count();
                (*status, count)
            })
            .collect())
    }
}
