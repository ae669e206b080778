use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;
use yatra_booking::{BookingRecord, BookingRepository, BookingStatus, RepositoryError};

/// Process-lifetime booking history. Records live in submission order and
/// are discarded when the process exits; durability sits behind the
/// repository trait, not here.
pub struct InMemoryBookingRepository {
    records: RwLock<Vec<BookingRecord>>,
}

impl InMemoryBookingRepository {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryBookingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn append(&self, record: BookingRecord) -> Result<(), RepositoryError> {
        tracing::debug!(booking_id = %record.id, "appending booking record");
        self.records.write().await.push(record);
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<BookingRecord>, RepositoryError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<BookingRecord>, RepositoryError> {
        Ok(self.records.read().await.clone())
    }

    async fn replace_status(
        &self,
        id: Uuid,
        status: BookingStatus,
    ) -> Result<(), RepositoryError> {
        let mut records = self.records.write().await;
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(RepositoryError::NotFound(id))?;
        record.status = status;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn appends_preserve_submission_order() {
        let repo = InMemoryBookingRepository::new();
        let first = BookingRecord::new(1, "Char Dham Classic");
        let second = BookingRecord::new(3, "Do Dham Express");

        repo.append(first.clone()).await.unwrap();
        repo.append(second.clone()).await.unwrap();

        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, first.id);
        assert_eq!(all[1].id, second.id);
    }

    #[tokio::test]
    async fn get_finds_by_id() {
        let repo = InMemoryBookingRepository::new();
        let record = BookingRecord::new(1, "Char Dham Classic");
        repo.append(record.clone()).await.unwrap();

        let found = repo.get(record.id).await.unwrap().unwrap();
        assert_eq!(found, record);
        assert!(repo.get(Uuid::now_v7()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn replace_status_touches_only_the_matching_record() {
        let repo = InMemoryBookingRepository::new();
        let first = BookingRecord::new(1, "Char Dham Classic");
        let second = BookingRecord::new(2, "Char Dham Deluxe");
        repo.append(first.clone()).await.unwrap();
        repo.append(second.clone()).await.unwrap();

        repo.replace_status(first.id, BookingStatus::Confirmed)
            .await
            .unwrap();

        let all = repo.list().await.unwrap();
        assert_eq!(all[0].status, BookingStatus::Confirmed);
        assert_eq!(all[1].status, BookingStatus::Pending);
        // Everything but the status is untouched
        assert_eq!(all[0].package_title, first.package_title);
        assert_eq!(all[0].booking_date, first.booking_date);
    }

    #[tokio::test]
    async fn replacing_an_unknown_record_fails() {
        let repo = InMemoryBookingRepository::new();
        let missing = Uuid::now_v7();
        let err = repo
            .replace_status(missing, BookingStatus::Confirmed)
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(id) if id == missing));
    }
}
