use globetrotter_core::model::{Destination, DestinationDraft};
use tracing::debug;

use super::SqliteRepository;
use super::mapping::{destination_id_from_i64, encode_list, map_destination_row};
use crate::repository::{DestinationRepository, ImportOutcome, StorageError};

fn conn<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Connection(e.to_string())
}

#[async_trait::async_trait]
impl DestinationRepository for SqliteRepository {
    async fn insert_if_absent(
        &self,
        draft: DestinationDraft,
    ) -> Result<ImportOutcome, StorageError> {
        let validated = draft.validate()?;
        let clues = encode_list(&validated.clues)?;
        let trivia = encode_list(&validated.trivia)?;
        let image_url = validated.image.as_ref().map(ToString::to_string);

        let inserted = sqlx::query(
            r"
            INSERT INTO destinations (city, country, clues, fun_fact, trivia, image_url)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ON CONFLICT(city) DO NOTHING
            ",
        )
        .bind(&validated.city)
        .bind(&validated.country)
        .bind(clues)
        .bind(&validated.fun_fact)
        .bind(trivia)
        .bind(image_url)
        .execute(&self.pool)
        .await
        .map_err(conn)?;

        if inserted.rows_affected() == 1 {
            let id = destination_id_from_i64(inserted.last_insert_rowid())?;
            debug!(city = %validated.city, %id, "inserted destination");
            return Ok(ImportOutcome::Created(id));
        }

        let existing: i64 = sqlx::query_scalar("SELECT id FROM destinations WHERE city = ?1")
            .bind(&validated.city)
            .fetch_one(&self.pool)
            .await
            .map_err(conn)?;
        Ok(ImportOutcome::Skipped(destination_id_from_i64(existing)?))
    }

    async fn list_destinations(&self) -> Result<Vec<Destination>, StorageError> {
        let rows = sqlx::query(
            r"
            SELECT id, city, country, clues, fun_fact, trivia, image_url
            FROM destinations
            ORDER BY id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(conn)?;

        let mut destinations = Vec::with_capacity(rows.len());
        for row in rows {
            destinations.push(map_destination_row(&row)?);
        }
        Ok(destinations)
    }

    async fn get_by_city(&self, city: &str) -> Result<Option<Destination>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT id, city, country, clues, fun_fact, trivia, image_url
            FROM destinations WHERE city = ?1
            ",
        )
        .bind(city)
        .fetch_optional(&self.pool)
        .await
        .map_err(conn)?;

        row.as_ref().map(map_destination_row).transpose()
    }

    async fn count(&self) -> Result<u64, StorageError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM destinations")
            .fetch_one(&self.pool)
            .await
            .map_err(conn)?;
        u64::try_from(count).map_err(|_| StorageError::Serialization("negative count".into()))
    }
}
