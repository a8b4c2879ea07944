use globetrotter_core::model::{Destination, DestinationDraft, DestinationId};
use sqlx::Row;

use crate::repository::StorageError;

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

pub(crate) fn destination_id_from_i64(v: i64) -> Result<DestinationId, StorageError> {
    u64::try_from(v)
        .map(DestinationId::new)
        .map_err(|_| StorageError::Serialization("destination_id sign overflow".into()))
}

pub(crate) fn encode_list(items: &[String]) -> Result<String, StorageError> {
    serde_json::to_string(items).map_err(ser)
}

pub(crate) fn decode_list(field: &'static str, raw: &str) -> Result<Vec<String>, StorageError> {
    serde_json::from_str(raw)
        .map_err(|e| StorageError::Serialization(format!("invalid {field} JSON: {e}")))
}

pub(crate) fn map_destination_row(
    row: &sqlx::sqlite::SqliteRow,
) -> Result<Destination, StorageError> {
    let id = destination_id_from_i64(row.try_get::<i64, _>("id").map_err(ser)?)?;
    let clues_raw: String = row.try_get("clues").map_err(ser)?;
    let trivia_raw: String = row.try_get("trivia").map_err(ser)?;

    let draft = DestinationDraft {
        city: row.try_get("city").map_err(ser)?,
        country: row.try_get("country").map_err(ser)?,
        clues: decode_list("clues", &clues_raw)?,
        fun_fact: row.try_get("fun_fact").map_err(ser)?,
        trivia: decode_list("trivia", &trivia_raw)?,
        image_url: row.try_get("image_url").map_err(ser)?,
    };

    Destination::from_persisted(id, draft).map_err(ser)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_encoding_is_json() {
        let encoded = encode_list(&["a".to_string(), "b \"quoted\"".to_string()]).unwrap();
        assert_eq!(encoded, r#"["a","b \"quoted\""]"#);
        assert_eq!(
            decode_list("clues", &encoded).unwrap(),
            vec!["a".to_string(), "b \"quoted\"".to_string()]
        );
    }

    #[test]
    fn decode_reports_field_name() {
        let err = decode_list("trivia", "not json").unwrap_err();
        assert!(err.to_string().contains("trivia"));
    }

    #[test]
    fn negative_ids_are_rejected() {
        assert!(destination_id_from_i64(-1).is_err());
        assert_eq!(destination_id_from_i64(9).unwrap(), DestinationId::new(9));
    }
}
