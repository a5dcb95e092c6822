//! PostgREST operations on the `play_records` table. Row-level security
//! scopes every call to the signed-in user, so no owner filter appears in
//! these queries. Listing is ordered by the server; the client displays the
//! rows exactly as returned.

use reqwest::Method;
use uuid::Uuid;

use super::error::{error_message, GatewayError};
use super::Gateway;
use crate::models::{NewRecord, PlayRecord, RecordChanges};

pub(crate) const RECORDS_TABLE: &str = "play_records";

const RECORD_COLUMNS: &str = "id,date,game_title,cost,play_count,created_at";

/// Query string for listing: explicit columns, newest date first.
fn list_query() -> [(&'static str, &'static str); 2] {
    [("select", RECORD_COLUMNS), ("order", "date.desc")]
}

/// PostgREST row filter for a single record.
fn id_filter(id: Uuid) -> (&'static str, String) {
    ("id", format!("eq.{}", id))
}

impl Gateway {
    pub async fn list_records(&self) -> Result<Vec<PlayRecord>, GatewayError> {
        let response = self
            .request(Method::GET, self.rest_url(RECORDS_TABLE))
            .query(&list_query())
            .send()
            .await
            .map_err(|e| GatewayError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Fetch(error_message(status, &body)));
        }
        response
            .json()
            .await
            .map_err(|e| GatewayError::Fetch(e.to_string()))
    }

    pub async fn insert_record(&self, record: &NewRecord) -> Result<(), GatewayError> {
        // PostgREST bulk-insert shape; we always send a single row.
        let response = self
            .request(Method::POST, self.rest_url(RECORDS_TABLE))
            .header("Prefer", "return=minimal")
            .json(&[record])
            .send()
            .await
            .map_err(|e| GatewayError::Insert(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Insert(error_message(status, &body)));
        }
        Ok(())
    }

    pub async fn update_record(
        &self,
        id: Uuid,
        changes: &RecordChanges,
    ) -> Result<(), GatewayError> {
        let response = self
            .request(Method::PATCH, self.rest_url(RECORDS_TABLE))
            .query(&[id_filter(id)])
            .json(changes)
            .send()
            .await
            .map_err(|e| GatewayError::Update(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Update(error_message(status, &body)));
        }
        Ok(())
    }

    pub async fn delete_record(&self, id: Uuid) -> Result<(), GatewayError> {
        let response = self
            .request(Method::DELETE, self.rest_url(RECORDS_TABLE))
            .query(&[id_filter(id)])
            .send()
            .await
            .map_err(|e| GatewayError::Delete(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Delete(error_message(status, &body)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_query_selects_columns_and_orders_by_date_desc() {
        let query = list_query();
        assert_eq!(
            query[0],
            ("select", "id,date,game_title,cost,play_count,created_at")
        );
        assert_eq!(query[1], ("order", "date.desc"));
    }

    #[test]
    fn id_filter_uses_postgrest_eq_syntax() {
        let id = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
        assert_eq!(
            id_filter(id),
            ("id", "eq.550e8400-e29b-41d4-a716-446655440000".to_string())
        );
    }
}
