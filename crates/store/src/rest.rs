//! PostgREST-style HTTP client for the hosted table store.
//!
//! The hosted backend exposes each table at `rest/v1/<table>` and encodes
//! filters and ordering as query parameters (`patient_id=eq.<uuid>`,
//! `order=visit_date.desc`). Inserts and updates ask for the stored row
//! back with `Prefer: return=representation`, which is how store-assigned
//! identifiers and timestamps reach the caller.
//!
//! Deliberately absent: timeouts, retries, caching. A hung call hangs until
//! the caller drops the future; a failed call surfaces the first error.

use crate::{Filter, Ordering, StoreConfig, StoreError, StoreResult, TableStore};
use serde_json::Value;
use std::sync::Arc;
use url::Url;
use uuid::Uuid;

/// HTTP client for the hosted table store.
#[derive(Clone, Debug)]
pub struct RestStore {
    cfg: Arc<StoreConfig>,
    http: reqwest::Client,
}

impl RestStore {
    /// Creates a client over the given connection configuration.
    pub fn new(cfg: Arc<StoreConfig>) -> Self {
        Self {
            cfg,
            http: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, table: &str) -> StoreResult<Url> {
        table_endpoint(self.cfg.base_url(), table)
    }

    fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header("apikey", self.cfg.api_key())
            .bearer_auth(self.cfg.api_key())
    }

    async fn read_rows(response: reqwest::Response) -> StoreResult<Vec<Value>> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(StoreError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    fn single_row(table: &str, mut rows: Vec<Value>) -> StoreResult<Value> {
        if rows.is_empty() {
            return Err(StoreError::MissingRepresentation(table.to_owned()));
        }
        Ok(rows.swap_remove(0))
    }
}

#[async_trait::async_trait]
impl TableStore for RestStore {
    async fn insert(&self, table: &str, row: Value) -> StoreResult<Value> {
        let url = self.endpoint(table)?;
        tracing::debug!(table, "inserting row");

        let response = self
            .authed(self.http.post(url))
            .header("Prefer", "return=representation")
            .json(&row)
            .send()
            .await?;

        let rows = Self::read_rows(response).await?;
        Self::single_row(table, rows)
    }

    async fn select(
        &self,
        table: &str,
        filter: Option<Filter>,
        order: Ordering,
    ) -> StoreResult<Vec<Value>> {
        let mut url = self.endpoint(table)?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("select", "*");
            if let Some(filter) = &filter {
                pairs.append_pair(filter.column, &eq_param(&filter.value));
            }
            pairs.append_pair("order", &order_param(order));
        }
        tracing::debug!(table, "selecting rows");

        let response = self.authed(self.http.get(url)).send().await?;
        Self::read_rows(response).await
    }

    async fn update(&self, table: &str, id: Uuid, patch: Value) -> StoreResult<Value> {
        let mut url = self.endpoint(table)?;
        url.query_pairs_mut()
            .append_pair("id", &eq_param(&id.to_string()));
        tracing::debug!(table, %id, "updating row");

        let response = self
            .authed(self.http.patch(url))
            .header("Prefer", "return=representation")
            .json(&patch)
            .send()
            .await?;

        let rows = Self::read_rows(response).await?;
        Self::single_row(table, rows)
    }
}

/// Resolves the endpoint URL for one table under the service base URL.
fn table_endpoint(base: &Url, table: &str) -> StoreResult<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| StoreError::InvalidConfig("store URL cannot be a base".into()))?
        .pop_if_empty()
        .extend(["rest", "v1", table]);
    Ok(url)
}

fn eq_param(value: &str) -> String {
    format!("eq.{value}")
}

fn order_param(order: Ordering) -> String {
    let direction = if order.descending { "desc" } else { "asc" };
    format!("{}.{}", order.column, direction)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://records.example.com").expect("base URL should parse")
    }

    #[test]
    fn test_table_endpoint_appends_rest_path() {
        let url = table_endpoint(&base(), "medical_records").expect("endpoint should build");
        assert_eq!(
            url.as_str(),
            "https://records.example.com/rest/v1/medical_records"
        );
    }

    #[test]
    fn test_table_endpoint_preserves_existing_path() {
        let base = Url::parse("https://records.example.com/tenant-a/").expect("should parse");
        let url = table_endpoint(&base, "patients").expect("endpoint should build");
        assert_eq!(
            url.as_str(),
            "https://records.example.com/tenant-a/rest/v1/patients"
        );
    }

    #[test]
    fn test_order_param_encodes_direction() {
        assert_eq!(
            order_param(Ordering::descending("visit_date")),
            "visit_date.desc"
        );
        assert_eq!(
            order_param(Ordering {
                column: "visit_date",
                descending: false
            }),
            "visit_date.asc"
        );
    }

    #[test]
    fn test_eq_param_uses_postgrest_operator_syntax() {
        assert_eq!(eq_param("abc-123"), "eq.abc-123");
    }
}
