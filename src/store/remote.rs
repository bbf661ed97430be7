//! # Remote Record Store
//!
//! Client for the hosted REST backend. Tables are exposed at
//! `{url}/rest/v1/{table}` with `column=eq.value` filters.
//!
//! Calls are synchronous: the store owns a current-thread tokio runtime and
//! blocks on each request. It must not be driven from inside another
//! runtime.

use std::fmt;
use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tokio::runtime::{Builder, Runtime};

use super::backend::RecordStore;
use super::errors::{StoreError, StoreResult};
use crate::record::Record;

/// Store backed by the hosted REST backend
pub struct RemoteStore {
    base_url: String,
    table: String,
    api_key: String,
    client: Client,
    runtime: Runtime,
}

impl RemoteStore {
    /// Create a remote store client
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        table: impl Into<String>,
        timeout: Duration,
    ) -> StoreResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StoreError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| StoreError::Internal(format!("Failed to create runtime: {}", e)))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            table: table.into(),
            api_key: api_key.into(),
            client,
            runtime,
        })
    }

    /// Endpoint for the configured table
    pub fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    fn id_filter(id: &str) -> [(&'static str, String); 1] {
        [("id", format!("eq.{}", id))]
    }

    fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> StoreResult<T> {
        self.runtime.block_on(send(request))
    }
}

async fn send<T: DeserializeOwned>(request: RequestBuilder) -> StoreResult<T> {
    let response = request
        .send()
        .await
        .map_err(|e| StoreError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(StoreError::Remote {
            status: status.as_u16(),
            message,
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| StoreError::Decode(e.to_string()))
}

impl fmt::Debug for RemoteStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // api_key omitted
        f.debug_struct("RemoteStore")
            .field("base_url", &self.base_url)
            .field("table", &self.table)
            .finish()
    }
}

impl RecordStore for RemoteStore {
    fn load_all(&self) -> StoreResult<Vec<Record>> {
        let request = self
            .authorized(self.client.get(self.table_url()))
            .query(&[("select", "*")]);
        self.execute(request)
    }

    fn get(&self, id: &str) -> StoreResult<Option<Record>> {
        let request = self
            .authorized(self.client.get(self.table_url()))
            .query(&Self::id_filter(id));
        let mut rows: Vec<Record> = self.execute(request)?;
        Ok(if rows.is_empty() {
            None
        } else {
            Some(rows.swap_remove(0))
        })
    }

    fn put(&self, record: Record) -> StoreResult<()> {
        let request = self
            .authorized(self.client.post(self.table_url()))
            .header("Prefer", "resolution=merge-duplicates,return=representation")
            .json(&record);
        let _: Vec<Record> = self.execute(request)?;
        Ok(())
    }

    fn delete(&self, id: &str) -> StoreResult<()> {
        let request = self
            .authorized(self.client.delete(self.table_url()))
            .query(&Self::id_filter(id))
            .header("Prefer", "return=representation");
        let deleted: Vec<Record> = self.execute(request)?;
        if deleted.is_empty() {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    fn len(&self) -> StoreResult<usize> {
        let request = self
            .authorized(self.client.get(self.table_url()))
            .query(&[("select", "id")]);
        let ids: Vec<serde_json::Value> = self.execute(request)?;
        Ok(ids.len())
    }

    fn backend_name(&self) -> &'static str {
        "remote"
    }
}
