//! Thin client for the hosted Postgres-over-REST table API.
//!
//! Requests follow the PostgREST conventions the backend exposes:
//!
//! ```text
//! GET    {base}/rest/v1/{table}?select=*&col=eq.value&order=col.asc
//! POST   {base}/rest/v1/{table}              (Prefer: return=representation)
//! PATCH  {base}/rest/v1/{table}?id=eq.value  (Prefer: return=representation)
//! DELETE {base}/rest/v1/{table}?id=eq.value
//! ```
//!
//! Every request carries the `apikey` header and an `Authorization: Bearer`
//! header: the caller's access token on a client from `with_access_token`,
//! the anonymous key otherwise.

use reqwest::{Method, RequestBuilder, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::BackendConfig;
use crate::domain::foundation::DomainError;

/// Sort direction for `order=` clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    fn as_str(self) -> &'static str {
        match self {
            Order::Asc => "asc",
            Order::Desc => "desc",
        }
    }
}

/// Shared HTTP client for the table and auth APIs.
///
/// Cheap to clone; the underlying `reqwest::Client` pools connections.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
    api_key: SecretString,
    bearer: Option<SecretString>,
}

impl RestClient {
    pub fn new(config: &BackendConfig) -> Result<Self, DomainError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| DomainError::upstream(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
            api_key: config.api_key.clone(),
            bearer: None,
        })
    }

    /// A client whose table requests run as the user owning `token`.
    pub fn with_access_token(&self, token: &SecretString) -> RestClient {
        RestClient {
            bearer: Some(token.clone()),
            ..self.clone()
        }
    }

    /// Start a query against `table`.
    pub fn table(&self, table: &'static str) -> TableQuery<'_> {
        TableQuery {
            client: self,
            table,
            params: Vec::new(),
        }
    }

    /// Build a request to the auth API, e.g. `auth_request(GET, "user")`.
    pub(crate) fn auth_request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/auth/v1/{}", self.base_url, path);
        self.http
            .request(method, url)
            .header("apikey", self.api_key.expose_secret())
    }

    fn table_request(&self, method: Method, table: &str) -> RequestBuilder {
        let url = format!("{}/rest/v1/{}", self.base_url, table);
        let bearer = self.bearer.as_ref().unwrap_or(&self.api_key);
        self.http
            .request(method, url)
            .header("apikey", self.api_key.expose_secret())
            .bearer_auth(bearer.expose_secret())
    }
}

/// A filtered request against one table.
#[derive(Debug)]
pub struct TableQuery<'a> {
    client: &'a RestClient,
    table: &'static str,
    params: Vec<(String, String)>,
}

impl<'a> TableQuery<'a> {
    /// Add a `column=eq.value` filter.
    pub fn eq(mut self, column: &str, value: impl AsRef<str>) -> Self {
        self.params
            .push((column.to_string(), format!("eq.{}", value.as_ref())));
        self
    }

    /// Add an `order=column.direction` clause.
    pub fn order(mut self, column: &str, order: Order) -> Self {
        self.params
            .push(("order".to_string(), format!("{}.{}", column, order.as_str())));
        self
    }

    /// `GET` all matching rows.
    pub async fn select<T: DeserializeOwned>(self) -> Result<Vec<T>, DomainError> {
        let request = self
            .client
            .table_request(Method::GET, self.table)
            .query(&[("select", "*")])
            .query(&self.params);
        let response = self.send("select", request).await?;
        self.decode(response).await
    }

    /// `GET` the first matching row, if any.
    pub async fn select_one<T: DeserializeOwned>(self) -> Result<Option<T>, DomainError> {
        let rows: Vec<T> = self.select().await?;
        Ok(rows.into_iter().next())
    }

    /// `POST` one row and return the stored representation.
    pub async fn insert<B, T>(self, body: &B) -> Result<T, DomainError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .client
            .table_request(Method::POST, self.table)
            .header("Prefer", "return=representation")
            .json(body);
        let response = self.send("insert", request).await?;
        let rows: Vec<T> = self.decode(response).await?;
        rows.into_iter().next().ok_or_else(|| {
            DomainError::upstream("Insert returned no row").with_detail("table", self.table)
        })
    }

    /// `PATCH` matching rows and return the updated representations.
    pub async fn update<B, T>(self, body: &B) -> Result<Vec<T>, DomainError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .client
            .table_request(Method::PATCH, self.table)
            .header("Prefer", "return=representation")
            .query(&self.params)
            .json(body);
        let response = self.send("update", request).await?;
        self.decode(response).await
    }

    /// `DELETE` matching rows.
    pub async fn delete(self) -> Result<(), DomainError> {
        let request = self
            .client
            .table_request(Method::DELETE, self.table)
            .query(&self.params);
        self.send("delete", request).await?;
        Ok(())
    }

    async fn send(&self, operation: &str, request: RequestBuilder) -> Result<Response, DomainError> {
        tracing::debug!(table = self.table, operation, "Backend request");

        let response = request.send().await.map_err(|e| {
            tracing::error!(table = self.table, operation, "Backend unreachable: {}", e);
            DomainError::upstream(format!("Backend unreachable: {}", e))
                .with_detail("table", self.table)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::error!(
            table = self.table,
            operation,
            status = status.as_u16(),
            "Backend rejected request: {}",
            body
        );
        Err(DomainError::upstream(format!("Backend returned {}", status))
            .with_detail("table", self.table)
            .with_detail("status", status.as_u16().to_string())
            .with_detail("body", body))
    }

    async fn decode<T: DeserializeOwned>(&self, response: Response) -> Result<T, DomainError> {
        response.json::<T>().await.map_err(|e| {
            tracing::error!(table = self.table, "Failed to decode backend response: {}", e);
            DomainError::upstream(format!("Malformed backend response: {}", e))
                .with_detail("table", self.table)
        })
    }
}
