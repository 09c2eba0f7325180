use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::BackendSettings;
use crate::error::{CrmqlError, Result};
use crate::model::{Company, Customer, CustomerPatch, NewCustomer};

/// Thin client for the customers/companies REST backend.
///
/// Every operation is exactly one HTTP call. Nothing is cached, retried, or
/// batched; non-2xx responses come back as [`CrmqlError::Status`].
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: Url,
}

impl BackendClient {
    pub fn new(settings: &BackendSettings) -> Result<Self> {
        install_crypto_provider();

        let base_url = settings.url()?;
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(CrmqlError::Request)?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET /customers/{id}`
    pub async fn customer(&self, id: &str) -> Result<Customer> {
        self.send(Method::GET, &["customers", id], None).await
    }

    /// `GET /customers/`
    pub async fn customers(&self) -> Result<Vec<Customer>> {
        self.send(Method::GET, &["customers", ""], None).await
    }

    /// `GET /companies/{id}`
    pub async fn company(&self, id: &str) -> Result<Company> {
        self.send(Method::GET, &["companies", id], None).await
    }

    /// `GET /companies/`
    pub async fn companies(&self) -> Result<Vec<Company>> {
        self.send(Method::GET, &["companies", ""], None).await
    }

    /// `GET /companies/{id}/customers`
    pub async fn company_customers(&self, company_id: &str) -> Result<Vec<Customer>> {
        self.send(Method::GET, &["companies", company_id, "customers"], None)
            .await
    }

    /// `POST /customers`
    pub async fn create_customer(&self, customer: &NewCustomer) -> Result<Customer> {
        tracing::info!(name = %customer.name, "Creating customer");
        self.send(Method::POST, &["customers"], Some(to_body(customer)?))
            .await
    }

    /// `DELETE /customers/{id}`, returning whatever the backend echoes.
    pub async fn delete_customer(&self, id: &str) -> Result<Customer> {
        tracing::info!(id = %id, "Deleting customer");
        self.send(Method::DELETE, &["customers", id], None).await
    }

    /// `PATCH /customers/{id}`
    pub async fn update_customer(&self, patch: &CustomerPatch) -> Result<Customer> {
        tracing::info!(id = %patch.id, "Updating customer");
        self.send(
            Method::PATCH,
            &["customers", patch.id.as_str()],
            Some(to_body(patch)?),
        )
        .await
    }

    /// Resolve path segments against the base URL. Segments are percent-encoded;
    /// an empty trailing segment yields a trailing slash.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        let url = self.endpoint(segments);
        tracing::debug!(method = %method, url = %url, "Calling backend");

        let mut request = self.http.request(method.clone(), url.clone());
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(|e| {
            tracing::warn!(method = %method, url = %url, error = %e, "Backend unreachable");
            CrmqlError::Request(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(method = %method, url = %url, status = %status, "Backend call failed");
            return Err(CrmqlError::Status {
                method,
                url: url.to_string(),
                status,
            });
        }

        response.json::<T>().await.map_err(|source| CrmqlError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

fn to_body<T: Serialize>(value: &T) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(value)?)
}

/// reqwest is built without a bundled TLS provider; install ring once per process.
fn install_crypto_provider() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> BackendClient {
        BackendClient::new(&BackendSettings {
            base_url: base_url.to_string(),
            timeout_secs: None,
        })
        .unwrap()
    }

    #[test]
    fn test_endpoint_paths() {
        let backend = client("http://localhost:3000");
        assert_eq!(
            backend.endpoint(&["customers", "2"]).as_str(),
            "http://localhost:3000/customers/2"
        );
        assert_eq!(
            backend.endpoint(&["customers", ""]).as_str(),
            "http://localhost:3000/customers/"
        );
        assert_eq!(
            backend.endpoint(&["customers"]).as_str(),
            "http://localhost:3000/customers"
        );
        assert_eq!(
            backend.endpoint(&["companies", "1", "customers"]).as_str(),
            "http://localhost:3000/companies/1/customers"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let backend = client("http://backend.internal/api/");
        assert_eq!(
            backend.endpoint(&["companies", "7"]).as_str(),
            "http://backend.internal/api/companies/7"
        );
    }

    #[test]
    fn test_endpoint_escapes_ids() {
        let backend = client("http://localhost:3000");
        assert_eq!(
            backend.endpoint(&["customers", "a/b c"]).as_str(),
            "http://localhost:3000/customers/a%2Fb%20c"
        );
    }

    #[test]
    fn test_rejects_bad_base_url() {
        let result = BackendClient::new(&BackendSettings {
            base_url: "mailto:someone@example.com".to_string(),
            timeout_secs: None,
        });
        assert!(matches!(result, Err(CrmqlError::InvalidBackendUrl { .. })));
    }
}
