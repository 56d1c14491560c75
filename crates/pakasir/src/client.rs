//! # Transaction Client
//!
//! The façade applications talk to. Each operation validates its inputs,
//! issues exactly one gateway request through the [`Transport`], and
//! projects the response. No retries, no polling, no shared state between
//! calls.

use crate::config::{Config, DEFAULT_BASE_URL};
use crate::transport::{HttpTransport, Transport};
use pakasir_core::{
    build_draft, merge_receipt, validate_core, CreateOptions, CreateResponse, CreatedTransaction,
    DetailResponse, GatewayAck, PakasirError, PakasirResult, PaymentMethod, RequestBody,
};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Client for the Pakasir payment gateway.
///
/// Holds the project credentials and base URL, plus the transport the
/// requests go through. Reconfiguration happens through `&mut self`
/// setters and takes effect on the next call; a client shared across
/// tasks is therefore read-only unless callers add their own
/// synchronization.
pub struct Client {
    base_url: String,
    project: String,
    api_key: String,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Create a client with the default base URL and HTTP transport.
    ///
    /// Credentials are checked on each operation, not here, so a client
    /// can be constructed before its configuration is complete.
    pub fn new(config: Config) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            project: config.project,
            api_key: config.api_key,
            transport: Arc::new(HttpTransport::new()),
        }
    }

    /// Create from environment variables (see [`Config::from_env`])
    pub fn from_env() -> PakasirResult<Self> {
        let config = Config::from_env()?;
        Ok(Self::new(config))
    }

    /// Builder: point the client at a different gateway host
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Builder: replace the transport (testing, pooled clients)
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Change the gateway host for subsequent calls
    pub fn set_base_url(&mut self, url: impl Into<String>) {
        self.base_url = url.into();
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    /// Change the project slug for subsequent calls
    pub fn set_project(&mut self, slug: impl Into<String>) {
        self.project = slug.into();
    }

    /// Change the API key for subsequent calls. There is deliberately no
    /// getter for the key.
    pub fn set_api_key(&mut self, key: impl Into<String>) {
        self.api_key = key.into();
    }

    /// Create a transaction and derive its hosted payment-page URL.
    ///
    /// Validation (order id length, amount floors, `qris_only`
    /// compatibility) happens before any network access. On success the
    /// returned [`CreatedTransaction`] carries the gateway's payment
    /// breakdown and an absolute `payment_url`.
    #[instrument(skip(self))]
    pub async fn create_transaction(
        &self,
        order_id: &str,
        method: PaymentMethod,
        amount: u64,
        options: CreateOptions,
    ) -> PakasirResult<CreatedTransaction> {
        self.ensure_credentials()?;
        let draft = build_draft(&self.project, order_id, method, amount, &options)?;

        debug!(
            order_id = %draft.order_id,
            method = draft.payment_method,
            amount,
            "creating transaction"
        );

        let url = self.api_url(&format!("transactioncreate/{}", draft.payment_method));
        let body = self.request_value(&draft.order_id, amount)?;
        let response: CreateResponse = self
            .call("create transaction", Method::POST, &url, Some(&body))
            .await?;

        info!(order_id = %draft.order_id, "transaction created");

        Ok(merge_receipt(draft, response.payment, &self.base_url))
    }

    /// Cancel a pending transaction
    #[instrument(skip(self))]
    pub async fn cancel_transaction(
        &self,
        order_id: &str,
        amount: u64,
    ) -> PakasirResult<GatewayAck> {
        self.post_action("cancel transaction", "transactioncancel", order_id, amount)
            .await
    }

    /// Mark a pending transaction as paid (sandbox testing)
    #[instrument(skip(self))]
    pub async fn simulate_payment(&self, order_id: &str, amount: u64) -> PakasirResult<GatewayAck> {
        self.post_action("simulate payment", "paymentsimulation", order_id, amount)
            .await
    }

    /// Fetch the current state of a transaction
    #[instrument(skip(self))]
    pub async fn transaction_detail(
        &self,
        order_id: &str,
        amount: u64,
    ) -> PakasirResult<DetailResponse> {
        self.ensure_credentials()?;
        let trimmed = validate_core(order_id, amount)?;

        let url = format!(
            "{}?project={}&amount={}&order_id={}&api_key={}",
            self.api_url("transactiondetail"),
            urlencoding::encode(&self.project),
            amount,
            urlencoding::encode(trimmed),
            urlencoding::encode(&self.api_key),
        );

        self.call("get transaction detail", Method::GET, &url, None)
            .await
    }

    /// Shared body of the cancel and simulate operations
    async fn post_action(
        &self,
        action: &'static str,
        endpoint: &str,
        order_id: &str,
        amount: u64,
    ) -> PakasirResult<GatewayAck> {
        self.ensure_credentials()?;
        let trimmed = validate_core(order_id, amount)?;

        let url = self.api_url(endpoint);
        let body = self.request_value(trimmed, amount)?;
        self.call(action, Method::POST, &url, Some(&body)).await
    }

    /// Issue one transport request, decode the body, and label failures
    /// with the operation that caused them.
    async fn call<T: DeserializeOwned>(
        &self,
        action: &'static str,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> PakasirResult<T> {
        self.transport
            .request(method, url, body)
            .await
            .and_then(|value| {
                serde_json::from_value(value).map_err(|e| PakasirError::Serialization(e.to_string()))
            })
            .map_err(|e| PakasirError::operation(action, e))
    }

    fn ensure_credentials(&self) -> PakasirResult<()> {
        if self.project.is_empty() {
            return Err(PakasirError::Configuration(
                "project slug must be set before calling the gateway".to_string(),
            ));
        }
        if self.api_key.is_empty() {
            return Err(PakasirError::Configuration(
                "API key must be set before calling the gateway".to_string(),
            ));
        }
        Ok(())
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url.trim_end_matches('/'), path)
    }

    fn request_value(&self, order_id: &str, amount: u64) -> PakasirResult<Value> {
        serde_json::to_value(RequestBody {
            project: self.project.clone(),
            order_id: order_id.to_string(),
            amount,
            api_key: self.api_key.clone(),
        })
        .map_err(|e| PakasirError::Serialization(e.to_string()))
    }
}
