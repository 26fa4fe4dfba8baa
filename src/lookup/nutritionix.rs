use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use tracing::{debug, warn};

use crate::error::Result;
use crate::lookup::response::{NutrientsRequest, parse_response};
use crate::lookup::{LookupMiss, NutritionLookup};
use crate::models::FoodEntry;
use crate::planner::constants::{DEFAULT_LOOKUP_TIMEOUT_SECS, NUTRITIONIX_ENDPOINT};

/// Error bodies are cut to this many characters in advisory messages.
const ERROR_BODY_LIMIT: usize = 200;

/// Connection settings for the Nutritionix natural-language endpoint.
#[derive(Debug, Clone)]
pub struct LookupConfig {
    pub endpoint: String,
    pub app_id: Option<String>,
    pub app_key: Option<String>,
    pub timeout: Duration,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            endpoint: NUTRITIONIX_ENDPOINT.to_string(),
            app_id: None,
            app_key: None,
            timeout: Duration::from_secs(DEFAULT_LOOKUP_TIMEOUT_SECS),
        }
    }
}

impl LookupConfig {
    pub fn has_credentials(&self) -> bool {
        matches!((&self.app_id, &self.app_key), (Some(id), Some(key)) if !id.is_empty() && !key.is_empty())
    }
}

/// Blocking HTTP client for Nutritionix.
pub struct NutritionixClient {
    client: Client,
    config: LookupConfig,
}

impl NutritionixClient {
    pub fn new(config: LookupConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &LookupConfig {
        &self.config
    }
}

impl NutritionLookup for NutritionixClient {
    fn lookup(&self, description: &str) -> std::result::Result<FoodEntry, LookupMiss> {
        let query = description.trim();
        if query.is_empty() {
            return Err(LookupMiss::EmptyQuery);
        }

        let (Some(app_id), Some(app_key)) = (&self.config.app_id, &self.config.app_key) else {
            return Err(LookupMiss::MissingCredentials);
        };
        if app_id.is_empty() || app_key.is_empty() {
            return Err(LookupMiss::MissingCredentials);
        }

        debug!(query, endpoint = %self.config.endpoint, "nutrition lookup");
        let response = self
            .client
            .post(&self.config.endpoint)
            .header("x-app-id", app_id)
            .header("x-app-key", app_key)
            .json(&NutrientsRequest { query })
            .send()
            .map_err(|e| {
                warn!(error = %e, "nutrition request failed");
                LookupMiss::Request(e.to_string())
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            let body: String = response
                .text()
                .unwrap_or_default()
                .chars()
                .take(ERROR_BODY_LIMIT)
                .collect();
            warn!(status = status.as_u16(), "nutrition service returned an error");
            return Err(LookupMiss::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .map_err(|e| LookupMiss::Request(e.to_string()))?;
        let result = parse_response(&body);
        match &result {
            Ok(entry) => debug!(entry = %entry.summary(), "nutrition lookup resolved"),
            Err(miss) => warn!(%miss, "nutrition lookup returned no result"),
        }
        result
    }
}
