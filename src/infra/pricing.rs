//! Thin asynchronous client for the SportsCardsPro product API.
//!
//! - Resolves a free-text card name into ungraded and PSA-10 average sold prices.
//! - One request per lookup, bounded by a fixed timeout, never retried.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::PriceQuote;
use crate::util::config::AppConfig;

pub const DEFAULT_BASE_URL: &str = "https://www.sportscardspro.com/api/";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = concat!("card-flip-scanner/", env!("CARGO_PKG_VERSION"));
const UNKNOWN_PRODUCT: &str = "Unknown";

#[derive(Debug, Error)]
pub enum PricingError {
    #[error("Add `SCP_TOKEN` to your environment to enable price lookups.")]
    ConfigurationMissing,
    #[error("No card found, try a more specific name.")]
    NotFound,
    #[error("API error: {0}")]
    Transport(#[from] TransportError),
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Clone)]
pub struct PricingClient {
    http: Client,
    base_url: Url,
    token: Option<String>,
    timeout: Duration,
}

impl PricingClient {
    pub fn from_config(config: &AppConfig) -> Result<Self, PricingError> {
        let base = config.pricing_base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        Self::with_base_url(base, config.scp_token.clone())
    }

    pub fn with_base_url(base: &str, token: Option<String>) -> Result<Self, PricingError> {
        let base_url = Url::parse(base).map_err(TransportError::from)?;
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(TransportError::from)?;
        Ok(Self {
            http,
            base_url,
            token: token.filter(|value| !value.trim().is_empty()),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Looks up the best match for `query` and returns its average sold prices.
    pub async fn lookup(&self, query: &str) -> Result<PriceQuote, PricingError> {
        let Some(token) = self.token.as_deref() else {
            warn!("price lookup skipped: SCP_TOKEN is not configured");
            return Err(PricingError::ConfigurationMissing);
        };

        let query = query.trim();
        let mut url = self.url("products")?;
        url.query_pairs_mut()
            .append_pair("t", token)
            .append_pair("q", query);

        // The URL carries the token, so only the query is logged.
        info!(query, "requesting SportsCardsPro products");

        let response = self.fetch_products(url).await.map_err(|error| {
            warn!(query, %error, "SportsCardsPro request failed");
            error
        })?;
        let quote = parse_products(response)?;

        debug!(
            query,
            label = %quote.item_label,
            ungraded = quote.ungraded_price,
            graded = quote.graded_price,
            "resolved price quote"
        );
        Ok(quote)
    }

    async fn fetch_products(&self, url: Url) -> Result<ProductsResponse, TransportError> {
        let response = self
            .http
            .get(url)
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json::<ProductsResponse>().await?)
    }

    fn url(&self, path: &str) -> Result<Url, TransportError> {
        Ok(self.base_url.join(path)?)
    }
}

/// `status` and `products` may be absent or `null` on failed lookups.
#[derive(Debug, Default, Deserialize)]
pub struct ProductsResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    products: Option<Vec<ProductDto>>,
    #[serde(default, rename = "error-message")]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProductDto {
    #[serde(default, rename = "product-name")]
    product_name: Option<String>,
    /// Ungraded average sold price, in pennies.
    #[serde(default, rename = "loose-price", deserialize_with = "pennies_from_json")]
    loose_price: Option<f64>,
    /// PSA-10 average sold price, in pennies.
    #[serde(
        default,
        rename = "manual-only-price",
        deserialize_with = "pennies_from_json"
    )]
    manual_only_price: Option<f64>,
}

impl From<ProductDto> for PriceQuote {
    fn from(dto: ProductDto) -> Self {
        let label = dto
            .product_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| UNKNOWN_PRODUCT.to_string());
        Self {
            ungraded_price: pennies_to_dollars(dto.loose_price),
            graded_price: pennies_to_dollars(dto.manual_only_price),
            item_label: label,
        }
    }
}

/// Picks the first product of a successful response.
pub fn parse_products(response: ProductsResponse) -> Result<PriceQuote, PricingError> {
    let status = response.status.as_deref().unwrap_or_default();
    if !status.eq_ignore_ascii_case("success") {
        if let Some(message) = response.error_message.as_deref() {
            warn!(
                status,
                error_message = message,
                "SportsCardsPro returned an error status"
            );
        }
        return Err(PricingError::NotFound);
    }

    response
        .products
        .unwrap_or_default()
        .into_iter()
        .next()
        .map(PriceQuote::from)
        .ok_or(PricingError::NotFound)
}

fn pennies_to_dollars(pennies: Option<f64>) -> f64 {
    pennies
        .filter(|value| value.is_finite() && *value > 0.0)
        .map(|value| value / 100.0)
        .unwrap_or(0.0)
}

/// Prices arrive as integers, but some listings send them as strings or `null`.
fn pennies_from_json<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct NumberOrString;

    impl<'de> serde::de::Visitor<'de> for NumberOrString {
        type Value = Option<f64>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a number, numeric string or null")
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value as f64))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value as f64))
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value))
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            Ok(trimmed.parse::<f64>().ok())
        }
    }

    deserializer.deserialize_any(NumberOrString)
}
