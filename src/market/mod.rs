//! Market-data collaborator
//!
//! Quote lookups for gold, fund performance and index levels. The engine only
//! sees `Option<MarketSnapshot>`: a source that cannot answer returns `None`
//! and the turn falls through to the next handler.

use crate::config::AdvisorConfig;
use crate::error::AdvisorError;
use crate::Result;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteTopic {
    Gold,
    Funds,
    Market,
}

impl fmt::Display for QuoteTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QuoteTopic::Gold => "gold",
            QuoteTopic::Funds => "funds",
            QuoteTopic::Market => "market",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Bullish,
    Bearish,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoldQuote {
    pub price_24k: String,
    pub price_22k: String,
    pub change: String,
    pub trend: Trend,
    pub source: String,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundQuote {
    pub name: String,
    pub returns: String,
    pub risk: String,
    pub min_sip: String,
    pub aum: String,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundsQuote {
    pub top_funds: Vec<FundQuote>,
    pub disclaimer: String,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketQuote {
    pub nifty: String,
    pub nifty_change: String,
    pub sensex: String,
    pub sensex_change: String,
    pub top_gainers: Vec<String>,
    pub sentiment: Trend,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MarketSnapshot {
    Gold(GoldQuote),
    Funds(FundsQuote),
    Market(MarketQuote),
}

impl MarketSnapshot {
    pub fn topic(&self) -> QuoteTopic {
        match self {
            MarketSnapshot::Gold(_) => QuoteTopic::Gold,
            MarketSnapshot::Funds(_) => QuoteTopic::Funds,
            MarketSnapshot::Market(_) => QuoteTopic::Market,
        }
    }
}

#[async_trait::async_trait]
pub trait MarketDataSource: Send + Sync {
    /// `None` when no quote is available for the topic.
    async fn fetch_quote(&self, topic: QuoteTopic) -> Option<MarketSnapshot>;
}

// ===== Simulated source =====

/// Fixed figures stamped with the current time.
#[derive(Debug, Clone, Default)]
pub struct SimulatedMarketData;

impl SimulatedMarketData {
    pub fn new() -> Self {
        Self
    }

    fn gold(now: DateTime<Utc>) -> GoldQuote {
        GoldQuote {
            price_24k: "₹6,247".to_string(),
            price_22k: "₹5,726".to_string(),
            change: "+0.8%".to_string(),
            trend: Trend::Bullish,
            source: "IBJA (India Bullion & Jewellers Association) - RBI Approved Rates".to_string(),
            last_updated: now,
        }
    }

    fn funds(now: DateTime<Utc>) -> FundsQuote {
        let fund = |name: &str, returns: &str, risk: &str, min_sip: &str, aum: &str, source: &str| FundQuote {
            name: name.to_string(),
            returns: returns.to_string(),
            risk: risk.to_string(),
            min_sip: min_sip.to_string(),
            aum: aum.to_string(),
            source: source.to_string(),
        };

        FundsQuote {
            top_funds: vec![
                fund("Axis Bluechip Fund", "12.8%", "Low", "₹500", "₹45,000 Cr", "axismf.com"),
                fund(
                    "Mirae Asset Emerging Bluechip",
                    "15.2%",
                    "Medium",
                    "₹1,000",
                    "₹28,500 Cr",
                    "miraeassetmf.co.in",
                ),
                fund("Parag Parikh Flexi Cap", "14.6%", "Medium", "₹1,000", "₹35,200 Cr", "ppfas.com"),
            ],
            disclaimer: "Returns are past performance. Data from AMFI and respective fund houses.".to_string(),
            last_updated: now,
        }
    }

    fn market(now: DateTime<Utc>) -> MarketQuote {
        MarketQuote {
            nifty: "21,456.78".to_string(),
            nifty_change: "+1.2%".to_string(),
            sensex: "70,892.45".to_string(),
            sensex_change: "+0.9%".to_string(),
            top_gainers: vec![
                "TCS (+2.1%)".to_string(),
                "Infosys (+1.8%)".to_string(),
                "HDFC Bank (+1.5%)".to_string(),
            ],
            sentiment: Trend::Bullish,
            last_updated: now,
        }
    }
}

#[async_trait::async_trait]
impl MarketDataSource for SimulatedMarketData {
    async fn fetch_quote(&self, topic: QuoteTopic) -> Option<MarketSnapshot> {
        let now = Utc::now();
        let snapshot = match topic {
            QuoteTopic::Gold => MarketSnapshot::Gold(Self::gold(now)),
            QuoteTopic::Funds => MarketSnapshot::Funds(Self::funds(now)),
            QuoteTopic::Market => MarketSnapshot::Market(Self::market(now)),
        };
        Some(snapshot)
    }
}

// ===== HTTP source =====

/// Quote service reached over HTTP at `{base}/api/v1/quotes/{topic}`.
#[derive(Clone)]
pub struct HttpMarketData {
    client: Client,
    base_url: String,
}

impl HttpMarketData {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(60))
            .pool_max_idle_per_host(8)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_quote(&self, topic: QuoteTopic) -> Result<MarketSnapshot> {
        let url = format!("{}/api/v1/quotes/{}", self.base_url, topic);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AdvisorError::MarketDataError(format!(
                "quote service returned {} for {}",
                status, topic
            )));
        }

        let snapshot = response.json::<MarketSnapshot>().await?;
        if snapshot.topic() != topic {
            return Err(AdvisorError::MarketDataError(format!(
                "asked for {} quote, got {}",
                topic,
                snapshot.topic()
            )));
        }

        Ok(snapshot)
    }
}

#[async_trait::async_trait]
impl MarketDataSource for HttpMarketData {
    async fn fetch_quote(&self, topic: QuoteTopic) -> Option<MarketSnapshot> {
        match self.get_quote(topic).await {
            Ok(snapshot) => {
                debug!(topic = %topic, "Fetched quote");
                Some(snapshot)
            }
            Err(e) => {
                warn!(topic = %topic, error = %e, "Quote unavailable");
                None
            }
        }
    }
}

/// HTTP source when a base URL is configured, simulated figures otherwise.
pub fn build_market_source(config: &AdvisorConfig) -> Result<Arc<dyn MarketDataSource>> {
    match config.market_data_base_url.as_deref() {
        Some(base_url) => {
            info!(base_url = %base_url, "Using HTTP market data");
            Ok(Arc::new(HttpMarketData::new(base_url)?))
        }
        None => {
            info!("Using simulated market data");
            Ok(Arc::new(SimulatedMarketData::new()))
        }
    }
}
