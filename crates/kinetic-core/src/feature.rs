//! Feature-support record as served by the web-status API.
//!
//! The MDN compat provider normalizes into the same shape so the widget only
//! ever renders a [`FeatureRecord`]. Deserialization is lenient: unknown
//! fields are ignored and unknown status strings collapse to their "no data"
//! variants instead of failing the whole payload.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Four-valued Baseline classification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BaselineStatus {
    Widely,
    Newly,
    Limited,
    #[default]
    NoData,
}

impl BaselineStatus {
    pub fn parse(s: &str) -> Self {
        match s {
            "widely" => Self::Widely,
            "newly" => Self::Newly,
            "limited" => Self::Limited,
            _ => Self::NoData,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Widely => "widely",
            Self::Newly => "newly",
            Self::Limited => "limited",
            Self::NoData => "no_data",
        }
    }
}

impl<'de> Deserialize<'de> for BaselineStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Self::parse).unwrap_or_default())
    }
}

/// Per-browser implementation status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SupportStatus {
    Available,
    Unavailable,
    #[default]
    Unknown,
}

impl SupportStatus {
    pub fn parse(s: &str) -> Self {
        match s {
            "available" => Self::Available,
            "unavailable" => Self::Unavailable,
            _ => Self::Unknown,
        }
    }

    /// Yes/no/unknown wording used in the accessible label.
    pub fn as_answer(self) -> &'static str {
        match self {
            Self::Available => "yes",
            Self::Unavailable => "no",
            Self::Unknown => "unknown",
        }
    }
}

impl<'de> Deserialize<'de> for SupportStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Self::parse).unwrap_or_default())
    }
}

/// The four tracked browsers, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Browser {
    Chrome,
    Edge,
    Firefox,
    Safari,
}

impl Browser {
    pub const ALL: [Browser; 4] = [Browser::Chrome, Browser::Edge, Browser::Firefox, Browser::Safari];

    pub fn key(self) -> &'static str {
        match self {
            Browser::Chrome => "chrome",
            Browser::Edge => "edge",
            Browser::Firefox => "firefox",
            Browser::Safari => "safari",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Browser::Chrome => "Chrome",
            Browser::Edge => "Edge",
            Browser::Firefox => "Firefox",
            Browser::Safari => "Safari",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Baseline {
    #[serde(default)]
    pub status: BaselineStatus,
    /// Date the feature became Baseline; any JSON shape accepted by [`crate::date`].
    #[serde(default)]
    pub low_date: Option<Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct BrowserImplementation {
    #[serde(default)]
    pub status: SupportStatus,
    #[serde(default)]
    pub date: Option<Value>,
}

impl BrowserImplementation {
    pub fn with_status(status: SupportStatus) -> Self {
        Self { status, date: None }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct BrowserImplementations {
    #[serde(default)]
    pub chrome: Option<BrowserImplementation>,
    #[serde(default)]
    pub edge: Option<BrowserImplementation>,
    #[serde(default)]
    pub firefox: Option<BrowserImplementation>,
    #[serde(default)]
    pub safari: Option<BrowserImplementation>,
}

impl BrowserImplementations {
    pub fn get(&self, browser: Browser) -> Option<&BrowserImplementation> {
        match browser {
            Browser::Chrome => self.chrome.as_ref(),
            Browser::Edge => self.edge.as_ref(),
            Browser::Firefox => self.firefox.as_ref(),
            Browser::Safari => self.safari.as_ref(),
        }
    }

    pub fn status(&self, browser: Browser) -> SupportStatus {
        self.get(browser).map(|i| i.status).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Browser, &BrowserImplementation)> + '_ {
        Browser::ALL
            .into_iter()
            .filter_map(move |b| self.get(b).map(|i| (b, i)))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct FeatureRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub feature_id: Option<String>,
    #[serde(default)]
    pub baseline: Baseline,
    #[serde(default)]
    pub browser_implementations: BrowserImplementations,
    #[serde(default)]
    pub learn_more_url: Option<String>,
}

impl FeatureRecord {
    /// Placeholder record rendered when nothing is known about a feature.
    pub fn no_data(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn status(&self) -> BaselineStatus {
        self.baseline.status
    }

    pub fn has_data(&self) -> bool {
        self.status() != BaselineStatus::NoData
    }
}
