//! Provider selection and fallback for the feature-status widget.
//!
//! Network access is abstracted behind [`CompatSource`] so the resolution
//! rules can run against the browser `fetch` in the web crate and against
//! in-memory fakes in tests. Failures never escape as errors: they become
//! "no data" records. Only cancellation is reported, so a superseded request
//! can be dropped without rendering.

use serde_json::Value;
use thiserror::Error;

use crate::bcd::{self, MdnPath};
use crate::constants::{API_ENDPOINT_MDN_CDN, API_ENDPOINT_WEBSTATUS};
use crate::escape::encode_uri_component;
use crate::feature::FeatureRecord;
use crate::view::render_feature;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("request aborted")]
    Aborted,
    #[error("http status {0}")]
    Http(u16),
    #[error("network: {0}")]
    Network(String),
    #[error("decode: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Decode(e.to_string())
    }
}

impl LoadError {
    pub fn is_aborted(&self) -> bool {
        matches!(self, LoadError::Aborted)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Provider {
    #[default]
    Auto,
    Webstatus,
    Mdn,
}

impl Provider {
    /// Attribute value to provider; unknown values behave as `auto`.
    pub fn from_attr(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("webstatus") => Provider::Webstatus,
            Some("mdn") => Provider::Mdn,
            _ => Provider::Auto,
        }
    }
}

pub fn webstatus_url(feature_id: &str) -> String {
    format!("{}{}", API_ENDPOINT_WEBSTATUS, encode_uri_component(feature_id))
}

pub fn mdn_file_url(file_path: &str) -> String {
    format!("{}{}", API_ENDPOINT_MDN_CDN, file_path)
}

/// Data access used by [`load_feature`].
#[allow(async_fn_in_trait)]
pub trait CompatSource {
    /// Fetch and decode the web-status record for `feature_id`.
    async fn webstatus(&self, feature_id: &str) -> Result<FeatureRecord, LoadError>;
    /// Fetch a BCD JSON file such as `data/css/properties.json`.
    async fn bcd_file(&self, file_path: &str) -> Result<Value, LoadError>;
}

/// What the widget was asked to show.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeatureQuery {
    pub feature_id: String,
    pub provider: Provider,
    pub mdn_path: Option<String>,
}

impl FeatureQuery {
    pub fn new(feature_id: impl Into<String>) -> Self {
        Self {
            feature_id: feature_id.into(),
            ..Self::default()
        }
    }

    pub fn with_provider(mut self, provider: Provider) -> Self {
        self.provider = provider;
        self
    }

    pub fn with_mdn_path(mut self, path: impl Into<String>) -> Self {
        let path = path.into();
        self.mdn_path = (!path.is_empty()).then_some(path);
        self
    }

    /// Lookup path for the BCD provider: explicit override or the feature id.
    pub fn mdn_lookup(&self) -> &str {
        self.mdn_path.as_deref().unwrap_or(&self.feature_id)
    }
}

/// Value to copy from the legacy alias attribute onto `feature-id`. A
/// non-blank `feature-id` always wins, so the alias only fills it in.
pub fn alias_mirror_value<'a>(
    canonical: Option<&str>,
    alias: Option<&'a str>,
) -> Option<&'a str> {
    if canonical.is_some_and(|c| !c.trim().is_empty()) {
        return None;
    }
    alias
}

#[derive(Clone, Debug, PartialEq)]
pub enum LoadOutcome {
    Loaded(FeatureRecord),
    Cancelled,
}

/// Resolve a record for `query`, degrading every failure except cancellation.
pub async fn load_feature<S: CompatSource>(source: &S, query: &FeatureQuery) -> LoadOutcome {
    let id = query.feature_id.as_str();
    let result = match query.provider {
        Provider::Webstatus => source
            .webstatus(id)
            .await
            .or_else(|e| degrade(e, || FeatureRecord::no_data(id))),
        Provider::Mdn => {
            let path = query.mdn_lookup();
            lookup_bcd(source, path)
                .await
                .or_else(|e| degrade(e, || FeatureRecord::no_data(path)))
        }
        Provider::Auto => load_auto(source, query).await,
    };
    match result {
        Ok(record) => LoadOutcome::Loaded(record),
        Err(_) => LoadOutcome::Cancelled,
    }
}

async fn load_auto<S: CompatSource>(
    source: &S,
    query: &FeatureQuery,
) -> Result<FeatureRecord, LoadError> {
    let id = query.feature_id.as_str();
    let primary = match source.webstatus(id).await {
        Ok(record) if record.has_data() => return Ok(record),
        Ok(record) => Some(record),
        Err(LoadError::Aborted) => return Err(LoadError::Aborted),
        Err(e) => {
            log::info!("[baseline] webstatus failed for {}: {}", id, e);
            None
        }
    };
    match lookup_bcd(source, query.mdn_lookup()).await {
        Ok(record) => Ok(record),
        Err(LoadError::Aborted) => Err(LoadError::Aborted),
        Err(e) => {
            log::info!("[baseline] bcd lookup failed for {}: {}", query.mdn_lookup(), e);
            Ok(primary.unwrap_or_else(|| FeatureRecord::no_data(id)))
        }
    }
}

/// Fetch and normalize the BCD entry addressed by `path_or_id`.
///
/// A missing entry is a successful "no data" lookup; transport and decode
/// failures are returned so the caller can choose its fallback.
pub async fn lookup_bcd<S: CompatSource>(
    source: &S,
    path_or_id: &str,
) -> Result<FeatureRecord, LoadError> {
    let path = MdnPath::resolve(path_or_id);
    let tree = source.bcd_file(&path.file_path).await?;
    Ok(bcd::record_from_tree(&tree, &path))
}

fn degrade(
    err: LoadError,
    fallback: impl FnOnce() -> FeatureRecord,
) -> Result<FeatureRecord, LoadError> {
    if err.is_aborted() {
        Err(err)
    } else {
        log::info!("[baseline] falling back to no data: {}", err);
        Ok(fallback())
    }
}

/// Generation counter that decides whether a finished load may still render.
///
/// Every new load takes a ticket; starting another load or detaching the
/// element invalidates all earlier tickets.
#[derive(Debug, Default)]
pub struct RequestGate {
    generation: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

impl RequestGate {
    pub fn begin(&mut self) -> RequestTicket {
        self.generation += 1;
        RequestTicket(self.generation)
    }

    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.generation
    }
}

/// What a finished load puts on screen: the main fragment, or `None` when the
/// load was cancelled or a newer one (or a detach) superseded its ticket.
pub fn settle(
    gate: &RequestGate,
    ticket: RequestTicket,
    outcome: LoadOutcome,
    feature_id: &str,
) -> Option<String> {
    if !gate.is_current(ticket) {
        log::debug!("[baseline] dropping superseded result for {}", feature_id);
        return None;
    }
    match outcome {
        LoadOutcome::Loaded(record) => Some(render_feature(&record, feature_id)),
        LoadOutcome::Cancelled => {
            log::debug!("[baseline] request for {} cancelled", feature_id);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_attr_parsing() {
        assert_eq!(Provider::from_attr(None), Provider::Auto);
        assert_eq!(Provider::from_attr(Some("mdn")), Provider::Mdn);
        assert_eq!(Provider::from_attr(Some(" webstatus ")), Provider::Webstatus);
        assert_eq!(Provider::from_attr(Some("bogus")), Provider::Auto);
    }

    #[test]
    fn urls_encode_feature_ids() {
        assert_eq!(
            webstatus_url("a b"),
            "https://api.webstatus.dev/v1/features/a%20b"
        );
        assert!(mdn_file_url("data/css/properties.json").ends_with("@latest/data/css/properties.json"));
    }

    #[test]
    fn mdn_lookup_prefers_override() {
        let q = FeatureQuery::new("grid").with_mdn_path("css.properties.grid");
        assert_eq!(q.mdn_lookup(), "css.properties.grid");
        let q = FeatureQuery::new("grid").with_mdn_path("");
        assert_eq!(q.mdn_lookup(), "grid");
    }

    #[test]
    fn alias_never_overrides_feature_id() {
        assert_eq!(alias_mirror_value(None, Some("grid")), Some("grid"));
        assert_eq!(alias_mirror_value(Some("  "), Some("grid")), Some("grid"));
        assert_eq!(alias_mirror_value(Some("flexbox"), Some("grid")), None);
        assert_eq!(alias_mirror_value(None, None), None);
    }
}
