//! MDN browser-compat-data (BCD) lookup and normalization.
//!
//! BCD has no Baseline field, so the status is approximated from the four
//! tracked browsers: all available is `widely`, some is `limited`, none is
//! `no_data`. Safari quirks and partial support nuances are not modelled.

use serde_json::Value;

use crate::feature::{
    Baseline, BaselineStatus, Browser, BrowserImplementation, BrowserImplementations,
    FeatureRecord, SupportStatus,
};

/// Where a compat entry lives: the JSON file and the key path inside it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MdnPath {
    pub file_path: String,
    pub key_path: Vec<String>,
}

impl MdnPath {
    /// Accepts `javascript.classes.static_initialization_blocks`,
    /// `data/javascript/classes.json#static_initialization_blocks` or a bare
    /// `data/<area>/<file>.json`.
    pub fn resolve(input: &str) -> Self {
        if let Some((file, hash)) = input.split_once('#') {
            let mut key_path = vec![area_from_file_path(file)];
            key_path.extend(hash.split('.').map(str::to_string));
            return Self {
                file_path: file.to_string(),
                key_path,
            };
        }
        if input.starts_with("data/") {
            return Self {
                file_path: input.to_string(),
                key_path: vec![area_from_file_path(input)],
            };
        }
        let parts: Vec<&str> = input.split('.').collect();
        let area = parts[0];
        let file_path = match parts.get(1) {
            Some(file) => format!("data/{area}/{file}.json"),
            None => format!("data/{area}.json"),
        };
        Self {
            file_path,
            key_path: parts.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn last_key(&self) -> &str {
        self.key_path.last().map(String::as_str).unwrap_or("")
    }
}

/// `data/javascript/classes.json` -> `javascript`.
pub fn area_from_file_path(file_path: &str) -> String {
    file_path
        .strip_prefix("data/")
        .and_then(|rest| rest.split_once('/'))
        .map(|(area, _)| area)
        .filter(|area| !area.is_empty() && area.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or("")
        .to_string()
}

/// Walk `key_path` from `root`; null values end the walk.
pub fn entry_at<'a>(root: &'a Value, key_path: &[String]) -> Option<&'a Value> {
    key_path
        .iter()
        .try_fold(root, |node, key| node.get(key).filter(|v| !v.is_null()))
}

/// Locate the compat entry for `path` and normalize it, or a "no data" record.
pub fn record_from_tree(tree: &Value, path: &MdnPath) -> FeatureRecord {
    match entry_at(tree, &path.key_path) {
        Some(entry) if entry.get("__compat").is_some_and(|c| !c.is_null()) => {
            normalize_entry(entry, &path.key_path)
        }
        _ => {
            log::debug!("[bcd] no compat entry at {}", path.key_path.join("."));
            FeatureRecord::no_data(path.last_key())
        }
    }
}

/// Convert a BCD entry (the object holding `__compat`) into a feature record.
pub fn normalize_entry(entry: &Value, key_path: &[String]) -> FeatureRecord {
    let compat = entry.get("__compat");
    let support = compat.and_then(|c| c.get("support"));
    let learn_more_url = compat
        .and_then(|c| c.get("mdn_url"))
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    let impl_for = |browser: Browser| {
        let statement = support.and_then(|s| s.get(browser.key()));
        Some(BrowserImplementation::with_status(support_from_statement(statement)))
    };
    let impls = BrowserImplementations {
        chrome: impl_for(Browser::Chrome),
        edge: impl_for(Browser::Edge),
        firefox: impl_for(Browser::Firefox),
        safari: impl_for(Browser::Safari),
    };

    let statuses: Vec<SupportStatus> = Browser::ALL.iter().map(|b| impls.status(*b)).collect();
    let status = if statuses.iter().all(|s| *s == SupportStatus::Available) {
        BaselineStatus::Widely
    } else if statuses.iter().any(|s| *s == SupportStatus::Available) {
        BaselineStatus::Limited
    } else {
        BaselineStatus::NoData
    };

    FeatureRecord {
        name: Some(key_path.join(".")),
        feature_id: Some(key_path.last().cloned().unwrap_or_default()),
        baseline: Baseline {
            status,
            low_date: None,
        },
        browser_implementations: impls,
        learn_more_url,
    }
}

/// Available when a version was added and no flag or partial marker is set.
/// Array statements are judged by their first (most relevant) element.
pub fn support_from_statement(statement: Option<&Value>) -> SupportStatus {
    let simple = match statement {
        Some(Value::Array(items)) => items.first(),
        other => other,
    };
    let Some(s) = simple.filter(|s| s.is_object()) else {
        return SupportStatus::Unavailable;
    };
    let added = s.get("version_added").is_some_and(truthy);
    let flagged = s.get("flags").is_some_and(truthy)
        || s.get("partial_implementation").is_some_and(truthy);
    if added && !flagged {
        SupportStatus::Available
    } else {
        SupportStatus::Unavailable
    }
}

fn truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn area_requires_data_prefix() {
        assert_eq!(area_from_file_path("data/css/properties.json"), "css");
        assert_eq!(area_from_file_path("css/properties.json"), "");
        assert_eq!(area_from_file_path("data/"), "");
    }

    #[test]
    fn version_added_false_or_flags_are_unavailable() {
        assert_eq!(
            support_from_statement(Some(&json!({"version_added": false}))),
            SupportStatus::Unavailable
        );
        assert_eq!(
            support_from_statement(Some(&json!({"version_added": "79", "flags": [{"type": "preference"}]}))),
            SupportStatus::Unavailable
        );
        assert_eq!(
            support_from_statement(Some(&json!([{"version_added": "16.4"}, {"version_added": "14", "partial_implementation": true}]))),
            SupportStatus::Available
        );
        assert_eq!(support_from_statement(None), SupportStatus::Unavailable);
    }

    #[test]
    fn entry_walk_stops_on_null() {
        let tree = json!({"a": {"b": null}});
        assert!(entry_at(&tree, &["a".into(), "b".into()]).is_none());
        assert!(entry_at(&tree, &[]).is_some());
    }
}
