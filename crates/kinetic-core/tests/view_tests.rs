// Host-side tests for the baseline-status HTML fragments.

use kinetic_core::escape::{escape_html, svg_to_data_uri, svg_to_img_tag};
use kinetic_core::view::{
    aria_label, description_for, learn_more_link, render_feature, render_loading, support_icon,
};
use kinetic_core::{BaselineStatus, BrowserImplementations, FeatureRecord, SupportStatus};
use serde_json::json;

// Minimal entity decoder standing in for the browser's HTML parser.
fn unescape(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

const NASTY: &str = r#"<img src=x onerror="alert('x')"> & co"#;

#[test]
fn escapes_all_five_characters() {
    let escaped = escape_html(NASTY);
    for c in ['<', '>', '"', '\''] {
        assert!(!escaped.contains(c), "{c} survived in {escaped}");
    }
    assert!(escaped.contains("&lt;") && escaped.contains("&gt;"));
    assert!(escaped.contains("&quot;") && escaped.contains("&#39;"));
    assert!(escaped.contains("&amp; co"));
    assert_eq!(unescape(&escaped), NASTY);
}

#[test]
fn feature_name_is_escaped_in_main_fragment() {
    let rec = FeatureRecord {
        name: Some(NASTY.to_string()),
        ..FeatureRecord::default()
    };
    let html = render_feature(&rec, "x");
    assert!(!html.contains(NASTY));
    assert!(html.contains(&escape_html(NASTY)));
    assert!(!html.contains("{{"), "placeholder left in output");
}

#[test]
fn loading_fragment_escapes_id_and_defaults_name() {
    let html = render_loading("<b>");
    assert!(html.contains("&lt;b&gt;"));
    assert!(render_loading("").contains("Loading feature..."));
    assert!(!render_loading("grid").contains("{{"));
}

#[test]
fn aria_label_composes_one_sentence() {
    let impls: BrowserImplementations = serde_json::from_value(json!({
        "chrome": {"status": "available"},
        "edge": {"status": "available"},
        "firefox": {"status": "unavailable"}
    }))
    .unwrap();
    assert_eq!(
        aria_label("Newly available", "2024", true, &impls),
        "Baseline: Newly available 2024 (newly available). Supported in Chrome: yes. \
         Supported in Edge: yes. Supported in Firefox: no. Supported in Safari: unknown."
    );
    assert_eq!(
        aria_label("Unknown availability", "", false, &BrowserImplementations::default()),
        "Baseline: Unknown availability. Supported in Chrome: unknown. Supported in Edge: unknown. \
         Supported in Firefox: unknown. Supported in Safari: unknown."
    );
}

#[test]
fn main_fragment_for_newly_available_feature() {
    let rec: FeatureRecord = serde_json::from_value(json!({
        "feature_id": "popover",
        "name": "Popover",
        "baseline": {"status": "newly", "low_date": "2024-04-16"},
        "browser_implementations": {
            "chrome": {"status": "available", "date": "2023-04-04"},
            "edge": {"status": "available", "date": "2023-04-06"},
            "firefox": {"status": "available", "date": "2024-04-16"},
            "safari": {"status": "available", "date": "2023-03-27"}
        }
    }))
    .unwrap();
    let html = render_feature(&rec, "popover");
    assert!(html.contains("data-baseline=\"newly\""));
    assert!(html.contains("Newly available"));
    assert!(html.contains(r#"<span class="baseline-badge">newly available</span>"#));
    assert!(html.contains("Since April 2024 this feature works"));
    assert!(html.contains("(since April 2024)"));
    assert!(html.contains("aria-label=\"Baseline: Newly available 2024 (newly available). Supported in Chrome: yes."));
    assert!(html.contains(r#"href="https://webstatus.dev/features/popover""#));
    assert_eq!(html.matches("class=\"support-newly\"").count(), 4);
}

#[test]
fn no_data_fragment_has_no_learn_more_link() {
    let html = render_feature(&FeatureRecord::no_data("mystery"), "mystery");
    assert!(html.contains("Unknown availability"));
    assert!(!html.contains("Learn more"));
    assert!(html.contains(">mystery<"));
}

#[test]
fn unnamed_record_falls_back_to_id_then_placeholder() {
    assert!(render_feature(&FeatureRecord::default(), "grid").contains(">grid<"));
    assert!(render_feature(&FeatureRecord::default(), "").contains("Unknown feature"));
}

#[test]
fn learn_more_prefers_mdn_and_escapes() {
    let mdn = FeatureRecord {
        learn_more_url: Some("https://developer.mozilla.org/x?a=1&b=\"2\"".into()),
        ..FeatureRecord::default()
    };
    let link = learn_more_link(&mdn, "x");
    assert!(link.contains("Learn more on MDN"));
    assert!(link.contains("a=1&amp;b=&quot;2&quot;"));
    assert!(link.contains(r#"rel="noopener noreferrer""#));

    let plain = learn_more_link(&FeatureRecord::default(), "a\"b");
    assert!(plain.contains(r#"href="https://webstatus.dev/features/a&quot;b""#));
}

#[test]
fn support_icon_classes() {
    assert!(support_icon(BaselineStatus::Widely, SupportStatus::Unknown).contains("support-widely"));
    assert!(support_icon(BaselineStatus::Limited, SupportStatus::Available).contains("support-available"));
    assert!(support_icon(BaselineStatus::Limited, SupportStatus::Unknown).contains("support-unavailable"));
    assert!(support_icon(BaselineStatus::NoData, SupportStatus::Available).contains("support-no_data"));
}

#[test]
fn descriptions_mention_dates_only_when_known() {
    assert!(description_for(BaselineStatus::Widely, "May 2020").ends_with("since May 2020."));
    assert!(description_for(BaselineStatus::Widely, "").starts_with("This feature is well established"));
    assert!(description_for(BaselineStatus::Limited, "May 2020").starts_with("This feature is not Baseline"));
}

#[test]
fn svg_icons_become_data_uri_images() {
    let svg = "<svg width=\"30\" height=\"20\">\n  <circle r=\"1\"/>\n</svg>";
    let uri = svg_to_data_uri(svg);
    assert!(uri.starts_with("data:image/svg+xml;utf8,%3Csvg width%3D%2230%22"));
    assert!(!uri.contains('\n'));
    let img = svg_to_img_tag(svg, "browser-icon");
    assert!(img.contains(r#"width="30" height="20""#));
    assert!(svg_to_img_tag("<svg></svg>", "x").contains(r#"width="21" height="21""#));
    assert_eq!(svg_to_img_tag("", "x"), "");
}
