//! HTML fragments for the `<baseline-status>` element.

use crate::constants::WEBSTATUS_FEATURE_PAGE;
use crate::date::{baseline_date, latest_implementation_date};
use crate::escape::{escape_attr, escape_html, svg_to_img_tag};
use crate::feature::{BaselineStatus, Browser, BrowserImplementations, FeatureRecord, SupportStatus};
use crate::template::{render_template, TemplateVars};

pub static TPL_LOADING: &str = include_str!("../assets/templates/loading.html");
pub static TPL_MAIN: &str = include_str!("../assets/templates/main.html");

static ICON_SUPPORT_AVAILABLE: &str = include_str!("../assets/icons/support-available.svg");
static ICON_SUPPORT_UNAVAILABLE: &str = include_str!("../assets/icons/support-unavailable.svg");
static ICON_SUPPORT_NO_DATA: &str = include_str!("../assets/icons/support-no_data.svg");
static ICON_BROWSER_CHROME: &str = include_str!("../assets/icons/browser-chrome.svg");
static ICON_BROWSER_EDGE: &str = include_str!("../assets/icons/browser-edge.svg");
static ICON_BROWSER_FIREFOX: &str = include_str!("../assets/icons/browser-firefox.svg");
static ICON_BROWSER_SAFARI: &str = include_str!("../assets/icons/browser-safari.svg");
static GLYPH_BASELINE_LIMITED: &str = include_str!("../assets/icons/baseline-limited.svg");
static GLYPH_BASELINE_NEWLY: &str = include_str!("../assets/icons/baseline-newly.svg");
static GLYPH_BASELINE_WIDELY: &str = include_str!("../assets/icons/baseline-widely.svg");
static GLYPH_BASELINE_NO_DATA: &str = include_str!("../assets/icons/baseline-no_data.svg");
static ICON_CHEVRON: &str = include_str!("../assets/icons/chevron.svg");

const LOADING_NAME: &str = "Loading feature...";
const UNKNOWN_NAME: &str = "Unknown feature";

/// Title and fallback description for a Baseline status.
pub fn baseline_copy(status: BaselineStatus) -> (&'static str, &'static str) {
    match status {
        BaselineStatus::Limited => (
            "Limited availability",
            "This feature is not Baseline because it does not work in some of the most widely used browsers.",
        ),
        BaselineStatus::Newly => (
            "Newly available",
            "This feature works across the latest devices and browser versions. This feature might not work in older devices or browsers.",
        ),
        BaselineStatus::Widely => (
            "Widely available",
            "This feature is well established and works across many devices and browser versions.",
        ),
        BaselineStatus::NoData => (
            "Unknown availability",
            "We currently do not have browser support information about this feature.",
        ),
    }
}

/// Description, mentioning the Baseline date when one is known.
pub fn description_for(status: BaselineStatus, date_label: &str) -> String {
    match status {
        BaselineStatus::Newly if !date_label.is_empty() => format!(
            "Since {date_label} this feature works across the latest devices and browser versions. This feature might not work in older devices or browsers."
        ),
        BaselineStatus::Widely if !date_label.is_empty() => format!(
            "This feature is well established and works across many devices and browser versions. It has been available across browsers since {date_label}."
        ),
        _ => baseline_copy(status).1.to_string(),
    }
}

/// Per-browser support marker. Only `limited` looks at individual browsers.
pub fn support_icon(status: BaselineStatus, implementation: SupportStatus) -> String {
    let support = match status {
        BaselineStatus::Limited => match implementation {
            SupportStatus::Available => "available",
            _ => "unavailable",
        },
        other => other.as_str(),
    };
    let svg = match support {
        "available" | "widely" | "newly" => ICON_SUPPORT_AVAILABLE,
        "unavailable" => ICON_SUPPORT_UNAVAILABLE,
        _ => ICON_SUPPORT_NO_DATA,
    };
    format!(r#"<span class="support-{support}" aria-hidden="true">{svg}</span>"#)
}

pub fn baseline_glyph(status: BaselineStatus) -> &'static str {
    match status {
        BaselineStatus::Limited => GLYPH_BASELINE_LIMITED,
        BaselineStatus::Newly => GLYPH_BASELINE_NEWLY,
        BaselineStatus::Widely => GLYPH_BASELINE_WIDELY,
        BaselineStatus::NoData => GLYPH_BASELINE_NO_DATA,
    }
}

/// Browser logo as a data-URI `<img>`; inline SVG `<defs>` ids would collide.
pub fn browser_img(browser: Browser) -> String {
    let svg = match browser {
        Browser::Chrome => ICON_BROWSER_CHROME,
        Browser::Edge => ICON_BROWSER_EDGE,
        Browser::Firefox => ICON_BROWSER_FIREFOX,
        Browser::Safari => ICON_BROWSER_SAFARI,
    };
    svg_to_img_tag(svg, &format!("browser-icon browser-icon-{}", browser.key()))
}

/// The one-sentence accessible label (unescaped).
pub fn aria_label(
    title: &str,
    year: &str,
    newly: bool,
    implementations: &BrowserImplementations,
) -> String {
    let mut label = format!("Baseline: {title}");
    if !year.is_empty() {
        label.push(' ');
        label.push_str(year);
    }
    if newly {
        label.push_str(" (newly available)");
    }
    label.push('.');
    for browser in Browser::ALL {
        label.push_str(&format!(
            " Supported in {}: {}.",
            browser.display_name(),
            implementations.status(browser).as_answer()
        ));
    }
    label
}

/// "Learn more" anchor, preferring the MDN page carried by BCD records.
pub fn learn_more_link(feature: &FeatureRecord, fallback_id: &str) -> String {
    if let Some(url) = feature.learn_more_url.as_deref().filter(|u| !u.is_empty()) {
        return format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">Learn more on MDN</a>"#,
            escape_attr(url)
        );
    }
    let id = feature
        .feature_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .unwrap_or(fallback_id);
    format!(
        r#"<a href="{}{}" target="_blank" rel="noopener noreferrer">Learn more</a>"#,
        WEBSTATUS_FEATURE_PAGE,
        escape_attr(id)
    )
}

fn browser_icon_vars(vars: &mut TemplateVars) {
    vars.insert("chromeIcon", browser_img(Browser::Chrome));
    vars.insert("edgeIcon", browser_img(Browser::Edge));
    vars.insert("firefoxIcon", browser_img(Browser::Firefox));
    vars.insert("safariIcon", browser_img(Browser::Safari));
    vars.insert("chevronIcon", ICON_CHEVRON.to_string());
}

/// Placeholder shown while a fetch is in flight.
pub fn render_loading(feature_id: &str) -> String {
    let name = if feature_id.is_empty() { LOADING_NAME } else { feature_id };
    let mut vars = TemplateVars::default();
    vars.insert("featureName", escape_html(name));
    vars.insert("baselineGlyph", baseline_glyph(BaselineStatus::NoData).to_string());
    vars.insert("noDataIcon", ICON_SUPPORT_NO_DATA.to_string());
    browser_icon_vars(&mut vars);
    render_template(TPL_LOADING, &vars)
}

/// Full status fragment for `feature`; `feature_id` names it when the record does not.
pub fn render_feature(feature: &FeatureRecord, feature_id: &str) -> String {
    let status = feature.status();
    let (title, _) = baseline_copy(status);
    let baseline_date = baseline_date(feature);
    let latest = latest_implementation_date(feature);
    let newly = status == BaselineStatus::Newly;
    let impls = &feature.browser_implementations;

    let name = feature
        .name
        .as_deref()
        .filter(|n| !n.is_empty())
        .or((!feature_id.is_empty()).then_some(feature_id))
        .unwrap_or(UNKNOWN_NAME);

    let mut vars = TemplateVars::default();
    vars.insert("name", escape_html(name));
    vars.insert("aria", escape_attr(&aria_label(title, &baseline_date.year, newly, impls)));
    vars.insert("baseline", status.as_str().to_string());
    vars.insert(
        "since",
        if latest.is_empty() {
            String::new()
        } else {
            format!("(since {})", escape_html(&latest.label))
        },
    );
    vars.insert("baselineGlyph", baseline_glyph(status).to_string());
    vars.insert("baselineLabel", "<strong>Baseline</strong>".to_string());
    vars.insert("title", title.to_string());
    vars.insert("year", escape_html(&baseline_date.year));
    vars.insert(
        "badge",
        if newly {
            r#"<span class="baseline-badge">newly available</span>"#.to_string()
        } else {
            String::new()
        },
    );
    vars.insert("chromeSupport", support_icon(status, impls.status(Browser::Chrome)));
    vars.insert("edgeSupport", support_icon(status, impls.status(Browser::Edge)));
    vars.insert("firefoxSupport", support_icon(status, impls.status(Browser::Firefox)));
    vars.insert("safariSupport", support_icon(status, impls.status(Browser::Safari)));
    vars.insert("description", escape_html(&description_for(status, &baseline_date.label)));
    vars.insert(
        "learnMore",
        if feature.has_data() {
            learn_more_link(feature, feature_id)
        } else {
            String::new()
        },
    );
    browser_icon_vars(&mut vars);
    render_template(TPL_MAIN, &vars)
}
