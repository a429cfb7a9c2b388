// DOM contract shared with the deck's markup and stylesheet.
//
// Selectors locate the interactive surfaces; property names are the CSS
// custom properties the stylesheet consumes. Keep them in sync with the CSS.

// Stage tracker (hover, percent)
pub const STAGE_SELECTOR: &str = ".stage";
pub const STAGE_PROP_X: &str = "--mx";
pub const STAGE_PROP_Y: &str = "--my";
pub const STAGE_DECIMALS: usize = 2;

// Tilt cards (drag, centered ratio)
pub const TILT_CARD_SELECTOR: &str = ".card-container";
pub const TILT_PROP_X: &str = "--tilt-card--pos-x";
pub const TILT_PROP_Y: &str = "--tilt-card--pos-y";
pub const TILT_DRAGGING_CLASS: &str = "is-dragging";
pub const TILT_DECIMALS: usize = 3;

// Draggable title (drag + keyboard, percent)
pub const TITLE_SELECTOR: &str = ".title";
pub const TITLE_PROP_X: &str = "--title-x";
pub const TITLE_PROP_Y: &str = "--title-y";
pub const TITLE_PROP_OFFSET: &str = "--title-offset";

// Finale proximity scaling
pub const PROXIMITY_CONTAINER_ID: &str = "finale-proximity";
pub const PROXIMITY_ITEM_SELECTOR: &str = ".logo-finale";
pub const PROXIMITY_PROP: &str = "--proximity";
pub const PROXIMITY_DECIMALS: usize = 3;

// Orbit trail (hover + idle autoplay, percent)
pub const ORBIT_STAGE_SELECTOR: &str = ".orbit-stage";
pub const ORBIT_DOT_SELECTOR: &str = ".orbit-dot";
pub const ORBIT_PROP_X: &str = "--orbit-x";
pub const ORBIT_PROP_Y: &str = "--orbit-y";
pub const ORBIT_SPEED_ATTR: &str = "data-speed";

// View transitions demo
pub const VT_CONTAINER_ID: &str = "vt-container";
pub const VT_GRID_ID: &str = "vt-grid";
pub const VT_DETAIL_ID: &str = "vt-detail";
pub const VT_DETAIL_IMG_ID: &str = "vt-detail-img";
pub const VT_DETAIL_NAME_ID: &str = "vt-detail-name";
pub const VT_BACK_BTN_ID: &str = "vt-back-btn";
pub const VT_BUTTON_SELECTOR: &str = ".logo-vt-btn";
pub const VT_ACTIVE_CLASS: &str = "active";

// Deck glue
pub const DEEP_CARD_SELECTOR: &str = ".deep-card";
pub const DEEP_CARD_ACTIVE_CLASS: &str = "deep-card-active";
pub const DISCRETE_TOGGLE_ATTR: &str = "data-discrete-toggle";
pub const DISCRETE_OPEN_CLASS: &str = "open";
pub const SLIDE_TITLE_SELECTOR: &str = ".motion-title";

// Baseline status element
pub const BASELINE_TAG: &str = "baseline-status";
pub const BASELINE_STYLE_ID: &str = "baseline-status-component-styles";
pub const ATTR_FEATURE_ID: &str = "feature-id";
pub const ATTR_FEATURE_ID_ALIAS: &str = "featureId";
pub const ATTR_PROVIDER: &str = "provider";
pub const ATTR_MDN_PATH: &str = "mdn-path";
// HTML parsing lowercases attribute names, so the alias arrives as `featureid`
pub const OBSERVED_ATTRIBUTES: [&str; 5] = [
    ATTR_FEATURE_ID,
    ATTR_FEATURE_ID_ALIAS,
    "featureid",
    ATTR_PROVIDER,
    ATTR_MDN_PATH,
];
