pub mod bcd;
pub mod constants;
pub mod date;
pub mod escape;
pub mod feature;
pub mod motion;
pub mod provider;
pub mod template;
pub mod view;

// Component assets bundled as string constants
pub static BASELINE_STATUS_CSS: &str = include_str!("../assets/baseline-status.css");

pub use date::{date_parts, latest_implementation_date, DateParts};
pub use escape::{escape_attr, escape_html};
pub use feature::*;
pub use provider::{
    alias_mirror_value, load_feature, settle, CompatSource, FeatureQuery, LoadError, LoadOutcome,
    Provider, RequestGate, RequestTicket,
};
pub use template::{render_template, TemplateVars};
