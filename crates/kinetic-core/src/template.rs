//! `{{key}}` placeholder substitution against a flat map.

use fnv::FnvHashMap;

pub type TemplateVars = FnvHashMap<&'static str, String>;

/// Replace every `{{ key }}` with its value; unknown keys render empty.
///
/// Values are inserted verbatim, so callers escape untrusted text first.
pub fn render_template(tpl: &str, vars: &TemplateVars) -> String {
    let mut out = String::with_capacity(tpl.len());
    let mut rest = tpl;
    while let Some(open) = rest.find("{{") {
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find("}}") else {
            break;
        };
        out.push_str(&rest[..open]);
        let key = after_open[..close].trim();
        if let Some(value) = vars.get(key) {
            out.push_str(value);
        }
        rest = &after_open[close + 2..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&'static str, &str)]) -> TemplateVars {
        pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
    }

    #[test]
    fn substitutes_and_trims_keys() {
        let v = vars(&[("name", "Grid"), ("year", "2017")]);
        assert_eq!(render_template("<b>{{name}}</b> {{ year }}", &v), "<b>Grid</b> 2017");
    }

    #[test]
    fn unmatched_placeholders_render_empty() {
        let v = vars(&[]);
        assert_eq!(render_template("a{{missing}}b{{}}c", &v), "abc");
    }

    #[test]
    fn unterminated_braces_are_left_alone() {
        let v = vars(&[("x", "1")]);
        assert_eq!(render_template("{{x}} {{x", &v), "1 {{x");
    }

    #[test]
    fn values_are_not_rescanned() {
        let v = vars(&[("a", "{{b}}"), ("b", "nope")]);
        assert_eq!(render_template("{{a}}", &v), "{{b}}");
    }
}
