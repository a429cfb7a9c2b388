//! Escaping and encoding helpers for building HTML strings.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::constants::DEFAULT_ICON_SIZE;

/// Characters `encodeURIComponent` leaves untouched besides alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Escape text for insertion into HTML content.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape text for a double-quoted attribute value.
#[inline]
pub fn escape_attr(value: &str) -> String {
    escape_html(value)
}

/// Percent-encode with `encodeURIComponent` semantics.
pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Inline SVG markup as a `data:` URI. Isolates `<defs>` ids per image.
pub fn svg_to_data_uri(svg: &str) -> String {
    if svg.is_empty() {
        return String::new();
    }
    let cleaned = compact_markup(svg);
    let encoded = encode_uri_component(&cleaned).replace("%20", " ");
    format!("data:image/svg+xml;utf8,{encoded}")
}

/// Build an `<img>` tag for an inline SVG, sized from the svg tag when possible.
pub fn svg_to_img_tag(svg: &str, class_name: &str) -> String {
    if svg.is_empty() {
        return String::new();
    }
    let (w, h) = svg_dimensions(svg).unwrap_or((DEFAULT_ICON_SIZE, DEFAULT_ICON_SIZE));
    format!(
        r#"<img class="{}" alt="" aria-hidden="true" role="presentation" src="{}" width="{}" height="{}" />"#,
        escape_attr(class_name),
        escape_attr(&svg_to_data_uri(svg)),
        w,
        h
    )
}

/// Width/height attributes of the opening `<svg>` tag.
pub fn svg_dimensions(svg: &str) -> Option<(u32, u32)> {
    let start = svg.find("<svg")?;
    let end = start + svg[start..].find('>')?;
    let tag = &svg[start..end];
    Some((attr_number(tag, "width")?, attr_number(tag, "height")?))
}

fn attr_number(tag: &str, name: &str) -> Option<u32> {
    let bytes = tag.as_bytes();
    let mut from = 0;
    while let Some(pos) = tag[from..].find(name) {
        let at = from + pos;
        from = at + name.len();
        // whole attribute names only: "stroke-width" must not match "width"
        if at > 0 && !bytes[at - 1].is_ascii_whitespace() {
            continue;
        }
        let rest = tag[from..].trim_start();
        let Some(rest) = rest.strip_prefix('=') else {
            continue;
        };
        let rest = rest.trim_start().trim_start_matches(['"', '\'']);
        let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
        return digits.parse().ok();
    }
    None
}

fn compact_markup(svg: &str) -> String {
    let no_newlines: String = svg.chars().filter(|&c| c != '\n' && c != '\r').collect();
    let mut out = String::with_capacity(no_newlines.len());
    let mut pending_ws = String::new();
    let mut after_gt = false;
    for c in no_newlines.chars() {
        if after_gt && c.is_whitespace() {
            pending_ws.push(c);
            continue;
        }
        if c != '<' {
            out.push_str(&pending_ws);
        }
        pending_ws.clear();
        out.push(c);
        after_gt = c == '>';
    }
    out.push_str(&pending_ws);
    out.trim().to_string()
}
