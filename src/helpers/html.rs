//! HTML helper functions

/// Escape text for use in HTML bodies and attribute values
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate an anchor tag with escaped text
pub fn link_to(href: &str, text: &str) -> String {
    format!(
        r#"<a href="{}">{}</a>"#,
        html_escape(href),
        html_escape(text)
    )
}

/// Generate a <time> element for a post date
pub fn time_tag(date: &str, format: &str) -> String {
    let display = super::format_date(date, format);
    match super::date_xml(date) {
        Some(datetime) => format!(
            r#"<time datetime="{}">{}</time>"#,
            datetime,
            html_escape(&display)
        ),
        None => format!("<time>{}</time>", html_escape(&display)),
    }
}
