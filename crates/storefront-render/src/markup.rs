//! HTML escaping and trusted markup.
//!
//! Catalog text is untrusted. It only reaches a page through
//! [`escape_html`] or [`Markup::text`]; a [`Markup`] value is markup that
//! has already been built safely and is inserted verbatim.

use std::fmt;

/// Escape text for use in HTML content and quoted attribute values.
///
/// ```rust
/// use storefront_render::markup::escape_html;
///
/// assert_eq!(escape_html("<b>\"Tom\" & 'Jerry'</b>"),
///            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;");
/// ```
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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

/// Percent-encode a value for a URL query string.
pub fn encode_query_value(s: &str) -> String {
    url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
}

/// A fragment of HTML that is safe to insert as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    /// Wrap markup that was built from trusted parts.
    pub fn trusted(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// Escape plain text into markup.
    pub fn text(text: &str) -> Self {
        Self(escape_html(text))
    }

    /// Concatenate fragments.
    pub fn concat<I>(parts: I) -> Self
    where
        I: IntoIterator<Item = Markup>,
    {
        Self(parts.into_iter().map(|m| m.0).collect())
    }

    /// Append another fragment.
    pub fn push(&mut self, other: Markup) {
        self.0.push_str(&other.0);
    }

    /// The markup text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the markup text.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Whether the fragment is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
