//! Search-URL template expansion
//!
//! Templates carry `%s` for the whole query and optionally `%s1`, `%s2`, ... for
//! individual words. A template without any placeholder gets the query appended.

use std::sync::LazyLock;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::{Captures, Regex};
use url::Url;

use crate::error::NavigationError;
use crate::Result;

/// Token replaced by the whole query
pub const PLACEHOLDER: &str = "%s";

/// Characters left alone by `encodeURIComponent`
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

static POSITIONAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%s(\d+)").expect("positional placeholder pattern is valid"));

/// Percent-encode a single URL component
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT).to_string()
}

/// Parse the template configured under `alias`
pub fn parse_template(alias: &str, template: &str) -> Result<Url> {
    Url::parse(template).map_err(|e| NavigationError::InvalidTemplate {
        alias: alias.to_string(),
        reason: e.to_string(),
    })
}

/// Substitute `query` into `template`.
///
/// Pure: the same template and query always give the same URL.
pub fn expand(template: &Url, query: &str) -> Result<Url> {
    let href = template.as_str();

    if !href.contains(PLACEHOLDER) {
        return Ok(Url::parse(&format!("{href}{query}"))?);
    }

    let words: Vec<String> = query.split(' ').map(encode_component).collect();
    let positional = POSITIONAL.replace_all(href, |caps: &Captures| {
        caps[1]
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| words.get(idx))
            .cloned()
            .unwrap_or_default()
    });

    let intermediate = Url::parse(&positional)?;
    let expanded = intermediate
        .as_str()
        .replacen(PLACEHOLDER, &encode_component(query), 1);

    Ok(Url::parse(&expanded)?)
}
