//! Turns a search query into a request for a loaded engine.

use itertools::Itertools;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

use crate::context::SubstitutionContext;
use crate::descriptor::{Engine, Method};
use crate::locale::LocaleProvider;
use crate::template::substitute;

pub const DEFAULT_RESULT_TYPE: &str = "text/html";
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Everything but `A-Z a-z 0-9 - _ . ! ~ * ' ( )`, the URI component set.
const SEARCH_TERMS: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// What to send. Handed to whatever performs the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestDescriptor {
    pub url: String,
    pub method: Method,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

/// Builds the request for `search_terms` against `engine`.
///
/// `result_type` defaults to `text/html`. Returns `None` when the engine has
/// no url for that type. The terms are percent-encoded here, once, before
/// they reach any template.
pub fn resolve(
    engine: &Engine,
    search_terms: &str,
    result_type: Option<&str>,
    locale: &dyn LocaleProvider,
) -> Option<RequestDescriptor> {
    let url = engine.url_for(result_type.unwrap_or(DEFAULT_RESULT_TYPE))?;

    let ctx = SubstitutionContext::new(
        utf8_percent_encode(search_terms, SEARCH_TERMS).to_string(),
        engine.query_charset.as_str(),
        locale.current_locale(),
    );

    let mut url_string = substitute(&url.template, &ctx);
    let data = url
        .params
        .iter()
        .map(|p| format!("{}={}", p.name, substitute(&p.value, &ctx)))
        .join("&");

    match url.method {
        Method::Get => {
            if !data.is_empty() {
                url_string.push(if url_string.contains('?') { '&' } else { '?' });
                url_string.push_str(&data);
            }
            Some(RequestDescriptor {
                url: url_string,
                method: Method::Get,
                body: None,
                content_type: None,
            })
        }
        Method::Post => Some(RequestDescriptor {
            url: url_string,
            method: Method::Post,
            body: Some(data),
            content_type: Some(FORM_CONTENT_TYPE.to_string()),
        }),
    }
}
