//! Search engine descriptors: the in-memory [`Engine`] and the parser that
//! builds one from a descriptor document.

use std::collections::HashMap;
use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

use serde::Serialize;

use crate::errors::{Error, Result};
use crate::locale::FixedLocale;
use crate::parser::Parser;
use crate::resolver::{self, RequestDescriptor};
use crate::template::INPUT_ENCODING_DEFAULT;
use crate::xml::{self, Element};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            _ => Err(Error::DescriptorParse(format!("invalid method `{s}`"))),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub value: String,
}

/// One `Url` entry of a descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineUrl {
    pub result_type: String,
    pub method: Method,
    pub template: String,
    pub params: Vec<Param>,
}

impl EngineUrl {
    /// Empty strings count as missing. The template must be an http(s) URI.
    pub fn new(result_type: &str, method: &str, template: &str) -> Result<Self> {
        if result_type.is_empty() || method.is_empty() || template.is_empty() {
            return Err(Error::DescriptorParse(
                "missing method, type, or template for search engine url".into(),
            ));
        }
        let method = method.parse::<Method>()?;
        let scheme = Parser::new(template)
            .parse_scheme()
            .map_err(|e| Error::DescriptorParse(format!("url template is not a uri: {e:?}")))?;
        if scheme != "http" && scheme != "https" {
            return Err(Error::DescriptorParse(format!(
                "url template has invalid scheme `{scheme}`"
            )));
        }
        Ok(Self {
            result_type: result_type.to_uppercase(),
            method,
            template: template.to_string(),
            params: Vec::new(),
        })
    }

    pub fn add_param(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params.push(Param { name: name.into(), value: value.into() });
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    pub name: Option<String>,
    pub description: Option<String>,
    pub query_charset: String,
    /// Keyed by upper-cased result type.
    pub urls: HashMap<String, EngineUrl>,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            name: None,
            description: None,
            query_charset: INPUT_ENCODING_DEFAULT.to_string(),
            urls: HashMap::new(),
        }
    }
}

impl Engine {
    /// Reads and parses a complete descriptor document.
    pub fn from_reader<R: BufRead>(input: R) -> Result<Self> {
        let root = xml::parse_document(input)?;
        Ok(parse_engine(&root))
    }

    pub fn from_xml_str(input: &str) -> Result<Self> {
        Self::from_reader(input.as_bytes())
    }

    /// Url definition for a result type such as `text/html` (any case).
    pub fn url_for(&self, result_type: &str) -> Option<&EngineUrl> {
        self.urls.get(&result_type.to_uppercase())
    }

    pub fn supports(&self, result_type: &str) -> bool {
        self.url_for(result_type).is_some()
    }

    /// Builds the request for `search_terms` with an explicit locale.
    /// `None` when the engine has no url for the result type.
    pub fn query_request(
        &self,
        search_terms: &str,
        result_type: Option<&str>,
        locale: &str,
    ) -> Option<RequestDescriptor> {
        resolver::resolve(self, search_terms, result_type, &FixedLocale::new(locale))
    }
}

/// Builds an [`Engine`] from the root element of a descriptor document.
/// A broken `Url` element is skipped on its own; it never fails the engine.
pub fn parse_engine(root: &Element) -> Engine {
    let mut eng = Engine::default();

    for child in root.child_elements() {
        match child.name.as_str() {
            "ShortName" => eng.name = Some(child.text_content()),
            "Description" => eng.description = Some(child.text_content()),
            "Url" => match parse_url(child) {
                Ok(url) => {
                    eng.urls.insert(url.result_type.clone(), url);
                }
                Err(e) => {
                    tracing::debug!(error = %e, "skipping Url element");
                }
            },
            "InputEncoding" => eng.query_charset = child.text_content().to_uppercase(),
            _ => {}
        }
    }
    eng
}

fn parse_url(el: &Element) -> Result<EngineUrl> {
    let result_type = el.attribute("type").unwrap_or_default();
    let method = el.attribute("method").filter(|m| !m.is_empty()).unwrap_or("GET");
    let template = el.attribute("template").unwrap_or_default();

    let mut url = EngineUrl::new(result_type, method, template)?;
    for p in el.child_elements().filter(|c| c.name == "Param") {
        match (p.attribute("name"), p.attribute("value")) {
            (Some(name), Some(value)) if !name.is_empty() && !value.is_empty() => {
                url.add_param(name, value)
            }
            _ => {}
        }
    }
    Ok(url)
}
