//
//  mod.rs
//  saloon-inspect
//
//  Pattern-based fact extraction from connector and request sources.
//  This is text matching, not parsing: it understands the single-level,
//  slash-delimited concatenation that generated requests use, and
//  under-extracts (never fails) on ternaries, method calls or nesting.
//

mod helpers;

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::method::Method;
use helpers::{after, after_last, before};

static METHOD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$?\bmethod\s*=\s*(.*?);").expect("method pattern compiles")
});

static ENDPOINT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)function\s+resolveEndpoint\(\)\s*:\s*string\s*\{\s*return\s+(.*?);")
        .expect("endpoint pattern compiles")
});

static BASE_URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)function\s+resolveBaseUrl\(\)\s*:\s*string\s*\{\s*return\s+'(.*?)';")
        .expect("base url pattern compiles")
});

/// Receiver prefix marking a property read inside an endpoint expression.
const PROPERTY_RECEIVER: &str = "$this->";

/// Facts pulled from a connector file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectorFacts {
    /// Base URL without its scheme. Empty when not found.
    pub base_url: String,
}

/// Facts pulled from a request file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestFacts {
    /// Method token as written (`GET`, `POST`, ...). Empty when not found.
    pub method: String,
    /// Endpoint template with `{property}` placeholders. Empty when not found.
    pub endpoint: String,
}

impl RequestFacts {
    pub fn known_method(&self) -> Option<Method> {
        Method::from_token(&self.method)
    }
}

/// Read a source file, treating anything unreadable as empty.
pub fn read_source(path: &Path) -> String {
    match fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            debug!(file = %path.display(), error = %e, "unreadable source, extracting from empty text");
            String::new()
        }
    }
}

pub fn extract_connector(path: &Path) -> ConnectorFacts {
    let source = read_source(path);
    ConnectorFacts {
        base_url: extract_base_url(&source),
    }
}

pub fn extract_request(path: &Path) -> RequestFacts {
    let source = read_source(path);
    RequestFacts {
        method: extract_method(&source),
        endpoint: extract_endpoint(&source),
    }
}

/// First capture group of `pattern` in `source`, or empty.
fn first_capture(pattern: &Regex, source: &str) -> String {
    pattern
        .captures(source)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// `$method = Method::POST;` yields `POST`.
pub fn extract_method(source: &str) -> String {
    let value = first_capture(&METHOD_PATTERN, source);
    after_last(&value, ":").trim().to_string()
}

/// `return '/users/' . $this->userId . '/posts';` yields `/users/{userId}/posts`.
pub fn extract_endpoint(source: &str) -> String {
    let expr = first_capture(&ENDPOINT_PATTERN, source);
    endpoint_template(&expr)
}

/// `return 'https://api.example.com';` yields `api.example.com`.
pub fn extract_base_url(source: &str) -> String {
    let literal = first_capture(&BASE_URL_PATTERN, source);
    after(&literal, "://").to_string()
}

/// Rebuild a concatenated endpoint expression as a display template.
///
/// Each `/`-separated segment holding a property read is reduced to the
/// text between the first `>` and the next `.'`, then wrapped in braces.
/// Chained reads such as `$this->user->id` keep everything after the first
/// `>` (`{user->id}`).
fn endpoint_template(expr: &str) -> String {
    let segments: Vec<String> = expr
        .split('/')
        .map(|segment| {
            if segment.contains(PROPERTY_RECEIVER) {
                let compact: String = segment.chars().filter(|c| !c.is_whitespace()).collect();
                format!("{{{}}}", before(after(&compact, ">"), ".'"))
            } else {
                segment.to_string()
            }
        })
        .collect();

    segments.join("/").replace('\'', "")
}
