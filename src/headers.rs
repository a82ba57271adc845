use http::header::{HeaderName, HeaderValue};
use http::{HeaderMap, Response};
use std::collections::HashMap;

pub type Headers = HashMap<String, String>;

/// Anything response headers can be written into.
///
/// Implementations must overwrite an existing value of the same header name
/// rather than appending a second one.
pub trait HeaderSink {
    fn set_header(&mut self, name: &str, value: &str);
}

impl HeaderSink for Headers {
    fn set_header(&mut self, name: &str, value: &str) {
        self.retain(|existing, _| !existing.eq_ignore_ascii_case(name));
        self.insert(name.to_string(), value.to_string());
    }
}

impl HeaderSink for HeaderMap {
    fn set_header(&mut self, name: &str, value: &str) {
        match (
            HeaderName::try_from(name),
            HeaderValue::from_str(value),
        ) {
            (Ok(header_name), Ok(header_value)) => {
                self.insert(header_name, header_value);
            }
            _ => tracing::warn!(name, value, "skipping header that is not valid HTTP"),
        }
    }
}

impl<B> HeaderSink for Response<B> {
    fn set_header(&mut self, name: &str, value: &str) {
        self.headers_mut().set_header(name, value);
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
