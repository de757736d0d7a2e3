//! Google translation endpoint.
//!
//! Queries `translate_a/single`, which answers with nested JSON arrays whose
//! first element lists translated segments:
//! `[[["bonjour le monde","hello world",null,null,1]],null,"en"]`.
use std::time::Duration;

use log::debug;
use serde_json::Value;
use url::Url;

use crate::error::Error;

use super::Translator;

const BASE_URL: &str = "https://translate.googleapis.com/translate_a/single";
const TIMEOUT: Duration = Duration::from_secs(30);

/// holds the endpoint url and the http client that will make the requests.
pub struct GoogleTranslate {
    base: Url,
    client: reqwest::blocking::Client,
}

impl GoogleTranslate {
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url(BASE_URL)
    }

    /// Use another endpoint speaking the same protocol.
    pub fn with_base_url(base: &str) -> Result<Self, Error> {
        let base = Url::parse(base).map_err(|e| Error::Custom(format!("{}: {}", base, e)))?;
        let client = reqwest::blocking::Client::builder()
            .timeout(TIMEOUT)
            .build()?;
        Ok(Self { base, client })
    }

    fn query_url(&self, text: &str, src: &str, dest: &str) -> Url {
        let mut url = self.base.clone();
        url.query_pairs_mut()
            .append_pair("client", "gtx")
            .append_pair("sl", src)
            .append_pair("tl", dest)
            .append_pair("dt", "t")
            .append_pair("q", text);
        url
    }
}

impl Translator for GoogleTranslate {
    fn translate(&self, text: &str, src: &str, dest: &str) -> Result<String, Error> {
        let url = self.query_url(text, src, dest);
        debug!("translating {} -> {}: {:?}", src, dest, text);
        let body: Value = self.client.get(url).send()?.error_for_status()?.json()?;
        parse_response(&body)
    }
}

/// Concatenate translated segments.
fn parse_response(body: &Value) -> Result<String, Error> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| Error::Translation(format!("unexpected response: {}", body)))?;

    Ok(segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect())
}
