use common::Error;

use crate::languages::is_supported;

const TRANSLATE_URL: &str = "https://translate.googleapis.com/translate_a/single";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub text: String,
    /// language the service detected in the original
    pub source: Option<String>,
    pub dest: String,
}

/// Client for the google translate web endpoint.
pub struct Translator {
    client: reqwest::Client,
}

/// Pulls the translated text and detected language out of the endpoint's
/// nested array response: `[[[translated, original, ..], ..], null, "src", ..]`.
fn parse_response(body: &serde_json::Value) -> Option<(String, Option<String>)> {
    let segments = body.get(0)?.as_array()?;
    let text: String = segments
        .iter()
        .filter_map(|s| s.get(0).and_then(|t| t.as_str()))
        .collect();
    let source = body.get(2).and_then(|s| s.as_str()).map(str::to_owned);
    Some((text, source))
}

impl Translator {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Translates text into `dest`, detecting the source language.
    pub async fn translate(&self, text: &str, dest: &str) -> Result<Translation, Error> {
        if !is_supported(dest) {
            return Err(format!("invalid destination language {dest}").into());
        }
        let body: serde_json::Value = self
            .client
            .get(TRANSLATE_URL)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", dest),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        let (text, source) = parse_response(&body).ok_or("Could not parse translation response.")?;
        log::debug!("translated {source:?} -> {dest}");
        Ok(Translation {
            text,
            source,
            dest: dest.to_owned(),
        })
    }
}
