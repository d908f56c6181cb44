use reqwest::Url;
use serde::Deserialize;

use common::Error;

const SUMMARY_URL: &str = "https://en.wikipedia.org/api/rest_v1/page/summary/";
const SEARCH_URL: &str = "https://en.wikipedia.org/w/api.php";

#[derive(Deserialize)]
struct PageSummary {
    #[serde(rename = "type")]
    kind: String,
    extract: String,
}

pub struct WikiClient {
    client: reqwest::Client,
}

/// everything up to the first full stop
pub fn first_sentence(text: &str) -> &str {
    text.split('.').next().unwrap_or(text).trim()
}

impl WikiClient {
    pub fn new() -> Result<Self, Error> {
        Ok(Self {
            client: crate::http_client()?,
        })
    }

    /// page summary of an exact title
    async fn page_summary(&self, title: &str) -> Result<String, Error> {
        let mut url = Url::parse(SUMMARY_URL)?;
        url.path_segments_mut()
            .map_err(|_| "Summary url cannot have a path")?
            .pop_if_empty()
            .push(&title.replace(' ', "_"));

        let summary = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<PageSummary>()
            .await?;
        if summary.kind == "disambiguation" {
            return Err(format!("{title} is ambiguous").into());
        }
        if summary.extract.trim().is_empty() {
            return Err(format!("{title} has no summary").into());
        }
        Ok(summary.extract)
    }

    /// page titles matching the query, best first
    async fn search(&self, query: &str) -> Result<Vec<String>, Error> {
        let body: serde_json::Value = self
            .client
            .get(SEARCH_URL)
            .query(&[
                ("action", "opensearch"),
                ("search", query),
                ("limit", "10"),
                ("namespace", "0"),
                ("format", "json"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        let titles = body
            .get(1)
            .and_then(|t| t.as_array())
            .ok_or("Could not parse search response.")?;
        Ok(titles
            .iter()
            .filter_map(|t| t.as_str())
            .map(str::to_owned)
            .collect())
    }

    /// First sentence about the query. Falls back to the search results
    /// in order when the query isn't a page of its own.
    pub async fn summary(&self, query: &str) -> Option<String> {
        match self.page_summary(query).await {
            Ok(extract) => return Some(first_sentence(&extract).to_owned()),
            Err(e) => log::debug!("no wikipedia page for {query}: {e}"),
        }
        let titles = self
            .search(query)
            .await
            .inspect_err(|e| log::warn!("wikipedia search failed: {e}"))
            .ok()?;
        for title in titles {
            if let Ok(extract) = self.page_summary(&title).await {
                return Some(first_sentence(&extract).to_owned());
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_sentence() {
        assert_eq!(
            first_sentence("Rust is a language. It is fast."),
            "Rust is a language"
        );
        assert_eq!(first_sentence("no full stop"), "no full stop");
    }

    #[test]
    fn summary_response_parses() {
        let summary: PageSummary = serde_json::from_str(
            r#"{"type":"standard","title":"Rust","extract":"Rust is a language.","lang":"en"}"#,
        )
        .unwrap();
        assert_eq!(summary.kind, "standard");
        assert_eq!(summary.extract, "Rust is a language.");
    }
}
