use serde::Deserialize;

use common::{discord::fit, Error};

const URBAN_URL: &str = "https://mashape-community-urban-dictionary.p.rapidapi.com/define";
const URBAN_HOST: &str = "mashape-community-urban-dictionary.p.rapidapi.com";

#[derive(Deserialize, Debug, Clone)]
pub struct Definition {
    pub definition: String,
    pub example: String,
    pub thumbs_up: i64,
}

#[derive(Deserialize)]
struct DefineResponse {
    list: Vec<Definition>,
}

/// The most upvoted definition, formatted for discord.
pub fn best_definition(list: &[Definition]) -> Option<String> {
    let best = list.iter().max_by_key(|d| d.thumbs_up)?;
    Some(fit(&format!(
        "**Definition**: {}\n**Example**: {}",
        best.definition, best.example
    )))
}

/// Urban dictionary through rapidapi.
pub struct UrbanClient {
    api_key: String,
    client: reqwest::Client,
}

impl UrbanClient {
    pub fn new(api_key: String) -> Result<Self, Error> {
        Ok(Self {
            api_key,
            client: crate::http_client()?,
        })
    }

    async fn fetch(&self, term: &str) -> Result<Vec<Definition>, Error> {
        let resp = self
            .client
            .get(URBAN_URL)
            .query(&[("term", term)])
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", URBAN_HOST)
            .send()
            .await?
            .error_for_status()?
            .json::<DefineResponse>()
            .await?;
        Ok(resp.list)
    }

    pub async fn define(&self, term: &str) -> Option<String> {
        let list = self
            .fetch(term)
            .await
            .inspect_err(|e| log::warn!("urban dictionary lookup of {term} failed: {e}"))
            .ok()?;
        best_definition(&list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_most_upvoted() {
        let resp: DefineResponse = serde_json::from_str(
            r#"{"list":[
                {"definition":"meh","example":"meh.","thumbs_up":3,"author":"a"},
                {"definition":"the best","example":"so good","thumbs_up":40,"author":"b"},
                {"definition":"ok","example":"fine","thumbs_up":12,"author":"c"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(
            best_definition(&resp.list).unwrap(),
            "**Definition**: the best\n**Example**: so good"
        );
    }

    #[test]
    fn empty_list_has_no_definition() {
        assert_eq!(best_definition(&[]), None);
    }

    #[test]
    fn long_definitions_are_cut() {
        let long = Definition {
            definition: "x".repeat(5000),
            example: String::new(),
            thumbs_up: 1,
        };
        assert_eq!(best_definition(&[long]).unwrap().chars().count(), 2000);
    }
}
