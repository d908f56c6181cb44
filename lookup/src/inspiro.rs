use common::Error;

const GENERATE_URL: &str = "https://inspirobot.me/api?generate=true";

/// Asks inspirobot for a fresh quote, returns the image url.
pub async fn generate(client: &reqwest::Client) -> Result<String, Error> {
    let url = client
        .get(GENERATE_URL)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    let url = url.trim();
    if !url.starts_with("http") {
        return Err(format!("Unexpected inspirobot response: {url}").into());
    }
    Ok(url.to_owned())
}
