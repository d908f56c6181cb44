//! Clients for the third party lookups behind !lookup, !urban and !inspireme.

use common::Error;

pub mod inspiro;
pub mod urban;
pub mod wikipedia;

pub use urban::UrbanClient;
pub use wikipedia::WikiClient;

const USER_AGENT: &str = concat!("stacked-bot/", env!("CARGO_PKG_VERSION"));

pub fn http_client() -> Result<reqwest::Client, Error> {
    Ok(reqwest::Client::builder().user_agent(USER_AGENT).build()?)
}
