use super::reply;
use crate::discord::Context;
use common::Error;

/// I'll lookup stuff on Wikipedia
#[poise::command(prefix_command, channel_cooldown = 3)]
pub async fn lookup(
    ctx: Context<'_>,
    #[description = "What to look up"]
    #[rest]
    query: Option<String>,
) -> Result<(), Error> {
    let Some(query) = query.filter(|q| !q.trim().is_empty()) else {
        return reply(ctx, "what do you want me to lookup?").await;
    };
    ctx.defer().await?;
    let response = ctx
        .data()
        .wiki
        .summary(&query)
        .await
        .unwrap_or_else(|| format!("I don't know about {query}"));
    reply(ctx, response).await
}

/// I'll lookup stuff on Urban Dictionary
#[poise::command(prefix_command, channel_cooldown = 3)]
pub async fn urban(
    ctx: Context<'_>,
    #[description = "What to look up"]
    #[rest]
    term: Option<String>,
) -> Result<(), Error> {
    let Some(term) = term.filter(|t| !t.trim().is_empty()) else {
        return reply(ctx, "what do you want me to lookup?").await;
    };
    ctx.defer().await?;
    let response = ctx
        .data()
        .urban
        .define(&term)
        .await
        .unwrap_or_else(|| format!("I don't know about {term}"));
    reply(ctx, response).await
}

/// I'll generate an inspirational quote
#[poise::command(prefix_command, channel_cooldown = 5)]
pub async fn inspireme(ctx: Context<'_>) -> Result<(), Error> {
    ctx.defer().await?;
    let response = match ::lookup::inspiro::generate(&ctx.data().http_client).await {
        Ok(url) => url,
        Err(e) => {
            log::warn!("inspirobot failed: {e}");
            "Something went wrong :poop:".to_owned()
        }
    };
    reply(ctx, response).await
}
