use super::{first_arg, reply};
use crate::discord::Context;
use common::Error;

/// Explains what keyword is
#[poise::command(prefix_command)]
pub async fn whatis(
    ctx: Context<'_>,
    #[description = "The keyword"]
    #[rest]
    args: Option<String>,
) -> Result<(), Error> {
    let Some(keyword) = first_arg(&args).map(str::to_lowercase) else {
        return reply(ctx, "What do you want to know about?").await;
    };
    let response = match ctx.data().glossary.explain(&keyword).await? {
        Some(meaning) => format!("{keyword} refers to {meaning}"),
        None => format!("I don't know what {keyword} means..."),
    };
    reply(ctx, response).await
}

/// Teach me what keyword means
#[poise::command(prefix_command)]
pub async fn addis(
    ctx: Context<'_>,
    #[description = "The keyword followed by its explanation"]
    #[rest]
    args: Option<String>,
) -> Result<(), Error> {
    let Some((keyword, meaning)) = args
        .as_deref()
        .map(str::trim)
        .and_then(|a| a.split_once(char::is_whitespace))
        .map(|(k, m)| (k.to_lowercase(), m.trim()))
        .filter(|(_, m)| !m.is_empty())
    else {
        return reply(ctx, "Usage: !addis <keyword> <explanation>").await;
    };
    ctx.data().glossary.teach(&keyword, meaning).await?;
    log::info!("{} taught {keyword}", ctx.author().name);
    reply(ctx, format!("Thanks for letting me know what {keyword} means")).await
}

/// Deletes my knowledge of keyword
#[poise::command(prefix_command)]
pub async fn remis(
    ctx: Context<'_>,
    #[description = "The keyword to forget"]
    #[rest]
    args: Option<String>,
) -> Result<(), Error> {
    let Some(keyword) = first_arg(&args).map(str::to_lowercase) else {
        return reply(ctx, "What do you want me to forget?").await;
    };
    let response = if ctx.data().glossary.forget(&keyword).await? {
        format!("I've forgotten what {keyword} means")
    } else {
        format!("I didn't know what {keyword} means anyway")
    };
    reply(ctx, response).await
}
