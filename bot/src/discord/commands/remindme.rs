use calendar::StoreEvent;

use super::{first_arg, reply};
use crate::discord::Context;
use common::Error;

/// I'll notify you about event in pm
#[poise::command(prefix_command)]
pub async fn remindme(
    ctx: Context<'_>,
    #[description = "emblem or mystical"]
    #[rest]
    args: Option<String>,
) -> Result<(), Error> {
    let Some(event) = first_arg(&args) else {
        return reply(
            ctx,
            "What event you want to be reminded of? \"emblem\" or \"mystical\"?",
        )
        .await;
    };
    let Ok(event) = event.parse::<StoreEvent>() else {
        return reply(ctx, "Don't know that event...").await;
    };

    let uid = ctx.author().id.get();
    let subscribed = ctx.data().subscriptions.toggle(event.key(), uid).await?;
    let response = if subscribed {
        format!("I'll remind you of {event}")
    } else {
        format!("I'll stop reminding you of {event}")
    };
    reply(ctx, response).await
}
