use calendar::{
    events::parse_events_args, events_message, KvkInput, Projection, Scope,
};

use super::reply;
use crate::discord::Context;
use common::Error;

/// Todays events (!events for the whole week)
#[poise::command(prefix_command, aliases("events"))]
pub async fn event(
    ctx: Context<'_>,
    #[description = "Region, EU or NA"]
    #[rest]
    args: Option<String>,
) -> Result<(), Error> {
    let scope = if ctx.invoked_command_name().eq_ignore_ascii_case("events") {
        Scope::Week
    } else {
        Scope::Today
    };
    let response = match parse_events_args(args.as_deref().unwrap_or("")) {
        Ok(region) => events_message(region.now(), scope),
        Err(usage) => usage,
    };
    reply(ctx, response).await
}

/// See if we win KvK
#[poise::command(prefix_command)]
pub async fn kvkcalc(
    ctx: Context<'_>,
    #[description = "Scores, arena gains and region"]
    #[rest]
    args: Option<String>,
) -> Result<(), Error> {
    let response = match KvkInput::parse(args.as_deref().unwrap_or("")) {
        Ok(input) => Projection::new(&input, &input.region.now()).describe(),
        Err(usage) => usage,
    };
    reply(ctx, response).await
}
