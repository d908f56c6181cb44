use calendar::Region;

use super::{first_arg, reply};
use crate::discord::Context;
use common::Error;

/// I'll notify you about events for that region
#[poise::command(prefix_command, guild_only)]
pub async fn role(
    ctx: Context<'_>,
    #[description = "EU or NA"]
    #[rest]
    args: Option<String>,
) -> Result<(), Error> {
    let Some(name) = first_arg(&args) else {
        return reply(ctx, "What role you want to be added to? \"EU\" or \"NA\"?").await;
    };
    let Ok(region) = name.parse::<Region>() else {
        return reply(ctx, "Don't know that role... (supported 'EU' and 'NA')").await;
    };

    let role = ctx.data().regions.get(region).role;
    let member = ctx
        .author_member()
        .await
        .ok_or("Could not find you in the guild.")?;
    let response = if member.roles.contains(&role) {
        member.remove_role(ctx.http(), role).await?;
        format!("I'll stop notifying you of {region} events")
    } else {
        member.add_role(ctx.http(), role).await?;
        format!("I'll remind you of {region} events")
    };
    log::info!("{} toggled the {region} role", ctx.author().name);
    reply(ctx, response).await
}
