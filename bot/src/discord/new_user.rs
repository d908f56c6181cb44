use poise::serenity_prelude::{self as serenity};
use serenity::{CreateMessage, Member, Mentionable};

use super::PoiseData;
use common::Error;

/// Sends a welcome message when a user joins the server
pub async fn welcome_user(
    ctx: &serenity::Context,
    data: &PoiseData,
    new_member: &Member,
) -> Result<(), Error> {
    data.lobby_channel
        .send_message(
            ctx,
            CreateMessage::new().content(format!(
                "Hi {}, welcome to Stacked! :partying_face:",
                new_member.mention()
            )),
        )
        .await?;
    log::info!("Welcomed {}", new_member.user.name);
    Ok(())
}
