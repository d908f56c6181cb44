use poise::serenity_prelude::{self as serenity, Message};

use super::PoiseData;
use chatter::clean_message;
use common::{
    discord::{addressed, fit},
    Error,
};

/// names a mentioned user may show up as once mentions are rendered as text
async fn mention_names(ctx: &serenity::Context, message: &Message) -> Vec<String> {
    let mut names = vec![];
    for user in &message.mentions {
        if let Some(guild_id) = message.guild_id {
            if let Some(nick) = user.nick_in(ctx, guild_id).await {
                names.push(nick);
            }
        }
        if let Some(global_name) = &user.global_name {
            names.push(global_name.clone());
        }
        names.push(user.name.clone());
    }
    names
}

/// Answers mentions and DMs with the chat bot, learns from everything else.
pub async fn chat(
    ctx: &serenity::Context,
    data: &PoiseData,
    new_message: &Message,
) -> Result<(), Error> {
    // commands are handled by the framework
    if new_message.content.starts_with('!') {
        return Ok(());
    }

    let private = new_message.guild_id.is_none();
    let mentioned = new_message.mentions_me(ctx).await?;

    let content = new_message.content_safe(&ctx.cache);
    let names = mention_names(ctx, new_message).await;
    let Some(text) = clean_message(&content, &names) else {
        return Ok(());
    };
    let conversation = new_message.channel_id.to_string();

    if !mentioned && !private {
        return data.chatbot.learn(&conversation, &text).await;
    }

    let response = data.chatbot.respond(&conversation, &text).await?;
    let response = if private {
        fit(&response)
    } else {
        addressed(new_message.author.id, &response)
    };
    new_message.channel_id.say(ctx, response).await?;
    Ok(())
}
