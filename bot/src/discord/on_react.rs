use poise::serenity_prelude::{self as serenity, Reaction};

use super::PoiseData;
use common::{discord::fit, util::remove_backticks, Error};
use translate::{flag, languages};

/// translate a message when someone reacts to it with a country flag
pub async fn translate_flag(
    ctx: &serenity::Context,
    data: &PoiseData,
    reaction: &Reaction,
) -> Result<(), Error> {
    let serenity::ReactionType::Unicode(emoji) = &reaction.emoji else {
        return Ok(());
    };
    let Some(country) = flag::country_code(emoji) else {
        return Ok(());
    };
    let Some(language) = data.country_languages.primary(&country) else {
        log::debug!("no language known for {country}");
        return Ok(());
    };

    let message = reaction.message(ctx).await?;
    // somebody already asked for this translation
    if message
        .reactions
        .iter()
        .any(|r| r.reaction_type == reaction.emoji && r.count > 1)
    {
        return Ok(());
    }
    if message.content.trim().is_empty() {
        return Ok(());
    }

    if !languages::is_supported(language) {
        message
            .channel_id
            .say(ctx, format!("I can't translate into {language} yet!"))
            .await?;
        return Ok(());
    }

    let translation = data.translator.translate(&message.content, language).await?;
    let name = languages::language_name(&translation.dest).unwrap_or(language);
    message
        .channel_id
        .say(
            ctx,
            fit(&format!(
                "\"{}\" in {} is: ```{}```",
                message.content,
                name,
                remove_backticks(&translation.text)
            )),
        )
        .await?;
    Ok(())
}
