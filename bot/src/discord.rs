use poise::serenity_prelude::{self as serenity};
use poise::PrefixFrameworkOptions;

use calendar::Region;
use chatter::ChatBot;
use common::{util::parse_env, Error};
use lookup::{UrbanClient, WikiClient};
use store::{Glossary, Subscriptions};
use translate::{CountryLanguages, Translator};

mod commands;
mod new_user;
mod notifications;
mod on_message;
mod on_react;

pub type Context<'a> = poise::Context<'a, PoiseData, Error>;

/// Where a region's announcements go and who they are for.
#[derive(Debug, Clone, Copy)]
pub struct RegionConfig {
    /// public channel for the region's event reminders
    pub channel: serenity::ChannelId,
    /// members that want the region's reminders
    pub role: serenity::RoleId,
}

#[derive(Debug, Clone, Copy)]
pub struct Regions {
    pub eu: RegionConfig,
    pub na: RegionConfig,
}

impl Regions {
    pub fn get(&self, region: Region) -> &RegionConfig {
        match region {
            Region::EU => &self.eu,
            Region::NA => &self.na,
        }
    }

    fn from_env() -> Self {
        Self {
            eu: RegionConfig {
                channel: serenity::ChannelId::new(parse_env("PUBLIC_EU_CHANNEL")),
                role: serenity::RoleId::new(parse_env("EU_ROLE")),
            },
            na: RegionConfig {
                channel: serenity::ChannelId::new(parse_env("PUBLIC_NA_CHANNEL")),
                role: serenity::RoleId::new(parse_env("NA_ROLE")),
            },
        }
    }

    /// makes sure every configured role and channel exists in the guild
    async fn verify(
        &self,
        http: &serenity::Http,
        guild_id: serenity::GuildId,
        lobby: serenity::ChannelId,
    ) -> Result<(), Error> {
        let roles = guild_id.roles(http).await?;
        let channels = guild_id.channels(http).await?;
        for region in Region::ALL {
            let config = self.get(region);
            if !roles.contains_key(&config.role) {
                return Err(format!("Could not find {region} role").into());
            }
            if !channels.contains_key(&config.channel) {
                return Err(format!("Could not find public-{region} channel").into());
            }
        }
        if !channels.contains_key(&lobby) {
            return Err("Could not find lobby channel".into());
        }
        Ok(())
    }
}

pub struct PoiseData {
    /// guild the bot operates in
    pub guild_id: serenity::GuildId,
    pub regions: Regions,
    /// where new members are greeted
    pub lobby_channel: serenity::ChannelId,

    /// !whatis knowledge
    pub glossary: Glossary,
    /// !remindme store refresh subscriptions
    pub subscriptions: Subscriptions,
    pub chatbot: ChatBot,

    pub wiki: WikiClient,
    pub urban: UrbanClient,
    /// plain client for inspirobot
    pub http_client: reqwest::Client,

    pub translator: Translator,
    pub country_languages: CountryLanguages,
}

/// handle discord events
async fn event_handler(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, PoiseData, Error>,
    data: &PoiseData,
) -> Result<(), Error> {
    use serenity::FullEvent as Event;

    match event {
        Event::GuildMemberAddition { new_member } => {
            if new_member.guild_id == data.guild_id {
                new_user::welcome_user(ctx, data, new_member).await?;
            }
        }
        Event::Message { new_message } => {
            // ignore bots
            if new_message.author.bot {
                return Ok(());
            }
            let _ = on_message::chat(ctx, data, new_message)
                .await
                .inspect_err(|e| log::error!("chatbot fail: {e}"));
        }
        Event::ReactionAdd { add_reaction } => {
            let _ = on_react::translate_flag(ctx, data, add_reaction)
                .await
                .inspect_err(|e| log::error!("flag translation fail: {e}"));
        }
        _ => (),
    };
    Ok(())
}

/// initialize the discord bot
pub async fn start_bot() -> Result<(), Error> {
    let bot_token: String = parse_env("DISCORD_TOKEN");
    let guild_id = serenity::GuildId::new(parse_env("GUILD_ID"));
    let lobby_channel = serenity::ChannelId::new(parse_env("LOBBY_CHANNEL"));
    let urban_api_key: String = parse_env("URBAN_DICTIONARY_API_KEY");
    let db_url: String = parse_env("DATABASE_URL");

    let regions = Regions::from_env();
    regions
        .verify(&serenity::Http::new(&bot_token), guild_id, lobby_channel)
        .await?;

    let pool = store::connect(&db_url).await?;
    let subscriptions = Subscriptions::new(pool.clone());

    let intents = serenity::GatewayIntents::non_privileged()
        | serenity::GatewayIntents::MESSAGE_CONTENT
        | serenity::GatewayIntents::GUILD_MEMBERS;

    let data = PoiseData {
        guild_id,
        regions,
        lobby_channel,
        glossary: Glossary::new(pool.clone()),
        subscriptions: subscriptions.clone(),
        chatbot: ChatBot::new(pool.clone()),
        wiki: WikiClient::new()?,
        urban: UrbanClient::new(urban_api_key)?,
        http_client: lookup::http_client()?,
        translator: Translator::new(),
        country_languages: CountryLanguages::bundled()?,
    };
    log::info!(
        "Loaded languages for {} countries.",
        data.country_languages.len()
    );

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::ALL.iter().map(|f| f()).collect(),
            event_handler: |a, b, c, d| Box::pin(event_handler(a, b, c, d)),
            prefix_options: PrefixFrameworkOptions {
                prefix: Some("!".to_owned()),
                case_insensitive_commands: true,
                // mentions are for the chat bot
                mention_as_prefix: false,
                ..Default::default()
            },
            ..Default::default()
        })
        .setup(move |ctx, ready, _framework| {
            Box::pin(async move {
                log::info!("{} has connected to {}!", ready.user.name, guild_id);
                ctx.set_activity(Some(serenity::ActivityData::playing("!help")));
                Ok(data)
            })
        })
        .build();

    let mut client = serenity::Client::builder(bot_token, intents)
        .framework(framework)
        .await?;

    let _scheduler =
        notifications::start(client.http.clone(), guild_id, regions, subscriptions).await?;

    log::info!("Bot started!");
    client.start().await?;
    Ok(())
}
