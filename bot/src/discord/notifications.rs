use std::sync::Arc;

use poise::serenity_prelude::{
    self as serenity, CreateAllowedMentions, CreateMessage, Mentionable,
};
use tokio::sync::mpsc::{self, Receiver};
use tokio_cron_scheduler::JobScheduler;

use calendar::notifications::{build_jobs, Announcement, Fired};
use calendar::{Region, StoreEvent};
use common::{util::capitalize, Error};
use store::Subscriptions;

use super::{RegionConfig, Regions};

/// Schedules every region's event reminders and spawns the task that
/// delivers them. The returned scheduler must be kept alive.
pub async fn start(
    http: Arc<serenity::Http>,
    guild_id: serenity::GuildId,
    regions: Regions,
    subscriptions: Subscriptions,
) -> Result<JobScheduler, Error> {
    let (sender, receiver) = mpsc::channel::<Fired>(64);

    let sched = JobScheduler::new().await?;
    for region in Region::ALL {
        for job in build_jobs(region, sender.clone())? {
            sched.add(job).await?;
        }
    }

    spawn_dispatcher(http, guild_id, regions, subscriptions, receiver);

    sched.start().await?;
    log::info!("Event reminders scheduled.");
    Ok(sched)
}

fn spawn_dispatcher(
    http: Arc<serenity::Http>,
    guild_id: serenity::GuildId,
    regions: Regions,
    subscriptions: Subscriptions,
    mut receiver: Receiver<Fired>,
) {
    tokio::spawn(async move {
        while let Some(fired) = receiver.recv().await {
            let _ = dispatch(&http, guild_id, &regions, &subscriptions, fired)
                .await
                .inspect_err(|e| log::error!("Could not send {} reminder: {e}", fired.region));
        }
    });
}

async fn dispatch(
    http: &serenity::Http,
    guild_id: serenity::GuildId,
    regions: &Regions,
    subscriptions: &Subscriptions,
    fired: Fired,
) -> Result<(), Error> {
    let config = regions.get(fired.region);
    if !fired.notification.is_active(&fired.region.now()) {
        return Ok(());
    }

    match fired.notification.announcement {
        Announcement::Channel { text, ping_role } => {
            announce(http, config, text, ping_role).await?;
        }
        Announcement::StoreRefresh(event) => {
            dm_subscribers(http, guild_id, config, subscriptions, event).await?;
        }
    }
    Ok(())
}

async fn announce(
    http: &serenity::Http,
    config: &RegionConfig,
    text: &str,
    ping_role: bool,
) -> Result<(), Error> {
    let content = if ping_role {
        format!("{text} {}", config.role.mention())
    } else {
        text.to_owned()
    };
    config
        .channel
        .send_message(
            http,
            CreateMessage::new()
                .content(content)
                .allowed_mentions(CreateAllowedMentions::new().roles(vec![config.role])),
        )
        .await?;
    Ok(())
}

/// DMs everyone subscribed to the store who is in the region's role
async fn dm_subscribers(
    http: &serenity::Http,
    guild_id: serenity::GuildId,
    config: &RegionConfig,
    subscriptions: &Subscriptions,
    event: StoreEvent,
) -> Result<(), Error> {
    let message = format!("{} store has refreshed", capitalize(event.key()));
    let mut sent = 0;
    for uid in subscriptions.subscribers(event.key()).await? {
        let user = serenity::UserId::new(uid);
        let member = match guild_id.member(http, user).await {
            Ok(member) => member,
            Err(e) => {
                log::warn!("Subscriber {uid} not found in guild: {e}");
                continue;
            }
        };
        if !member.roles.contains(&config.role) {
            continue;
        }
        match user
            .direct_message(http, CreateMessage::new().content(&message))
            .await
        {
            Ok(_) => sent += 1,
            Err(e) => log::warn!("Could not DM {uid}: {e}"),
        }
    }
    log::debug!("{message}: notified {sent} subscribers");
    Ok(())
}
