use chrono::{DateTime, FixedOffset};
use tokio::sync::mpsc::Sender;
use tokio_cron_scheduler::{Job, JobBuilder};

use common::Error;

use crate::{Region, StoreEvent, WeekKind};

/// What to do when a notification fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Announcement {
    /// post in the region's public channel, optionally pinging the region role
    Channel { text: &'static str, ping_role: bool },
    /// DM everyone subscribed to the store refresh
    StoreRefresh(StoreEvent),
}

/// A recurring reminder. `schedule` is a cron expression with seconds,
/// read in the region's in-game time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification {
    pub schedule: &'static str,
    pub announcement: Announcement,
    /// only announced during weeks of this kind
    pub only_during: Option<WeekKind>,
}

impl Notification {
    const fn say(schedule: &'static str, text: &'static str) -> Self {
        Self {
            schedule,
            announcement: Announcement::Channel {
                text,
                ping_role: false,
            },
            only_during: None,
        }
    }

    const fn ping(schedule: &'static str, text: &'static str) -> Self {
        Self {
            schedule,
            announcement: Announcement::Channel {
                text,
                ping_role: true,
            },
            only_during: None,
        }
    }

    const fn during(self, week: WeekKind) -> Self {
        Self {
            only_during: Some(week),
            ..self
        }
    }

    const fn store(schedule: &'static str, event: StoreEvent) -> Self {
        Self {
            schedule,
            announcement: Announcement::StoreRefresh(event),
            only_during: None,
        }
    }

    pub fn is_active(&self, ingame: &DateTime<FixedOffset>) -> bool {
        self.only_during
            .map_or(true, |week| WeekKind::of(ingame) == week)
    }
}

pub static TABLE: &[Notification] = &[
    Notification::say("0 30 11,17,20 * * *", "Energy to be claimed! Go go!"),
    // dragon
    Notification::say("0 0 12 * * Mon,Thu", "Dragon is invading! Remember to fix ballista!"),
    Notification::say(
        "0 30 20 * * Mon,Thu",
        "Dragon is leaving in 30 minutes! Remember to fix ballista!",
    ),
    // daily rewards
    Notification::say("0 0 21 * * *", "Guild reward packs! Go claim some lewt!"),
    Notification::say("0 45 20 * * *", "15 minutes to arena rewards"),
    Notification::say(
        "0 15 21 * * *",
        "15 minutes to underground rewards! Go get em castles :partying_face:",
    ),
    // sphinx
    Notification::say("0 0 5 * * Wed", "Sphinx is coming today, save up some movement!"),
    Notification::say("0 0 9 * * Wed", "Sphinx is here, go play trivia!"),
    // kvk
    Notification::ping("0 45 8 * * Wed", "15 minutes to KvK starts!!"),
    Notification::say("0 45 8 * * Thu,Fri", "15 minutes till today's KvK rounds start!"),
    Notification::say(
        "0 45 21 * * Wed,Thu",
        "15 minutes to KvK rewards! Go get em Kingdoms :partying_face:",
    ),
    Notification::say(
        "0 45 21 * * Fri",
        "15 minutes to KvK ends! Go get em Kingdoms :partying_face:",
    ),
    // battle of gods
    Notification::say(
        "0 45 19 * * Tue",
        "15 minutes to group game in BoG! Remember rosters!",
    )
    .during(WeekKind::BattleOfGods),
    Notification::say(
        "0 45 19 * * Wed",
        "15 minutes to Battle of Gods quarter finals! \
         Go place your bets and rosters :partying_face:",
    )
    .during(WeekKind::BattleOfGods),
    Notification::say(
        "0 45 19 * * Thu",
        "15 minutes to Battle of Gods finals! Go place your bets and rosters :partying_face:",
    )
    .during(WeekKind::BattleOfGods),
    // clash of gods
    Notification::say(
        "0 15 19 * * Tue,Wed",
        "15 minutes to qualification games in CoG! Remember rosters!",
    )
    .during(WeekKind::ClashOfGods),
    Notification::say(
        "0 15 19 * * Thu",
        "15 minutes to CoG finals! Go place your bets and rosters :partying_face:",
    )
    .during(WeekKind::ClashOfGods),
    // endless inferno
    Notification::say("0 0 9 * * Mon,Thu", "\"Endless\" inferno is here, go climb the ladder!"),
    Notification::say("0 30 11 * * Mon,Thu", "\"Endless\" inferno refresh in 30 minutes!"),
    // stores
    Notification::store("0 0 5,12,18,21 * * *", StoreEvent::Mystical),
    Notification::store("0 0 5,8,11,14,17,20,23 * * *", StoreEvent::Emblem),
    Notification::ping(
        "0 0 5 1 * *",
        "New premium deck out! Activate it BEFORE starting dailies!",
    ),
];

/// Sent down the dispatch channel each time a notification's schedule hits.
#[derive(Debug, Clone, Copy)]
pub struct Fired {
    pub region: Region,
    pub notification: &'static Notification,
}

/// builds one cron job per notification, running in the region's in-game time
pub fn build_jobs(region: Region, sender: Sender<Fired>) -> Result<Vec<Job>, Error> {
    TABLE
        .iter()
        .map(|notification| build_job(region, notification, sender.clone()))
        .collect()
}

fn build_job(
    region: Region,
    notification: &'static Notification,
    sender: Sender<Fired>,
) -> Result<Job, Error> {
    let job = JobBuilder::new()
        .with_timezone(region.offset())
        .with_cron_job_type()
        .with_schedule(notification.schedule)?
        .with_run_async(Box::new(move |_uuid, _l| {
            let sender = sender.clone();
            Box::pin(async move {
                let _ = sender
                    .send(Fired {
                        region,
                        notification,
                    })
                    .await
                    .inspect_err(|e| log::error!("Could not dispatch {region} notification: {e}"));
            })
        }))
        .build()?;
    Ok(job)
}
