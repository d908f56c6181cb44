use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, FixedOffset, Utc};

use common::Error;

pub mod events;
pub mod kvk;
pub mod notifications;

pub use events::{events_message, Scope};
pub use kvk::{KvkInput, Projection};

/// A game server region. Each region runs on its own in-game clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    EU,
    NA,
}

impl Region {
    pub const ALL: [Region; 2] = [Region::EU, Region::NA];

    /// hours the in-game clock is ahead of utc
    pub fn utc_offset_hours(self) -> i32 {
        match self {
            Region::EU => 1,
            Region::NA => -6,
        }
    }

    pub fn offset(self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_hours() * 3600).expect("region offset within a day")
    }

    /// the current in-game time given the real utc time
    pub fn ingame_time(self, now: DateTime<Utc>) -> DateTime<FixedOffset> {
        now.with_timezone(&self.offset())
    }

    pub fn now(self) -> DateTime<FixedOffset> {
        self.ingame_time(Utc::now())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::EU => write!(f, "EU"),
            Region::NA => write!(f, "NA"),
        }
    }
}

impl FromStr for Region {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "eu" => Ok(Region::EU),
            "na" => Ok(Region::NA),
            _ => Err(format!("Unknown region {s}").into()),
        }
    }
}

/// The gods tournament alternates weekly between two formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekKind {
    ClashOfGods,
    BattleOfGods,
}

impl WeekKind {
    /// even iso weeks are clash of gods weeks
    pub fn of(ingame: &DateTime<FixedOffset>) -> Self {
        if ingame.iso_week().week() % 2 == 0 {
            WeekKind::ClashOfGods
        } else {
            WeekKind::BattleOfGods
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WeekKind::ClashOfGods => "Cross-server Clash of Gods",
            WeekKind::BattleOfGods => "Battle of the Gods",
        }
    }
}

/// In-game stores users can ask to be DM'd about when they refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreEvent {
    Mystical,
    Emblem,
}

impl StoreEvent {
    pub const ALL: [StoreEvent; 2] = [StoreEvent::Emblem, StoreEvent::Mystical];

    pub fn key(self) -> &'static str {
        match self {
            StoreEvent::Mystical => "mystical",
            StoreEvent::Emblem => "emblem",
        }
    }
}

impl fmt::Display for StoreEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for StoreEvent {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StoreEvent::ALL
            .into_iter()
            .find(|e| e.key() == s.trim().to_lowercase())
            .ok_or("Don't know that event...".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn regions_parse_case_insensitively() {
        assert_eq!("eu".parse::<Region>().unwrap(), Region::EU);
        assert_eq!("NA".parse::<Region>().unwrap(), Region::NA);
        assert!("asia".parse::<Region>().is_err());
    }

    #[test]
    fn ingame_time_applies_offset() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 30, 0).unwrap();
        let eu = Region::EU.ingame_time(now);
        let na = Region::NA.ingame_time(now);
        assert_eq!(eu.format("%Y-%m-%d %H:%M").to_string(), "2024-01-01 01:30");
        assert_eq!(na.format("%Y-%m-%d %H:%M").to_string(), "2023-12-31 18:30");
    }

    #[test]
    fn week_kind_alternates() {
        // 2024-01-01 is a monday in iso week 1
        let week1 = Region::EU.ingame_time(Utc.with_ymd_and_hms(2024, 1, 3, 12, 0, 0).unwrap());
        let week2 = Region::EU.ingame_time(Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap());
        assert_eq!(WeekKind::of(&week1), WeekKind::BattleOfGods);
        assert_eq!(WeekKind::of(&week2), WeekKind::ClashOfGods);
    }

    #[test]
    fn store_events_parse() {
        assert_eq!("Emblem".parse::<StoreEvent>().unwrap(), StoreEvent::Emblem);
        assert_eq!("mystical".parse::<StoreEvent>().unwrap(), StoreEvent::Mystical);
        assert!("arena".parse::<StoreEvent>().is_err());
    }
}
