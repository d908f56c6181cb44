use chrono::{DateTime, Datelike, FixedOffset, Weekday};

use crate::{Region, WeekKind};

pub const EVENTS_USAGE: &str = "Usage: !event(s) <Region=[Default:EU, NA]>";

/// Whether to describe only today or the whole week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Today,
    Week,
}

/// parses the optional region argument of !event / !events
pub fn parse_events_args(args: &str) -> Result<Region, String> {
    let parts: Vec<&str> = args.split_whitespace().collect();
    match parts.as_slice() {
        [] => Ok(Region::EU),
        [region] => region
            .parse()
            .map_err(|_| "Could not understand that..".to_owned()),
        _ => Err(EVENTS_USAGE.to_owned()),
    }
}

/// the gods tournament stage running on the given day, if any
fn tournament_stage(day: Weekday, week: WeekKind) -> Option<String> {
    let battle = week.title();
    let stage = match (day, week) {
        (Weekday::Tue, WeekKind::ClashOfGods) => format!("Qualifications Day 1 in {battle}"),
        (Weekday::Tue, WeekKind::BattleOfGods) => format!("Group game in {battle}"),
        (Weekday::Wed, WeekKind::ClashOfGods) => format!("Qualifications Day 2 in {battle}"),
        (Weekday::Wed, WeekKind::BattleOfGods) => format!("Quarter finals in {battle}"),
        (Weekday::Thu, WeekKind::ClashOfGods) => format!("Final in {battle}"),
        (Weekday::Thu, WeekKind::BattleOfGods) => format!("Final {battle}"),
        _ => return None,
    };
    Some(stage)
}

/// Builds the calendar shown by !event and !events.
pub fn events_message(ingame: DateTime<FixedOffset>, scope: Scope) -> String {
    let week = WeekKind::of(&ingame);
    let day = ingame.weekday();

    let mut lines: Vec<String> = vec![];
    match scope {
        Scope::Today => {
            if let Some(stage) = tournament_stage(day, week) {
                lines.push(stage);
            }
            if matches!(day, Weekday::Mon | Weekday::Thu) {
                lines.push("Dragon invasion".to_owned());
                lines.push("0900: \"Endless\" inferno opens".to_owned());
            }
            if day == Weekday::Wed {
                lines.push("0900 - 2100: Sphinx is asking questions".to_owned());
            }
            if matches!(day, Weekday::Wed | Weekday::Thu | Weekday::Fri) {
                lines.push("0900 - 2200: Kingdom vs Kingdom!".to_owned());
            }
            if matches!(day, Weekday::Sat | Weekday::Sun) {
                lines.push("Dragon Utopia is open :gem:".to_owned());
            }
        }
        Scope::Week => {
            lines.push(format!("{}!", week.title()));
            lines.push("Monday and Thursday - Dragon invasion".to_owned());
            lines.push("Monday and Thursday 0900 - \"Endless\" inferno opens".to_owned());
            lines.push("Wednesday 0900 - 2100: Sphinx is asking questions".to_owned());
            lines.push("Wednesday 0900 - Kingdom vs Kingdom starts!".to_owned());
            lines.push("Friday 2200    - Kingdom vs Kingdom ends".to_owned());
            lines.push("Saturday and Sunday - Dragon Utopia is open :gem:".to_owned());
        }
    }

    let header = match scope {
        Scope::Today => "Todays events:",
        Scope::Week => "This weeks events:",
    };
    let mut response = format!("{header}```\n");
    for line in lines {
        response.push_str(&line);
        response.push('\n');
    }
    response.push_str("```");
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn eu_at(y: i32, m: u32, d: u32) -> DateTime<FixedOffset> {
        Region::EU.ingame_time(Utc.with_ymd_and_hms(y, m, d, 10, 0, 0).unwrap())
    }

    #[test]
    fn args_default_to_eu() {
        assert_eq!(parse_events_args(""), Ok(Region::EU));
        assert_eq!(parse_events_args("na"), Ok(Region::NA));
        assert_eq!(
            parse_events_args("mars"),
            Err("Could not understand that..".to_owned())
        );
        assert_eq!(parse_events_args("eu na"), Err(EVENTS_USAGE.to_owned()));
    }

    #[test]
    fn wednesday_of_a_battle_week() {
        // week 1 of 2024, battle of the gods
        let msg = events_message(eu_at(2024, 1, 3), Scope::Today);
        assert!(msg.starts_with("Todays events:```\n"));
        assert!(msg.contains("Quarter finals in Battle of the Gods"));
        assert!(msg.contains("Sphinx is asking questions"));
        assert!(msg.contains("Kingdom vs Kingdom!"));
        assert!(!msg.contains("Dragon invasion"));
        assert!(msg.ends_with("```"));
    }

    #[test]
    fn tuesday_of_a_clash_week() {
        let msg = events_message(eu_at(2024, 1, 9), Scope::Today);
        assert!(msg.contains("Qualifications Day 1 in Cross-server Clash of Gods"));
    }

    #[test]
    fn weekend_has_utopia() {
        let msg = events_message(eu_at(2024, 1, 6), Scope::Today);
        assert_eq!(msg, "Todays events:```\nDragon Utopia is open :gem:\n```");
    }

    #[test]
    fn thursday_of_a_battle_week() {
        let msg = events_message(eu_at(2024, 1, 4), Scope::Today);
        assert_eq!(
            msg,
            "Todays events:```\n\
             Final Battle of the Gods\n\
             Dragon invasion\n\
             0900: \"Endless\" inferno opens\n\
             0900 - 2200: Kingdom vs Kingdom!\n\
             ```"
        );
    }

    #[test]
    fn thursday_of_a_clash_week() {
        let msg = events_message(eu_at(2024, 1, 11), Scope::Today);
        assert_eq!(
            msg,
            "Todays events:```\n\
             Final in Cross-server Clash of Gods\n\
             Dragon invasion\n\
             0900: \"Endless\" inferno opens\n\
             0900 - 2200: Kingdom vs Kingdom!\n\
             ```"
        );
    }

    #[test]
    fn monday_and_friday() {
        assert_eq!(
            events_message(eu_at(2024, 1, 8), Scope::Today),
            "Todays events:```\nDragon invasion\n0900: \"Endless\" inferno opens\n```"
        );
        assert_eq!(
            events_message(eu_at(2024, 1, 5), Scope::Today),
            "Todays events:```\n0900 - 2200: Kingdom vs Kingdom!\n```"
        );
    }

    #[test]
    fn weekly_overview_names_the_tournament() {
        let msg = events_message(eu_at(2024, 1, 9), Scope::Week);
        assert!(msg.starts_with("This weeks events:```\nCross-server Clash of Gods!\n"));
        assert!(msg.contains("Friday 2200    - Kingdom vs Kingdom ends"));
    }
}
