//! Kingdom vs Kingdom end-of-day score projection.

use chrono::{DateTime, FixedOffset, Timelike};

use crate::Region;

pub const KVK_USAGE: &str = "Usage: !kvkcalc <OurCurrent> <TheirCurrent> <OurGain1> \
<TheirGain1> <OurGain2> <TheirGain2> <OurGain3> <TheirGain3> <Region=[Default:EU, NA]>";

/// in-game hour the daily kvk round closes
const KVK_END_HOUR: f64 = 22.0;

/// One kingdom's score and its hourly gains from the three arenas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Side {
    pub current: i64,
    pub gains: [i64; 3],
}

impl Side {
    fn projected(&self, hours: f64) -> f64 {
        self.current as f64 + self.gains.iter().map(|g| *g as f64 * hours).sum::<f64>()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KvkInput {
    pub ours: Side,
    pub theirs: Side,
    pub region: Region,
}

impl KvkInput {
    /// parses `<ours> <theirs> (<our gain> <their gain>){3} [region]`
    pub fn parse(args: &str) -> Result<Self, String> {
        let parts: Vec<&str> = args.split_whitespace().collect();
        if parts.len() < 8 || parts.len() > 9 {
            return Err(KVK_USAGE.to_owned());
        }
        let bad_input = || "Could not understand that..".to_owned();

        let numbers = parts[..8]
            .iter()
            .map(|p| p.parse::<i64>())
            .collect::<Result<Vec<i64>, _>>()
            .map_err(|_| bad_input())?;
        let region = match parts.get(8) {
            Some(r) => r.parse::<Region>().map_err(|_| bad_input())?,
            None => Region::EU,
        };

        Ok(Self {
            ours: Side {
                current: numbers[0],
                gains: [numbers[2], numbers[4], numbers[6]],
            },
            theirs: Side {
                current: numbers[1],
                gains: [numbers[3], numbers[5], numbers[7]],
            },
            region,
        })
    }
}

/// hours left in today's kvk round, zero once it has closed
pub fn remaining_hours(ingame: &DateTime<FixedOffset>) -> f64 {
    let elapsed = ingame.hour() as f64 + ingame.minute() as f64 / 60.0;
    (KVK_END_HOUR - elapsed).max(0.0)
}

/// Both kingdoms' expected scores when the round closes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub ours: f64,
    pub theirs: f64,
}

impl Projection {
    pub fn new(input: &KvkInput, ingame: &DateTime<FixedOffset>) -> Self {
        let hours = remaining_hours(ingame);
        Self {
            ours: input.ours.projected(hours),
            theirs: input.theirs.projected(hours),
        }
    }

    pub fn describe(&self) -> String {
        // scores are whole points, and may exceed i64 once projected
        let ours = whole(self.ours);
        let theirs = whole(self.theirs);
        let standing = if ours > theirs {
            format!("we're leading by {:.0}", ours - theirs)
        } else if ours < theirs {
            format!("we're losing by {:.0}", theirs - ours)
        } else {
            "it's a tie".to_owned()
        };
        format!("At the end of the day we'll be at {ours:.0} and they at {theirs:.0}, {standing}")
    }
}

/// drops the fraction, without leaving a negative zero behind
fn whole(score: f64) -> f64 {
    score.trunc() + 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn parses_eight_numbers_and_region() {
        let input = KvkInput::parse("100 200 1 2 3 4 5 6 na").unwrap();
        assert_eq!(input.ours, Side { current: 100, gains: [1, 3, 5] });
        assert_eq!(input.theirs, Side { current: 200, gains: [2, 4, 6] });
        assert_eq!(input.region, Region::NA);

        assert_eq!(KvkInput::parse("1 2 3 4 5 6 7 8").unwrap().region, Region::EU);
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(KvkInput::parse("1 2 3"), Err(KVK_USAGE.to_owned()));
        assert_eq!(
            KvkInput::parse("1 2 3 4 5 6 7 x"),
            Err("Could not understand that..".to_owned())
        );
        assert_eq!(
            KvkInput::parse("1 2 3 4 5 6 7 8 mars"),
            Err("Could not understand that..".to_owned())
        );
    }

    #[test]
    fn projects_until_round_close() {
        // 19:30 utc is 20:30 in eu, 1.5 hours remain
        let ingame = Region::EU.ingame_time(Utc.with_ymd_and_hms(2024, 1, 3, 19, 30, 0).unwrap());
        assert_eq!(remaining_hours(&ingame), 1.5);

        let input = KvkInput::parse("1000 900 10 20 10 20 10 20").unwrap();
        let projection = Projection::new(&input, &ingame);
        assert_eq!(projection.ours, 1045.0);
        assert_eq!(projection.theirs, 990.0);
        assert_eq!(
            projection.describe(),
            "At the end of the day we'll be at 1045 and they at 990, we're leading by 55"
        );
    }

    #[test]
    fn equal_totals_are_a_tie() {
        let ingame = Region::EU.ingame_time(Utc.with_ymd_and_hms(2024, 1, 3, 19, 30, 0).unwrap());
        let input = KvkInput::parse("100 130 0 0 0 0 0 -20").unwrap();
        assert_eq!(
            Projection::new(&input, &ingame).describe(),
            "At the end of the day we'll be at 100 and they at 100, it's a tie"
        );
    }

    #[test]
    fn huge_gains_do_not_overflow() {
        // 10:00 utc is 11:00 in eu, 11 hours remain
        let ingame = Region::EU.ingame_time(Utc.with_ymd_and_hms(2024, 1, 3, 10, 0, 0).unwrap());
        let input = KvkInput::parse("0 -5 1000000000000000000 0 0 0 0 0").unwrap();
        assert_eq!(
            Projection::new(&input, &ingame).describe(),
            "At the end of the day we'll be at 11000000000000000000 and they at -5, \
             we're leading by 11000000000000000000"
        );

        let input = KvkInput::parse(&format!("{} {} 0 0 0 0 0 0", i64::MIN, i64::MAX)).unwrap();
        let description = Projection::new(&input, &ingame).describe();
        assert!(description.ends_with("we're losing by 18446744073709551616"), "{description}");
    }

    #[test]
    fn closed_round_keeps_current_scores() {
        let ingame = Region::EU.ingame_time(Utc.with_ymd_and_hms(2024, 1, 3, 22, 0, 0).unwrap());
        assert_eq!(remaining_hours(&ingame), 0.0);
        let input = KvkInput::parse("10 20 5 5 5 5 5 5").unwrap();
        assert_eq!(
            Projection::new(&input, &ingame).describe(),
            "At the end of the day we'll be at 10 and they at 20, we're losing by 10"
        );
    }
}
