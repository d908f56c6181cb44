use poise::serenity_prelude::{self as serenity, Mentionable};

use crate::util::truncate;

/// max characters discord accepts in a single message
pub const DISCORD_CHAR_LIMIT: usize = 2000;

/// cuts a message down so discord will accept it
pub fn fit(s: &str) -> String {
    truncate(s, DISCORD_CHAR_LIMIT).to_owned()
}

/// prefixes a reply with a ping to the user it answers
pub fn addressed(user: serenity::UserId, reply: &str) -> String {
    fit(&format!("{} {}", user.mention(), reply))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_caps_length() {
        let long = "a".repeat(DISCORD_CHAR_LIMIT + 50);
        assert_eq!(fit(&long).chars().count(), DISCORD_CHAR_LIMIT);
        assert_eq!(fit("short"), "short");
    }

    #[test]
    fn addressed_mentions_user() {
        let reply = addressed(serenity::UserId::new(42), "hello");
        assert_eq!(reply, "<@42> hello");
    }
}
