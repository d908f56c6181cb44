use super::reply;
use crate::discord::Context;
use common::Error;

const COMMANDS: &[&str] = &[
    "!event <Region=[Default:EU, NA]> - Todays events",
    "!events <Region=[Default:EU, NA]> - This weeks events",
    "!whatis <keyword> - Explains what keyword is",
    "!addis <keyword> <explanation> - Teach me what keyword means",
    "!remis <keyword> - Deletes my knowledge of keyword",
    "!kvkcalc <OurCurrent> <TheirCurrent> <OurGain1> <TheirGain1> <OurGain2> <TheirGain2> \
<OurGain3> <TheirGain3> <Region=[Default:EU, NA]> - See if we win KvK",
    "React to a message with your flag, and I'll translate that for you",
    "!lookup <stuff> - I'll lookup stuff on Wikipedia",
    "!urban <stuff> - I'll lookup stuff on Urban Dictionary",
    "!inspireme - I'll generate an inspirational quote",
    "!remindme <event> - I'll notify you about event in pm",
    "!role <EU/NA> - I'll notify you about events for that region in pm",
    "Mention me and I'll respond something stupid :partying_face:",
];

pub fn help_text() -> String {
    format!(
        "Version {}\n{}",
        env!("CARGO_PKG_VERSION"),
        COMMANDS.join("\n")
    )
}

/// HALP!
#[poise::command(prefix_command)]
pub async fn help(ctx: Context<'_>) -> Result<(), Error> {
    reply(ctx, help_text()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_lists_every_command() {
        let text = help_text();
        for command in crate::discord::commands::ALL {
            let command = command();
            assert!(
                text.contains(&format!("!{}", command.name)) || command.name == "help",
                "{} missing from help",
                command.name
            );
        }
    }
}
