use super::{Context, PoiseData};
use common::Error;

mod events;
pub use events::*;

mod glossary;
pub use glossary::*;

mod help;
pub use help::*;

mod search;
pub use search::*;

mod remindme;
pub use remindme::*;

mod role;
pub use role::*;

pub static ALL: &[fn() -> poise::Command<PoiseData, Error>] = &[
    help,
    event,
    kvkcalc,
    whatis,
    addis,
    remis,
    lookup,
    urban,
    inspireme,
    remindme,
    role,
];

/// first whitespace separated word of a command's arguments
fn first_arg(args: &Option<String>) -> Option<&str> {
    args.as_deref().and_then(|a| a.split_whitespace().next())
}

async fn reply(ctx: Context<'_>, response: impl Into<String>) -> Result<(), Error> {
    ctx.say(common::discord::fit(&response.into())).await?;
    Ok(())
}
