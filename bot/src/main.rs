use dotenv::dotenv;

use common::Error;

mod discord;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv().ok();

    let mut log_config = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                chrono::Local::now().format("%m/%d %I:%M:%S %p"),
                record.level(),
                message
            ))
        })
        .level(log::LevelFilter::Off);

    for module in [
        "bot",
        "calendar",
        "chatter",
        "common",
        "lookup",
        "store",
        "translate",
    ] {
        log_config = log_config.level_for(module, log::LevelFilter::Debug);
    }
    log_config.chain(std::io::stdout()).apply()?;

    log::info!("Starting the stacked bot...");
    discord::start_bot().await
}
