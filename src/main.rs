use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};

use revealdeck::{
    domain::classify::plan,
    infrastructure::{cli::Cli, config::Config, deck_loader::load_deck},
    integration::app_runner::AppRunner,
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    let deck = load_deck(args.deck.as_deref())?;

    if args.plan {
        let json =
            serde_json::to_string_pretty(&plan(&deck)).wrap_err("failed to serialize plan")?;
        println!("{json}");
        return Ok(());
    }

    let config = Config::new().wrap_err("failed to load configuration")?;

    let mut runner = AppRunner::new_with_real(deck, config, args.tick_rate, args.frame_rate)?;
    runner.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
