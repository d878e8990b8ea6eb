//! PickCourse Discord bot binary.
//!
//! Start the bot with:
//! ```bash
//! DISCORD_TOKEN=xxx cargo run -p pickcourse-discord
//! ```

use clap::Parser;
use pickcourse_core::{config, BotConfig};
use pickcourse_discord::DiscordBot;
use tracing_subscriber::EnvFilter;

/// PickCourse review bot - collect course reviews from Discord
#[derive(Parser, Debug)]
#[command(name = "pickcourse-bot")]
#[command(about = "Discord bot collecting course reviews for PickCourse")]
struct Args {
    /// Review API base URL (overrides PICKCOURSE_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Review API timeout in seconds (overrides PICKCOURSE_API_TIMEOUT_SECS)
    #[arg(long)]
    timeout_secs: Option<String>,

    /// Verbose logging (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load environment variables from config directory first
    let env_path = config::env_file();
    if env_path.exists() {
        let _ = dotenvy::from_path(&env_path);
    }
    let _ = dotenvy::from_filename(".env.local").or_else(|_| dotenvy::dotenv());

    let filter = match args.verbose {
        0 => "pickcourse_discord=info,pickcourse_core=info,serenity=warn",
        1 => "pickcourse_discord=debug,pickcourse_core=debug,serenity=info",
        2 => "pickcourse_discord=trace,pickcourse_core=trace,serenity=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut bot_config = BotConfig::from_env()?;
    if let Some(url) = args.api_url.as_deref() {
        bot_config = bot_config.with_api_url(url)?;
    }
    if let Some(secs) = args.timeout_secs.as_deref() {
        bot_config = bot_config.with_timeout(config::parse_timeout(secs)?);
    }

    let bot = match DiscordBot::new(bot_config) {
        Ok(bot) => bot,
        Err(e) => {
            tracing::error!(error = %e, "Failed to initialize bot");
            return Err(e.into());
        }
    };

    println!("\n[bot] PickCourse review bot");
    println!("   Command: /avis");
    println!("   Press Ctrl+C to stop\n");

    bot.start().await?;

    Ok(())
}
