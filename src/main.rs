use anyhow::Result;
use clap::{Parser, ValueEnum};
use tilesnake::game::GameConfig;
use tilesnake::modes::PlayMode;

#[derive(Parser)]
#[command(name = "tilesnake")]
#[command(version, about = "Tick-driven grid snake game in the terminal")]
struct Cli {
    /// Execution mode
    #[arg(long, default_value = "play")]
    mode: Mode,

    /// Playfield width in tiles
    #[arg(long, default_value = "20")]
    width: i32,

    /// Playfield height in tiles
    #[arg(long, default_value = "20")]
    height: i32,

    /// Milliseconds between simulation ticks
    #[arg(long, default_value = "132")]
    tick_ms: u64,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play snake with keyboard controls
    Play,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = GameConfig::new(cli.width, cli.height);
    config.tick_ms = cli.tick_ms;

    match cli.mode {
        Mode::Play => {
            let mut play_mode = PlayMode::new(config);
            play_mode.run().await?;
        }
    }

    Ok(())
}
