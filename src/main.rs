// What you SEE:
// • Left: the mirrored camera with a color toolbar across the top.
// • Right: the drawing canvas.
// • Point with only your index finger to draw; open your hand to stop and
//   hover a swatch to pick its color. C clears, S saves a PNG, ESC quits.

use air_canvas::Error;
use air_canvas::app;
use air_canvas::cli::{Cli, Commands, source_kind};
use air_canvas::config::AppConfig;
use env_logger::Env;
use log::info;

fn main() -> Result<(), Error> {
    let cli = Cli::parse_args();

    // --verbose raises the default level; RUST_LOG still wins.
    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    let mut cfg = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    match cli.command {
        Commands::Run { source, landmarks, replay_fps, no_camera } => {
            if no_camera {
                cfg.camera.enabled = false;
            }
            let kind = source_kind(source, landmarks, replay_fps)?;
            info!("Starting air canvas ({}x{}, source {:?})", cfg.canvas.width, cfg.canvas.height, kind);
            app::run(&cfg, kind)
        }
        Commands::Replay { input, output } => {
            app::replay(&cfg, &input, &output)?;
            Ok(())
        }
    }
}
