use std::io::Write;

use clap::Parser;

use hero_slider::cli::{Cli, Command};
use hero_slider::logging::{init_tracing, LogTarget};
use hero_slider::shutdown::{spawn_signal_listener, ShutdownHandle};
use hero_slider::timeline::Timeline;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_target = match cli.command {
        Some(Command::Timeline { .. }) => LogTarget::Stderr,
        None => LogTarget::File,
    };
    init_tracing(log_target);

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };
    if let Some(warning) = config.timing_warning() {
        tracing::warn!("{warning}");
    }

    match cli.command {
        Some(Command::Timeline { duration_ms }) => {
            let timeline = Timeline::simulate(
                config.content.items.clone(),
                config.slider.slider_config(),
                config.slider.reduced_motion,
                duration_ms,
            );
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(timeline.to_json_lines()?.as_bytes())?;
            stdout.flush()?;
        }
        None => {
            let shutdown = ShutdownHandle::new();
            spawn_signal_listener(shutdown.clone());
            hero_slider::ui::runtime::run(config, shutdown).await?;
        }
    }

    Ok(())
}
