use anyhow::Result;
use clap::Parser;
use grid_navigation::config::{Config, MAX_LAYOUT_ATTEMPTS};
use grid_navigation::generator::ObstacleGenerator;
use grid_navigation::{render, Playback, Scenario};
use log::info;
use tracing_subscriber::fmt::writer::MakeWriterExt;

mod terminal;

fn main() -> Result<()> {
    let config = Config::parse();

    // Only warnings by default when animating, and nothing at all while the replay is on screen.
    let default_filter = if config.no_animation {
        "grid_navigation=info"
    } else {
        "grid_navigation=warn"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr.with_filter(|_| terminal::can_log()))
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    config.validate()?;

    let scenario = build_scenario(&config)?;
    info!(
        "Grid {}x{} with {} blocked cells, start {}, goal {}",
        config.rows,
        config.cols,
        scenario.grid.blocked_count(),
        scenario.start,
        scenario.goal
    );

    if config.no_animation {
        let mut playback = Playback::new(scenario.solve()?);
        while !playback.is_finished() {
            playback.tick();
        }
        print!("{}", render::frame(&scenario, &playback));
        println!("{}", render::status(&playback));
        return Ok(());
    }

    terminal::run(&scenario, config.tick())
}

fn build_scenario(config: &Config) -> Result<Scenario> {
    let mut generator = ObstacleGenerator::new(config.obstacles, config.seed);
    let scenario = if config.require_path {
        generator.generate_reachable(
            config.rows,
            config.cols,
            config.start(),
            config.goal(),
            MAX_LAYOUT_ATTEMPTS,
        )?
    } else {
        generator.generate(config.rows, config.cols, config.start(), config.goal())?
    };
    Ok(scenario)
}
