//! Terminal pathfinding visualiser.
//!
//! Run: cargo run --bin pathviz -- --help

use std::io;
use std::time::{Duration, Instant};

use clap::Parser;
use pathviz_crossterm::{Terminal, read_input};
use pathviz_demos::{Args, Config, Flow, Visualizer, headless, logging};

/// Input poll interval while no run is active.
const IDLE_POLL: Duration = Duration::from_millis(250);

fn interactive(config: &Config, mouse: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut vis = Visualizer::new(config, io::stdout())?;
    let _term = Terminal::enter(mouse)?;
    vis.redraw()?;
    let size = vis.session().grid().size();
    let layout = *vis.renderer().layout();
    loop {
        let timeout = vis.poll(Instant::now())?.unwrap_or(IDLE_POLL);
        if let Some(input) = read_input(timeout, &layout, size)? {
            if vis.handle(input)? == Flow::Quit {
                return Ok(());
            }
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = Config::resolve(&args)?;
    let logger = logging::init(&config)?;
    log::debug!("config: {config:?}");

    if let Some(path) = &args.save_config {
        config.save(path)?;
        log::info!("configuration written to {}", path.display());
        println!("configuration written to {}", path.display());
        logger.flush();
        return Ok(());
    }

    let result = if args.headless {
        headless::run(&config, &mut io::stdout().lock()).map(|_| ())
    } else {
        interactive(&config, !args.no_mouse)
    };
    if let Err(e) = &result {
        log::error!("{e}");
    }
    logger.flush();
    result
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
