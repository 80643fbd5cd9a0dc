//! MiXel Memory Game runner (default binary).
//!
//! Fixed-rate frame loop: poll input until the frame deadline, then run one
//! game frame and redraw. The terminal is restored on every exit path.

use std::time::Instant;

use anyhow::Result;

use mixel_memory::input::EventPump;
use mixel_memory::{logging, App, Config};

fn main() -> Result<()> {
    let config = Config::from_env();
    logging::init(&config)?;

    let mut app = App::init(config)?;
    let result = run(&mut app);

    // Always try to restore terminal state.
    let restored = app.teardown();
    if let Err(err) = &result {
        tracing::error!(error = %format!("{err:#}"), "game loop failed");
    }
    result.and(restored)
}

fn run(app: &mut App) -> Result<()> {
    let mut pump = EventPump::new();
    let frame = app.frame_duration();
    let mut deadline = Instant::now() + frame;

    // First frame before any input arrives.
    app.frame(&[])?;

    while !app.should_quit() {
        let events = pump.poll_until(deadline)?;
        app.frame(events)?;

        deadline += frame;
        let now = Instant::now();
        if deadline < now {
            // Fell behind; drop the missed frames instead of racing to catch up.
            deadline = now + frame;
        }
    }
    Ok(())
}
