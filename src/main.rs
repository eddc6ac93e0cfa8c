#![warn(non_snake_case)]
//! # roi-markup
//!
//! Replays a recorded region-editing session without a display: the session
//! file gives the container size, an optional region to re-edit and the pointer
//! events, and the resulting region is printed as JSON for the trigger
//! evaluator.
//!
//! ```text
//! roi-markup <session.json> [settings.json]
//! ```
//!
//! Set `RUST_LOG=debug` to follow the editor's state transitions.

use log::info;
use roi_markup::session::Session;
use roi_markup::EditorSettings;
use std::error::Error;
use std::process;

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging.
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(session_path) = args.next() else {
        eprintln!("usage: roi-markup <session.json> [settings.json]");
        process::exit(2);
    };
    let settings = match args.next() {
        Some(path) => EditorSettings::load(path)?,
        None => EditorSettings::default(),
    };

    info!("loading session {}", session_path);
    let session = Session::load(&session_path)?;
    let region = session.replay(settings)?;
    println!("{}", region.to_json()?);

    info!("region `{}` written with {} points", region.name, region.points.len());
    Ok(())
}
