//! Example showing a labelled progress bar redrawn in place

use color_eyre::Result;
use std::{thread, time::Duration};
use tracing_subscriber::EnvFilter;
use ttybar::{Console, ConsoleSession};

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let console = Console::global();
    println!("Terminal is {} columns wide", console.columns());

    let tasks = [
        "Resolving deltas",
        "Checking out files",
        "Writing an unusually long label that will not fit on a narrow terminal",
    ];
    let mut session = ConsoleSession::new();
    console.acquire(&mut session);
    for task in tasks {
        for pct in 0..=100 {
            // Resize the window while this runs to see the bar follow.
            console.render_text_percent(Some(task), pct);
            thread::sleep(Duration::from_millis(15));
        }
    }
    console.release(&mut session);

    println!("Done.");
    Ok(())
}
