use std::future::{ready, Future};
use std::io;
use std::pin::Pin;
use std::time::Duration;

use anyhow::Result;
use tokio::{signal, time::sleep};

use crate::argsets::OutputMode;
use crate::output;

use super::read_records;

/// Poll and redraw until interrupted with Ctrl+C
pub fn watch(mode: OutputMode, interval: Duration) -> Result<()> {
    println!("Logitech Battery Monitor - Ctrl+C to stop");
    println!("Reading live data from G Hub database...");
    println!();

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    rt.block_on(poll_until_interrupted(mode, interval))?;

    println!();
    println!("Stopped.");
    Ok(())
}

async fn poll_until_interrupted(mode: OutputMode, interval: Duration) -> Result<()> {
    let interrupted = signal::ctrl_c();
    tokio::pin!(interrupted);

    // The handler is registered on first poll, so this must run before any read
    if let Some(res) = poll_once(interrupted.as_mut()).await {
        res?;
        return Ok(());
    }

    loop {
        let records = read_records();
        output::clear_screen()?;
        output::render(&records, mode)?;
        log::debug!("Next read in {}s", interval.as_secs());

        tokio::select! {
            _ = sleep(interval) => {}
            res = &mut interrupted => {
                res?;
                return Ok(());
            }
        }
    }
}

/// Poll `fut` exactly once, returning its output only if already complete
async fn poll_once<F>(fut: Pin<&mut F>) -> Option<io::Result<()>>
where
    F: Future<Output = io::Result<()>>,
{
    tokio::select! {
        biased;
        res = fut => Some(res),
        _ = ready(()) => None,
    }
}
