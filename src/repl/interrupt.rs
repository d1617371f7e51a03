//! Process-level interrupt handling. An interrupt delivered as a signal,
//! rather than read by the line editor as a key press, still ends the
//! calculator with the interrupt farewell and a successful exit status.

use super::session::INTERRUPTED;
use crate::errors::Result;
use log::info;
use signal_hook::consts::signal::SIGINT;
use signal_hook::iterator::Signals;
use std::io::Write;
use std::thread;

/// Installs a SIGINT handler that prints the interrupt farewell to standard
/// output and exits the process with status 0
pub fn exit_on_interrupt() -> Result<()> {
    let mut signals = Signals::new([SIGINT])?;

    thread::spawn(move || {
        if signals.forever().next().is_some() {
            info!("interrupt signal received");
            let mut out = std::io::stdout().lock();
            let _ = writeln!(out, "\n{}", INTERRUPTED);
            let _ = out.flush();
            std::process::exit(0);
        }
    });

    Ok(())
}
