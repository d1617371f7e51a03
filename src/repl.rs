//! The read-eval-print loop driving an interactive calculator session

mod history;
mod input;
#[cfg(unix)]
mod interrupt;
mod session;

pub use history::History;
pub use input::{Editor, Line, LineSource, Reader};
#[cfg(unix)]
pub use interrupt::exit_on_interrupt;
pub use session::{parse_request, Exit, Session, BANNER, DEFAULT_PROMPT, HELP, INTERRUPTED};
