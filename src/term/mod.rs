/*!
## Terminal Module

Reads tokens from the user, hands them to the [`Runtime`] and shows
the outcome. A terminal gets the line editor; anything else is read
one line at a time.

[`Runtime`]: crate::mach::Runtime
*/

extern crate ctrlc;
use crate::mach::Runtime;
use log::{info, warn};
use std::io::IsTerminal;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

mod display;
mod linefeed;
mod options;
mod piped;

pub use display::{render_stack, Screen};
pub use options::Options;
pub use piped::main_loop as piped_loop;

pub const PROMPT: &str = ">> ";
pub const BANNER: &str =
    "RPN calculator ready. Numbers require Enter; operators (+, -, *, /) execute immediately.";
pub const COMMANDS: &str = "Commands: sin, cos, tan, inv, sqrt, log, ln, pow, sq, neg, \
                            pi, e, swap, drop, dup, clear, help, quit.";
pub const INTERRUPTED: &str = "Interrupted. Use 'quit' to exit.";
pub const FAREWELL: &str = "Goodbye!";

pub fn main(options: Options) {
    let mut runtime = Runtime::default();
    let depth = usize::from(options.depth);
    let interactive =
        !options.batch && std::io::stdin().is_terminal() && std::io::stdout().is_terminal();
    info!("session started (interactive: {})", interactive);

    let result = if interactive {
        linefeed::main_loop(&mut runtime, Screen::new(depth, !options.plain))
    } else {
        let interrupted = Arc::new(AtomicBool::new(false));
        let int_moved = interrupted.clone();
        if let Err(error) = ctrlc::set_handler(move || {
            int_moved.store(true, Ordering::SeqCst);
        }) {
            warn!("Ctrl-C handler not installed: {}", error);
        }
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        piped_loop(
            &mut runtime,
            stdin.lock(),
            &mut stdout.lock(),
            Screen::new(depth, false),
            &interrupted,
        )
    };
    if let Err(error) = result {
        eprintln!("{}", error);
    }
    info!("session ended with {} values on the stack", runtime.engine().len());
}
