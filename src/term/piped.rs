use super::{Screen, BANNER, COMMANDS, FAREWELL, INTERRUPTED, PROMPT};
use crate::mach::Runtime;
use log::info;
use std::io::{BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};

/// Line mode session: every input line is one token.
///
/// Ctrl-C only prints a notice; the line read after it is still entered.
pub fn main_loop<R: BufRead, W: Write>(
    runtime: &mut Runtime,
    input: R,
    out: &mut W,
    screen: Screen,
    interrupted: &AtomicBool,
) -> std::io::Result<()> {
    info!("reading tokens line by line");
    writeln!(out, "{}\n{}", BANNER, COMMANDS)?;
    let mut lines = input.lines();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => {
                writeln!(out)?;
                break;
            }
        };
        if interrupted.swap(false, Ordering::SeqCst) {
            writeln!(out, "\n{}", INTERRUPTED)?;
        }
        let event = runtime.enter(&line);
        if event.is_quit() {
            break;
        }
        write!(out, "{}", screen.render(&event, runtime.stack()))?;
    }
    writeln!(out, "{}", FAREWELL)
}
