use crate::mach::{Event, Number};
use ansi_term::Style;
use std::fmt::Write;

/// Stack rows, bottom to top. Short stacks are padded with `-` rows
/// above the values so the window always has `depth` rows. Labels count
/// from the bottom of the whole stack.
pub fn render_stack(stack: &[f64], depth: usize) -> String {
    let mut s = String::from("Stack (bottom -> top):\n");
    let shown = &stack[stack.len().saturating_sub(depth)..];
    for _ in shown.len()..depth {
        s.push_str("  -: \n");
    }
    let start = stack.len() - shown.len() + 1;
    for (offset, value) in shown.iter().enumerate() {
        // Writing to a String cannot fail.
        let _ = writeln!(s, " {:>2}: {}", start + offset, Number(*value));
    }
    s
}

/// How each outcome is put on screen.
#[derive(Debug, Clone, Copy)]
pub struct Screen {
    depth: usize,
    styled: bool,
}

impl Screen {
    pub fn new(depth: usize, styled: bool) -> Screen {
        Screen { depth, styled }
    }

    /// Message line, if any, then the stack window.
    pub fn render(&self, event: &Event, stack: &[f64]) -> String {
        let mut s = String::new();
        if let Some(message) = event.message() {
            match event {
                Event::Error(_) if self.styled => {
                    s.push_str(&Style::new().bold().paint(message).to_string())
                }
                _ => s.push_str(&message),
            }
            s.push('\n');
        }
        s.push_str(&render_stack(stack, self.depth));
        s
    }
}
