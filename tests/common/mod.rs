use rpn::mach::Runtime;
use rpn::term::{piped_loop, Screen};
use std::sync::atomic::AtomicBool;

/// Run a piped session over `input` and return everything it printed.
pub fn exec(runtime: &mut Runtime, input: &str) -> String {
    exec_depth(runtime, input, 5)
}

pub fn exec_depth(runtime: &mut Runtime, input: &str, depth: usize) -> String {
    exec_with(runtime, input, depth, &AtomicBool::new(false))
}

pub fn exec_with(
    runtime: &mut Runtime,
    input: &str,
    depth: usize,
    interrupted: &AtomicBool,
) -> String {
    let mut out = Vec::new();
    piped_loop(
        runtime,
        input.as_bytes(),
        &mut out,
        Screen::new(depth, false),
        interrupted,
    )
    .unwrap();
    String::from_utf8(out).unwrap()
}

/// Strip the banner so tests only compare what the tokens produced.
pub fn body(transcript: &str) -> &str {
    match transcript.find(">> ") {
        Some(index) => &transcript[index..],
        None => transcript,
    }
}
