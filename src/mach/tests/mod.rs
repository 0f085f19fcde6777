use crate::lang::ErrorCode;
use crate::mach::{Event, Runtime, State};


fn run(runtime: &mut Runtime, tokens: &[&str]) -> Vec<Event> {
    tokens.iter().map(|t| runtime.enter(t)).collect()
}

fn last_message(runtime: &mut Runtime, tokens: &[&str]) -> String {
    match run(runtime, tokens).last().and_then(|e| e.message()) {
        Some(s) => s,
        None => String::new(),
    }
}

fn error_code(event: &Event) -> Option<ErrorCode> {
    match event {
        Event::Error(e) => Some(e.code()),
        _ => None,
    }
}
