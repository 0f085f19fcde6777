mod common;
use common::*;
use pretty_assertions::assert_eq;
use rpn::mach::{Runtime, State};
use rpn::term::{BANNER, COMMANDS};
use std::sync::atomic::{AtomicBool, Ordering};

#[test]
fn test_banner_and_farewell() {
    let mut r = Runtime::default();
    let s = exec(&mut r, "");
    assert_eq!(s, format!("{}\n{}\n>> \nGoodbye!\n", BANNER, COMMANDS));
}

#[test]
fn test_add_transcript() {
    let mut r = Runtime::default();
    let s = exec_depth(&mut r, "3\n4\n+\nquit\n", 2);
    assert_eq!(
        body(&s),
        ">> Pushed 3\n\
         Stack (bottom -> top):\n  -: \n  1: 3\n\
         >> Pushed 4\n\
         Stack (bottom -> top):\n  1: 3\n  2: 4\n\
         >> Result: 7\n\
         Stack (bottom -> top):\n  -: \n  1: 7\n\
         >> Goodbye!\n"
    );
    assert_eq!(r.stack(), &[7.0]);
    assert_eq!(r.state(), State::Terminating);
}

#[test]
fn test_error_keeps_stack() {
    let mut r = Runtime::default();
    let s = exec_depth(&mut r, "5\n0\n/\n", 2);
    assert!(s.contains(">> Error: division by zero\nStack (bottom -> top):\n  1: 5\n  2: 0\n"));
    assert_eq!(r.stack(), &[5.0, 0.0]);
    assert_eq!(r.state(), State::Running);
}

#[test]
fn test_blank_line_redisplays() {
    let mut r = Runtime::default();
    let s = exec_depth(&mut r, "\n", 1);
    assert_eq!(body(&s), ">> Stack (bottom -> top):\n  -: \n>> \nGoodbye!\n");
}

#[test]
fn test_tokens_after_quit_are_ignored() {
    let mut r = Runtime::default();
    let s = exec(&mut r, "1\nq\n2\n3\n");
    assert!(s.ends_with(">> Goodbye!\n"));
    assert!(!s.contains("Pushed 2"));
    assert_eq!(r.stack(), &[1.0]);
}

#[test]
fn test_superset_commands() {
    let mut r = Runtime::default();
    let s = exec(&mut r, "9\nsqrt\npi\nFOO\n");
    assert!(s.contains("Result: 3\n"));
    assert!(s.contains("Pushed pi (3.141592654)\n"));
    assert!(s.contains("Error: unknown token 'FOO'\n"));
    assert!(s.contains("  1: 3\n  2: 3.141592654\n"));
    assert_eq!(r.stack(), &[3.0, std::f64::consts::PI]);
}

#[test]
fn test_windows_line_endings() {
    let mut r = Runtime::default();
    exec(&mut r, "2\r\n3\r\n*\r\n");
    assert_eq!(r.stack(), &[6.0]);
}

#[test]
fn test_deep_stack_window() {
    let mut r = Runtime::default();
    let input: String = (1..=7).map(|n| format!("{}\n", n)).collect();
    let s = exec(&mut r, &input);
    let last = s.rsplit(">> Pushed 7\n").next().unwrap();
    assert_eq!(
        last,
        "Stack (bottom -> top):\n  3: 3\n  4: 4\n  5: 5\n  6: 6\n  7: 7\n>> \nGoodbye!\n"
    );
}

#[test]
fn test_interrupt_keeps_next_token() {
    let mut r = Runtime::default();
    let interrupted = AtomicBool::new(true);
    let s = exec_with(&mut r, "2\n", 1, &interrupted);
    assert_eq!(
        body(&s),
        ">> \nInterrupted. Use 'quit' to exit.\n\
         Pushed 2\n\
         Stack (bottom -> top):\n  1: 2\n\
         >> \nGoodbye!\n"
    );
    assert_eq!(r.stack(), &[2.0]);
    assert!(!interrupted.load(Ordering::SeqCst));
}

#[test]
fn test_underflow_transcript() {
    let mut r = Runtime::default();
    let s = exec_depth(&mut r, "sin\n1\n+\n", 1);
    assert!(s.contains(">> Error: stack is empty\n"));
    assert!(s.contains(">> Error: need at least two values for '+'\n"));
    assert_eq!(r.stack(), &[1.0]);
}
