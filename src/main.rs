use clap::Parser;
use rpn::term::{self, Options};

fn main() {
    env_logger::builder().format_timestamp(None).init();
    term::main(Options::parse());
}
