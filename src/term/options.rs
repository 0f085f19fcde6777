use clap::Parser;

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "rpn", version, about = "Interactive Reverse Polish Notation calculator")]
pub struct Options {
    /// Number of stack rows shown after every command.
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u16).range(1..))]
    pub depth: u16,

    /// Read standard input one line at a time even when it is a terminal.
    #[arg(long)]
    pub batch: bool,

    /// Do not style errors with ANSI escapes.
    #[arg(long)]
    pub plain: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            depth: 5,
            batch: false,
            plain: false,
        }
    }
}
