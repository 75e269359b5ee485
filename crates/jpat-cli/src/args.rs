use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "jpat")]
#[command(bin_name = "jpat")]
#[command(version, about, long_about = None)]
pub struct JpatCliArgs {
    #[command(subcommand)]
    pub cmd: JpatCliCommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum JpatCliCommand {
    /// Parse the input and print its syntax tree.
    Parse(ParseCommand),
    /// Parse the input and report syntax errors.
    Check(CheckCommand),
}

#[derive(Debug, Clone, Args)]
pub struct ParseCommand {
    #[command(flatten)]
    pub input: InputArgs,
    /// Print the tree and errors as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Debug, Clone, Args)]
pub struct InputArgs {
    /// The path of the file to parse.
    #[arg(required_unless_present = "expr", conflicts_with = "expr")]
    pub path: Option<String>,
    /// Parse the given text instead of a file.
    #[arg(short, long)]
    pub expr: Option<String>,
    /// What the input holds.
    #[arg(short, long, value_enum, default_value_t = InputKind::Pattern)]
    pub kind: InputKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputKind {
    Pattern,
    Expression,
    SwitchLabel,
}
