// crates/xf2bf-cli/src/main.rs

use clap::Parser;

mod cmd;

#[derive(Parser)]
#[command(name = "xf2bf")]
#[command(about = "Convert text files of hex byte tokens (0xab, 12, ...) into raw binary <file>.out", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub convert: cmd::convert::ConvertArgs,

    /// Log per-file summaries and skipped tokens (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    cmd::convert::run(cli.convert)
}
