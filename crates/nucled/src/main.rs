//! NucLed CLI — control the Intel NUC power and ring LEDs.

use clap::Parser;

mod cli;

#[derive(Parser)]
#[command(
    name = "nucled",
    version,
    about = "Control the Intel NUC power and ring LEDs"
)]
struct Args {
    /// Output as JSON (for status)
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: cli::Command,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let args = Args::parse();

    if let Err(e) = cli::run(args.command, args.json) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
