use anyhow::Result;
use env_logger::Env;

use ghub_battery::argsets::ReportArgs;
use ghub_battery::command;
use ghub_battery::constants::{defaults, envvars};
use ghub_battery::helpers::load_dotenv;

fn main() -> Result<()> {
    let dotenv_loaded = load_dotenv();
    env_logger::Builder::from_env(Env::default().filter_or(envvars::LOG_LEVEL, defaults::LOG_LEVEL))
        .init();
    if dotenv_loaded {
        log::debug!("Loaded local .env");
    }

    let args = ReportArgs::from_args(pico_args::Arguments::from_env())?;
    if args.repeat {
        command::watch(args.mode, args.interval)
    } else {
        command::report(args.mode)
    }
}
