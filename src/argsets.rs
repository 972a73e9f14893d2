use std::time::Duration;

use anyhow::{anyhow, Result};

use crate::constants::defaults;

const FLAG_JSON: &str = "--json";
const FLAG_LOOP: &str = "--loop";
const OPT_INTERVAL: &str = "--interval";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Json,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ReportArgs {
    pub mode: OutputMode,
    pub repeat: bool,
    pub interval: Duration,
}

impl ReportArgs {
    pub fn from_args(mut args: pico_args::Arguments) -> Result<Self> {
        let mode = if args.contains(FLAG_JSON) {
            OutputMode::Json
        } else {
            OutputMode::Text
        };
        let repeat = args.contains(FLAG_LOOP);
        let interval = match args.opt_value_from_str::<_, u64>(OPT_INTERVAL)? {
            Some(0) => return Err(anyhow!("{OPT_INTERVAL} must be at least 1 second")),
            Some(secs) => Duration::from_secs(secs),
            None => defaults::POLL_INTERVAL,
        };

        let remaining = args.finish();
        if !remaining.is_empty() {
            return Err(anyhow!("Unexpected arguments: {:?}", remaining));
        }

        Ok(ReportArgs {
            mode,
            repeat,
            interval,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn parse(args: &[&str]) -> Result<ReportArgs> {
        ReportArgs::from_args(pico_args::Arguments::from_vec(
            args.iter().map(OsString::from).collect(),
        ))
    }

    #[test]
    fn defaults_without_flags() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.mode, OutputMode::Text);
        assert!(!args.repeat);
        assert_eq!(args.interval, Duration::from_secs(30));
    }

    #[test]
    fn all_flags() {
        let args = parse(&["--loop", "--interval", "5", "--json"]).unwrap();
        assert_eq!(
            args,
            ReportArgs {
                mode: OutputMode::Json,
                repeat: true,
                interval: Duration::from_secs(5),
            }
        );
    }

    #[test]
    fn invalid_interval_is_rejected() {
        assert!(parse(&["--interval", "0"]).is_err());
        assert!(parse(&["--interval", "soon"]).is_err());
        assert!(parse(&["--interval", "-3"]).is_err());
        assert!(parse(&["--interval"]).is_err());
    }

    #[test]
    fn unknown_argument_is_rejected() {
        assert!(parse(&["--verbose"]).is_err());
    }
}
