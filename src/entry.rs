use std::path::PathBuf;

use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tracing::debug;

use crate::args::SeederArgs;
use crate::error::AppResult;

pub(crate) fn run() -> AppResult<()> {
    let (mut args, matches) = parse_args()?;
    let config_path = apply_config(&mut args, &matches)?;

    crate::logger::init_logging(args.verbose, args.no_color);
    if let Some(path) = config_path {
        debug!("Using config file {}", path.display());
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(crate::app::run_seed(&args))?;
    Ok(())
}

fn parse_args() -> AppResult<(SeederArgs, ArgMatches)> {
    let matches = SeederArgs::command().get_matches();
    let args = SeederArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

fn apply_config(args: &mut SeederArgs, matches: &ArgMatches) -> AppResult<Option<PathBuf>> {
    let Some((path, config)) = crate::config::load_config(args.config.as_deref())? else {
        return Ok(None);
    };
    crate::config::apply_config(args, matches, &config)?;
    Ok(Some(path))
}
