use super::{cli_manager::logging_level_cli_arg, command::Command, common};
use anyhow::{anyhow, Result};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use crusticheck::{
    checkers::{self, CheckSettings},
    io::Dialect,
};
use std::path::PathBuf;

const CMD_NAME: &str = "check";

const ARG_CHECKER: &str = "CHECKER";
const ARG_SOLVER: &str = "SOLVER";
const ARG_DIALECT: &str = "DIALECT";

pub(crate) struct CheckCommand;

impl CheckCommand {
    pub(crate) fn new() -> Self {
        CheckCommand
    }
}

impl<'a> Command<'a> for CheckCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Checks the answers of a solver against generated instances")
            .setting(AppSettings::DisableVersion)
            .arg(
                Arg::with_name(ARG_CHECKER)
                    .short("c")
                    .long("checker")
                    .empty_values(false)
                    .multiple(false)
                    .help("the name of the checker (see the checkers command)")
                    .required(true),
            )
            .arg(
                Arg::with_name(ARG_SOLVER)
                    .short("s")
                    .long("solver")
                    .empty_values(false)
                    .multiple(false)
                    .help("the solver under test (a path, or a program name looked up in the PATH)")
                    .required(true),
            )
            .arg(
                Arg::with_name(ARG_DIALECT)
                    .long("dialect")
                    .empty_values(false)
                    .multiple(false)
                    .default_value(Dialect::default().into())
                    .help("the output dialect of argumentation solvers (see the dialects command)")
                    .required(false),
            )
            .arg(common::depth_arg())
            .arg(common::output_dir_arg())
            .arg(common::seed_arg())
            .arg(logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let checker =
            checkers::checker_by_name(arg_matches.value_of(ARG_CHECKER).unwrap_or_default())?;
        let dialect = Dialect::from_name(arg_matches.value_of(ARG_DIALECT).unwrap_or_default())?;
        let settings = CheckSettings {
            solver: PathBuf::from(arg_matches.value_of(ARG_SOLVER).unwrap_or_default()),
            max_depth: common::read_number(arg_matches, common::ARG_DEPTH)?,
            output_dir: PathBuf::from(
                arg_matches
                    .value_of(common::ARG_OUTPUT_DIR)
                    .unwrap_or_default(),
            ),
            dialect,
            seed: common::read_optional_number(arg_matches, common::ARG_SEED)?,
        };
        let counters = checker.run(&settings)?;
        if counters.is_success() {
            Ok(())
        } else {
            Err(anyhow!(
                "{} of {} check(s) failed; see {:?} for the failing instances",
                counters.n_errors,
                counters.n_checks,
                settings.output_dir
            ))
        }
    }
}
