use super::{cli_manager::logging_level_cli_arg, command::Command};
use anyhow::Result;
use clap::{App, AppSettings, ArgMatches, SubCommand};
use crusticheck::checkers;

const CMD_NAME: &str = "checkers";

pub(crate) struct CheckersCommand;

impl CheckersCommand {
    pub(crate) fn new() -> Self {
        CheckersCommand
    }
}

impl<'a> Command<'a> for CheckersCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Displays the available checkers")
            .setting(AppSettings::DisableVersion)
            .arg(logging_level_cli_arg())
    }

    fn execute(&self, _arg_matches: &ArgMatches<'_>) -> Result<()> {
        checkers::iter_checkers().for_each(|c| println!("{}\t{}", c.name(), c.description()));
        Ok(())
    }
}
