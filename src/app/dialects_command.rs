use super::{cli_manager::logging_level_cli_arg, command::Command};
use anyhow::Result;
use clap::{App, AppSettings, ArgMatches, SubCommand};
use crusticheck::io;

const CMD_NAME: &str = "dialects";

pub(crate) struct DialectsCommand;

impl DialectsCommand {
    pub(crate) fn new() -> Self {
        DialectsCommand
    }
}

impl<'a> Command<'a> for DialectsCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Displays the output dialects of argumentation solvers")
            .setting(AppSettings::DisableVersion)
            .arg(logging_level_cli_arg())
    }

    fn execute(&self, _arg_matches: &ArgMatches<'_>) -> Result<()> {
        let dialects = io::iter_dialect_names().collect::<Vec<&str>>().join(",");
        println!("[{}]", dialects);
        Ok(())
    }
}
