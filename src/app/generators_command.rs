use super::{cli_manager::logging_level_cli_arg, command::Command};
use anyhow::Result;
use clap::{App, AppSettings, ArgMatches, SubCommand};
use crusticheck::generator;

const CMD_NAME: &str = "generators";

pub(crate) struct GeneratorsCommand;

impl GeneratorsCommand {
    pub(crate) fn new() -> Self {
        GeneratorsCommand
    }
}

impl<'a> Command<'a> for GeneratorsCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Displays the available instance generators")
            .setting(AppSettings::DisableVersion)
            .arg(logging_level_cli_arg())
    }

    fn execute(&self, _arg_matches: &ArgMatches<'_>) -> Result<()> {
        generator::iter_generator_names()
            .for_each(|(name, description)| println!("{}\t{}", name, description));
        Ok(())
    }
}
