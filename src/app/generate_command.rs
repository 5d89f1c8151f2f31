use super::{cli_manager::logging_level_cli_arg, command::Command, common};
use anyhow::{Context, Result};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use crusticheck::{
    generator::{self, GenerationContext},
    io,
};
use log::info;
use std::{fs, path::PathBuf};

const CMD_NAME: &str = "generate";

const ARG_GENERATOR: &str = "GENERATOR";

pub(crate) struct GenerateCommand;

impl GenerateCommand {
    pub(crate) fn new() -> Self {
        GenerateCommand
    }
}

impl<'a> Command<'a> for GenerateCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Generates instances and writes them with their expected solutions")
            .setting(AppSettings::DisableVersion)
            .arg(
                Arg::with_name(ARG_GENERATOR)
                    .short("g")
                    .long("generator")
                    .empty_values(false)
                    .multiple(false)
                    .help("the name of the generator (see the generators command)")
                    .required(true),
            )
            .arg(common::depth_arg())
            .arg(common::output_dir_arg())
            .arg(common::seed_arg())
            .arg(logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let generator_name = arg_matches.value_of(ARG_GENERATOR).unwrap_or_default();
        let generator = generator::generator_by_name(generator_name)?;
        let max_depth = common::read_number::<usize>(arg_matches, common::ARG_DEPTH)?;
        let output_dir =
            PathBuf::from(arg_matches.value_of(common::ARG_OUTPUT_DIR).unwrap_or_default());
        let seed = common::read_optional_number::<u64>(arg_matches, common::ARG_SEED)?;
        let mut context = match seed {
            Some(s) => GenerationContext::new_with_seed(s),
            None => GenerationContext::new(),
        };
        fs::create_dir_all(&output_dir)
            .with_context(|| format!("while creating output directory {:?}", output_dir))?;
        info!(
            "generating {} instances up to depth {} into {:?}",
            generator_name, max_depth, output_dir
        );
        let mut n_instances = 0;
        generator.generate_payloads(max_depth, &mut context, &mut |payloads| {
            n_instances += 1;
            let instance_dir = output_dir.join(format!("instance_{:06}", n_instances));
            io::write_all_payload_files(payloads, &instance_dir)?;
            Ok(())
        })?;
        info!("{} instance(s) written", n_instances);
        Ok(())
    }
}
