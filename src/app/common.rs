use super::{
    app_helper::AppHelper, command::Command, AuthorsCommand, CheckCommand, CheckersCommand,
    DialectsCommand, GenerateCommand, GeneratorsCommand,
};
use anyhow::{Context, Result};
use clap::{Arg, ArgMatches};
use crusticheck::utils::HarnessError;
use std::str::FromStr;

const AUTHORS: &str = "Jean-Marie Lagniez <lagniez@cril.fr>, Emmanuel Lonca <lonca@cril.fr> and Jean-Guy Mailly <jean-guy.mailly@u-paris.fr>";

pub(crate) fn create_app_helper() -> AppHelper<'static> {
    let app_name = option_env!("CARGO_PKG_NAME").unwrap_or("unknown app name");
    let app_version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown version");
    let mut app = AppHelper::new(
        app_name,
        app_version,
        AUTHORS,
        "Crusticheck, a differential testing harness for argumentation and SAT solvers.",
    );
    let commands: Vec<Box<dyn Command>> = vec![
        Box::new(AuthorsCommand::new(app_name, app_version, AUTHORS)),
        Box::new(CheckCommand::new()),
        Box::new(CheckersCommand::new()),
        Box::new(DialectsCommand::new()),
        Box::new(GenerateCommand::new()),
        Box::new(GeneratorsCommand::new()),
    ];
    for c in commands {
        app.add_command(c);
    }
    app
}

pub(crate) const ARG_DEPTH: &str = "DEPTH";

pub(crate) fn depth_arg() -> Arg<'static, 'static> {
    Arg::with_name(ARG_DEPTH)
        .short("d")
        .long("depth")
        .empty_values(false)
        .multiple(false)
        .help("the maximal depth of the instance tree (the root is at depth 1)")
        .required(true)
}

pub(crate) const ARG_OUTPUT_DIR: &str = "OUTPUT_DIR";

pub(crate) fn output_dir_arg() -> Arg<'static, 'static> {
    Arg::with_name(ARG_OUTPUT_DIR)
        .short("o")
        .long("output-dir")
        .empty_values(false)
        .multiple(false)
        .help("the directory where the instances are written")
        .required(true)
}

pub(crate) const ARG_SEED: &str = "SEED";

pub(crate) fn seed_arg() -> Arg<'static, 'static> {
    Arg::with_name(ARG_SEED)
        .long("seed")
        .empty_values(false)
        .multiple(false)
        .help("the seed of the random source (random if not set)")
        .required(false)
}

/// Reads a mandatory numeric argument.
pub(crate) fn read_number<T>(arg_matches: &ArgMatches<'_>, arg_name: &str) -> Result<T>
where
    T: FromStr,
{
    let value = arg_matches.value_of(arg_name).unwrap_or_default();
    parse_number(value).with_context(|| format!("while reading argument {}", arg_name))
}

/// Reads an optional numeric argument.
pub(crate) fn read_optional_number<T>(arg_matches: &ArgMatches<'_>, arg_name: &str) -> Result<Option<T>>
where
    T: FromStr,
{
    arg_matches
        .value_of(arg_name)
        .map(|value| {
            parse_number(value).with_context(|| format!("while reading argument {}", arg_name))
        })
        .transpose()
}

fn parse_number<T>(value: &str) -> Result<T>
where
    T: FromStr,
{
    value.parse::<T>().map_err(|_| {
        HarnessError::InvalidArgument(format!(r#""{}" is not a valid number"#, value)).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::App;

    fn matches(args: &[&str]) -> ArgMatches<'static> {
        App::new("app")
            .arg(depth_arg())
            .arg(seed_arg())
            .get_matches_from_safe(args)
            .unwrap()
    }

    #[test]
    fn test_read_numbers() {
        let m = matches(&["app", "-d", "3", "--seed", "42"]);
        assert_eq!(3, read_number::<usize>(&m, ARG_DEPTH).unwrap());
        assert_eq!(Some(42), read_optional_number::<u64>(&m, ARG_SEED).unwrap());
    }

    #[test]
    fn test_missing_optional_number() {
        let m = matches(&["app", "-d", "3"]);
        assert_eq!(None, read_optional_number::<u64>(&m, ARG_SEED).unwrap());
    }

    #[test]
    fn test_invalid_number() {
        let m = matches(&["app", "-d", "three"]);
        let err = read_number::<usize>(&m, ARG_DEPTH).unwrap_err();
        assert!(HarnessError::is_invalid_argument(&err));
    }
}
