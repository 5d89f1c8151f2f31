mod app_helper;

mod authors_command;
pub(crate) use authors_command::AuthorsCommand;

mod check_command;
pub(crate) use check_command::CheckCommand;

mod checkers_command;
pub(crate) use checkers_command::CheckersCommand;

mod cli_manager;

mod command;

pub(crate) mod common;

mod dialects_command;
pub(crate) use dialects_command::DialectsCommand;

mod generate_command;
pub(crate) use generate_command::GenerateCommand;

mod generators_command;
pub(crate) use generators_command::GeneratorsCommand;

mod writable_string;
