//! Objects used to write instances and to decode the answers of solvers.

pub(crate) mod answer_parser;

mod aspartix_writer;
pub use aspartix_writer::AspartixWriter;
pub use aspartix_writer::TgfWriter;

mod dialect;
pub use dialect::iter_dialect_names;
pub use dialect::reader_by_name;
pub use dialect::Dialect;

mod dimacs;
pub use dimacs::DimacsStatusReader;
pub use dimacs::DimacsWriter;
pub use dimacs::SatStatus;

mod iccma17;
pub use iccma17::Iccma17Reader;
pub use iccma17::Iccma17Writer;

mod iccma19;
pub use iccma19::Iccma19Reader;
pub use iccma19::Iccma19Writer;

mod payload_files;
pub use payload_files::write_all_payload_files;
pub use payload_files::write_payload_files;
pub use payload_files::PAYLOAD_FILE_STEM;

mod specs;
pub use specs::AnswerReader;
pub use specs::AnswerWriter;
pub use specs::LabelExtension;
pub use specs::LabelExtensionSet;
