use crate::generator::Payloads;
use anyhow::{Context, Result};
use std::{
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
};

/// The prefix of the names of the files written by [`write_payload_files`].
pub const PAYLOAD_FILE_STEM: &str = "instance";

/// Writes payloads into files of a directory, creating the directory if needed.
///
/// Each payload is written into a file named `instance.<kind>`.
/// The paths of the files are returned in the order of the kinds.
///
/// # Example
///
/// ```
/// # use crusticheck::cnf::CnfInstance;
/// # use crusticheck::io::write_payload_files;
/// let dir = assert_fs::TempDir::new().unwrap();
/// let paths = write_payload_files(&CnfInstance::default(), &["cnf"], dir.path()).unwrap();
/// assert_eq!(dir.path().join("instance.cnf"), paths[0]);
/// assert_eq!("p cnf 0 0\n", std::fs::read_to_string(&paths[0]).unwrap());
/// # dir.close().unwrap();
/// ```
pub fn write_payload_files(
    payloads: &dyn Payloads,
    kinds: &[&str],
    directory: &Path,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(directory)
        .with_context(|| format!("while creating directory {:?}", directory))?;
    kinds
        .iter()
        .map(|kind| {
            let path = directory.join(format!("{}.{}", PAYLOAD_FILE_STEM, kind));
            let context = || format!("while writing payload {:?} into {:?}", kind, path);
            let file = File::create(&path).with_context(context)?;
            let mut writer = BufWriter::new(file);
            payloads.write_payload(kind, &mut writer).with_context(context)?;
            Ok(path.clone())
        })
        .collect()
}

/// Writes all the payloads of an object into files of a directory.
///
/// See [`write_payload_files`] for the naming of the files.
pub fn write_all_payload_files(payloads: &dyn Payloads, directory: &Path) -> Result<Vec<PathBuf>> {
    write_payload_files(payloads, payloads.payload_kinds(), directory)
}
