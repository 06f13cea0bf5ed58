//! # Division files
//!
//! Standings of small divisions, most of them commonly used to teach the elimination problem.
use std::path::{Path, PathBuf};

use pennant::data::league::League;
use pennant::io::import;

/// # Generation and execution
mod test;

/// Relative path of the folder where the division files are stored.
///
/// The path is relative to the project root folder.
fn division_file_directory() -> PathBuf {
    Path::new(file!()).parent().unwrap().to_path_buf()
}

/// Compute the path of the division file, based on its name.
///
/// # Arguments
///
/// * `name`: File name without extension.
///
/// # Return value
///
/// File path relative to the project root folder.
fn get_test_file_path(name: &str) -> PathBuf {
    division_file_directory().join(name).with_extension("txt")
}

fn league(name: &str) -> League {
    import(&get_test_file_path(name)).unwrap()
}
