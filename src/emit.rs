//! Writes the catalogue to disk as `<name>.in` / `<name>.out` pairs, and compares an
//! existing directory against it.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::catalogue::{Catalogue, TestCase};
use crate::diagnostics::FixtureError;

pub const INPUT_EXT: &str = "in";
pub const OUTPUT_EXT: &str = "out";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitReport {
    pub dir: PathBuf,
    pub fixtures: usize,
    pub files: usize,
}

impl EmitReport {
    /// The completion message printed after a run.
    pub fn summary(&self) -> String {
        format!("Done! Generated {} tests in directory '{}'.", self.fixtures, self.dir.display())
    }
}

pub fn input_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.{INPUT_EXT}"))
}

pub fn output_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.{OUTPUT_EXT}"))
}

fn write_file(path: &Path, contents: &str) -> Result<(), FixtureError> {
    let mut file = File::create(path).map_err(|e| FixtureError::io(path, e))?;
    file.write_all(contents.as_bytes()).map_err(|e| FixtureError::io(path, e))?;
    file.flush().map_err(|e| FixtureError::io(path, e))
}

/// Write one fixture pair. Returns the number of files written.
pub fn emit_case(dir: &Path, case: &TestCase) -> Result<usize, FixtureError> {
    write_file(&input_path(dir, &case.name), case.input_text())?;
    write_file(&output_path(dir, &case.name), &case.output_text())?;
    debug!(name = %case.name, outcome = case.expected.label(), "wrote fixture");
    Ok(2)
}

/// Emit every fixture into `dir`, creating it if needed. Stops at the first storage
/// error; pairs already written stay on disk.
pub fn emit(catalogue: &Catalogue, dir: &Path) -> Result<EmitReport, FixtureError> {
    std::fs::create_dir_all(dir).map_err(|e| FixtureError::io(dir, e))?;

    let mut report = EmitReport { dir: dir.to_path_buf(), fixtures: 0, files: 0 };
    for case in catalogue.enumerate() {
        report.files += emit_case(dir, case)?;
        report.fixtures += 1;
    }
    info!(fixtures = report.fixtures, files = report.files, dir = %dir.display(), "emitted fixtures");
    Ok(report)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Drift {
    Missing(PathBuf),
    Differs(PathBuf),
}

impl std::fmt::Display for Drift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Drift::Missing(path) => write!(f, "missing: {}", path.display()),
            Drift::Differs(path) => write!(f, "differs: {}", path.display()),
        }
    }
}

fn compare_file(path: PathBuf, expected: &str, drift: &mut Vec<Drift>) -> Result<(), FixtureError> {
    match std::fs::read_to_string(&path) {
        Ok(actual) if actual == expected => {}
        Ok(_) => {
            warn!(path = %path.display(), "fixture differs from catalogue");
            drift.push(Drift::Differs(path));
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "fixture missing");
            drift.push(Drift::Missing(path));
        }
        Err(e) => return Err(FixtureError::io(path, e)),
    }
    Ok(())
}

/// Compare a previously generated directory against the catalogue. Files in `dir` that
/// the catalogue does not know about are ignored.
pub fn check(catalogue: &Catalogue, dir: &Path) -> Result<Vec<Drift>, FixtureError> {
    let mut drift = Vec::new();
    for case in catalogue.enumerate() {
        compare_file(input_path(dir, &case.name), case.input_text(), &mut drift)?;
        compare_file(output_path(dir, &case.name), &case.output_text(), &mut drift)?;
    }
    Ok(drift)
}
