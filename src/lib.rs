pub mod types;
pub mod scope;
pub mod diagnostics;
pub mod encode;
pub mod catalogue;
pub mod emit;
pub mod config;

use std::path::Path;

use catalogue::Catalogue;
use diagnostics::FixtureError;
use emit::EmitReport;

/// Build the standard catalogue and write it to `dir` (catalogue → encode → emit).
pub fn generate(dir: &Path) -> Result<EmitReport, FixtureError> {
    let catalogue = catalogue::standard()?;
    emit::emit(&catalogue, dir)
}

/// Compare `dir` against the standard catalogue. Returns the out-of-date files.
pub fn check(dir: &Path) -> Result<Vec<emit::Drift>, FixtureError> {
    let catalogue: Catalogue = catalogue::standard()?;
    emit::check(&catalogue, dir)
}
