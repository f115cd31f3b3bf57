//! Implements `check`, a read-only probe reporting whether the target file
//! still needs the patch.

use std::path::PathBuf;

use clap::Parser;

use crate::errors::PatchError;
use crate::internal::dsp_info;
use crate::internal::patch::PatchOutcome;
use crate::utils::file;

#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Source file to inspect
    #[clap(long, value_name = "PATH", default_value = dsp_info::DEFAULT_TARGET)]
    pub file: PathBuf,
}

pub fn execute(args: CheckArgs) -> Result<(), PatchError> {
    let patch = dsp_info::patch();
    let source = file::read_source(&args.file)?;

    match patch.apply(&source) {
        PatchOutcome::Applied(_) => {
            println!("{}: patch '{}' pending", args.file.display(), patch.name);
            Ok(())
        }
        PatchOutcome::AlreadyApplied => {
            println!(
                "{}: patch '{}' already applied",
                args.file.display(),
                patch.name
            );
            Ok(())
        }
        PatchOutcome::AnchorNotFound => Err(PatchError::AnchorNotFound {
            patch: patch.name,
            path: args.file,
        }),
    }
}
