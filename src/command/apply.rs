//! Implements `apply`, which rewrites the DSP settings route handler in the
//! target source file.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use diffy::PatchFormatter;

use crate::errors::PatchError;
use crate::internal::dsp_info;
use crate::internal::patch::PatchOutcome;
use crate::utils::file;

#[derive(Parser, Debug, Clone)]
pub struct ApplyArgs {
    /// Source file to patch
    #[clap(long, value_name = "PATH", default_value = dsp_info::DEFAULT_TARGET)]
    pub file: PathBuf,

    /// Show what would change without rewriting the file
    #[clap(short = 'n', long)]
    pub dry_run: bool,

    /// Save the original file to <PATH>.bak before overwriting
    #[clap(long)]
    pub backup: bool,
}

pub fn execute(args: ApplyArgs) -> Result<(), PatchError> {
    let patch = dsp_info::patch();
    let source = file::read_source(&args.file)?;
    tracing::debug!(file = %args.file.display(), bytes = source.len(), "loaded target");

    match patch.apply(&source) {
        PatchOutcome::Applied(patched) => {
            if args.dry_run {
                print_diff(&source, &patched);
                println!("Would update {}", args.file.display());
                return Ok(());
            }
            if args.backup {
                let bak = file::backup(&args.file)?;
                println!("Saved backup to {}", bak.display());
            }
            file::write_source(&args.file, &patched)?;
            println!("{}", "DSP Info route updated successfully!".green());
            Ok(())
        }
        PatchOutcome::AlreadyApplied => {
            println!(
                "Patch '{}' is already applied to {}, nothing to do",
                patch.name,
                args.file.display()
            );
            Ok(())
        }
        PatchOutcome::AnchorNotFound => Err(PatchError::AnchorNotFound {
            patch: patch.name,
            path: args.file,
        }),
    }
}

fn print_diff(old: &str, new: &str) {
    let diff = diffy::create_patch(old, new);
    if std::io::stdout().is_terminal() {
        let formatter = PatchFormatter::new().with_color();
        print!("{}", formatter.fmt_patch(&diff));
    } else {
        print!("{diff}");
    }
}
