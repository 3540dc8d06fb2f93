// crates/xf2bf-cli/src/cmd/convert.rs

use std::path::PathBuf;

use clap::Args;
use xf2bf_core::{ConversionJob, XfError};

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input files; each one is written to <file>.out. Everything from the
    /// first file on is a file name, even if it starts with '-'
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    pub files: Vec<PathBuf>,
}

/// Runs one job per file, last argument first.
///
/// A failed file is reported and skipped. The process still exits 0, even
/// when every file failed.
pub fn run(args: ConvertArgs) -> anyhow::Result<()> {
    if args.files.is_empty() {
        eprintln!("No filename arguments given.");
        return Ok(());
    }

    let mut failed = 0usize;
    for path in args.files.iter().rev() {
        let job = ConversionJob::new(path);
        match job.run() {
            Ok(rep) => {
                log::info!(
                    "{} -> {} ({} bytes)",
                    job.input().display(),
                    job.output().display(),
                    rep.bytes
                );
            }
            Err(e) => {
                failed += 1;
                log_failure(&job, &e);
                eprintln!(
                    "File \"{}\" failed with error: {}!",
                    path.display(),
                    e.platform_message()
                );
            }
        }
    }

    log::debug!("{} file(s), {} failed", args.files.len(), failed);
    Ok(())
}

fn log_failure(job: &ConversionJob, e: &XfError) {
    match e {
        XfError::Convert { token, .. } => {
            log::debug!("{}: bad token {token:?}", job.input().display());
        }
        _ => {
            let at = e.path().unwrap_or(job.input());
            log::debug!("{}: {:?} ({})", at.display(), e.kind(), e);
        }
    }
}
