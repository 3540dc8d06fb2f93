// crates/xf2bf-core/src/job.rs

use std::ffi::OsString;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::classify::is_single_hex_byte;
use crate::convert::token_to_byte;
use crate::error::{Result, XfError};
use crate::tokenizer::Words;

/// Appended verbatim to the input path to name the output.
pub const OUTPUT_SUFFIX: &str = ".out";

/// `test.txt` -> `test.txt.out`. No normalization; never fails.
pub fn output_path_for(input: &Path) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(OUTPUT_SUFFIX);
    PathBuf::from(name)
}

/// Counters for one finished job.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct JobReport {
    /// Words read from the input.
    pub tokens: u64,
    /// Words that failed classification.
    pub skipped: u64,
    /// Bytes written to the output.
    pub bytes: u64,
}

/// Tokenize `reader`, keep the single hex byte tokens, write their values.
///
/// Stops at the first read, write or conversion failure. Whatever was
/// written before that stays written.
pub fn convert_stream<R: BufRead, W: Write>(reader: R, writer: &mut W) -> Result<JobReport> {
    let mut rep = JobReport::default();

    for word in Words::new(reader) {
        let word = word.map_err(XfError::Read)?;
        rep.tokens += 1;

        if !is_single_hex_byte(word.as_bytes()) {
            log::trace!("skip token {:?}", word.to_string());
            rep.skipped += 1;
            continue;
        }

        let byte = token_to_byte(word.as_bytes()).map_err(|source| XfError::Convert {
            token: word.to_string(),
            source,
        })?;
        writer.write_all(&[byte]).map_err(XfError::Write)?;
        rep.bytes += 1;
    }

    Ok(rep)
}

/// One input file and the output derived from it.
#[derive(Clone, Debug)]
pub struct ConversionJob {
    input: PathBuf,
    output: PathBuf,
}

impl ConversionJob {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        let input = input.into();
        let output = output_path_for(&input);
        Self { input, output }
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Open input, create output, stream, flush.
    ///
    /// The output is not touched unless the input opened. Both handles are
    /// owned by this call and dropped on every return path.
    pub fn run(&self) -> Result<JobReport> {
        let input = File::open(&self.input).map_err(|source| XfError::OpenInput {
            path: self.input.clone(),
            source,
        })?;

        let output = File::create(&self.output).map_err(|source| XfError::CreateOutput {
            path: self.output.clone(),
            source,
        })?;

        let mut writer = BufWriter::new(output);
        let rep = convert_stream(BufReader::new(input), &mut writer)?;
        writer.flush().map_err(XfError::Write)?;

        log::debug!(
            "{} -> {}: tokens={} skipped={} bytes={}",
            self.input.display(),
            self.output.display(),
            rep.tokens,
            rep.skipped,
            rep.bytes
        );
        Ok(rep)
    }
}

/// Convert `input` into `<input>.out`.
pub fn convert_file(input: impl AsRef<Path>) -> Result<JobReport> {
    ConversionJob::new(input.as_ref()).run()
}
