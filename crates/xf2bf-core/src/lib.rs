pub mod error;
pub mod token;

pub mod tokenizer;
pub mod classify;
pub mod convert;
pub mod job;

pub use crate::error::{ConvertError, Result, XfError};
pub use crate::job::{convert_file, convert_stream, output_path_for, ConversionJob, JobReport};
pub use crate::token::Token;
