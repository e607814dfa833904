//! # rainbow-table-lib
//!
//! rainbow-table-lib generates rainbow color tables from phase-shifted sine
//! waves and renders them as C array initializer entries, ready to paste into
//! another program's source.
//!
//! For more detail, see write_gradient_table and write_gradient_table_to_file.

pub mod gradient_params;
pub mod gradient_sampler;
pub mod table_writer;

use std::fs::File;

use thiserror::Error;

use crate::{gradient_params::GradientParams, table_writer::write_gradient_table};

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Create output file error: {0}")]
    CreateFileError(String),

    #[error("Write output error: {0}")]
    WriteError(String),
}

/// Marker line emitted between the two default runs, so the long and the
/// short table are easy to tell apart when pasting.
pub const RUN_SEPARATOR: &str = "// next!";

/// Write the default pair of tables: an 18-entry run, the marker line, then
/// a 6-entry run. 25 lines in total.
pub fn write_default_tables<W: std::io::Write>(out: &mut W) -> Result<(), TableError> {
    let mut params = GradientParams::default();

    params.len = 18;
    write_gradient_table(out, &params)?;

    let result = writeln!(out, "{}", RUN_SEPARATOR);
    if result.is_err() {
        return Err(TableError::WriteError(result.err().unwrap().to_string()));
    }

    params.len = 6;
    write_gradient_table(out, &params)
}

/// Write one gradient run into a freshly created file.
pub fn write_gradient_table_to_file(
    params: &GradientParams,
    name: &str,
) -> Result<File, TableError> {
    match std::fs::File::create(name) {
        Ok(mut v) => {
            write_gradient_table(&mut v, params)?;

            Ok(v)
        }
        Err(e) => {
            return Err(TableError::CreateFileError(e.to_string()));
        }
    }
}
