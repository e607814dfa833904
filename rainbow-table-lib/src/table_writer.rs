// Copyright 2025 BenderBlog Rodriguez and Contributors.
// SPDX-License-Identifier: 0BSD

use std::io::Write;

use crate::{
    TableError,
    gradient_params::GradientParams,
    gradient_sampler::{ColorSample, sample_gradient},
};

/// Render one sample as a C initializer entry: `{ 0xRR, 0xGG, 0xBB },` with
/// lowercase hex and no width padding.
pub fn render_sample(sample: &ColorSample) -> String {
    format!(
        "{{ 0x{:x}, 0x{:x}, 0x{:x} }},",
        sample.red, sample.green, sample.blue
    )
}

///
/// Write one gradient run, one rendered entry per line, in index order.
///
/// A run with `len == 0` writes nothing.
///
pub fn write_gradient_table<W: Write>(
    out: &mut W,
    params: &GradientParams,
) -> Result<(), TableError> {
    for sample in sample_gradient(params) {
        let result = writeln!(out, "{}", render_sample(&sample));
        if result.is_err() {
            return Err(TableError::WriteError(result.err().unwrap().to_string()));
        }
    }

    Ok(())
}
