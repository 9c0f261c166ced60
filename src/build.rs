//! Build the page.

pub mod alias_canvas;
pub mod assemble;
pub mod debug_regions;
pub mod external_js;
pub mod hoist_strings;
pub mod mangle;
pub mod minify_css;
pub mod minify_js;
pub mod read_file;
pub mod write_file;

use thiserror::Error;

use crate::config::Config;

/// List of build errors.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Error while reading the source document.
    #[error("failed to read the source document")]
    ReadInput(#[source] self::read_file::ReadFileError),
    /// Error while writing the built document.
    #[error("failed to write the built document")]
    WriteOutput(#[source] self::write_file::WriteFileError),
}

/// Build the page with given configuration.
///
/// Reads the source document, strips debug regions, minifies the inline style
/// and script regions, and writes the assembled document. Documents without a
/// style or script region are passed through with only whitespace collapsed.
pub fn build(config: &Config) -> Result<(), BuildError> {
    let start_time = std::time::Instant::now();

    let source = read_file::read(&config.input_path).map_err(BuildError::ReadInput)?;

    let document = debug_regions::strip(&source);

    let document = assemble::transform_style(&document, |css| minify_css::minify_css(css));

    let document = assemble::transform_script(&document, |js| {
        let js = external_js::minify(js, &config.external);
        let js = mangle::mangle(&js, &config.mangle);
        let js = alias_canvas::alias(&js, config.mangle.sigil);
        let js = hoist_strings::hoist(&js, &config.mangle.hoisted_strings);
        assemble::escape_script_close(&js)
    });

    let document = assemble::collapse_whitespace(&document);

    write_file::write(&config.output_path, &document).map_err(BuildError::WriteOutput)?;

    let duration = start_time.elapsed().as_secs_f64();

    println!(
        "Built {} in {:.2} s",
        config.output_path.display(),
        duration
    );

    Ok(())
}
