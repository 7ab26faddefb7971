use std::io::Write;
use std::path::PathBuf;

use bitsteg_core::{CodecOptions, Point, SteganoError};
use clap::Args;

use crate::CliResult;

/// Unveils data from a bit plane of a PNG image
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Source image that contains secret data
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,

    /// First pixel that carries data, as `x,y`
    #[arg(short, long, value_name = "x,y", default_value = "0,0")]
    pub start: Point,

    /// Pixel right after the data, as `x,y`, printed when hiding
    #[arg(short, long, value_name = "x,y", required = true)]
    pub end: Point,

    /// Data will be stored in that file instead of being written to stdout
    #[arg(short = 'o', long = "out", value_name = "output file")]
    pub output_file: Option<PathBuf>,
}

impl UnveilArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let mut api = bitsteg_core::api::unveil::prepare()
            .with_options(options)
            .from_secret_file(&self.media)
            .between(self.start, self.end);
        if let Some(output_file) = &self.output_file {
            api = api.into_output_file(output_file);
        }

        let message = api.execute()?;
        if self.output_file.is_none() {
            std::io::stdout()
                .write_all(&message)
                .map_err(|source| SteganoError::WriteError { source })?;
        }

        Ok(())
    }
}
