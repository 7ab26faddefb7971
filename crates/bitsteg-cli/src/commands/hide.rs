use std::path::PathBuf;

use bitsteg_core::{CodecOptions, Point};
use clap::Args;
use log::info;

use crate::CliResult;

/// Hides data in a bit plane of a PNG image
#[derive(Args, Debug)]
pub struct HideArgs {
    /// PNG image with 8-bit RGBA pixels, used readonly.
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,

    /// Final image will be stored as file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// File whose raw content will be hidden
    #[arg(
        short = 'd',
        long = "data",
        value_name = "data file",
        required_unless_present = "message",
        conflicts_with = "message"
    )]
    pub data_file: Option<PathBuf>,

    /// A text message that will be hidden
    #[arg(short, long, value_name = "text message")]
    pub message: Option<String>,

    /// First pixel that carries data, as `x,y`
    #[arg(short, long, value_name = "x,y", default_value = "0,0")]
    pub start: Point,
}

impl HideArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let mut api = bitsteg_core::api::hide::prepare()
            .with_options(options)
            .with_image(&self.media)
            .with_output(&self.write_to_file)
            .at(self.start);

        if let Some(message) = self.message {
            api = api.with_message(&message);
        }
        if let Some(data_file) = self.data_file {
            api = api.with_message_file(data_file);
        }

        let end = api.execute()?;
        info!(
            "hidden in {:?}, unveil with --start {} --end {end} --bit {}",
            self.write_to_file, self.start, options.bit_position
        );
        println!("{end}");

        Ok(())
    }
}
