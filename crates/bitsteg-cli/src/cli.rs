use bitsteg_core::{BitPosition, CodecOptions};
use clap::{Parser, Subcommand};

use crate::commands::*;
use crate::CliResult;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Bit of the red channel that carries the data, 0 is the least significant bit.
    /// Higher bits make the data visible.
    #[arg(
        short,
        long,
        global = true,
        default_value_t = 0,
        value_parser = clap::value_parser!(u8).range(0..=7)
    )]
    pub bit: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl CliArgs {
    pub fn codec_options(&self) -> CliResult<CodecOptions> {
        Ok(CodecOptions::default().with_bit_position(BitPosition::try_from(self.bit)?))
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitsteg_core::Point;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn should_parse_points_and_bit() {
        let args = CliArgs::try_parse_from([
            "bitsteg", "unveil", "-i", "secret.png", "--start", "2,0", "--end", "8,1", "--bit",
            "3",
        ])
        .expect("arguments should parse");

        assert_eq!(args.codec_options().unwrap().bit_position.get(), 3);
        match args.command {
            Commands::Unveil(unveil) => {
                assert_eq!(unveil.start, Point::new(2, 0));
                assert_eq!(unveil.end, Point::new(8, 1));
            }
            other => panic!("expected unveil, got {other:?}"),
        }
    }

    #[test]
    fn should_reject_bits_outside_of_a_byte() {
        let result = CliArgs::try_parse_from([
            "bitsteg", "hide", "-i", "a.png", "-o", "b.png", "-m", "Hi", "-b", "8",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn should_default_to_the_image_origin_and_lsb() {
        let args =
            CliArgs::try_parse_from(["bitsteg", "hide", "-i", "a.png", "-o", "b.png", "-m", "Hi"])
                .expect("arguments should parse");

        assert_eq!(args.codec_options().unwrap(), CodecOptions::default());
        match args.command {
            Commands::Hide(hide) => assert_eq!(hide.start, Point::new(0, 0)),
            other => panic!("expected hide, got {other:?}"),
        }
    }
}
