use std::path::PathBuf;

use fern_lang_normalizer::normalize::Normalize;

use crate::global_settings::GlobalSettings;
use crate::result::Error;

use super::PrintArgs;
use super::input::read_exp;

#[derive(clap::Args)]
pub struct Args {
    /// JSON file containing the syntax tree, `-` for stdin
    #[clap(value_parser, value_name = "FILE")]
    filepath: PathBuf,
    #[clap(flatten)]
    print: PrintArgs,
    /// Print the normal form as JSON instead of pretty printing it
    #[clap(long)]
    json: bool,
}

pub fn exec(cmd: Args, settings: &GlobalSettings) -> miette::Result<()> {
    let exp = read_exp(&cmd.filepath)?;
    let nf = exp.normalize_in_empty_env();
    if cmd.json {
        let json = serde_json::to_string_pretty(&nf).map_err(Error::Encode)?;
        println!("{json}");
    } else {
        super::print_stdout(&nf, &cmd.print.cfg(), settings)?;
    }
    Ok(())
}
