use std::path::PathBuf;

use fern_lang_normalizer::env::Env;
use fern_lang_normalizer::eval::Eval;

use crate::global_settings::GlobalSettings;

use super::PrintArgs;
use super::input::read_exp;

#[derive(clap::Args)]
pub struct Args {
    /// JSON file containing the syntax tree, `-` for stdin
    #[clap(value_parser, value_name = "FILE")]
    filepath: PathBuf,
    #[clap(flatten)]
    print: PrintArgs,
}

/// Closures are printed without their environment, so the result can mention
/// variables bound outside of the closure.
pub fn exec(cmd: Args, settings: &GlobalSettings) -> miette::Result<()> {
    let exp = read_exp(&cmd.filepath)?;
    let val = exp.eval(&Env::empty());
    super::print_stdout(&val, &cmd.print.cfg(), settings)?;
    Ok(())
}
