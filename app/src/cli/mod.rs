use std::io::Write;

use clap::{Parser, Subcommand};

use fern_lang_printer::{Print, PrintCfg, PrintExt, StandardStream};

use crate::global_settings::GlobalSettings;
use crate::result::Error;

mod eval;
mod input;
mod normalize;

pub fn exec(settings: &GlobalSettings) -> miette::Result<()> {
    use Command::*;
    let cli = Cli::parse();
    match cli.command {
        Normalize(args) => normalize::exec(args, settings),
        Eval(args) => eval::exec(args, settings),
    }
}

#[derive(Parser)]
#[clap(version, author, about, long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Normalize a syntax tree and print its normal form
    Normalize(normalize::Args),
    /// Evaluate a syntax tree and print the resulting value
    Eval(eval::Args),
}

/// Options of the pretty printer
#[derive(clap::Args)]
pub struct PrintArgs {
    /// Line width, defaults to the width of the terminal
    #[clap(long)]
    width: Option<usize>,
    /// Indentation of nested lines
    #[clap(long, default_value_t = 4)]
    indent: isize,
    /// Print the de Bruijn index of every variable
    #[clap(long)]
    de_bruijn: bool,
    /// Print lambdas as `\x -> e`
    #[clap(long)]
    lambda_sugar: bool,
}

impl PrintArgs {
    pub fn cfg(&self) -> PrintCfg {
        PrintCfg {
            width: self.width.unwrap_or_else(terminal_width),
            indent: self.indent,
            de_bruijn: self.de_bruijn,
            print_lambda_sugar: self.lambda_sugar,
        }
    }
}

fn terminal_width() -> usize {
    termsize::get().map(|size| size.cols as usize).unwrap_or(fern_lang_printer::DEFAULT_WIDTH)
}

/// Print to stdout, followed by a newline
pub fn print_stdout<T: Print>(
    x: &T,
    cfg: &PrintCfg,
    settings: &GlobalSettings,
) -> Result<(), Error> {
    let mut stream = StandardStream::stdout(settings.stdout_colors());
    x.print_colored(cfg, &mut stream).map_err(Error::Write)?;
    writeln!(stream).map_err(Error::Write)
}
