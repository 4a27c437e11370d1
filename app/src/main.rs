use global_settings::GlobalSettings;

mod cli;
mod global_settings;
mod result;

fn main() -> miette::Result<()> {
    let settings = GlobalSettings::from_env();
    settings.init_logger();
    cli::exec(&settings)
}
