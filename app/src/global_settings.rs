use std::io::IsTerminal;
use std::{env, io, str::FromStr};

use fern_lang_printer::ColorChoice;

#[derive(Debug, Clone)]
pub struct GlobalSettings {
    pub colorize: ColorChoice,
    pub log_level: log::LevelFilter,
}

impl GlobalSettings {
    pub fn from_env() -> Self {
        let colorize = env::var("FERN_COLORIZE")
            .ok()
            .and_then(|var| ColorChoice::from_str(&var).ok())
            .unwrap_or(ColorChoice::Auto);

        let log_level = env::var("FERN_LOG_LEVEL")
            .ok()
            .and_then(|var| log::LevelFilter::from_str(&var.to_uppercase()).ok())
            .unwrap_or(log::LevelFilter::Warn);

        Self { colorize, log_level }
    }

    /// Install the logger. `RUST_LOG` takes precedence over `FERN_LOG_LEVEL`.
    pub fn init_logger(&self) {
        env_logger::builder()
            .filter_level(self.log_level)
            .parse_default_env()
            .format_timestamp(None)
            .format_target(false)
            .init();
    }

    /// The color choice for stdout, where `auto` only colors terminals
    pub fn stdout_colors(&self) -> ColorChoice {
        match self.colorize {
            ColorChoice::Auto if !io::stdout().is_terminal() => ColorChoice::Never,
            choice => choice,
        }
    }
}
