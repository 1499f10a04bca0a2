use clap::Parser;
use log::LevelFilter;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use crate::engine::game_engine::build_game_engine;
use crate::error::errors::GenericError;
use crate::settings::{build_settings, Args};
use crate::view::console_view::ConsoleView;

mod character;
mod engine;
mod error;
mod settings;
mod view;

#[cfg(test)]
mod test;

fn init_logging(log_file: &str, level: LevelFilter) -> Result<(), GenericError> {
    let appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{d} {l} {M} - {m}{n}")))
        .build(log_file)?;
    let config = Config::builder()
        .appender(Appender::builder().build("file", Box::new(appender)))
        .build(Root::builder().appender("file").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn main() -> Result<(), GenericError> {
    let mut settings = build_settings();
    settings.apply_args(Args::parse());
    init_logging(&settings.get_log_file(), settings.get_log_level()?)?;
    log::info!("Starting arena..");

    let mut engine = build_game_engine(ConsoleView::stdout(), settings)?;
    let score = engine.start()?;
    log::info!("Exiting with a score of {}", score.total);
    Ok(())
}
