use clap::Parser;
use log::LevelFilter;
use rand::distr::Alphanumeric;
use rand::{rng, Rng};

use crate::error::errors::GenericError;

pub const SETTING_RNG_SEED : &str = "RNG Seed";
pub const SETTING_OPPONENT_COUNT : &str = "Opponent count";
pub const SETTING_PAUSE : &str = "Pause between rounds";
pub const SETTING_LOG_FILE : &str = "Log file";
pub const SETTING_LOG_LEVEL : &str = "Log level";

pub const DEFAULT_OPPONENT_COUNT : u32 = 20;
pub const DEFAULT_LOG_FILE : &str = "arena.log";
pub const DEFAULT_LOG_LEVEL : &str = "info";

pub struct Setting<T> {
    pub name : String,
    pub value : T
}

pub struct Settings {
    pub bool_settings : Vec<Setting<bool>>,
    pub u32_settings : Vec<Setting<u32>>,
    pub string_settings : Vec<Setting<String>>
}

/// Turn based arena fighting in the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "arena")]
pub struct Args {
    /// Seed for every dice roll and generated opponent
    #[arg(long)]
    pub seed: Option<String>,

    /// Number of opponents to generate
    #[arg(long)]
    pub opponents: Option<u32>,

    /// Don't wait for a key press between rounds
    #[arg(long)]
    pub no_pause: bool,

    /// File to write the log to
    #[arg(long)]
    pub log_file: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long)]
    pub log_level: Option<String>
}

impl Settings {
    pub fn find_string_setting_value(&self, name : &str) -> Option<String> {
        self.string_settings.iter().find(|x| x.name == name).map(|s| s.value.clone())
    }

    pub fn find_bool_setting_value(&self, name : &str) -> Option<bool> {
        self.bool_settings.iter().find(|x| x.name == name).map(|s| s.value)
    }

    pub fn find_u32_setting_value(&self, name : &str) -> Option<u32> {
        self.u32_settings.iter().find(|x| x.name == name).map(|s| s.value)
    }

    pub fn set_string_setting_value(&mut self, name : &str, value: String) {
        if let Some(setting) = self.string_settings.iter_mut().find(|x| x.name == name) {
            setting.value = value;
        } else {
            self.string_settings.push(Setting { name: name.to_string(), value });
        }
    }

    pub fn set_bool_setting_value(&mut self, name : &str, value: bool) {
        if let Some(setting) = self.bool_settings.iter_mut().find(|x| x.name == name) {
            setting.value = value;
        } else {
            self.bool_settings.push(Setting { name: name.to_string(), value });
        }
    }

    pub fn set_u32_setting_value(&mut self, name : &str, value: u32) {
        if let Some(setting) = self.u32_settings.iter_mut().find(|x| x.name == name) {
            setting.value = value;
        } else {
            self.u32_settings.push(Setting { name: name.to_string(), value });
        }
    }

    pub fn get_rng_seed(&self) -> Option<String> {
        self.find_string_setting_value(SETTING_RNG_SEED)
    }

    pub fn get_opponent_count(&self) -> u32 {
        self.find_u32_setting_value(SETTING_OPPONENT_COUNT).unwrap_or(DEFAULT_OPPONENT_COUNT)
    }

    pub fn is_pausing(&self) -> bool {
        self.find_bool_setting_value(SETTING_PAUSE).unwrap_or(true)
    }

    pub fn get_log_file(&self) -> String {
        self.find_string_setting_value(SETTING_LOG_FILE).unwrap_or_else(|| DEFAULT_LOG_FILE.to_string())
    }

    pub fn get_log_level(&self) -> Result<LevelFilter, GenericError> {
        let level = self.find_string_setting_value(SETTING_LOG_LEVEL).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        level.parse::<LevelFilter>()
            .map_err(|_| GenericError::new(format!("Unknown log level: {}", level)))
    }

    /*
        Applies any command line overrides on top of the current values.
     */
    pub fn apply_args(&mut self, args: Args) {
        if let Some(seed) = args.seed {
            self.set_string_setting_value(SETTING_RNG_SEED, seed);
        }
        if let Some(count) = args.opponents {
            self.set_u32_setting_value(SETTING_OPPONENT_COUNT, count);
        }
        if args.no_pause {
            self.set_bool_setting_value(SETTING_PAUSE, false);
        }
        if let Some(file) = args.log_file {
            self.set_string_setting_value(SETTING_LOG_FILE, file);
        }
        if let Some(level) = args.log_level {
            self.set_string_setting_value(SETTING_LOG_LEVEL, level);
        }
    }
}

pub fn random_seed() -> String {
    rng()
        .sample_iter(&Alphanumeric)
        .take(12)
        .map(char::from)
        .collect()
}

pub fn build_settings() -> Settings {
    let rng_seed : Setting<String> = Setting { name: SETTING_RNG_SEED.to_string(), value: random_seed() };
    let log_file : Setting<String> = Setting { name: SETTING_LOG_FILE.to_string(), value: DEFAULT_LOG_FILE.to_string() };
    let log_level : Setting<String> = Setting { name: SETTING_LOG_LEVEL.to_string(), value: DEFAULT_LOG_LEVEL.to_string() };
    let opponent_count : Setting<u32> = Setting { name: SETTING_OPPONENT_COUNT.to_string(), value: DEFAULT_OPPONENT_COUNT };
    let pause : Setting<bool> = Setting { name: SETTING_PAUSE.to_string(), value: true };
    Settings { bool_settings: vec![pause], string_settings: vec![rng_seed, log_file, log_level], u32_settings: vec![opponent_count] }
}
