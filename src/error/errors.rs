use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::io;

use log::SetLoggerError;
use log4rs::config::runtime::ConfigErrors;

pub struct GenericError {
    message: String
}

impl Debug for GenericError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Display for GenericError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for GenericError {

}

impl GenericError {
    pub fn new(message: String) -> GenericError {
        GenericError { message }
    }

    pub fn get_message(&self) -> &str {
        &self.message
    }
}

impl From<io::Error> for GenericError {
    fn from(e: io::Error) -> Self {
        GenericError::new(format!("I/O failure: {}", e))
    }
}

impl From<ConfigErrors> for GenericError {
    fn from(e: ConfigErrors) -> Self {
        GenericError::new(format!("Invalid logging configuration: {}", e))
    }
}

impl From<SetLoggerError> for GenericError {
    fn from(e: SetLoggerError) -> Self {
        GenericError::new(format!("Failed to install the logger: {}", e))
    }
}
