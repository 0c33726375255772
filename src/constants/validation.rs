use lazy_static::lazy_static;
use regex::Regex;

pub const MAX_DEVICE_ID_LENGTH: usize = 128;

// Regex for validating device ids, which also become storage keys and file names
lazy_static! {
    pub static ref ID_REGEX: Regex = Regex::new(r"^[a-zA-Z0-9-_]+$").unwrap();
}
