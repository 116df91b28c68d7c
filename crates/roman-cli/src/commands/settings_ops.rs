use std::path::Path;
use std::process;

use crate::settings::{self, init_custom, parse_settings_toml, read_settings_file};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Install a settings file for this run. Must precede any `settings()` call.
pub fn settings_install(file: &str) {
    let content = die!(read_settings_file(Path::new(file)), "Error: {}");
    die!(init_custom(content), "Error in {file}: {}");
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(read_settings_file(Path::new(file)), "Error: {}");
    let s = die!(parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: output.format={:?}, output.lowercase={}, log.filter={}",
        s.output.format, s.output.lowercase, s.log.filter
    );
}
