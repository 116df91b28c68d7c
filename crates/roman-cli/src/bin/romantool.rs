use clap::{Parser, Subcommand};

use roman_cli::commands::{convert_ops, settings_ops};
use roman_cli::logging::init_tracing;
use roman_cli::settings::{settings, OutputFormat};
use roman_core::Number;

#[derive(Parser)]
#[command(name = "romantool", about = "Roman numeral conversion tool")]
struct Cli {
    /// Settings TOML file (defaults to the embedded settings)
    #[arg(long, global = true)]
    config: Option<String>,
    /// Output as JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert an integer (1 to 4999) to a Roman numeral
    #[command(alias = "toRoman")]
    ToRoman {
        /// Integer to convert
        #[arg(allow_hyphen_values = true)]
        number: Number,
    },
    /// Convert a Roman numeral to an integer (case and surrounding whitespace ignored)
    #[command(alias = "toNumber")]
    ToNumber {
        /// Roman numeral
        #[arg(allow_hyphen_values = true)]
        numeral: String,
    },
    /// Check a string against the numeral grammar (exact, case-sensitive)
    #[command(alias = "isValid")]
    IsValid {
        /// Text to check
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Show the place groups and tokens that make up a numeral
    Explain {
        /// Roman numeral
        #[arg(allow_hyphen_values = true)]
        numeral: String,
    },
    /// Print the default settings TOML
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate {
        /// Settings TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(ref path) = cli.config {
        settings_ops::settings_install(path);
    }
    let s = settings();
    init_tracing(&s.log.filter);

    let format = if cli.json {
        OutputFormat::Json
    } else {
        s.output.format
    };

    match cli.command {
        Command::ToRoman { number } => convert_ops::to_roman_cmd(number, format, s.output.lowercase),
        Command::ToNumber { numeral } => convert_ops::to_number_cmd(&numeral, format),
        Command::IsValid { text } => convert_ops::is_valid_cmd(&text, format),
        Command::Explain { numeral } => convert_ops::explain_cmd(&numeral, format),
        Command::SettingsExport => settings_ops::settings_export(),
        Command::SettingsValidate { file } => settings_ops::settings_validate(&file),
    }
}
