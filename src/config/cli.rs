use crate::core::{ConfigProvider, ErrorPolicy, OutputFormat};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "basic-ops")]
#[command(about = "Greeting, subtraction and division from the command line")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit log lines as JSON")]
    pub json_logs: bool,

    #[arg(long, global = true, value_enum, help = "Output format (overrides the batch file)")]
    pub format: Option<OutputFormat>,

    #[arg(long, global = true, help = "Report division by zero as an error")]
    pub strict: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print "Hello, NAME!"
    Greet { name: String },

    /// Print A - B
    #[command(allow_negative_numbers = true)]
    Subtract { a: f64, b: f64 },

    /// Print X / Y
    #[command(allow_negative_numbers = true)]
    Divide { x: f64, y: f64 },

    /// Run every operation listed in a TOML batch file
    Batch {
        /// Path to the batch file
        #[arg(short, long, default_value = "ops.toml")]
        config: String,
    },
}

impl ConfigProvider for CliConfig {
    fn strict_division(&self) -> bool {
        self.strict
    }

    fn on_error(&self) -> ErrorPolicy {
        ErrorPolicy::Abort
    }

    fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}
