//! Flatten command implementation
//!
//! Shows how a raw custom slot value expands, which is handy when composing
//! a value for the platform console.

use crate::cli::OutputFormat;
use crate::core::flatten::flatten;
use clap::Args;

/// Arguments for the flatten command
#[derive(Args, Debug)]
pub struct FlattenArgs {
    /// Raw slot value, e.g. "db.url=jdbc:h2:mem, profiles.active=dev|local"
    pub raw: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl FlattenArgs {
    /// Execute the flatten command
    pub fn execute(&self) -> anyhow::Result<i32> {
        let props = flatten(&self.raw);
        tracing::debug!(property_count = props.len(), "Flattened raw value");

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&props)?),
            OutputFormat::Text => {
                if props.is_empty() {
                    eprintln!("No name=value pairs found");
                }
                for (name, value) in props.iter() {
                    println!("{name}={value}");
                }
            }
        }

        Ok(0)
    }
}
