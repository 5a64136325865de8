//! Collect command implementation
//!
//! Prints the property map built from the process environment.

use crate::cli::OutputFormat;
use crate::core::EnvironmentPropertySource;
use crate::domain::{PropertyMap, SlotName};
use clap::Args;
use std::str::FromStr;

const MASK: &str = "********";

/// Arguments for the collect command
#[derive(Args, Debug)]
pub struct CollectArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print credential slots in clear text
    #[arg(long)]
    pub show_secrets: bool,
}

impl CollectArgs {
    /// Execute the collect command
    pub fn execute(&self) -> anyhow::Result<i32> {
        let props = EnvironmentPropertySource::from_env().collect();
        tracing::info!(property_count = props.len(), "Collected slot properties");

        let props = if self.show_secrets {
            props
        } else {
            mask_sensitive(props)
        };

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&props)?),
            OutputFormat::Text => {
                for (name, value) in props.iter() {
                    println!("{name}={value}");
                }
            }
        }

        Ok(0)
    }
}

/// Replace the values of credential slots with a fixed mask
pub fn mask_sensitive(props: PropertyMap) -> PropertyMap {
    props
        .into_iter()
        .map(|(name, value)| match SlotName::from_str(&name) {
            Ok(slot) if slot.is_sensitive() => (name, MASK.to_string()),
            _ => (name, value),
        })
        .collect()
}
