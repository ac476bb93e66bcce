//! Command line front end.

use crate::config::{Config, OutputFormat};
use crate::error::SubnetError;
use crate::models::clamp_prefix;
use crate::output;
use crate::processing::{calculate, ChildListing};
use clap::Parser;
use std::error::Error;

/// Shown when no CIDR is given.
pub const EXAMPLE_CIDR: &str = "192.168.1.10/24";

#[derive(Parser, Debug)]
#[command(name = "subnet-calc")]
#[command(about = "IPv4 subnet calculator and visual subnetter.")]
pub struct CommandLine {
    /// Network in CIDR notation, e.g. 10.0.12.34/20
    #[arg(default_value = EXAMPLE_CIDR)]
    pub cidr: String,

    /// Subdivide the network into subnets of this prefix
    #[arg(short, long, allow_hyphen_values = true)]
    pub split: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Only show the subnet itself
    #[arg(long)]
    pub no_children: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// One line describing a failed run, with a usage hint for bad input.
pub fn error_message(err: &(dyn Error + 'static)) -> String {
    match err.downcast_ref::<SubnetError>() {
        Some(SubnetError::MalformedAddress { .. } | SubnetError::MalformedCidr { .. }) => {
            format!("{err}. Please enter a valid IPv4 CIDR notation (e.g., {EXAMPLE_CIDR})")
        }
        _ => err.to_string(),
    }
}

/// Compute and print everything requested on the command line.
pub fn run(commands: &CommandLine, config: &Config) -> Result<(), Box<dyn Error>> {
    let cidr = commands.cidr.trim();
    let facts = calculate(cidr)?;

    let children = if commands.no_children {
        None
    } else {
        let child_prefix = commands
            .split
            .as_deref()
            .map(|raw| clamp_prefix(raw))
            .unwrap_or(config.child_prefix);
        Some(ChildListing::new(facts.network, facts.prefix, child_prefix))
    };

    match commands.format.unwrap_or(config.format) {
        OutputFormat::Terminal => output::print_report(&facts, children.as_ref()),
        OutputFormat::Csv => match &children {
            Some(listing) => output::subnet_print(listing),
            None => {
                for (label, value) in output::facts_rows(&facts) {
                    println!(
                        "{},{}",
                        output::format_field(label, 20),
                        output::format_field(value, 20)
                    );
                }
            }
        },
        OutputFormat::Json => println!("{}", output::to_json(&facts, children.as_ref())?),
    }
    Ok(())
}
