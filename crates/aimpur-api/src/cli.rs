//! Command line interface
//!
//! `aimpur` with no subcommand starts the server. `list` and `calc` run the
//! calculators locally without one.

use std::collections::HashMap;
use std::path::PathBuf;

use aimpur_calculator::{Calculator, FactValue};
use anyhow::Context;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "aimpur")]
#[command(about = "Paint, tile, room-size and attendance calculators")]
#[command(version)]
pub struct Cli {
    /// Configuration file (overrides AIMPUR_CONFIG_PATH)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(long)]
        port: Option<u16>,
    },

    /// List calculators and the inputs they accept
    List,

    /// Run one calculation and print the result as JSON
    Calc {
        /// Calculator name, e.g. `paint`
        name: String,

        /// Input as key=value; repeat for each input
        #[arg(short = 'i', long = "input", value_parser = parse_input)]
        inputs: Vec<(String, String)>,
    },
}

pub fn parse_input(raw: &str) -> Result<(String, String), String> {
    let (key, value) =
        raw.split_once('=').ok_or_else(|| format!("expected key=value, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing input name in '{raw}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Inputs are passed as text, exactly as a form would submit them.
pub fn run_calculation(
    calculator: &Calculator,
    name: &str,
    inputs: &[(String, String)],
) -> anyhow::Result<serde_json::Value> {
    let args: HashMap<String, FactValue> = inputs
        .iter()
        .map(|(key, value)| (key.clone(), FactValue::String(value.clone())))
        .collect();
    let result = calculator
        .calculate_owned(name, &args)
        .with_context(|| format!("{name} calculation failed"))?;
    Ok(result.into())
}

/// One block per calculator; required inputs are marked with `*`.
pub fn render_listing(calculator: &Calculator) -> String {
    let mut out = String::new();
    for info in calculator.describe() {
        let inputs: Vec<String> = info
            .fields
            .iter()
            .map(|f| if f.required { format!("{}*", f.name) } else { f.name.to_string() })
            .collect();
        out.push_str(&format!("{:<12} {}\n", info.name, info.description));
        out.push_str(&format!("{:<12} inputs: {}\n", "", inputs.join(", ")));
    }
    out
}
