//! CLI arguments

use clap::Parser;
use std::path::PathBuf;

/// Generate a JSON Schema from YAML values files
#[derive(Parser, Debug)]
#[command(name = "valschema")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input YAML file path or http(s) URL (repeatable, merged in order)
    #[arg(short, long, required = true)]
    pub input: Vec<String>,

    /// Output file for the generated schema
    #[arg(short, long, default_value = "values.schema.json")]
    pub output: PathBuf,

    /// JSON Schema draft version (4, 6, 7, 2019 or 2020)
    #[arg(short, long, default_value_t = 2020)]
    pub draft: u32,

    /// Number of spaces per indentation level (even, at least 2)
    #[arg(long, default_value_t = 4)]
    pub indent: usize,

    /// Schema root title
    #[arg(long)]
    pub title: Option<String>,

    /// Schema root description
    #[arg(long)]
    pub description: Option<String>,

    /// Schema root $id
    #[arg(long)]
    pub id: Option<String>,

    /// additionalProperties for the root object only
    #[arg(long, value_name = "BOOL")]
    pub root_additional_properties: Option<bool>,

    /// additionalProperties applied to every nested object
    #[arg(long, value_name = "BOOL")]
    pub additional_properties: Option<bool>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
