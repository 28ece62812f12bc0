use clap::Parser;
use std::path::PathBuf;

use crate::config::MenuConfig;

#[derive(Parser, Debug)]
#[command(name = "overlay-menu", about = "Windowed overlay menu demo")]
pub struct Cli {
    /// Path to a JSON config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Rows visible in the top-level menu
    #[arg(long)]
    pub top_capacity: Option<usize>,

    /// Rows visible in nested lists
    #[arg(long)]
    pub nested_capacity: Option<usize>,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config
    pub fn apply(&self, config: &mut MenuConfig) {
        if let Some(capacity) = self.top_capacity {
            config.top_capacity = capacity;
        }
        if let Some(capacity) = self.nested_capacity {
            config.nested_capacity = capacity;
        }
    }
}
