use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Parser, Debug)]
#[command(name = "shobdokosh")]
#[command(about = "Runs the shobdokosh vocabulary service", long_about = None)]
pub struct Cli {
    /// Directory holding the JSON store files (words.json, saved_words.json,
    /// sentences.json) and the optional seeds.json.
    #[arg(short = 'd', long = "data-dir", default_value = ".")]
    pub data_dir: PathBuf,

    #[arg(short = 'p', long = "port", default_value_t = DEFAULT_PORT)]
    pub port: u16,
}
