extern crate hesc;

use clap::Parser;
use hesc::output::FileOutput;
use hesc::run_project;
use std::ffi::OsStr;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Default, Debug)]
#[clap(author, version, about, long_about = None)]
struct HescArgs {
    /// Path to a household JSON file
    input_file: String,
    /// Indent the report for reading rather than transport
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    let args = HescArgs::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    let input_file = args.input_file.as_str();
    let input_file_ext = Path::new(input_file).extension().and_then(OsStr::to_str);
    let input_file_stem = match input_file_ext {
        Some(ext) => &input_file[..(input_file.len() - ext.len() - 1)],
        None => input_file,
    };

    let file_output = FileOutput::new(PathBuf::new(), input_file_stem.to_owned());

    run_project(
        BufReader::new(File::open(Path::new(input_file))?),
        file_output,
        args.pretty,
    )?;

    info!("savings report written to {input_file_stem}_savings.json");

    Ok(())
}
