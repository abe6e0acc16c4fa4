//! Writes the kick-off meeting deck to a `.pptx` file.
//!
//! ```sh
//! kickoff-deck                      # writes Kickoff_Presentation.pptx
//! kickoff-deck -o out/deck.pptx
//! RUST_LOG=debug kickoff-deck       # per-slide and per-part logging
//! ```

use clap::Parser;
use kickoff_deck::kickoff::{self, OUTPUT_FILE};
use std::path::PathBuf;

/// Generate the 서서울문화플라자 design competition kick-off presentation
#[derive(Parser, Debug)]
#[command(name = "kickoff-deck", version)]
struct Args {
    /// Where to write the presentation
    #[arg(short, long, value_name = "PATH", env = "KICKOFF_DECK_OUTPUT", default_value = OUTPUT_FILE)]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let pres = kickoff::build_presentation()?;
    pres.save(&args.output)?;

    println!("Presentation created successfully!");
    Ok(())
}
