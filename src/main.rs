//! Binary entry point: bring up logging, open the meal archive (or the sample
//! meals on first launch), and print the list.
use food_tracker::{RecordStore, MAX_RATING};

/// Returning a `Result` bubbles up fatal start-up problems, such as a missing
/// home directory, to the terminal.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let store = RecordStore::open_default()?;
    for (position, record) in store.records().iter().enumerate() {
        println!("{:>3}. {} ({}/{})", position + 1, record, record.rating(), MAX_RATING);
    }

    Ok(())
}
