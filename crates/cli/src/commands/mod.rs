pub(crate) mod directory;
pub(crate) mod reminders;
pub(crate) mod serve;

use anyhow::Result;
use serde::Serialize;

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
