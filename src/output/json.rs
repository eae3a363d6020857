//! JSON output formatting

use std::io;

use crate::tree::TreeResult;

/// Serialize the result as pretty-printed JSON.
pub fn to_json(result: &TreeResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

/// Print the result as pretty-printed JSON to stdout.
pub fn print_json(result: &TreeResult) -> io::Result<()> {
    let json = to_json(result).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
