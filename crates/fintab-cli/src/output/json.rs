use fintab_core::assemble::DocumentTables;
use fintab_core::error::FintabError;

pub fn print(doc: &DocumentTables) -> Result<(), FintabError> {
    let json = serde_json::to_string_pretty(doc)?;
    println!("{json}");
    Ok(())
}
