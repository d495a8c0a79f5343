use anyhow::Result;
use std::io::Read;

/// Read a raw model reply from stdin and print how it splits into an outline.
pub(crate) fn run() -> Result<()> {
    let mut reply = String::new();
    std::io::stdin().read_to_string(&mut reply)?;
    let outline = outliner_llm::parse_outline(&reply);
    if !outline.is_complete() {
        tracing::warn!("reply has no thesis or no points; the server would reject it");
    }
    println!("{}", serde_json::to_string_pretty(&outline)?);
    Ok(())
}
