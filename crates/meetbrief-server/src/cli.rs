//! `meetbrief summarize`: one-shot brief from a file or stdin.

use std::io::Read;
use std::path::Path;

use meetbrief_runtime::Orchestrator;

/// Read a transcript from `source`, where `-` means stdin.
pub fn read_transcript(source: &str) -> meetbrief_core::Result<String> {
    if source == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(std::fs::read_to_string(Path::new(source))?)
    }
}

/// Pretty-printed brief JSON for `transcript`.
pub fn render_brief(orchestrator: &Orchestrator, transcript: &str) -> meetbrief_core::Result<String> {
    let result = orchestrator.brief(transcript)?;
    Ok(serde_json::to_string_pretty(&result)?)
}

/// Read `source` and render its brief.
pub fn summarize_source(orchestrator: &Orchestrator, source: &str) -> anyhow::Result<String> {
    let transcript = read_transcript(source)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", source, e))?;
    Ok(render_brief(orchestrator, &transcript)?)
}
