use anyhow::{Result, bail};
use serde_json::json;
use std::path::PathBuf;
use veil_core::RedactionResult;
use veil_engine::Redactor;

pub fn handle(redactor: &Redactor, path: Option<PathBuf>, json: bool, strict: bool) -> Result<()> {
    let input = match &path {
        Some(path) => std::fs::read_to_string(path)?,
        None => std::io::read_to_string(std::io::stdin())?,
    };

    let result = redactor.redact_text(&input);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", result.redacted_text);
        summarize(&result);
    }

    if strict && !result.is_compliant() {
        bail!(
            "{} compliance violation(s) remain after redaction",
            result.compliance_violations.len()
        );
    }

    Ok(())
}

pub fn batch(redactor: &Redactor, paths: Vec<PathBuf>) -> Result<()> {
    let mut texts = Vec::with_capacity(paths.len());
    for path in &paths {
        texts.push(std::fs::read_to_string(path)?);
    }

    let results = redactor.batch_redact(&texts);
    let report: Vec<_> = paths
        .iter()
        .zip(results)
        .map(|(path, result)| {
            json!({
                "path": path.display().to_string(),
                "result": result,
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn summarize(result: &RedactionResult) {
    eprintln!();
    eprintln!(
        "✓ {} redaction(s), risk score {:.2} ({:.2} ms)",
        result.total_redactions(),
        result.risk_score,
        result.processing_time_ms
    );
    for (rule, count) in &result.redactions_made {
        eprintln!("  {}: {}", rule, count);
    }
    for violation in &result.compliance_violations {
        eprintln!("⚠ {}", violation);
    }
}
