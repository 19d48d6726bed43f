use anyhow::Result;
use std::path::Path;
use veil_engine::Redactor;

pub fn list(redactor: &Redactor, all: bool) -> Result<()> {
    println!("Level: {}", redactor.level());

    if all {
        let rules = redactor.rules();
        println!("Rules ({}):", rules.len());
        for info in rules {
            let state = match (info.rule.enabled, info.compiled) {
                (true, true) => "active",
                (true, false) => "invalid",
                (false, _) => "disabled",
            };
            println!(
                "  [{}] {} (priority: {}, {:?})",
                state, info.rule.name, info.rule.priority, info.origin
            );
        }
        return Ok(());
    }

    let active = redactor.active_rules();
    if active.is_empty() {
        println!("No active rules.");
        return Ok(());
    }

    println!("Active rules ({}), in application order:", active.len());
    for rule in active.iter().map(|a| &a.rule) {
        let standards: Vec<String> = rule
            .compliance_standards
            .iter()
            .map(|s| s.to_string())
            .collect();
        println!("  {} (priority: {})", rule.name, rule.priority);
        println!("    Pattern: {}", rule.pattern);
        if !standards.is_empty() {
            println!("    Standards: {}", standards.join(", "));
        }
    }

    Ok(())
}

pub fn export(redactor: &Redactor, path: &Path) -> Result<()> {
    redactor.export_config(path)?;

    println!("✓ Exported rules to {}", path.display());
    println!("  Level: {}", redactor.level());
    Ok(())
}
