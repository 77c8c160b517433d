use crate::output::{print_json, print_table};
use actions_core::ActionError;
use std::path::Path;

pub fn run(config_path: &Path, name: &str, json: bool) -> anyhow::Result<()> {
    let dispatcher = super::load_dispatcher(config_path)?;
    let action = dispatcher
        .get(name)
        .ok_or_else(|| ActionError::UnknownAction(name.to_string()))?;

    if json {
        print_json(&serde_json::json!({
            "name": action.name(),
            "description": action.description(),
            "params": action.schema(),
        }))?;
        return Ok(());
    }

    println!("{}: {}", action.name(), action.description());
    let specs = action.params();
    if specs.is_empty() {
        println!("No parameters.");
        return Ok(());
    }
    println!();
    let rows = specs
        .iter()
        .map(|s| {
            vec![
                s.name.to_string(),
                s.kind.as_str().to_string(),
                s.default
                    .as_ref()
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "-".to_string()),
                s.description.to_string(),
            ]
        })
        .collect();
    print_table(&["PARAM", "TYPE", "DEFAULT", "DESCRIPTION"], rows);
    Ok(())
}
