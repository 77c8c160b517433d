use crate::output::{print_json, print_table};
use std::path::Path;

pub fn run(config_path: &Path, json: bool) -> anyhow::Result<()> {
    let dispatcher = super::load_dispatcher(config_path)?;

    if json {
        let items: Vec<serde_json::Value> = dispatcher
            .actions()
            .map(|a| {
                serde_json::json!({
                    "name": a.name(),
                    "description": a.description(),
                })
            })
            .collect();
        print_json(&items)?;
    } else {
        let rows = dispatcher
            .actions()
            .map(|a| vec![a.name().to_string(), a.description().to_string()])
            .collect();
        print_table(&["NAME", "DESCRIPTION"], rows);
    }
    Ok(())
}
