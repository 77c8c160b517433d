use crate::output::print_json;
use actions_core::log::{MemoryLog, WriterLog};
use actions_core::{ActionResult, ParamValue, Params};
use anyhow::Context;
use std::path::Path;

pub fn run(
    config_path: &Path,
    name: &str,
    assignments: &[String],
    params_json: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let dispatcher = super::load_dispatcher(config_path)?;
    let params = build_params(assignments, params_json)?;

    let result = if json {
        let mut log = MemoryLog::new();
        let result = dispatcher.invoke(name, &params, &mut log);
        print_json(&serde_json::json!({
            "action": name,
            "result": result,
            "log": log.entries(),
        }))?;
        result
    } else {
        let mut log = WriterLog::new(std::io::stdout());
        let result = dispatcher.invoke(name, &params, &mut log);
        print_result(&result);
        result
    };

    if !result.is_success() {
        anyhow::bail!(
            "action '{name}' failed: {}",
            result.message.as_deref().unwrap_or("no message")
        );
    }
    Ok(())
}

fn print_result(result: &ActionResult) {
    match result.kind {
        Some(kind) => println!("status: {} ({kind})", result.status),
        None => println!("status: {}", result.status),
    }
    if let Some(message) = &result.message {
        println!("message: {message}");
    }
    if let Some(payload) = &result.payload {
        for (key, value) in payload {
            println!("{key}: {value}");
        }
    }
}

/// Merge `--params` JSON with `--param KEY=VALUE` overrides.
///
/// Values given as `KEY=VALUE` stay strings; the dispatcher coerces them to
/// the declared parameter type.
fn build_params(assignments: &[String], params_json: Option<&str>) -> anyhow::Result<Params> {
    let mut params = match params_json {
        Some(raw) => serde_json::from_str::<Params>(raw)
            .context("--params must be a JSON object of string, integer, or boolean values")?,
        None => Params::new(),
    };
    for assignment in assignments {
        let (key, value) = parse_assignment(assignment)?;
        params.insert(key, value);
    }
    Ok(params)
}

fn parse_assignment(raw: &str) -> anyhow::Result<(String, ParamValue)> {
    let (key, value) = raw
        .split_once('=')
        .with_context(|| format!("invalid parameter '{raw}': expected KEY=VALUE"))?;
    if key.is_empty() {
        anyhow::bail!("invalid parameter '{raw}': empty key");
    }
    Ok((key.to_string(), ParamValue::Str(value.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_splits_on_first_equals() {
        let (key, value) = parse_assignment("arg=a=b").unwrap();
        assert_eq!(key, "arg");
        assert_eq!(value, ParamValue::Str("a=b".into()));
    }

    #[test]
    fn assignment_without_equals_errors() {
        let err = parse_assignment("arg").unwrap_err();
        assert!(err.to_string().contains("expected KEY=VALUE"));
    }

    #[test]
    fn assignment_with_empty_key_errors() {
        assert!(parse_assignment("=value").is_err());
    }

    #[test]
    fn assignments_override_json() {
        let params = build_params(
            &["arg2=9".to_string()],
            Some(r#"{"arg1": "x", "arg2": 5}"#),
        )
        .unwrap();
        assert_eq!(params["arg1"], ParamValue::Str("x".into()));
        assert_eq!(params["arg2"], ParamValue::Str("9".into()));
    }

    #[test]
    fn json_params_keep_their_types() {
        let params = build_params(&[], Some(r#"{"should-fail": true}"#)).unwrap();
        assert_eq!(params["should-fail"], ParamValue::Bool(true));
    }

    #[test]
    fn non_object_json_errors() {
        assert!(build_params(&[], Some("[1, 2]")).is_err());
    }
}
