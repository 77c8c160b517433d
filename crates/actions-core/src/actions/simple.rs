use crate::dispatcher::Action;
use crate::error::Result;
use crate::log::LogSink;
use crate::params::TypedParams;
use crate::types::Payload;

pub struct SimpleAction;

impl Action for SimpleAction {
    fn name(&self) -> &str {
        "simple"
    }

    fn description(&self) -> &str {
        "Do nothing, successfully"
    }

    fn call(&self, _params: &TypedParams, _log: &mut dyn LogSink) -> Result<Option<Payload>> {
        tracing::info!("Hello from the 'simple' action!");
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::test_support::run;

    #[test]
    fn simple_has_no_output() {
        let (result, log) = run(&SimpleAction, &[]);
        assert!(result.unwrap().is_none());
        assert!(log.is_empty());
    }

    #[test]
    fn simple_declares_no_params() {
        assert!(SimpleAction.params().is_empty());
        assert_eq!(SimpleAction.schema()["properties"], serde_json::json!({}));
    }
}
