use crate::dispatcher::Action;
use crate::error::{ActionError, Result};
use crate::log::LogSink;
use crate::params::{ParamSpec, TypedParams};
use crate::types::Payload;

/// Tells a few fortunes, unless asked to fail.
pub struct ComboAction {
    fortune: String,
    count: u32,
}

impl ComboAction {
    pub fn new(fortune: &str, count: u32) -> Self {
        Self {
            fortune: fortune.to_string(),
            count,
        }
    }
}

impl Action for ComboAction {
    fn name(&self) -> &str {
        "combo"
    }

    fn description(&self) -> &str {
        "Tell a few fortunes, or fail on request"
    }

    fn params(&self) -> Vec<ParamSpec> {
        vec![
            ParamSpec::boolean("should-fail", "Fail instead of telling fortunes")
                .with_default(false),
        ]
    }

    fn call(&self, params: &TypedParams, log: &mut dyn LogSink) -> Result<Option<Payload>> {
        if params.bool("should-fail").unwrap_or(false) {
            return Err(ActionError::Failed("As you requested!".to_string()));
        }
        for _ in 0..self.count {
            log.log(&self.fortune)?;
        }
        let mut payload = Payload::new();
        payload.insert("fortunes-told".to_string(), self.count.to_string());
        Ok(Some(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::test_support::run;

    fn combo() -> ComboAction {
        ComboAction::new("favours the brave", 3)
    }

    #[test]
    fn tells_fortunes_by_default() {
        let (result, log) = run(&combo(), &[]);
        let payload = result.unwrap().unwrap();
        assert_eq!(payload["fortunes-told"], "3");
        assert_eq!(log.lines(), vec!["favours the brave"; 3]);
    }

    #[test]
    fn should_fail_true_fails_without_logging() {
        let (result, log) = run(&combo(), &[("should-fail", true.into())]);
        let err = result.unwrap_err();
        assert!(matches!(err, ActionError::Failed(_)));
        assert_eq!(err.to_string(), "As you requested!");
        assert!(log.is_empty());
    }

    #[test]
    fn should_fail_false_succeeds() {
        let (result, _) = run(&combo(), &[("should-fail", false.into())]);
        assert!(result.unwrap().is_some());
    }

    #[test]
    fn should_fail_string_is_coerced() {
        let (result, _) = run(&combo(), &[("should-fail", "true".into())]);
        assert!(result.is_err());
    }

    #[test]
    fn should_fail_rejects_non_boolean() {
        let (result, _) = run(&combo(), &[("should-fail", "maybe".into())]);
        assert!(matches!(result, Err(ActionError::InvalidParameter { .. })));
    }
}
