use crate::dispatcher::Action;
use crate::error::{ActionError, Result};
use crate::log::LogSink;
use crate::params::TypedParams;
use crate::types::Payload;

pub struct BadAction;

impl Action for BadAction {
    fn name(&self) -> &str {
        "bad"
    }

    fn description(&self) -> &str {
        "Fail, every time"
    }

    fn call(&self, _params: &TypedParams, _log: &mut dyn LogSink) -> Result<Option<Payload>> {
        Err(ActionError::Failed(
            "Sorry, I just couldn't manage it.".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::test_support::run;

    #[test]
    fn bad_fails_every_time() {
        for _ in 0..3 {
            let (result, log) = run(&BadAction, &[]);
            let err = result.unwrap_err();
            assert_eq!(err.to_string(), "Sorry, I just couldn't manage it.");
            assert!(log.is_empty());
        }
    }
}
