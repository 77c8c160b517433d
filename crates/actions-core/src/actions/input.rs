use crate::dispatcher::Action;
use crate::error::Result;
use crate::log::LogSink;
use crate::params::{ParamSpec, TypedParams};
use crate::types::Payload;

pub struct InputAction;

impl Action for InputAction {
    fn name(&self) -> &str {
        "input"
    }

    fn description(&self) -> &str {
        "Echo the given argument to the action log"
    }

    fn params(&self) -> Vec<ParamSpec> {
        vec![ParamSpec::string("arg", "Text to echo")]
    }

    fn call(&self, params: &TypedParams, log: &mut dyn LogSink) -> Result<Option<Payload>> {
        if let Some(arg) = params.str("arg") {
            tracing::info!("The 'input' action says: {arg}");
            log.log(arg)?;
        }
        Ok(None)
    }
}
