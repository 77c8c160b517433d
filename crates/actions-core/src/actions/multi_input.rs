use crate::dispatcher::Action;
use crate::error::Result;
use crate::log::LogSink;
use crate::params::{ParamSpec, TypedParams};
use crate::types::Payload;

pub struct MultiInputAction;

impl Action for MultiInputAction {
    fn name(&self) -> &str {
        "multi-input"
    }

    fn description(&self) -> &str {
        "Echo a string and an integer to the action log"
    }

    fn params(&self) -> Vec<ParamSpec> {
        vec![
            ParamSpec::string("arg1", "Text to echo"),
            ParamSpec::integer("arg2", "Number to echo"),
        ]
    }

    fn call(&self, params: &TypedParams, log: &mut dyn LogSink) -> Result<Option<Payload>> {
        if let Some(arg1) = params.str("arg1") {
            tracing::info!("The 'multi-input' action says: {arg1}");
            log.log(arg1)?;
        }
        if let Some(arg2) = params.int("arg2") {
            tracing::info!("The 'multi-input' action says: {arg2}");
            log.log(&arg2.to_string())?;
        }
        Ok(None)
    }
}
