use crate::dispatcher::Action;
use crate::error::Result;
use crate::log::LogSink;
use crate::params::TypedParams;
use crate::types::Payload;

pub struct OutputAction {
    fortune: String,
}

impl OutputAction {
    pub fn new(fortune: &str) -> Self {
        Self {
            fortune: fortune.to_string(),
        }
    }
}

impl Action for OutputAction {
    fn name(&self) -> &str {
        "output"
    }

    fn description(&self) -> &str {
        "Say something friendly back to the caller"
    }

    fn call(&self, _params: &TypedParams, _log: &mut dyn LogSink) -> Result<Option<Payload>> {
        let mut payload = Payload::new();
        payload.insert("fortune".to_string(), self.fortune.clone());
        Ok(Some(payload))
    }
}
