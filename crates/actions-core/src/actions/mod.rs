use crate::config::Config;
use crate::dispatcher::Action;

pub mod bad;
pub mod combo;
pub mod input;
pub mod logger;
pub mod multi_input;
pub mod output;
pub mod simple;

pub fn all_actions(config: &Config) -> Vec<Box<dyn Action>> {
    vec![
        Box::new(simple::SimpleAction),
        Box::new(input::InputAction),
        Box::new(multi_input::MultiInputAction),
        Box::new(output::OutputAction::new(&config.fortune.text)),
        Box::new(logger::LoggerAction::new(
            config.logger.steps,
            config.logger.interval(),
        )),
        Box::new(bad::BadAction),
        Box::new(combo::ComboAction::new(&config.fortune.text, config.combo.count)),
    ]
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::dispatcher::Action;
    use crate::error::Result;
    use crate::log::MemoryLog;
    use crate::params;
    use crate::types::{ParamValue, Params, Payload};

    /// Validate `pairs` against the action's schema, then call it.
    pub fn run(
        action: &dyn Action,
        pairs: &[(&str, ParamValue)],
    ) -> (Result<Option<Payload>>, MemoryLog) {
        let raw: Params = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        let mut log = MemoryLog::new();
        let result = params::validate(&action.params(), &raw)
            .and_then(|typed| action.call(&typed, &mut log));
        (result, log)
    }
}
