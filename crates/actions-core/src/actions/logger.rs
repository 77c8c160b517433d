use crate::dispatcher::Action;
use crate::error::Result;
use crate::log::LogSink;
use crate::params::TypedParams;
use crate::types::Payload;
use std::time::Duration;

/// Simulates slow work: counts up to `steps`, pausing between lines.
pub struct LoggerAction {
    steps: u32,
    interval: Duration,
}

impl LoggerAction {
    pub fn new(steps: u32, interval: Duration) -> Self {
        Self { steps, interval }
    }
}

impl Action for LoggerAction {
    fn name(&self) -> &str {
        "logger"
    }

    fn description(&self) -> &str {
        "Do nothing slowly, logging progress along the way"
    }

    fn call(&self, _params: &TypedParams, log: &mut dyn LogSink) -> Result<Option<Payload>> {
        for i in 1..=self.steps {
            if i > 1 {
                std::thread::sleep(self.interval);
            }
            log.log(&format!("I'm counting to {}: {i}", self.steps))?;
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::test_support::run;

    #[test]
    fn counts_every_step() {
        let action = LoggerAction::new(4, Duration::from_millis(1));
        let (result, log) = run(&action, &[]);
        assert!(result.unwrap().is_none());
        assert_eq!(
            log.lines(),
            vec![
                "I'm counting to 4: 1",
                "I'm counting to 4: 2",
                "I'm counting to 4: 3",
                "I'm counting to 4: 4",
            ]
        );
    }

    #[test]
    fn pauses_between_lines() {
        let action = LoggerAction::new(3, Duration::from_millis(30));
        let started = std::time::Instant::now();
        let (_, log) = run(&action, &[]);
        assert!(started.elapsed() >= Duration::from_millis(60));
        let entries = log.entries();
        assert!(entries[2].at - entries[0].at >= chrono::Duration::milliseconds(60));
    }

    #[test]
    fn zero_steps_returns_immediately() {
        let action = LoggerAction::new(0, Duration::from_secs(60));
        let (result, log) = run(&action, &[]);
        assert!(result.is_ok());
        assert!(log.is_empty());
    }
}
