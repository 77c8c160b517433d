//! Name-based dispatch of action invocations.
//!
//! The [`Dispatcher`] owns a fixed table of actions built once at startup.
//! `invoke` resolves the name, validates the parameters against the action's
//! declared schema, runs the handler with the caller's log sink, and folds
//! every outcome (including dispatcher-level errors) into an [`ActionResult`].

use crate::actions;
use crate::config::Config;
use crate::error::{ActionError, Result};
use crate::log::LogSink;
use crate::params::{self, ParamSpec, TypedParams};
use crate::types::{ActionRequest, ActionResult, FailureKind, Params, Payload};
use std::collections::BTreeMap;

pub trait Action: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;

    fn params(&self) -> Vec<ParamSpec> {
        Vec::new()
    }

    fn schema(&self) -> serde_json::Value {
        params::schema(&self.params())
    }

    /// Run the action. `Err(ActionError::Failed(..))` is a deliberate failure.
    fn call(&self, params: &TypedParams, log: &mut dyn LogSink) -> Result<Option<Payload>>;
}

pub struct Dispatcher {
    actions: BTreeMap<String, Box<dyn Action>>,
}

impl Dispatcher {
    pub fn new(config: &Config) -> Self {
        Self::with_actions(actions::all_actions(config))
    }

    pub fn with_actions(list: Vec<Box<dyn Action>>) -> Self {
        let actions = list
            .into_iter()
            .map(|a| (a.name().to_string(), a))
            .collect();
        Self { actions }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.actions.keys().map(String::as_str)
    }

    pub fn actions(&self) -> impl Iterator<Item = &dyn Action> {
        self.actions.values().map(|a| &**a)
    }

    pub fn get(&self, name: &str) -> Option<&dyn Action> {
        self.actions.get(name).map(|a| &**a)
    }

    /// Invoke an action, keeping dispatcher errors as `Err`.
    pub fn try_invoke(
        &self,
        name: &str,
        params: &Params,
        log: &mut dyn LogSink,
    ) -> Result<Option<Payload>> {
        let action = self
            .get(name)
            .ok_or_else(|| ActionError::UnknownAction(name.to_string()))?;
        let typed = params::validate(&action.params(), params)?;
        action.call(&typed, log)
    }

    /// Invoke an action and report its terminal outcome.
    pub fn invoke(&self, name: &str, params: &Params, log: &mut dyn LogSink) -> ActionResult {
        tracing::debug!(action = name, params = params.len(), "invoking action");
        let result = match self.try_invoke(name, params, log) {
            Ok(payload) => ActionResult::success(payload),
            Err(e) => ActionResult::failure(failure_kind(&e), e.to_string()),
        };
        tracing::debug!(action = name, status = %result.status, "action finished");
        result
    }

    pub fn invoke_request(&self, request: &ActionRequest, log: &mut dyn LogSink) -> ActionResult {
        self.invoke(&request.name, &request.params, log)
    }
}

fn failure_kind(err: &ActionError) -> FailureKind {
    match err {
        ActionError::Failed(_) => FailureKind::Requested,
        ActionError::UnknownAction(_) => FailureKind::UnknownAction,
        ActionError::InvalidParameter { .. } => FailureKind::InvalidParameter,
        _ => FailureKind::Internal,
    }
}
