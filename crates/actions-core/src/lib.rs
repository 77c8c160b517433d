pub mod actions;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod log;
pub mod params;
pub mod types;

pub use dispatcher::{Action, Dispatcher};
pub use error::{ActionError, Result};
pub use log::{LogSink, MemoryLog};
pub use types::{
    ActionRequest, ActionResult, ActionStatus, FailureKind, ParamValue, Params, Payload,
};
