//! `actions-demo serve`: a JSON-lines invocation loop on stdin/stdout.
//!
//! Each request is one line: `{"id": .., "method": .., "params": {..}}`.
//! Methods are `list`, `describe` (`{"name"}`) and `invoke`
//! (`{"name", "params"}`). While an invocation runs, every log line is written
//! immediately as `{"id": .., "log": ".."}`; the terminal response follows as
//! `{"id": .., "result": <ActionResult>}`. Log lines are also mirrored to
//! `tracing` so they show up in the server's own stderr log.

use actions_core::log::{LogSink, Tee, TracingLog};
use actions_core::{ActionRequest, Dispatcher};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::{BufRead, Write};
use std::path::Path;

// ---------------------------------------------------------------------------
// Protocol types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct Response {
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ProtocolError>,
}

#[derive(Debug, Serialize)]
pub struct ProtocolError {
    pub code: i32,
    pub message: String,
}

#[derive(Debug, Serialize)]
struct LogLine<'a> {
    id: &'a Option<Value>,
    log: &'a str,
}

impl Response {
    fn ok(id: Option<Value>, result: Value) -> Self {
        Self {
            id,
            result: Some(result),
            error: None,
        }
    }

    fn err(id: Option<Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            id,
            result: None,
            error: Some(ProtocolError {
                code,
                message: message.into(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Server loop
// ---------------------------------------------------------------------------

pub fn run(config_path: &Path) -> anyhow::Result<()> {
    let dispatcher = super::load_dispatcher(config_path)?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    tracing::info!("serving actions on stdin/stdout");
    serve(&dispatcher, stdin.lock(), &mut stdout.lock())
}

pub fn serve<R: BufRead, W: Write>(
    dispatcher: &Dispatcher,
    input: R,
    out: &mut W,
) -> anyhow::Result<()> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Value>(&line) {
            Err(e) => Response::err(None, -32700, format!("parse error: {e}")),
            Ok(raw) => {
                let id = raw.get("id").cloned();
                match serde_json::from_value::<Request>(raw) {
                    Err(e) => Response::err(id, -32600, format!("invalid request: {e}")),
                    Ok(request) => handle_request(&request, dispatcher, out)?,
                }
            }
        };

        write_line(out, &response)?;
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Request dispatch
// ---------------------------------------------------------------------------

pub fn handle_request<W: Write>(
    req: &Request,
    dispatcher: &Dispatcher,
    out: &mut W,
) -> anyhow::Result<Response> {
    let id = req.id.clone();
    let response = match req.method.as_str() {
        "list" => {
            let actions: Vec<Value> = dispatcher
                .actions()
                .map(|a| {
                    serde_json::json!({
                        "name": a.name(),
                        "description": a.description(),
                        "params": a.schema(),
                    })
                })
                .collect();
            Response::ok(id, serde_json::json!({ "actions": actions }))
        }

        "describe" => {
            let name = req
                .params
                .as_ref()
                .and_then(|p| p.get("name"))
                .and_then(Value::as_str);
            match name {
                None => Response::err(id, -32602, "missing action name in params"),
                Some(name) => match dispatcher.get(name) {
                    None => Response::err(id, -32602, format!("unknown action: {name}")),
                    Some(action) => Response::ok(
                        id,
                        serde_json::json!({
                            "name": action.name(),
                            "description": action.description(),
                            "params": action.schema(),
                        }),
                    ),
                },
            }
        }

        "invoke" => {
            let Some(params) = req.params.clone() else {
                return Ok(Response::err(id, -32602, "missing params"));
            };
            let request: ActionRequest = match serde_json::from_value(params) {
                Ok(r) => r,
                Err(e) => return Ok(Response::err(id, -32602, format!("invalid params: {e}"))),
            };

            let mut log = Tee(StreamLog { id: &id, out }, TracingLog);
            let result = dispatcher.invoke_request(&request, &mut log);
            tracing::info!(action = %request.name, status = %result.status, "invocation complete");
            Response::ok(id, serde_json::to_value(&result)?)
        }

        other => Response::err(id, -32601, format!("method not found: {other}")),
    };
    Ok(response)
}

/// Writes each log line to the client as soon as it is emitted.
struct StreamLog<'a, W: Write> {
    id: &'a Option<Value>,
    out: &'a mut W,
}

impl<W: Write> LogSink for StreamLog<'_, W> {
    fn log(&mut self, line: &str) -> actions_core::Result<()> {
        write_line(self.out, &LogLine { id: self.id, log: line })
            .map_err(|e| std::io::Error::other(e.to_string()).into())
    }
}

fn write_line<W: Write, T: Serialize>(out: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
