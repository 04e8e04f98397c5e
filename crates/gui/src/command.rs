//! JSON command protocol for scripted control of the scene.

use serde::{Deserialize, Serialize};
use shared::{Dimensions, ShapeKind};

use crate::harness::TestHarness;

fn default_dimension() -> f32 {
    1.0
}

fn default_count() -> usize {
    1
}

/// A command an automated client can execute.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum AgentCommand {
    /// Prepend a group of identical-sized primitives
    AddGroup {
        kind: ShapeKind,
        #[serde(default = "default_dimension")]
        width: f32,
        #[serde(default = "default_dimension")]
        height: f32,
        #[serde(default = "default_dimension")]
        depth: f32,
        #[serde(default = "default_count")]
        count: usize,
    },
    /// Select the record at a store index
    Select { index: i64 },
    /// Remove every primitive.
    Clear,
    /// Inspect the scene: list all primitives.
    Inspect,
}

/// Response from executing a command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl CommandResponse {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
            data: None,
        }
    }

    fn ok_with_data(data: serde_json::Value) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(msg.into()),
            data: None,
        }
    }
}

/// Execute a single command on the harness.
pub fn execute_command(harness: &mut TestHarness, cmd: AgentCommand) -> CommandResponse {
    match cmd {
        AgentCommand::AddGroup {
            kind,
            width,
            height,
            depth,
            count,
        } => {
            let dims = Dimensions { width, height, depth };
            match harness.add_group(kind, dims, count) {
                Ok(range) => CommandResponse::ok_with_data(serde_json::json!({
                    "added": range.len(),
                    "record_count": harness.record_count(),
                })),
                Err(e) => CommandResponse::err(e.to_string()),
            }
        }

        AgentCommand::Select { index } => match harness.select(index) {
            Ok(()) => CommandResponse::ok_with_data(serde_json::json!({ "selected": index })),
            Err(e) => CommandResponse::err(e.to_string()),
        },

        AgentCommand::Clear => {
            harness.clear();
            CommandResponse::ok()
        }

        AgentCommand::Inspect => {
            let selected = harness.store.selected();
            let records: Vec<serde_json::Value> = harness
                .store
                .records()
                .iter()
                .enumerate()
                .map(|(index, record)| {
                    serde_json::json!({
                        "index": index,
                        "id": record.id,
                        "kind": record.kind,
                        "position": record.position,
                        "dimensions": record.dimensions,
                        "color": record.primary_color().to_hex(),
                    })
                })
                .collect();
            CommandResponse::ok_with_data(serde_json::json!({
                "record_count": records.len(),
                "selected": selected,
                "records": records,
            }))
        }
    }
}

/// Parse and execute a single JSON command string.
pub fn execute_json(harness: &mut TestHarness, json: &str) -> Result<CommandResponse, String> {
    let cmd: AgentCommand =
        serde_json::from_str(json).map_err(|e| format!("Invalid command JSON: {e}"))?;
    Ok(execute_command(harness, cmd))
}

/// Parse and execute multiple JSON commands (array).
pub fn execute_json_batch(
    harness: &mut TestHarness,
    json: &str,
) -> Result<Vec<CommandResponse>, String> {
    let cmds: Vec<AgentCommand> =
        serde_json::from_str(json).map_err(|e| format!("Invalid commands JSON: {e}"))?;
    Ok(cmds
        .into_iter()
        .map(|cmd| execute_command(harness, cmd))
        .collect())
}
