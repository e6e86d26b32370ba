#![allow(dead_code)]

use std::path::PathBuf;

use assert_cmd::Command;
use serde_json::{json, Value};
use tempfile::TempDir;

/// A plan with two phases and a dependency between them.
pub fn sample_plan() -> Value {
    json!({
        "goal": "Launch a blog in 2 weeks",
        "total_duration": "14 days",
        "start_date": "2025-05-01",
        "end_date": "2025-05-14",
        "phases": [
            {
                "phase": "Planning",
                "tasks": [{
                    "task_name": "Define Scope",
                    "description": "Pick topics and audience",
                    "duration": "3 days",
                    "start_date": "2025-05-01",
                    "end_date": "2025-05-03",
                    "dependencies": [],
                    "priority": "High"
                }]
            },
            {
                "phase": "Content Creation",
                "tasks": [
                    {
                        "task_name": "Write Posts",
                        "description": "Draft the first five posts",
                        "duration": "7 days",
                        "start_date": "2025-05-04",
                        "end_date": "2025-05-10",
                        "dependencies": ["Define Scope"],
                        "priority": "medium"
                    },
                    {
                        "task_name": "Publish",
                        "description": "",
                        "duration": "4 days",
                        "start_date": "2025-05-11",
                        "end_date": "2025-05-14",
                        "dependencies": ["Write Posts", "Buy Domain"],
                        "priority": "low"
                    }
                ]
            }
        ],
        "summary": {
            "milestones": ["Planning Complete (2025-05-03)"],
            "remarks": "Ship small, ship often."
        },
        "ai_enhanced": true
    })
}

/// Write a JSON value into a fresh temporary directory.
pub fn write_plan(value: &Value) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let path = temp_dir.path().join("plan.json");
    std::fs::write(&path, serde_json::to_string_pretty(value).unwrap())
        .expect("Failed to write plan file");
    (temp_dir, path)
}

/// `pv --no-color` pointed at a server that never answers.
pub fn pv_cmd() -> Command {
    let mut cmd = Command::cargo_bin("pv").expect("Failed to find pv binary");
    cmd.arg("--no-color")
        .env("PLANVIEW_SERVER_URL", "http://127.0.0.1:9")
        .env_remove("RUST_LOG");
    cmd
}
