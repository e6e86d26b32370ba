//! End-to-end checks of the validate → view → display → export pipeline.

use planview_core::{
    metrics, validate::load_plan, view::TimelineBar, DownloadPlan, LoadPlan, PlanError, PlanState,
    PlanView,
};
use serde_json::{json, Value};
use tempfile::TempDir;

fn event_plan() -> Value {
    json!({
        "goal": "Organize a conference in 6 weeks",
        "total_duration": "42 days",
        "start_date": "2025-09-01",
        "end_date": "2025-10-12",
        "phases": [
            {
                "phase": "Concept",
                "tasks": [{
                    "task_name": "Theme Selection",
                    "description": "Agree on the theme and speakers",
                    "duration": "5 days",
                    "start_date": "2025-09-01",
                    "end_date": "2025-09-05",
                    "dependencies": [],
                    "priority": "High"
                }]
            },
            {
                "phase": "Logistics",
                "tasks": [
                    {
                        "task_name": "Venue Booking",
                        "description": "Reserve the main hall",
                        "duration": "10 days",
                        "start_date": "2025-09-06",
                        "end_date": "2025-09-15",
                        "dependencies": ["Theme Selection"],
                        "priority": "High"
                    },
                    {
                        "task_name": "Catering",
                        "description": "Book food for two days",
                        "duration": "5 days",
                        "start_date": "2025-09-16",
                        "end_date": "2025-09-20",
                        "dependencies": ["Venue Booking"],
                        "priority": "Medium"
                    }
                ]
            },
            {
                "phase": "Event Day",
                "tasks": [{
                    "task_name": "Run the Event",
                    "description": "Open doors and host sessions",
                    "duration": "22 days",
                    "start_date": "2025-09-21",
                    "end_date": "2025-10-12",
                    "dependencies": ["Catering", "Sponsor Deals"],
                    "priority": "High"
                }]
            }
        ],
        "summary": {
            "milestones": ["Venue Confirmed (2025-09-15)"],
            "remarks": "Event Planning plan with 3 phases across 42 days."
        },
        "ai_enhanced": false,
        "project_type": "event_planning"
    })
}

fn write_json(dir: &TempDir, value: &Value) -> LoadPlan {
    let path = dir.path().join("plan.json");
    std::fs::write(&path, value.to_string()).expect("Failed to write plan");
    LoadPlan { path }
}

#[test]
fn test_load_plan_builds_view() {
    let dir = TempDir::new().unwrap();
    let plan = load_plan(&write_json(&dir, &event_plan())).unwrap();
    let view = PlanView::from_document(&plan);

    assert_eq!(view.phase_count(), 3);
    assert_eq!(view.start_date, "Sep 1, 2025");
    assert_eq!(view.end_date, "Oct 12, 2025");

    let days: Vec<i64> = view.phases.iter().map(|phase| phase.days).collect();
    assert_eq!(days, vec![5, 15, 22]);

    let icons: Vec<&str> = view.phases.iter().map(|phase| phase.icon).collect();
    assert_eq!(icons, vec!["fas fa-brain", "fas fa-truck", "fas fa-tasks"]);

    let unresolved: Vec<&str> = view
        .unresolved_dependencies()
        .iter()
        .map(|dependency| dependency.name.as_str())
        .collect();
    assert_eq!(unresolved, vec!["Sponsor Deals"]);
}

#[test]
fn test_timeline_sums_to_whole_plan() {
    let dir = TempDir::new().unwrap();
    let plan = load_plan(&write_json(&dir, &event_plan())).unwrap();
    let view = PlanView::from_document(&plan);

    let total: f64 = view.timeline.iter().map(|bar| bar.percentage).sum();
    assert!((total - 100.0).abs() < 1e-9);
    assert!(view.timeline.iter().all(|bar| bar.width() <= 100.0));
}

#[test]
fn test_overlong_phase_bar_is_clamped() {
    let bar = TimelineBar {
        phase: "Overrun".to_string(),
        days: 30,
        percentage: metrics::timeline_percentage(30, 20),
    };
    assert_eq!(bar.percentage, 150.0);
    assert_eq!(bar.width(), 100.0);
}

#[test]
fn test_load_plan_rejects_invalid_document() {
    let dir = TempDir::new().unwrap();
    let mut value = event_plan();
    value["phases"][2]["tasks"][0]["end_date"] = json!("2025-09-01");

    let err = load_plan(&write_json(&dir, &value)).unwrap_err();
    match err {
        PlanError::MalformedPlan { reason } => {
            assert_eq!(reason, "date order: phases[2].tasks[0]");
        }
        other => panic!("expected MalformedPlan, got {other:?}"),
    }
}

#[test]
fn test_load_plan_not_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plan.json");
    std::fs::write(&path, "not json at all").unwrap();

    let err = load_plan(&LoadPlan { path }).unwrap_err();
    assert!(matches!(err, PlanError::Serialization { .. }));
}

#[test]
fn test_load_plan_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = load_plan(&LoadPlan {
        path: dir.path().join("missing.json"),
    })
    .unwrap_err();
    assert!(matches!(err, PlanError::FileSystem { .. }));
}

#[test]
fn test_export_round_trip() {
    let dir = TempDir::new().unwrap();
    let plan = load_plan(&write_json(&dir, &event_plan())).unwrap();

    let mut state = PlanState::new();
    assert!(matches!(
        state.download(&DownloadPlan::default()),
        Err(PlanError::NoPlan)
    ));
    state.replace(plan.clone());

    let out = dir.path().join("out");
    let path = state
        .download(&DownloadPlan {
            output_dir: Some(out.clone()),
        })
        .unwrap();
    assert!(path.starts_with(&out));

    let reloaded = load_plan(&LoadPlan { path }).unwrap();
    assert_eq!(reloaded, plan);
}

#[test]
fn test_rendered_markdown_matches_view() {
    let dir = TempDir::new().unwrap();
    let plan = load_plan(&write_json(&dir, &event_plan())).unwrap();

    let from_document = plan.to_string();
    let from_view = PlanView::from_document(&plan).to_string();
    assert_eq!(from_document, from_view);
    assert!(from_view.contains("### 3. Event Day `fas fa-tasks`"));
    assert!(from_view.contains("Sponsor Deals (unknown)"));
}
