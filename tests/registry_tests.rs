use std::collections::HashMap;

use pipeline_plugin::error::PluginError;
use pipeline_plugin::hash::fnv32a;
use pipeline_plugin::job::{ExecutionOutcome, JobDefinition};
use pipeline_plugin::registry::JobRegistry;

fn noop_job(title: &str) -> JobDefinition {
    JobDefinition::new(title, |_| ExecutionOutcome::Success)
}

/// Distinct titles build a registry that preserves input order and derives
/// each id from the title hash.
#[test]
fn build_preserves_order_and_assigns_ids() {
    let registry = JobRegistry::build(vec![
        noop_job("Clone").with_priority(0),
        noop_job("Build").with_priority(10),
        noop_job("Deploy").with_priority(20),
    ])
    .unwrap();

    assert_eq!(registry.len(), 3);

    let jobs: Vec<_> = registry.iter().collect();
    assert_eq!(jobs[0].title, "Clone");
    assert_eq!(jobs[1].title, "Build");
    assert_eq!(jobs[2].title, "Deploy");

    for job in &jobs {
        assert_eq!(job.id, fnv32a(&job.title));
    }
    assert_eq!(jobs[1].priority, 10);
}

#[test]
fn build_empty_registry() {
    let registry = JobRegistry::build(Vec::new()).unwrap();
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
}

/// Two jobs with the same title collide on id and fail the whole build.
#[test]
fn build_rejects_duplicate_titles() {
    let result = JobRegistry::build(vec![noop_job("Build"), noop_job("Build")]);

    match result {
        Err(PluginError::DuplicateJob(title)) => assert_eq!(title, "Build"),
        other => panic!("expected DuplicateJob error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn build_rejects_duplicates_regardless_of_position() {
    let result = JobRegistry::build(vec![
        noop_job("Build"),
        noop_job("Test"),
        noop_job("Deploy"),
        noop_job("Test"),
    ]);
    assert!(matches!(result, Err(PluginError::DuplicateJob(t)) if t == "Test"));
}

#[test]
fn get_finds_registered_job() {
    let registry = JobRegistry::build(vec![noop_job("Build"), noop_job("Test")]).unwrap();

    let job = registry.get(fnv32a("Test")).unwrap();
    assert_eq!(job.title, "Test");

    assert!(registry.get(fnv32a("Missing")).is_none());
}

/// The registry holds a reference to the caller's handler, not a copy of
/// its behavior: invoking it through the registry runs the original closure.
#[test]
fn registered_handler_is_callers_handler() {
    let def = JobDefinition::new("Greet", |args: HashMap<String, String>| {
        match args.get("name") {
            Some(name) => ExecutionOutcome::ExitRequested(format!("bye {}", name)),
            None => ExecutionOutcome::Failed("no name".to_string()),
        }
    });

    let registry = JobRegistry::build(vec![def]).unwrap();
    let job = registry.get(fnv32a("Greet")).unwrap();

    let mut args = HashMap::new();
    args.insert("name".to_string(), "host".to_string());
    assert_eq!(
        (job.handler)(args),
        ExecutionOutcome::ExitRequested("bye host".to_string())
    );
    assert_eq!(
        (job.handler)(HashMap::new()),
        ExecutionOutcome::Failed("no name".to_string())
    );
}
