//! Integration tests for the workspace update workflow
//!
//! These run the real manifest reader, filter and workspace scanner against a
//! temporary directory tree, with recording fakes standing in for git and npm.

mod common;

use common::mock_services::{Call, CallLog, RecordingPackageManager, RecordingScm, RecordingSink};
use common::test_fixtures::WorkspaceFixture;
use pretty_assertions::assert_eq;

use devup::application::services::DependencyFilter;
use devup::application::use_cases::{
    UpdateReport, UpdateWorkspaceConfig, UpdateWorkspaceError, UpdateWorkspaceUseCase,
};
use devup::infrastructure::ManifestStore;

struct Outcome {
    result: Result<UpdateReport, UpdateWorkspaceError>,
    calls: CallLog,
    lines: Vec<String>,
}

async fn run_update(fixture: &WorkspaceFixture, config: UpdateWorkspaceConfig) -> Outcome {
    run_update_with(fixture, config, DependencyFilter::new(), |log| {
        RecordingScm::new(log)
    })
    .await
}

async fn run_update_with(
    fixture: &WorkspaceFixture,
    config: UpdateWorkspaceConfig,
    filter: DependencyFilter,
    scm: impl FnOnce(CallLog) -> RecordingScm,
) -> Outcome {
    let manifest = ManifestStore::new()
        .read(&fixture.project_dir().join("package.json"))
        .await
        .expect("manifest should be readable");

    let calls = CallLog::new();
    let scm = scm(calls.clone());
    let packages = RecordingPackageManager::new(calls.clone());
    let sink = RecordingSink::new();

    let use_case = UpdateWorkspaceUseCase::new(config, filter, &scm, &packages, &sink);
    let result = use_case
        .execute(&fixture.workspace(), &manifest.dependencies, "package.json")
        .await;

    Outcome {
        result,
        calls,
        lines: sink.lines(),
    }
}

#[tokio::test]
async fn test_no_internal_dependencies_reports_and_does_nothing() {
    let fixture = WorkspaceFixture::new()
        .with_dependencies(&[("lodash", "^4.17.21"), ("react", "~18.2.0")])
        .with_siblings(&["lodash"]);

    let outcome = run_update(
        &fixture,
        UpdateWorkspaceConfig::new().with_update_packages(true),
    )
    .await;

    assert!(outcome.result.is_ok());
    assert_eq!(
        outcome.lines,
        vec!["No internal dependencies found in package.json.".to_string()]
    );
    assert!(outcome.calls.calls().is_empty());
}

#[tokio::test]
async fn test_unmatched_dependency_still_updates_root_project() {
    // The project directory is the only entry in the workspace root
    let fixture =
        WorkspaceFixture::new().with_dependencies(&[("lib-core", "acme/lib-core#develop")]);

    let outcome = run_update(
        &fixture,
        UpdateWorkspaceConfig::new().with_update_packages(true),
    )
    .await;

    let report = outcome.result.expect("update should succeed");
    assert_eq!(report.updated, Vec::<String>::new());
    assert_eq!(report.skipped, vec!["lib-core".to_string()]);
    assert!(report.packages_updated);
    assert_eq!(
        outcome.calls.calls(),
        vec![Call::UpdatePackages {
            path: fixture.project_dir(),
        }]
    );
}

#[tokio::test]
async fn test_update_flag_off_never_runs_package_updates() {
    let fixture = WorkspaceFixture::new()
        .with_dependencies(&[("lib-core", "acme/lib-core")])
        .with_siblings(&["lib-core"]);

    let outcome = run_update(&fixture, UpdateWorkspaceConfig::new()).await;

    assert!(!outcome.result.unwrap().packages_updated);
    assert_eq!(outcome.calls.update_count(), 0);
    assert!(outcome.lines.iter().all(|line| !line.starts_with("Running")));
}

#[tokio::test]
async fn test_empty_workspace_root_reports_no_repositories() {
    let fixture = WorkspaceFixture::new()
        .with_dependencies(&[("lib-core", "acme/lib-core")]);
    let workspace = devup::domain::entities::Workspace::new(fixture.project_dir(), "missing");

    let manifest = ManifestStore::new()
        .read(&fixture.project_dir().join("package.json"))
        .await
        .unwrap();
    let calls = CallLog::new();
    let scm = RecordingScm::new(calls.clone());
    let packages = RecordingPackageManager::new(calls.clone());
    let sink = RecordingSink::new();

    let use_case = UpdateWorkspaceUseCase::new(
        UpdateWorkspaceConfig::new().with_update_packages(true),
        DependencyFilter::new(),
        &scm,
        &packages,
        &sink,
    );
    let report = use_case
        .execute(&workspace, &manifest.dependencies, "package.json")
        .await
        .unwrap();

    assert_eq!(report, UpdateReport::default());
    assert_eq!(
        sink.lines(),
        vec![format!(
            "No dependency repositories found in {}.",
            workspace.root().display()
        )]
    );
    assert!(calls.calls().is_empty());
}

#[tokio::test]
async fn test_checks_out_named_branch_and_default_branch() {
    let fixture = WorkspaceFixture::new()
        .with_dependencies(&[
            ("lib-core", "acme/lib-core"),
            ("lib-engine", "git@github.com:acme/lib-engine.git#feature-x"),
            ("lodash", "^4.17.21"),
        ])
        .with_siblings(&["lib-core", "lib-engine", "unrelated"]);

    let outcome = run_update(&fixture, UpdateWorkspaceConfig::new()).await;

    let report = outcome.result.expect("update should succeed");
    assert_eq!(
        report.updated,
        vec!["lib-core".to_string(), "lib-engine".to_string()]
    );
    assert_eq!(
        outcome.calls.calls(),
        vec![
            Call::Checkout {
                path: fixture.sibling("lib-core"),
                reference: "master".to_string(),
            },
            Call::Pull {
                path: fixture.sibling("lib-core"),
                reference: "master".to_string(),
            },
            Call::Checkout {
                path: fixture.sibling("lib-engine"),
                reference: "feature-x".to_string(),
            },
            Call::Pull {
                path: fixture.sibling("lib-engine"),
                reference: "feature-x".to_string(),
            },
        ]
    );
    assert_eq!(
        outcome.lines,
        vec![
            "Checking out lib-core to master...",
            "Pulling changes to lib-core...",
            "Checking out lib-engine to feature-x...",
            "Pulling changes to lib-engine...",
        ]
    );
}

#[tokio::test]
async fn test_configured_default_branch_is_used_without_fragment() {
    let fixture = WorkspaceFixture::new()
        .with_dependencies(&[("lib-core", "acme/lib-core")])
        .with_siblings(&["lib-core"]);

    let outcome = run_update(
        &fixture,
        UpdateWorkspaceConfig::new().with_default_branch("main"),
    )
    .await;

    assert!(outcome.result.is_ok());
    assert!(outcome.calls.calls().contains(&Call::Checkout {
        path: fixture.sibling("lib-core"),
        reference: "main".to_string(),
    }));
}

#[tokio::test]
async fn test_package_updates_run_after_all_checkouts_then_root() {
    let fixture = WorkspaceFixture::new()
        .with_dependencies(&[
            ("lib-core", "acme/lib-core#develop"),
            ("lib-engine", "acme/lib-engine#develop"),
        ])
        .with_siblings(&["lib-core", "lib-engine"]);

    let outcome = run_update(
        &fixture,
        UpdateWorkspaceConfig::new().with_update_packages(true),
    )
    .await;

    let report = outcome.result.expect("update should succeed");
    assert!(report.packages_updated);

    let calls = outcome.calls.calls();
    assert_eq!(outcome.calls.update_count(), 3);
    assert!(outcome.calls.last_scm_index() < outcome.calls.first_update_index());
    assert_eq!(
        calls[calls.len() - 3..].to_vec(),
        vec![
            Call::UpdatePackages {
                path: fixture.sibling("lib-core"),
            },
            Call::UpdatePackages {
                path: fixture.sibling("lib-engine"),
            },
            Call::UpdatePackages {
                path: fixture.project_dir(),
            },
        ]
    );

    let tail: Vec<&str> = outcome.lines[4..].iter().map(String::as_str).collect();
    assert_eq!(
        tail,
        vec![
            "Running \"npm update\" in lib-core...",
            "Running \"npm update\" in lib-engine...",
            "Running \"npm update\" in app repository...",
        ]
    );
}

#[tokio::test]
async fn test_missing_sibling_is_skipped() {
    let fixture = WorkspaceFixture::new()
        .with_dependencies(&[
            ("lib-core", "acme/lib-core"),
            ("lib-engine", "acme/lib-engine"),
        ])
        .with_siblings(&["lib-engine"]);

    let outcome = run_update(&fixture, UpdateWorkspaceConfig::new()).await;

    let report = outcome.result.unwrap();
    assert_eq!(report.updated, vec!["lib-engine".to_string()]);
    assert_eq!(report.skipped, vec!["lib-core".to_string()]);
    assert!(outcome
        .calls
        .calls()
        .iter()
        .all(|call| !matches!(call, Call::Checkout { path, .. } if path.ends_with("lib-core"))));
}

#[tokio::test]
async fn test_checkout_failure_aborts_remaining_work() {
    let fixture = WorkspaceFixture::new()
        .with_dependencies(&[
            ("lib-core", "acme/lib-core#missing-branch"),
            ("lib-engine", "acme/lib-engine"),
        ])
        .with_siblings(&["lib-core", "lib-engine"]);

    let outcome = run_update_with(
        &fixture,
        UpdateWorkspaceConfig::new().with_update_packages(true),
        DependencyFilter::new(),
        |log| RecordingScm::new(log).failing_checkout_of("lib-core"),
    )
    .await;

    let error = outcome.result.unwrap_err();
    assert!(matches!(
        error,
        UpdateWorkspaceError::ScmOperationFailed { ref repository, .. } if repository == "lib-core"
    ));
    assert_eq!(outcome.calls.calls().len(), 1);
    assert_eq!(outcome.calls.update_count(), 0);
}

#[tokio::test]
async fn test_custom_pattern_restricts_internal_dependencies() {
    let fixture = WorkspaceFixture::new()
        .with_dependencies(&[
            ("lib-core", "acme/lib-core"),
            ("left-pad", "someone/left-pad"),
        ])
        .with_siblings(&["lib-core", "left-pad"]);

    let filter = DependencyFilter::with_pattern(r"^acme/").unwrap();
    let outcome = run_update_with(&fixture, UpdateWorkspaceConfig::new(), filter, |log| {
        RecordingScm::new(log)
    })
    .await;

    assert_eq!(outcome.result.unwrap().updated, vec!["lib-core".to_string()]);
}

#[tokio::test]
async fn test_local_path_dependency_is_ignored_next_to_present_sibling() {
    let fixture = WorkspaceFixture::new()
        .with_dependencies(&[("lib-a", "org/lib-a"), ("local-lib", "../local-lib")])
        .with_siblings(&["lib-a"]);

    assert!(!DependencyFilter::new().is_internal("../local-lib"));

    let outcome = run_update(&fixture, UpdateWorkspaceConfig::new()).await;

    let report = outcome.result.expect("update should succeed");
    assert_eq!(report.updated, vec!["lib-a".to_string()]);
    assert_eq!(report.skipped, Vec::<String>::new());
    assert_eq!(
        outcome.calls.calls(),
        vec![
            Call::Checkout {
                path: fixture.sibling("lib-a"),
                reference: "master".to_string(),
            },
            Call::Pull {
                path: fixture.sibling("lib-a"),
                reference: "master".to_string(),
            },
        ]
    );
}

#[tokio::test]
async fn test_aliased_dependencies_are_reported_by_key() {
    let fixture = WorkspaceFixture::new()
        .with_dependencies(&[
            ("@acme/core", "acme/lib-core"),
            ("@acme/engine", "acme/lib-engine"),
        ])
        .with_siblings(&["lib-core"]);

    let outcome = run_update(&fixture, UpdateWorkspaceConfig::new()).await;

    let report = outcome.result.unwrap();
    assert_eq!(report.updated, vec!["@acme/core".to_string()]);
    assert_eq!(report.skipped, vec!["@acme/engine".to_string()]);
}
