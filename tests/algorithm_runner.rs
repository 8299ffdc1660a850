//! Integration tests for the algorithm runner's dispatch contract (§4.8, §8
//! laws 8-10): the runner must reproduce a direct algorithm call exactly,
//! and must reject the two (algorithm, repo-count) combinations the source
//! never implemented.

use reagent::algorithms::{run_single_repo, run_two_repos};
use reagent::core::config::IodineConfig;
use reagent::model::{Algorithm, Module, Origin, TreeNode};
use reagent::ReagentError;

fn method(value: &str, line: usize) -> TreeNode {
    TreeNode::new(
        value,
        vec![
            TreeNode::leaf("Assign:x", Origin::new("f.py", line + 1, 0)),
            TreeNode::leaf("Return:x", Origin::new("f.py", line + 2, 0)),
        ],
        Origin::new("f.py", line, 0),
    )
}

#[test]
fn runner_output_matches_direct_oxygen_call() {
    let config = IodineConfig::default();
    let modules = vec![Module::new(
        "a.py",
        vec![method("Block", 1), method("Block", 10)],
    )];

    let via_runner = run_single_repo(&modules, Algorithm::Oxygen, &config).unwrap();
    let direct = reagent::algorithms::oxygen::detect(&modules, config.min_nodes);

    assert_eq!(via_runner.to_json().unwrap(), direct.to_json().unwrap());
}

#[test]
fn runner_output_matches_direct_chlorine_call() {
    let config = IodineConfig::default();
    let repo_a = vec![Module::new("a.py", vec![method("Block", 1)])];
    let repo_b = vec![Module::new("b.py", vec![method("Block", 1)])];

    let via_runner = run_two_repos(&repo_a, &repo_b, Algorithm::Chlorine, &config).unwrap();
    let direct =
        reagent::algorithms::chlorine::detect_two_repos(&repo_a, &repo_b, config.min_nodes);

    assert_eq!(via_runner.to_json().unwrap(), direct.to_json().unwrap());
}

#[test]
fn runner_output_matches_direct_iodine_call() {
    let config = IodineConfig::default();
    let repo_a = vec![Module::new("a.py", vec![method("Block", 1)])];
    let repo_b = vec![Module::new("b.py", vec![method("Block", 1)])];

    let via_runner = run_two_repos(&repo_a, &repo_b, Algorithm::Iodine, &config).unwrap();
    let direct = reagent::algorithms::iodine::detect(&repo_a, &repo_b, &config);

    assert_eq!(via_runner.to_json().unwrap(), direct.to_json().unwrap());
}

#[test]
fn single_repo_iodine_raises_user_input_error() {
    let config = IodineConfig::default();
    let modules = vec![Module::new("a.py", vec![method("Block", 1)])];
    let err = run_single_repo(&modules, Algorithm::Iodine, &config).unwrap_err();
    assert!(matches!(err, ReagentError::UserInput { .. }));
}

#[test]
fn two_repo_oxygen_raises_user_input_error() {
    let config = IodineConfig::default();
    let a = vec![Module::new("a.py", vec![method("Block", 1)])];
    let b = vec![Module::new("b.py", vec![method("Block", 1)])];
    let err = run_two_repos(&a, &b, Algorithm::Oxygen, &config).unwrap_err();
    assert!(matches!(err, ReagentError::UserInput { .. }));
}

#[test]
fn empty_repository_is_rejected_at_the_runner_boundary() {
    let config = IodineConfig::default();
    let err = run_single_repo(&[], Algorithm::Oxygen, &config).unwrap_err();
    assert!(matches!(err, ReagentError::UserInput { .. }));

    let modules = vec![Module::new("a.py", vec![method("Block", 1)])];
    let err = run_two_repos(&modules, &[], Algorithm::Chlorine, &config).unwrap_err();
    assert!(matches!(err, ReagentError::UserInput { .. }));
}
