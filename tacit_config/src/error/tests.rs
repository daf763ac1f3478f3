//! Unit tests for error display formats.

use super::*;
use crate::declaration::ArgumentDeclaration;
use rstest::rstest;

#[rstest]
fn missing_required_names_argument_and_flags() {
    let decl = ArgumentDeclaration::new(
        "resource_group_name",
        ["--resource-group-name", "-g"],
        true,
    );
    let err = TacitError::missing_required(&decl);
    assert_eq!(
        err.to_string(),
        "missing required argument 'resource_group_name' (--resource-group-name/-g)"
    );
}

#[rstest]
fn help_authoring_names_node_and_cause() {
    let err = TacitError::help_authoring("vm list", "no help metadata registered");
    assert_eq!(
        err.to_string(),
        "help authoring failed for 'vm list': no help metadata registered"
    );
}

#[rstest]
fn file_error_names_path() {
    let err = TacitError::File {
        path: "defaults.toml".into(),
        source: Box::new(std::io::Error::other("denied")),
    };
    assert!(err.to_string().contains("defaults.toml"));
}
