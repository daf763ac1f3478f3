//! End-to-end configured-default resolution.
//!
//! Exercises the full chain a hosting CLI runs through: parse an invocation
//! with `clap`, keep only user-supplied values, then fill the gaps from the
//! environment override and the persisted defaults file, in that order.

use anyhow::{Context, Result, anyhow, ensure};
use clap::{Arg, Command};
use rstest::rstest;
use tacit_config::{
    ArgumentDeclaration, FileStore, MemoryStore, Prefix, ProcessEnv, ProvidedValues, Resolver,
    StaticEnv, TacitError,
};

fn sample_vm_list() -> Command {
    Command::new("sample-vm-list").arg(
        Arg::new("resource_group_name")
            .long("resource-group-name")
            .short('g'),
    )
}

fn group_declaration(required: bool) -> ArgumentDeclaration {
    ArgumentDeclaration::new(
        "resource_group_name",
        ["--resource-group-name", "-g"],
        required,
    )
    .with_configured_default("group")
}

/// The original scenario: the flag is omitted, the environment override is
/// set, and the resolved value is the override for required and optional
/// declarations alike.
#[rstest]
fn environment_default_applies_to_omitted_flag(#[values(true, false)] required: bool) -> Result<()> {
    let matches = sample_vm_list().get_matches_from(["sample-vm-list"]);
    let provided = ProvidedValues::from_matches(&matches);

    let env = StaticEnv::from_iter([("AZ_DEFAULTS_GROUP", "myRG")]);
    let store = MemoryStore::new();
    let prefix = Prefix::new("az");
    let resolver = Resolver::new(&prefix, &env, &store);

    let resolved = resolver
        .resolve_all(&[group_declaration(required)], &provided)
        .map_err(|e| anyhow!(e.to_string()))?;
    ensure!(
        resolved.get("resource_group_name") == Some("myRG"),
        "expected the environment default, got {:?}",
        resolved.get("resource_group_name")
    );
    Ok(())
}

#[rstest]
fn user_supplied_flag_wins_over_all_defaults() -> Result<()> {
    let matches = sample_vm_list().get_matches_from(["sample-vm-list", "-g", "cliRG"]);
    let provided = ProvidedValues::from_matches(&matches);

    let env = StaticEnv::from_iter([("AZ_DEFAULTS_GROUP", "envRG")]);
    let mut store = MemoryStore::new();
    store.set("defaults", "group", "storeRG");
    let prefix = Prefix::new("az");
    let resolver = Resolver::new(&prefix, &env, &store);

    let resolved = resolver
        .resolve_all(&[group_declaration(true)], &provided)
        .map_err(|e| anyhow!(e.to_string()))?;
    ensure!(
        resolved.get("resource_group_name") == Some("cliRG"),
        "user value must win, got {:?}",
        resolved.get("resource_group_name")
    );
    Ok(())
}

#[rstest]
fn omitted_required_flag_without_any_default_fails() -> Result<()> {
    let matches = sample_vm_list().get_matches_from(["sample-vm-list"]);
    let provided = ProvidedValues::from_matches(&matches);

    let env = StaticEnv::new();
    let store = MemoryStore::new();
    let prefix = Prefix::new("az");
    let resolver = Resolver::new(&prefix, &env, &store);

    let err = resolver
        .resolve_all(&[group_declaration(true)], &provided)
        .err()
        .ok_or_else(|| anyhow!("expected resolution to fail"))?;
    ensure!(
        matches!(err.as_ref(), TacitError::MissingRequiredArgument { .. }),
        "unexpected error: {err}"
    );
    ensure!(
        err.to_string().contains("--resource-group-name/-g"),
        "error must name the flags: {err}"
    );
    Ok(())
}

/// Full stack with a real defaults file and the real process environment,
/// scoped inside a figment jail: the environment override beats the stored
/// value; with the override unset, the stored value applies.
#[rstest]
fn environment_override_shadows_the_defaults_file() {
    figment::Jail::expect_with(|jail| {
        jail.create_file("defaults.toml", "[defaults]\ngroup = \"storeRG\"\n")?;
        let store = FileStore::load("defaults.toml".as_ref())
            .map_err(|e| figment::Error::from(e.to_string()))?;
        let prefix = Prefix::new("az");

        let resolver = Resolver::new(&prefix, &ProcessEnv, &store);
        let from_file = resolver.resolve(&group_declaration(true), &ProvidedValues::new());
        assert_eq!(from_file.as_deref(), Some("storeRG"));

        jail.set_env("AZ_DEFAULTS_GROUP", "envRG");
        let from_env = resolver.resolve(&group_declaration(true), &ProvidedValues::new());
        assert_eq!(from_env.as_deref(), Some("envRG"));
        Ok(())
    });
}

/// A defaults file addressed by absolute path, outside the working
/// directory, resolves the same as one found beside the invocation.
#[rstest]
fn defaults_file_loads_from_an_absolute_path() -> Result<()> {
    let dir = tempfile::tempdir().context("create temp dir")?;
    let path = dir.path().join("defaults.toml");
    std::fs::write(&path, "[defaults]\ngroup = \"tmpRG\"\n").context("write defaults")?;

    let store = FileStore::load(&path).map_err(|e| anyhow!(e.to_string()))?;
    ensure!(store.path() == path, "store must remember its source path");

    let prefix = Prefix::new("az");
    let env = StaticEnv::new();
    let resolver = Resolver::new(&prefix, &env, &store);
    let resolved = resolver.resolve(&group_declaration(true), &ProvidedValues::new());
    ensure!(
        resolved.as_deref() == Some("tmpRG"),
        "expected the stored default, got {resolved:?}"
    );
    Ok(())
}

#[rstest]
fn clap_defaults_do_not_mask_configured_defaults() -> Result<()> {
    let cmd = Command::new("sample-vm-list").arg(
        Arg::new("resource_group_name")
            .long("resource-group-name")
            .short('g')
            .default_value("clapRG"),
    );
    let matches = cmd.get_matches_from(["sample-vm-list"]);
    let provided = ProvidedValues::from_matches(&matches);
    ensure!(
        provided.get("resource_group_name").is_none(),
        "parser defaults must not count as user-supplied values"
    );

    let env = StaticEnv::from_iter([("AZ_DEFAULTS_GROUP", "myRG")]);
    let store = MemoryStore::new();
    let prefix = Prefix::new("az");
    let resolver = Resolver::new(&prefix, &env, &store);
    let resolved = resolver
        .resolve_all(&[group_declaration(false)], &provided)
        .map_err(|e| anyhow!(e.to_string()))?;
    ensure!(resolved.get("resource_group_name") == Some("myRG"));
    Ok(())
}
