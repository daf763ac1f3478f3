//! End-to-end help-tree construction and rendering.

use anyhow::{Result, anyhow, ensure};
use clap::Command;
use rstest::rstest;
use tacit_config::TacitError;
use tacit_config::help::{CommandNode, HelpIndex, HelpSource, render_command};

#[rstest]
fn leaf_help_renders_from_docstring_text() -> Result<()> {
    let cmd = Command::new("az")
        .about("Manage things.")
        .subcommand(Command::new("test").about("Short Description. Long description with\nline break."));
    let index = HelpIndex::build(&CommandNode::from_clap(&cmd))
        .map_err(|e| anyhow!(e.to_string()))?;
    let node = index
        .get("test")
        .ok_or_else(|| anyhow!("missing entry for 'test'"))?;

    let rendered = render_command(index.program(), node);
    ensure!(
        rendered.starts_with(
            "\nCommand\n    az test: Short Description.\n        Long description with line break."
        ),
        "unexpected rendering: {rendered:?}"
    );
    Ok(())
}

#[rstest]
fn every_nested_node_gets_an_entry() -> Result<()> {
    let cmd = Command::new("az")
        .about("Root.")
        .subcommand(
            Command::new("vm")
                .about("Manage virtual machines.")
                .subcommand(Command::new("list").about("List machines."))
                .subcommand(
                    Command::new("image")
                        .about("Manage images.")
                        .subcommand(Command::new("show").about("Show one image.")),
                ),
        )
        .subcommand(Command::new("test").about("Run tests."));
    let index = HelpIndex::build(&CommandNode::from_clap(&cmd))
        .map_err(|e| anyhow!(e.to_string()))?;

    let names: Vec<&str> = index.names().collect();
    ensure!(
        names == ["test", "vm", "vm image", "vm image show", "vm list"],
        "unexpected entries: {names:?}"
    );
    ensure!(index.get("vm image").is_some_and(|n| n.is_group()));
    ensure!(index.get("vm image show").is_some_and(|n| !n.is_group()));
    Ok(())
}

#[rstest]
fn a_single_malformed_node_fails_the_whole_build() -> Result<()> {
    let tree = CommandNode::group(
        "az",
        HelpSource::text("Root."),
        vec![
            CommandNode::command("az ok-one", HelpSource::text("Fine.")),
            CommandNode::command("az sick", HelpSource::text("   ")),
            CommandNode::command("az ok-two", HelpSource::text("Also fine.")),
        ],
    );

    let err = HelpIndex::build(&tree)
        .err()
        .ok_or_else(|| anyhow!("expected the build to abort"))?;
    let TacitError::HelpAuthoring { node, .. } = err.as_ref() else {
        return Err(anyhow!("unexpected error: {err}"));
    };
    ensure!(node == "sick", "error must name the offending node: {node}");
    Ok(())
}
