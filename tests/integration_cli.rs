// gitscope: Git front-end orchestration core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use clap::Parser;
use gitscope::cli::branch::BranchSubcommand;
use gitscope::cli::remote::RemoteSubcommand;
use gitscope::cli::repo::IgnoreSubcommand;
use gitscope::cli::{Cli, Command};
use std::path::PathBuf;

// =============================================================================
// Version / Options
// =============================================================================

#[test]
fn cli_version_command() {
    let cli = Cli::try_parse_from(["gitscope", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_version_alias() {
    let cli = Cli::try_parse_from(["gitscope", "-v"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_no_command() {
    let cli = Cli::try_parse_from(["gitscope"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn cli_unknown_command() {
    assert!(Cli::try_parse_from(["gitscope", "rebase"]).is_err());
}

// =============================================================================
// Global options
// =============================================================================

#[test]
fn cli_global_options() {
    let cli = Cli::try_parse_from([
        "gitscope",
        "--repo",
        "/work/repo",
        "--config",
        "custom.toml",
        "--log-level",
        "1",
        "--file-log-level",
        "6",
        "--log-file",
        "gitscope.log",
        "options",
    ])
    .unwrap();

    assert!(matches!(cli.command, Some(Command::Options)));
    insta::assert_debug_snapshot!(cli.global, @r#"
    GlobalOptions {
        repo: Some(
            "/work/repo",
        ),
        config: Some(
            "custom.toml",
        ),
        log_level: Some(
            1,
        ),
        file_log_level: Some(
            6,
        ),
        log_file: Some(
            "gitscope.log",
        ),
    }
    "#);
}

// =============================================================================
// Repository commands
// =============================================================================

#[test]
fn cli_push_and_pull() {
    let cli = Cli::try_parse_from(["gitscope", "push", "main", "--no-check"]).unwrap();
    let Some(Command::Push(push)) = cli.command else {
        panic!("expected push");
    };
    assert_eq!(push.branch, "main");
    assert!(push.no_check);

    let cli = Cli::try_parse_from(["gitscope", "pull", "dev"]).unwrap();
    let Some(Command::Pull(pull)) = cli.command else {
        panic!("expected pull");
    };
    insta::assert_debug_snapshot!(pull, @r#"
    PullArgs {
        branch: "dev",
        reset_last_commit: false,
    }
    "#);
}

#[test]
fn cli_revert_and_clone() {
    let cli = Cli::try_parse_from(["gitscope", "revert", "HEAD~2"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Revert(ref r)) if r.reference == "HEAD~2"));

    let cli = Cli::try_parse_from(["gitscope", "clone", "https://host/r.git"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Clone(ref c)) if c.url == "https://host/r.git"));
}

#[test]
fn cli_diff_cached() {
    let cli = Cli::try_parse_from(["gitscope", "diff", "--cached"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Diff(ref d)) if d.cached));
}

#[test]
fn cli_branch_subcommands() {
    for (args, expected) in [
        (vec!["branch", "create", "topic"], "create"),
        (vec!["branch", "delete", "topic"], "delete"),
        (vec!["branch", "switch", "topic"], "switch"),
        (vec!["branch", "list"], "list"),
    ] {
        let cli = Cli::try_parse_from(std::iter::once("gitscope").chain(args)).unwrap();
        let Some(Command::Branch(branch)) = cli.command else {
            panic!("expected branch");
        };
        let name = match branch.subcommand {
            BranchSubcommand::Create { .. } => "create",
            BranchSubcommand::Delete { .. } => "delete",
            BranchSubcommand::Rename { .. } => "rename",
            BranchSubcommand::Switch { .. } => "switch",
            BranchSubcommand::List => "list",
        };
        assert_eq!(name, expected);
    }
}

#[test]
fn cli_remote_add_requires_spec() {
    assert!(Cli::try_parse_from(["gitscope", "remote", "add"]).is_err());

    let cli =
        Cli::try_parse_from(["gitscope", "remote", "add", "origin", "https://host/r.git"]).unwrap();
    let Some(Command::Remote(remote)) = cli.command else {
        panic!("expected remote");
    };
    assert!(matches!(remote.subcommand, RemoteSubcommand::Add { ref spec } if spec.len() == 2));
}

#[test]
fn cli_ignore_save_from_file() {
    let cli = Cli::try_parse_from(["gitscope", "ignore", "save", "new.gitignore"]).unwrap();
    let Some(Command::Ignore(ignore)) = cli.command else {
        panic!("expected ignore");
    };
    assert!(matches!(
        ignore.subcommand,
        IgnoreSubcommand::Save { file: Some(ref f) } if *f == PathBuf::from("new.gitignore")
    ));
}

// =============================================================================
// Script / Watch
// =============================================================================

#[test]
fn cli_script_options() {
    let cli =
        Cli::try_parse_from(["gitscope", "script", "--create", "--json", "setup.txt"]).unwrap();
    let Some(Command::Script(script)) = cli.command else {
        panic!("expected script");
    };
    insta::assert_debug_snapshot!(script, @r#"
    ScriptArgs {
        file: Some(
            "setup.txt",
        ),
        create: true,
        json: true,
    }
    "#);
}

#[test]
fn cli_watch_default_interval() {
    let cli = Cli::try_parse_from(["gitscope", "watch"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Watch(ref w)) if w.interval_ms.is_none()));
}
