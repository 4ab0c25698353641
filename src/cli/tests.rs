// gitscope: Git front-end orchestration core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use crate::cli::branch::BranchSubcommand;
use crate::cli::remote::RemoteSubcommand;
use crate::cli::repo::IgnoreSubcommand;
use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::config::loader::ConfigLoader;
use crate::logging::LogLevel;
use clap::Parser;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).expect("arguments should parse")
}

#[test]
fn test_parse_version() {
    let cli = parse(&["gitscope", "version"]);
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_global_options_after_subcommand() {
    let cli = parse(&["gitscope", "status", "-C", "/tmp/repo", "-l", "5"]);
    assert!(matches!(cli.command, Some(Command::Status)));
    assert_eq!(cli.global.repo, Some(PathBuf::from("/tmp/repo")));
    assert_eq!(cli.global.log_level, Some(5));
}

#[test]
fn test_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["gitscope", "-l", "7", "status"]).is_err());
}

#[test]
fn test_parse_commit_requires_message() {
    assert!(Cli::try_parse_from(["gitscope", "commit"]).is_err());
    let cli = parse(&["gitscope", "commit", "-m", "first commit"]);
    let Some(Command::Commit(args)) = cli.command else {
        panic!("expected commit");
    };
    assert_eq!(args.message, "first commit");
}

#[test]
fn test_parse_pull_reset() {
    let cli = parse(&["gitscope", "pull", "main", "--reset-last-commit"]);
    let Some(Command::Pull(args)) = cli.command else {
        panic!("expected pull");
    };
    assert_eq!(args.branch, "main");
    assert!(args.reset_last_commit);
}

#[test]
fn test_parse_branch_rename() {
    let cli = parse(&["gitscope", "branch", "rename", "old", "new"]);
    let Some(Command::Branch(args)) = cli.command else {
        panic!("expected branch");
    };
    insta::assert_debug_snapshot!(args.subcommand, @r#"
    Rename {
        old: "old",
        new: "new",
    }
    "#);
}

#[test]
fn test_parse_remote_add_pasted_command() {
    let cli = parse(&[
        "gitscope",
        "remote",
        "add",
        "git",
        "remote",
        "add",
        "origin",
        "https://host/r.git",
    ]);
    let Some(Command::Remote(args)) = cli.command else {
        panic!("expected remote");
    };
    let RemoteSubcommand::Add { spec } = args.subcommand else {
        panic!("expected add");
    };
    assert_eq!(spec.join(" "), "git remote add origin https://host/r.git");
}

#[test]
fn test_parse_ignore_show_default_initial() {
    let cli = parse(&["gitscope", "ignore", "show"]);
    let Some(Command::Ignore(args)) = cli.command else {
        panic!("expected ignore");
    };
    assert!(matches!(args.subcommand, IgnoreSubcommand::Show { ref initial } if initial.is_empty()));
}

#[test]
fn test_parse_watch_rejects_zero_interval() {
    assert!(Cli::try_parse_from(["gitscope", "watch", "--interval-ms", "0"]).is_err());
    let cli = parse(&["gitscope", "watch", "--interval-ms", "250"]);
    assert!(matches!(cli.command, Some(Command::Watch(ref w)) if w.interval_ms == Some(250)));
}

#[test]
fn test_branch_list_has_no_arguments() {
    let cli = parse(&["gitscope", "branch", "list"]);
    assert!(matches!(
        cli.command,
        Some(Command::Branch(ref b)) if matches!(b.subcommand, BranchSubcommand::List)
    ));
}

#[test]
fn test_overrides_reach_config() {
    let cli = parse(&[
        "gitscope",
        "-l",
        "4",
        "--log-file",
        "out/gitscope.log",
        "-C",
        "/work/repo",
        "log",
    ]);
    let config: Config = cli
        .global
        .apply_overrides(ConfigLoader::new())
        .and_then(ConfigLoader::build)
        .expect("overrides build");

    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(config.global.file_log_level, LogLevel::DEBUG);
    assert_eq!(
        config.global.log_file,
        Some(PathBuf::from("out/gitscope.log"))
    );
    assert_eq!(config.repository.path, Some(PathBuf::from("/work/repo")));
}
