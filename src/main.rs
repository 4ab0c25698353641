// gitscope: Git front-end orchestration core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Version | Options            (no git needed)
//!   everything else              Session (git detected) --> cmd::run_*
//! ```

use std::path::Path;
use std::process::ExitCode;

use gitscope::cli::global::GlobalOptions;
use gitscope::cli::{self, Command};
use gitscope::cmd::branch::{run_branch_command, run_remote_command};
use gitscope::cmd::config::run_options_command;
use gitscope::cmd::ignore::run_ignore_command;
use gitscope::cmd::repo::{
    run_clone_command, run_commit_command, run_diff_command, run_init_command, run_log_command,
    run_open_command, run_pull_command, run_push_command, run_reflog_command, run_revert_command,
    run_stage_command, run_status_command,
};
use gitscope::cmd::script::{run_script_command, run_watch_command};
use gitscope::cmd::session::Session;
use gitscope::config::loader::ConfigLoader;
use gitscope::config::{Config, DEFAULT_CONFIG_FILE, ENV_PREFIX};
use gitscope::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&config);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config).await
}

fn build_log_config(config: &Config) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(
            config
                .global
                .log_file
                .as_ref()
                .map(|p| p.display().to_string()),
        )
        .with_json_file(config.global.json_log)
        .build()
}

async fn dispatch_command(cli: &cli::Cli, config: &Config) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            let loader = build_config_loader(&cli.global);
            run_options_command(config, &loader.format_loaded_files());
            Ok(())
        }
        Some(command) => match Session::new(config) {
            Ok(session) => run_repository_command(command, &session).await,
            Err(e) => Err(e),
        },
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run_repository_command(command: &Command, session: &Session) -> anyhow::Result<()> {
    match command {
        Command::Open => run_open_command(session).await,
        Command::Init => run_init_command(session).await,
        Command::Status => run_status_command(session).await,
        Command::Stage => run_stage_command(session).await,
        Command::Commit(args) => run_commit_command(args, session).await,
        Command::Push(args) => run_push_command(args, session).await,
        Command::Pull(args) => run_pull_command(args, session).await,
        Command::Log => run_log_command(session).await,
        Command::Revert(args) => run_revert_command(args, session).await,
        Command::Clone(args) => run_clone_command(args, session).await,
        Command::Branch(args) => run_branch_command(args, session).await,
        Command::Reflog => run_reflog_command(session).await,
        Command::Diff(args) => run_diff_command(args, session).await,
        Command::Remote(args) => run_remote_command(args, session).await,
        Command::Ignore(args) => run_ignore_command(args, session).await,
        Command::Script(args) => run_script_command(args, session).await,
        Command::Watch(args) => run_watch_command(args, session).await,
        Command::Version | Command::Options => Ok(()),
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new().add_toml_file_optional(Path::new(DEFAULT_CONFIG_FILE));
    if let Some(path) = &global.config {
        loader = loader.add_toml_file(path);
    }
    loader.with_env_prefix(ENV_PREFIX)
}

fn load_config(global: &GlobalOptions) -> gitscope::error::Result<Config> {
    global
        .apply_overrides(build_config_loader(global))?
        .build()
}
