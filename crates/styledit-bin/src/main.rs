//! Styledit entrypoint.
use anyhow::Result;
use clap::Parser;
use core_actions::StyledClipboard;
use core_config::{Config, load_from};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Once;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;

mod cli;
mod commands;

use cli::{Args, Command};

struct AppStartup {
    log_guard: Option<WorkerGuard>,
}

impl AppStartup {
    fn new() -> Self {
        Self { log_guard: None }
    }

    fn run(&mut self) -> Result<(Args, Config)> {
        self.configure_logging()?;
        Self::install_panic_hook();

        info!(target: "runtime", "startup");
        let args = Args::parse();
        let config_override = args.config.is_some();
        let config = load_from(args.config.clone())?;
        info!(
            target: "runtime.startup",
            command = command_name(&args.command),
            config_override,
            config_path = config.path.as_ref().map(|p| p.display().to_string()).as_deref(),
            system_clipboard = config.file.clipboard.system,
            "bootstrap_complete"
        );
        Ok((args, config))
    }

    fn configure_logging(&mut self) -> Result<()> {
        let log_dir = Path::new(".");
        let log_path = log_dir.join("styledit.log");
        if log_path.exists() {
            let _ = std::fs::remove_file(&log_path);
        }

        let file_appender = tracing_appender::rolling::never(log_dir, "styledit.log");
        let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
        match tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(nb_writer)
            .try_init()
        {
            Ok(_) => {
                self.log_guard = Some(guard);
            }
            Err(_err) => {
                // Global subscriber already installed; dropping the guard stops the writer.
            }
        }

        Ok(())
    }

    fn install_panic_hook() {
        static HOOK: Once = Once::new();
        HOOK.call_once(|| {
            let default_panic = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                tracing::error!(target: "runtime.panic", ?info, "panic");
                default_panic(info);
            }));
        });
    }
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Stats { .. } => "stats",
        Command::Find { .. } => "find",
        Command::Replace { .. } => "replace",
        Command::Upper { .. } => "upper",
        Command::Lower { .. } => "lower",
        Command::Style { .. } => "style",
        Command::Move { .. } => "move",
        Command::Import { .. } => "import",
        Command::Export { .. } => "export",
        Command::Dump { .. } => "dump",
    }
}

/// Pick the system clipboard backing. Falls back to an in-process buffer when
/// the OS clipboard is disabled, unavailable, or not compiled in.
fn build_clipboard(cfg: &Config) -> StyledClipboard {
    #[cfg(feature = "system-clipboard")]
    if cfg.file.clipboard.system {
        match core_state::clipboard::OsClipboard::new() {
            Ok(os) => return StyledClipboard::new(Box::new(os)),
            Err(e) => {
                tracing::warn!(target: "runtime", error = %e, "os_clipboard_unavailable");
            }
        }
    }
    #[cfg(not(feature = "system-clipboard"))]
    let _ = cfg;
    StyledClipboard::in_memory().0
}

fn main() -> ExitCode {
    let mut startup = AppStartup::new();
    let (args, config) = match startup.run() {
        Ok(ready) => ready,
        Err(e) => {
            eprintln!("styledit: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    let mut clipboard = build_clipboard(&config);
    let name = command_name(&args.command);
    match commands::execute(&args.command, &config, &mut clipboard) {
        Ok(outcome) => {
            for line in &outcome.lines {
                println!("{line}");
            }
            info!(target: "runtime", command = name, success = outcome.success, "command_finished");
            if outcome.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            error!(target: "runtime", command = name, error = %e, "command_failed");
            eprintln!("styledit: {e:#}");
            ExitCode::from(2)
        }
    }
}
