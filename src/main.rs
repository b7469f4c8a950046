use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use notifications_cli::cli_style::{self, get_styles};
use notifications_cli::config::{AppConfig, CliConfig, FileConfig};
use notifications_cli::shell::{command_names, prompt_username};
use notifications_cli::{
    execute_command, CommandExecutionResult, ConsoleCourier, InMemoryNotificationStore, Prompter,
    Session,
};

use rustyline::{
    completion::Completer,
    error::ReadlineError,
    highlight::Highlighter,
    history::FileHistory,
    validate::Validator,
    CompletionType, Config, Editor, Helper,
};

fn parse_path(s: &str) -> Result<PathBuf> {
    let original_path = PathBuf::from(s);
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
#[command(styles=get_styles(), version, about = "Manage the notifications of a session")]
struct CliArgs {
    /// Session username, skips the username prompt.
    #[clap(short, long)]
    pub user: Option<String>,

    /// Path to a TOML configuration file.
    #[clap(short, long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// File used to keep the command history between runs.
    #[clap(long, value_parser = parse_path)]
    pub history_file: Option<PathBuf>,

    /// Do not print the banner on startup.
    #[clap(long)]
    pub no_banner: bool,

    /// Disable colored output.
    #[clap(long)]
    pub no_color: bool,
}

impl CliArgs {
    fn to_cli_config(&self) -> CliConfig {
        CliConfig {
            username: self.user.clone(),
            history_file: self.history_file.clone(),
            show_banner: !self.no_banner,
            color: !self.no_color,
        }
    }
}

#[derive(rustyline_derive::Hinter)]
struct CommandHelper {
    commands_names: Vec<String>,
}

impl CommandHelper {
    pub fn new() -> Self {
        CommandHelper {
            commands_names: command_names(),
        }
    }
}

impl Completer for CommandHelper {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        _pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        if line.contains(' ') {
            return Ok((0, Vec::with_capacity(0)));
        }
        let matches = self
            .commands_names
            .iter()
            .filter(|c| c.starts_with(line))
            .map(|c| c.to_string())
            .collect::<Vec<_>>();

        Ok((0, matches))
    }
}

impl Highlighter for CommandHelper {}
impl Validator for CommandHelper {}
impl Helper for CommandHelper {}

type CommandEditor = Editor<CommandHelper, FileHistory>;

/// Answers follow-up questions through the same line editor as the main loop.
struct EditorPrompter<'a> {
    editor: &'a mut CommandEditor,
}

impl Prompter for EditorPrompter<'_> {
    fn ask(&mut self, question: &str) -> Option<String> {
        match self.editor.readline(question) {
            Ok(answer) => Some(answer),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => None,
            Err(err) => {
                warn!("Failed to read answer: {}", err);
                None
            }
        }
    }
}

fn init_tracing(config: &AppConfig) -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(config.log_level.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    let file_config = match &cli_args.config {
        Some(path) => Some(FileConfig::load(path)?),
        None => None,
    };
    let config = AppConfig::resolve(&cli_args.to_cli_config(), file_config)?;

    init_tracing(&config)?;
    cli_style::set_color_enabled(config.color);
    if let Some(path) = &cli_args.config {
        info!("Loaded configuration from {:?}", path);
    }

    let rl_config = Config::builder()
        .completion_type(CompletionType::List)
        .auto_add_history(false)
        .build();
    let mut rl = CommandEditor::with_config(rl_config)?;
    rl.set_helper(Some(CommandHelper::new()));

    if let Some(path) = &config.history_file {
        if let Err(err) = rl.load_history(path) {
            info!("No history loaded from {:?}: {}", path, err);
        }
    }

    if config.show_banner {
        cli_style::print_banner();
    }

    let username = match config.username.clone() {
        Some(username) => username,
        None => match prompt_username(&mut EditorPrompter { editor: &mut rl }) {
            Some(username) => username,
            None => {
                cli_style::print_info("No username given, exiting.");
                return Ok(());
            }
        },
    };

    let mut session = Session::new(
        &username,
        Box::new(InMemoryNotificationStore::new()),
        ConsoleCourier,
    )?;

    cli_style::print_welcome(session.username());

    loop {
        let prompt = cli_style::get_prompt(session.username(), session.unread_count());
        match rl.readline(&prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                }
                let result = execute_command(
                    &line,
                    &mut session,
                    &mut EditorPrompter { editor: &mut rl },
                    config.default_kind,
                );
                match result {
                    CommandExecutionResult::Ok => {}
                    CommandExecutionResult::Exit => break,
                    CommandExecutionResult::Error(err) => {
                        cli_style::print_error(&err);
                        continue;
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D: exiting.");
                break;
            }
            Err(e) => {
                cli_style::print_error(&format!("{:?}", e));
                break;
            }
        }
    }

    if let Some(path) = &config.history_file {
        if let Err(err) = rl.save_history(path) {
            warn!("Could not save history to {:?}: {}", path, err);
        }
    }

    cli_style::print_goodbye(session.username());
    cli_style::flush();
    Ok(())
}
