//! Inner commands of the interactive shell and the flows behind them.

use clap::{CommandFactory, Parser, Subcommand};
use tracing::debug;

use crate::cli_style::{self, get_styles, CommandHelp};
use crate::notifications::{Courier, NotificationError, NotificationKind};
use crate::session::{parse_id, validate_username, Session};

/// Source of answers for the follow-up questions a command may ask.
pub trait Prompter {
    /// Asks a question. Returns `None` when the user cancels.
    fn ask(&mut self, question: &str) -> Option<String>;
}

#[derive(Parser)]
#[command(styles=get_styles(), name = "", disable_help_subcommand = true)]
struct InnerCli {
    #[command(subcommand)]
    command: InnerCommand,
}

#[derive(Subcommand)]
enum InnerCommand {
    /// Shows all notifications, oldest first.
    #[command(visible_aliases = ["ls", "list"])]
    View {
        /// Shows kind and creation time in a table.
        #[arg(short, long)]
        detailed: bool,
    },

    /// Creates a notification and delivers it.
    /// Asks for the message and the kind when they are not given.
    Create {
        message: Option<String>,

        /// One of user, alert, system.
        #[arg(short, long)]
        kind: Option<String>,
    },

    /// Marks a notification as read.
    #[command(visible_alias = "mark-read")]
    Read { id: Option<String> },

    /// Deletes a notification.
    #[command(visible_alias = "rm")]
    Delete { id: Option<String> },

    /// Shows a notification as JSON.
    Show { id: String },

    /// Shows this help.
    Help,

    /// Close this program.
    #[command(visible_alias = "quit")]
    Exit,
}

#[derive(Debug, PartialEq, Eq)]
pub enum CommandExecutionResult {
    Ok,
    Exit,
    Error(String),
}

const USERNAME_QUESTION: &str = "Enter your username: ";
const MESSAGE_QUESTION: &str = "Write the notification: ";
const KIND_QUESTION: &str = "Select the type [user/alert/system]: ";
const MARK_READ_QUESTION: &str = "Enter the ID to mark as read: ";
const DELETE_QUESTION: &str = "Enter the ID to delete: ";

/// Names of every inner command, used for completion.
pub fn command_names() -> Vec<String> {
    InnerCli::command()
        .get_subcommands()
        .map(|sc| sc.get_name().to_string())
        .collect()
}

pub fn command_help() -> Vec<CommandHelp> {
    InnerCli::command()
        .get_subcommands()
        .map(|sc| {
            let args = sc
                .get_arguments()
                .filter(|arg| arg.is_positional())
                .map(|arg| format!("<{}>", arg.get_id().as_str().to_uppercase()))
                .collect::<Vec<_>>()
                .join(" ");
            CommandHelp {
                name: sc.get_name().to_string(),
                args,
                description: sc.get_about().map(|a| a.to_string()).unwrap_or_default(),
            }
        })
        .collect()
}

/// Keeps asking until a non blank username is given.
/// Returns `None` if the user cancels.
pub fn prompt_username(prompter: &mut dyn Prompter) -> Option<String> {
    loop {
        let answer = prompter.ask(USERNAME_QUESTION)?;
        match validate_username(&answer) {
            Ok(username) => return Some(username),
            Err(_) => cli_style::print_warning("Invalid username, please try again"),
        }
    }
}

fn prompt_kind(prompter: &mut dyn Prompter) -> Option<NotificationKind> {
    loop {
        let answer = prompter.ask(KIND_QUESTION)?;
        match answer.parse::<NotificationKind>() {
            Ok(kind) => return Some(kind),
            Err(err) => cli_style::print_warning(&err.to_string()),
        }
    }
}

pub fn execute_command<C: Courier>(
    line: &str,
    session: &mut Session<C>,
    prompter: &mut dyn Prompter,
    default_kind: Option<NotificationKind>,
) -> CommandExecutionResult {
    let line = line.trim();
    if line.is_empty() {
        return CommandExecutionResult::Ok;
    }

    let args =
        shlex::split(line).unwrap_or_else(|| line.split_whitespace().map(String::from).collect());

    let cli = InnerCli::try_parse_from(std::iter::once(" ").chain(args.iter().map(String::as_str)));

    let command = match cli {
        Ok(cli) => cli.command,
        Err(e) => {
            if e.print().is_err() {
                println!("{}", e);
            }
            return CommandExecutionResult::Ok;
        }
    };

    debug!("Executing {:?}", line);
    match command {
        InnerCommand::View { detailed } => view(session, detailed),
        InnerCommand::Create { message, kind } => {
            create(session, prompter, message, kind, default_kind)
        }
        InnerCommand::Read { id } => mark_read(session, prompter, id),
        InnerCommand::Delete { id } => delete(session, prompter, id),
        InnerCommand::Show { id } => show(session, &id),
        InnerCommand::Help => {
            cli_style::print_help(&command_help());
            CommandExecutionResult::Ok
        }
        InnerCommand::Exit => CommandExecutionResult::Exit,
    }
}

fn view<C: Courier>(session: &Session<C>, detailed: bool) -> CommandExecutionResult {
    let notifications = session.view();
    if notifications.is_empty() {
        cli_style::print_empty_list("No notifications");
        return CommandExecutionResult::Ok;
    }

    if detailed {
        cli_style::print_notifications_table(&notifications);
    } else {
        cli_style::print_section_header(&format!(
            "Notifications ({}, {} unread)",
            notifications.len(),
            session.unread_count()
        ));
        for notification in &notifications {
            cli_style::print_notification(notification);
        }
        cli_style::print_section_footer();
    }
    CommandExecutionResult::Ok
}

fn create<C: Courier>(
    session: &mut Session<C>,
    prompter: &mut dyn Prompter,
    message: Option<String>,
    kind: Option<String>,
    default_kind: Option<NotificationKind>,
) -> CommandExecutionResult {
    let message = match message.or_else(|| prompter.ask(MESSAGE_QUESTION)) {
        Some(message) => message,
        None => {
            cli_style::print_warning("Creation cancelled");
            return CommandExecutionResult::Ok;
        }
    };

    let created = match kind {
        Some(tag) => session.create_from_tag(message, &tag),
        None => match default_kind.or_else(|| prompt_kind(prompter)) {
            Some(kind) => session.create(message, kind),
            None => {
                cli_style::print_warning("Creation cancelled");
                return CommandExecutionResult::Ok;
            }
        },
    };

    match created {
        Ok(notification) => {
            cli_style::print_notification(&notification);
            session.deliver(&notification);
            cli_style::print_success("Notification created");
            CommandExecutionResult::Ok
        }
        Err(err) => CommandExecutionResult::Error(err.to_string()),
    }
}

/// Resolves the id argument, asking for it when missing.
fn resolve_id(prompter: &mut dyn Prompter, id: Option<String>, question: &str) -> Option<String> {
    id.or_else(|| prompter.ask(question))
}

fn mark_read<C: Courier>(
    session: &mut Session<C>,
    prompter: &mut dyn Prompter,
    id: Option<String>,
) -> CommandExecutionResult {
    if session.is_empty() {
        cli_style::print_warning("Nothing to mark");
        return CommandExecutionResult::Ok;
    }
    let Some(raw_id) = resolve_id(prompter, id, MARK_READ_QUESTION) else {
        return CommandExecutionResult::Ok;
    };

    match session.mark_read(&raw_id) {
        Ok(notification) => {
            cli_style::print_success(&format!(
                "Notification {} marked as read",
                notification.id()
            ));
            CommandExecutionResult::Ok
        }
        Err(err) => lookup_failure(err),
    }
}

fn delete<C: Courier>(
    session: &mut Session<C>,
    prompter: &mut dyn Prompter,
    id: Option<String>,
) -> CommandExecutionResult {
    if session.is_empty() {
        cli_style::print_warning("Nothing to delete");
        return CommandExecutionResult::Ok;
    }
    let Some(raw_id) = resolve_id(prompter, id, DELETE_QUESTION) else {
        return CommandExecutionResult::Ok;
    };

    let id = match parse_id(&raw_id) {
        Ok(id) => id,
        Err(err) => return lookup_failure(err),
    };
    match session.delete(&raw_id) {
        Ok(true) => {
            cli_style::print_success(&format!("Notification {} deleted", id));
            CommandExecutionResult::Ok
        }
        Ok(false) => lookup_failure(NotificationError::NotFound(id)),
        Err(err) => lookup_failure(err),
    }
}

fn show<C: Courier>(session: &Session<C>, raw_id: &str) -> CommandExecutionResult {
    let notification = match session.find(raw_id) {
        Ok(notification) => notification,
        Err(err) => return lookup_failure(err),
    };
    match serde_json::to_string_pretty(&notification) {
        Ok(json) => {
            println!("{}", json);
            CommandExecutionResult::Ok
        }
        Err(err) => CommandExecutionResult::Error(format!("Could not render notification: {}", err)),
    }
}

/// Lookup misses are reported to the user, never treated as failures.
fn lookup_failure(err: NotificationError) -> CommandExecutionResult {
    if err.is_not_found() {
        debug!("{}", err);
        cli_style::print_error("Notification not found");
        CommandExecutionResult::Ok
    } else {
        CommandExecutionResult::Error(err.to_string())
    }
}
