//! End-to-end tests for the shell flows
//!
//! Drives `execute_command` with scripted answers, the same way the
//! interactive loop feeds it lines and follow-up prompts.

mod common;

use common::{
    new_session, run, run_with_default, ScriptedPrompter, DISK_MESSAGE, PAYMENT_MESSAGE,
};
use notifications_cli::shell::prompt_username;
use notifications_cli::{CommandExecutionResult, NotificationId, NotificationKind};

#[test]
fn test_username_prompt_retries_until_non_blank() {
    let mut prompter = ScriptedPrompter::new(&["", "   ", "\t", " ana "]);

    assert_eq!(prompt_username(&mut prompter), Some("ana".to_string()));
    assert_eq!(prompter.questions.len(), 4);
}

#[test]
fn test_username_prompt_cancelled() {
    let mut prompter = ScriptedPrompter::new(&["  "]);
    assert_eq!(prompt_username(&mut prompter), None);
}

#[test]
fn test_create_with_arguments() {
    let mut session = new_session();
    let mut prompter = ScriptedPrompter::default();

    let result = run(
        &mut session,
        &mut prompter,
        &format!("create \"{}\" --kind alert", DISK_MESSAGE),
    );

    assert_eq!(result, CommandExecutionResult::Ok);
    assert!(prompter.questions.is_empty());
    let listed = session.view();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].message(), DISK_MESSAGE);
    assert_eq!(listed[0].kind(), NotificationKind::Alert);
    assert_eq!(session.courier().deliveries.len(), 1);
}

#[test]
fn test_create_prompts_for_message_and_kind() {
    let mut session = new_session();
    let mut prompter = ScriptedPrompter::new(&[PAYMENT_MESSAGE, "promo", "usuario"]);

    let result = run(&mut session, &mut prompter, "create");

    assert_eq!(result, CommandExecutionResult::Ok);
    // One question for the message, two for the kind after a bad answer.
    assert_eq!(prompter.questions.len(), 3);
    let created = &session.view()[0];
    assert_eq!(created.message(), PAYMENT_MESSAGE);
    assert_eq!(created.kind(), NotificationKind::User);
    assert_eq!(
        session.courier().deliveries[0].1,
        format!("{}: {}", NotificationKind::User.marker(), PAYMENT_MESSAGE)
    );
}

#[test]
fn test_create_uses_default_kind() {
    let mut session = new_session();
    let mut prompter = ScriptedPrompter::default();

    let result = run_with_default(
        &mut session,
        &mut prompter,
        "create hello",
        Some(NotificationKind::System),
    );

    assert_eq!(result, CommandExecutionResult::Ok);
    assert!(prompter.questions.is_empty());
    assert_eq!(session.view()[0].kind(), NotificationKind::System);
}

#[test]
fn test_create_with_unknown_kind_aborts() {
    let mut session = new_session();
    let mut prompter = ScriptedPrompter::default();

    let result = run(&mut session, &mut prompter, "create hello --kind volumen");

    assert!(matches!(result, CommandExecutionResult::Error(msg) if msg.contains("volumen")));
    assert!(session.is_empty());
    assert!(session.courier().deliveries.is_empty());
}

#[test]
fn test_create_cancelled_creates_nothing() {
    let mut session = new_session();
    let mut prompter = ScriptedPrompter::new(&["half written"]);

    let result = run(&mut session, &mut prompter, "create");

    assert_eq!(result, CommandExecutionResult::Ok);
    assert!(session.is_empty());
}

#[test]
fn test_read_and_delete_on_empty_session_do_not_prompt() {
    let mut session = new_session();
    let mut prompter = ScriptedPrompter::new(&["1"]);

    assert_eq!(run(&mut session, &mut prompter, "read"), CommandExecutionResult::Ok);
    assert_eq!(run(&mut session, &mut prompter, "delete"), CommandExecutionResult::Ok);
    assert!(prompter.questions.is_empty());
    assert_eq!(prompter.remaining(), 1);
}

#[test]
fn test_read_prompts_for_id() {
    let mut session = new_session();
    let mut prompter = ScriptedPrompter::new(&["1"]);
    run(&mut session, &mut prompter, "create a --kind user");

    let result = run(&mut session, &mut prompter, "mark-read");

    assert_eq!(result, CommandExecutionResult::Ok);
    assert_eq!(prompter.questions.len(), 1);
    assert!(session.view()[0].is_read());
}

#[test]
fn test_bad_ids_are_reported_not_fatal() {
    let mut session = new_session();
    let mut prompter = ScriptedPrompter::default();
    run(&mut session, &mut prompter, "create a --kind alert");

    for line in ["read abc", "read 7", "delete xyz", "rm 7", "show nope", "show 9"] {
        assert_eq!(
            run(&mut session, &mut prompter, line),
            CommandExecutionResult::Ok,
            "{} should be recovered",
            line
        );
    }
    assert_eq!(session.view().len(), 1);
    assert!(!session.view()[0].is_read());
}

#[test]
fn test_ids_are_read_from_their_leading_digits() {
    let mut session = new_session();
    let mut prompter = ScriptedPrompter::default();
    run(&mut session, &mut prompter, "create first --kind user");
    run(&mut session, &mut prompter, "create second --kind alert");

    assert_eq!(run(&mut session, &mut prompter, "read 1abc"), CommandExecutionResult::Ok);
    assert_eq!(run(&mut session, &mut prompter, "delete 2.0"), CommandExecutionResult::Ok);

    let listed = session.view();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id(), NotificationId(1));
    assert!(listed[0].is_read());
}

#[test]
fn test_delete_then_view() {
    let mut session = new_session();
    let mut prompter = ScriptedPrompter::default();
    run(&mut session, &mut prompter, "create one -k user");
    run(&mut session, &mut prompter, "create two -k system");

    assert_eq!(run(&mut session, &mut prompter, "delete 1"), CommandExecutionResult::Ok);
    assert_eq!(run(&mut session, &mut prompter, "view"), CommandExecutionResult::Ok);
    assert_eq!(run(&mut session, &mut prompter, "ls --detailed"), CommandExecutionResult::Ok);

    let listed = session.view();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id(), NotificationId(2));
}

#[test]
fn test_misc_commands() {
    let mut session = new_session();
    let mut prompter = ScriptedPrompter::default();

    assert_eq!(run(&mut session, &mut prompter, ""), CommandExecutionResult::Ok);
    assert_eq!(run(&mut session, &mut prompter, "help"), CommandExecutionResult::Ok);
    assert_eq!(run(&mut session, &mut prompter, "not-a-command"), CommandExecutionResult::Ok);
    assert_eq!(run(&mut session, &mut prompter, "view"), CommandExecutionResult::Ok);
    assert_eq!(run(&mut session, &mut prompter, "exit"), CommandExecutionResult::Exit);
    assert_eq!(run(&mut session, &mut prompter, "quit"), CommandExecutionResult::Exit);
}
