use std::collections::VecDeque;

use notifications_cli::{
    execute_command, CommandExecutionResult, InMemoryNotificationStore, NotificationKind,
    Prompter, RecordingCourier, Session,
};

use super::constants::TEST_USER;

/// Answers questions from a fixed script, then behaves like Ctrl-D.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    pub questions: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            questions: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, question: &str) -> Option<String> {
        self.questions.push(question.to_string());
        self.answers.pop_front()
    }
}

pub fn new_session() -> Session<RecordingCourier> {
    Session::new(
        TEST_USER,
        Box::new(InMemoryNotificationStore::new()),
        RecordingCourier::default(),
    )
    .expect("Failed to open test session")
}

/// Runs one shell line with no configured default kind.
pub fn run(
    session: &mut Session<RecordingCourier>,
    prompter: &mut ScriptedPrompter,
    line: &str,
) -> CommandExecutionResult {
    run_with_default(session, prompter, line, None)
}

pub fn run_with_default(
    session: &mut Session<RecordingCourier>,
    prompter: &mut ScriptedPrompter,
    line: &str,
    default_kind: Option<NotificationKind>,
) -> CommandExecutionResult {
    execute_command(line, session, prompter, default_kind)
}
