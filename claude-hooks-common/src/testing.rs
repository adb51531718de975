//! Test doubles for code that shells out.
//!
//! [`ScriptedRunner`] answers [`CommandRunner::run`] from per-program queues
//! and records every call, so tests can assert both what a hook did with a
//! response and whether a program was invoked at all.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use crate::error::HookError;
use crate::process::{CommandOutput, CommandRunner};

/// One recorded invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// Program name as passed to the runner.
    pub program: String,
    /// Arguments as passed to the runner.
    pub args: Vec<String>,
}

/// A [`CommandRunner`] that replays scripted responses.
///
/// Programs without a queued response behave as if not installed.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    responses: Mutex<HashMap<String, VecDeque<Result<CommandOutput, HookError>>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedRunner {
    /// A runner with nothing scripted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `output` as the next response for `program`.
    pub fn respond(self, program: &str, output: CommandOutput) -> Self {
        self.push(program, Ok(output));
        self
    }

    /// Queue `error` as the next response for `program`.
    pub fn fail(self, program: &str, error: HookError) -> Self {
        self.push(program, Err(error));
        self
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Calls made to `program`, in order.
    pub fn calls_to(&self, program: &str) -> Vec<RecordedCall> {
        self.calls()
            .into_iter()
            .filter(|call| call.program == program)
            .collect()
    }

    fn push(&self, program: &str, response: Result<CommandOutput, HookError>) {
        self.responses
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .entry(program.to_string())
            .or_default()
            .push_back(response);
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput, HookError> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(RecordedCall {
                program: program.to_string(),
                args: args.to_vec(),
            });

        self.responses
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get_mut(program)
            .and_then(|queue| queue.pop_front())
            .unwrap_or_else(|| {
                Err(HookError::ToolNotFound {
                    program: program.to_string(),
                })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_runner_replays_in_order() {
        let runner = ScriptedRunner::new()
            .respond("tool", CommandOutput::exited(0))
            .respond("tool", CommandOutput::exited(1));

        assert_eq!(runner.run("tool", &[]).unwrap().status, Some(0));
        assert_eq!(runner.run("tool", &[]).unwrap().status, Some(1));
        assert!(matches!(
            runner.run("tool", &[]),
            Err(HookError::ToolNotFound { .. })
        ));
    }

    #[test]
    fn test_scripted_runner_records_calls() {
        let runner = ScriptedRunner::new();
        let _ = runner.run("a", &["x".to_string()]);
        let _ = runner.run("b", &[]);

        assert_eq!(runner.calls().len(), 2);
        assert_eq!(
            runner.calls_to("a"),
            vec![RecordedCall {
                program: "a".to_string(),
                args: vec!["x".to_string()],
            }]
        );
    }
}
