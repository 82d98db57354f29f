//! Agent invocation abstraction.
//!
//! The pipeline depends only on the [`AgentInvoker`] trait, with a real
//! subprocess adapter (`SubprocessInvoker`) and a canned implementation
//! (`StaticInvoker`) for tests.

use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, warn};
use voicehelm_common::{Result, VoicehelmError};

/// Captured output of one agent run.
#[derive(Debug, Clone)]
pub struct AgentInvocation {
    /// Standard output
    pub stdout: String,
    /// Standard error
    pub stderr: String,
    /// Exit code (None if the process was killed by a signal)
    pub exit_code: Option<i32>,
}

/// Capability interface for running the external agent.
#[async_trait]
pub trait AgentInvoker: Send + Sync {
    /// Run the agent with the given instruction, bounded by `timeout`.
    ///
    /// A non-zero exit is not an error here; it is reported through
    /// `exit_code` so the orchestrator can still mine the output. Errors are
    /// reserved for the distinguished failure modes: timeout, missing
    /// executable, and everything else under `Invocation`.
    async fn invoke(&self, prompt: &str, timeout: Duration) -> Result<AgentInvocation>;
}

/// Real invoker that spawns the agent as a subprocess.
pub struct SubprocessInvoker {
    program: String,
    args: Vec<String>,
}

impl SubprocessInvoker {
    /// Create an invoker for `program`, with `args` prepended before the
    /// instruction string on every run.
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

#[async_trait]
impl AgentInvoker for SubprocessInvoker {
    async fn invoke(&self, prompt: &str, timeout: Duration) -> Result<AgentInvocation> {
        debug!(program = %self.program, timeout_ms = timeout.as_millis() as u64, "Invoking agent");

        let output_future = Command::new(&self.program)
            .args(&self.args)
            .arg(prompt)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // Dropping the future on timeout must not leave the agent running.
            .kill_on_drop(true)
            .output();

        let output = match tokio::time::timeout(timeout, output_future).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(program = %self.program, "Agent executable not found");
                return Err(VoicehelmError::AgentUnavailable(self.program.clone()));
            }
            Ok(Err(e)) => {
                warn!(program = %self.program, error = %e, "Agent failed to execute");
                return Err(VoicehelmError::Invocation(e.to_string()));
            }
            Err(_) => {
                warn!(program = %self.program, "Agent timed out, killing process");
                return Err(VoicehelmError::AgentTimeout(timeout.as_millis() as u64));
            }
        };

        Ok(AgentInvocation {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code(),
        })
    }
}

/// Canned invoker for tests: returns a fixed outcome on every call.
pub struct StaticInvoker {
    outcome: StaticOutcome,
}

enum StaticOutcome {
    Output(AgentInvocation),
    Timeout,
    NotFound,
}

impl StaticInvoker {
    /// Succeed with the given stdout and exit code 0.
    pub fn success(stdout: &str) -> Self {
        Self {
            outcome: StaticOutcome::Output(AgentInvocation {
                stdout: stdout.to_string(),
                stderr: String::new(),
                exit_code: Some(0),
            }),
        }
    }

    /// Exit non-zero with the given stderr and empty stdout.
    pub fn failure(stderr: &str, exit_code: i32) -> Self {
        Self {
            outcome: StaticOutcome::Output(AgentInvocation {
                stdout: String::new(),
                stderr: stderr.to_string(),
                exit_code: Some(exit_code),
            }),
        }
    }

    /// Return the full invocation as given.
    pub fn with_invocation(invocation: AgentInvocation) -> Self {
        Self {
            outcome: StaticOutcome::Output(invocation),
        }
    }

    /// Fail every call with `AgentTimeout`.
    pub fn timing_out() -> Self {
        Self {
            outcome: StaticOutcome::Timeout,
        }
    }

    /// Fail every call with `AgentUnavailable`.
    pub fn missing() -> Self {
        Self {
            outcome: StaticOutcome::NotFound,
        }
    }
}

#[async_trait]
impl AgentInvoker for StaticInvoker {
    async fn invoke(&self, _prompt: &str, timeout: Duration) -> Result<AgentInvocation> {
        match &self.outcome {
            StaticOutcome::Output(invocation) => Ok(invocation.clone()),
            StaticOutcome::Timeout => Err(VoicehelmError::AgentTimeout(
                timeout.as_millis() as u64,
            )),
            StaticOutcome::NotFound => {
                Err(VoicehelmError::AgentUnavailable("agent".to_string()))
            }
        }
    }
}
