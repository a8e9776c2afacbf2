//! Out-of-process local inference.
//!
//! Spawns the configured model runner (e.g. `ollama run mistral`) with the
//! prompt appended as one argv element. The command is handed straight to
//! the process launcher, never to a shell, so metacharacters in the prompt
//! are plain text to the model. The whole invocation is bounded by the
//! configured timeout; expiry kills the child.

use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

use crate::error::AnswerError;

pub(super) async fn answer(
    local_command: &[String],
    timeout: Duration,
    prompt: &str,
) -> Result<String, AnswerError> {
    let (program, fixed_args) = local_command
        .split_first()
        .ok_or_else(|| AnswerError::Spawn {
            program: String::new(),
            source: std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "local model command is empty",
            ),
        })?;

    crate::verbose!("running local model: {program} (+{} args)", fixed_args.len() + 1);

    let mut command = Command::new(program);
    command
        .args(fixed_args)
        .arg(prompt)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let output = tokio::time::timeout(timeout, async {
        command
            .spawn()
            .map_err(|source| AnswerError::Spawn {
                program: program.clone(),
                source,
            })?
            .wait_with_output()
            .await
            .map_err(|source| AnswerError::Spawn {
                program: program.clone(),
                source,
            })
    })
    .await
    .map_err(|_| AnswerError::Timeout {
        secs: timeout.as_secs(),
    })??;

    if !output.status.success() {
        return Err(AnswerError::Process {
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if stdout.is_empty() {
        return Err(AnswerError::EmptyAnswer);
    }
    Ok(stdout)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmd(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn captures_stdout_as_the_answer() {
        let out = answer(&cmd(&["echo"]), Duration::from_secs(5), "Khartoum")
            .await
            .unwrap();
        assert_eq!(out, "Khartoum");
    }

    #[tokio::test]
    async fn shell_metacharacters_stay_literal() {
        let probe = tempfile::tempdir().unwrap();
        let canary = probe.path().join("canary");
        std::fs::write(&canary, b"intact").unwrap();

        let prompt = format!("\"; rm -rf {}; echo pwned", probe.path().display());
        let out = answer(&cmd(&["echo"]), Duration::from_secs(5), &prompt)
            .await
            .unwrap();

        // The whole injection attempt comes back as literal text and the
        // filesystem target is untouched.
        assert_eq!(out, prompt);
        assert_eq!(std::fs::read(&canary).unwrap(), b"intact");
    }

    #[tokio::test]
    async fn hung_process_times_out() {
        let err = answer(
            &cmd(&["sh", "-c", "sleep 60"]),
            Duration::from_millis(200),
            "prompt",
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AnswerError::Timeout { .. }));
    }

    #[tokio::test]
    async fn nonzero_exit_surfaces_stderr() {
        let err = answer(
            &cmd(&["sh", "-c", "echo boom >&2; exit 3"]),
            Duration::from_secs(5),
            "ignored",
        )
        .await
        .unwrap_err();
        match err {
            AnswerError::Process { stderr, .. } => assert!(stderr.contains("boom")),
            other => panic!("expected Process error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_stdout_is_an_empty_answer() {
        let err = answer(&cmd(&["true"]), Duration::from_secs(5), "prompt")
            .await
            .unwrap_err();
        assert!(matches!(err, AnswerError::EmptyAnswer));
    }

    #[tokio::test]
    async fn missing_binary_is_a_spawn_error() {
        let err = answer(
            &cmd(&["voxchat-no-such-binary"]),
            Duration::from_secs(5),
            "prompt",
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AnswerError::Spawn { .. }));
    }
}
