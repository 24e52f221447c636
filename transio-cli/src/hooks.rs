//! External extract/compile hook commands for the composite sync step.
//!
//! String extraction and catalog compilation are external tools; the
//! composite `sync` step runs them as shell commands around the HTTP
//! exchange when the configuration names them.

use std::process::Command;

use anyhow::{bail, Context, Result};

/// Run a configured hook command through the shell; an unset hook is a no-op.
pub fn run_if_configured(stage: &str, command: Option<&str>) -> Result<()> {
    let Some(command) = command else {
        return Ok(());
    };

    let output = Command::new("sh")
        .arg("-c")
        .arg(command)
        .output()
        .with_context(|| format!("failed to spawn {stage} hook '{command}'"))?;

    if output.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    bail!(
        "{stage} hook '{command}' failed (status {}): {stderr} {stdout}",
        output.status
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_hook_is_a_no_op() {
        run_if_configured("extract", None).expect("no-op");
    }

    #[test]
    fn successful_hook_passes() {
        run_if_configured("extract", Some("true")).expect("exit 0");
    }

    #[test]
    fn failing_hook_reports_stage_and_command() {
        let err = run_if_configured("compile", Some("echo nope >&2; exit 3")).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("compile hook"), "got: {message}");
        assert!(message.contains("nope"), "got: {message}");
    }
}
