use anyhow::{Context, Result, anyhow};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command as TokioCommand;
use tracing::debug;

/// Writes the report into `dir/file_name`, creating `dir` when needed.
pub async fn write_report(dir: &Path, file_name: &str, contents: &str) -> Result<PathBuf> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Unable to create export directory {}", dir.display()))?;

    let path = dir.join(file_name);
    tokio::fs::write(&path, contents)
        .await
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    debug!(path = %path.display(), bytes = contents.len(), "report written");
    Ok(path)
}

struct ClipboardCommand {
    program: &'static str,
    args: &'static [&'static str],
}

const MACOS_CLIPBOARD: &[ClipboardCommand] = &[ClipboardCommand {
    program: "pbcopy",
    args: &[],
}];

const WINDOWS_CLIPBOARD: &[ClipboardCommand] = &[ClipboardCommand {
    program: "clip",
    args: &[],
}];

const UNIX_CLIPBOARD: &[ClipboardCommand] = &[
    ClipboardCommand {
        program: "wl-copy",
        args: &[],
    },
    ClipboardCommand {
        program: "xclip",
        args: &["-selection", "clipboard"],
    },
    ClipboardCommand {
        program: "xsel",
        args: &["--clipboard", "--input"],
    },
];

fn clipboard_commands() -> &'static [ClipboardCommand] {
    if cfg!(target_os = "macos") {
        MACOS_CLIPBOARD
    } else if cfg!(target_os = "windows") {
        WINDOWS_CLIPBOARD
    } else {
        UNIX_CLIPBOARD
    }
}

async fn pipe_into(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = TokioCommand::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("Failed to start {program}"))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .await
            .with_context(|| format!("Failed to write to {program}"))?;
    }

    let status = child
        .wait()
        .await
        .with_context(|| format!("Failed waiting for {program}"))?;
    if status.success() {
        Ok(())
    } else {
        Err(anyhow!("{program} exited with {status}"))
    }
}

/// Copies text with the first clipboard utility that works. Returns its name.
pub async fn copy_to_clipboard(text: &str) -> Result<&'static str> {
    let mut failures = Vec::new();
    for command in clipboard_commands() {
        let program = command.program;
        match pipe_into(program, command.args, text).await {
            Ok(()) => return Ok(program),
            Err(err) => {
                debug!(program, error = %err, "clipboard utility unavailable");
                failures.push(format!("{program}: {err}"));
            }
        }
    }
    Err(anyhow!(
        "No clipboard utility succeeded ({})",
        failures.join("; ")
    ))
}
