// file: src/utils/browser.rs
// description: hands the finished report to the platform's default browser
// reference: https://doc.rust-lang.org/std/process/struct.Command.html

use crate::error::{PipelineError, Result};
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

fn opener(path: &Path) -> Command {
    if cfg!(target_os = "windows") {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", ""]).arg(path);
        command
    } else if cfg!(target_os = "macos") {
        let mut command = Command::new("open");
        command.arg(path);
        command
    } else {
        let mut command = Command::new("xdg-open");
        command.arg(path);
        command
    }
}

/// Launches the viewer without waiting for it to exit.
pub fn open_in_browser(path: &Path) -> Result<()> {
    let mut command = opener(path);
    debug!("Opening report with {:?}", command);

    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|source| PipelineError::FileOperation {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opener_targets_report_path() {
        let command = opener(Path::new("interesting.html"));
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(args.last().copied(), Some(std::ffi::OsStr::new("interesting.html")));
    }
}
