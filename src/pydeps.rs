//! Python dependency installation.
//!
//! Runs on every platform, after tool installs, whether or not any tool work
//! happened. Interpreter selection prefers `python3` and falls back to
//! `python` unconditionally; if neither exists the spawn failure surfaces
//! when the command runs, not before.

use crate::prereqs::ToolProbe;
use crate::shell::InstallCommand;

/// Requirements manifest consumed by the pip step, relative to the
/// repository root the tool is invoked from.
pub const DEFAULT_MANIFEST: &str = "external/pip_requirements.txt";

/// Choose the Python interpreter for the pip step.
pub fn pick_interpreter(probe: &ToolProbe) -> &'static str {
    if probe.is_installed("python3") {
        "python3"
    } else {
        "python"
    }
}

/// Build the pip invocation for `manifest`.
///
/// Packages land in the user site via `--user`, so no elevation is needed.
pub fn pip_install_command(interpreter: &str, manifest: &str) -> InstallCommand {
    InstallCommand::new(
        interpreter,
        &["-m", "pip", "install", "-r", manifest, "--user"],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn probe_with_binaries(names: &[&str]) -> (TempDir, ToolProbe) {
        let dir = TempDir::new().unwrap();
        for name in names {
            let path = dir.path().join(name);
            fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
            }
        }
        let probe = ToolProbe::with_entries(vec![dir.path().to_path_buf()]);
        (dir, probe)
    }

    #[test]
    fn prefers_python3_when_available() {
        let (_dir, probe) = probe_with_binaries(&["python3", "python"]);
        assert_eq!(pick_interpreter(&probe), "python3");
    }

    #[test]
    fn falls_back_to_python_without_python3() {
        let (_dir, probe) = probe_with_binaries(&["python"]);
        assert_eq!(pick_interpreter(&probe), "python");
    }

    #[test]
    fn falls_back_to_python_even_when_nothing_is_installed() {
        let probe = ToolProbe::with_entries(Vec::new());
        assert_eq!(pick_interpreter(&probe), "python");
    }

    #[test]
    fn pip_command_targets_user_site() {
        let cmd = pip_install_command("python3", DEFAULT_MANIFEST);
        assert_eq!(cmd.program, "python3");
        assert_eq!(
            cmd.args,
            vec![
                "-m",
                "pip",
                "install",
                "-r",
                "external/pip_requirements.txt",
                "--user"
            ]
        );
        assert!(!cmd.as_root);
    }

    #[test]
    fn pip_command_honors_custom_manifest() {
        let cmd = pip_install_command("python", "deps/reqs.txt");
        assert!(cmd.args.contains(&"deps/reqs.txt".to_string()));
    }
}
