//! Platform dependent launch strategy
//!
//! POSIX hosts run the argument list as-is. Other hosts get a temporary
//! batch script holding the joined command line, run through `cmd.exe` so
//! the interpreter's `%ERRORLEVEL%` becomes the exit code.

use crate::error::{Error, Result};
use std::io::{self, Write};
use std::path::Path;
use tempfile::TempPath;
use tracing::debug;

/// Kind of shell the command is launched on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchTarget {
    Posix,
    Windows,
}

impl LaunchTarget {
    /// Target matching the machine we are running on
    pub fn host() -> Self {
        if cfg!(windows) {
            LaunchTarget::Windows
        } else {
            LaunchTarget::Posix
        }
    }

    pub fn is_posix(&self) -> bool {
        matches!(self, LaunchTarget::Posix)
    }
}

/// Temporary script deleted by [`ScriptGuard::cleanup`], or on drop
#[derive(Debug)]
pub struct ScriptGuard {
    path: TempPath,
}

impl ScriptGuard {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the script, reporting failure instead of swallowing it
    pub fn cleanup(self) -> io::Result<()> {
        self.path.close()
    }
}

/// Command vector ready to spawn, plus the script it depends on
#[derive(Debug)]
pub struct PreparedLaunch {
    pub argv: Vec<String>,
    pub script: Option<ScriptGuard>,
}

pub struct PlatformLauncher;

impl PlatformLauncher {
    pub const INTERPRETER: &'static str = "cmd.exe";
    const SCRIPT_PREFIX: &'static str = "nunit";
    const SCRIPT_SUFFIX: &'static str = ".bat";

    pub fn prepare(args: &[String], target: LaunchTarget, work_dir: &Path) -> Result<PreparedLaunch> {
        if target.is_posix() {
            return Ok(PreparedLaunch {
                argv: args.to_vec(),
                script: None,
            });
        }

        let script = Self::write_script(&args.join(" "), work_dir).map_err(Error::TempScript)?;
        debug!("Wrote launch script {}", script.path().display());

        let argv = vec![
            Self::INTERPRETER.to_string(),
            "/C".to_string(),
            script.path().to_string_lossy().into_owned(),
            "&&".to_string(),
            "exit".to_string(),
            "%ERRORLEVEL%".to_string(),
        ];

        Ok(PreparedLaunch {
            argv,
            script: Some(script),
        })
    }

    fn write_script(command_line: &str, work_dir: &Path) -> io::Result<ScriptGuard> {
        let mut file = tempfile::Builder::new()
            .prefix(Self::SCRIPT_PREFIX)
            .suffix(Self::SCRIPT_SUFFIX)
            .tempfile_in(work_dir)?;
        file.write_all(command_line.as_bytes())?;
        file.flush()?;
        Ok(ScriptGuard {
            path: file.into_temp_path(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args() -> Vec<String> {
        vec![
            "nunit3-console.exe".to_string(),
            "\"aaa/aaa.Tests.dll\"".to_string(),
            "/Platform:x64".to_string(),
        ]
    }

    #[test]
    fn test_posix_uses_arguments_verbatim() {
        let temp = TempDir::new().unwrap();
        let launch = PlatformLauncher::prepare(&args(), LaunchTarget::Posix, temp.path()).unwrap();
        assert_eq!(launch.argv, args());
        assert!(launch.script.is_none());
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_windows_goes_through_script() {
        let temp = TempDir::new().unwrap();
        let launch =
            PlatformLauncher::prepare(&args(), LaunchTarget::Windows, temp.path()).unwrap();
        let script = launch.script.expect("script");
        let script_path = script.path().to_path_buf();

        assert_eq!(launch.argv.len(), 6);
        assert_eq!(launch.argv[0], "cmd.exe");
        assert_eq!(launch.argv[1], "/C");
        assert_eq!(launch.argv[2], script_path.to_string_lossy());
        assert_eq!(&launch.argv[3..], ["&&", "exit", "%ERRORLEVEL%"]);

        assert_eq!(script_path.parent().unwrap(), temp.path());
        let name = script_path.file_name().unwrap().to_string_lossy();
        assert!(name.starts_with("nunit"));
        assert!(name.ends_with(".bat"));
        assert_eq!(
            std::fs::read_to_string(&script_path).unwrap(),
            "nunit3-console.exe \"aaa/aaa.Tests.dll\" /Platform:x64"
        );

        script.cleanup().unwrap();
        assert!(!script_path.exists());
    }

    #[test]
    fn test_script_is_removed_on_drop() {
        let temp = TempDir::new().unwrap();
        let path = {
            let launch =
                PlatformLauncher::prepare(&args(), LaunchTarget::Windows, temp.path()).unwrap();
            launch.script.unwrap().path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[test]
    fn test_cleanup_reports_missing_script() {
        let temp = TempDir::new().unwrap();
        let launch =
            PlatformLauncher::prepare(&args(), LaunchTarget::Windows, temp.path()).unwrap();
        let script = launch.script.unwrap();
        std::fs::remove_file(script.path()).unwrap();

        let err = script.cleanup().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_unwritable_work_dir_fails_before_launch() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("does-not-exist");
        let err = PlatformLauncher::prepare(&args(), LaunchTarget::Windows, &missing).unwrap_err();
        assert!(matches!(err, Error::TempScript(_)));
    }
}
