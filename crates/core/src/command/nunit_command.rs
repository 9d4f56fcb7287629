use crate::interfaces::LogSink;
use crate::scanner::OutputScanner;
use std::io::{self, BufRead, BufReader, Read};
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};
use std::thread;

/// Final command vector with its working directory and environment
#[derive(Debug, Clone)]
pub struct NUnitCommand {
    pub args: Vec<String>,
    pub working_dir: Option<PathBuf>,
    pub env: Vec<(String, String)>,
}

impl NUnitCommand {
    pub fn new(args: Vec<String>) -> Self {
        Self {
            args,
            working_dir: None,
            env: Vec::new(),
        }
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn with_env(mut self, key: String, value: String) -> Self {
        self.env.push((key, value));
        self
    }

    /// Display form; arguments containing spaces are wrapped in double quotes
    pub fn to_shell_command(&self) -> String {
        let mut cmd = String::new();
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                cmd.push(' ');
            }
            if arg.contains(' ') && !(arg.starts_with('"') && arg.ends_with('"')) {
                cmd.push_str(&format!("\"{arg}\""));
            } else {
                cmd.push_str(arg);
            }
        }
        cmd
    }

    /// Run to completion with stdout streamed through `scanner`.
    ///
    /// Stderr lines go straight to `log`. Blocks until the child exits.
    pub fn execute(&self, scanner: &mut OutputScanner<'_>, log: &dyn LogSink) -> io::Result<ExitStatus> {
        let Some((program, rest)) = self.args.split_first() else {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "No command specified",
            ));
        };

        let mut cmd = Command::new(program);
        cmd.args(rest)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        if let Some(ref dir) = self.working_dir {
            cmd.current_dir(dir);
        }

        for (key, value) in &self.env {
            tracing::debug!("Setting env: {}={}", key, value);
            cmd.env(key, value);
        }

        let mut child = cmd.spawn()?;
        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        let streamed = thread::scope(|scope| {
            let relay = stderr.map(|stderr| scope.spawn(move || relay_lines(stderr, log)));

            let mut result = match stdout {
                Some(mut stdout) => io::copy(&mut stdout, &mut *scanner).map(|_| ()),
                None => Ok(()),
            };
            result = result.and_then(|_| scanner.finish());

            if let Some(handle) = relay {
                match handle.join() {
                    Ok(Err(e)) => tracing::warn!("Failed to relay stderr: {e}"),
                    Err(_) => tracing::warn!("stderr relay panicked"),
                    Ok(Ok(())) => {}
                }
            }
            result
        });

        if streamed.is_err() {
            let _ = child.kill();
        }
        let status = child.wait()?;
        streamed?;
        Ok(status)
    }
}

fn relay_lines(stream: impl Read, log: &dyn LogSink) -> io::Result<()> {
    let mut reader = BufReader::new(stream);
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(());
        }
        log.write_line(&line)?;
    }
}
