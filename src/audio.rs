//! 音频转码与时长探测，基于外部的ffmpeg命令。
//!
//! 首先要安装ffmpeg并保证其在PATH中（或在配置文件中指定完整路径）。
//! 命令的执行被抽象为[`CommandRunner`]，便于在测试中替换。

use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;

use lazy_static::lazy_static;
use log::{debug, log_enabled, Level};
use regex::Regex;

use crate::config::UtilConfig;
use crate::exception::Exception;
use crate::strutil;

lazy_static! {
    // ffmpeg -i 输出中的时长行，例如 "Duration: 00:00:04.32, start: ..."
    static ref DURATION_LINE: Regex = Regex::new(r"Duration:\s*([0-9:.]+)\s*,").unwrap();
}

/// 外部命令的执行抽象。
///
/// 实现负责启动进程并处置其输出；输出的排空发生在独立的后台线程上，
/// 只是为了防止管道缓冲区写满阻塞子进程，不提供任何完成信号。
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner {
    /// 执行命令并等待退出，丢弃输出，返回退出码。
    fn execute(&self, work_dir: Option<PathBuf>, cmd: &[String]) -> Result<i32, Exception>;

    /// 执行命令并返回第一行输出。退出码不是0或1时返回`None`。
    fn read_first_line(
        &self,
        work_dir: Option<PathBuf>,
        cmd: &[String],
    ) -> Result<Option<String>, Exception>;

    /// 执行命令并返回全部输出（标准输出与标准错误合并）。
    fn read_all_output(&self, work_dir: Option<PathBuf>, cmd: &[String]) -> Result<String, Exception>;
}

/// 基于`std::process::Command`的[`CommandRunner`]实现。
pub struct SystemRunner;

impl SystemRunner {
    fn spawn(
        work_dir: Option<PathBuf>,
        cmd: &[String],
    ) -> Result<std::process::Child, Exception> {
        if cmd.is_empty() {
            return Err(Exception::invalid("命令不能为空"));
        }
        let mut command = Command::new(&cmd[0]);
        command
            .args(&cmd[1..])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = work_dir.filter(|d| d.is_dir()) {
            command.current_dir(dir);
        }
        command.spawn().map_err(|e| Exception::CommandFailed {
            command: cmd.join(" "),
            message: e.to_string(),
        })
    }
}

// 在后台线程上持续读空管道，防止子进程因缓冲区写满而阻塞
fn drain_in_background(reader: impl Read + Send + 'static) {
    thread::spawn(move || {
        let mut reader = reader;
        let mut buf = [0u8; 300];
        loop {
            match reader.read(&mut buf) {
                Ok(0) | Err(_) => break,
                Ok(n) => {
                    if log_enabled!(Level::Debug) {
                        debug!("{}", String::from_utf8_lossy(&buf[..n]));
                    }
                }
            }
        }
    });
}

impl CommandRunner for SystemRunner {
    fn execute(&self, work_dir: Option<PathBuf>, cmd: &[String]) -> Result<i32, Exception> {
        let mut child = Self::spawn(work_dir, cmd)?;
        if let Some(stdout) = child.stdout.take() {
            drain_in_background(stdout);
        }
        if let Some(stderr) = child.stderr.take() {
            drain_in_background(stderr);
        }
        let status = child.wait().map_err(|e| Exception::CommandFailed {
            command: cmd.join(" "),
            message: e.to_string(),
        })?;
        Ok(status.code().unwrap_or(-1))
    }

    fn read_first_line(
        &self,
        work_dir: Option<PathBuf>,
        cmd: &[String],
    ) -> Result<Option<String>, Exception> {
        let mut child = Self::spawn(work_dir, cmd)?;
        let first_line = match child.stdout.take() {
            Some(stdout) => {
                let mut reader = BufReader::new(stdout);
                let mut line = String::new();
                let got = match reader.read_line(&mut line) {
                    Ok(n) if n > 0 => {
                        Some(line.trim_end_matches(|c| c == '\r' || c == '\n').to_string())
                    }
                    _ => None,
                };
                // 剩余输出交给后台线程排空，避免子进程写管道时被阻塞
                drain_in_background(reader);
                got
            }
            None => None,
        };
        if let Some(stderr) = child.stderr.take() {
            drain_in_background(stderr);
        }
        let status = child.wait().map_err(|e| Exception::CommandFailed {
            command: cmd.join(" "),
            message: e.to_string(),
        })?;
        match status.code() {
            Some(0) | Some(1) => Ok(first_line),
            _ => Ok(None),
        }
    }

    fn read_all_output(&self, work_dir: Option<PathBuf>, cmd: &[String]) -> Result<String, Exception> {
        let mut child = Self::spawn(work_dir, cmd)?;
        let mut output = String::new();
        if let Some(mut stdout) = child.stdout.take() {
            let _ = stdout.read_to_string(&mut output);
        }
        // ffmpeg把媒体信息写到标准错误，合并两路输出
        if let Some(mut stderr) = child.stderr.take() {
            let _ = stderr.read_to_string(&mut output);
        }
        let status = child.wait().map_err(|e| Exception::CommandFailed {
            command: cmd.join(" "),
            message: e.to_string(),
        })?;
        match status.code() {
            Some(0) | Some(1) => Ok(output),
            other => Err(Exception::CommandFailed {
                command: cmd.join(" "),
                message: format!("退出码{:?}", other),
            }),
        }
    }
}

/// 音频格式转换器。
pub struct AudioConverter<R: CommandRunner> {
    runner: R,
    ffmpeg_path: String,
    sample_rate: u32,
}

impl AudioConverter<SystemRunner> {
    pub fn new(config: &UtilConfig) -> Self {
        Self::with_runner(SystemRunner, config)
    }
}

impl<R: CommandRunner> AudioConverter<R> {
    /// 使用给定的命令执行器构造，测试时可以传入mock。
    pub fn with_runner(runner: R, config: &UtilConfig) -> Self {
        Self {
            runner,
            ffmpeg_path: config.ffmpeg_path().to_string(),
            sample_rate: config.sample_rate(),
        }
    }

    /// 按配置的缺省采样率转换音频文件格式，格式由输出文件的扩展名决定。
    pub fn convert(&self, input: &Path, output: &Path) -> Result<(), Exception> {
        self.convert_with_rate(input, output, self.sample_rate)
    }

    /// 按指定采样率（16000、8000、44100等）转换音频文件格式。
    pub fn convert_with_rate(
        &self,
        input: &Path,
        output: &Path,
        sample_rate: u32,
    ) -> Result<(), Exception> {
        let cmd = vec![
            self.ffmpeg_path.clone(),
            "-y".to_string(),
            "-i".to_string(),
            input.to_string_lossy().into_owned(),
            "-ar".to_string(),
            sample_rate.to_string(),
            output.to_string_lossy().into_owned(),
        ];
        let exit = self.runner.execute(None, &cmd)?;
        if exit != 0 {
            return Err(Exception::CommandFailed {
                command: cmd.join(" "),
                message: format!("退出码{}", exit),
            });
        }
        Ok(())
    }

    /// 获取音频文件的持续时长，例如`00:00:04.32`。
    ///
    /// `path`可以是本地文件，也可以是ffmpeg支持的网络地址。
    pub fn duration(&self, path: &str) -> Result<String, Exception> {
        let cmd = vec![
            self.ffmpeg_path.clone(),
            "-i".to_string(),
            path.to_string(),
        ];
        let output = self.runner.read_all_output(None, &cmd)?;
        for line in output.lines() {
            let line = line.trim();
            if line.starts_with("Duration") {
                if let Some(captures) = DURATION_LINE.captures(line) {
                    return Ok(captures[1].to_string());
                }
            }
        }
        Err(Exception::CommandFailed {
            command: cmd.join(" "),
            message: "输出中没有时长信息".to_string(),
        })
    }
}

/// 将`HH:MM:SS.ss`形式的时长格式化为`M′S″`，忽略小时。
///
/// 分钟为零时只保留秒。无法识别的输入返回`None`。
pub fn format_duration(duration: &str) -> Option<String> {
    if strutil::is_blank(duration) {
        return None;
    }
    let parts: Vec<&str> = duration.split(':').collect();
    if parts.len() != 3 {
        return None;
    }
    let minutes: u32 = parts[1].parse().ok()?;
    let seconds: f32 = parts[2].parse().ok()?;
    if minutes == 0 {
        Some(format!("{}″", seconds))
    } else {
        Some(format!("{}′{}″", minutes, seconds))
    }
}
