//! The config.lua shim.
//!
//! Game scripts believe they read and write a `config.lua` settings file.
//! No such file exists: reads are served from text synthesized out of the
//! config registry, and writes are captured, parsed back into registry keys
//! on close, and flushed to disk. Only the handful of keys the scripts may
//! legitimately change is applied; everything else they write is dropped.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{bail, Context, Result};
use log::warn;
use regex::Regex;

use crate::config::{keys, ConfigManager};
use crate::lang::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProxyMode {
    Read,
    Write,
}

pub struct ConfigFileProxy {
    config: Rc<RefCell<ConfigManager>>,
    read_data: Vec<u8>,
    read_pos: usize,
    captured: String,
    setting_line: Regex,
    applied: bool,
}

impl ConfigFileProxy {
    /// Open the proxy in mode `"r"` or `"w"`. Only `config.lua` is proxied;
    /// scripts asking for any other file are a bug in the caller.
    pub fn open(
        config: Rc<RefCell<ConfigManager>>,
        filename: &str,
        mode: &str,
    ) -> Result<ConfigFileProxy> {
        if !filename.contains("config.lua") {
            bail!("'{filename}' is not backed by the config proxy");
        }
        let mode = match mode {
            "r" => ProxyMode::Read,
            "w" => ProxyMode::Write,
            other => bail!("unsupported config.lua open mode '{other}'"),
        };

        let read_data = match mode {
            ProxyMode::Read => synthesize(&config.borrow()).into_bytes(),
            ProxyMode::Write => Vec::new(),
        };

        Ok(ConfigFileProxy {
            config,
            read_data,
            read_pos: 0,
            captured: String::new(),
            setting_line: Regex::new(r"^\s*([A-Za-z0-9_]+)\s*=\s*(.*?)\s*$")
                .expect("setting pattern is well-formed"),
            applied: false,
        })
    }

    /// Drain synthesized text into `buf`, returning the bytes copied.
    pub fn read(&mut self, buf: &mut [u8]) -> usize {
        let remaining = &self.read_data[self.read_pos..];
        let count = remaining.len().min(buf.len());
        buf[..count].copy_from_slice(&remaining[..count]);
        self.read_pos += count;
        count
    }

    /// Everything left to read, as text.
    pub fn read_to_string(&mut self) -> String {
        let remaining = String::from_utf8_lossy(&self.read_data[self.read_pos..]).into_owned();
        self.read_pos = self.read_data.len();
        remaining
    }

    /// Capture written settings lines. Lua-style `--` comment lines are
    /// dropped here so close only sees real settings.
    pub fn write(&mut self, chunk: &str) {
        for line in chunk.lines() {
            if line.is_empty() || line.starts_with("--") {
                continue;
            }
            self.captured.push_str(line);
            self.captured.push('\n');
        }
    }

    /// Apply the captured settings and flush the registry.
    pub fn close(mut self) -> Result<()> {
        self.apply_captured()
    }

    fn apply_captured(&mut self) -> Result<()> {
        if self.applied {
            return Ok(());
        }
        self.applied = true;

        if self.captured.is_empty() {
            return Ok(());
        }

        let captured = std::mem::take(&mut self.captured);
        {
            let mut config = self.config.borrow_mut();
            for line in captured.lines() {
                let Some(parts) = self.setting_line.captures(line) else {
                    warn!("ignoring malformed config.lua line: {line}");
                    continue;
                };
                let name = parts.get(1).map(|m| m.as_str()).unwrap_or_default();
                let value = unquote(parts.get(2).map(|m| m.as_str()).unwrap_or_default());
                apply_setting(&mut config, name, value)?;
            }
        }

        self.config
            .borrow_mut()
            .flush_to_disk()
            .context("flushing settings written through config.lua")
    }
}

impl Drop for ConfigFileProxy {
    fn drop(&mut self) {
        if let Err(err) = self.apply_captured() {
            warn!("applying config.lua settings on drop: {err:#}");
        }
    }
}

fn apply_setting(config: &mut ConfigManager, name: &str, value: &str) -> Result<()> {
    match name {
        "GAME_LANGUAGE" => {
            let language = Language::parse(value)
                .with_context(|| format!("config.lua set an unsupported language '{value}'"))?;
            config.set_str(keys::LANGUAGE, language.code());
        }
        "GAME_SUBTITLES" => config.set_bool(keys::SUBTITLES, value == "true"),
        "SFX_SOUND_VOLUME" => config.set_int(keys::SFX_VOLUME, scale_volume(value)),
        "SFX_MUSIC_VOLUME" => config.set_int(keys::MUSIC_VOLUME, scale_volume(value)),
        "SFX_SPEECH_VOLUME" => config.set_int(keys::SPEECH_VOLUME, scale_volume(value)),
        // All other settings are fixed; the scripts cannot change them.
        _ => {}
    }
    Ok(())
}

fn scale_volume(value: &str) -> i64 {
    let fraction: f64 = value.parse().unwrap_or(0.0);
    (fraction * 255.0) as i64
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

fn synthesize(config: &ConfigManager) -> String {
    let sfx_volume = stored_volume(config, keys::SFX_VOLUME, 1.0);
    let music_volume = stored_volume(config, keys::MUSIC_VOLUME, 0.5);
    let speech_volume = stored_volume(config, keys::SPEECH_VOLUME, 1.0);
    let subtitles = config.get_bool(keys::SUBTITLES).unwrap_or(true);
    let language = config
        .get_str(keys::LANGUAGE)
        .and_then(|code| Language::parse(code).ok())
        .unwrap_or(Language::English);

    format!(
        "GAME_LANGUAGE = \"{}\"\r\n\
         GAME_SUBTITLES = {}\r\n\
         MAX_MEMORY_USAGE = 256000000\r\n\
         GFX_VSYNC_ACTIVE = true\r\n\
         SFX_SAMPLING_RATE = 44100\r\n\
         SFX_CHANNEL_COUNT = 32\r\n\
         SFX_SOUND_VOLUME = {}\r\n\
         SFX_MUSIC_VOLUME = {}\r\n\
         SFX_SPEECH_VOLUME = {}\r\n",
        language.code(),
        if subtitles { "true" } else { "false" },
        format_double(sfx_volume),
        format_double(music_volume),
        format_double(speech_volume),
    )
}

fn stored_volume(config: &ConfigManager, key: &str, default: f64) -> f64 {
    match config.get_int(key) {
        Some(stored) => stored as f64 / 255.0,
        None => default,
    }
}

/// Render a volume with a `.` decimal mark no matter the locale. A comma
/// would split the value into two Lua expressions.
fn format_double(value: f64) -> String {
    let negative = value < 0.0;
    let value = value.abs();
    let integer_part = value.floor();
    let fractional_part = (value - integer_part) * 1_000_000.0;

    format!(
        "{}{:.0}.{:.0}",
        if negative { "-" } else { "" },
        integer_part,
        fractional_part
    )
}
