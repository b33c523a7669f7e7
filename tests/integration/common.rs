use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use std::sync::atomic::{AtomicUsize, Ordering};

pub use courseplan::arg::arg_parse_strategy::CommandArgParser;
pub use courseplan::command::command_parser::CommandParser;
use courseplan::core::context::AppContext;

pub fn binary_path() -> String {
    let raw = PathBuf::from(env!("CARGO_BIN_EXE_courseplan"));
    if raw.is_absolute() {
        return raw.to_string_lossy().to_string();
    }
    let from_manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(&raw);
    if from_manifest.exists() {
        return from_manifest.to_string_lossy().to_string();
    }
    raw.to_string_lossy().to_string()
}

static COUNTER: AtomicUsize = AtomicUsize::new(0);

pub fn make_temp_dir(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "{prefix}-{}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    let _ = fs::create_dir_all(&dir);
    dir
}

pub fn write_valid_config(dir: &PathBuf) {
    let cfg = r#"{
      "metadata_kind": { "value": "url", "description": "Which value the link section collects" },
      "url_placeholder": { "value": "https://example.com/course", "description": "URL fallback" },
      "xpath_placeholder": { "value": "/html/body/div[1]/a", "description": "XPath fallback" },
      "file_logging_enabled": { "value": "True", "description": "file logging" }
    }"#;
    fs::write(dir.join("config.json"), cfg).unwrap();
}

pub fn write_xpath_config(dir: &PathBuf) {
    let cfg = r#"{
      "metadata_kind": { "value": "xpath", "description": "Which value the link section collects" },
      "url_placeholder": { "value": "https://example.com/course", "description": "URL fallback" },
      "xpath_placeholder": { "value": "/html/body/div[1]/a", "description": "XPath fallback" },
      "file_logging_enabled": { "value": "True", "description": "file logging" }
    }"#;
    fs::write(dir.join("config.json"), cfg).unwrap();
}

pub fn run_with_input(dir: &PathBuf, input: &str) -> Output {
    let mut child = Command::new(binary_path())
        .current_dir(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn binary");

    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();

    child.wait_with_output().unwrap()
}

fn strip_ansi_and_control(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut bytes = s.bytes().peekable();

    while let Some(b) = bytes.next() {
        if b == 0x1B {
            if matches!(bytes.peek(), Some(b'[')) {
                let _ = bytes.next();
                for nb in bytes.by_ref() {
                    if (nb as char).is_ascii_alphabetic() {
                        break;
                    }
                }
                continue;
            }
        }

        if b.is_ascii_control() {
            continue;
        }

        out.push(b as char);
    }

    out
}

pub fn normalized_lines(buf: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(buf)
        .lines()
        .map(|l| {
            let stripped = strip_ansi_and_control(l);
            let trimmed = stripped.trim();
            if let Some(rest) = trimmed.strip_prefix('>') {
                rest.trim().to_string()
            } else {
                trimmed.to_string()
            }
        })
        .filter(|l| !l.is_empty())
        .collect()
}

pub fn build_context(dir: &PathBuf) -> AppContext {
    AppContext::new_with_paths(
        dir.join("config.json"),
        dir.join("exports"),
        dir.join("logs"),
        dir.join(".env"),
    )
    .expect("context should initialize")
}

pub fn execute_command(
    line: &str,
    arg_parser: &CommandArgParser,
    command_parser: &CommandParser,
    ctx: &mut AppContext,
) {
    try_execute_command(line, arg_parser, command_parser, ctx)
        .unwrap_or_else(|e| panic!("command failed for '{}': {}", line, e));
}

pub fn try_execute_command(
    line: &str,
    arg_parser: &CommandArgParser,
    command_parser: &CommandParser,
    ctx: &mut AppContext,
) -> Result<(), String> {
    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or("");
    let raw_args: Vec<String> = parts.map(|s| s.to_string()).collect();

    let args = arg_parser
        .parse(command, &raw_args)
        .map_err(|e| e.to_string())?;
    let cmd = command_parser
        .parse(command, &args)
        .map_err(|e| e.to_string())?;
    cmd.execute(ctx).map_err(|e| e.to_string())
}

pub fn read_log_contents(dir: &PathBuf) -> Option<String> {
    let logs_dir = dir.join("logs");
    let mut entries = fs::read_dir(&logs_dir).ok()?;
    let entry = entries.find_map(|e| e.ok())?;
    fs::read_to_string(entry.path()).ok()
}
