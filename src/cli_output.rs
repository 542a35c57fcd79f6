// Mode-aware CLI output: colored for terminals, plain for pipes, JSON for tools
use clap::ValueEnum;
use colored::Colorize;
use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::Table;
use serde::Serialize;
use std::io::{self, IsTerminal};
use std::path::Path;
use std::time::Duration;

use vigcrack::{Analysis, Strategy};

/// Output mode for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Human-friendly output with colors
    Human,
    /// Machine-readable JSON output
    Json,
    /// Plain text without colors (for pipes/logs)
    Plain,
}

impl OutputMode {
    /// Auto-detect output mode based on environment
    pub fn auto() -> Self {
        if std::env::var("VIGCRACK_JSON").is_ok() {
            Self::Json
        } else if !io::stdout().is_terminal() {
            Self::Plain
        } else {
            Self::Human
        }
    }
}

/// Structured result for agent consumption
#[derive(Debug, Clone, Serialize)]
pub struct CommandResult {
    pub success: bool,
    pub command: String,
    pub duration_ms: u64,
    pub output: serde_json::Value,
    pub errors: Vec<String>,
}

/// One strategy's outcome in a `compare` run.
pub struct ComparisonRow {
    pub strategy: Strategy,
    pub outcome: Result<Analysis, String>,
}

/// CLI output writer with mode awareness
pub struct OutputWriter {
    mode: OutputMode,
}

impl OutputWriter {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    /// Explicit mode when given, auto-detected otherwise.
    pub fn resolve(mode: Option<OutputMode>) -> Self {
        Self::new(mode.unwrap_or_else(OutputMode::auto))
    }

    /// Print a section header
    pub fn section(&self, title: &str) {
        match self.mode {
            OutputMode::Human => {
                println!();
                println!("{}", title.cyan().bold());
                println!("{}", "═".repeat(title.chars().count()).cyan());
            }
            OutputMode::Plain => {
                println!("{}", title);
            }
            OutputMode::Json => {}
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        match self.mode {
            OutputMode::Human => println!("  {} {}", "✓".green(), message),
            OutputMode::Plain => println!("[OK] {}", message),
            OutputMode::Json => {}
        }
    }

    /// Print a key-value table
    pub fn table(&self, rows: &[(&str, String)]) {
        let max_key_len = rows.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
        match self.mode {
            OutputMode::Human => {
                for (key, value) in rows {
                    println!("  {:width$} │ {}", key.yellow(), value, width = max_key_len);
                }
            }
            OutputMode::Plain => {
                for (key, value) in rows {
                    println!("  {:width$} : {}", key, value, width = max_key_len);
                }
            }
            OutputMode::Json => {}
        }
    }

    /// Print the result of a single cryptanalysis run
    pub fn analysis(&self, analysis: &Analysis, source: &Path, elapsed: Duration) {
        let title = format!(
            "Cryptanalysis v{} of {}:",
            analysis.strategy.version(),
            source.display()
        );

        match self.mode {
            OutputMode::Human => {
                self.section(&title);
                self.table(&[
                    ("Strategy", analysis.strategy.name().to_string()),
                    ("Key length", analysis.key_length.to_string()),
                    ("Key", format_key(analysis)),
                    ("Score", format!("{:.4}", analysis.score)),
                    ("Time", format_elapsed(elapsed)),
                ]);
                println!();
                println!("{}", analysis.plaintext.green());
            }
            OutputMode::Plain => {
                self.section(&title);
                println!("{}", analysis.plaintext);
            }
            OutputMode::Json => self.emit_result(&CommandResult {
                success: true,
                command: "crack".to_string(),
                duration_ms: elapsed.as_millis() as u64,
                output: serde_json::to_value(analysis).unwrap_or_default(),
                errors: vec![],
            }),
        }
    }

    /// Print every strategy's outcome side by side
    pub fn comparison(&self, rows: &[ComparisonRow], source: &Path, elapsed: Duration) {
        if self.mode == OutputMode::Json {
            let output: Vec<_> = rows
                .iter()
                .map(|row| match &row.outcome {
                    Ok(analysis) => serde_json::json!({
                        "strategy": row.strategy,
                        "success": true,
                        "analysis": analysis,
                    }),
                    Err(e) => serde_json::json!({
                        "strategy": row.strategy,
                        "success": false,
                        "error": e,
                    }),
                })
                .collect();
            self.emit_result(&CommandResult {
                success: rows.iter().any(|row| row.outcome.is_ok()),
                command: "compare".to_string(),
                duration_ms: elapsed.as_millis() as u64,
                output: serde_json::Value::Array(output),
                errors: rows
                    .iter()
                    .filter_map(|row| row.outcome.as_ref().err().cloned())
                    .collect(),
            });
            return;
        }

        self.section(&format!("Strategy comparison for {}:", source.display()));

        let mut table = Table::new();
        let preset = if self.mode == OutputMode::Human {
            UTF8_FULL
        } else {
            ASCII_FULL
        };
        table.load_preset(preset).set_header(vec![
            "Version",
            "Strategy",
            "Key length",
            "Key",
            "Score",
            "Plaintext",
        ]);

        for row in rows {
            match &row.outcome {
                Ok(analysis) => table.add_row(vec![
                    analysis.strategy.version().to_string(),
                    analysis.strategy.name().to_string(),
                    analysis.key_length.to_string(),
                    format_key(analysis),
                    format!("{:.4}", analysis.score),
                    preview(&analysis.plaintext, 40),
                ]),
                Err(e) => table.add_row(vec![
                    row.strategy.version().to_string(),
                    row.strategy.name().to_string(),
                    "-".to_string(),
                    "-".to_string(),
                    "-".to_string(),
                    format!("failed: {}", e),
                ]),
            };
        }

        println!("{table}");
        if self.mode == OutputMode::Human {
            println!("  Completed in {}", format_elapsed(elapsed));
        }
    }

    /// Print a transformed text (encrypt, decrypt, prepare)
    pub fn text(&self, command: &str, text: &str, elapsed: Duration) {
        match self.mode {
            OutputMode::Human | OutputMode::Plain => println!("{}", text),
            OutputMode::Json => self.emit_result(&CommandResult {
                success: true,
                command: command.to_string(),
                duration_ms: elapsed.as_millis() as u64,
                output: serde_json::json!({ "text": text }),
                errors: vec![],
            }),
        }
    }

    /// Emit final structured result (for JSON mode)
    pub fn emit_result(&self, result: &CommandResult) {
        if let Ok(json) = serde_json::to_string_pretty(&result) {
            println!("{}", json);
        }
    }
}

fn format_key(analysis: &Analysis) -> String {
    let shifts: Vec<String> = analysis.key.iter().map(|s| s.to_string()).collect();
    format!("{} ({})", analysis.key_letters, shifts.join(","))
}

/// Format elapsed time in human-readable form
pub fn format_elapsed(elapsed: Duration) -> String {
    let millis = elapsed.as_millis();
    if millis < 1 {
        "<1ms".to_string()
    } else if millis < 1000 {
        format!("{}ms", millis)
    } else {
        format!("{:.2}s", elapsed.as_secs_f64())
    }
}

/// First `width` characters of `text`, with an ellipsis when cut
pub fn preview(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let head: String = text.chars().take(width).collect();
        format!("{}…", head)
    }
}
