use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::Local;

use crate::api::{TranslateRequest, TranslationResult};

/// Appends completed translations to a plain-text history file.
pub struct LoggingState {
    file_path: Option<String>,
    is_active: bool,
}

impl LoggingState {
    pub fn new(log_file: Option<String>) -> Result<Self, Box<dyn std::error::Error>> {
        let is_active = match &log_file {
            Some(path) => {
                test_file_access(path)?;
                true
            }
            None => false,
        };

        Ok(LoggingState {
            file_path: log_file,
            is_active,
        })
    }

    pub fn log_translation(
        &self,
        request: &TranslateRequest,
        result: &TranslationResult,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if !self.is_active {
            return Ok(());
        }

        let mut entry = format!(
            "## {} {} -> {}\n{}\n\n{}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            request.source_language,
            request.target_language,
            request.text,
            result.translated_text,
        );
        if !result.transliterated_text.is_empty() {
            entry.push_str("\n\n");
            entry.push_str(&result.transliterated_text);
        }
        self.write_to_log(&entry)
    }

    fn write_to_log(&self, content: &str) -> Result<(), Box<dyn std::error::Error>> {
        let Some(file_path) = self.file_path.as_ref() else {
            return Ok(());
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(file_path)?;
        let mut writer = BufWriter::new(file);

        for line in content.lines() {
            writeln!(writer, "{line}")?;
        }
        writeln!(writer)?;

        writer.flush()?;
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn get_status_string(&self) -> String {
        match (&self.file_path, self.is_active) {
            (Some(path), true) => format!(
                "logging to {}",
                Path::new(path)
                    .file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
            ),
            _ => "logging disabled".to_string(),
        }
    }
}

fn test_file_access(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.flush()?;
    Ok(())
}
