//! WebVTT caption files
//!
//! Only the cue payloads matter for summarization. Header, `NOTE`, `STYLE` and
//! `REGION` blocks are skipped, inline markup (`<c>`, `<v Speaker>`,
//! timestamps) is dropped, and the remaining cue texts are joined with single
//! spaces into one flat line of text.

use super::{title_from_path, SourceDocument, SourceProvider};
use crate::errors::{Result, SummarizeError};
use std::path::Path;
use std::time::Duration;

/// One caption cue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue {
    /// Optional cue identifier line
    pub identifier: Option<String>,
    /// Cue start time
    pub start: Duration,
    /// Cue end time
    pub end: Duration,
    /// Payload with markup removed; lines joined by spaces
    pub text: String,
}

/// Parse every cue of a WebVTT file
pub fn parse_cues(content: &str) -> Result<Vec<Cue>> {
    let content = content.trim_start_matches('\u{feff}');
    let normalized = content.replace("\r\n", "\n").replace('\r', "\n");
    let mut blocks = normalized.split("\n\n").filter(|b| !b.trim().is_empty());

    let header = blocks.next().unwrap_or("");
    if !header.trim_start().starts_with("WEBVTT") {
        return Err(SummarizeError::source_unavailable(
            "not a WebVTT file: missing WEBVTT header",
        ));
    }

    let mut cues = Vec::new();
    for block in blocks {
        let lines: Vec<&str> = block.lines().filter(|l| !l.trim().is_empty()).collect();
        let Some(first) = lines.first() else {
            continue;
        };
        if ["NOTE", "STYLE", "REGION"]
            .iter()
            .any(|kw| first.trim_start().starts_with(kw))
        {
            continue;
        }

        let Some(timing_at) = lines.iter().position(|l| l.contains("-->")) else {
            continue;
        };
        if timing_at > 1 {
            return Err(SummarizeError::source_unavailable(format!(
                "malformed cue: '{}'",
                first.trim()
            )));
        }

        let (start, end) = parse_timing(lines[timing_at])?;
        let identifier = (timing_at == 1).then(|| lines[0].trim().to_string());
        let text = lines[timing_at + 1..]
            .iter()
            .map(|line| strip_markup(line))
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        cues.push(Cue {
            identifier,
            start,
            end,
            text,
        });
    }

    Ok(cues)
}

/// Caption text of a WebVTT file, cue texts joined by single spaces
pub fn parse_vtt(content: &str) -> Result<String> {
    Ok(join_cues(&parse_cues(content)?, false))
}

fn join_cues(cues: &[Cue], dedup: bool) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(cues.len());
    for cue in cues {
        if cue.text.is_empty() {
            continue;
        }
        if dedup && parts.last() == Some(&cue.text.as_str()) {
            continue;
        }
        parts.push(&cue.text);
    }
    parts.join(" ")
}

fn parse_timing(line: &str) -> Result<(Duration, Duration)> {
    let malformed =
        || SummarizeError::source_unavailable(format!("malformed cue timing: '{}'", line.trim()));

    let (start, rest) = line.split_once("-->").ok_or_else(malformed)?;
    // Cue settings may follow the end timestamp
    let end = rest.split_whitespace().next().ok_or_else(malformed)?;

    let start = parse_timestamp(start.trim()).ok_or_else(malformed)?;
    let end = parse_timestamp(end).ok_or_else(malformed)?;
    Ok((start, end))
}

/// `hh:mm:ss.ttt` or `mm:ss.ttt`
fn parse_timestamp(stamp: &str) -> Option<Duration> {
    let (clock, millis) = stamp.split_once('.')?;
    if millis.len() != 3 {
        return None;
    }
    let millis: u64 = millis.parse().ok()?;

    let fields: Vec<u64> = clock
        .split(':')
        .map(|f| f.parse().ok())
        .collect::<Option<_>>()?;
    let (hours, minutes, seconds) = match fields.as_slice() {
        [m, s] => (0, *m, *s),
        [h, m, s] => (*h, *m, *s),
        _ => return None,
    };
    if minutes > 59 || seconds > 59 {
        return None;
    }

    Some(Duration::from_millis(
        ((hours * 60 + minutes) * 60 + seconds) * 1000 + millis,
    ))
}

/// Drop `<...>` tags and decode the character references WebVTT allows
fn strip_markup(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut in_tag = false;
    for c in line.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }

    out.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&nbsp;", " ")
        .replace("&lrm;", "")
        .replace("&rlm;", "")
        .replace("&amp;", "&")
}

/// Reads `.vtt` caption files from disk; the title is the file stem
#[derive(Debug, Clone, Copy, Default)]
pub struct VttFileSource {
    dedup_repeats: bool,
}

impl VttFileSource {
    /// Create a source that keeps every cue
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip a cue whose text repeats the previous cue.
    ///
    /// Auto-generated captions often roll the same line through several cues.
    pub fn with_dedup_repeats(mut self, dedup: bool) -> Self {
        self.dedup_repeats = dedup;
        self
    }
}

impl SourceProvider for VttFileSource {
    fn fetch_source_text(&self, identifier: &str) -> Result<SourceDocument> {
        let path = Path::new(identifier);
        let content = std::fs::read_to_string(path).map_err(|e| {
            SummarizeError::source_unavailable(format!("cannot read {}: {}", identifier, e))
        })?;
        let cues = parse_cues(&content)?;
        Ok(SourceDocument::new(
            title_from_path(path),
            join_cues(&cues, self.dedup_repeats),
        ))
    }
}
