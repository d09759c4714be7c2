use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, RetinaError};

/// Read classifier scores from a `.sco` file.
///
/// The first line is a header and is skipped. Every other non-blank line
/// holds `<id> <score>`, separated by spaces or tabs.
pub fn read_scores(path: &Path) -> Result<Vec<f64>> {
    let text = fs::read_to_string(path)?;
    let scores = parse_scores(&text).map_err(|(line, reason)| RetinaError::ScoreParse {
        path: path.to_path_buf(),
        line,
        reason,
    })?;
    debug!(path = %path.display(), count = scores.len(), "Read scores");
    Ok(scores)
}

/// On failure returns the 1-based line number and the reason.
fn parse_scores(text: &str) -> std::result::Result<Vec<f64>, (usize, String)> {
    let mut scores = Vec::new();
    for (idx, line) in text.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 2 {
            return Err((
                idx + 1,
                format!("expected `<id> <score>`, found {} fields", tokens.len()),
            ));
        }
        // f64 parsing also accepts `inf`, `-inf` and `nan`.
        let score = tokens[1]
            .parse::<f64>()
            .map_err(|e| (idx + 1, format!("invalid score `{}`: {e}", tokens[1])))?;
        scores.push(score);
    }
    Ok(scores)
}
