use wxagent_core::{ActionRequest, AgentError};

const ANSWER_MARKER: &str = "Answer:";

/// Decodes the first balanced `{...}` group in a model reply.
///
/// Braces inside JSON string literals do not count towards the balance, so
/// a trailing `}` elsewhere in the reply is never swallowed.
pub fn extract_action(reply: &str) -> Result<ActionRequest, AgentError> {
    let candidate = first_brace_group(reply).ok_or_else(|| {
        AgentError::ActionParse(format!(
            "no action object in reply: {:?}",
            &reply[..floor_char_boundary(reply, 120)]
        ))
    })?;

    serde_json::from_str(candidate)
        .map_err(|e| AgentError::ActionParse(format!("{e} in {candidate}")))
}

/// Text after the first `Answer:` up to the end of that line, or the whole
/// reply when there is no marker.
pub fn extract_answer(reply: &str) -> String {
    match reply.find(ANSWER_MARKER) {
        Some(i) => reply[i + ANSWER_MARKER.len()..]
            .trim_start()
            .lines()
            .next()
            .unwrap_or_default()
            .trim()
            .to_string(),
        None => reply.trim().to_string(),
    }
}

fn first_brace_group(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in text[start..].char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }

    None
}

fn floor_char_boundary(s: &str, max: usize) -> usize {
    if s.len() <= max {
        return s.len();
    }
    (0..=max).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0)
}
