use crate::error::{Error, Result};
use regex::Regex;

/// A compiled filename pattern: one capture group per `%(tag)` placeholder,
/// every other character matched literally, anchored at both ends.
#[derive(Debug, Clone)]
pub struct Pattern {
    pub(crate) regex: Regex,
    pub(crate) tags: Vec<String>,
}

impl Pattern {
    pub fn compile(template: &str) -> Result<Pattern> {
        let mut regex_str = String::new();
        let mut tags = Vec::new();
        let mut pos = 0;

        loop {
            // check if a tag starts here, else fall back to one literal
            if let Some((next, name)) = scan_tag(template, pos)? {
                regex_str.push_str("(.*)");
                tags.push(name);
                pos = next;
                continue;
            }
            match scan_literal(template, pos)? {
                Some((next, ch)) => {
                    regex_str.push_str(&regex::escape(&ch.to_string()));
                    pos = next;
                }
                None => break,
            }
        }

        let regex = Regex::new(&format!("^{}$", regex_str)).map_err(|source| {
            Error::MatchSpecInvalid {
                pattern: template.to_string(),
                source,
            }
        })?;

        Ok(Pattern { regex, tags })
    }

    /// Tag names in source order, duplicates included. Index-aligned with
    /// the capture groups.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

/// Recognizes a `%(name)` placeholder at `pos`. `Ok(None)` means the input
/// here is not a placeholder opener and the literal recognizer should run
/// instead.
fn scan_tag(template: &str, pos: usize) -> Result<Option<(usize, String)>> {
    if !template[pos..].starts_with("%(") {
        return Ok(None);
    }

    let mut name = String::new();
    let mut cursor = pos + 2;
    loop {
        // an unescaped ')' ends the tag name
        if template[cursor..].starts_with(')') {
            return Ok(Some((cursor + 1, name)));
        }
        match scan_literal(template, cursor)? {
            Some((next, ch)) => {
                name.push(ch);
                cursor = next;
            }
            None => {
                return Err(Error::UnterminatedPlaceholder {
                    pattern: template.to_string(),
                    offset: pos,
                })
            }
        }
    }
}

/// Consumes one literal character at `pos`. `\` drops itself and yields the
/// following character verbatim, whatever it is. `Ok(None)` means end of
/// input.
fn scan_literal(template: &str, pos: usize) -> Result<Option<(usize, char)>> {
    let mut chars = template[pos..].chars();
    let Some(ch) = chars.next() else {
        return Ok(None);
    };
    if ch != '\\' {
        return Ok(Some((pos + ch.len_utf8(), ch)));
    }
    match chars.next() {
        Some(escaped) => Ok(Some((pos + ch.len_utf8() + escaped.len_utf8(), escaped))),
        None => Err(Error::UnterminatedEscape {
            pattern: template.to_string(),
        }),
    }
}
