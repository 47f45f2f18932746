use serde::{Deserialize, Serialize};

use crate::language::{classify, Language};

/// A named unit of content extracted from a raw model response.
///
/// Invariant: `name` and `content` are trimmed and non-empty; segments with
/// empty bodies are discarded during extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    pub name: String,
    pub content: String,
    pub language: Language,
}

/// A delimited span located by the first scanner pass.
///
/// `token` is the language token declared on the opening fence, if any.
/// `preceding` is the raw line immediately above the opening fence, used by
/// the fallback header grammar.
#[derive(Debug)]
struct FencedSpan<'a> {
    token: Option<&'a str>,
    body: Vec<&'a str>,
    preceding: Option<&'a str>,
}

/// Extract an ordered sequence of named files from a raw model response.
///
/// Two-pass extraction: the first pass tokenizes fenced spans, the second
/// classifies each span's header against the primary grammar (file name on
/// the first content line, possibly inside a comment marker). The fallback
/// grammar (`File: <name>` above the fence) is consulted only when the
/// primary grammar yields zero records.
///
/// Never errors: a response with no recognizable segments yields an empty
/// vector, which is a valid outcome the caller reports informationally.
/// Malformed or unterminated fences are silently excluded. Names may repeat
/// within one result; [`crate::project::ProjectState`] resolves duplicates
/// later-occurrence-wins.
pub fn parse_response(raw: &str) -> Vec<GeneratedFile> {
    let spans = scan_fenced_spans(raw);

    let files: Vec<GeneratedFile> = spans.iter().filter_map(primary_record).collect();
    if !files.is_empty() {
        return files;
    }

    spans.iter().filter_map(fallback_record).collect()
}

/// First pass: locate fence-delimited spans in source order.
///
/// A fence opens at a line whose trimmed form starts with three backticks
/// (anything after them is the language token) and closes at the next line
/// that is exactly three backticks after trimming. An unterminated span is
/// not matched.
fn scan_fenced_spans(raw: &str) -> Vec<FencedSpan<'_>> {
    let lines: Vec<&str> = raw.lines().collect();
    let mut spans = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let trimmed = lines[i].trim();
        let Some(rest) = trimmed.strip_prefix("```") else {
            i += 1;
            continue;
        };

        let Some(end) = (i + 1..lines.len()).find(|&j| lines[j].trim() == "```") else {
            break;
        };

        let token = rest.trim();
        spans.push(FencedSpan {
            token: (!token.is_empty()).then_some(token),
            body: lines[i + 1..end].to_vec(),
            preceding: (i > 0).then(|| lines[i - 1]),
        });
        i = end + 1;
    }

    spans
}

/// Primary grammar: the span's first content line names the file.
fn primary_record(span: &FencedSpan) -> Option<GeneratedFile> {
    let (header_idx, header) = span
        .body
        .iter()
        .enumerate()
        .find(|(_, line)| !line.trim().is_empty())?;

    let name = header_file_name(header)?;
    let content = span.body[header_idx + 1..].join("\n").trim().to_string();
    if content.is_empty() {
        return None;
    }

    let language = span
        .token
        .and_then(Language::from_token)
        .unwrap_or_else(|| classify(&name));

    Some(GeneratedFile {
        name,
        content,
        language,
    })
}

/// Fallback grammar: a `File: <name>` line immediately preceding a fence
/// that carries an explicit language token. The whole span body is the
/// content.
fn fallback_record(span: &FencedSpan) -> Option<GeneratedFile> {
    let token = span.token?;
    let name = span.preceding?.trim().strip_prefix("File:")?.trim();
    if name.is_empty() {
        return None;
    }

    let content = span.body.join("\n").trim().to_string();
    if content.is_empty() {
        return None;
    }

    let language = Language::from_token(token).unwrap_or_else(|| classify(name));

    Some(GeneratedFile {
        name: name.to_string(),
        content,
        language,
    })
}

/// Pull a file name out of a header line, stripping a surrounding comment
/// marker (`// name`, `/* name */`, `<!-- name -->`, `# name`) when present.
///
/// The candidate must be a single whitespace-free token containing a dot,
/// so ordinary code on the first line of a fence does not mint a record.
fn header_file_name(line: &str) -> Option<String> {
    let mut candidate = line.trim();

    if let Some(rest) = candidate.strip_prefix("<!--") {
        candidate = rest.trim().strip_suffix("-->").unwrap_or(rest).trim();
    } else if let Some(rest) = candidate.strip_prefix("/*") {
        candidate = rest.trim().strip_suffix("*/").unwrap_or(rest).trim();
    } else if let Some(rest) = candidate.strip_prefix("//") {
        candidate = rest.trim();
    } else if let Some(rest) = candidate.strip_prefix('#') {
        candidate = rest.trim();
    }

    let is_file_name = !candidate.is_empty()
        && !candidate.contains(char::is_whitespace)
        && candidate
            .rsplit_once('.')
            .is_some_and(|(stem, ext)| !stem.is_empty() && !ext.is_empty());

    is_file_name.then(|| candidate.to_string())
}
