//! Configuration notecard parser.
//!
//! The notecard grammar is line oriented. A header line starts (after
//! optional whitespace) with a bracketed label such as `[ Walking ]`; the
//! rest of that line, and every following line up to the next header, is a
//! `|` or `,` separated list of animation names for that section.
//!
//! ```text
//! [ Standing ]Stand 1|Stand 2
//! Stand 3
//! [ Walking ]Strut
//! ```
//!
//! Lines before the first header, blank lines and `#` comment lines are
//! ignored. Names that do not resolve produce a warning and are skipped.

use super::tokens::{self, SectionKind, TOKENS};
use super::{AssetId, MovementState, StandEntry};
use regex::Regex;
use std::sync::OnceLock;
use tracing::{debug, warn};

fn header_pattern() -> &'static Regex {
    static HEADER: OnceLock<Regex> = OnceLock::new();
    HEADER.get_or_init(|| Regex::new(r"^\s*(\[ .* \])").expect("header pattern is valid"))
}

/// One resolved non-stand animation, in notecard order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub state: MovementState,
    pub animation_id: AssetId,
    pub name: String,
}

/// Everything a parse produced. Nothing is applied until the engine does so.
#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    pub stands: Vec<StandEntry>,
    pub assignments: Vec<Assignment>,
    pub warnings: Vec<String>,
}

impl ParseResult {
    pub fn is_empty(&self) -> bool {
        self.stands.is_empty() && self.assignments.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
enum Section<'a> {
    Known { label: &'a str, state: MovementState },
    Ignored,
}

/// Split a header line into its label and the remainder.
pub fn split_header(line: &str) -> Option<(&str, &str)> {
    let captures = header_pattern().captures(line)?;
    let whole = captures.get(0)?;
    let label = captures.get(1)?.as_str();
    Some((label, &line[whole.end()..]))
}

/// Names in a `|`/`,` separated list, trimmed, empties dropped.
pub fn split_names(list: &str) -> impl Iterator<Item = &str> {
    list.split(|c: char| c == '|' || c == ',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
}

/// Parse `text`, resolving names with `resolve`.
pub fn parse<F>(text: &str, mut resolve: F) -> ParseResult
where
    F: FnMut(&str) -> Option<AssetId>,
{
    let mut result = ParseResult::default();
    let mut section: Option<Section> = None;

    for line in text.lines() {
        let content = match split_header(line) {
            Some((label, rest)) => {
                section = Some(match tokens::lookup(label) {
                    Some(SectionKind::State(state)) => Section::Known { label, state },
                    Some(SectionKind::Unsupported) => {
                        debug!("📝 Section {} is not supported, skipping", label);
                        Section::Ignored
                    }
                    None => {
                        debug!("📝 Unknown section {}, skipping", label);
                        Section::Ignored
                    }
                });
                rest
            }
            None => {
                let trimmed = line.trim_start();
                if trimmed.starts_with('#') {
                    continue;
                }
                line
            }
        };

        let Some(Section::Known { label, state }) = section else {
            continue;
        };

        for name in split_names(content) {
            let Some(animation_id) = resolve(name) else {
                let message = format!(
                    "Warning: animation '{}' could not be found (Section: {}).",
                    name, label
                );
                warn!("{}", message);
                result.warnings.push(message);
                continue;
            };

            if state == MovementState::Stand {
                result.stands.push(StandEntry::new(animation_id, name));
            } else {
                result.assignments.push(Assignment {
                    state,
                    animation_id,
                    name: name.to_string(),
                });
            }
        }
    }

    debug!(
        "📝 Notecard parsed: {} stands, {} overrides, {} warnings",
        result.stands.len(),
        result.assignments.len(),
        result.warnings.len()
    );
    result
}

/// Skeleton notecard listing every supported section.
pub fn template() -> String {
    let mut text = String::from("# Animation override configuration\n");
    text.push_str("# List animation names after each header, separated by | or ,\n");
    for token in TOKENS.iter() {
        if let SectionKind::State(_) = token.kind {
            text.push_str(token.label);
            text.push('\n');
        }
    }
    text
}
