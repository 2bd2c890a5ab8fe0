//! Sender/receiver resolution from structural markers and name-like lines.
//!
//! Receipts label the parties with "From"/"Sent by" and "To"/"Sent to", but
//! OCR scrambles layout: the label and the name may share a line, sit on
//! adjacent lines, or the labels may be missing entirely. Resolution is
//! layered accordingly.

use tracing::debug;

use crate::models::config::ExtractionConfig;

use super::patterns::{DIGIT_RUN, MARKER_FROM, MARKER_TO, MASKED_ACCOUNT, NAME_LINE};

/// Resolved sender/receiver fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NameSections {
    pub from_name: String,
    pub to_name: String,
    pub from_phone: String,
    pub to_phone: String,
    pub from_account: String,
    pub to_account: String,
}

fn is_name_candidate(line: &str, config: &ExtractionConfig) -> bool {
    line.len() > 3 && NAME_LINE.is_match(line) && !config.name_exclusions.matches(line)
}

/// The remainder of a marker line, when it is itself a valid name.
fn inline_name(rest: &str, config: &ExtractionConfig) -> Option<String> {
    let rest = rest.trim_matches(|c: char| c == ':' || c.is_whitespace());
    if is_name_candidate(rest, config) {
        Some(rest.to_string())
    } else {
        None
    }
}

/// Resolve sender and receiver names, phones, and accounts from the lines.
pub fn resolve(lines: &[String], config: &ExtractionConfig) -> NameSections {
    let mut sections = NameSections::default();

    // Candidates and markers in one sweep. A later marker overrides an
    // earlier one: receipts repeat labels, and the final labeled block is
    // the one closest to the actual name block.
    let mut candidates: Vec<(usize, &str)> = Vec::new();
    let mut from_index: Option<usize> = None;
    let mut to_index: Option<usize> = None;
    let mut from_inline: Option<String> = None;
    let mut to_inline: Option<String> = None;

    for (idx, line) in lines.iter().enumerate() {
        if is_name_candidate(line, config) {
            candidates.push((idx, line.as_str()));
        }
        if let Some(m) = MARKER_FROM.find(line) {
            from_index = Some(idx);
            from_inline = inline_name(&line[m.end()..], config);
        }
        if let Some(m) = MARKER_TO.find(line) {
            to_index = Some(idx);
            to_inline = inline_name(&line[m.end()..], config);
        }
    }

    // A marker line carrying the name inline is the most direct evidence.
    if let Some(name) = from_inline {
        sections.from_name = name;
    }
    if let Some(name) = to_inline {
        sections.to_name = name;
    }

    let need_from = sections.from_name.is_empty();
    let need_to = sections.to_name.is_empty();
    let mut used = vec![false; candidates.len()];

    match (from_index, to_index) {
        (Some(f), Some(t)) => {
            if need_from {
                if let Some(n) = take(&candidates, &mut used, |i| i > f && i < t) {
                    sections.from_name = n;
                }
            }
            if need_to {
                if let Some(n) = take(&candidates, &mut used, |i| i > t) {
                    sections.to_name = n;
                }
            }
        }
        (Some(f), None) => {
            if need_from {
                if let Some(n) = take(&candidates, &mut used, |i| i > f) {
                    sections.from_name = n;
                }
            }
            if need_to {
                if let Some(n) = take(&candidates, &mut used, |_| true) {
                    sections.to_name = n;
                }
            }
        }
        (None, Some(t)) => {
            if need_to {
                if let Some(n) = take(&candidates, &mut used, |i| i > t) {
                    sections.to_name = n;
                }
            }
            if need_from {
                if let Some(n) = take(&candidates, &mut used, |_| true) {
                    sections.from_name = n;
                }
            }
        }
        (None, None) => {
            // No markers at all: first two candidates in document order.
            // A single candidate goes to the sender only.
            if need_from {
                if let Some(n) = take(&candidates, &mut used, |_| true) {
                    sections.from_name = n;
                }
            }
            if need_to {
                if let Some(n) = take(&candidates, &mut used, |_| true) {
                    sections.to_name = n;
                }
            }
        }
    }

    resolve_phones_and_accounts(lines, config, &mut sections);

    debug!(
        "resolved names from={:?} to={:?}",
        sections.from_name, sections.to_name
    );
    sections
}

fn take(
    candidates: &[(usize, &str)],
    used: &mut [bool],
    pred: impl Fn(usize) -> bool,
) -> Option<String> {
    for (i, (idx, name)) in candidates.iter().enumerate() {
        if !used[i] && pred(*idx) {
            used[i] = true;
            return Some((*name).to_string());
        }
    }
    None
}

/// Phones and accounts are pure first/second occurrence across the whole
/// document, independent of marker boundaries.
fn resolve_phones_and_accounts(
    lines: &[String],
    config: &ExtractionConfig,
    sections: &mut NameSections,
) {
    for line in lines {
        for m in DIGIT_RUN.find_iter(line) {
            if m.as_str().len() != config.phone_digits {
                continue;
            }
            if sections.from_phone.is_empty() {
                sections.from_phone = m.as_str().to_string();
            } else if sections.to_phone.is_empty() && m.as_str() != sections.from_phone
            {
                sections.to_phone = m.as_str().to_string();
            }
        }

        // masked tokens and long bare runs, in left-to-right line order
        let mut accounts: Vec<(usize, &str)> = MASKED_ACCOUNT
            .find_iter(line)
            .map(|m| (m.start(), m.as_str()))
            .collect();
        for m in DIGIT_RUN.find_iter(line) {
            if m.as_str().len() >= config.long_account_digits {
                accounts.push((m.start(), m.as_str()));
            }
        }
        accounts.sort_by_key(|(start, _)| *start);

        for (_, account) in accounts {
            if sections.from_account.is_empty() {
                sections.from_account = account.to_string();
            } else if sections.to_account.is_empty() {
                sections.to_account = account.to_string();
            }
        }
    }
}
