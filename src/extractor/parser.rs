use crate::domain::{ListingField, ListingRecord};

/// Turns the model's free text into a record.
///
/// A line `LABEL: value` starts a field when `LABEL` (trimmed, upper-cased)
/// is one of the five known labels. Any other non-blank line, including one
/// with an unrecognized `label:` prefix, is a continuation of the active
/// field. Lines before the first recognized header are dropped.
pub fn parse_reply(reply: &str) -> ListingRecord {
    let mut record = ListingRecord::new();
    let mut active: Option<ListingField> = None;

    for line in reply.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let header = line
            .split_once(':')
            .and_then(|(label, value)| ListingField::from_label(label).map(|f| (f, value)));

        match (header, active) {
            (Some((field, value)), _) => {
                record.set(field, value.trim());
                active = Some(field);
            }
            (None, Some(field)) => record.append(field, line),
            (None, None) => {}
        }
    }

    record
}
