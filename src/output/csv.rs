// src/output/csv.rs
// =============================================================================
// CSV renderer.
//
// Fields are quoted only when they need it (they contain a comma, a double
// quote or a line break); quotes inside a quoted field are doubled.
// =============================================================================

use std::borrow::Cow;

use crate::repo::RepositoryRecord;

const HEADER: [&str; 3] = ["Name", "URL", "Description"];

pub fn render(records: &[RepositoryRecord]) -> String {
    let mut out = String::new();
    push_row(&mut out, &HEADER);
    for record in records {
        push_row(&mut out, &[record.name(), record.url(), record.description()]);
    }
    out
}

fn push_row(out: &mut String, fields: &[&str]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&quote_field(field));
    }
    out.push('\n');
}

fn quote_field(field: &str) -> Cow<'_, str> {
    if field.contains(|c| matches!(c, ',' | '"' | '\n' | '\r')) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
