//! vCard 3.0 records for contact payloads.
//!
//! Lines are joined with `\n`. Optional properties are omitted entirely when
//! their field is empty; values are written as authored (no trimming).

use super::with_http_scheme;
use crate::models::ContactFields;

const HEADER: &str = "BEGIN:VCARD";
const VERSION: &str = "VERSION:3.0";
const FOOTER: &str = "END:VCARD";

pub fn build_vcard(fields: &ContactFields) -> String {
    let mut lines = vec![HEADER.to_string(), VERSION.to_string()];

    if !fields.first_name.is_empty() || !fields.last_name.is_empty() {
        lines.push(format!("N:{};{}", fields.last_name, fields.first_name));
        let full_name: Vec<&str> = [fields.first_name.as_str(), fields.last_name.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect();
        lines.push(format!("FN:{}", full_name.join(" ")));
    }

    let optional = [
        ("ORG", &fields.org),
        ("TITLE", &fields.title),
        ("TEL", &fields.phone),
        ("EMAIL", &fields.email),
    ];
    for (property, value) in optional {
        if !value.is_empty() {
            lines.push(format!("{}:{}", property, value));
        }
    }

    if !fields.website.is_empty() {
        lines.push(format!("URL:{}", with_http_scheme(&fields.website)));
    }

    lines.push(FOOTER.to_string());
    lines.join("\n")
}
