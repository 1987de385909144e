//! Payload formatting: structured form input to the literal barcode payload.
//!
//! Formatting is total. Empty or missing fields never fail; each payload type
//! decides what "nothing to encode" looks like (usually the empty string).
//!
//! - `url`: trimmed, `https://` prefixed unless an http(s) scheme is present
//! - `email`: `mailto:` URI with percent-encoded `subject`/`body` query
//! - `phone`: `tel:` URI with all whitespace removed
//! - `text`: verbatim
//! - `contact`: vCard 3.0 record (see [`vcard`])

pub mod vcard;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::models::{EmailFields, FormDataMap, Payload, PayloadType, PhoneFields, UrlFields};

// Everything but RFC 3986 unreserved characters is escaped in query values
const QUERY_ENCODE_SET: &AsciiSet =
    &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Format one payload into the string embedded in the barcode
///
/// # Examples
///
/// ```
/// use qr_studio::formatter::format_payload;
/// use qr_studio::models::{Payload, UrlFields};
///
/// let fields = UrlFields { url: "example.com".to_string() };
/// assert_eq!(format_payload(Payload::Url(&fields)), "https://example.com");
/// ```
pub fn format_payload(payload: Payload<'_>) -> String {
    match payload {
        Payload::Url(fields) => format_url(fields),
        Payload::Email(fields) => format_email(fields),
        Payload::Phone(fields) => format_phone(fields),
        Payload::Text(fields) => fields.content.clone(),
        Payload::Contact(fields) => vcard::build_vcard(fields),
    }
}

/// Format the form of `payload_type` out of the full form-data map
pub fn format_form(payload_type: PayloadType, form_data: &FormDataMap) -> String {
    format_payload(form_data.payload(payload_type))
}

/// Format by payload type key; an unrecognized key formats to `""`
pub fn format_by_key(key: &str, form_data: &FormDataMap) -> String {
    match key.parse::<PayloadType>() {
        Ok(payload_type) => format_form(payload_type, form_data),
        Err(_) => String::new(),
    }
}

fn format_url(fields: &UrlFields) -> String {
    let url = fields.url.trim();
    if url.is_empty() {
        return String::new();
    }
    with_http_scheme(url)
}

fn format_email(fields: &EmailFields) -> String {
    if fields.to.is_empty() {
        return String::new();
    }

    let params: Vec<String> = [("subject", &fields.subject), ("body", &fields.body)]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(name, value)| format!("{}={}", name, utf8_percent_encode(value, QUERY_ENCODE_SET)))
        .collect();

    if params.is_empty() {
        format!("mailto:{}", fields.to)
    } else {
        format!("mailto:{}?{}", fields.to, params.join("&"))
    }
}

fn format_phone(fields: &PhoneFields) -> String {
    let number: String =
        fields.number.chars().filter(|c| !c.is_whitespace() && *c != '\u{feff}').collect();
    if number.is_empty() { String::new() } else { format!("tel:{}", number) }
}

/// Case-insensitive check for a leading `http://` or `https://`
pub(crate) fn has_http_scheme(value: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        value.get(..scheme.len()).is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

/// Prefix `https://` unless the value already carries an http(s) scheme
pub(crate) fn with_http_scheme(value: &str) -> String {
    if has_http_scheme(value) { value.to_string() } else { format!("https://{}", value) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContactFields, TextFields};

    fn url(value: &str) -> String {
        format_payload(Payload::Url(&UrlFields { url: value.to_string() }))
    }

    fn email(to: &str, subject: &str, body: &str) -> String {
        let fields =
            EmailFields { to: to.to_string(), subject: subject.to_string(), body: body.to_string() };
        format_payload(Payload::Email(&fields))
    }

    fn phone(number: &str) -> String {
        format_payload(Payload::Phone(&PhoneFields { number: number.to_string() }))
    }

    #[test]
    fn test_empty_forms_format_to_empty() {
        let form_data = FormDataMap::default();
        for payload_type in PayloadType::ALL {
            if payload_type == PayloadType::Contact {
                continue;
            }
            assert_eq!(format_form(payload_type, &form_data), "", "{}", payload_type);
        }
    }

    #[test]
    fn test_url_prefixes_https() {
        assert_eq!(url("example.com"), "https://example.com");
        assert_eq!(url("  example.com  "), "https://example.com");
    }

    #[test]
    fn test_url_keeps_existing_scheme() {
        assert_eq!(url("https://example.com"), "https://example.com");
        assert_eq!(url("http://example.com"), "http://example.com");
        assert_eq!(url("HTTPS://Example.com"), "HTTPS://Example.com");
    }

    #[test]
    fn test_url_other_scheme_gets_prefixed() {
        assert_eq!(url("ftp://example.com"), "https://ftp://example.com");
    }

    #[test]
    fn test_url_whitespace_only_is_empty() {
        assert_eq!(url("  "), "");
        assert_eq!(url("\t\n"), "");
    }

    #[test]
    fn test_url_multibyte_prefix_does_not_panic() {
        assert_eq!(url("ééé.fr"), "https://ééé.fr");
    }

    #[test]
    fn test_email_without_recipient_is_empty() {
        assert_eq!(email("", "x", "y"), "");
    }

    #[test]
    fn test_email_subject_only() {
        assert_eq!(email("a@b.com", "Hi there", ""), "mailto:a@b.com?subject=Hi%20there");
    }

    #[test]
    fn test_email_body_only() {
        assert_eq!(email("a@b.com", "", "See you"), "mailto:a@b.com?body=See%20you");
    }

    #[test]
    fn test_email_subject_and_body() {
        assert_eq!(
            email("a@b.com", "Q&A", "50% off?"),
            "mailto:a@b.com?subject=Q%26A&body=50%25%20off%3F"
        );
    }

    #[test]
    fn test_email_address_only() {
        assert_eq!(email("a@b.com", "", ""), "mailto:a@b.com");
    }

    #[test]
    fn test_email_encodes_unicode_and_newlines() {
        assert_eq!(email("a@b.com", "", "é\nx"), "mailto:a@b.com?body=%C3%A9%0Ax");
    }

    #[test]
    fn test_phone_strips_whitespace() {
        assert_eq!(phone("+1 234 567\t8900"), "tel:+12345678900");
        assert_eq!(phone("\u{feff}+1 555 0100"), "tel:+15550100");
        assert_eq!(phone("   "), "");
    }

    #[test]
    fn test_text_is_verbatim() {
        let fields = TextFields { content: "  hello\nworld  ".to_string() };
        assert_eq!(format_payload(Payload::Text(&fields)), "  hello\nworld  ");
    }

    #[test]
    fn test_format_form_uses_requested_type_only() {
        let mut form_data = FormDataMap::default();
        form_data.url.url = "example.com".to_string();
        form_data.text.content = "note".to_string();
        assert_eq!(format_form(PayloadType::Text, &form_data), "note");
        assert_eq!(format_form(PayloadType::Url, &form_data), "https://example.com");
    }

    #[test]
    fn test_format_by_unknown_key_is_empty() {
        let mut form_data = FormDataMap::default();
        form_data.text.content = "note".to_string();
        assert_eq!(format_by_key("wifi", &form_data), "");
        assert_eq!(format_by_key("text", &form_data), "note");
    }

    #[test]
    fn test_contact_routes_to_vcard() {
        let fields = ContactFields { first_name: "Jane".to_string(), ..Default::default() };
        let payload = format_payload(Payload::Contact(&fields));
        assert!(payload.starts_with("BEGIN:VCARD\n"));
    }
}
