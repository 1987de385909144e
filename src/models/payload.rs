use std::fmt;
use std::str::FromStr;

use anyhow::{Result, anyhow, bail};
use serde::{Deserialize, Serialize};

/// Kind of content encoded into the barcode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadType {
    #[default]
    Url,
    Email,
    Phone,
    Text,
    #[serde(rename = "vcard", alias = "contact")]
    Contact,
}

impl PayloadType {
    pub const ALL: [PayloadType; 5] = [
        PayloadType::Url,
        PayloadType::Email,
        PayloadType::Phone,
        PayloadType::Text,
        PayloadType::Contact,
    ];

    /// Stable key used in persisted form data
    pub fn key(self) -> &'static str {
        match self {
            PayloadType::Url => "url",
            PayloadType::Email => "email",
            PayloadType::Phone => "phone",
            PayloadType::Text => "text",
            PayloadType::Contact => "vcard",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PayloadType::Url => "URL",
            PayloadType::Email => "Email",
            PayloadType::Phone => "Phone",
            PayloadType::Text => "Text",
            PayloadType::Contact => "vCard",
        }
    }
}

impl fmt::Display for PayloadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PayloadType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "url" => Ok(PayloadType::Url),
            "email" => Ok(PayloadType::Email),
            "phone" => Ok(PayloadType::Phone),
            "text" => Ok(PayloadType::Text),
            "vcard" | "contact" => Ok(PayloadType::Contact),
            other => Err(anyhow!("Unknown payload type: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlFields {
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailFields {
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneFields {
    pub number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextFields {
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactFields {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub org: String,
    pub title: String,
    pub website: String,
}

/// Borrowed view of the field set for one payload type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload<'a> {
    Url(&'a UrlFields),
    Email(&'a EmailFields),
    Phone(&'a PhoneFields),
    Text(&'a TextFields),
    Contact(&'a ContactFields),
}

impl Payload<'_> {
    pub fn payload_type(&self) -> PayloadType {
        match self {
            Payload::Url(_) => PayloadType::Url,
            Payload::Email(_) => PayloadType::Email,
            Payload::Phone(_) => PayloadType::Phone,
            Payload::Text(_) => PayloadType::Text,
            Payload::Contact(_) => PayloadType::Contact,
        }
    }
}

/// Owned field set for one payload type, used to replace a single form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadFields {
    Url(UrlFields),
    Email(EmailFields),
    Phone(PhoneFields),
    Text(TextFields),
    Contact(ContactFields),
}

impl PayloadFields {
    pub fn payload_type(&self) -> PayloadType {
        match self {
            PayloadFields::Url(_) => PayloadType::Url,
            PayloadFields::Email(_) => PayloadType::Email,
            PayloadFields::Phone(_) => PayloadType::Phone,
            PayloadFields::Text(_) => PayloadType::Text,
            PayloadFields::Contact(_) => PayloadType::Contact,
        }
    }
}

/// Form data for every payload type, not just the active one
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormDataMap {
    pub url: UrlFields,
    pub email: EmailFields,
    pub phone: PhoneFields,
    pub text: TextFields,
    #[serde(rename = "vcard", alias = "contact")]
    pub contact: ContactFields,
}

impl FormDataMap {
    pub fn payload(&self, payload_type: PayloadType) -> Payload<'_> {
        match payload_type {
            PayloadType::Url => Payload::Url(&self.url),
            PayloadType::Email => Payload::Email(&self.email),
            PayloadType::Phone => Payload::Phone(&self.phone),
            PayloadType::Text => Payload::Text(&self.text),
            PayloadType::Contact => Payload::Contact(&self.contact),
        }
    }

    /// Replace the form of one payload type, leaving the others untouched
    pub fn replace(&mut self, fields: PayloadFields) {
        match fields {
            PayloadFields::Url(f) => self.url = f,
            PayloadFields::Email(f) => self.email = f,
            PayloadFields::Phone(f) => self.phone = f,
            PayloadFields::Text(f) => self.text = f,
            PayloadFields::Contact(f) => self.contact = f,
        }
    }

    /// Set a single named field, accepting both snake_case and camelCase names
    pub fn set_field(&mut self, payload_type: PayloadType, name: &str, value: &str) -> Result<()> {
        let slot = match (payload_type, name) {
            (PayloadType::Url, "url") => &mut self.url.url,
            (PayloadType::Email, "to") => &mut self.email.to,
            (PayloadType::Email, "subject") => &mut self.email.subject,
            (PayloadType::Email, "body") => &mut self.email.body,
            (PayloadType::Phone, "number") => &mut self.phone.number,
            (PayloadType::Text, "content") => &mut self.text.content,
            (PayloadType::Contact, "first_name" | "firstName") => &mut self.contact.first_name,
            (PayloadType::Contact, "last_name" | "lastName") => &mut self.contact.last_name,
            (PayloadType::Contact, "phone") => &mut self.contact.phone,
            (PayloadType::Contact, "email") => &mut self.contact.email,
            (PayloadType::Contact, "org") => &mut self.contact.org,
            (PayloadType::Contact, "title") => &mut self.contact.title,
            (PayloadType::Contact, "website") => &mut self.contact.website,
            _ => bail!("Unknown field '{}' for payload type {}", name, payload_type),
        };
        *slot = value.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_type_parse() {
        assert_eq!("url".parse::<PayloadType>().unwrap(), PayloadType::Url);
        assert_eq!("VCard".parse::<PayloadType>().unwrap(), PayloadType::Contact);
        assert_eq!("contact".parse::<PayloadType>().unwrap(), PayloadType::Contact);
        assert!("sms".parse::<PayloadType>().is_err());
    }

    #[test]
    fn test_payload_type_serializes_contact_as_vcard() {
        let json = serde_json::to_string(&PayloadType::Contact).unwrap();
        assert_eq!(json, r#""vcard""#);
        let parsed: PayloadType = serde_json::from_str(r#""contact""#).unwrap();
        assert_eq!(parsed, PayloadType::Contact);
    }

    #[test]
    fn test_form_data_map_missing_fields_default() {
        let json = r#"{"url":{"url":"example.com"},"vcard":{"firstName":"Jane"}}"#;
        let map: FormDataMap = serde_json::from_str(json).unwrap();
        assert_eq!(map.url.url, "example.com");
        assert_eq!(map.contact.first_name, "Jane");
        assert_eq!(map.contact.last_name, "");
        assert_eq!(map.email, EmailFields::default());
    }

    #[test]
    fn test_replace_touches_only_one_form() {
        let mut map = FormDataMap::default();
        map.text.content = "keep me".to_string();
        map.replace(PayloadFields::Phone(PhoneFields { number: "123".to_string() }));
        assert_eq!(map.phone.number, "123");
        assert_eq!(map.text.content, "keep me");
    }

    #[test]
    fn test_set_field_names() {
        let mut map = FormDataMap::default();
        map.set_field(PayloadType::Contact, "firstName", "Jane").unwrap();
        map.set_field(PayloadType::Contact, "last_name", "Doe").unwrap();
        assert_eq!(map.contact.first_name, "Jane");
        assert_eq!(map.contact.last_name, "Doe");

        let err = map.set_field(PayloadType::Url, "subject", "x").unwrap_err();
        assert!(err.to_string().contains("Unknown field 'subject'"));
    }

    #[test]
    fn test_payload_view_matches_type() {
        let map = FormDataMap::default();
        for payload_type in PayloadType::ALL {
            assert_eq!(map.payload(payload_type).payload_type(), payload_type);
        }
    }
}
