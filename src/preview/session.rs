use crate::formatter::format_form;
use crate::models::{FormDataMap, PayloadFields, PayloadType, SaveCandidate, StyleOptions};

/// Editable state of one studio session
///
/// Setters report whether anything changed, so callers only republish real
/// edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    payload_type: PayloadType,
    form_data: FormDataMap,
    style: StyleOptions,
    history_open: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            payload_type: PayloadType::default(),
            form_data: FormDataMap::default(),
            style: StyleOptions::default(),
            history_open: true,
        }
    }
}

impl Session {
    pub fn payload_type(&self) -> PayloadType {
        self.payload_type
    }

    pub fn form_data(&self) -> &FormDataMap {
        &self.form_data
    }

    pub fn style(&self) -> &StyleOptions {
        &self.style
    }

    pub fn history_open(&self) -> bool {
        self.history_open
    }

    /// Formatted payload of the active type
    pub fn payload(&self) -> String {
        format_form(self.payload_type, &self.form_data)
    }

    pub fn set_payload_type(&mut self, payload_type: PayloadType) -> bool {
        replace_if_changed(&mut self.payload_type, payload_type)
    }

    /// Replace one form; the other payload types keep their data
    pub fn update_fields(&mut self, fields: PayloadFields) -> bool {
        let mut form_data = self.form_data.clone();
        form_data.replace(fields);
        replace_if_changed(&mut self.form_data, form_data)
    }

    pub fn set_style(&mut self, style: StyleOptions) -> bool {
        replace_if_changed(&mut self.style, style)
    }

    pub fn set_logo(&mut self, logo: Option<String>) -> bool {
        replace_if_changed(&mut self.style.logo, logo)
    }

    pub fn toggle_history(&mut self) -> bool {
        self.history_open = !self.history_open;
        self.history_open
    }

    /// Replace type, every form and style in one step
    pub fn restore(&mut self, snapshot: SaveCandidate) {
        let SaveCandidate { payload_type, form_data, style } = snapshot;
        self.payload_type = payload_type;
        self.form_data = form_data;
        self.style = style;
    }

    pub fn snapshot(&self) -> SaveCandidate {
        SaveCandidate {
            payload_type: self.payload_type,
            form_data: self.form_data.clone(),
            style: self.style.clone(),
        }
    }
}

fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TextFields, UrlFields};

    #[test]
    fn test_defaults() {
        let session = Session::default();
        assert_eq!(session.payload_type(), PayloadType::Url);
        assert_eq!(session.payload(), "");
        assert!(session.history_open());
    }

    #[test]
    fn test_setters_report_changes() {
        let mut session = Session::default();
        assert!(!session.set_payload_type(PayloadType::Url));
        assert!(session.set_payload_type(PayloadType::Text));

        let fields = PayloadFields::Text(TextFields { content: "hi".to_string() });
        assert!(session.update_fields(fields.clone()));
        assert!(!session.update_fields(fields));
        assert_eq!(session.payload(), "hi");
    }

    #[test]
    fn test_update_inactive_form_keeps_payload() {
        let mut session = Session::default();
        session.update_fields(PayloadFields::Url(UrlFields { url: "a.com".to_string() }));
        session.update_fields(PayloadFields::Text(TextFields { content: "x".to_string() }));
        assert_eq!(session.payload(), "https://a.com");
        assert_eq!(session.form_data().text.content, "x");
    }

    #[test]
    fn test_restore_replaces_everything() {
        let mut session = Session::default();
        session.update_fields(PayloadFields::Url(UrlFields { url: "a.com".to_string() }));

        let mut snapshot = SaveCandidate::default();
        snapshot.payload_type = PayloadType::Text;
        snapshot.form_data.text.content = "restored".to_string();
        snapshot.style.foreground_color = "#DC2626".to_string();

        session.restore(snapshot.clone());
        assert_eq!(session.snapshot(), snapshot);
        assert_eq!(session.form_data().url.url, "");
    }

    #[test]
    fn test_toggle_history() {
        let mut session = Session::default();
        assert!(!session.toggle_history());
        assert!(session.toggle_history());
    }
}
