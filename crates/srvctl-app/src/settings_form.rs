//! Settings form state.
//!
//! The form has two sections (connection agent, notifications). Values are
//! editable in memory only; "save" acknowledges the action without writing
//! anything anywhere.

/// Section a field belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormSection {
    Connection,
    Notifications,
}

impl FormSection {
    pub fn title(&self) -> &'static str {
        match self {
            FormSection::Connection => "Connection",
            FormSection::Notifications => "Notifications",
        }
    }
}

/// Icon slot for a field, resolved to a glyph by the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldIcon {
    Globe,
    Hash,
    Key,
    Bell,
    Mail,
}

/// One text field of the settings form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub section: FormSection,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub icon: FieldIcon,
    pub value: String,
    /// API keys are masked when rendered
    pub secret: bool,
}

impl FormField {
    fn new(
        section: FormSection,
        label: &'static str,
        placeholder: &'static str,
        icon: FieldIcon,
    ) -> Self {
        Self {
            section,
            label,
            placeholder,
            icon,
            value: String::new(),
            secret: false,
        }
    }

    fn secret(mut self) -> Self {
        self.secret = true;
        self
    }

    /// Text to show: the value (masked if secret) or the placeholder
    pub fn display_value(&self) -> (String, bool) {
        if self.value.is_empty() {
            (self.placeholder.to_string(), true)
        } else if self.secret {
            ("•".repeat(self.value.chars().count()), false)
        } else {
            (self.value.clone(), false)
        }
    }
}

/// State for the settings view
#[derive(Debug, Clone)]
pub struct SettingsFormState {
    pub fields: Vec<FormField>,

    /// Currently selected field index
    pub selected_index: usize,

    /// Whether we're in edit mode for the selected field
    pub editing: bool,

    /// Text buffer for the field being edited
    pub edit_buffer: String,

    /// Dirty flag - have fields been modified since the last save?
    pub dirty: bool,

    /// Set after "save" until the next edit, drives the acknowledgement line
    pub save_acknowledged: bool,
}

impl Default for SettingsFormState {
    fn default() -> Self {
        use FieldIcon::*;
        use FormSection::*;

        Self {
            fields: vec![
                FormField::new(
                    Connection,
                    "Agent address",
                    "https://agent.example.com",
                    Globe,
                ),
                FormField::new(Connection, "Port", "8443", Hash),
                FormField::new(Connection, "API key", "sk-xxxx-xxxx-xxxx", Key).secret(),
                FormField::new(
                    Notifications,
                    "Webhook URL",
                    "https://hooks.slack.com/...",
                    Bell,
                ),
                FormField::new(Notifications, "Email", "admin@example.com", Mail),
            ],
            selected_index: 0,
            editing: false,
            edit_buffer: String::new(),
            dirty: false,
            save_acknowledged: false,
        }
    }
}

impl SettingsFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&FormField> {
        self.fields.get(self.selected_index)
    }

    /// Select next field (wraps)
    pub fn select_next(&mut self) {
        if !self.fields.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.fields.len();
        }
    }

    /// Select previous field (wraps)
    pub fn select_previous(&mut self) {
        if !self.fields.is_empty() {
            self.selected_index = if self.selected_index == 0 {
                self.fields.len() - 1
            } else {
                self.selected_index - 1
            };
        }
    }

    /// Enter edit mode, seeding the buffer with the current value
    pub fn start_editing(&mut self) {
        if let Some(field) = self.fields.get(self.selected_index) {
            self.edit_buffer = field.value.clone();
            self.editing = true;
        }
    }

    pub fn push_char(&mut self, c: char) {
        if self.editing {
            self.edit_buffer.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if self.editing {
            self.edit_buffer.pop();
        }
    }

    /// Write the buffer into the selected field and leave edit mode
    pub fn commit_edit(&mut self) {
        if !self.editing {
            return;
        }
        if let Some(field) = self.fields.get_mut(self.selected_index) {
            if field.value != self.edit_buffer {
                field.value = std::mem::take(&mut self.edit_buffer);
                self.dirty = true;
                self.save_acknowledged = false;
            }
        }
        self.stop_editing();
    }

    /// Leave edit mode discarding the buffer
    pub fn cancel_edit(&mut self) {
        self.stop_editing();
    }

    fn stop_editing(&mut self) {
        self.editing = false;
        self.edit_buffer.clear();
    }

    /// Acknowledge a save. Nothing is persisted.
    pub fn acknowledge_save(&mut self) {
        self.stop_editing();
        self.dirty = false;
        self.save_acknowledged = true;
    }

    /// Fields grouped by section, in display order
    pub fn sections(&self) -> Vec<(FormSection, Vec<(usize, &FormField)>)> {
        let mut sections: Vec<(FormSection, Vec<(usize, &FormField)>)> = Vec::new();
        for (idx, field) in self.fields.iter().enumerate() {
            match sections.last_mut() {
                Some((section, fields)) if *section == field.section => fields.push((idx, field)),
                _ => sections.push((field.section, vec![(idx, field)])),
            }
        }
        sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form_layout() {
        let form = SettingsFormState::new();
        let sections = form.sections();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].0, FormSection::Connection);
        assert_eq!(sections[0].1.len(), 3);
        assert_eq!(sections[1].1.len(), 2);
    }

    #[test]
    fn test_select_wraps() {
        let mut form = SettingsFormState::new();
        form.select_previous();
        assert_eq!(form.selected_index, 4);
        form.select_next();
        assert_eq!(form.selected_index, 0);
    }

    #[test]
    fn test_edit_commit_marks_dirty() {
        let mut form = SettingsFormState::new();
        form.select_next(); // Port
        form.start_editing();
        for c in "9443".chars() {
            form.push_char(c);
        }
        form.commit_edit();

        assert_eq!(form.fields[1].value, "9443");
        assert!(form.dirty);
        assert!(!form.editing);
    }

    #[test]
    fn test_cancel_edit_discards_buffer() {
        let mut form = SettingsFormState::new();
        form.start_editing();
        form.push_char('x');
        form.cancel_edit();

        assert!(form.fields[0].value.is_empty());
        assert!(!form.dirty);
    }

    #[test]
    fn test_typing_without_edit_mode_is_ignored() {
        let mut form = SettingsFormState::new();
        form.push_char('x');
        assert!(form.edit_buffer.is_empty());
    }

    #[test]
    fn test_acknowledge_save_clears_dirty_only() {
        let mut form = SettingsFormState::new();
        form.start_editing();
        form.push_char('a');
        form.commit_edit();

        form.acknowledge_save();

        assert!(!form.dirty);
        assert!(form.save_acknowledged);
        assert_eq!(form.fields[0].value, "a");
    }

    #[test]
    fn test_secret_field_masked() {
        let mut form = SettingsFormState::new();
        form.selected_index = 2;
        form.start_editing();
        form.push_char('s');
        form.push_char('k');
        form.commit_edit();

        assert_eq!(form.fields[2].display_value(), ("••".to_string(), false));
        assert_eq!(
            form.fields[0].display_value(),
            ("https://agent.example.com".to_string(), true)
        );
    }
}
