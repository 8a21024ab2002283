//! Single-field editor of the edit-profile flow.
//!
//! The screen shows one text field (name, username, bio, ...) with a done
//! button whose availability depends on the field, and a hint below it.

/// The profile field being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditField {
    Name,
    Username,
    Bio,
    Other(String),
}

impl EditField {
    /// Maps the screen title to the field.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Name" => EditField::Name,
            "Username" => EditField::Username,
            "Bio" => EditField::Bio,
            other => EditField::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            EditField::Name => "Name",
            EditField::Username => "Username",
            EditField::Bio => "Bio",
            EditField::Other(label) => label.as_str(),
        }
    }
}

/// State of the edit-text screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditTextState {
    /// Current content of the text field.
    pub text_state: String,
    /// The username the profile has now.
    pub username: String,
    pub is_loading: bool,
    pub error: String,
}

/// How the done button is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoneButton {
    Enabled,
    Disabled,
    /// An update is being saved.
    Spinner,
}

/// The edit-text screen's logic, without rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTextForm {
    pub field: EditField,
    pub state: EditTextState,
    pub is_username_available: bool,
    pub is_updating: bool,
}

impl EditTextForm {
    pub fn new(field: EditField, state: EditTextState) -> Self {
        Self {
            field,
            state,
            is_username_available: true,
            is_updating: false,
        }
    }

    /// Replaces the field's text. The error stays until the owner of the state clears it.
    pub fn on_value_change(&mut self, text: impl Into<String>) {
        self.state.text_state = text.into();
    }

    /// Name and username may not be blank, and a username must also be free.
    pub fn done_enabled(&self) -> bool {
        let has_text = !self.state.text_state.is_empty();
        match self.field {
            EditField::Name => has_text,
            EditField::Username => has_text && self.is_username_available,
            _ => true,
        }
    }

    pub fn done_button(&self) -> DoneButton {
        if self.is_updating {
            DoneButton::Spinner
        } else if self.done_enabled() {
            DoneButton::Enabled
        } else {
            DoneButton::Disabled
        }
    }

    /// Whether the text field is shown. A loader takes its place while loading.
    pub fn shows_editor(&self) -> bool {
        !self.state.is_loading
    }

    pub fn shows_error(&self) -> bool {
        self.shows_editor() && !self.state.error.is_empty()
    }

    /// Hint below the field.
    pub fn hint(&self) -> String {
        match self.field {
            EditField::Name => "Help people discover your account by using the name you're known by: \
                either your full name, nickname or business name."
                .to_string(),
            EditField::Username => format!(
                "You'll be able to change your username back to {} for another 14 days.",
                self.state.username
            ),
            _ => String::new(),
        }
    }
}
