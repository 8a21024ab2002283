//! Two-button alert dialog model.

/// Look of a dialog button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    /// Bold blue primary action.
    Blue,
    /// Plain white secondary action.
    White,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogButton {
    pub style: ButtonStyle,
    pub text: String,
}

/// Contents of an alert dialog, e.g. "Incorrect username or password" with
/// "Try Again" and "Sign Up".
///
/// `button1_text` labels the white button and `button2_text` the blue one. The
/// white button is shown unless turned off, the blue one only when requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogSpec {
    pub title: String,
    pub sub_title: String,
    pub show_blue_button: bool,
    pub show_white_button: bool,
    pub button1_text: String,
    pub button2_text: String,
}

impl DialogSpec {
    /// A dialog with a title and a single white button.
    pub fn new(title: impl Into<String>, button1_text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sub_title: String::new(),
            show_blue_button: false,
            show_white_button: true,
            button1_text: button1_text.into(),
            button2_text: String::new(),
        }
    }

    pub fn sub_title(mut self, sub_title: impl Into<String>) -> Self {
        self.sub_title = sub_title.into();
        self
    }

    pub fn blue_button(mut self, text: impl Into<String>) -> Self {
        self.show_blue_button = true;
        self.button2_text = text.into();
        self
    }

    pub fn without_white_button(mut self) -> Self {
        self.show_white_button = false;
        self
    }

    /// Sub-title line, if there is one.
    pub fn visible_sub_title(&self) -> Option<&str> {
        (!self.sub_title.is_empty()).then_some(self.sub_title.as_str())
    }

    /// Buttons in display order, top to bottom.
    pub fn buttons(&self) -> Vec<DialogButton> {
        let mut buttons = Vec::with_capacity(2);
        if self.show_blue_button {
            buttons.push(DialogButton { style: ButtonStyle::Blue, text: self.button2_text.clone() });
        }
        if self.show_white_button {
            buttons.push(DialogButton { style: ButtonStyle::White, text: self.button1_text.clone() });
        }
        buttons
    }
}
