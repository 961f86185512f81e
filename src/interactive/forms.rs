//! Form state for the sign-in, sign-up and password reset screens

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_input::{Input, InputRequest};

use crate::account::PasswordStrength;
use crate::error::ValidationError;

/// Apply an editing key to a text input
///
/// Returns false for keys that are not text editing, so the caller can treat
/// them as commands.
pub fn edit_input(input: &mut Input, key: KeyEvent) -> bool {
    let request = match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            InputRequest::InsertChar(c)
        }
        KeyCode::Backspace => InputRequest::DeletePrevChar,
        KeyCode::Delete => InputRequest::DeleteNextChar,
        KeyCode::Left => InputRequest::GoToPrevChar,
        KeyCode::Right => InputRequest::GoToNextChar,
        KeyCode::Home => InputRequest::GoToStart,
        KeyCode::End => InputRequest::GoToEnd,
        _ => return false,
    };
    input.handle(request);
    true
}

/// Field text as drawn, masked unless `visible`
pub fn display_value(input: &Input, secret: bool, visible: bool) -> String {
    if secret && !visible {
        "•".repeat(input.value().chars().count())
    } else {
        input.value().to_string()
    }
}

fn require(input: &Input, label: &str) -> Result<(), ValidationError> {
    if input.value().trim().is_empty() {
        Err(ValidationError::MissingField(label.to_string()))
    } else {
        Ok(())
    }
}

/// Focusable elements of the login screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
    ForgotLink,
    RegisterLink,
}

impl LoginField {
    pub fn next(&self) -> LoginField {
        match self {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::ForgotLink,
            LoginField::ForgotLink => LoginField::RegisterLink,
            LoginField::RegisterLink => LoginField::Email,
        }
    }

    pub fn previous(&self) -> LoginField {
        match self {
            LoginField::Email => LoginField::RegisterLink,
            LoginField::Password => LoginField::Email,
            LoginField::ForgotLink => LoginField::Password,
            LoginField::RegisterLink => LoginField::ForgotLink,
        }
    }
}

#[derive(Debug, Default)]
pub struct LoginForm {
    pub email: Input,
    pub password: Input,
    pub focus: LoginField,
    pub show_password: bool,
}

impl LoginForm {
    pub fn focused_input(&mut self) -> Option<&mut Input> {
        match self.focus {
            LoginField::Email => Some(&mut self.email),
            LoginField::Password => Some(&mut self.password),
            _ => None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.email, "Email atau Nomor HP")?;
        require(&self.password, "Password")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegisterField {
    #[default]
    Name,
    Email,
    Phone,
    Password,
    ConfirmPassword,
    Terms,
    Submit,
    LoginLink,
}

impl RegisterField {
    const ORDER: [RegisterField; 8] = [
        RegisterField::Name,
        RegisterField::Email,
        RegisterField::Phone,
        RegisterField::Password,
        RegisterField::ConfirmPassword,
        RegisterField::Terms,
        RegisterField::Submit,
        RegisterField::LoginLink,
    ];

    fn index(&self) -> usize {
        Self::ORDER.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> RegisterField {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn previous(&self) -> RegisterField {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn label(&self) -> &'static str {
        match self {
            RegisterField::Name => "Nama Lengkap",
            RegisterField::Email => "Email",
            RegisterField::Phone => "Nomor HP",
            RegisterField::Password => "Password",
            RegisterField::ConfirmPassword => "Konfirmasi Password",
            RegisterField::Terms => "Syarat & Ketentuan",
            RegisterField::Submit => "Daftar",
            RegisterField::LoginLink => "Masuk",
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(
            self,
            RegisterField::Name
                | RegisterField::Email
                | RegisterField::Phone
                | RegisterField::Password
                | RegisterField::ConfirmPassword
        )
    }
}

#[derive(Debug, Default)]
pub struct RegisterForm {
    pub name: Input,
    pub email: Input,
    pub phone: Input,
    pub password: Input,
    pub confirm_password: Input,
    pub accept_terms: bool,
    pub show_password: bool,
    pub focus: RegisterField,
}

impl RegisterForm {
    pub fn input(&self, field: RegisterField) -> Option<&Input> {
        match field {
            RegisterField::Name => Some(&self.name),
            RegisterField::Email => Some(&self.email),
            RegisterField::Phone => Some(&self.phone),
            RegisterField::Password => Some(&self.password),
            RegisterField::ConfirmPassword => Some(&self.confirm_password),
            _ => None,
        }
    }

    pub fn focused_input(&mut self) -> Option<&mut Input> {
        match self.focus {
            RegisterField::Name => Some(&mut self.name),
            RegisterField::Email => Some(&mut self.email),
            RegisterField::Phone => Some(&mut self.phone),
            RegisterField::Password => Some(&mut self.password),
            RegisterField::ConfirmPassword => Some(&mut self.confirm_password),
            _ => None,
        }
    }

    pub fn strength(&self) -> PasswordStrength {
        PasswordStrength::of(self.password.value())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        for field in RegisterField::ORDER.iter().filter(|f| f.is_text()) {
            if let Some(input) = self.input(*field) {
                require(input, field.label())?;
            }
        }
        if self.password.value() != self.confirm_password.value() {
            return Err(ValidationError::PasswordMismatch);
        }
        if !self.accept_terms {
            return Err(ValidationError::TermsNotAccepted);
        }
        Ok(())
    }
}

/// Steps of the password reset flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetStep {
    #[default]
    EnterEmail,
    CheckInbox,
    NewPassword,
    Done,
}

impl ResetStep {
    pub fn number(&self) -> u8 {
        match self {
            ResetStep::EnterEmail => 1,
            ResetStep::CheckInbox => 2,
            ResetStep::NewPassword => 3,
            ResetStep::Done => 4,
        }
    }

    /// Step reached by going back, `None` on the first step
    pub fn back(&self) -> Option<ResetStep> {
        match self {
            ResetStep::EnterEmail => None,
            ResetStep::CheckInbox => Some(ResetStep::EnterEmail),
            ResetStep::NewPassword => Some(ResetStep::CheckInbox),
            ResetStep::Done => Some(ResetStep::NewPassword),
        }
    }
}

#[derive(Debug, Default)]
pub struct ForgotPasswordForm {
    pub step: ResetStep,
    pub email: Input,
    pub new_password: Input,
    pub confirm_password: Input,
    /// On step 3: editing the confirmation rather than the new password
    pub on_confirm: bool,
    pub show_password: bool,
}

impl ForgotPasswordForm {
    pub fn focused_input(&mut self) -> Option<&mut Input> {
        match self.step {
            ResetStep::EnterEmail => Some(&mut self.email),
            ResetStep::NewPassword if self.on_confirm => Some(&mut self.confirm_password),
            ResetStep::NewPassword => Some(&mut self.new_password),
            _ => None,
        }
    }

    /// Move past the current step when its input is valid
    pub fn advance(&mut self) -> Result<(), ValidationError> {
        self.step = match self.step {
            ResetStep::EnterEmail => {
                require(&self.email, "Email atau Nomor HP")?;
                ResetStep::CheckInbox
            }
            ResetStep::CheckInbox => ResetStep::NewPassword,
            ResetStep::NewPassword => {
                require(&self.new_password, "Password Baru")?;
                require(&self.confirm_password, "Konfirmasi Password")?;
                if self.new_password.value() != self.confirm_password.value() {
                    return Err(ValidationError::PasswordMismatch);
                }
                ResetStep::Done
            }
            ResetStep::Done => ResetStep::Done,
        };
        Ok(())
    }

    /// "Kirim ulang" on the inbox step starts over
    pub fn resend(&mut self) {
        if self.step == ResetStep::CheckInbox {
            self.step = ResetStep::EnterEmail;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_into(input: &mut Input, text: &str) {
        for c in text.chars() {
            edit_input(input, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_edit_input_handles_editing_keys() {
        let mut input = Input::default();
        type_into(&mut input, "abc");
        assert!(edit_input(&mut input, key(KeyCode::Backspace)));
        assert_eq!(input.value(), "ab");
        assert!(!edit_input(&mut input, key(KeyCode::Enter)));
        assert!(!edit_input(
            &mut input,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        ));
        assert_eq!(input.value(), "ab");
    }

    #[test]
    fn test_password_is_masked() {
        let input = Input::new("rahasia".to_string());
        assert_eq!(display_value(&input, true, false), "•••••••");
        assert_eq!(display_value(&input, true, true), "rahasia");
    }

    #[test]
    fn test_login_requires_both_fields() {
        let mut form = LoginForm::default();
        type_into(&mut form.email, "ahmad@email.com");
        assert_eq!(
            form.validate(),
            Err(ValidationError::MissingField("Password".to_string()))
        );
        type_into(&mut form.password, "secret");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_register_validation_order() {
        let mut form = RegisterForm::default();
        assert!(matches!(form.validate(), Err(ValidationError::MissingField(_))));
        type_into(&mut form.name, "Ahmad");
        type_into(&mut form.email, "a@b.c");
        type_into(&mut form.phone, "0812");
        type_into(&mut form.password, "secret1");
        type_into(&mut form.confirm_password, "secret2");
        assert_eq!(form.validate(), Err(ValidationError::PasswordMismatch));
        form.confirm_password = Input::new("secret1".to_string());
        assert_eq!(form.validate(), Err(ValidationError::TermsNotAccepted));
        form.accept_terms = true;
        assert!(form.validate().is_ok());
        assert_eq!(form.strength(), PasswordStrength::Sedang);
    }

    #[test]
    fn test_register_focus_wraps() {
        assert_eq!(RegisterField::LoginLink.next(), RegisterField::Name);
        assert_eq!(RegisterField::Name.previous(), RegisterField::LoginLink);
    }

    #[test]
    fn test_reset_flow_steps() {
        let mut form = ForgotPasswordForm::default();
        assert!(form.advance().is_err());
        type_into(&mut form.email, "ahmad@email.com");
        form.advance().unwrap();
        assert_eq!(form.step, ResetStep::CheckInbox);
        form.resend();
        assert_eq!(form.step, ResetStep::EnterEmail);
        form.advance().unwrap();
        form.advance().unwrap();
        assert_eq!(form.step, ResetStep::NewPassword);
        type_into(&mut form.new_password, "baru123");
        type_into(&mut form.confirm_password, "baru123");
        form.advance().unwrap();
        assert_eq!(form.step, ResetStep::Done);
        assert_eq!(form.step.back(), Some(ResetStep::NewPassword));
        assert_eq!(ResetStep::EnterEmail.back(), None);
    }
}
