//! Sign-in / sign-up form model
//!
//! The auth page is presentation only. It switches between two field sets and
//! never submits anywhere.

use derive_more::Display;

/// Which form the auth page shows
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Display)]
pub enum AuthMode {
    #[default]
    #[display("sign-in")]
    SignIn,
    #[display("sign-up")]
    SignUp,
}

/// A form input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    FullName,
    Email,
    Password,
}

const SIGN_IN_FIELDS: &[FormField] = &[FormField::Email, FormField::Password];
const SIGN_UP_FIELDS: &[FormField] = &[FormField::FullName, FormField::Email, FormField::Password];

/// Headline figures on the branding panel
pub const PANEL_STATS: &[(&str, &str)] = &[("50K+", "Queries"), ("98%", "Accuracy"), ("24/7", "Available")];

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        }
    }

    pub fn is_sign_up(self) -> bool {
        self == AuthMode::SignUp
    }

    /// Inputs shown for this mode, in order
    pub fn fields(self) -> &'static [FormField] {
        match self {
            AuthMode::SignIn => SIGN_IN_FIELDS,
            AuthMode::SignUp => SIGN_UP_FIELDS,
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            AuthMode::SignIn => "Welcome Back",
            AuthMode::SignUp => "Create Account",
        }
    }

    pub fn subheading(self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign in to continue your legal research",
            AuthMode::SignUp => "Join thousands using Nyaya AI for legal insights",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign In",
            AuthMode::SignUp => "Create Account",
        }
    }

    /// Question above the mode switch
    pub fn switch_prompt(self) -> &'static str {
        match self {
            AuthMode::SignIn => "Don't have an account?",
            AuthMode::SignUp => "Already have an account?",
        }
    }

    /// Label of the button that switches to the other mode
    pub fn switch_label(self) -> &'static str {
        match self {
            AuthMode::SignIn => "Create Account",
            AuthMode::SignUp => "Sign In",
        }
    }

    /// Branding panel headline as (plain, highlighted) fragments
    pub fn panel_headline(self) -> &'static [(&'static str, bool)] {
        match self {
            AuthMode::SignIn => &[
                ("Justice, ", false),
                ("Explained", true),
                (". Law, ", false),
                ("Simplified", true),
                (".", false),
            ],
            AuthMode::SignUp => &[("Join the Future of ", false), ("Legal AI", true)],
        }
    }

    pub fn panel_body(self) -> &'static str {
        match self {
            AuthMode::SignIn => {
                "Access India's most comprehensive legal AI platform. Get instant answers grounded in Indian law."
            }
            AuthMode::SignUp => {
                "Create your account and start exploring India's most comprehensive legal AI platform."
            }
        }
    }
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            FormField::FullName => "Full Name",
            FormField::Email => "Email Address",
            FormField::Password => "Password",
        }
    }

    /// HTML input type; the password type depends on visibility, see [`password_input_type`]
    pub fn input_type(self, password_visible: bool) -> &'static str {
        match self {
            FormField::FullName => "text",
            FormField::Email => "email",
            FormField::Password => password_input_type(password_visible),
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::FullName => "Enter your name",
            FormField::Email => "you@example.com",
            FormField::Password => "••••••••",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            FormField::FullName => "user",
            FormField::Email => "mail",
            FormField::Password => "lock",
        }
    }

    pub fn autocomplete(self, mode: AuthMode) -> &'static str {
        match (self, mode) {
            (FormField::FullName, _) => "name",
            (FormField::Email, _) => "email",
            (FormField::Password, AuthMode::SignIn) => "current-password",
            (FormField::Password, AuthMode::SignUp) => "new-password",
        }
    }
}

pub fn password_input_type(visible: bool) -> &'static str {
    if visible { "text" } else { "password" }
}

/// Toast text shown when a form is submitted
pub fn demo_submit_notice(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::SignIn => "Sign in is not available in this demo.",
        AuthMode::SignUp => "Account creation is not available in this demo.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_sign_in() {
        assert_eq!(AuthMode::default(), AuthMode::SignIn);
        assert_eq!(AuthMode::default().heading(), "Welcome Back");
    }

    #[test]
    fn test_toggle_twice_restores_fields() {
        let mode = AuthMode::SignIn;
        let fields = mode.fields();
        assert_eq!(mode.toggled().toggled().fields(), fields);
    }

    #[test]
    fn test_full_name_only_in_sign_up() {
        let labels = |mode: AuthMode| mode.fields().iter().map(|f| f.label()).collect::<Vec<_>>();
        assert!(!labels(AuthMode::SignIn).contains(&"Full Name"));
        assert!(labels(AuthMode::SignUp).contains(&"Full Name"));
        assert_eq!(labels(AuthMode::SignIn), ["Email Address", "Password"]);
    }

    #[test]
    fn test_password_visibility() {
        assert_eq!(password_input_type(false), "password");
        assert_eq!(password_input_type(true), "text");
        assert_eq!(FormField::Password.input_type(true), "text");
        assert_eq!(FormField::Email.input_type(true), "email");
    }

    #[test]
    fn test_switch_copy_points_at_other_mode() {
        for mode in [AuthMode::SignIn, AuthMode::SignUp] {
            assert_eq!(mode.switch_label(), mode.toggled().submit_label());
        }
    }

    #[test]
    fn test_panel_headline_text() {
        let text: String = AuthMode::SignIn
            .panel_headline()
            .iter()
            .map(|(s, _)| *s)
            .collect();
        assert_eq!(text, "Justice, Explained. Law, Simplified.");
    }
}
