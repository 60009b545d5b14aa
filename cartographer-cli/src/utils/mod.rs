use dialoguer::{Input, Password};

pub trait OptionExt<T> {
    fn ok_or_try<F, E>(self, f: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_try<F, E>(self, f: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        match self {
            Some(v) => Ok(v),
            None => f(),
        }
    }
}

pub fn prompt_email() -> std::io::Result<String> {
    Input::new().with_prompt("Email").interact_text()
}

pub fn prompt_password() -> std::io::Result<String> {
    Password::new().with_prompt("Password").interact()
}
