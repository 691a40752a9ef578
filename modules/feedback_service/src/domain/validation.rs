//! Column width checks
//!
//! SQLite ignores `VARCHAR(n)`, so the width of `users.username` and
//! `users.email` is checked here for every backend.

use crate::contract::{FeedbackError, NewUser, UserPatch, MAX_EMAIL_LEN, MAX_USERNAME_LEN};

fn check_width(column: &str, value: &str, max: usize) -> Result<(), FeedbackError> {
    let len = value.chars().count();
    if len > max {
        return Err(FeedbackError::Validation {
            message: format!("{column} is {len} characters long, at most {max} allowed"),
        });
    }
    Ok(())
}

pub fn validate_new_user(user: &NewUser) -> Result<(), FeedbackError> {
    check_width("username", &user.username, MAX_USERNAME_LEN)?;
    check_width("email", &user.email, MAX_EMAIL_LEN)
}

pub fn validate_user_patch(patch: &UserPatch) -> Result<(), FeedbackError> {
    if let Some(username) = &patch.username {
        check_width("username", username, MAX_USERNAME_LEN)?;
    }
    if let Some(email) = &patch.email {
        check_width("email", email, MAX_EMAIL_LEN)?;
    }
    Ok(())
}
