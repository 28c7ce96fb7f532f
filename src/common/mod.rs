//! Small shared helpers.

/// Build the fixed greeting string, handing ownership to the caller.
pub fn greeting() -> String {
    String::from("Hello, World!")
}
