/// Lowercases the whole address, local part included.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
