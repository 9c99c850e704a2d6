//! Client-Side Form Validation
//!
//! UI-layer convenience checks performed before any network call is issued.
//! The backend stays authoritative and may still reject input accepted here.

pub const PASSWORD_MIN: usize = 8;
pub const PASSWORD_MAX: usize = 15;

pub fn password_length_ok(password: &str) -> bool {
    (PASSWORD_MIN..=PASSWORD_MAX).contains(&password.chars().count())
}

fn any_blank(fields: &[&str]) -> bool {
    fields.iter().any(|field| field.trim().is_empty())
}

/// Attendee creation / end-user registration: all five fields required,
/// password length bounded
pub fn new_attendee(
    full_name: &str,
    email: &str,
    username: &str,
    password: &str,
    has_image: bool,
) -> Result<(), String> {
    if any_blank(&[full_name, email, username, password]) || !has_image {
        return Err("All fields including cover image are required.".to_string());
    }
    if !password_length_ok(password) {
        return Err("Password must be between 8 and 15 characters!".to_string());
    }
    Ok(())
}

pub fn new_event(name: &str, description: &str, location: &str, date: &str) -> Result<(), String> {
    if any_blank(&[name, description, location, date]) {
        return Err("All fields are required.".to_string());
    }
    Ok(())
}

pub fn new_task(event_selected: bool, agenda: &str, due: &str) -> Result<(), String> {
    if !event_selected || any_blank(&[agenda, due]) {
        return Err("Please fill in all fields.".to_string());
    }
    Ok(())
}

pub fn login(email: &str, password: &str) -> Result<(), String> {
    if any_blank(&[email, password]) {
        return Err("Email and password are required.".to_string());
    }
    Ok(())
}

/// Profile update: password optional, but must match its confirmation when set
pub fn profile_update(
    full_name: &str,
    email: &str,
    username: &str,
    password: &str,
    confirm: &str,
) -> Result<(), String> {
    if any_blank(&[full_name, email, username]) {
        return Err("All fields are required.".to_string());
    }
    if !password.is_empty() && password != confirm {
        return Err("Passwords do not match.".to_string());
    }
    Ok(())
}

pub fn proof(has_file: bool) -> Result<(), String> {
    if !has_file {
        return Err("Please upload a proof file.".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_length_bounds() {
        assert!(!password_length_ok("short77")); // 7
        assert!(password_length_ok("exactly8")); // 8
        assert!(password_length_ok("fifteen-chars15")); // 15
        assert!(!password_length_ok("sixteen-chars-16")); // 16
    }

    #[test]
    fn test_new_attendee_requires_every_field() {
        let ok = new_attendee("Ada Lovelace", "ada@example.com", "ada", "secretpw", true);
        assert!(ok.is_ok());

        for (name, email, user, pw, img) in [
            ("", "ada@example.com", "ada", "secretpw", true),
            ("Ada", "", "ada", "secretpw", true),
            ("Ada", "ada@example.com", "", "secretpw", true),
            ("Ada", "ada@example.com", "ada", "", true),
            ("Ada", "ada@example.com", "ada", "secretpw", false),
        ] {
            assert!(new_attendee(name, email, user, pw, img).is_err());
        }

        // Whitespace-only counts as missing
        assert!(new_attendee("   ", "ada@example.com", "ada", "secretpw", true).is_err());
    }

    #[test]
    fn test_new_attendee_rejects_out_of_range_password() {
        assert!(new_attendee("Ada", "a@b.c", "ada", "short77", true).is_err());
        assert!(new_attendee("Ada", "a@b.c", "ada", "way-too-long-password", true).is_err());
    }

    #[test]
    fn test_new_event() {
        assert!(new_event("Kickoff", "Intro", "HQ", "2025-01-10").is_ok());
        assert!(new_event("Kickoff", "", "HQ", "2025-01-10").is_err());
    }

    #[test]
    fn test_new_task_needs_selected_event() {
        assert!(new_task(true, "Agenda", "2025-01-10").is_ok());
        assert!(new_task(false, "Agenda", "2025-01-10").is_err());
        assert!(new_task(true, "", "2025-01-10").is_err());
    }

    #[test]
    fn test_profile_update_password_confirmation() {
        assert!(profile_update("Ada", "a@b.c", "ada", "", "").is_ok());
        assert!(profile_update("Ada", "a@b.c", "ada", "newpass99", "newpass99").is_ok());
        assert!(profile_update("Ada", "a@b.c", "ada", "newpass99", "different").is_err());
        assert!(profile_update("", "a@b.c", "ada", "", "").is_err());
    }

    #[test]
    fn test_proof_required() {
        assert!(proof(true).is_ok());
        assert!(proof(false).is_err());
    }
}
