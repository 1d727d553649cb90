/// One live password-strength condition shown to the user while typing.
/// Advisory only; submission is gated by `validate::validate_signup`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    pub description: &'static str,
    pub satisfied: bool,
}

/// Recomputes the full checklist from the current password, in fixed
/// order. No incremental state.
pub fn password_requirements(password: &str) -> Vec<Requirement> {
    vec![
        Requirement {
            description: "At least 8 characters",
            satisfied: password.chars().count() >= 8,
        },
        Requirement {
            description: "Contains uppercase letter",
            satisfied: password.chars().any(|c| c.is_ascii_uppercase()),
        },
        Requirement {
            description: "Contains lowercase letter",
            satisfied: password.chars().any(|c| c.is_ascii_lowercase()),
        },
        Requirement {
            description: "Contains number",
            satisfied: password.chars().any(|c| c.is_ascii_digit()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_four_entries_in_fixed_order() {
        for password in ["", "a", "Password1", "UPPER-lower-123456"] {
            let requirements = password_requirements(password);
            assert_eq!(requirements.len(), 4);
            assert_eq!(requirements[0].description, "At least 8 characters");
            assert_eq!(requirements[1].description, "Contains uppercase letter");
            assert_eq!(requirements[2].description, "Contains lowercase letter");
            assert_eq!(requirements[3].description, "Contains number");
        }
    }

    #[test]
    fn empty_password_satisfies_nothing() {
        assert!(password_requirements("")
            .iter()
            .all(|requirement| !requirement.satisfied));
    }

    #[test]
    fn strong_password_satisfies_everything() {
        assert!(password_requirements("Password1")
            .iter()
            .all(|requirement| requirement.satisfied));
    }

    #[test]
    fn partial_passwords_flip_individual_entries() {
        let lower_only = password_requirements("password");
        assert!(lower_only[0].satisfied);
        assert!(!lower_only[1].satisfied);
        assert!(lower_only[2].satisfied);
        assert!(!lower_only[3].satisfied);
    }
}
