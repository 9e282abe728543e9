//! Profile document and interest list editing

use serde::{Deserialize, Serialize};

use crate::error::ProfileError;

/// Interests offered by the profile editor.
pub const INTEREST_OPTIONS: [&str; 8] = [
    "Inteligência Artificial",
    "Gestão de Projetos",
    "Sustentabilidade",
    "Desenvolvimento Web",
    "Data Science",
    "Marketing Digital",
    "Design UX/UI",
    "Finanças",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub interests: Vec<String>,
}

impl Profile {
    /// Appends `interest` unless it is blank or already listed.
    pub fn add_interest(&mut self, interest: &str) -> Result<(), ProfileError> {
        if interest.trim().is_empty() {
            return Err(ProfileError::NoInterestSelected);
        }
        if self.interests.iter().any(|i| i == interest) {
            return Err(ProfileError::DuplicateInterest);
        }
        self.interests.push(interest.to_string());
        Ok(())
    }

    /// Returns whether anything was removed.
    pub fn remove_interest(&mut self, interest: &str) -> bool {
        let before = self.interests.len();
        self.interests.retain(|i| i != interest);
        self.interests.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_interest_keeps_order() {
        let mut profile = Profile::default();
        profile.add_interest(INTEREST_OPTIONS[2]).unwrap();
        profile.add_interest(INTEREST_OPTIONS[0]).unwrap();
        assert_eq!(profile.interests, vec!["Sustentabilidade", "Inteligência Artificial"]);
    }

    #[test]
    fn test_add_interest_rejects_blank_and_duplicates() {
        let mut profile = Profile::default();
        assert_eq!(profile.add_interest("  "), Err(ProfileError::NoInterestSelected));
        profile.add_interest("Finanças").unwrap();
        assert_eq!(profile.add_interest("Finanças"), Err(ProfileError::DuplicateInterest));
        assert_eq!(profile.interests.len(), 1);
    }

    #[test]
    fn test_remove_interest() {
        let mut profile = Profile {
            interests: vec!["Data Science".into(), "Finanças".into()],
            ..Default::default()
        };
        assert!(profile.remove_interest("Data Science"));
        assert!(!profile.remove_interest("Data Science"));
        assert_eq!(profile.interests, vec!["Finanças"]);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let profile: Profile =
            serde_json::from_str(r#"{"name":"Ana","email":"a@b.c","avatar":"x.png"}"#).unwrap();
        assert_eq!(profile.name, "Ana");
        assert!(profile.interests.is_empty());
    }
}
