//! Breed entity and display-name rules

/// Sub-breed names that read naturally *before* the breed
/// (nationalities and size classes: "german shepherd", "toy poodle").
const PREFIX_SUB_BREEDS: &[&str] = &[
    "indian",
    "italian",
    "german",
    "french",
    "english",
    "scottish",
    "japanese",
    "swedish",
    "norwegian",
    "spanish",
    "irish",
    "dutch",
    "russian",
    "caucasian",
    "australian",
    "american",
    "welsh",
    "toy",
    "miniature",
    "standard",
    "medium",
    "giant",
];

/// Breed names that are type nouns and therefore go *after* the sub-breed
/// ("golden retriever", "french bulldog").
const POSTFIX_BREEDS: &[&str] = &[
    "hound",
    "terrier",
    "retriever",
    "mastiff",
    "sheepdog",
    "bulldog",
    "pointer",
    "spaniel",
    "elkhound",
    "waterdog",
    "wolfhound",
    "ridgeback",
    "deerhound",
    "setter",
];

/// A selectable breed, optionally narrowed to a sub-breed (Entity)
///
/// The `id` is derived from the name parts and never stored independently,
/// so `id` and `(breed, sub_breed)` always agree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BreedEntity {
    id: String,
    breed: String,
    sub_breed: Option<String>,
}

impl BreedEntity {
    /// Top-level breed without a sub-breed (`id == breed`)
    pub fn new(breed: impl Into<String>) -> Self {
        let breed = breed.into();
        Self {
            id: breed.clone(),
            breed,
            sub_breed: None,
        }
    }

    /// Breed narrowed to a sub-breed (`id == "{breed}_{sub_breed}"`)
    pub fn with_sub_breed(breed: impl Into<String>, sub_breed: impl Into<String>) -> Self {
        let breed = breed.into();
        let sub_breed = sub_breed.into();
        Self {
            id: format!("{}_{}", breed, sub_breed),
            breed,
            sub_breed: Some(sub_breed),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn breed(&self) -> &str {
        &self.breed
    }

    pub fn sub_breed(&self) -> Option<&str> {
        self.sub_breed.as_deref()
    }

    /// Human-readable name shown to the player.
    ///
    /// Classification against the prefix/postfix word lists ignores case;
    /// the output keeps the original casing of both parts. Combinations the
    /// lists do not cover render as `"{breed} {sub_breed}"`.
    pub fn display_name(&self) -> String {
        let Some(sub_breed) = self.sub_breed.as_deref() else {
            return self.breed.clone();
        };

        if is_listed(POSTFIX_BREEDS, &self.breed) || is_listed(PREFIX_SUB_BREEDS, sub_breed) {
            format!("{} {}", sub_breed, self.breed)
        } else {
            format!("{} {}", self.breed, sub_breed)
        }
    }
}

impl std::fmt::Display for BreedEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

fn is_listed(words: &[&str], candidate: &str) -> bool {
    let lowered = candidate.to_lowercase();
    words.contains(&lowered.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_without_sub_breed() {
        let breed = BreedEntity::new("affenpinscher");
        assert_eq!(breed.id(), "affenpinscher");
        assert_eq!(breed.sub_breed(), None);
    }

    #[test]
    fn test_id_with_sub_breed() {
        let breed = BreedEntity::with_sub_breed("australian", "kelpie");
        assert_eq!(breed.id(), "australian_kelpie");
        assert_eq!(breed.breed(), "australian");
        assert_eq!(breed.sub_breed(), Some("kelpie"));
    }

    #[test]
    fn test_display_name_plain_breed() {
        assert_eq!(BreedEntity::new("akita").display_name(), "akita");
    }

    #[test]
    fn test_display_name_postfix_breed() {
        let breed = BreedEntity::with_sub_breed("retriever", "golden");
        assert_eq!(breed.display_name(), "golden retriever");
    }

    #[test]
    fn test_display_name_prefix_sub_breed() {
        let breed = BreedEntity::with_sub_breed("bulldog", "french");
        assert_eq!(breed.display_name(), "french bulldog");

        let breed = BreedEntity::with_sub_breed("poodle", "toy");
        assert_eq!(breed.display_name(), "toy poodle");
    }

    #[test]
    fn test_display_name_unknown_falls_through() {
        let breed = BreedEntity::with_sub_breed("unknownbreed", "unknownsub");
        assert_eq!(breed.display_name(), "unknownbreed unknownsub");

        let breed = BreedEntity::with_sub_breed("australian", "kelpie");
        assert_eq!(breed.display_name(), "australian kelpie");
    }

    #[test]
    fn test_display_name_classification_ignores_case() {
        let breed = BreedEntity::with_sub_breed("Retriever", "Golden");
        assert_eq!(breed.display_name(), "Golden Retriever");

        let breed = BreedEntity::with_sub_breed("Shepherd", "GERMAN");
        assert_eq!(breed.display_name(), "GERMAN Shepherd");
    }

    #[test]
    fn test_display_name_is_deterministic() {
        let breed = BreedEntity::with_sub_breed("hound", "afghan");
        assert_eq!(breed.display_name(), breed.display_name());
        assert_eq!(breed.display_name(), breed.clone().to_string());
    }
}
