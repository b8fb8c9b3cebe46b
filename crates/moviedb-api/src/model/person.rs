//! People.

use serde::{Deserialize, Serialize};

use super::artwork::Artwork;
use super::common::ExternalIds;
use super::credits::PersonCredits;
use super::movie::MovieBasic;
use super::tv::TvBasic;

/// Work a person is known for, tagged by `media_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "media_type", rename_all = "lowercase")]
pub enum KnownFor {
    /// A movie.
    Movie(MovieBasic),
    /// A series.
    Tv(TvBasic),
}

/// Person as it appears in search and list results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonBasic {
    /// TMDB person ID.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Original name.
    pub original_name: String,
    /// Adult flag.
    pub adult: bool,
    /// Gender (0 unknown, 1 female, 2 male, 3 non-binary).
    pub gender: u8,
    /// Main department.
    pub known_for_department: String,
    /// Popularity score.
    pub popularity: f64,
    /// Profile image path.
    pub profile_path: Option<String>,
    /// Notable works.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub known_for: Vec<KnownFor>,
}

/// Profile images appended to a person (`{"profiles": [...]}`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonImages {
    /// Profiles.
    pub profiles: Vec<Artwork>,
}

/// Response from `person/{person_id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonInfo {
    /// TMDB person ID.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Other names.
    pub also_known_as: Vec<String>,
    /// Biography.
    pub biography: String,
    /// Birthday (YYYY-MM-DD).
    pub birthday: Option<String>,
    /// Day of death.
    pub deathday: Option<String>,
    /// Gender.
    pub gender: u8,
    /// Homepage URL.
    pub homepage: Option<String>,
    /// IMDb ID.
    pub imdb_id: Option<String>,
    /// Main department.
    pub known_for_department: String,
    /// Place of birth.
    pub place_of_birth: Option<String>,
    /// Popularity score.
    pub popularity: f64,
    /// Profile image path.
    pub profile_path: Option<String>,
    /// Adult flag.
    pub adult: bool,
    /// Appended movie credits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movie_credits: Option<PersonCredits>,
    /// Appended TV credits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tv_credits: Option<PersonCredits>,
    /// Appended combined credits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub combined_credits: Option<PersonCredits>,
    /// Appended external ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_ids: Option<ExternalIds>,
    /// Appended images.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<PersonImages>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;

    #[test]
    fn test_parse_person_info_fixture() {
        // Arrange
        let json = include_str!("../../../../fixtures/tmdb/person_6384.json");

        // Act
        let person: PersonInfo = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(person.id, 6384);
        assert_eq!(person.name, "Keanu Reeves");
        assert_eq!(person.birthday.as_deref(), Some("1964-09-02"));
        assert!(person.deathday.is_none());
        assert!(person.also_known_as.len() >= 2);
    }

    #[test]
    fn test_known_for_is_tagged_by_media_type() {
        // Arrange
        let json = r#"{"id":6384,"name":"Keanu Reeves","known_for":[
            {"media_type":"movie","id":603,"title":"The Matrix"},
            {"media_type":"tv","id":1,"name":"Show"}
        ]}"#;

        // Act
        let person: PersonBasic = serde_json::from_str(json).unwrap();

        // Assert
        assert!(matches!(&person.known_for[0], KnownFor::Movie(m) if m.id == 603));
        assert!(matches!(&person.known_for[1], KnownFor::Tv(t) if t.name == "Show"));
    }

    #[test]
    fn test_person_basic_round_trip() {
        // Arrange
        let original = PersonBasic {
            id: 6384,
            name: String::from("Keanu Reeves"),
            known_for_department: String::from("Acting"),
            known_for: vec![KnownFor::Movie(MovieBasic {
                id: 603,
                title: String::from("The Matrix"),
                ..MovieBasic::default()
            })],
            ..PersonBasic::default()
        };

        // Act
        let json = serde_json::to_string(&original).unwrap();
        let decoded: PersonBasic = serde_json::from_str(&json).unwrap();

        // Assert
        assert_eq!(decoded, original);
    }
}
