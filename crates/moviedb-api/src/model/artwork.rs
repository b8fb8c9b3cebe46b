//! Artwork (posters, backdrops, profiles, stills).

use serde::{Deserialize, Serialize};

/// One image file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Artwork {
    /// Width / height.
    pub aspect_ratio: f64,
    /// Image path, to be combined with a configured base URL and size.
    pub file_path: String,
    /// Height in pixels.
    pub height: u32,
    /// Width in pixels.
    pub width: u32,
    /// Language (ISO 639-1), `None` for language-neutral images.
    pub iso_639_1: Option<String>,
    /// Vote average.
    pub vote_average: f64,
    /// Vote count.
    pub vote_count: u32,
}

/// Images of a movie, series, season, episode or collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Images {
    /// Owning resource ID.
    pub id: u64,
    /// Backdrops.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub backdrops: Vec<Artwork>,
    /// Logos.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub logos: Vec<Artwork>,
    /// Posters.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub posters: Vec<Artwork>,
    /// Stills (episodes).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub stills: Vec<Artwork>,
    /// Profiles (people).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub profiles: Vec<Artwork>,
}

impl Images {
    /// Total number of images of every kind.
    #[must_use]
    pub fn len(&self) -> usize {
        [
            &self.backdrops,
            &self.logos,
            &self.posters,
            &self.stills,
            &self.profiles,
        ]
        .iter()
        .map(|v| v.len())
        .sum()
    }

    /// Returns `true` when no image of any kind is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Image a person is tagged in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaggedImage {
    /// Image metadata.
    #[serde(flatten)]
    pub artwork: Artwork,
    /// Image kind ("backdrop", "poster", "still").
    pub image_type: String,
    /// Kind of the media the image belongs to.
    pub media_type: String,
}
