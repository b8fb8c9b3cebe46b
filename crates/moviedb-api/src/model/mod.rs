//! Typed TMDB response records.
//!
//! Every record ignores unknown fields and defaults absent ones, so vendor
//! additions never break decoding.

mod account;
mod artwork;
mod common;
mod configuration;
mod credits;
mod movie;
mod person;
mod review;
mod search;
mod tv;

pub use account::{
    Account, AccountState, ListCreated, ListInfo, ListItemStatus, TokenAuthorisation,
    TokenSession, UserList,
};
pub use artwork::{Artwork, Images, TaggedImage};
pub use common::{
    AlternativeTitle, Certification, ChangeItem, ChangeKey, ChangeListItem, Company,
    CompanyInfo, ContentRating, Country, ExternalIds, Genre, Keyword, Language, MediaType,
    Network, ProductionCountry, ReleaseDate, ReleaseDates, Results, StatusCode, Translation,
    TranslationData, Video,
};
pub use configuration::{Configuration, ImageConfiguration, JobDepartment, Timezone};
pub use credits::{Cast, CreditInfo, Crew, MediaCredits, PersonCredit, PersonCredits};
pub use movie::{CollectionBasic, CollectionInfo, MovieBasic, MovieInfo, MovieKeywords};
pub use person::{KnownFor, PersonBasic, PersonImages, PersonInfo};
pub use review::Review;
pub use search::{FindResults, MultiResult};
pub use tv::{Creator, Episode, Season, SeasonSummary, TvBasic, TvInfo};

/// A single resource whose zero-valued id means "no such resource".
pub(crate) trait Identified {
    /// Returns `true` when the decoded record carries a real id.
    fn has_id(&self) -> bool;
}

macro_rules! numeric_id {
    ($($ty:ty),* $(,)?) => {
        $(impl Identified for $ty {
            fn has_id(&self) -> bool {
                self.id != 0
            }
        })*
    };
}

macro_rules! string_id {
    ($($ty:ty),* $(,)?) => {
        $(impl Identified for $ty {
            fn has_id(&self) -> bool {
                !self.id.is_empty()
            }
        })*
    };
}

numeric_id!(
    Account,
    CollectionInfo,
    CompanyInfo,
    Episode,
    Keyword,
    MovieInfo,
    Network,
    PersonInfo,
    Season,
    TvInfo,
);
string_id!(CreditInfo, ListInfo, Review);
