//! Request URL assembly.

use url::Url;

use crate::error::{MovieDbError, Result};
use crate::params::QueryParams;

/// Name of the mandatory authentication query parameter.
const API_KEY_PARAM: &str = "api_key";

/// Placeholder written over the API key in logged URLs.
const REDACTED: &str = "REDACTED";

/// Base resource of a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Method {
    Account,
    Authentication,
    Certification,
    Collection,
    Company,
    Configuration,
    Credit,
    Discover,
    Find,
    Genre,
    GuestSession,
    Keyword,
    List,
    Movie,
    Network,
    Person,
    Review,
    Search,
    Tv,
}

impl Method {
    /// Returns the path segment of the resource.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Account => "account",
            Self::Authentication => "authentication",
            Self::Certification => "certification",
            Self::Collection => "collection",
            Self::Company => "company",
            Self::Configuration => "configuration",
            Self::Credit => "credit",
            Self::Discover => "discover",
            Self::Find => "find",
            Self::Genre => "genre",
            Self::GuestSession => "guest_session",
            Self::Keyword => "keyword",
            Self::List => "list",
            Self::Movie => "movie",
            Self::Network => "network",
            Self::Person => "person",
            Self::Review => "review",
            Self::Search => "search",
            Self::Tv => "tv",
        }
    }
}

/// Sub-resource appended after the id (may span several segments).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum SubMethod {
    AccountStates,
    AddItem,
    AiringToday,
    AlternativeTitles,
    Changes,
    Clear,
    Collection,
    CombinedCredits,
    Company,
    ContentRatings,
    Countries,
    Credits,
    ExternalIds,
    Favorite,
    FavoriteMovies,
    FavoriteTv,
    GuestSessionNew,
    Images,
    ItemStatus,
    Jobs,
    Keyword,
    Keywords,
    Languages,
    Latest,
    Lists,
    Movie,
    MovieCredits,
    MovieList,
    Movies,
    Multi,
    NowPlaying,
    OnTheAir,
    Person,
    Popular,
    Rating,
    RatedEpisodes,
    RatedMovies,
    RatedTv,
    Recommendations,
    ReleaseDates,
    RemoveItem,
    Reviews,
    Session,
    SessionNew,
    Similar,
    TaggedImages,
    Timezones,
    TokenNew,
    TokenValidateWithLogin,
    TopRated,
    Translations,
    Tv,
    TvCredits,
    TvList,
    Upcoming,
    Videos,
    Watchlist,
    WatchlistMovies,
    WatchlistTv,
}

impl SubMethod {
    /// Returns the path suffix (without leading slash).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AccountStates => "account_states",
            Self::AddItem => "add_item",
            Self::AiringToday => "airing_today",
            Self::AlternativeTitles => "alternative_titles",
            Self::Changes => "changes",
            Self::Clear => "clear",
            Self::Collection => "collection",
            Self::CombinedCredits => "combined_credits",
            Self::Company => "company",
            Self::ContentRatings => "content_ratings",
            Self::Countries => "countries",
            Self::Credits => "credits",
            Self::ExternalIds => "external_ids",
            Self::Favorite => "favorite",
            Self::FavoriteMovies => "favorite/movies",
            Self::FavoriteTv => "favorite/tv",
            Self::GuestSessionNew => "guest_session/new",
            Self::Images => "images",
            Self::ItemStatus => "item_status",
            Self::Jobs => "jobs",
            Self::Keyword => "keyword",
            Self::Keywords => "keywords",
            Self::Languages => "languages",
            Self::Latest => "latest",
            Self::Lists => "lists",
            Self::Movie => "movie",
            Self::MovieCredits => "movie_credits",
            Self::MovieList => "movie/list",
            Self::Movies => "movies",
            Self::Multi => "multi",
            Self::NowPlaying => "now_playing",
            Self::OnTheAir => "on_the_air",
            Self::Person => "person",
            Self::Popular => "popular",
            Self::Rating => "rating",
            Self::RatedEpisodes => "rated/tv/episodes",
            Self::RatedMovies => "rated/movies",
            Self::RatedTv => "rated/tv",
            Self::Recommendations => "recommendations",
            Self::ReleaseDates => "release_dates",
            Self::RemoveItem => "remove_item",
            Self::Reviews => "reviews",
            Self::Session => "session",
            Self::SessionNew => "session/new",
            Self::Similar => "similar",
            Self::TaggedImages => "tagged_images",
            Self::Timezones => "timezones",
            Self::TokenNew => "token/new",
            Self::TokenValidateWithLogin => "token/validate_with_login",
            Self::TopRated => "top_rated",
            Self::Translations => "translations",
            Self::Tv => "tv",
            Self::TvCredits => "tv_credits",
            Self::TvList => "tv/list",
            Self::Upcoming => "upcoming",
            Self::Videos => "videos",
            Self::Watchlist => "watchlist",
            Self::WatchlistMovies => "watchlist/movies",
            Self::WatchlistTv => "watchlist/tv",
        }
    }
}

/// Reference to one API resource: base path, optional id and sub-resource.
///
/// Built fresh for every call and turned into a [`Url`] with [`ApiUrl::build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiUrl {
    method: Method,
    id: Option<String>,
    season: Option<u32>,
    episode: Option<u32>,
    sub: Option<SubMethod>,
}

impl ApiUrl {
    /// Starts a URL for the given base resource.
    #[must_use]
    pub const fn new(method: Method) -> Self {
        Self {
            method,
            id: None,
            season: None,
            episode: None,
            sub: None,
        }
    }

    /// Sets the resource id (numeric or string).
    #[must_use]
    pub fn id(mut self, id: impl ToString) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Sets the season number (TV only).
    #[must_use]
    pub const fn season(mut self, season_number: u32) -> Self {
        self.season = Some(season_number);
        self
    }

    /// Sets the episode number (TV only).
    #[must_use]
    pub const fn episode(mut self, episode_number: u32) -> Self {
        self.episode = Some(episode_number);
        self
    }

    /// Sets the sub-resource.
    #[must_use]
    pub const fn sub(mut self, sub: SubMethod) -> Self {
        self.sub = Some(sub);
        self
    }

    /// Returns the path segments relative to the API root.
    #[must_use]
    pub fn segments(&self) -> Vec<String> {
        let mut segments = vec![String::from(self.method.as_str())];
        if let Some(ref id) = self.id {
            segments.push(id.clone());
        }
        if let Some(season) = self.season {
            segments.push(String::from("season"));
            segments.push(season.to_string());
        }
        if let Some(episode) = self.episode {
            segments.push(String::from("episode"));
            segments.push(episode.to_string());
        }
        if let Some(sub) = self.sub {
            segments.extend(sub.as_str().split('/').map(String::from));
        }
        segments
    }

    /// Returns the relative path, e.g. `movie/603/credits`.
    #[must_use]
    pub fn path(&self) -> String {
        self.segments().join("/")
    }

    /// Builds the full request URL.
    ///
    /// The API key is always the first query pair, followed by `params`
    /// in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`MovieDbError::InvalidUrl`] if `base` cannot carry a path
    /// (e.g. a `mailto:` URL).
    pub fn build(&self, base: &Url, api_key: &str, params: &QueryParams) -> Result<Url> {
        let mut url = base.clone();
        url.set_query(None);
        url.set_fragment(None);
        {
            let mut path = url.path_segments_mut().map_err(|()| {
                MovieDbError::InvalidUrl(format!("base URL cannot be a base: {base}"))
            })?;
            path.pop_if_empty();
            path.extend(self.segments());
        }
        {
            let mut query = url.query_pairs_mut();
            query.append_pair(API_KEY_PARAM, api_key);
            for (param, value) in params.iter() {
                query.append_pair(param.as_str(), value);
            }
        }
        Ok(url)
    }
}

/// Renders `url` with the API key value masked, for logs and errors.
#[must_use]
pub fn redact(url: &Url) -> String {
    if !url.query_pairs().any(|(k, _)| k == API_KEY_PARAM) {
        return url.to_string();
    }
    let mut masked = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let value = if k == API_KEY_PARAM {
                String::from(REDACTED)
            } else {
                v.into_owned()
            };
            (k.into_owned(), value)
        })
        .collect();
    masked.query_pairs_mut().clear().extend_pairs(pairs);
    masked.to_string()
}
