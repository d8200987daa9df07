use std::fmt;
use std::str::FromStr;

/// Which catalog endpoint a search goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    /// Single tracks
    Track,
    /// Whole albums, played as a context
    Album,
    /// Public playlists, played as a context
    Playlist,
}

impl SearchKind {
    /// Lowercase name as accepted by `-t`.
    pub fn as_str(self) -> &'static str {
        match self {
            SearchKind::Track => "track",
            SearchKind::Album => "album",
            SearchKind::Playlist => "playlist",
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "track" => Ok(SearchKind::Track),
            "album" => Ok(SearchKind::Album),
            "playlist" => Ok(SearchKind::Playlist),
            other => Err(other.to_string()),
        }
    }
}

/// A playable track from a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    /// Base-62 Spotify id
    pub id: String,
    /// Track title
    pub name: String,
    /// Artist names in credit order
    pub artists: Vec<String>,
    /// Name of the album the track appears on
    pub album: String,
    /// Length in milliseconds
    pub duration_ms: u64,
    /// `spotify:track:<id>`
    pub uri: String,
    /// 0 to 100
    pub popularity: u32,
    /// Marked as explicit content
    pub explicit: bool,
    /// Link to open.spotify.com
    pub url: Option<String>,
}

/// An album from a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    /// Base-62 Spotify id
    pub id: String,
    /// Album title
    pub name: String,
    /// Artist names in credit order
    pub artists: Vec<String>,
    /// Release date at whatever precision Spotify has (year, month or day)
    pub release_date: Option<String>,
    /// `album`, `single` or `compilation`
    pub album_type: Option<String>,
    /// `spotify:album:<id>`
    pub uri: String,
    /// Link to open.spotify.com
    pub url: Option<String>,
}

/// A playlist from a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    /// Base-62 Spotify id
    pub id: String,
    /// Playlist title
    pub name: String,
    /// Owner display name, or the owner id when there is none
    pub owner: String,
    /// Number of tracks
    pub track_count: u32,
    /// Editable by people other than the owner
    pub collaborative: bool,
    /// `spotify:playlist:<id>`
    pub uri: String,
    /// Link to open.spotify.com
    pub url: Option<String>,
}

/// A single search hit of any kind; this is what gets handed to playback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchItem {
    /// A track hit
    Track(Track),
    /// An album hit
    Album(Album),
    /// A playlist hit
    Playlist(Playlist),
}

impl SearchItem {
    /// Title of the underlying record.
    pub fn name(&self) -> &str {
        match self {
            SearchItem::Track(t) => &t.name,
            SearchItem::Album(a) => &a.name,
            SearchItem::Playlist(p) => &p.name,
        }
    }

    /// Spotify URI used to start playback.
    pub fn uri(&self) -> &str {
        match self {
            SearchItem::Track(t) => &t.uri,
            SearchItem::Album(a) => &a.uri,
            SearchItem::Playlist(p) => &p.uri,
        }
    }
}

/// Public profile of a Spotify user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// User id as given to `-u`
    pub id: String,
    /// Name shown on the profile, if set
    pub display_name: Option<String>,
    /// Follower count, when Spotify reports it
    pub followers: Option<u32>,
    /// `spotify:user:<id>`
    pub uri: String,
    /// Link to open.spotify.com
    pub url: Option<String>,
    /// Number of profile images
    pub images: usize,
}
