use std::cell::Cell;
use std::collections::HashMap;

use log::{debug, info};

use crate::clients::{
    credentials::{AppCredentials, REDIRECT_URI},
    entities::{Album, Playlist, Profile, SearchItem, Track},
    errors::{Error, Result},
    service::MusicService,
};
use rspotify::{
    AuthCodeSpotify, ClientCredsSpotify, Config, Credentials, OAuth,
    model::{
        AlbumId, FullTrack, PlayContextId, PlayableId, PlaylistId, PublicUser, SearchResult,
        SearchType, SimplifiedAlbum, SimplifiedArtist, SimplifiedPlaylist, TrackId, UserId,
    },
    prelude::*,
    scopes,
};

fn artist_names(artists: &[SimplifiedArtist]) -> Vec<String> {
    artists.iter().map(|a| a.name.clone()).collect()
}

fn spotify_url(external_urls: &HashMap<String, String>) -> Option<String> {
    external_urls.get("spotify").cloned()
}

// Local files have no id and cannot be played remotely, so they are skipped.
fn track_from(f: FullTrack) -> Option<Track> {
    let id = f.id?;
    Some(Track {
        id: id.id().to_string(),
        uri: id.uri(),
        artists: artist_names(&f.artists),
        album: f.album.name,
        duration_ms: u64::try_from(f.duration.num_milliseconds()).unwrap_or(0),
        popularity: f.popularity,
        explicit: f.explicit,
        url: spotify_url(&f.external_urls),
        name: f.name,
    })
}

fn album_from(a: SimplifiedAlbum) -> Option<Album> {
    let id = a.id?;
    Some(Album {
        id: id.id().to_string(),
        uri: id.uri(),
        artists: artist_names(&a.artists),
        release_date: a.release_date,
        album_type: a.album_type,
        url: spotify_url(&a.external_urls),
        name: a.name,
    })
}

impl From<SimplifiedPlaylist> for Playlist {
    fn from(p: SimplifiedPlaylist) -> Playlist {
        Playlist {
            id: p.id.id().to_string(),
            uri: p.id.uri(),
            owner: p
                .owner
                .display_name
                .unwrap_or_else(|| p.owner.id.id().to_string()),
            track_count: p.tracks.total,
            collaborative: p.collaborative,
            url: spotify_url(&p.external_urls),
            name: p.name,
        }
    }
}

impl From<PublicUser> for Profile {
    fn from(u: PublicUser) -> Profile {
        Profile {
            id: u.id.id().to_string(),
            uri: u.id.uri(),
            display_name: u.display_name,
            followers: u.followers.map(|f| f.total),
            url: spotify_url(&u.external_urls),
            images: u.images.len(),
        }
    }
}

/// Spotify Web API access split across two sessions.
///
/// Catalog reads (search, profiles) use the client-credentials flow and never
/// prompt. Playback needs a user token, which is obtained through the
/// authorization-code flow the first time a playback call is made. Neither
/// token is written to disk.
pub struct SpotifyClient {
    /// Client-credentials session for searches and profiles
    pub catalog: ClientCredsSpotify,
    /// Authorization-code session for playback
    pub player: AuthCodeSpotify,
    catalog_ready: Cell<bool>,
    player_ready: Cell<bool>,
}

impl SpotifyClient {
    /// Wrap two sessions that have not been authorized yet.
    pub fn new(catalog: ClientCredsSpotify, player: AuthCodeSpotify) -> Self {
        SpotifyClient {
            catalog,
            player,
            catalog_ready: Cell::new(false),
            player_ready: Cell::new(false),
        }
    }

    /// Build both sessions from the application credentials.
    pub fn from_credentials(app: &AppCredentials) -> Self {
        let creds = Credentials::new(&app.client_id, &app.client_secret);
        let config = Config {
            token_cached: false,
            token_refreshing: true,
            ..Default::default()
        };
        let oauth = OAuth {
            redirect_uri: REDIRECT_URI.to_string(),
            scopes: scopes!("user-modify-playback-state", "user-read-playback-state"),
            ..Default::default()
        };

        let catalog = ClientCredsSpotify::with_config(creds.clone(), config.clone());
        let player = AuthCodeSpotify::with_config(creds, oauth, config);
        Self::new(catalog, player)
    }

    async fn catalog(&self) -> Result<&ClientCredsSpotify> {
        if !self.catalog_ready.get() {
            debug!("Requesting client credentials token ...");
            self.catalog.request_token().await?;
            self.catalog_ready.set(true);
        }
        Ok(&self.catalog)
    }

    // Authorize the playback session via CLI prompt and OAuth flow
    // This function requires the `cli` feature enabled.
    async fn player(&self) -> Result<&AuthCodeSpotify> {
        if !self.player_ready.get() {
            debug!("Starting Spotify authorization ...");
            let url = self.player.get_authorize_url(false)?;
            self.player.prompt_for_token(&url).await?;
            let user = self.player.me().await?;
            debug!("Authenticated as user: {:?}", user.display_name);
            self.player_ready.set(true);
        }
        Ok(&self.player)
    }

    async fn search_raw(
        &self,
        query: &str,
        kind: SearchType,
        limit: u32,
    ) -> Result<SearchResult> {
        debug!("Searching {kind:?} for {query:?} (limit {limit})");
        let result = self
            .catalog()
            .await?
            .search(query, kind, None, None, Some(limit), None)
            .await?;
        Ok(result)
    }
}

fn unexpected(expected: &str, got: &SearchResult) -> Error {
    Error::UnexpectedResponse(format!("expected {expected} results, got {got:?}"))
}

impl MusicService for SpotifyClient {
    async fn search_tracks(&self, query: &str, limit: u32) -> Result<Vec<Track>> {
        match self.search_raw(query, SearchType::Track, limit).await? {
            SearchResult::Tracks(page) => {
                Ok(page.items.into_iter().filter_map(track_from).collect())
            }
            other => Err(unexpected("track", &other)),
        }
    }

    async fn search_albums(&self, query: &str, limit: u32) -> Result<Vec<Album>> {
        match self.search_raw(query, SearchType::Album, limit).await? {
            SearchResult::Albums(page) => {
                Ok(page.items.into_iter().filter_map(album_from).collect())
            }
            other => Err(unexpected("album", &other)),
        }
    }

    async fn search_playlists(&self, query: &str, limit: u32) -> Result<Vec<Playlist>> {
        match self.search_raw(query, SearchType::Playlist, limit).await? {
            SearchResult::Playlists(page) => {
                Ok(page.items.into_iter().map(Playlist::from).collect())
            }
            other => Err(unexpected("playlist", &other)),
        }
    }

    async fn play(&self, item: &SearchItem) -> Result<()> {
        let player = self.player().await?;
        match item {
            SearchItem::Track(t) => {
                let id = TrackId::from_uri(&t.uri)?;
                player
                    .start_uris_playback([PlayableId::Track(id)], None, None, None)
                    .await?;
            }
            SearchItem::Album(a) => {
                let id = AlbumId::from_uri(&a.uri)?;
                player
                    .start_context_playback(PlayContextId::Album(id), None, None, None)
                    .await?;
            }
            SearchItem::Playlist(p) => {
                let id = PlaylistId::from_uri(&p.uri)?;
                player
                    .start_context_playback(PlayContextId::Playlist(id), None, None, None)
                    .await?;
            }
        }
        info!("Started playback of {}", item.uri());
        Ok(())
    }

    async fn stop(&self) -> Result<()> {
        self.player().await?.pause_playback(None).await?;
        info!("Paused playback");
        Ok(())
    }

    async fn user_profile(&self, user_id: &str) -> Result<Profile> {
        let id = UserId::from_id(user_id)?;
        let user = self.catalog().await?.user(id).await?;
        Ok(Profile::from(user))
    }
}
