use crate::clients::{
    entities::{Album, Playlist, Profile, SearchItem, SearchKind, Track},
    errors::Result,
};

/// Remote calls the dispatcher, search flow and menu rely on.
///
/// [`SpotifyClient`](crate::clients::SpotifyClient) is the production
/// implementation; tests substitute a recording fake.
#[allow(async_fn_in_trait)]
pub trait MusicService {
    /// Search tracks, at most `limit` of them.
    async fn search_tracks(&self, query: &str, limit: u32) -> Result<Vec<Track>>;

    /// Search albums, at most `limit` of them.
    async fn search_albums(&self, query: &str, limit: u32) -> Result<Vec<Album>>;

    /// Search playlists, at most `limit` of them.
    async fn search_playlists(&self, query: &str, limit: u32) -> Result<Vec<Playlist>>;

    /// Start `item` on the user's active device.
    async fn play(&self, item: &SearchItem) -> Result<()>;

    /// Pause whatever the active device is playing.
    async fn stop(&self) -> Result<()>;

    /// Public profile of `user_id`.
    async fn user_profile(&self, user_id: &str) -> Result<Profile>;

    /// Search any kind and wrap the hits as [`SearchItem`]s.
    async fn search(&self, kind: SearchKind, query: &str, limit: u32) -> Result<Vec<SearchItem>> {
        let items = match kind {
            SearchKind::Track => self
                .search_tracks(query, limit)
                .await?
                .into_iter()
                .map(SearchItem::Track)
                .collect(),
            SearchKind::Album => self
                .search_albums(query, limit)
                .await?
                .into_iter()
                .map(SearchItem::Album)
                .collect(),
            SearchKind::Playlist => self
                .search_playlists(query, limit)
                .await?
                .into_iter()
                .map(SearchItem::Playlist)
                .collect(),
        };
        Ok(items)
    }
}
