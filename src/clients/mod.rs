/// Application credentials from the environment
pub mod credentials;
/// Data entities for tracks, albums, playlists and profiles
pub mod entities;
/// Error types and result aliases
pub mod errors;
/// The trait flows use to reach the remote service
pub mod service;
/// Spotify API client
pub mod spotify;

pub use credentials::AppCredentials;
pub use service::MusicService;
pub use spotify::SpotifyClient;
