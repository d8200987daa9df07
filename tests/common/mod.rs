#![allow(dead_code)]

use std::cell::RefCell;

use clap::Parser;
use rspotty::cli::{Cli, Outcome, dispatch};
use rspotty::clients::{
    MusicService,
    entities::{Album, Playlist, Profile, SearchItem, SearchKind, Track},
    errors::{Error, Result},
};
use rspotty::terminal::ScriptedInput;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Search(SearchKind, String, u32),
    Play(String),
    Stop,
    Profile(String),
}

/// Records every call and answers from canned data. Ignores `limit` so tests
/// can check that results are cut down locally.
#[derive(Default)]
pub struct FakeService {
    pub tracks: Vec<Track>,
    pub albums: Vec<Album>,
    pub playlists: Vec<Playlist>,
    pub profile: Option<Profile>,
    pub fail_search: bool,
    pub fail_play: bool,
    pub calls: RefCell<Vec<Call>>,
}

impl FakeService {
    pub fn with_tracks(count: usize) -> Self {
        FakeService {
            tracks: (1..=count).map(track).collect(),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn searches(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::Search(..)))
            .count()
    }

    pub fn plays(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Play(uri) => Some(uri),
                _ => None,
            })
            .collect()
    }

    pub fn stops(&self) -> usize {
        self.calls().iter().filter(|c| **c == Call::Stop).count()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn search_result<T: Clone>(
        &self,
        kind: SearchKind,
        query: &str,
        limit: u32,
        items: &[T],
    ) -> Result<Vec<T>> {
        self.record(Call::Search(kind, query.to_string(), limit));
        if self.fail_search {
            return Err(Error::UnexpectedResponse("search is down".into()));
        }
        Ok(items.to_vec())
    }
}

impl MusicService for FakeService {
    async fn search_tracks(&self, query: &str, limit: u32) -> Result<Vec<Track>> {
        self.search_result(SearchKind::Track, query, limit, &self.tracks)
    }

    async fn search_albums(&self, query: &str, limit: u32) -> Result<Vec<Album>> {
        self.search_result(SearchKind::Album, query, limit, &self.albums)
    }

    async fn search_playlists(&self, query: &str, limit: u32) -> Result<Vec<Playlist>> {
        self.search_result(SearchKind::Playlist, query, limit, &self.playlists)
    }

    async fn play(&self, item: &SearchItem) -> Result<()> {
        self.record(Call::Play(item.uri().to_string()));
        if self.fail_play {
            return Err(Error::UnexpectedResponse("no active device".into()));
        }
        Ok(())
    }

    async fn stop(&self) -> Result<()> {
        self.record(Call::Stop);
        Ok(())
    }

    async fn user_profile(&self, user_id: &str) -> Result<Profile> {
        self.record(Call::Profile(user_id.to_string()));
        self.profile
            .clone()
            .ok_or_else(|| Error::UnexpectedResponse(format!("no such user {user_id}")))
    }
}

pub fn track(n: usize) -> Track {
    Track {
        id: format!("track{n}"),
        name: format!("Song {n}"),
        artists: vec![format!("Artist {n}")],
        album: format!("Album {n}"),
        duration_ms: 180_000 + n as u64 * 1000,
        uri: format!("spotify:track:track{n}"),
        popularity: 50,
        explicit: false,
        url: None,
    }
}

pub fn album(n: usize) -> Album {
    Album {
        id: format!("album{n}"),
        name: format!("Record {n}"),
        artists: vec![format!("Band {n}")],
        release_date: Some("1999-01-01".into()),
        album_type: Some("album".into()),
        uri: format!("spotify:album:album{n}"),
        url: None,
    }
}

pub fn playlist(n: usize) -> Playlist {
    Playlist {
        id: format!("playlist{n}"),
        name: format!("Mix {n}"),
        owner: "spotify".into(),
        track_count: 20,
        collaborative: false,
        uri: format!("spotify:playlist:playlist{n}"),
        url: None,
    }
}

pub struct Run {
    pub outcome: Result<Outcome>,
    pub out: String,
    pub err: String,
}

/// Parse `args` as flags and dispatch them with `input` as the terminal.
pub async fn run_cli(service: &FakeService, args: &[&str], input: &str) -> Run {
    let cli = Cli::try_parse_from(std::iter::once("rspotty").chain(args.iter().copied()))
        .expect("flags should parse");
    let mut input = ScriptedInput(input.as_bytes());
    let mut out = Vec::new();
    let mut err = Vec::new();
    let outcome = dispatch(&cli, service, &mut input, &mut out, &mut err).await;
    Run {
        outcome,
        out: String::from_utf8(out).expect("utf-8 output"),
        err: String::from_utf8(err).expect("utf-8 errors"),
    }
}
