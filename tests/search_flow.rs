mod common;

use common::{Call, FakeService, playlist, run_cli};
use rspotty::cli::Outcome;
use rspotty::clients::{entities::SearchKind, errors::Error};

#[tokio::test]
async fn selecting_from_results_plays_and_stops_on_exit() {
    let service = FakeService::with_tracks(3);
    let run = run_cli(&service, &["-q", "song", "-r"], "2\n\n0\n").await;

    assert_eq!(run.outcome.unwrap(), Outcome::Done);
    assert_eq!(
        service.calls(),
        vec![
            Call::Search(SearchKind::Track, "song".into(), 5),
            Call::Play("spotify:track:track2".into()),
            Call::Stop,
        ]
    );
    assert!(run.out.contains("Now playing: Song 2"));
    // results are listed again after leaving the player prompt
    assert_eq!(run.out.matches("2. Song 2 - Artist 2").count(), 2);
}

#[tokio::test]
async fn keep_playing_leaves_playback_running() {
    let service = FakeService::with_tracks(3);
    let run = run_cli(&service, &["-q", "song", "-r", "-k"], "1\nq\n").await;

    assert_eq!(run.outcome.unwrap(), Outcome::Done);
    assert_eq!(service.plays(), vec!["spotify:track:track1".to_string()]);
    assert_eq!(service.stops(), 0);
}

#[tokio::test]
async fn invalid_selections_reprompt() {
    let service = FakeService::with_tracks(3);
    let run = run_cli(&service, &["-q", "song", "-r"], "9\nabc\n0\n").await;

    assert_eq!(run.outcome.unwrap(), Outcome::Done);
    assert!(run.out.contains("Invalid selection '9'"));
    assert!(run.out.contains("Invalid selection 'abc'"));
    assert!(service.plays().is_empty());
    assert_eq!(service.stops(), 0);
}

#[tokio::test]
async fn auto_play_with_menu_plays_first_then_offers_selection() {
    let service = FakeService::with_tracks(3);
    let run = run_cli(&service, &["-q", "song", "-r", "-p"], "0\n").await;

    assert_eq!(run.outcome.unwrap(), Outcome::Done);
    assert_eq!(service.plays(), vec!["spotify:track:track1".to_string()]);
    assert!(run.out.contains("Select a number to play (1-3, 0 to exit)"));
    assert_eq!(service.stops(), 1);
}

#[tokio::test]
async fn stopping_from_player_prompt_is_not_repeated_on_exit() {
    let service = FakeService::with_tracks(2);
    let run = run_cli(&service, &["-q", "song", "-r"], "1\ns\n0\n").await;

    assert_eq!(run.outcome.unwrap(), Outcome::Done);
    assert_eq!(service.stops(), 1);
    assert_eq!(
        service.calls().last(),
        Some(&Call::Stop),
        "stop happens from the player prompt only"
    );
}

#[tokio::test]
async fn end_of_input_leaves_the_results_menu() {
    let service = FakeService::with_tracks(2);
    let run = run_cli(&service, &["-q", "song", "-r"], "").await;

    assert_eq!(run.outcome.unwrap(), Outcome::Done);
    assert!(service.plays().is_empty());
    assert_eq!(service.stops(), 0);
}

#[tokio::test]
async fn playlists_are_played_as_a_context() {
    let service = FakeService {
        playlists: vec![playlist(1), playlist(2)],
        ..Default::default()
    };
    let run = run_cli(&service, &["-t", "playlist", "-q", "mix", "-r"], "2\nq\n").await;

    assert_eq!(run.outcome.unwrap(), Outcome::Done);
    assert!(run.out.contains("2. Mix 2 - by spotify (20 tracks)"));
    assert_eq!(
        service.plays(),
        vec!["spotify:playlist:playlist2".to_string()]
    );
    assert_eq!(service.stops(), 1);
}

#[tokio::test]
async fn playback_errors_abort_the_results_menu() {
    let service = FakeService {
        fail_play: true,
        ..FakeService::with_tracks(2)
    };
    let run = run_cli(&service, &["-q", "song", "-r"], "1\n0\n").await;

    assert!(matches!(run.outcome, Err(Error::UnexpectedResponse(_))));
    assert_eq!(service.stops(), 0);
}

#[tokio::test]
async fn player_prompt_rejects_words_that_only_start_with_a_key() {
    let service = FakeService::with_tracks(2);
    let run = run_cli(&service, &["-q", "song", "-r", "-k"], "1\nskip\nquiet\nb\n0\n").await;

    assert_eq!(run.outcome.unwrap(), Outcome::Done);
    assert!(run.out.contains("Unknown option 'skip'"));
    assert!(run.out.contains("Unknown option 'quiet'"));
    assert_eq!(service.stops(), 0);
    assert_eq!(service.plays(), vec!["spotify:track:track1".to_string()]);
}

#[tokio::test]
async fn player_prompt_keys_are_case_insensitive() {
    let service = FakeService::with_tracks(2);
    let run = run_cli(&service, &["-q", "song", "-r"], "1\nS\n0\n").await;

    assert_eq!(run.outcome.unwrap(), Outcome::Done);
    assert_eq!(service.stops(), 1);
}
