//! Plain-text rendering of search results and profiles.

use std::io::Write;

use crate::clients::{
    entities::{Profile, SearchItem},
    errors::Result,
};

/// `m:ss`, or `h:mm:ss` past the hour.
pub fn format_duration(duration_ms: u64) -> String {
    let total = duration_ms / 1000;
    let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

fn join_or_unknown(names: &[String]) -> String {
    if names.is_empty() {
        "Unknown artist".to_string()
    } else {
        names.join(", ")
    }
}

/// One numbered line per hit; `position` is 1-based.
pub fn result_line(position: usize, item: &SearchItem) -> String {
    match item {
        SearchItem::Track(t) => format!(
            "{position}. {} - {} ({})",
            t.name,
            join_or_unknown(&t.artists),
            format_duration(t.duration_ms)
        ),
        SearchItem::Album(a) => format!(
            "{position}. {} - {}",
            a.name,
            join_or_unknown(&a.artists)
        ),
        SearchItem::Playlist(p) => format!(
            "{position}. {} - by {} ({} tracks)",
            p.name, p.owner, p.track_count
        ),
    }
}

/// Indented extra lines shown with `-d`.
pub fn detail_lines(item: &SearchItem) -> Vec<String> {
    let mut lines = Vec::new();
    match item {
        SearchItem::Track(t) => {
            lines.push(format!("Album: {}", t.album));
            lines.push(format!("Popularity: {}/100", t.popularity));
            if t.explicit {
                lines.push("Explicit: yes".to_string());
            }
        }
        SearchItem::Album(a) => {
            if let Some(album_type) = &a.album_type {
                lines.push(format!("Type: {album_type}"));
            }
            if let Some(date) = &a.release_date {
                lines.push(format!("Released: {date}"));
            }
        }
        SearchItem::Playlist(p) => {
            lines.push(format!("Tracks: {}", p.track_count));
            if p.collaborative {
                lines.push("Collaborative: yes".to_string());
            }
        }
    }
    lines.push(format!("URI: {}", item.uri()));
    let url = match item {
        SearchItem::Track(t) => t.url.as_deref(),
        SearchItem::Album(a) => a.url.as_deref(),
        SearchItem::Playlist(p) => p.url.as_deref(),
    };
    if let Some(url) = url {
        lines.push(format!("URL: {url}"));
    }
    lines
}

/// Numbered list of `items`, with details when asked.
pub fn write_results<W: Write>(out: &mut W, items: &[SearchItem], details: bool) -> Result<()> {
    for (i, item) in items.iter().enumerate() {
        writeln!(out, "{}", result_line(i + 1, item))?;
        if details {
            for line in detail_lines(item) {
                writeln!(out, "   {line}")?;
            }
        }
    }
    Ok(())
}

/// Public profile fields, one per line.
pub fn write_profile<W: Write>(out: &mut W, profile: &Profile) -> Result<()> {
    writeln!(out, "User ID: {}", profile.id)?;
    writeln!(
        out,
        "Display name: {}",
        profile.display_name.as_deref().unwrap_or("(none)")
    )?;
    if let Some(followers) = profile.followers {
        writeln!(out, "Followers: {followers}")?;
    }
    writeln!(out, "URI: {}", profile.uri)?;
    if let Some(url) = &profile.url {
        writeln!(out, "URL: {url}")?;
    }
    writeln!(out, "Profile images: {}", profile.images)?;
    Ok(())
}
