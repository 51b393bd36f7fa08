use clap::Parser;
use std::path::PathBuf;

use crate::tags::SongTags;

#[derive(Parser)]
#[command(
    name = "nametag",
    about = "Tag audio files from the metadata already sitting in their filenames",
    version
)]
pub struct Cli {
    /// Filename pattern: literal text plus %(tag) placeholders, e.g. "%(track). %(title) - %(artist)"
    pub pattern: String,

    /// Files whose names are matched against the pattern
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Default title for files whose pattern has no %(title)
    #[arg(long, value_name = "TITLE")]
    pub title: Option<String>,

    /// Default album
    #[arg(long, value_name = "ALBUM")]
    pub album: Option<String>,

    /// Default artist
    #[arg(long, value_name = "ARTIST")]
    pub artist: Option<String>,

    /// Default track number
    #[arg(long, value_name = "TRACK")]
    pub track: Option<String>,

    /// Front-cover image (jpeg or png) embedded into every file
    #[arg(long, value_name = "FILE")]
    pub cover: Option<PathBuf>,

    /// Report what would be written without touching any file
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Print the written fields for every file
    #[arg(short, long)]
    pub verbose: bool,

    /// Process files one at a time instead of in parallel
    #[arg(short, long)]
    pub sequential: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Fallback values for tags the pattern does not supply.
    pub fn default_tags(&self) -> SongTags {
        SongTags {
            title: self.title.clone(),
            album: self.album.clone(),
            artist: self.artist.clone(),
            track: self.track.clone(),
        }
    }
}
