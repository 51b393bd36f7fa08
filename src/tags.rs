use std::fs;
use std::path::Path;

use id3::frame::{Picture, PictureType};
use id3::{Content, Frame, Tag, TagLike, Version};

use crate::error::{Error, Result};
use crate::matcher::Extraction;

/// The fields this tool persists. A pattern may extract other tag names;
/// those take part in matching but are not written anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongTags {
    pub title: Option<String>,
    pub album: Option<String>,
    pub artist: Option<String>,
    pub track: Option<String>,
}

impl SongTags {
    pub fn from_extraction(extraction: &Extraction) -> Self {
        Self {
            title: extraction.get("title").map(str::to_string),
            album: extraction.get("album").map(str::to_string),
            artist: extraction.get("artist").map(str::to_string),
            track: extraction.get("track").map(str::to_string),
        }
    }

    /// Fills every missing field from `defaults`. Extracted values always
    /// win; they are never empty, so presence is the only question.
    pub fn or_defaults(mut self, defaults: &SongTags) -> SongTags {
        self.title = self.title.or_else(|| defaults.title.clone());
        self.album = self.album.or_else(|| defaults.album.clone());
        self.artist = self.artist.or_else(|| defaults.artist.clone());
        self.track = self.track.or_else(|| defaults.track.clone());
        self
    }

    /// Set fields with their names, for reporting.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        [
            ("track", self.track.as_deref()),
            ("title", self.title.as_deref()),
            ("album", self.album.as_deref()),
            ("artist", self.artist.as_deref()),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
    }
}

/// A front-cover image ready to embed.
#[derive(Debug, Clone)]
pub struct Cover {
    pub mime: &'static str,
    pub data: Vec<u8>,
}

pub fn load_cover(path: &Path) -> Result<Cover> {
    let data = fs::read(path).map_err(|source| Error::ReadCover {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Cover {
        mime: cover_mime(path),
        data,
    })
}

/// A file shorter than an ID3 header carries no tag either, but surfaces as
/// an io error instead of `NoTag`.
fn no_existing_tag(e: &id3::Error) -> bool {
    match &e.kind {
        id3::ErrorKind::NoTag => true,
        id3::ErrorKind::Io(io) => io.kind() == std::io::ErrorKind::UnexpectedEof,
        _ => false,
    }
}

fn cover_mime(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("png") => "image/png",
        _ => "image/jpeg",
    }
}

/// Writes `fields` into the file's ID3 container, keeping frames this tool
/// does not manage. A file with no existing tag gets a fresh one.
pub fn write_tags(path: &Path, fields: &SongTags, cover: Option<&Cover>) -> Result<()> {
    let mut tag = match Tag::read_from_path(path) {
        Ok(tag) => tag,
        Err(e) if no_existing_tag(&e) => Tag::new(),
        Err(source) => {
            return Err(Error::ReadTags {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    if let Some(title) = fields.title.as_deref() {
        tag.set_title(title);
    }
    if let Some(album) = fields.album.as_deref() {
        tag.set_album(album);
    }
    if let Some(artist) = fields.artist.as_deref() {
        tag.set_artist(artist);
    }
    if let Some(track) = fields.track.as_deref() {
        // kept as text so "2/12"-style values survive
        tag.add_frame(Frame::text("TRCK", track));
    }
    if let Some(cover) = cover {
        tag.add_frame(Frame::with_content(
            "APIC",
            Content::Picture(Picture {
                mime_type: cover.mime.to_string(),
                picture_type: PictureType::CoverFront,
                description: "Front Cover".to_string(),
                data: cover.data.clone(),
            }),
        ));
    }

    tag.write_to_path(path, Version::Id3v24)
        .map_err(|source| Error::WriteTags {
            path: path.to_path_buf(),
            source,
        })
}
