use serde::Deserialize;

fn default_max_length() -> i64 {
    240
}

fn default_url_prefix() -> String {
    "https://pretalx.com/".to_string()
}

/// Optional configuration file supplied next to the exports.
#[derive(Deserialize, Debug, Clone)]
pub struct ConfigDto {
    /// Boundary gaps longer than this many minutes produce no slot.
    #[serde(default = "default_max_length")]
    pub max_length: i64,

    /// Display names of rooms with video recording.
    #[serde(default)]
    pub video_rooms: Vec<String>,

    #[serde(default)]
    pub breaks: Vec<BreakDto>,

    #[serde(default)]
    pub extra_sessions: Vec<ExtraSessionDto>,

    #[serde(default)]
    pub meta_sessions: Vec<MetaSessionDto>,

    /// Prefix applied to relative resource URLs.
    #[serde(default = "default_url_prefix")]
    pub pretalx_url_prefix: String,
}

impl Default for ConfigDto {
    fn default() -> Self {
        ConfigDto {
            max_length: default_max_length(),
            video_rooms: Vec::new(),
            breaks: Vec::new(),
            extra_sessions: Vec::new(),
            meta_sessions: Vec::new(),
            pretalx_url_prefix: default_url_prefix(),
        }
    }
}

/// A recurring non-talk block, replicated across every room of its day.
#[derive(Deserialize, Debug, Clone)]
pub struct BreakDto {
    pub name: String,
    pub start: String,
    pub end: String,
}

/// A manually configured session outside the talk export, e.g. a social event.
#[derive(Deserialize, Debug, Clone)]
pub struct ExtraSessionDto {
    pub name: String,
    /// Room id from the room listing.
    pub room: i64,
    pub start: String,
    pub end: String,
}

/// A container interval whose short talks are rendered as one cell.
#[derive(Deserialize, Debug, Clone)]
pub struct MetaSessionDto {
    pub name: String,
    /// Room id from the room listing.
    pub room: i64,
    pub start: String,
    pub end: String,
}
