use serde::Deserialize;
use std::collections::HashMap;

/// One entry of the `/rooms` export. Names are keyed by locale.
#[derive(Deserialize, Debug, Clone)]
pub struct RoomDto {
    pub id: i64,
    pub name: HashMap<String, String>,
    #[serde(default)]
    pub position: Option<i64>,
}
