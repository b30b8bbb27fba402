pub mod config_dto;
pub mod room_dto;
pub mod talk_dto;

use serde::Deserialize;

/// Every export endpoint wraps its payload in a `results` array.
#[derive(Deserialize, Debug, Clone)]
pub struct ResultsDto<T> {
    pub results: Vec<T>,
}
