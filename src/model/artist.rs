use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ArtistDto {
    pub id: i32,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "genero")]
    pub genre: String,
}

/// Request body for `POST /artistas` and `PUT /artistas/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ArtistRequestDto {
    /// At least 3 characters.
    #[serde(rename = "nome")]
    pub name: String,
    /// At least 3 characters.
    #[serde(rename = "genero")]
    pub genre: String,
}
