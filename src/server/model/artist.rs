//! Artist domain model and write parameters.

use serde_json::Value;
use std::sync::LazyLock;

use crate::{
    model::artist::ArtistDto,
    server::validation::{
        constraint::{IsString, MinLength},
        Field, Schema, ValidationErrors,
    },
};

static ARTIST_SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new()
        .field(
            Field::required("nome", "Nome é obrigatório")
                .rule(IsString::new("Nome deve ser um texto"))
                .rule(MinLength::new(3, "Nome deve ter pelo menos 3 caracteres")),
        )
        .field(
            Field::required("genero", "Gênero é obrigatório")
                .rule(IsString::new("Gênero deve ser um texto"))
                .rule(MinLength::new(3, "Gênero deve ter pelo menos 3 caracteres")),
        )
});

#[derive(Debug, Clone, PartialEq)]
pub struct Artist {
    pub id: i32,
    pub name: String,
    pub genre: String,
}

impl Artist {
    /// Converts an entity model into the domain model at the repository boundary.
    pub fn from_entity(entity: entity::artist::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            genre: entity.genre,
        }
    }

    pub fn into_dto(self) -> ArtistDto {
        ArtistDto {
            id: self.id,
            name: self.name,
            genre: self.genre,
        }
    }
}

/// Validated field set used both to create and to fully replace an artist.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistParams {
    pub name: String,
    pub genre: String,
}

impl ArtistParams {
    /// Validates a raw request body.
    ///
    /// # Returns
    /// - `Ok(ArtistParams)` - `nome` and `genero` are strings of at least 3 characters
    /// - `Err(ValidationErrors)` - One message per violated rule
    pub fn from_payload(payload: &Value) -> Result<Self, ValidationErrors> {
        let fields = ARTIST_SCHEMA.validate(payload)?;

        Ok(Self {
            name: fields.string("nome")?,
            genre: fields.string("genero")?,
        })
    }
}
