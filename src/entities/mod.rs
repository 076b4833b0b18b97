//! Entity module - Contains the SeaORM entity definitions for the database.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod translation;

pub use translation::{
    Column as TranslationColumn, Entity as Translation, Model as TranslationModel,
};
