//! An object placed in a level.

use sea_orm::entity::prelude::*;

pub type ObjectModel = Model;

/// An object placed in a level.
///
/// Early versions of the editor allowed saving objects with unset
/// attributes, leaving nulls in the table. The schema has since been
/// normalized so every attribute below is required.
#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "objects_v0")]
pub struct Model {
    /// Unique numeric ID of the object.
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Engine-defined object kind code.
    ///
    /// `0` is the engine's placeholder kind.
    pub object_type: i16,

    /// Engine-defined palette code.
    ///
    /// `0` is the engine's default color.
    pub color: i16,

    /// Serialized world-space coordinates, e.g. `1.5,0,-3.25`.
    ///
    /// The empty string means the object has no recorded placement.
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub position: String,

    /// Serialized dimensions, e.g. `10x10`.
    ///
    /// The empty string means the object has no recorded dimensions.
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub size: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
