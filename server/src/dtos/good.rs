//! Good (product) DTOs
//!
//! Prices travel as whole integer units; the NUMERIC column behind them is
//! converted with `entities::units_from_decimal`.

use crate::entities::{Good, units_from_decimal};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GoodDTO {
    pub id: i32,
    pub article: String,
    pub price: i64,
    pub name: String,
    pub quantity: i32,
    pub is_alive: bool,
}

impl From<Good> for GoodDTO {
    fn from(value: Good) -> Self {
        Self {
            id: value.id,
            article: value.article,
            price: units_from_decimal(value.price),
            name: value.name,
            quantity: value.quantity,
            is_alive: value.is_alive,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct CreateGoodDTO {
    pub article: String,
    pub price: i64,
    pub name: String,
    pub quantity: i32,
}

/// Goods are the one entity updated through `PUT /` with the id in the body
#[derive(Deserialize, Debug, Clone)]
pub struct UpdateGoodDTO {
    pub id: i32,
    pub article: String,
    pub price: i64,
    pub name: String,
    pub quantity: i32,
    pub is_alive: bool,
}
