//! Good entity - A product in the catalogue

use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Good {
    pub id: i32,
    pub article: String,
    pub price: Decimal,
    pub name: String,
    pub quantity: i32,
    pub is_alive: bool,
}

#[derive(Debug, Clone)]
pub struct CreateGoodParams {
    pub article: String,
    pub price: Decimal,
    pub name: String,
    pub quantity: i32,
    pub is_alive: bool,
}

#[derive(Debug, Clone)]
pub struct UpdateGoodParams {
    pub id: i32,
    pub article: String,
    pub price: Decimal,
    pub name: String,
    pub quantity: i32,
    pub is_alive: bool,
}
