//! Frontend Models
//!
//! Product records matching the backend contract.

use serde::{Deserialize, Serialize};

/// Persisted product (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub codigo: u32,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    pub precio_compra: f64,
    pub precio_venta: f64,
    pub stock: u32,
}

/// Create payload; the backend assigns the id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemInput {
    pub codigo: u32,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub precio_compra: f64,
    pub precio_venta: f64,
    pub stock: u32,
}
