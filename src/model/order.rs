use serde::Deserialize;
use std::fmt;

use crate::model::money::Money;
use crate::model::record::RecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "i64")]
pub enum OrderStatus {
    Pending,
    Processed,
    Cancelled,
}

impl From<i64> for OrderStatus {
    fn from(code: i64) -> Self {
        match code {
            0 => OrderStatus::Pending,
            1 => OrderStatus::Processed,
            _ => OrderStatus::Cancelled,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processed => "Processed",
            OrderStatus::Cancelled => "Cancelled",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderLine {
    #[serde(rename = "ID_TRANGSUC")]
    pub product_id: RecordId,
    #[serde(rename = "TENTS", default)]
    pub name: String,
    #[serde(rename = "SOLUONG", default)]
    pub quantity: i64,
    #[serde(rename = "GIASP")]
    pub price: Money,
    #[serde(rename = "IMAGEURL", default)]
    pub image_url: Option<String>,
}

/// Invoice from the customer's purchase history.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Order {
    #[serde(rename = "ID_HOADON")]
    pub id: RecordId,
    /// Backend timestamp, `YYYY-MM-DD hh:mm:ss`.
    #[serde(rename = "NGAYLAPHD")]
    pub placed_at: String,
    #[serde(rename = "TRANGTHAI")]
    pub status: OrderStatus,
    #[serde(rename = "TRIGIAHD")]
    pub total: Money,
    #[serde(rename = "TIENPHAITRA")]
    pub paid: Money,
    #[serde(rename = "chi_tiet", default)]
    pub lines: Vec<OrderLine>,
}

impl Order {
    pub fn savings(&self) -> Money {
        self.total - self.paid
    }
}
