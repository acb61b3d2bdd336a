use serde::{Deserialize, Serialize};

use crate::model::money::Money;
use crate::model::record::RecordId;

/// Catalog item as listed by the admin product endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    #[serde(rename = "ID")]
    pub id: RecordId,
    #[serde(rename = "TENTS")]
    pub name: String,
    #[serde(rename = "MADM")]
    pub category: RecordId,
    #[serde(rename = "GIANIEMYET")]
    pub list_price: Money,
    #[serde(rename = "SLTK", default)]
    pub stock: i64,
    #[serde(rename = "IMAGEURL", default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Category {
    #[serde(rename = "ID")]
    pub id: RecordId,
    /// Code products refer to; older rows only carry `ID`.
    #[serde(rename = "MADM", default)]
    pub code: Option<RecordId>,
    #[serde(rename = "TENDM")]
    pub name: String,
}

impl Category {
    /// True if `code` (a product's `MADM`) refers to this category.
    pub fn is_referenced_by(&self, code: &RecordId) -> bool {
        self.code.as_ref().unwrap_or(&self.id).matches(code)
    }
}

/// Body of the category creation call.
#[derive(Debug, Clone, Serialize)]
pub struct NewCategory<'a> {
    #[serde(rename = "TENDM")]
    pub name: &'a str,
}

/// `{ "message": ... }` envelope used by mutating endpoints and error bodies.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageBody {
    #[serde(default)]
    pub message: Option<String>,
}
