//! Fixed choice lists offered by the product form.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub sub_categories: &'static [&'static str],
}

pub const CATEGORIES: &[Category] = &[
    Category {
        id: "football",
        name: "Football",
        sub_categories: &["Shoes", "Football", "Tshirts"],
    },
    Category {
        id: "cricket",
        name: "Cricket",
        sub_categories: &["Bats", "Balls", "Protective Gear"],
    },
    Category {
        id: "badminton",
        name: "Badminton",
        sub_categories: &["Shoes", "Rackets", "Tshirts"],
    },
];

pub const WARRANTY_OPTIONS: &[&str] = &["6 Months", "12 Months", "16 Months"];

pub const WEIGHT_UNITS: &[&str] = &["Kg", "Gm", "Lb"];

/// Material presets. Picking [`MATERIAL_OTHER`] switches to free text.
pub const MATERIAL_OPTIONS: &[&str] = &["Upper : Synthetic", "Insole : Rubber", MATERIAL_OTHER];

pub const MATERIAL_OTHER: &str = "Other";

/// Offer percentages offered for the base price.
pub const BASE_OFFER_PRESETS: &[u8] = &[10, 12, 50];

/// Offer percentages offered per variant row.
pub const VARIANT_OFFER_PRESETS: &[u8] = &[10, 20, 50];

pub const DEFAULT_WEIGHT_UNIT: &str = "Kg";

pub const DEFAULT_STOCK_QUANTITY: i64 = 100;

pub const DEFAULT_SELLER_NAME: &str = "Sagar Sports Club";

pub const DEFAULT_MAX_IMAGES: usize = 10;

pub const TITLE_MAX_CHARS: usize = 150;

#[must_use]
pub fn find_category(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}
