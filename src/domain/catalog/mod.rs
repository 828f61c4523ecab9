//! Static materials catalog
//!
//! Read-only reference price list used to seed part line items. Not
//! persisted and not mutable at runtime.

use std::sync::OnceLock;

use crate::domain::job::Part;

/// A priced material item
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    pub name: String,
    pub default_cost: f64,
    pub unit: String,
}

impl CatalogItem {
    /// Seed a draft part from this item: quantity 1, catalog default cost.
    /// Both remain user-editable before the part is committed to a job.
    pub fn draft_part(&self) -> Part {
        Part::new(self.name.clone(), 1, self.default_cost)
    }
}

/// A named group of catalog items
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogCategory {
    pub id: String,
    pub name: String,
    pub items: Vec<CatalogItem>,
}

fn item(name: &str, default_cost: f64, unit: &str) -> CatalogItem {
    CatalogItem {
        name: name.to_string(),
        default_cost,
        unit: unit.to_string(),
    }
}

fn category(id: &str, name: &str, items: Vec<CatalogItem>) -> CatalogCategory {
    CatalogCategory {
        id: id.to_string(),
        name: name.to_string(),
        items,
    }
}

/// The full electrical materials catalog
pub fn electrical_catalog() -> &'static [CatalogCategory] {
    static CATALOG: OnceLock<Vec<CatalogCategory>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        vec![
            category(
                "wiring",
                "Wiring & Cable",
                vec![
                    item("14/2 NM-B Wire (250ft)", 115.00, "roll"),
                    item("12/2 NM-B Wire (250ft)", 145.00, "roll"),
                    item("10/2 NM-B Wire (50ft)", 65.00, "roll"),
                    item("12AWG THHN Solid (Black)", 0.45, "ft"),
                    item("10AWG THHN Solid (Green)", 0.65, "ft"),
                    item("Cat6 Ethernet (1000ft)", 220.00, "roll"),
                ],
            ),
            category(
                "devices",
                "Devices & Switches",
                vec![
                    item("15A Duplex Outlet (White)", 1.25, "ea"),
                    item("20A GFCI Outlet (Tamper Resistant)", 18.50, "ea"),
                    item("Single Pole Switch (Decora)", 2.75, "ea"),
                    item("3-Way Switch (Decora)", 4.50, "ea"),
                    item("Dimmer Switch (LED Compatible)", 24.00, "ea"),
                    item("USB-A/C Combo Outlet", 22.00, "ea"),
                ],
            ),
            category(
                "breakers",
                "Circuit Protection",
                vec![
                    item("15A Single Pole Breaker (Square D)", 8.50, "ea"),
                    item("20A Single Pole Breaker (Homeline)", 7.25, "ea"),
                    item("50A Double Pole Breaker", 22.00, "ea"),
                    item("15A AFCI Breaker (Plug-on Neutral)", 55.00, "ea"),
                    item("20A GFCI/AFCI Dual Function", 62.00, "ea"),
                ],
            ),
            category(
                "boxes",
                "Boxes & Fittings",
                vec![
                    item("1-Gang Old Work Plastic Box", 2.50, "ea"),
                    item("2-Gang New Work Plastic Box", 1.85, "ea"),
                    item("4\" Octagon Ceiling Box", 3.25, "ea"),
                    item("Wire Nut (Yellow/Red - 100pk)", 12.00, "bag"),
                    item("1/2\" EMT Connector (Set Screw)", 0.85, "ea"),
                    item("Cable Staples (100pk)", 6.50, "box"),
                ],
            ),
            category(
                "lighting",
                "Lighting & Fans",
                vec![
                    item("6\" LED Recessed Downlight", 14.00, "ea"),
                    item("4\" LED Slim Wafer Light", 16.50, "ea"),
                    item("Ceiling Fan Support Box", 18.00, "ea"),
                    item("A19 LED Bulb (60W Equiv)", 2.25, "ea"),
                ],
            ),
        ]
    })
}

/// Filter the catalog by category id and case-insensitive name substring.
/// Categories with no matching items are dropped from the result.
pub fn search(category_id: Option<&str>, query: &str) -> Vec<CatalogCategory> {
    let query = query.to_lowercase();
    electrical_catalog()
        .iter()
        .filter(|cat| category_id.map_or(true, |id| cat.id == id))
        .filter_map(|cat| {
            let items: Vec<CatalogItem> = cat
                .items
                .iter()
                .filter(|item| item.name.to_lowercase().contains(&query))
                .cloned()
                .collect();
            if items.is_empty() {
                None
            } else {
                Some(CatalogCategory {
                    id: cat.id.clone(),
                    name: cat.name.clone(),
                    items,
                })
            }
        })
        .collect()
}

/// Seed a custom, non-catalog part: named, quantity 1, zero default cost
pub fn custom_part(name: impl Into<String>) -> Part {
    Part::new(name, 1, 0.0)
}
