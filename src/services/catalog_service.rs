use crate::models::activity::Activity;

pub struct CatalogService;

impl CatalogService {
    /// The built-in activity offering. The front-end renders these as the
    /// selectable cards; costs are per person before the category multiplier.
    pub fn activities() -> Vec<Activity> {
        vec![
            Self::entry("River Rafting", 4.0, 1200),
            Self::entry("Paragliding", 2.0, 2500),
            Self::entry("Mountain Trek", 6.0, 900),
            Self::entry("City Heritage Walk", 3.0, 500),
            Self::entry("Museum Tour", 2.0, 600),
            Self::entry("Zip Lining", 1.5, 1000),
            Self::entry("Kayaking", 3.0, 800),
            Self::entry("Overnight Camping", 12.0, 2000),
        ]
    }

    fn entry(name: &str, duration_hours: f32, base_cost: u32) -> Activity {
        Activity {
            name: name.to_string(),
            duration_hours,
            base_cost,
        }
    }
}
