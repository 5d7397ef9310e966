use serde::Serialize;

use crate::models::activity::Activity;
use crate::models::trip::EmployeeCategory;

#[derive(Debug, Clone, Serialize, Default)]
pub struct CostBreakdown {
    pub base_cost: f32,
    pub multiplier_delta: f32,
    pub total_cost: f32,
}

pub struct PricingService;

impl PricingService {
    /// Fixed cost multiplier per employee category (premium costs 50% more)
    pub fn multiplier_for(category: EmployeeCategory) -> f32 {
        match category {
            EmployeeCategory::Standard => 1.0,
            EmployeeCategory::Premium => 1.5,
        }
    }

    /// Cost of a single activity for one person under the given category
    pub fn per_person_cost(activity: &Activity, category: EmployeeCategory) -> f32 {
        activity.base_cost as f32 * Self::multiplier_for(category)
    }

    /// Decompose the total cost of the selected activities so the front-end
    /// can show the category surcharge as its own line when it is non-zero.
    pub fn cost_breakdown(
        activities: &[Activity],
        employee_count: u32,
        category: EmployeeCategory,
    ) -> CostBreakdown {
        let base_cost = activities
            .iter()
            .map(|activity| activity.base_cost as f32)
            .sum::<f32>()
            * employee_count as f32;

        let total_cost = base_cost * Self::multiplier_for(category);

        CostBreakdown {
            base_cost,
            multiplier_delta: total_cost - base_cost,
            total_cost,
        }
    }
}
