use serde::Serialize;

use crate::models::activity::Activity;
use crate::models::trip::{EmployeeCategory, TripConfig};
use crate::services::pricing_service::{CostBreakdown, PricingService};

#[derive(Debug, Clone, PartialEq)]
pub enum TripError {
    DuplicateActivity(String),
    DurationExceeded {
        activity: String,
        projected_hours: f32,
        cap_hours: f32,
    },
    UnknownCategory(String),
}

impl std::fmt::Display for TripError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TripError::DuplicateActivity(_) => write!(f, "Activity already added!"),
            TripError::DurationExceeded {
                activity,
                projected_hours,
                cap_hours,
            } => write!(
                f,
                "Adding {} would bring the trip to {} hours, over the {} hour limit",
                activity, projected_hours, cap_hours
            ),
            TripError::UnknownCategory(label) => {
                write!(f, "Unknown employee category: {}", label)
            }
        }
    }
}

impl std::error::Error for TripError {}

/// One line of the selected-activities panel, priced for the current category.
#[derive(Debug, Serialize, Clone)]
pub struct SelectedActivity {
    pub name: String,
    pub duration_hours: f32,
    pub base_cost: u32,
    pub per_person_cost: f32,
}

#[derive(Debug, Serialize, Clone)]
pub struct TripSummary {
    pub total_time_hours: f32,
    pub total_cost: f32,
    pub cost_breakdown: CostBreakdown,
    pub over_capacity: bool,
    pub activities: Vec<SelectedActivity>,
}

/// In-memory trip selection and its configuration. Totals are derived from
/// the selection on every read, so they can never drift from it.
#[derive(Debug, Default)]
pub struct TripPlanner {
    selected: Vec<Activity>,
    config: TripConfig,
}

impl TripPlanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> &TripConfig {
        &self.config
    }

    pub fn total_time_hours(&self) -> f32 {
        self.selected
            .iter()
            .map(|activity| activity.duration_hours)
            .sum()
    }

    /// True once the selection no longer fits the chosen duration.
    /// A cap of 0 means no duration was picked, so nothing is over.
    pub fn is_over_capacity(&self) -> bool {
        self.config.duration_cap_hours > 0.0
            && self.total_time_hours() > self.config.duration_cap_hours
    }

    pub fn summary(&self) -> TripSummary {
        let breakdown = PricingService::cost_breakdown(
            &self.selected,
            self.config.employee_count,
            self.config.employee_category,
        );

        TripSummary {
            total_time_hours: self.total_time_hours(),
            total_cost: breakdown.total_cost,
            over_capacity: self.is_over_capacity(),
            activities: self
                .selected
                .iter()
                .map(|activity| SelectedActivity {
                    name: activity.name.clone(),
                    duration_hours: activity.duration_hours,
                    base_cost: activity.base_cost,
                    per_person_cost: PricingService::per_person_cost(
                        activity,
                        self.config.employee_category,
                    ),
                })
                .collect(),
            cost_breakdown: breakdown,
        }
    }

    /// Add an activity to the selection. Rejected without touching state when
    /// the name is already selected or the duration cap would be exceeded.
    pub fn add_activity(&mut self, activity: Activity) -> Result<TripSummary, TripError> {
        if self
            .selected
            .iter()
            .any(|selected| selected.name == activity.name)
        {
            return Err(TripError::DuplicateActivity(activity.name));
        }

        let cap_hours = self.config.duration_cap_hours;
        let projected_hours = self.total_time_hours() + activity.duration_hours;
        if cap_hours > 0.0 && projected_hours > cap_hours {
            return Err(TripError::DurationExceeded {
                activity: activity.name,
                projected_hours,
                cap_hours,
            });
        }

        self.selected.push(activity);
        Ok(self.summary())
    }

    /// Remove an activity by name. Removing a name that was never selected is
    /// a no-op, not an error; the removed activity is returned so the caller
    /// can tell the user what happened.
    pub fn remove_activity(&mut self, name: &str) -> (Option<Activity>, TripSummary) {
        let removed = self
            .selected
            .iter()
            .position(|activity| activity.name == name)
            .map(|index| self.selected.remove(index));

        (removed, self.summary())
    }

    /// Update the headcount. Input is coerced, never rejected: anything below
    /// one person becomes one person.
    pub fn set_employee_count(&mut self, count: i64) -> TripSummary {
        self.config.employee_count = count.clamp(1, u32::MAX as i64) as u32;
        self.summary()
    }

    pub fn set_employee_category(&mut self, label: &str) -> Result<TripSummary, TripError> {
        match EmployeeCategory::from_label(label) {
            Some(category) => {
                self.config.employee_category = category;
                Ok(self.summary())
            }
            None => Err(TripError::UnknownCategory(label.to_string())),
        }
    }

    /// Change the duration cap for subsequent adds. Already-selected
    /// activities are never dropped; the caller reads `over_capacity` off the
    /// returned summary to decide whether to warn the user.
    pub fn set_duration_cap(&mut self, hours: f32) -> TripSummary {
        self.config.duration_cap_hours = hours.max(0.0);
        self.summary()
    }
}
