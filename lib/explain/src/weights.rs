//! The per-component weight vector used to decompose a match score.
//!
//! Weights are immutable configuration loaded once and passed by value
//! into the contribution calculator; they must match whatever process
//! produced the final match score, so they are validated but never
//! renormalized here.

use matchlens_core::Component;
use serde::{Deserialize, Serialize};

/// Non-negative weight per similarity component.
///
/// Not required to sum to 1. Multiple profiles can coexist (e.g. one per
/// tenant); there is no process-global mutable instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightProfile {
    pub price: f64,
    pub bedroom: f64,
    pub bathroom: f64,
    #[serde(rename = "type")]
    pub property_type: f64,
    pub condition: f64,
    pub year: f64,
    pub size: f64,
    pub location: f64,
}

impl Default for WeightProfile {
    /// The deployment's fixed weight vector.
    fn default() -> Self {
        Self {
            price: 0.30,
            bedroom: 0.18,
            bathroom: 0.10,
            property_type: 0.12,
            condition: 0.08,
            year: 0.07,
            size: 0.07,
            location: 0.08,
        }
    }
}

impl WeightProfile {
    pub fn get(&self, component: Component) -> f64 {
        match component {
            Component::Price => self.price,
            Component::Bedroom => self.bedroom,
            Component::Bathroom => self.bathroom,
            Component::PropertyType => self.property_type,
            Component::Condition => self.condition,
            Component::Year => self.year,
            Component::Size => self.size,
            Component::Location => self.location,
        }
    }

    pub fn sum(&self) -> f64 {
        Component::ALL.iter().map(|&c| self.get(c)).sum()
    }

    /// Reject negative weights. Weights are deliberately not normalized:
    /// contributions are a diagnostic decomposition of an externally
    /// produced score.
    pub fn validate(&self) -> Result<(), WeightError> {
        for component in Component::ALL {
            if self.get(component) < 0.0 {
                return Err(WeightError::NegativeWeight(component));
            }
        }
        Ok(())
    }

    /// Copy of this profile with one component's weight replaced.
    pub fn with_weight(mut self, component: Component, weight: f64) -> Self {
        match component {
            Component::Price => self.price = weight,
            Component::Bedroom => self.bedroom = weight,
            Component::Bathroom => self.bathroom = weight,
            Component::PropertyType => self.property_type = weight,
            Component::Condition => self.condition = weight,
            Component::Year => self.year = weight,
            Component::Size => self.size = weight,
            Component::Location => self.location = weight,
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WeightError {
    #[error("Component '{0}' has negative weight")]
    NegativeWeight(Component),
}
