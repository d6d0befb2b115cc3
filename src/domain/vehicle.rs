//! Vehicle listing entity and related types.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// Vehicle availability states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    Available,
    Unavailable,
    Maintenance,
}

impl VehicleStatus {
    pub const ALL: [VehicleStatus; 3] = [
        VehicleStatus::Available,
        VehicleStatus::Unavailable,
        VehicleStatus::Maintenance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "available",
            VehicleStatus::Unavailable => "unavailable",
            VehicleStatus::Maintenance => "maintenance",
        }
    }

    /// Whether the listing can currently be booked
    pub fn is_bookable(&self) -> bool {
        matches!(self, VehicleStatus::Available)
    }
}

impl Default for VehicleStatus {
    fn default() -> Self {
        VehicleStatus::Available
    }
}

impl std::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vehicle rental listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub created_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<DateTime<Utc>>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transmission: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seats: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub price_per_day: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_hour: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub status: VehicleStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
}

impl Vehicle {
    /// First listing image, used as the card thumbnail
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    pub fn is_bookable(&self) -> bool {
        self.status.is_bookable()
    }
}

/// Payload for creating a catalog listing
#[derive(Debug, Clone, Serialize)]
pub struct NewVehicle {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    pub year: i32,
    pub category: String,
    pub fuel_type: String,
    pub transmission: String,
    pub seats: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub price_per_day: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_hour: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub features: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub status: VehicleStatus,
    pub images: Vec<String>,
}

impl Default for NewVehicle {
    /// Mirrors the blank listing form: Sedan, Petrol, Automatic, 5 seats,
    /// available, current year.
    fn default() -> Self {
        Self {
            name: String::new(),
            brand: None,
            model: None,
            year: Utc::now().year(),
            category: "Sedan".to_string(),
            fuel_type: "Petrol".to_string(),
            transmission: "Automatic".to_string(),
            seats: 5,
            color: None,
            price_per_day: 0.0,
            price_per_hour: None,
            description: None,
            features: Vec::new(),
            location: None,
            status: VehicleStatus::Available,
            images: Vec::new(),
        }
    }
}
