use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelType {
    /// Natural gas, billed in therms.
    Gas,

    /// Heating oil, delivered in gallons.
    Oil,

    /// Propane, delivered in gallons.
    Propane,
}

impl FuelType {
    /// Energy content of one billing unit in BTU.
    #[must_use]
    pub const fn energy_content(self) -> f64 {
        match self {
            Self::Gas => 100_000.0,
            Self::Oil => 139_600.0,
            Self::Propane => 91_333.0,
        }
    }

    /// Fuel-dependent factor of the DHW boiler usage.
    ///
    /// These are placeholder numbers with no physical derivation, pending a real boiler model.
    #[must_use]
    pub const fn boiler_usage_multiplier(self) -> f64 {
        match self {
            Self::Gas | Self::Oil => 1.0,
            Self::Propane => 2.0,
        }
    }

    /// Whether the summer usage of this fuel is entirely non-heating.
    #[must_use]
    pub const fn is_metered(self) -> bool {
        matches!(self, Self::Gas)
    }
}
