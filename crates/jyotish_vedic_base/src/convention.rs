//! The set of choices every chart depends on.
//!
//! Changing any field changes every downstream sign, house and dasha, so
//! each chart carries the convention it was built with. Charts built under
//! different conventions must not be compared.

use jyotish_ephemeris::NodeMode;
use serde::{Deserialize, Serialize};

use crate::ayanamsha::AyanamshaSystem;
use crate::bhava::HouseSystem;
use crate::sidereal::SiderealConverter;

/// Version of the built-in convention and of the chart layout.
pub const CONVENTION_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChartConvention {
    pub version: u32,
    pub ayanamsha: AyanamshaSystem,
    pub house_system: HouseSystem,
    pub node_mode: NodeMode,
}

impl ChartConvention {
    /// Lahiri mean ayanamsha, whole-sign houses, mean nodes.
    pub const PINNED: ChartConvention = ChartConvention {
        version: CONVENTION_VERSION,
        ayanamsha: AyanamshaSystem::Lahiri,
        house_system: HouseSystem::WholeSign,
        node_mode: NodeMode::Mean,
    };

    pub fn converter(&self) -> SiderealConverter {
        SiderealConverter::new(self.ayanamsha)
    }

    /// Short tag such as `v1/lahiri/whole-sign/mean`.
    pub fn tag(&self) -> String {
        format!(
            "v{}/{}/{}/{}",
            self.version,
            self.ayanamsha.name().to_ascii_lowercase(),
            self.house_system.name(),
            self.node_mode.name()
        )
    }
}

impl Default for ChartConvention {
    fn default() -> Self {
        Self::PINNED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_tag() {
        assert_eq!(ChartConvention::default().tag(), "v1/lahiri/whole-sign/mean");
    }

    #[test]
    fn serde_shape() {
        let json = serde_json::to_string(&ChartConvention::PINNED).unwrap();
        assert_eq!(
            json,
            r#"{"version":1,"ayanamsha":"lahiri","house_system":"whole_sign","node_mode":"mean"}"#
        );
    }
}
