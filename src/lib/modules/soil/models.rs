use serde_derive::{Deserialize, Serialize};

use super::functions::suggestion_index;

/// Typical infiltration rate of a soil profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoilRate {
    pub key: String,
    pub label: String,
    pub in_per_day: f64, // infiltration rate [in/day]
}

/// Ordered table of soil profiles, used to prefill the infiltration rate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SoilTable {
    pub data: Vec<SoilRate>,
}

impl SoilTable {
    pub fn new(data: Vec<SoilRate>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&SoilRate> {
        self.data
            .iter()
            .find(|soil| soil.key.eq_ignore_ascii_case(key))
    }

    /// Advisory soil for a location picked on the map.
    /// The value is only a suggestion for the infiltration rate.
    pub fn suggest(&self, lat: f64, lon: f64) -> Option<&SoilRate> {
        if self.data.is_empty() {
            return None;
        }
        let idx = suggestion_index(lat, lon).min(self.data.len() - 1);
        self.data.get(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn soil(key: &str, in_per_day: f64) -> SoilRate {
        SoilRate {
            key: key.into(),
            label: key.to_uppercase(),
            in_per_day,
        }
    }

    fn table() -> SoilTable {
        SoilTable::new(vec![
            soil("sand", 6.0),
            soil("loamy_sand", 3.0),
            soil("loam", 1.0),
            soil("clay", 0.2),
        ])
    }

    #[test]
    fn get_is_case_insensitive() {
        let table = table();
        assert_eq!(table.get("LOAM").map(|s| s.in_per_day), Some(1.0));
        assert!(table.get("peat").is_none());
    }

    #[test]
    fn suggest_follows_latitude_bands() {
        let table = table();
        assert_eq!(table.suggest(38.5, -121.0).map(|s| s.key.as_str()), Some("sand"));
        assert_eq!(table.suggest(36.0, -119.5).map(|s| s.key.as_str()), Some("loamy_sand"));
        assert_eq!(table.suggest(35.0, -119.0).map(|s| s.key.as_str()), Some("clay"));
        assert_eq!(table.suggest(33.0, -117.0).map(|s| s.key.as_str()), Some("clay"));
    }

    #[test]
    fn suggest_on_short_tables() {
        let short = SoilTable::new(vec![soil("sand", 6.0), soil("loam", 1.0)]);
        assert_eq!(short.suggest(34.0, -118.0).map(|s| s.key.as_str()), Some("loam"));
        assert!(SoilTable::default().suggest(38.0, -120.0).is_none());
    }
}
