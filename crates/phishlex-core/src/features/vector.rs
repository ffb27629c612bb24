//! Fixed-order feature vector.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::schema::{Feature, FEATURE_COUNT};
use crate::model::ModelError;

/// One value per schema feature, in schema order. Values are 0 or 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeatureVector {
    values: [u8; FEATURE_COUNT],
}

impl FeatureVector {
    /// Builds a vector from a rule evaluation. Reserved features are forced
    /// to 0 whatever `value_of` returns.
    pub(crate) fn from_fn(mut value_of: impl FnMut(Feature) -> bool) -> Self {
        let mut values = [0u8; FEATURE_COUNT];
        for feature in Feature::ALL {
            if !feature.is_reserved() && value_of(feature) {
                values[feature.index()] = 1;
            }
        }
        Self { values }
    }

    pub fn get(&self, feature: Feature) -> u8 {
        self.values[feature.index()]
    }

    /// Value for a column name, if the name is in the schema.
    pub fn get_by_name(&self, name: &str) -> Option<u8> {
        Feature::from_name(name).map(|f| self.get(f))
    }

    pub fn len(&self) -> usize {
        FEATURE_COUNT
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// `(name, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u8)> + '_ {
        Feature::ALL.into_iter().map(|f| (f.name(), self.get(f)))
    }

    /// Number of features set to 1.
    pub fn active_count(&self) -> usize {
        self.values.iter().filter(|&&v| v == 1).count()
    }

    /// Numeric row for a classifier.
    ///
    /// With `order` the row follows the model's recorded column names, which
    /// may be a subset of the schema; otherwise schema order is used.
    pub fn to_row(&self, order: Option<&[String]>) -> Result<Vec<f64>, ModelError> {
        match order {
            None => Ok(self.values.iter().map(|&v| f64::from(v)).collect()),
            Some(names) => names
                .iter()
                .map(|name| {
                    self.get_by_name(name)
                        .map(f64::from)
                        .ok_or_else(|| ModelError::UnknownFeature(name.clone()))
                })
                .collect(),
        }
    }
}

impl Serialize for FeatureVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FEATURE_COUNT))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, &value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FeatureVector {
        FeatureVector::from_fn(|f| matches!(f, Feature::Https | Feature::UrlCorto | Feature::Icono))
    }

    #[test]
    fn reserved_forced_to_zero() {
        let v = sample();
        assert_eq!(v.get(Feature::Https), 1);
        assert_eq!(v.get(Feature::UrlCorto), 1);
        assert_eq!(v.get(Feature::Icono), 0);
        assert_eq!(v.active_count(), 2);
    }

    #[test]
    fn serializes_in_schema_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        let uso = json.find("\"UsoIP\"").unwrap();
        let https = json.find("\"HTTPS\"").unwrap();
        let last = json.find("\"ReporteEstadisticas\"").unwrap();
        assert!(uso < https && https < last);
        assert!(json.contains("\"HTTPS\":1"));
    }

    #[test]
    fn row_in_schema_order() {
        let row = sample().to_row(None).unwrap();
        assert_eq!(row.len(), FEATURE_COUNT);
        assert_eq!(row[Feature::UrlCorto.index()], 1.0);
        assert_eq!(row[Feature::UsoIp.index()], 0.0);
    }

    #[test]
    fn row_follows_recorded_order() {
        let order = vec!["HTTPS".to_string(), "UsoIP".to_string(), "URLCorto".to_string()];
        assert_eq!(sample().to_row(Some(&order)).unwrap(), vec![1.0, 0.0, 1.0]);
    }

    #[test]
    fn row_rejects_unknown_column() {
        let order = vec!["HTTPS".to_string(), "PageRank".to_string()];
        match sample().to_row(Some(&order)) {
            Err(ModelError::UnknownFeature(name)) => assert_eq!(name, "PageRank"),
            other => panic!("expected UnknownFeature, got {other:?}"),
        }
    }
}
