//! Serialisable description of a trained model.
//!
//! ```json
//! {"kind": "linear", "variable": "temperature", "unit": "kelvin",
//!  "features": ["lst", "day_of_year_norm"],
//!  "scaler": {"mean": [290.0, 0.5], "scale": [8.0, 0.29]},
//!  "intercept": 288.0, "coefficients": [7.5, -1.2]}
//! ```

use std::sync::Arc;

use nimbus_features::FeatureSchema;
use serde::{Deserialize, Serialize};

use crate::error::RegressError;
use crate::forest::{ForestRegressor, Tree};
use crate::linear::{LinearRegressor, StandardScaler};
use crate::regressor::VariableRegressor;
use crate::variable::{Unit, Variable};

/// A model artefact as written by the training pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelFile {
    Linear {
        variable: Variable,
        unit: Unit,
        features: Vec<String>,
        #[serde(default)]
        scaler: Option<StandardScaler>,
        intercept: f64,
        coefficients: Vec<f64>,
    },
    Forest {
        variable: Variable,
        unit: Unit,
        features: Vec<String>,
        #[serde(default)]
        scaler: Option<StandardScaler>,
        trees: Vec<Tree>,
    },
}

impl ModelFile {
    /// Variable the artefact declares.
    pub fn variable(&self) -> Variable {
        match self {
            ModelFile::Linear { variable, .. } | ModelFile::Forest { variable, .. } => *variable,
        }
    }

    /// Validates the artefact and builds the regressor it describes.
    pub fn into_regressor(self) -> Result<Arc<dyn VariableRegressor>, RegressError> {
        let variable = self.variable();
        let schema_of = |features: Vec<String>| {
            FeatureSchema::new(features).map_err(|e| RegressError::InvalidModel {
                variable,
                reason: e.to_string(),
            })
        };
        match self {
            ModelFile::Linear {
                variable,
                unit,
                features,
                scaler,
                intercept,
                coefficients,
            } => Ok(Arc::new(LinearRegressor::new(
                variable,
                unit,
                schema_of(features)?,
                scaler,
                intercept,
                coefficients,
            )?)),
            ModelFile::Forest {
                variable,
                unit,
                features,
                scaler,
                trees,
            } => Ok(Arc::new(ForestRegressor::new(
                variable,
                unit,
                schema_of(features)?,
                scaler,
                trees,
            )?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nimbus_features::FeatureVector;

    #[test]
    fn linear_from_json() {
        let json = r#"{
            "kind": "linear",
            "variable": "temperature",
            "unit": "kelvin",
            "features": ["lst"],
            "intercept": 273.15,
            "coefficients": [1.0]
        }"#;
        let file: ModelFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.variable(), Variable::Temperature);
        let model = file.into_regressor().unwrap();
        let v: FeatureVector = [("lst", 20.0)].into_iter().collect();
        let p = model.predict(&v).unwrap();
        assert_eq!(p.unit(), Unit::Kelvin);
        assert!((p.value() - 293.15).abs() < 1e-9);
    }

    #[test]
    fn forest_from_json() {
        let json = r#"{
            "kind": "forest",
            "variable": "precipitation",
            "unit": "millimetres",
            "features": ["ndvi"],
            "trees": [
                {"nodes": [
                    {"feature": 0, "threshold": 0.5, "left": 1, "right": 2},
                    {"value": 0.0},
                    {"value": 2.0}
                ]}
            ]
        }"#;
        let model = serde_json::from_str::<ModelFile>(json)
            .unwrap()
            .into_regressor()
            .unwrap();
        assert_eq!(model.variable(), Variable::Precipitation);
        assert_eq!(model.evaluate(&[0.7]), 2.0);
    }

    #[test]
    fn duplicate_features_rejected() {
        let file = ModelFile::Linear {
            variable: Variable::WindSpeed,
            unit: Unit::WindProxy,
            features: vec!["a".into(), "a".into()],
            scaler: None,
            intercept: 0.0,
            coefficients: vec![1.0, 1.0],
        };
        assert!(matches!(
            file.into_regressor(),
            Err(RegressError::InvalidModel {
                variable: Variable::WindSpeed,
                ..
            })
        ));
    }

    #[test]
    fn unknown_kind_rejected() {
        let json = r#"{"kind": "svm", "variable": "humidity", "unit": "pascal", "features": []}"#;
        assert!(serde_json::from_str::<ModelFile>(json).is_err());
    }
}
