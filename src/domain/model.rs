use crate::utils::error::ClassifyError;
use serde::Serialize;
use serde_json::Value;

/// 特徵欄位的固定順序，模型係數也依此排列
pub const FEATURE_NAMES: [&str; 5] = ["ph", "ec", "bd", "pr", "mc"];

/// Ordered five-tuple submitted per classification request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    pub ph: f64,
    pub ec: f64,
    pub bd: f64,
    pub pr: f64,
    pub mc: f64,
}

impl FeatureVector {
    /// Build a typed vector from an untyped request body.
    ///
    /// Fields are checked in [`FEATURE_NAMES`] order and the first failure is returned.
    pub fn from_json(body: &Value) -> Result<Self, ClassifyError> {
        let object = body.as_object().ok_or_else(|| ClassifyError::InvalidBody {
            message: format!("expected a JSON object, got {}", value_type(body)),
        })?;

        let mut values = [0.0_f64; 5];
        for (slot, field) in values.iter_mut().zip(FEATURE_NAMES) {
            *slot = coerce_number(field, object.get(field))?;
        }

        let [ph, ec, bd, pr, mc] = values;
        Ok(Self { ph, ec, bd, pr, mc })
    }

    pub fn as_array(&self) -> [f64; 5] {
        [self.ph, self.ec, self.bd, self.pr, self.mc]
    }
}

/// Integer class label produced by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Prediction {
    pub prediction: i64,
}

fn coerce_number(field: &'static str, value: Option<&Value>) -> Result<f64, ClassifyError> {
    let number = match value {
        None | Some(Value::Null) => return Err(ClassifyError::MissingField { field }),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(Value::Bool(b)) => Some(if *b { 1.0 } else { 0.0 }),
        Some(Value::Array(_)) | Some(Value::Object(_)) => None,
    };

    let number = number.ok_or_else(|| ClassifyError::NotNumeric {
        field,
        value: value.map(Value::to_string).unwrap_or_default(),
    })?;

    // NaN/inf 進不了模型
    if !number.is_finite() {
        return Err(ClassifyError::NonFinite { field });
    }

    Ok(number)
}

fn value_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_parse_in_fixed_order() {
        let body = json!({"mc": 15.0, "pr": 0.4, "bd": 1.3, "ec": 1.2, "ph": 6.5});
        let features = FeatureVector::from_json(&body).unwrap();
        assert_eq!(features.as_array(), [6.5, 1.2, 1.3, 0.4, 15.0]);
    }

    #[test]
    fn test_numeric_strings_and_booleans_coerce() {
        let body = json!({"ph": "6.5", "ec": " 1 ", "bd": true, "pr": false, "mc": 3});
        let features = FeatureVector::from_json(&body).unwrap();
        assert_eq!(features.as_array(), [6.5, 1.0, 1.0, 0.0, 3.0]);
    }

    #[test]
    fn test_extra_keys_are_ignored() {
        let body = json!({"ph": 1, "ec": 2, "bd": 3, "pr": 4, "mc": 5, "site": "north"});
        assert!(FeatureVector::from_json(&body).is_ok());
    }

    #[test]
    fn test_empty_object_reports_first_missing_field() {
        let err = FeatureVector::from_json(&json!({})).unwrap_err();
        assert_eq!(err, ClassifyError::MissingField { field: "ph" });
    }

    #[test]
    fn test_null_counts_as_missing() {
        let body = json!({"ph": 6.5, "ec": null, "bd": 1, "pr": 1, "mc": 1});
        let err = FeatureVector::from_json(&body).unwrap_err();
        assert_eq!(err, ClassifyError::MissingField { field: "ec" });
    }

    #[test]
    fn test_non_numeric_values_are_rejected() {
        let body = json!({"ph": "abc", "ec": 1, "bd": 1, "pr": 1, "mc": 1});
        let err = FeatureVector::from_json(&body).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotNumeric);
        assert_eq!(err.field(), Some("ph"));

        let body = json!({"ph": 1, "ec": 1, "bd": [1], "pr": 1, "mc": 1});
        let err = FeatureVector::from_json(&body).unwrap_err();
        assert_eq!(err.field(), Some("bd"));
    }

    #[test]
    fn test_non_finite_values_are_rejected() {
        let body = json!({"ph": 1, "ec": 1, "bd": 1, "pr": "nan", "mc": 1});
        let err = FeatureVector::from_json(&body).unwrap_err();
        assert_eq!(err, ClassifyError::NonFinite { field: "pr" });

        let body = json!({"ph": 1, "ec": 1, "bd": 1, "pr": 1, "mc": "-inf"});
        let err = FeatureVector::from_json(&body).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NonFinite);
    }

    #[test]
    fn test_non_object_body_is_invalid() {
        let err = FeatureVector::from_json(&json!([6.5, 1.2, 1.3, 0.4, 15.0])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidBody);
        assert!(err.to_string().contains("an array"));
    }
}
