//! YAML format handler using serde_yaml

use serde_json::Value;
use serde_yaml::Value as YamlValue;

use crate::error::{Error, Result};
use crate::format::{Format, FormatHandler};
use crate::mapping::{self, Mapping};

const NAME: &str = Format::Yaml.name();

/// Handler for YAML files using serde_yaml
///
/// Comments and layout are dropped on parse and aliases are expanded into
/// plain values. `<<` is an ordinary key: merge keys are not applied, so a
/// document written with a literal `<<` key reads back unchanged.
#[derive(Debug, Default)]
pub struct YamlHandler;

impl YamlHandler {
    pub fn new() -> Self {
        Self
    }
}

impl FormatHandler for YamlHandler {
    fn format(&self) -> Format {
        Format::Yaml
    }

    fn parse(&self, source: &str) -> Result<Mapping> {
        let yaml_value: YamlValue =
            serde_yaml::from_str(source).map_err(|e| Error::parse(NAME, e.to_string()))?;

        mapping::into_mapping(yaml_to_json(&yaml_value)?, NAME)
    }

    fn render(&self, mapping: &Mapping) -> Result<String> {
        let yaml_value = json_mapping_to_yaml(mapping);
        serde_yaml::to_string(&yaml_value).map_err(|e| Error::render(NAME, e.to_string()))
    }
}

fn yaml_to_json(value: &YamlValue) -> Result<Value> {
    Ok(match value {
        YamlValue::Null => Value::Null,
        YamlValue::Bool(b) => Value::Bool(*b),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Number(i.into())
            } else if let Some(u) = n.as_u64() {
                Value::Number(u.into())
            } else {
                let f = n.as_f64().unwrap_or(f64::NAN);
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .ok_or_else(|| Error::parse(NAME, format!("unsupported number {n}")))?
            }
        }
        YamlValue::String(s) => Value::String(s.clone()),
        YamlValue::Sequence(items) => {
            Value::Array(items.iter().map(yaml_to_json).collect::<Result<_>>()?)
        }
        YamlValue::Mapping(map) => {
            let mut json_map = Mapping::new();
            for (k, v) in map {
                let key = yaml_key(k)?;
                if json_map.insert(key.clone(), yaml_to_json(v)?).is_some() {
                    return Err(Error::parse(NAME, format!("duplicate key {key:?}")));
                }
            }
            Value::Object(json_map)
        }
        YamlValue::Tagged(tagged) => yaml_to_json(&tagged.value)?,
    })
}

/// Scalar keys are stringified; keys must be strings in the document model.
fn yaml_key(key: &YamlValue) -> Result<String> {
    match key {
        YamlValue::String(s) => Ok(s.clone()),
        YamlValue::Bool(b) => Ok(b.to_string()),
        YamlValue::Number(n) => Ok(n.to_string()),
        YamlValue::Null => Ok("null".to_string()),
        YamlValue::Tagged(tagged) => yaml_key(&tagged.value),
        YamlValue::Sequence(_) | YamlValue::Mapping(_) => Err(Error::parse(
            NAME,
            "mapping keys must be scalars",
        )),
    }
}

fn json_mapping_to_yaml(map: &Mapping) -> YamlValue {
    let mut keys: Vec<_> = map.keys().collect();
    keys.sort();

    let mut yaml_map = serde_yaml::Mapping::new();
    for key in keys {
        if let Some(v) = map.get(key) {
            yaml_map.insert(YamlValue::String(key.clone()), json_to_yaml(v));
        }
    }
    YamlValue::Mapping(yaml_map)
}

fn json_to_yaml(value: &Value) -> YamlValue {
    match value {
        Value::Null => YamlValue::Null,
        Value::Bool(b) => YamlValue::Bool(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                YamlValue::Number(i.into())
            } else if let Some(u) = n.as_u64() {
                YamlValue::Number(u.into())
            } else {
                YamlValue::Number(n.as_f64().unwrap_or_default().into())
            }
        }
        Value::String(s) => YamlValue::String(s.clone()),
        Value::Array(items) => YamlValue::Sequence(items.iter().map(json_to_yaml).collect()),
        Value::Object(map) => json_mapping_to_yaml(map),
    }
}
