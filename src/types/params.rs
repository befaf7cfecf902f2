// Copyright (c) 2023-2024  The heatcost developers

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

/*!
Parameters
==========

Flat parameter mapping, as produced by the input form or stored in a parameter file.

The text format holds one `key: value` pair per line. Numbers are written bare, booleans as
`true` or `false` and strings between double quotes, with `\"` and `\\` escapes.
Blank lines and lines starting with `#` are comments.

```text
# heatcost parameters
project_name: "Bahnhofstraße 12"
persons: 10
use_pv: true
```
*/

use std::fmt;
use std::str::FromStr;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{HeatCostError, Result};

/// Value of a parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Boolean flag
    Bool(bool),
    /// Numeric value
    Number(f32),
    /// Text value (labels, names)
    Text(String),
}

impl ParamValue {
    /// Kind of value, for error messages
    fn kind(&self) -> &'static str {
        match self {
            ParamValue::Bool(_) => "boolean",
            ParamValue::Number(_) => "number",
            ParamValue::Text(_) => "text",
        }
    }
}

impl From<f32> for ParamValue {
    fn from(v: f32) -> Self {
        ParamValue::Number(v)
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Number(v as f32)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Text(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Text(v)
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Bool(v) => write!(f, "{}", v),
            ParamValue::Number(v) => write!(f, "{}", v),
            ParamValue::Text(v) => {
                f.write_str("\"")?;
                for c in v.chars() {
                    match c {
                        '\\' => f.write_str("\\\\")?,
                        '"' => f.write_str("\\\"")?,
                        '\n' => f.write_str("\\n")?,
                        '\r' => f.write_str("\\r")?,
                        '\t' => f.write_str("\\t")?,
                        c => write!(f, "{}", c)?,
                    }
                }
                f.write_str("\"")
            }
        }
    }
}

impl FromStr for ParamValue {
    type Err = HeatCostError;

    fn from_str(s: &str) -> Result<ParamValue> {
        let s = s.trim();
        match s {
            "true" => return Ok(ParamValue::Bool(true)),
            "false" => return Ok(ParamValue::Bool(false)),
            _ => (),
        }
        if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
            return unescape(&s[1..s.len() - 1]).map(ParamValue::Text);
        }
        s.parse::<f32>()
            .map(ParamValue::Number)
            .map_err(|_| HeatCostError::ParseError(s.into()))
    }
}

fn unescape(s: &str) -> Result<String> {
    let mut res = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            res.push(c);
            continue;
        }
        match chars.next() {
            Some(e @ '"') | Some(e @ '\\') => res.push(e),
            Some('n') => res.push('\n'),
            Some('r') => res.push('\r'),
            Some('t') => res.push('\t'),
            _ => return Err(HeatCostError::ParseError(s.into())),
        }
    }
    Ok(res)
}

/// Named parameter
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    /// Parameter name
    pub key: String,
    /// Parameter value
    pub value: ParamValue,
}

impl Param {
    /// Parameter constructor
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<ParamValue>,
    {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.value)
    }
}

impl FromStr for Param {
    type Err = HeatCostError;

    fn from_str(s: &str) -> Result<Param> {
        let items: Vec<&str> = s.trim().splitn(2, ':').map(str::trim).collect();
        if items.len() != 2 || items[0].is_empty() {
            return Err(HeatCostError::ParseError(s.into()));
        }
        Ok(Param::new(items[0], items[1].parse::<ParamValue>()?))
    }
}

/// Common access to a list of parameters
pub trait ParamVec {
    /// Get list of parameters
    fn get_paramvec(&self) -> &Vec<Param>;

    /// Get mutable list of parameters
    fn get_mut_paramvec(&mut self) -> &mut Vec<Param>;

    /// Check if key is included in the parameters
    fn has_param(&self, key: &str) -> bool {
        self.get_paramvec().iter().any(|p| p.key == key)
    }

    /// Get (optional) parameter value by key
    fn get_param(&self, key: &str) -> Option<&ParamValue> {
        self.get_paramvec()
            .iter()
            .find(|p| p.key == key)
            .map(|p| &p.value)
    }

    /// Get (optional) numeric parameter. Fails if the value is not a number.
    fn get_f32(&self, key: &str) -> Result<Option<f32>> {
        match self.get_param(key) {
            None => Ok(None),
            Some(ParamValue::Number(v)) => Ok(Some(*v)),
            Some(other) => Err(wrong_kind(key, "number", other)),
        }
    }

    /// Get (optional) boolean parameter. Fails if the value is not a boolean.
    fn get_bool(&self, key: &str) -> Result<Option<bool>> {
        match self.get_param(key) {
            None => Ok(None),
            Some(ParamValue::Bool(v)) => Ok(Some(*v)),
            Some(other) => Err(wrong_kind(key, "boolean", other)),
        }
    }

    /// Get (optional) text parameter. Fails if the value is not a text.
    fn get_str(&self, key: &str) -> Result<Option<&str>> {
        match self.get_param(key) {
            None => Ok(None),
            Some(ParamValue::Text(v)) => Ok(Some(v.as_str())),
            Some(other) => Err(wrong_kind(key, "text", other)),
        }
    }

    /// Update parameter value for key or append a new parameter
    fn set_param<V: Into<ParamValue>>(&mut self, key: &str, value: V) {
        let value = value.into();
        let params = self.get_mut_paramvec();
        match params.iter().position(|p| p.key == key) {
            Some(pos) => params[pos].value = value,
            None => params.push(Param::new(key, value)),
        }
    }
}

fn wrong_kind(key: &str, expected: &str, found: &ParamValue) -> HeatCostError {
    HeatCostError::WrongInput(format!(
        "parameter \"{}\" should be a {} but is a {} ({})",
        key,
        expected,
        found.kind(),
        found
    ))
}

/// Ordered list of parameters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    /// Parameter list
    pub params: Vec<Param>,
}

impl ParamVec for Params {
    fn get_paramvec(&self) -> &Vec<Param> {
        &self.params
    }

    fn get_mut_paramvec(&mut self) -> &mut Vec<Param> {
        &mut self.params
    }
}

impl Params {
    /// Read parameters from a JSON object
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Write parameters as a JSON object, keeping their order
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for param in &self.params {
            writeln!(f, "{}", param)?;
        }
        Ok(())
    }
}

impl FromStr for Params {
    type Err = HeatCostError;

    fn from_str(s: &str) -> Result<Params> {
        let s_nobom = if s.starts_with('\u{feff}') { &s[3..] } else { s };
        let params = s_nobom
            .lines()
            .map(str::trim)
            .filter(|l| !(l.is_empty() || l.starts_with('#')))
            .map(str::parse::<Param>)
            .collect::<Result<Vec<_>>>()?;
        Ok(Params { params })
    }
}

impl Serialize for Params {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.params.len()))?;
        for param in &self.params {
            map.serialize_entry(&param.key, &param.value)?;
        }
        map.end()
    }
}

struct ParamsVisitor;

impl<'de> Visitor<'de> for ParamsVisitor {
    type Value = Params;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object with number, text or boolean values")
    }

    fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> std::result::Result<Params, M::Error> {
        let mut params = Params::default();
        while let Some((key, value)) = access.next_entry::<String, ParamValue>()? {
            params.set_param(&key, value);
        }
        Ok(params)
    }
}

impl<'de> Deserialize<'de> for Params {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Params, D::Error> {
        deserializer.deserialize_map(ParamsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Params {
        let mut params = Params::default();
        params.set_param("project_name", "Haus \"Süd\" \\ 1");
        params.set_param("persons", 10.0);
        params.set_param("savings_factor", 0.1);
        params.set_param("use_pv", true);
        params.set_param("pv_orientation", "Ost/West");
        params
    }

    #[test]
    fn param_value_format() {
        assert_eq!(format!("{}", ParamValue::Number(0.3)), "0.3");
        assert_eq!(format!("{}", ParamValue::Number(10.0)), "10");
        assert_eq!(format!("{}", ParamValue::Bool(false)), "false");
        assert_eq!(format!("{}", ParamValue::from("a\"b")), "\"a\\\"b\"");
        assert_eq!("\"a\\\\b\"".parse::<ParamValue>().unwrap(), ParamValue::from("a\\b"));
        assert!("ten".parse::<ParamValue>().is_err());
        assert!("\"bad \\n escape\"".parse::<ParamValue>().is_err());
    }

    #[test]
    fn params_text_roundtrip() {
        let params = sample();
        let text = format!("{}", params);
        assert_eq!(text.parse::<Params>().unwrap(), params);

        // Line breaks stay on a single line
        let mut params = sample();
        params.set_param("project_name", "Haus A\nBlock 2\r\tHof");
        let text = format!("{}", params);
        assert!(text.contains("project_name: \"Haus A\\nBlock 2\\r\\tHof\"\n"));
        let parsed = text.parse::<Params>().unwrap();
        assert_eq!(parsed, params);
        assert_eq!(format!("{}", parsed), text);
    }

    #[test]
    fn params_json_roundtrip() {
        let params = sample();
        let json = params.to_json().unwrap();
        assert_eq!(Params::from_json(&json).unwrap(), params);
    }

    #[test]
    fn params_text_comments_and_bom() {
        let text = "\u{feff}# parameters\n\npersons: 12\n  # indented comment\nuse_battery: false\n";
        let params: Params = text.parse().unwrap();
        assert_eq!(params.params.len(), 2);
        assert_eq!(params.get_f32("persons").unwrap(), Some(12.0));
        assert_eq!(params.get_bool("use_battery").unwrap(), Some(false));
        assert!("persons 12".parse::<Params>().is_err());
    }

    #[test]
    fn params_access() {
        let mut params = sample();
        assert!(params.has_param("persons"));
        assert_eq!(params.get_f32("missing").unwrap(), None);
        assert_eq!(params.get_str("pv_orientation").unwrap(), Some("Ost/West"));
        assert!(params.get_f32("use_pv").is_err());
        params.set_param("persons", 8.0);
        assert_eq!(params.get_f32("persons").unwrap(), Some(8.0));
        assert_eq!(params.params.len(), 5);
    }

    #[test]
    fn params_json_rejects_other_values() {
        assert!(Params::from_json("{\"persons\": null}").is_err());
        assert!(Params::from_json("[1, 2]").is_err());
    }
}
