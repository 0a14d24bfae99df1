use serde_json::{Map, Value};

/// A decoded JSON object that known fields are taken out of one by one.
///
/// Whatever is left once every known field has been taken is the entry's
/// bag of extra attributes. A field whose value has an unexpected type is
/// left in place, so nothing from the source line is lost. Fields are
/// removed with a shift so the remaining keys keep their source order.
pub(crate) struct Fields(Map<String, Value>);

impl Fields {
    pub(crate) fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub(crate) fn take_string(&mut self, key: &str) -> Option<String> {
        match self.0.get(key) {
            Some(Value::String(_)) => match self.0.shift_remove(key) {
                Some(Value::String(s)) => Some(s),
                _ => None,
            },
            _ => None,
        }
    }

    /// Numbers are accepted as JSON numbers or as numeric strings.
    pub(crate) fn take_number(&mut self, key: &str) -> Option<f64> {
        let number = match self.0.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }?;

        self.0.shift_remove(key);
        Some(number)
    }

    pub(crate) fn take_object(&mut self, key: &str) -> Option<Map<String, Value>> {
        match self.0.get(key) {
            Some(Value::Object(_)) => match self.0.shift_remove(key) {
                Some(Value::Object(map)) => Some(map),
                _ => None,
            },
            _ => None,
        }
    }

    /// Takes any non-null value.
    pub(crate) fn take_value(&mut self, key: &str) -> Option<Value> {
        match self.0.get(key) {
            None | Some(Value::Null) => None,
            Some(_) => self.0.shift_remove(key),
        }
    }

    pub(crate) fn into_extra(self) -> Map<String, Value> {
        self.0
    }
}
