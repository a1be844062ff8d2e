use std::collections::{BTreeMap, HashMap};

/// Named field lookup over submitted form data.
///
/// Absent fields and fields that carry no string value both read as `None`.
pub trait FormSource {
    fn get(&self, field_name: &str) -> Option<&str>;
}

impl FormSource for HashMap<String, String> {
    fn get(&self, field_name: &str) -> Option<&str> {
        HashMap::get(self, field_name).map(String::as_str)
    }
}

impl FormSource for BTreeMap<String, String> {
    fn get(&self, field_name: &str) -> Option<&str> {
        BTreeMap::get(self, field_name).map(String::as_str)
    }
}

impl FormSource for serde_json::Map<String, serde_json::Value> {
    fn get(&self, field_name: &str) -> Option<&str> {
        serde_json::Map::get(self, field_name).and_then(serde_json::Value::as_str)
    }
}

impl<T: FormSource + ?Sized> FormSource for &T {
    fn get(&self, field_name: &str) -> Option<&str> {
        (**self).get(field_name)
    }
}
