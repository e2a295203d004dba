//! Read access to a generic JSON tree.
//!
//! The decoder only navigates object members, reads arrays and reads string
//! or numeric leaves. Any JSON backend offering those can be plugged in.

use serde_json::Value;

pub trait JsonNode: Sized {
    fn is_object(&self) -> bool;

    /// Member `key` of an object, `None` for missing members and non-objects.
    fn get(&self, key: &str) -> Option<&Self>;

    fn as_array(&self) -> Option<&[Self]>;

    fn as_str(&self) -> Option<&str>;

    fn as_f64(&self) -> Option<f64>;
}

impl JsonNode for Value {
    fn is_object(&self) -> bool {
        Value::is_object(self)
    }

    fn get(&self, key: &str) -> Option<&Self> {
        self.as_object()?.get(key)
    }

    fn as_array(&self) -> Option<&[Self]> {
        Value::as_array(self).map(Vec::as_slice)
    }

    fn as_str(&self) -> Option<&str> {
        Value::as_str(self)
    }

    fn as_f64(&self) -> Option<f64> {
        Value::as_f64(self)
    }
}
