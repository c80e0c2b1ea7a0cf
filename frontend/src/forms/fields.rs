use std::collections::BTreeMap;

use wasm_bindgen::JsCast;
use web_sys::{File, FormData};

/// A file chosen in a form's file input.
#[derive(Clone, Debug, PartialEq)]
pub struct Attachment {
    pub file_name: String,
    pub size: u64,
    pub media_type: String,
    /// Browser handle to the file contents. `None` outside a document.
    pub blob: Option<File>,
}

impl Attachment {
    pub fn new(file_name: &str, size: u64, media_type: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
            size,
            media_type: media_type.to_string(),
            blob: None,
        }
    }

    pub fn from_file(file: File) -> Self {
        Self {
            file_name: file.name(),
            size: file.size() as u64,
            media_type: file.type_(),
            blob: Some(file),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Text(String),
    File(Attachment),
}

/// Named values read from a form at submit time. Unchecked checkboxes and
/// fields the browser did not report are simply absent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldValues {
    values: BTreeMap<String, FieldValue>,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Picks `names` out of browser form data.
    pub fn from_form_data(data: &FormData, names: &[&str]) -> Self {
        let mut values = Self::new();
        for name in names {
            let value = data.get(name);
            if let Some(text) = value.as_string() {
                values.insert(name, FieldValue::Text(text));
            } else if let Ok(file) = value.dyn_into::<File>() {
                values.insert(name, FieldValue::File(Attachment::from_file(file)));
            }
        }
        values
    }

    pub fn insert(&mut self, name: &str, value: FieldValue) {
        self.values.insert(name.to_string(), value);
    }

    pub fn with_text(mut self, name: &str, value: &str) -> Self {
        self.insert(name, FieldValue::Text(value.to_string()));
        self
    }

    /// A checked checkbox, reported by browsers as `"on"`.
    pub fn with_checked(self, name: &str) -> Self {
        self.with_text(name, "on")
    }

    pub fn with_file(mut self, name: &str, attachment: Attachment) -> Self {
        self.insert(name, FieldValue::File(attachment));
        self
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(FieldValue::Text(text)) => Some(text),
            _ => None,
        }
    }

    pub fn attachment(&self, name: &str) -> Option<&Attachment> {
        match self.values.get(name) {
            Some(FieldValue::File(file)) => Some(file),
            _ => None,
        }
    }

    /// Present and non-empty.
    pub fn is_filled(&self, name: &str) -> bool {
        match self.values.get(name) {
            Some(FieldValue::Text(text)) => !text.is_empty(),
            Some(FieldValue::File(file)) => !file.is_empty(),
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
