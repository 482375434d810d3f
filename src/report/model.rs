// src/report/model.rs
// =============================================================================
// The shape of an analysis result.
//
// A PageReport is a list of named sections ("On-Page SEO", "Technical SEO",
// ...). Each section is an ORDERED mapping from metric name to value.
//
// Why not a HashMap?
// - HashMap iteration order is random
// - We want the table and the JSON to list metrics in the order we added
//   them, every single run
// - Sections hold a handful of entries, so a Vec with linear lookup is fine
//
// Rust concepts:
// - Manual Serialize impls: to emit a Vec of pairs as a JSON object
// - #[serde(untagged)]: values serialize as plain strings/numbers/bools
// =============================================================================

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// A single metric value
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    Text(String),
    Count(u64),
    Flag(bool),
    List(Vec<String>),
}

impl From<&str> for MetricValue {
    fn from(value: &str) -> Self {
        MetricValue::Text(value.to_string())
    }
}

impl From<String> for MetricValue {
    fn from(value: String) -> Self {
        MetricValue::Text(value)
    }
}

impl From<usize> for MetricValue {
    fn from(value: usize) -> Self {
        MetricValue::Count(value as u64)
    }
}

impl From<u64> for MetricValue {
    fn from(value: u64) -> Self {
        MetricValue::Count(value)
    }
}

impl From<bool> for MetricValue {
    fn from(value: bool) -> Self {
        MetricValue::Flag(value)
    }
}

impl From<Vec<String>> for MetricValue {
    fn from(value: Vec<String>) -> Self {
        MetricValue::List(value)
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Text(text) => f.write_str(text),
            MetricValue::Count(count) => write!(f, "{}", count),
            MetricValue::Flag(flag) => write!(f, "{}", flag),
            // ["first", "second"]
            MetricValue::List(items) => write!(f, "{:?}", items),
        }
    }
}

/// An ordered group of uniquely-named metrics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    metrics: Vec<(String, MetricValue)>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            metrics: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // Adds a metric at the end. If the name already exists, its value is
    // replaced in place so the original position is kept.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<MetricValue>) {
        let name = name.into();
        let value = value.into();

        match self.metrics.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.metrics.push((name, value)),
        }
    }

    // Builder-style insert, handy when assembling a section in one expression
    pub fn with(mut self, name: impl Into<String>, value: impl Into<MetricValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&MetricValue> {
        self.metrics
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetricValue)> {
        self.metrics.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }
}

impl Serialize for Section {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.metrics.len()))?;
        for (name, value) in &self.metrics {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// One row of the flattened report: (category, metric, value)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow<'a> {
    pub category: &'a str,
    pub metric: &'a str,
    pub value: &'a MetricValue,
}

/// The full result of analyzing one page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageReport {
    sections: Vec<Section>,
}

impl PageReport {
    pub fn new() -> Self {
        Self::default()
    }

    // Appends a section. A section with the same name is replaced in place.
    pub fn push_section(&mut self, section: Section) {
        match self.sections.iter_mut().find(|s| s.name == section.name) {
            Some(slot) => *slot = section,
            None => self.sections.push(section),
        }
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.name == name)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    // Flattens every section into rows, in order. This is what the table
    // view prints.
    pub fn rows(&self) -> Vec<ReportRow<'_>> {
        self.sections
            .iter()
            .flat_map(|section| {
                section.iter().map(move |(metric, value)| ReportRow {
                    category: section.name(),
                    metric,
                    value,
                })
            })
            .collect()
    }
}

impl Serialize for PageReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for section in &self.sections {
            map.serialize_entry(&section.name, section)?;
        }
        map.end()
    }
}
