//! RPSL objects and their attributes

use std::fmt;

use crate::error::ObjectParseError;
use crate::reader::Reader;

//
// External dependencies
//
use strum::{EnumString, IntoStaticStr};

/// A well-known RPSL object class, as registered with the routing
/// registries (RFC 2622, RFC 4012 and the RIPE database extensions).
///
/// The reader itself does not restrict objects to these classes; the
/// catalog exists so that callers can dispatch on recognized classes
/// without string matching. See [`Object::known_class`].
#[derive(Debug, Clone, Copy, EnumString, IntoStaticStr, PartialEq, Eq, PartialOrd, Ord)]
pub enum ObjectClass {
    #[strum(serialize = "as-block")]
    AsBlock,
    #[strum(serialize = "as-set")]
    AsSet,
    #[strum(serialize = "aut-num")]
    AutNum,
    #[strum(serialize = "domain")]
    Domain,
    #[strum(serialize = "filter-set")]
    FilterSet,
    #[strum(serialize = "inet-rtr")]
    InetRtr,
    #[strum(serialize = "inet6num")]
    Inet6num,
    #[strum(serialize = "inetnum")]
    Inetnum,
    #[strum(serialize = "irt")]
    Irt,
    #[strum(serialize = "key-cert")]
    KeyCert,
    #[strum(serialize = "mntner")]
    Mntner,
    #[strum(serialize = "organisation")]
    Organisation,
    #[strum(serialize = "peering-set")]
    PeeringSet,
    #[strum(serialize = "person")]
    Person,
    #[strum(serialize = "role")]
    Role,
    #[strum(serialize = "route")]
    Route,
    #[strum(serialize = "route-set")]
    RouteSet,
    #[strum(serialize = "route6")]
    Route6,
    #[strum(serialize = "rtr-set")]
    RtrSet,
}

impl ObjectClass {
    /// The class name as it appears in registry text.
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// One RPSL record: an ordered collection of named, multi-valued
/// attributes.
///
/// Objects are produced by [`Reader::read`](crate::Reader::read) and are
/// plain owned values afterwards; the reader keeps no reference to them.
/// Attribute names are case-sensitive. A name may occur any number of
/// times, and each occurrence is kept as a distinct entry in source
/// order (five `descr:` lines yield five strings, not one).
#[derive(Debug, Clone)]
pub struct Object {
    class: String,
    values: Vec<(String, Vec<String>)>,
}

impl Object {
    pub(crate) fn new(class: impl Into<String>) -> Object {
        Object {
            class: class.into(),
            values: Vec::new(),
        }
    }

    /// Append one attribute occurrence.
    pub(crate) fn push_value(&mut self, name: &str, value: impl Into<String>) {
        match self.values.iter_mut().find(|(n, _)| n == name) {
            Some((_, values)) => values.push(value.into()),
            None => self.values.push((name.to_string(), vec![value.into()])),
        }
    }

    /// Fold continuation text into the latest entry of `name`, joined by
    /// a single space.
    pub(crate) fn extend_value(&mut self, name: &str, text: &str) {
        if let Some(last) = self
            .values
            .iter_mut()
            .find(|(n, _)| n == name)
            .and_then(|(_, values)| values.last_mut())
        {
            last.push(' ');
            last.push_str(text);
        }
    }

    /// The attribute name of the record's first line, e.g. `"route"` or
    /// `"aut-num"`.
    pub fn class(&self) -> &str {
        &self.class
    }

    /// Look the class name up in the [`ObjectClass`] catalog.
    pub fn known_class(&self) -> Option<ObjectClass> {
        self.class.parse().ok()
    }

    /// The first value recorded for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.all(name).first().map(String::as_str)
    }

    /// Every value recorded for `name`, in source order. Empty if the
    /// attribute does not occur in this object.
    pub fn all(&self, name: &str) -> &[String] {
        self.values
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, values)| values.as_slice())
            .unwrap_or(&[])
    }

    /// Iterate over the attributes, grouped by name in order of first
    /// appearance.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.values
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// The number of distinct attribute names in this object.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parse every record contained in a raw text.
    pub fn many_from_str(text: impl AsRef<str>) -> Result<Vec<Object>, ObjectParseError> {
        Reader::new(text.as_ref().as_bytes()).collect()
    }
}

impl fmt::Display for Object {
    /// Render the object back to `name: value` lines, one line per
    /// attribute occurrence, grouped by name in first-appearance order.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (name, values) in self.attributes() {
            for value in values {
                writeln!(f, "{:<15} {}", format!("{}:", name), value)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Object {
        let mut object = Object::new("route");
        object.push_value("route", "128.223.0.0/16");
        object.push_value("descr", "UONet");
        object.push_value("descr", "University of Oregon");
        object.push_value("origin", "AS3582");
        object
    }

    #[test]
    fn get_returns_first_value() {
        let object = sample();
        assert_eq!(object.get("descr"), Some("UONet"));
        assert_eq!(object.get("origin"), Some("AS3582"));
        assert_eq!(object.get("mnt-by"), None);
    }

    #[test]
    fn all_preserves_multiplicity_and_order() {
        let object = sample();
        assert_eq!(object.all("descr"), ["UONet", "University of Oregon"]);
        assert!(object.all("nonexistent").is_empty());
    }

    #[test]
    fn attributes_iterate_in_first_appearance_order() {
        let object = sample();
        let names: Vec<&str> = object.attributes().map(|(name, _)| name).collect();
        assert_eq!(names, ["route", "descr", "origin"]);
    }

    #[test]
    fn extend_value_folds_into_latest_entry() {
        let mut object = sample();
        object.extend_value("descr", "Computing Center");
        assert_eq!(
            object.all("descr"),
            ["UONet", "University of Oregon Computing Center"]
        );
    }

    #[test]
    fn known_class_catalog() {
        assert_eq!(sample().known_class(), Some(ObjectClass::Route));
        assert_eq!(ObjectClass::AutNum.as_str(), "aut-num");
        assert_eq!("as-set".parse(), Ok(ObjectClass::AsSet));
        assert!("no-such-class".parse::<ObjectClass>().is_err());

        let unknown = Object::new("dictionary");
        assert_eq!(unknown.known_class(), None);
    }

    #[test]
    fn display_renders_attribute_lines() {
        let rendered = sample().to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "route:          128.223.0.0/16");
        assert_eq!(lines[3], "origin:         AS3582");
    }
}
