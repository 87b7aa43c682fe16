//! Data paths in xpath syntax.
//!
//! A path is a sequence of segments, each a schema name optionally
//! followed by a single key predicate:
//!
//! ```text
//! /isis/instance[area-tag='core-1']/area-address[.='49.0001.0000.0000.0001.00']
//! ```
//!
//! Key values are quoted and may contain `/`, `.` and `]`.

use std::fmt;
use std::str::FromStr;

use crate::error::{TreeError, TreeResult};

/// Key name used by leaf-list entries.
pub const LEAF_LIST_KEY: &str = ".";

/// A list key predicate: `[name='value']`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key {
    pub name: String,
    pub value: String,
}

/// One step of a data path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Segment {
    pub name: String,
    pub key: Option<Key>,
}

impl Segment {
    /// A plain container or leaf segment.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: None,
        }
    }

    /// A keyed list entry segment.
    pub fn keyed(
        name: impl Into<String>,
        key_name: impl Into<String>,
        key_value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            key: Some(Key {
                name: key_name.into(),
                value: key_value.into(),
            }),
        }
    }

    /// Returns true if this segment names a leaf-list entry.
    pub fn is_leaf_list_entry(&self) -> bool {
        self.key.as_ref().is_some_and(|k| k.name == LEAF_LIST_KEY)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.key {
            Some(key) => write!(f, "{}[{}='{}']", self.name, key.name, key.value),
            None => write!(f, "{}", self.name),
        }
    }
}

/// An absolute path to a configuration node.
///
/// Ordering is segment-wise, so a parent sorts before all of its
/// descendants and descendants are contiguous.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct DataPath {
    segments: Vec<Segment>,
}

/// A parsed relative step.
enum Step {
    Current,
    Parent,
    Child(Segment),
}

fn parse_steps(input: &str, full: &str) -> TreeResult<Vec<Step>> {
    let chars: Vec<char> = input.chars().collect();
    let mut steps = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '/' {
            i += 1;
            continue;
        }

        let start = i;
        while i < chars.len() && chars[i] != '/' && chars[i] != '[' {
            i += 1;
        }
        let name: String = chars[start..i].iter().collect();
        if name.is_empty() {
            return Err(TreeError::invalid_path(full, "empty segment name"));
        }

        let mut key = None;
        if i < chars.len() && chars[i] == '[' {
            i += 1;
            let key_start = i;
            while i < chars.len() && chars[i] != '=' {
                i += 1;
            }
            if i >= chars.len() {
                return Err(TreeError::invalid_path(full, "key predicate without '='"));
            }
            let key_name: String = chars[key_start..i].iter().collect();
            i += 1;

            let quote = match chars.get(i) {
                Some(q @ ('\'' | '"')) => *q,
                _ => return Err(TreeError::invalid_path(full, "unquoted key value")),
            };
            i += 1;
            let value_start = i;
            while i < chars.len() && chars[i] != quote {
                i += 1;
            }
            if i >= chars.len() {
                return Err(TreeError::invalid_path(full, "unterminated key value"));
            }
            let key_value: String = chars[value_start..i].iter().collect();
            i += 1;
            if chars.get(i) != Some(&']') {
                return Err(TreeError::invalid_path(full, "expected ']'"));
            }
            i += 1;
            key = Some(Key {
                name: key_name.trim().to_string(),
                value: key_value,
            });
        }

        let step = match (name.as_str(), &key) {
            (".", None) => Step::Current,
            ("..", None) => Step::Parent,
            _ => Step::Child(Segment { name, key }),
        };
        steps.push(step);
    }

    Ok(steps)
}

impl DataPath {
    /// The root path (no segments).
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse an absolute path.
    pub fn parse(input: &str) -> TreeResult<Self> {
        if !input.starts_with('/') {
            return Err(TreeError::invalid_path(input, "path must be absolute"));
        }
        Self::root().resolve(input)
    }

    /// Resolve a path relative to this one.
    ///
    /// Accepts `.`, `./a/b`, `../a` and bare `a/b`; a leading `/` makes
    /// the path absolute.
    pub fn resolve(&self, rel: &str) -> TreeResult<Self> {
        let mut segments = if rel.starts_with('/') {
            Vec::new()
        } else {
            self.segments.clone()
        };

        for step in parse_steps(rel, rel)? {
            match step {
                Step::Current => {}
                Step::Parent => {
                    if segments.pop().is_none() {
                        return Err(TreeError::invalid_path(rel, "'..' above the root"));
                    }
                }
                Step::Child(seg) => segments.push(seg),
            }
        }

        Ok(Self { segments })
    }

    /// Append a plain segment.
    pub fn child(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::new(name));
        Self { segments }
    }

    /// Append a keyed list entry segment.
    pub fn entry(
        &self,
        name: impl Into<String>,
        key_name: impl Into<String>,
        key_value: impl Into<String>,
    ) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::keyed(name, key_name, key_value));
        Self { segments }
    }

    /// The parent path, `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        if self.segments.is_empty() {
            return None;
        }
        Some(Self {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }

    /// This path and every ancestor up to (excluding) the root, nearest first.
    pub fn ancestors_inclusive(&self) -> impl Iterator<Item = DataPath> + '_ {
        (1..=self.segments.len()).rev().map(move |n| Self {
            segments: self.segments[..n].to_vec(),
        })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn last(&self) -> Option<&Segment> {
        self.segments.last()
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns true if `self` equals `other` or lies beneath it.
    pub fn starts_with(&self, other: &DataPath) -> bool {
        self.segments.starts_with(&other.segments)
    }

    /// The path with all key predicates removed, e.g. `/isis/instance/area-address`.
    pub fn schema_path(&self) -> String {
        if self.segments.is_empty() {
            return "/".to_string();
        }
        let mut out = String::new();
        for seg in &self.segments {
            out.push('/');
            out.push_str(&seg.name);
        }
        out
    }

    /// Value of the key predicate with the given name on the nearest keyed ancestor.
    pub fn key_value(&self, key_name: &str) -> Option<&str> {
        self.segments
            .iter()
            .rev()
            .filter_map(|s| s.key.as_ref())
            .find(|k| k.name == key_name)
            .map(|k| k.value.as_str())
    }
}

impl fmt::Display for DataPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "/");
        }
        for seg in &self.segments {
            write!(f, "/{}", seg)?;
        }
        Ok(())
    }
}

impl FromStr for DataPath {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DataPath::parse(s)
    }
}
