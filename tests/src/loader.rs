//! Loader for scenario scripts.
//!
//! Parses `.isis` scripts with step markers (`--# step_name`). Each step
//! holds configuration edits and interface events:
//!
//! ```text
//! --# create_area
//! set /isis/instance[area-tag='core-1']
//! set /isis/instance[area-tag='core-1']/is-type level-1
//! delete /isis/instance[area-tag='core-1']/overload
//! if-up eth0
//! ```

use std::collections::HashMap;
use std::path::Path;

use isisnb_core::Value;
use isisnb_tree::DataPath;

use crate::error::{ScenarioError, ScenarioResult};

/// One scripted action.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Set a leaf, or create a container or list entry when no value is given.
    Set { path: DataPath, value: Option<Value> },
    /// Remove a node and its subtree.
    Delete { path: DataPath },
    /// An interface became ready.
    IfUp(String),
    /// An interface went away.
    IfDown(String),
}

impl Command {
    /// Whether the command edits the candidate configuration.
    pub fn is_edit(&self) -> bool {
        matches!(self, Command::Set { .. } | Command::Delete { .. })
    }
}

/// A parsed script.
#[derive(Debug, Clone)]
pub struct Operations {
    /// The raw script.
    pub source: String,
    /// Map of step name to its commands.
    pub steps: HashMap<String, Vec<Command>>,
    /// Steps in order of appearance.
    pub step_order: Vec<String>,
}

impl Operations {
    /// Parse a script from a string.
    pub fn parse(source: &str) -> ScenarioResult<Self> {
        let mut steps: HashMap<String, Vec<Command>> = HashMap::new();
        let mut step_order = Vec::new();
        let mut current_step: Option<String> = None;

        for (index, line) in source.lines().enumerate() {
            let trimmed = line.trim();

            if let Some(suffix) = trimmed.strip_prefix("--#") {
                let step_name = suffix.trim().to_string();
                if step_name.is_empty() {
                    return Err(ScenarioError::operations_parse(
                        "<inline>",
                        format!("line {}: empty step name after --#", index + 1),
                    ));
                }
                step_order.push(step_name.clone());
                steps.entry(step_name.clone()).or_default();
                current_step = Some(step_name);
                continue;
            }

            // Comments, blank lines and anything before the first marker.
            if trimmed.is_empty() || trimmed.starts_with("--") {
                continue;
            }
            let Some(ref step_name) = current_step else {
                continue;
            };

            let command = parse_command(trimmed).map_err(|message| {
                ScenarioError::operations_parse(
                    "<inline>",
                    format!("line {}: {}", index + 1, message),
                )
            })?;
            steps.entry(step_name.clone()).or_default().push(command);
        }

        Ok(Self {
            source: source.to_string(),
            steps,
            step_order,
        })
    }

    /// Load and parse a script from disk.
    pub fn load(path: &Path) -> ScenarioResult<Self> {
        let source =
            std::fs::read_to_string(path).map_err(|e| ScenarioError::file_read(path, e))?;
        Self::parse(&source).map_err(|e| ScenarioError::operations_parse(path, e.to_string()))
    }

    /// Get the commands of a step.
    pub fn get_step(&self, name: &str) -> Option<&[Command]> {
        self.steps.get(name).map(Vec::as_slice)
    }

    /// Get all step names in order.
    pub fn step_names(&self) -> &[String] {
        &self.step_order
    }
}

fn parse_command(line: &str) -> Result<Command, String> {
    let (verb, rest) = line
        .split_once(char::is_whitespace)
        .map(|(v, r)| (v, r.trim()))
        .unwrap_or((line, ""));
    if rest.is_empty() {
        return Err(format!("'{}' needs an argument", verb));
    }

    match verb {
        "set" => {
            let (path, value) = match rest.split_once(char::is_whitespace) {
                Some((p, v)) => (p, Some(parse_value(v.trim()))),
                None => (rest, None),
            };
            let path = DataPath::parse(path).map_err(|e| e.to_string())?;
            Ok(Command::Set { path, value })
        }
        "delete" => {
            let path = DataPath::parse(rest).map_err(|e| e.to_string())?;
            Ok(Command::Delete { path })
        }
        "if-up" => Ok(Command::IfUp(rest.to_string())),
        "if-down" => Ok(Command::IfDown(rest.to_string())),
        other => Err(format!("unknown command '{}'", other)),
    }
}

/// Numbers become integers, `true`/`false` booleans, everything else a
/// string with optional surrounding quotes removed.
fn parse_value(text: &str) -> Value {
    let number = regex_lite::Regex::new(r"^[0-9]+$").ok();
    if number.is_some_and(|re| re.is_match(text)) {
        if let Ok(v) = text.parse::<u32>() {
            return Value::U32(v);
        }
    }
    match text {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => {
            let unquoted = text
                .strip_prefix('"')
                .and_then(|t| t.strip_suffix('"'))
                .unwrap_or(text);
            Value::String(unquoted.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_steps() {
        let source = r#"
-- Two areas sharing one system ID

--# create_area
set /isis/instance[area-tag='core-1']
set /isis/instance[area-tag='core-1']/is-type level-1

--# interface_events
if-up eth0
if-down eth0
delete /isis/instance[area-tag='core-1']
"#;

        let ops = Operations::parse(source).unwrap();

        assert_eq!(ops.step_order, vec!["create_area", "interface_events"]);
        let create = ops.get_step("create_area").unwrap();
        assert_eq!(create.len(), 2);
        assert_eq!(
            create[1],
            Command::Set {
                path: DataPath::parse("/isis/instance[area-tag='core-1']/is-type").unwrap(),
                value: Some(Value::String("level-1".to_string())),
            }
        );
        let events = ops.get_step("interface_events").unwrap();
        assert_eq!(events[0], Command::IfUp("eth0".to_string()));
        assert!(events[2].is_edit());
    }

    #[test]
    fn test_values() {
        assert_eq!(parse_value("1200"), Value::U32(1200));
        assert_eq!(parse_value("false"), Value::Bool(false));
        assert_eq!(parse_value("\"s3cret\""), Value::String("s3cret".to_string()));
        assert_eq!(parse_value("49.0001"), Value::String("49.0001".to_string()));
    }

    #[test]
    fn test_unknown_command_is_rejected() {
        let source = "--# bad\nrestart isisd\n";

        let err = Operations::parse(source).unwrap_err();

        assert!(err.to_string().contains("line 2: unknown command 'restart'"));
    }

    #[test]
    fn test_empty_step_is_kept() {
        let ops = Operations::parse("--# nothing\n").unwrap();

        assert_eq!(ops.get_step("nothing"), Some(&[][..]));
    }
}
