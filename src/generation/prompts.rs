//! Prompt templates expanded over combinations of named axes
//!
//! A template such as `"Texture of {surface} during {season}"` is filled
//! for every combination of axis values, first axis outermost. Rules then
//! strip phrases that clash with a combination, e.g. eye descriptions on a
//! back view.

use crate::io::error::{Result, invalid_parameter};
use serde::Deserialize;

const TERRAIN_TEMPLATE: &str = "Texture of {surface} during {season} season while it is {condition}. \
As viewed from above. Surreal oil painting, bold exaggerated styles.";

const CREATURE_TEMPLATE: &str = "{action} {colour} {creature}, side view, 3d render, profile view, \
dynamic, angry green eyes, tufts of hair, long tail, high quality, full shot, on a white \
background, camera {view} view perspective";

/// One dimension of variation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PromptAxis {
    /// Placeholder name used as `{name}` in the template
    pub name: String,
    /// Values substituted for the placeholder
    pub values: Vec<String>,
}

impl PromptAxis {
    /// Axis from borrowed strings
    pub fn new(name: &str, values: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            values: values.iter().map(|v| (*v).to_string()).collect(),
        }
    }
}

/// Removes a phrase from prompts containing a trigger
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PromptRule {
    /// Substring that activates the rule
    pub when: String,
    /// Text removed from matching prompts
    pub remove: String,
}

/// A fully expanded prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptJob {
    /// Axis values joined with `_`, used in output filenames
    pub name: String,
    /// Prompt text after substitution and rules
    pub prompt: String,
}

/// Template plus the axes it is expanded over
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PromptMatrix {
    /// Prompt text with `{axis}` placeholders
    pub template: String,
    /// Axes in expansion order
    #[serde(default)]
    pub axes: Vec<PromptAxis>,
    /// Phrase removal rules applied after substitution
    #[serde(default)]
    pub rules: Vec<PromptRule>,
}

impl PromptMatrix {
    /// Top-down terrain textures: season x condition x surface
    pub fn terrain() -> Self {
        Self {
            template: TERRAIN_TEMPLATE.to_string(),
            axes: vec![
                PromptAxis::new("season", &["spring", "summer", "fall", "winter"]),
                PromptAxis::new("condition", &["sunny", "rainy", "night"]),
                PromptAxis::new("surface", &["grass", "desert", "rock", "ocean"]),
            ],
            rules: Vec::new(),
        }
    }

    /// Creature poses: action x camera view
    pub fn creature(colour: &str, creature: &str) -> Self {
        let template = CREATURE_TEMPLATE
            .replace("{colour}", colour)
            .replace("{creature}", creature);
        Self {
            template,
            axes: vec![
                PromptAxis::new(
                    "action",
                    &[
                        "moving", "running", "walking", "jumping", "sitting", "flying", "leaping",
                        "playing",
                    ],
                ),
                PromptAxis::new(
                    "view",
                    &[
                        "side",
                        "front",
                        "back",
                        "top",
                        "bottom",
                        "isometric",
                        "orthographic",
                        "perspective",
                    ],
                ),
            ],
            // Eyes described on a back view get painted onto the back of the head
            rules: vec![PromptRule {
                when: "back view".to_string(),
                remove: "angry green eyes, ".to_string(),
            }],
        }
    }

    /// Number of jobs the matrix expands to
    pub fn len(&self) -> usize {
        self.axes.iter().map(|axis| axis.values.len()).product()
    }

    /// True if some axis has no values
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn render(&self, values: &[&str]) -> String {
        let mut prompt = self.template.clone();
        for (axis, value) in self.axes.iter().zip(values) {
            prompt = prompt.replace(&format!("{{{}}}", axis.name), value);
        }
        for rule in &self.rules {
            if prompt.contains(&rule.when) {
                prompt = prompt.replace(&rule.remove, "");
            }
        }
        prompt
    }

    /// Every combination of axis values, first axis outermost
    ///
    /// A matrix without axes yields the template once, named after nothing.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if an axis has no values or a blank name
    pub fn expand(&self) -> Result<Vec<PromptJob>> {
        for axis in &self.axes {
            if axis.name.trim().is_empty() {
                return Err(invalid_parameter(
                    "axis",
                    &axis.name,
                    &"axis names must not be blank",
                ));
            }
            if axis.values.is_empty() {
                return Err(invalid_parameter(
                    "axis",
                    &axis.name,
                    &"every axis needs at least one value",
                ));
            }
        }

        let mut combinations: Vec<Vec<&str>> = vec![Vec::new()];
        for axis in &self.axes {
            combinations = combinations
                .into_iter()
                .flat_map(|prefix| {
                    axis.values.iter().map(move |value| {
                        let mut next = prefix.clone();
                        next.push(value.as_str());
                        next
                    })
                })
                .collect();
        }

        Ok(combinations
            .iter()
            .map(|values| PromptJob {
                name: values.join("_"),
                prompt: self.render(values),
            })
            .collect())
    }
}
