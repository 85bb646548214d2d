use crate::core::carousel::Carousel;
use crate::core::options::NavigatorOptions;
use crate::core::panel::Panel;
use serde::Deserialize;
use std::fmt;

/// Declarative wizard definition. The YAML document lists the panels in
/// order, each with a display title, body text, and an optional `active`
/// flag marking the initial panel (conventionally the first).
///
/// ```yaml
/// labels:
///   finish: Done
/// panels:
///   - title: step 1
///     active: true
///     body:
///       - Your content
///   - title: step 2
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct WizardDefinition {
    #[serde(default)]
    pub labels: Labels,
    pub panels: Vec<PanelDef>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Labels {
    pub previous: Option<String>,
    pub next: Option<String>,
    pub finish: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PanelDef {
    pub title: String,
    #[serde(default)]
    pub body: Vec<String>,
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug)]
pub enum DefinitionError {
    Parse(serde_yaml::Error),
    NoPanels,
}

impl fmt::Display for DefinitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefinitionError::Parse(err) => write!(f, "invalid wizard definition: {err}"),
            DefinitionError::NoPanels => write!(f, "wizard definition has no panels"),
        }
    }
}

impl std::error::Error for DefinitionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DefinitionError::Parse(err) => Some(err),
            DefinitionError::NoPanels => None,
        }
    }
}

impl From<serde_yaml::Error> for DefinitionError {
    fn from(err: serde_yaml::Error) -> Self {
        DefinitionError::Parse(err)
    }
}

impl WizardDefinition {
    pub fn from_yaml(input: &str) -> Result<Self, DefinitionError> {
        let definition: Self = serde_yaml::from_str(input)?;
        if definition.panels.is_empty() {
            return Err(DefinitionError::NoPanels);
        }
        Ok(definition)
    }

    pub fn options(&self) -> NavigatorOptions {
        let mut options = NavigatorOptions::default();
        if let Some(text) = &self.labels.previous {
            options.previous_text = text.clone();
        }
        if let Some(text) = &self.labels.next {
            options.next_text = text.clone();
        }
        if let Some(text) = &self.labels.finish {
            options.finish_text = text.clone();
        }
        options
    }

    /// The first panel marked active becomes the initial panel; without one
    /// the carousel starts at index 0.
    pub fn into_carousel(self) -> Carousel {
        let initial = self.panels.iter().position(|p| p.active).unwrap_or(0);
        let panels = self
            .panels
            .into_iter()
            .map(|def| Panel {
                title: def.title,
                body: def.body,
            })
            .collect();
        Carousel::new(panels).with_active(initial)
    }

    pub fn into_navigator_parts(self) -> (Carousel, NavigatorOptions) {
        let options = self.options();
        (self.into_carousel(), options)
    }
}
