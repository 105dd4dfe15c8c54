//! Step descriptor types shared by explicit configuration and discovered children

use serde::{Deserialize, Serialize};

use super::{StepStatus, StepValue};

/// One step's configuration.
///
/// Only `value`, `status` and `icon` participate in status resolution; the
/// remaining fields are display payload passed through to the renderer
/// untouched. The resolver reads descriptors and never mutates them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepDescriptor {
    /// Declared identifier used for identifier-based current matching
    pub value: Option<StepValue>,
    /// Explicit status override; `default` means "compute it"
    pub status: StepStatus,
    /// Icon name; its mere presence demotes the sequence theme
    pub icon: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub extra: Option<String>,
}

impl StepDescriptor {
    pub fn titled(title: impl Into<String>) -> Self {
        StepDescriptor {
            title: Some(title.into()),
            ..StepDescriptor::default()
        }
    }

    pub fn with_value(mut self, value: impl Into<StepValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_status(mut self, status: StepStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// A step discovered from the component tree rather than declared in the
/// configuration list.
///
/// The discovery service hands back a structured record: the attributes
/// declared directly on the child node, plus whichever recognized step fields
/// its nested content carried.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveredStep {
    /// Attributes declared on the child node itself
    pub attrs: StepDescriptor,
    /// Recognized step fields found in the child's nested content
    pub nested: StepDescriptor,
}

impl DiscoveredStep {
    pub fn from_attrs(attrs: StepDescriptor) -> Self {
        DiscoveredStep {
            attrs,
            ..DiscoveredStep::default()
        }
    }

    /// Collapse into a single descriptor. Declared attributes win; nested
    /// content only backfills fields the attributes left unset.
    pub fn into_descriptor(self) -> StepDescriptor {
        let DiscoveredStep { attrs, nested } = self;
        StepDescriptor {
            value: attrs.value.or(nested.value),
            status: if attrs.status.is_override() {
                attrs.status
            } else {
                nested.status
            },
            icon: attrs.icon.or(nested.icon),
            title: attrs.title.or(nested.title),
            content: attrs.content.or(nested.content),
            extra: attrs.extra.or(nested.extra),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attrs_win_over_nested_content() {
        let discovered = DiscoveredStep {
            attrs: StepDescriptor::titled("declared").with_value("a"),
            nested: StepDescriptor::titled("nested")
                .with_value("b")
                .with_icon("check"),
        };
        let step = discovered.into_descriptor();
        assert_eq!(step.title.as_deref(), Some("declared"));
        assert_eq!(step.value, Some(StepValue::from("a")));
        // icon was not declared as an attribute, so nested content backfills it
        assert_eq!(step.icon.as_deref(), Some("check"));
    }

    #[test]
    fn test_nested_status_backfills_default_only() {
        let discovered = DiscoveredStep {
            attrs: StepDescriptor::default(),
            nested: StepDescriptor::default().with_status(StepStatus::Error),
        };
        assert_eq!(discovered.into_descriptor().status, StepStatus::Error);

        let discovered = DiscoveredStep {
            attrs: StepDescriptor::default().with_status(StepStatus::Finish),
            nested: StepDescriptor::default().with_status(StepStatus::Error),
        };
        assert_eq!(discovered.into_descriptor().status, StepStatus::Finish);
    }

    #[test]
    fn test_descriptor_deserializes_with_defaults() {
        let step: StepDescriptor = serde_json::from_str(r#"{"title": "Plan"}"#).unwrap();
        assert_eq!(step.title.as_deref(), Some("Plan"));
        assert_eq!(step.status, StepStatus::Default);
        assert!(step.value.is_none());
    }

    #[test]
    fn test_descriptor_value_types_survive_deserialization() {
        let numeric: StepDescriptor = serde_json::from_str(r#"{"value": 2}"#).unwrap();
        assert_eq!(numeric.value, Some(StepValue::Int(2)));
        let text: StepDescriptor = serde_json::from_str(r#"{"value": "2"}"#).unwrap();
        assert_eq!(text.value, Some(StepValue::from("2")));
        assert_ne!(numeric.value, text.value);
    }
}
