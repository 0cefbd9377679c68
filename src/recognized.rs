//! Recognized decorator-name sets.
//!
//! Which decorators make a define a property, a class-level property, or a
//! classmethod is project configuration, not language semantics.  The sets
//! are injected into the define/class services by the caller; the defaults
//! cover the standard library plus the conventional utility spellings.

use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct RecognizedNames {
    /// Decorators that expose an instance-level property.
    pub property_decorators: HashSet<String>,
    /// Decorators that expose a class-level property; the derived attribute
    /// annotation is wrapped in `typing.ClassVar[…]`.
    pub class_property_decorators: HashSet<String>,
    /// Decorators that make a define a classmethod.
    pub classmethod_decorators: HashSet<String>,
}

fn name_set(names: &[&str]) -> HashSet<String> {
    names.iter().map(|name| name.to_string()).collect()
}

impl Default for RecognizedNames {
    fn default() -> Self {
        Self {
            property_decorators: name_set(&[
                "property",
                "abstractproperty",
                "abc.abstractproperty",
                "functools.cached_property",
            ]),
            class_property_decorators: name_set(&[
                "classproperty",
                "util.classproperty",
                "util.etc.class_property",
                "util.etc.cached_classproperty",
            ]),
            classmethod_decorators: name_set(&["classmethod"]),
        }
    }
}
