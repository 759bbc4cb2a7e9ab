//! Viewer extension points.
//!
//! The surrounding UI lets plugins add entries to a fact's display menu and
//! rewrite the tagged document before it is rendered. Extensions are plain
//! capability traits registered up front and invoked at fixed points; the
//! report/fact query surface they see is the same one the UI uses.

use crate::fact::Fact;

/// One entry contributed to a fact's context menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
    /// Opaque action identifier dispatched back to the extension's host.
    pub action: String,
}

/// Contributes entries to the display menu shown for a fact.
pub trait DisplayMenuExtension {
    fn menu_items(&self, fact: &Fact<'_>) -> Vec<MenuItem>;
}

/// Rewrites the tagged document before rendering.
pub trait DocumentPreprocessor {
    fn preprocess(&self, html: &mut String);
}

#[derive(Default)]
pub struct ExtensionRegistry {
    menu_extensions: Vec<Box<dyn DisplayMenuExtension>>,
    preprocessors: Vec<Box<dyn DocumentPreprocessor>>,
}

impl ExtensionRegistry {
    pub fn new() -> ExtensionRegistry {
        ExtensionRegistry::default()
    }

    pub fn register_menu_extension(&mut self, ext: Box<dyn DisplayMenuExtension>) {
        self.menu_extensions.push(ext);
    }

    pub fn register_preprocessor(&mut self, pre: Box<dyn DocumentPreprocessor>) {
        self.preprocessors.push(pre);
    }

    /// Menu items contributed by all registered extensions, in registration
    /// order.
    pub fn menu_items(&self, fact: &Fact<'_>) -> Vec<MenuItem> {
        self.menu_extensions
            .iter()
            .flat_map(|e| e.menu_items(fact))
            .collect()
    }

    /// Runs every registered preprocessor over the document, in registration
    /// order.
    pub fn preprocess(&self, html: &mut String) {
        for pre in &self.preprocessors {
            pre.preprocess(html);
        }
    }
}
