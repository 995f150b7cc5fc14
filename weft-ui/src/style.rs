//! Opaque styling descriptors consumed by navigation chrome.
//!
//! The full styling system lives outside this crate; these value objects
//! are the narrow slice of it that chrome configuration carries through to
//! hosts.

use std::sync::Arc;

use crate::{color::Color, dp::Dp};

/// Weight and emphasis of rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontStyle {
    /// Regular weight.
    #[default]
    Regular,
    /// Medium weight.
    Medium,
    /// Bold weight.
    Bold,
    /// Italic style.
    Italic,
}

/// Platform-neutral text styling.
///
/// Every field is optional; absent fields leave the platform default in
/// place.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextStyle {
    /// Text color.
    pub color: Option<Color>,
    /// Text size.
    pub size: Option<Dp>,
    /// Font weight / emphasis.
    pub font_style: Option<FontStyle>,
}

impl TextStyle {
    /// Text style carrying only a color.
    pub fn colored(color: Color) -> Self {
        Self {
            color: Some(color),
            ..Self::default()
        }
    }
}

/// Opaque handle naming a platform image asset.
///
/// The navigation core never decodes images; it forwards the handle to the
/// host, which resolves it against the platform's asset catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageResource {
    id: Arc<str>,
}

impl ImageResource {
    /// Creates a handle for the asset named `id`.
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self { id: id.into() }
    }

    /// The asset identifier.
    pub fn id(&self) -> &str {
        &self.id
    }
}
