//! The user's font preferences file and the typed values read out of it
//!
//! Every accessor takes a default which is handed back whenever the property is missing or
//! unusable, so callers always get something they can work with. Unusable values are reported
//! through the parser's [`Diagnostics`] sink


use std::path::{Path, PathBuf};

use crate::diagnostic::{Diagnostic, Diagnostics, TracingDiagnostics};
use crate::fonts::{self, FontSource, SystemFont, SystemFontSource};
use crate::props::PropertyMap;

use anyhow::Context;

pub const FONT_NAME_KEY: &str = "font.name";
pub const FONT_SIZE_KEY: &str = "font.size";
pub const DEFAULT_FILE_NAME: &str = "fontprefs.properties";

/// Where relative config paths are resolved from unless overridden
pub fn default_base_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|config_dir| config_dir.join("fontprefs"))
}

pub struct ConfigParser<D = TracingDiagnostics> {
    props: PropertyMap,
    fonts: Vec<SystemFont>,
    base_dir: Option<PathBuf>,
    diagnostics: D,
}

impl ConfigParser {
    pub fn new<S: FontSource + ?Sized>(font_source: &S) -> Self {
        Self::with_diagnostics(font_source, TracingDiagnostics)
    }

    pub fn with_system_fonts() -> Self {
        Self::new(&SystemFontSource)
    }
}

impl<D: Diagnostics> ConfigParser<D> {
    pub fn with_diagnostics<S: FontSource + ?Sized>(font_source: &S, diagnostics: D) -> Self {
        Self {
            props: PropertyMap::default(),
            fonts: font_source.installed_fonts(),
            base_dir: default_base_dir(),
            diagnostics,
        }
    }

    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    pub fn fonts(&self) -> &[SystemFont] {
        &self.fonts
    }

    pub fn properties(&self) -> &PropertyMap {
        &self.props
    }

    fn resolve_path(&self, path: &Path) -> anyhow::Result<PathBuf> {
        if path.is_absolute() {
            return Ok(path.to_owned());
        }

        let base_dir = self
            .base_dir
            .as_deref()
            .context("Failed to find the configuration directory")?;
        Ok(base_dir.join(path))
    }

    /// Loads the property file at `path`, replacing everything loaded before
    ///
    /// Relative paths are resolved against the base directory. On failure a diagnostic is
    /// reported, `false` is returned, and the previously loaded properties are kept as they were
    pub fn load_config(&mut self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        let loaded = self
            .resolve_path(path)
            .and_then(|full_path| PropertyMap::load_from_file(&full_path));

        match loaded {
            Ok(props) => {
                tracing::debug!(path = %path.display(), count = props.len(), "Loaded config");
                self.props = props;
                true
            }
            Err(err) => {
                self.diagnostics.report(Diagnostic::LoadFailed {
                    path: path.to_owned(),
                    reason: format!("{err:#}"),
                });
                false
            }
        }
    }

    pub fn get_property(&self, key: &str) -> Option<&str> {
        self.props.get(key)
    }

    /// The `font.name` property matched against the reserved and installed font names
    ///
    /// See [`fonts::resolve()`] for how a request is matched
    pub fn get_font_name(&self, default: &str) -> String {
        let Some(requested) = self.get_property(FONT_NAME_KEY) else {
            return default.to_owned();
        };

        let resolution = fonts::resolve(requested, &self.fonts);
        tracing::trace!(requested, ?resolution, "Resolved font.name");
        match resolution.name() {
            Some(name) => name.to_owned(),
            None => {
                self.diagnostics.report(Diagnostic::FontNotFound {
                    requested: requested.to_owned(),
                });
                default.to_owned()
            }
        }
    }

    /// The `font.size` property, which has to be a (32-bit) integer greater than zero
    pub fn get_font_size(&self, default: u32) -> u32 {
        let Some(value) = self.get_property(FONT_SIZE_KEY) else {
            return default;
        };

        let size = value
            .parse::<i32>()
            .ok()
            .and_then(|size| u32::try_from(size).ok())
            .filter(|&size| size > 0);
        size.unwrap_or_else(|| {
            self.diagnostics.report(Diagnostic::InvalidFontSize {
                value: value.to_owned(),
            });
            default
        })
    }

    pub fn get_boolean(&self, property: &str, default: bool) -> bool {
        let Some(value) = self.get_property(property) else {
            return default;
        };

        if value.eq_ignore_ascii_case("true") {
            true
        } else if value.eq_ignore_ascii_case("false") {
            false
        } else {
            self.diagnostics.report(Diagnostic::InvalidBoolean {
                property: property.to_owned(),
                value: value.to_owned(),
            });
            default
        }
    }
}

impl<D> std::fmt::Debug for ConfigParser<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigParser")
            .field("props", &self.props)
            .field("fonts", &self.fonts.len())
            .field("base_dir", &self.base_dir)
            .finish_non_exhaustive()
    }
}
