//! Installed system fonts and matching user font requests against them

mod resolve;

use std::collections::HashSet;

use fontdb::{FaceInfo, Style, Weight};

pub use self::resolve::{resolve, Resolution, RESERVED_FONT_NAMES};

/// One installed font face as seen through the enumeration collaborator
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SystemFont {
    pub family: String,
    pub face_name: String,
}

impl SystemFont {
    pub fn new(family: impl Into<String>, face_name: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            face_name: face_name.into(),
        }
    }

    fn from_face_info(info: &FaceInfo) -> Option<Self> {
        let (family, _) = info.families.first()?;
        let face_name = face_name(family, info.weight, info.style);
        Some(Self::new(family.as_str(), face_name))
    }
}

/// Something that can list the fonts installed on the system
///
/// Called exactly once per [`ConfigParser`][crate::ConfigParser]
pub trait FontSource {
    fn installed_fonts(&self) -> Vec<SystemFont>;
}

impl FontSource for [SystemFont] {
    fn installed_fonts(&self) -> Vec<SystemFont> {
        self.to_vec()
    }
}

impl FontSource for Vec<SystemFont> {
    fn installed_fonts(&self) -> Vec<SystemFont> {
        self.clone()
    }
}

/// Fonts discovered through `fontdb`'s system font loading
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemFontSource;

impl FontSource for SystemFontSource {
    fn installed_fonts(&self) -> Vec<SystemFont> {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();

        let mut fonts = Vec::new();
        for info in db.faces() {
            match SystemFont::from_face_info(info) {
                Some(font) => fonts.push(font),
                None => tracing::trace!(id = ?info.id, "Skipping face without a family name"),
            }
        }

        let fonts = collate(fonts);
        tracing::debug!(count = fonts.len(), "Enumerated system fonts");
        fonts
    }
}

/// Orders fonts by face name (case-insensitive) and drops exact duplicates
///
/// Font files are commonly installed more than once (e.g. per-user and system-wide), and the
/// order fonts are found on disk isn't stable across machines
fn collate(mut fonts: Vec<SystemFont>) -> Vec<SystemFont> {
    fonts.sort_by_cached_key(|font| font.face_name.to_lowercase());
    let mut seen = HashSet::new();
    fonts.retain(|font| seen.insert(font.clone()));
    fonts
}

fn weight_name(weight: Weight) -> Option<&'static str> {
    let name = match weight.0 {
        0..=149 => "Thin",
        150..=249 => "ExtraLight",
        250..=349 => "Light",
        350..=449 => return None,
        450..=549 => "Medium",
        550..=649 => "SemiBold",
        650..=749 => "Bold",
        750..=849 => "ExtraBold",
        _ => "Black",
    };
    Some(name)
}

fn style_name(style: Style) -> Option<&'static str> {
    match style {
        Style::Normal => None,
        Style::Italic => Some("Italic"),
        Style::Oblique => Some("Oblique"),
    }
}

/// Builds a full face name like "Times New Roman Bold Italic" from the family and its style
///
/// Families that already carry the suffix (e.g. "Franklin Gothic Medium") don't get it twice
fn face_name(family: &str, weight: Weight, style: Style) -> String {
    let mut name = family.to_owned();
    for suffix in [weight_name(weight), style_name(style)].into_iter().flatten() {
        let already_there = name
            .to_lowercase()
            .split_whitespace()
            .any(|word| word == suffix.to_lowercase());
        if !already_there {
            name.push(' ');
            name.push_str(suffix);
        }
    }
    name
}
