use super::SystemFont;

/// Logical font names that are always available no matter what's installed
pub const RESERVED_FONT_NAMES: [&str; 5] =
    ["Serif", "SansSerif", "Dialog", "DialogInput", "Monospaced"];

/// Some fonts name their plain face "Medium", so "Franklin Gothic" should still find
/// "Franklin Gothic Medium"
const PLAIN_FACE_SUFFIX: &str = " medium";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution<'a> {
    Reserved(&'static str),
    Exact(&'a str),
    Partial(&'a str),
    NotFound,
}

impl<'a> Resolution<'a> {
    pub fn name(self) -> Option<&'a str> {
        match self {
            Self::Reserved(name) => Some(name),
            Self::Exact(name) | Self::Partial(name) => Some(name),
            Self::NotFound => None,
        }
    }
}

/// Matches a user typed font `request` to a reserved name or one of the installed `fonts`
///
/// Comparisons ignore case and surrounding whitespace, but the returned name is always spelled
/// the way it was registered. Precedence is:
///
/// 1. A reserved name
/// 2. The first face name that's an exact match for the request (or the request + " Medium")
/// 3. The shortest face name whose "family face" text contains the request. Equal lengths keep
///    the one that was found first. A blank request is contained in everything, so it picks the
///    shortest installed face
pub fn resolve<'a>(request: &str, fonts: &'a [SystemFont]) -> Resolution<'a> {
    // Space and every control char count as trimmable, but NBSP and friends don't
    let search = request.trim_matches(|c: char| c <= ' ').to_lowercase();

    if let Some(reserved) = RESERVED_FONT_NAMES
        .into_iter()
        .find(|reserved| reserved.to_lowercase() == search)
    {
        return Resolution::Reserved(reserved);
    }

    let alt_search = format!("{search}{PLAIN_FACE_SUFFIX}");
    let mut partial: Option<&'a str> = None;
    for font in fonts {
        let face = font.face_name.as_str();
        let folded_face = face.to_lowercase();
        if folded_face == search || folded_face == alt_search {
            return Resolution::Exact(face);
        }

        let haystack = format!("{} {}", font.family, face).to_lowercase();
        if haystack.contains(&search) {
            let is_better = match partial {
                None => true,
                Some(best) => face.chars().count() < best.chars().count(),
            };
            if is_better {
                partial = Some(face);
            }
        }
    }

    partial.map_or(Resolution::NotFound, Resolution::Partial)
}
