use crate::fonts::SystemFont;

pub fn font(family: &str, face_name: &str) -> SystemFont {
    SystemFont::new(family, face_name)
}

/// A small stand-in for what a typical desktop has installed
pub fn installed() -> Vec<SystemFont> {
    vec![
        font("Arial", "Arial"),
        font("Arial", "Arial Bold"),
        font("DejaVu Sans Mono", "DejaVu Sans Mono"),
        font("Franklin Gothic Medium", "Franklin Gothic Medium"),
        font("Times New Roman", "Times New Roman Bold"),
        font("Times New Roman", "Times New Roman"),
    ]
}
