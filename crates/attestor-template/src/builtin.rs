//! Templates bundled into the binary.

/// The template documents compiled in from `templates/`.
pub(crate) const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    ("VerifiableId", include_str!("../templates/VerifiableId.json")),
    (
        "VerifiableDiploma",
        include_str!("../templates/VerifiableDiploma.json"),
    ),
];

/// Look up a bundled template body by name.
pub(crate) fn lookup(name: &str) -> Option<&'static str> {
    BUILTIN_TEMPLATES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, body)| *body)
}

/// The names of all bundled templates.
pub(crate) fn names() -> impl Iterator<Item = &'static str> {
    BUILTIN_TEMPLATES.iter().map(|(n, _)| *n)
}
