//! Heading layouts shared by the integration tests.

/// `h2 Intro`, `h3 Setup`, `h4 Details`, `h3 Usage`, `h2 Reference`.
///
/// Containers: 0 Intro, 1 Setup, 2 Details, 3 Usage, 4 Reference.
pub fn article() -> Vec<(&'static str, &'static str, f64)> {
    vec![
        ("h2", "Intro", 0.0),
        ("h3", "Setup", 400.0),
        ("h4", "Details", 800.0),
        ("h3", "Usage", 1200.0),
        ("h2", "Reference", 2000.0),
    ]
}

/// `h2 Intro` followed directly by `h4 Deep`: containers 0 Intro, 1 (h3), 2 Deep.
pub fn skipped_level() -> Vec<(&'static str, &'static str, f64)> {
    vec![("h2", "Intro", 0.0), ("h4", "Deep", 500.0)]
}

/// The positions of the scroll-resolution scenario: 0, 500, 1200.
pub fn three_sections() -> Vec<(&'static str, &'static str, f64)> {
    vec![("h2", "One", 0.0), ("h2", "Two", 500.0), ("h2", "Three", 1200.0)]
}
