// File: crates/sheet-core/src/theme.rs
// Summary: Color presets for the rendering collaborator.

/// Plain RGBA color; alpha 0 is fully transparent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Named color set for sheet rendering. The renderer is external; these
/// are plain values with no backend dependency.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    /// 50mm gridlines.
    pub grid_major: Rgba,
    /// 10mm gridlines.
    pub grid_minor: Rgba,
    pub tick_line: Rgba,
    pub axis_line: Rgba,
    pub axis_label: Rgba,
    pub tick_label: Rgba,
    pub point: Rgba,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::new(18, 18, 26, 255),
            grid_major: Rgba::new(149, 150, 206, 51),
            grid_minor: Rgba::new(185, 186, 222, 26),
            tick_line: Rgba::new(121, 120, 155, 74),
            axis_line: Rgba::new(255, 255, 255, 128),
            axis_label: Rgba::new(228, 231, 241, 255),
            tick_label: Rgba::new(160, 168, 192, 255),
            point: Rgba::new(64, 160, 255, 255),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::new(250, 250, 252, 255),
            grid_major: Rgba::new(90, 92, 160, 64),
            grid_minor: Rgba::new(120, 122, 180, 32),
            tick_line: Rgba::new(121, 120, 155, 90),
            axis_line: Rgba::new(40, 40, 50, 160),
            axis_label: Rgba::new(20, 20, 30, 255),
            tick_label: Rgba::new(90, 98, 120, 255),
            point: Rgba::new(32, 120, 200, 255),
        }
    }
}

/// Return the built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::dark()
}
