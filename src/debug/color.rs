/// A RGBA color with components in `[0, 1]`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Color {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
    /// Alpha (opacity) component.
    pub a: f32,
}

impl Color {
    /// Opaque black, used for separating axes.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    /// Opaque blue, the default outline color of a drawn polygon.
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);

    /// Creates a color from its four components.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Color { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLUE
    }
}
