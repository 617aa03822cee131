use bevy::math::Vec3;

pub const STAR_COUNT: usize = 1600;

/// Edge length of the cube stars are scattered in, centred on the origin.
pub const STAR_SPREAD: f32 = 400.0;
pub const STAR_RADIUS: f32 = 0.25;
pub const STAR_SEGMENTS: u32 = 24;
pub const STAR_COLOUR: &str = "#ffffff";

/// Backdrop sphere encloses the star cube's corners on the ground plane.
pub const BACKDROP_RADIUS: f32 = std::f32::consts::SQRT_2 * STAR_SPREAD;
pub const BACKDROP_SEGMENTS: u32 = 100;

pub const TORUS_MAJOR_RADIUS: f32 = 10.0;
pub const TORUS_TUBE_RADIUS: f32 = 3.0;
pub const TORUS_MAJOR_SEGMENTS: usize = 100;
pub const TORUS_MINOR_SEGMENTS: usize = 16;
pub const TORUS_COLOUR: &str = "#ff6347";

/// Radians added per frame about X, Y and Z.
pub const TORUS_SPIN_PER_FRAME: Vec3 = Vec3::new(0.01, 0.005, 0.01);

pub const ROCKET_COLOUR: &str = "#3399cc";
pub const ROCKET_YAW: f32 = -std::f32::consts::FRAC_PI_4;

pub const WELCOME_TEXT: &str = "Joshua";
pub const WELCOME_TEXT_POSITION: Vec3 = Vec3::new(30.0, 0.0, -30.0);
pub const WELCOME_TEXT_YAW: f32 = -std::f32::consts::FRAC_PI_2;
pub const WELCOME_TEXT_SIZE: f32 = 10.0;
pub const WELCOME_TEXT_COLOUR: &str = "#696969";

/// Offscreen texture each text label is drawn into. The width grows with
/// the text up to `LABEL_TEXTURE_MAX_WIDTH`.
pub const LABEL_TEXTURE_WIDTH: u32 = 1024;
pub const LABEL_TEXTURE_MAX_WIDTH: u32 = 4096;
pub const LABEL_TEXTURE_HEIGHT: u32 = 256;
pub const LABEL_FONT_PIXELS: f32 = 160.0;
/// Upper estimate of a bold glyph's advance, as a share of the font size.
pub const LABEL_GLYPH_ADVANCE: f32 = 0.7;

pub const SCROLL_PROMPT_TEXT: &str = "Scroll To Launch";
