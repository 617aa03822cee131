/// Scene manifest describing the world content.
pub const SCENE_MANIFEST_PATH: &str = "world.scene.json";

pub const BACKDROP_TEXTURE_PATH: &str = "space.jpg";
pub const LABEL_FONT_PATH: &str = "fonts/helvetiker_bold.ttf";
pub const ROCKET_MODEL_PATH: &str = "rocket.glb";
