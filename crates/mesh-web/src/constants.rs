// DOM anchors and frontend tuning.

pub const CANVAS_ID: &str = "mesh-canvas";
pub const MENU_ID: &str = "side-menu";
pub const MENU_TOGGLE_ID: &str = "menu-toggle";
pub const PAUSE_BUTTON_ID: &str = "mesh-pause";

pub const MENU_WIDTH_PX: f32 = 320.0;
pub const MOBILE_BREAKPOINT_PX: f32 = 820.0; // below this the animator never starts

// Mesh palette
pub const EDGE_COLOR: &str = "#8a93a5";
pub const POINT_COLOR: &str = "#aab3c5";
pub const EDGE_WIDTH: f64 = 1.0;
