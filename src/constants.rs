// DOM wiring used by the web frontend.

// Element ids looked up when the host page does not pass its own
pub const DEFAULT_CONTAINER_ID: &str = "orbit-view";
pub const DEFAULT_CAPTION_ID: &str = "orbit-caption";

// Class toggled on the caption element while nothing is hovered
pub const HIDDEN_CLASS: &str = "hidden";

// Floats per entity in the instance buffer handed to the frame callback
pub const INSTANCE_STRIDE: usize = 10;
// Floats per edge in `edge_buffer` (start xyz, end xyz)
pub const EDGE_STRIDE: usize = 6;
