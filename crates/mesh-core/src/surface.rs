use glam::Vec2;

/// A minimal immediate-mode 2D drawing surface. The web frontend backs this
/// with a canvas context; tests record the calls instead.
pub trait Surface {
    /// Wipe the whole surface.
    fn clear(&mut self, width: f32, height: f32);
    /// Stroke a single line segment at the given alpha.
    fn line(&mut self, from: Vec2, to: Vec2, alpha: f32);
    /// Fill a circle at the given alpha.
    fn circle(&mut self, center: Vec2, radius: f32, alpha: f32);
}
