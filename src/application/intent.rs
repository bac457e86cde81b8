use macroquad::math::Vec2;

/// Abstract control requests, independent of the device that produced them.
/// Screen positions are in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intent {
    TogglePause,
    /// Advance one generation now, paused or not
    StepOnce,
    /// Shorten the step interval
    Faster,
    /// Lengthen the step interval
    Slower,
    /// Empty grid, generation 0, paused, default interval and camera
    Reset,
    PanStart,
    PanMove(Vec2),
    PanEnd,
    Zoom { anchor: Vec2, wheel: f32 },
    PaintBegin(Vec2),
    PaintMove(Vec2),
    PaintEnd,
    /// Random soup around the view center
    Randomize,
    /// Stamp preset `index` centered on the cell under `at`
    StampPattern { index: usize, at: Vec2 },
}
