//! A surface that records draw calls instead of rasterizing them
//!
//! Used by tests and by the native headless run.

use super::Surface;
use super::paint::Paint;
use super::shapes::{ArcShape, Path};

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    FillArc(ArcShape, Paint),
    StrokeArc(ArcShape, Paint, f32),
    FillPath(Path, Paint),
}

/// Collects draw calls since the last `clear`
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
    /// Number of clears seen (one per frame)
    pub frames: u64,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands excluding the frame clear
    pub fn shapes(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| !matches!(c, DrawCommand::Clear))
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
        self.frames += 1;
    }

    fn fill_arc(&mut self, arc: &ArcShape, paint: Paint) {
        self.commands.push(DrawCommand::FillArc(*arc, paint));
    }

    fn stroke_arc(&mut self, arc: &ArcShape, paint: Paint, line_width: f32) {
        self.commands
            .push(DrawCommand::StrokeArc(*arc, paint, line_width));
    }

    fn fill_path(&mut self, path: &Path, paint: Paint) {
        self.commands.push(DrawCommand::FillPath(path.clone(), paint));
    }
}
