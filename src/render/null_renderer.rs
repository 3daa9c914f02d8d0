use crate::error::ChartResult;
use crate::render::{DrawCommand, RenderFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content so tests can catch invalid geometry
/// without a real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_line_count: usize,
    pub last_path_count: usize,
    pub last_circle_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        let (mut lines, mut paths, mut circles, mut texts) = (0, 0, 0, 0);
        for command in &frame.commands {
            match command {
                DrawCommand::Line(_) => lines += 1,
                DrawCommand::Path(_) => paths += 1,
                DrawCommand::Circle(_) => circles += 1,
                DrawCommand::Text(_) => texts += 1,
            }
        }
        self.frames_rendered += 1;
        self.last_line_count = lines;
        self.last_path_count = paths;
        self.last_circle_count = circles;
        self.last_text_count = texts;
        Ok(())
    }
}
