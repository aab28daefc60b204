//! Canvas: a surface that records the commands drawn onto it.
//!
//! Hosts with their own drawing backend render onto a `Canvas` and replay
//! [`Canvas::commands`] in order.

use super::{DrawCommand, Surface};
use crate::error::SurfaceError;

#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    commands: Vec<DrawCommand>,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }
}

impl Surface for Canvas {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn draw(&mut self, command: &DrawCommand) -> Result<(), SurfaceError> {
        command.check_finite()?;
        self.commands.push(command.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Point;

    #[test]
    fn test_canvas_records_in_order() {
        let mut c = Canvas::new(10.0, 20.0);
        assert_eq!(c.size(), (10.0, 20.0));
        c.draw(&DrawCommand::Background { paint: "white".into() }).unwrap();
        c.draw(&DrawCommand::Circle {
            center: Point::new(1.0, 2.0),
            radius: 3.0,
            paint: "red".into(),
        })
        .unwrap();
        let names: Vec<&str> = c.commands().iter().map(DrawCommand::name).collect();
        assert_eq!(names, vec!["background", "circle"]);
    }

    #[test]
    fn test_canvas_rejects_non_finite() {
        let mut c = Canvas::new(10.0, 10.0);
        let err = c
            .draw(&DrawCommand::Ring {
                center: Point::default(),
                radius: f64::INFINITY,
                paint: "black".into(),
                thickness: 1.0,
            })
            .unwrap_err();
        assert_eq!(err, SurfaceError::NonFinite("ring"));
        assert!(c.into_commands().is_empty());
    }
}
