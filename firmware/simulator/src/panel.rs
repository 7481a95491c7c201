//! Simulated SSD1306: a 128x64 monochrome buffer shown in an SDL window.

use std::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::{SimulatorDisplay, SimulatorEvent, Window};
use meter_display_common::Panel;
use meter_display_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

pub struct SimPanel {
    display: SimulatorDisplay<BinaryColor>,
    window: Window,
}

impl SimPanel {
    pub fn new(window: Window) -> Self {
        Self {
            display: SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)),
            window,
        }
    }

    /// Pending window events. Only valid once the panel has been initialized.
    pub fn events(&mut self) -> impl Iterator<Item = SimulatorEvent> + '_ { self.window.events() }
}

impl OriginDimensions for SimPanel {
    fn size(&self) -> Size { self.display.size() }
}

impl DrawTarget for SimPanel {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.display.draw_iter(pixels)
    }

    fn fill_solid(
        &mut self,
        area: &Rectangle,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        self.display.fill_solid(area, color)
    }
}

impl Panel for SimPanel {
    /// Opens the window.
    fn init(&mut self) -> Result<(), Self::Error> {
        self.display.clear(BinaryColor::Off)?;
        self.window.update(&self.display);
        Ok(())
    }

    fn commit(&mut self) -> Result<(), Self::Error> {
        self.window.update(&self.display);
        Ok(())
    }
}
