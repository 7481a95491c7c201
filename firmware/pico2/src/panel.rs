//! SSD1306 128x64 OLED on I2C0, as a [`Panel`].

use display_interface::DisplayError;
use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C0;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use meter_display_common::Panel;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};

pub type OledBus = I2c<'static, I2C0, Blocking>;

type Driver = Ssd1306<I2CInterface<OledBus>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Buffered OLED driver. Draws land in RAM until [`Panel::commit`] flushes.
pub struct OledPanel {
    display: Driver,
}

impl OledPanel {
    pub fn new(
        bus: OledBus,
        address: u8,
    ) -> Self {
        let interface = I2CDisplayInterface::new_custom_address(bus, address);
        let display =
            Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0).into_buffered_graphics_mode();
        Self { display }
    }
}

impl OriginDimensions for OledPanel {
    fn size(&self) -> Size { self.display.size() }
}

impl DrawTarget for OledPanel {
    type Color = BinaryColor;
    type Error = DisplayError;

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

    fn clear(
        &mut self,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        self.display.clear(color)
    }
}

impl Panel for OledPanel {
    fn init(&mut self) -> Result<(), Self::Error> { self.display.init() }

    fn commit(&mut self) -> Result<(), Self::Error> { self.display.flush() }
}
