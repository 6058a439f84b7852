//! Colour conversion between Bevy and egui

use bevy::color::{Color, ColorToPacked};
use bevy_egui::egui;

/// sRGB colour with straight alpha, as egui expects it
pub fn to_color32(color: Color) -> egui::Color32 {
    let [r, g, b, a] = color.to_srgba().to_u8_array();
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}
