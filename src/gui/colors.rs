use eframe::egui::Color32;

/// Wordmark palette, cycled per letter (blue, red, yellow, blue, green, red).
pub const LOGO_PALETTE: [Color32; 6] = [
    Color32::from_rgb(66, 133, 244),
    Color32::from_rgb(234, 67, 53),
    Color32::from_rgb(251, 188, 5),
    Color32::from_rgb(66, 133, 244),
    Color32::from_rgb(52, 168, 83),
    Color32::from_rgb(234, 67, 53),
];

/// Colour for the `index`-th wordmark letter.
pub fn logo_color(index: usize) -> Color32 {
    LOGO_PALETTE[index % LOGO_PALETTE.len()]
}

/// Flat light fill for the two activation buttons.
pub const BUTTON_FILL: Color32 = Color32::from_rgb(0xf8, 0xf9, 0xfa);
