//! Colors command handler.

use stylemate_core::Color;

/// Print the palette accepted by `add --color`.
pub fn execute() {
    for color in Color::PALETTE {
        println!("{:<12} {}", color.as_str(), color.hex().unwrap_or("(multi)"));
    }
}
