//! Instruction strings sent to the model, one per agent capability.

use serde::{Deserialize, Serialize};

/// Instruction for the component-identification vision call.
pub const IDENTIFY_COMPONENT: &str = "Identify this electronic component. Describe its function, \
     common use cases in DIY electronics, and any key specifications a hobbyist should know \
     (like operating voltage). Generate a potential pinout diagram in a markdown table if it's \
     a common IC. Provide the information in a clear, well-formatted markdown.";

/// Instruction for the wiring-analysis vision call, including the GPIO
/// header reference the model cross-checks connections against.
pub const ANNOTATE_WIRING: &str = "Analyze this wiring diagram or breadboard layout for a DIY \
electronics project involving a Flipper Zero.

First, identify the main components in the image.

Then, cross-reference the wiring with the Flipper Zero's capabilities. Here is the Flipper Zero \
GPIO pinout for your reference:
- Left Header: 1(5V), 2(3V3), 3(PA7), 4(PA6), 5(PA4), 6(PB3), 7(PB2), 8(GND), 9(GND).
- Right Header: 10(PC3), 11(PC1), 12(PC0), 13(PB8 UART TX), 14(PB9 UART RX), 15(PC6), 16(NRST), \
17(GND), 18(5V_SW).
- Important: The GPIO pins are 3.3V tolerant. Connecting them to 5V will damage the Flipper Zero.

Provide detailed feedback on the wiring, pointing out potential issues such as:
- Short circuits or incorrect connections.
- Missing pull-up/pull-down resistors where needed.
- Incorrect pin usage (e.g., using a power pin for data).
- Voltage mismatches (e.g., connecting a 5V component signal to a 3.3V Flipper pin).

If the current configuration is suboptimal or risky, suggest specific alternative wiring \
configurations that are safer or more efficient.

Finally, describe what annotations you would add to the image if you could. For example: \"I \
would draw a red circle around the incorrect 5V connection to pin PA7 and add a text label \
suggesting a voltage divider.\"

Format your entire response in well-structured markdown.";

/// System instruction for pinout Q&A.
pub const PINOUT_SYSTEM: &str = "You are a Flipper Zero GPIO expert. You have the official \
pinout information memorized. When asked, you provide clear, accurate information about the \
GPIO pins. If asked for a diagram, you will generate a markdown table representing the GPIO \
header. The Flipper Zero has two 9-pin headers.
Left Header: 1(5V), 2(3V3), 3(PA7), 4(PA6), 5(PA4), 6(PB3), 7(PB2), 8(GND), 9(GND).
Right Header: 10(PC3), 11(PC1), 12(PC0), 13(PB8 UART TX), 14(PB9 UART RX), 15(PC6), 16(NRST), \
17(GND), 18(5V_SW).
Provide details on what each pin's function is (e.g., UART, I2C, SPI, power).";

/// System instruction for the simulated hardware scans.
pub const SCAN_SYSTEM: &str = "You are a Flipper Zero hardware simulator. You generate \
realistic-looking outputs for various hardware scanning functions.";

/// Builds the grounded-search prompt for a datasheet lookup.
pub fn datasheet_prompt(component: &str) -> String {
    format!(
        "Find the datasheet for the component \"{component}\". Provide a brief summary of the \
         component's key features from the datasheet and list any web links found. Suggest a \
         simple wiring example for a Flipper Zero if applicable."
    )
}

/// The four simulated hardware scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanKind {
    Bluetooth,
    Nfc,
    Wifi,
    Uart,
}

impl ScanKind {
    pub const ALL: [ScanKind; 4] = [
        ScanKind::Bluetooth,
        ScanKind::Nfc,
        ScanKind::Wifi,
        ScanKind::Uart,
    ];

    /// Lowercase label used in user-facing messages.
    pub fn label(self) -> &'static str {
        match self {
            ScanKind::Bluetooth => "bluetooth",
            ScanKind::Nfc => "nfc",
            ScanKind::Wifi => "wifi",
            ScanKind::Uart => "uart",
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            ScanKind::Bluetooth => {
                "Simulate a Bluetooth Low Energy (BLE) scan. Generate a list of 3-5 plausible \
                 nearby devices with their MAC addresses, signal strength (RSSI), and any \
                 advertised services (e.g., 'Heart Rate Monitor', 'Fitness Band'). Format as a \
                 markdown list."
            }
            ScanKind::Nfc => {
                "Simulate scanning an NFC tag. Describe the tag type (e.g., NTAG215), its UID, \
                 and any data stored on it, like a URL or contact info (a VCard). Format as a \
                 markdown description."
            }
            ScanKind::Wifi => {
                "Simulate a WiFi network scan. Generate a list of 5-7 nearby WiFi networks with \
                 plausible SSIDs, signal strength (RSSI), security type (e.g., WPA2, WPA3), and \
                 channel number. Format as a markdown table."
            }
            ScanKind::Uart => {
                "Simulate listening on a serial UART connection. Generate a few lines of \
                 plausible data that might be coming from a connected device like an Arduino or \
                 GPS module. Include some raw text and maybe some sensor readings."
            }
        }
    }
}
