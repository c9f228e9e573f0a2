use crate::theme::ThemeId;
use ratatui::style::Color;

/// Colours for one calculator theme
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub keypad: Color,
    pub screen: Color,
    pub screen_text: Color,
    pub key: Color,
    pub key_text: Color,
    /// DEL and RESET
    pub function_key: Color,
    pub function_key_text: Color,
    pub equals_key: Color,
    pub equals_key_text: Color,
    pub dimmed: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Palette::for_theme(ThemeId::Theme1)
    }
}

impl Palette {
    pub fn for_theme(theme: ThemeId) -> Self {
        match theme {
            ThemeId::Theme1 => Self::slate(),
            ThemeId::Theme2 => Self::paper(),
            ThemeId::Theme3 => Self::violet(),
        }
    }

    /// Desaturated dark blue
    pub fn slate() -> Self {
        Self {
            background: Color::Rgb(58, 71, 100),         // #3A4764
            keypad: Color::Rgb(35, 44, 67),              // #232C43
            screen: Color::Rgb(24, 32, 52),              // #182034
            screen_text: Color::Rgb(255, 255, 255),      // #FFFFFF
            key: Color::Rgb(234, 227, 220),              // #EAE3DC
            key_text: Color::Rgb(68, 75, 90),            // #444B5A
            function_key: Color::Rgb(99, 112, 151),      // #637097
            function_key_text: Color::Rgb(255, 255, 255), // #FFFFFF
            equals_key: Color::Rgb(208, 63, 47),         // #D03F2F
            equals_key_text: Color::Rgb(255, 255, 255),  // #FFFFFF
            dimmed: Color::Rgb(160, 170, 195),           // #A0AAC3
        }
    }

    /// Light grey
    pub fn paper() -> Self {
        Self {
            background: Color::Rgb(230, 230, 230),       // #E6E6E6
            keypad: Color::Rgb(209, 204, 204),           // #D1CCCC
            screen: Color::Rgb(238, 238, 238),           // #EEEEEE
            screen_text: Color::Rgb(53, 53, 44),         // #35352C
            key: Color::Rgb(229, 228, 224),              // #E5E4E0
            key_text: Color::Rgb(53, 53, 44),            // #35352C
            function_key: Color::Rgb(55, 127, 134),      // #377F86
            function_key_text: Color::Rgb(255, 255, 255), // #FFFFFF
            equals_key: Color::Rgb(200, 84, 2),          // #C85402
            equals_key_text: Color::Rgb(255, 255, 255),  // #FFFFFF
            dimmed: Color::Rgb(120, 120, 110),           // #78786E
        }
    }

    /// Very dark violet
    pub fn violet() -> Self {
        Self {
            background: Color::Rgb(23, 6, 42),           // #17062A
            keypad: Color::Rgb(30, 8, 54),               // #1E0836
            screen: Color::Rgb(30, 8, 54),               // #1E0836
            screen_text: Color::Rgb(255, 229, 61),       // #FFE53D
            key: Color::Rgb(51, 27, 77),                 // #331B4D
            key_text: Color::Rgb(255, 229, 61),          // #FFE53D
            function_key: Color::Rgb(86, 7, 124),        // #56077C
            function_key_text: Color::Rgb(255, 255, 255), // #FFFFFF
            equals_key: Color::Rgb(0, 224, 209),         // #00E0D1
            equals_key_text: Color::Rgb(26, 35, 39),     // #1A2327
            dimmed: Color::Rgb(150, 120, 180),           // #9678B4
        }
    }
}
