use crate::{ThemeColors, rgb};

pub(crate) fn theme() -> ThemeColors {
    ThemeColors {
        background: rgb(0x1e, 0x1e, 0x1e),
        foreground: rgb(0xd4, 0xd4, 0xd4),
        gutter: rgb(0x6e, 0x76, 0x81),
        selection: rgb(0x26, 0x4f, 0x78),
        match_highlight: rgb(0x5a, 0x4a, 0x1f),
        current_match: rgb(0xb5, 0x89, 0x00),
        accent: rgb(0x4f, 0xc1, 0xff),
        muted: rgb(0x85, 0x85, 0x85),
        panel_background: rgb(0x2d, 0x2d, 0x30),
        success: rgb(0x4e, 0xc9, 0x4e),
        warning: rgb(0xd7, 0xba, 0x7d),
        error: rgb(0xf4, 0x47, 0x47),
    }
}
