use crate::{ThemeColors, rgb};

pub(crate) fn theme() -> ThemeColors {
    ThemeColors {
        background: rgb(0xfa, 0xfa, 0xfa),
        foreground: rgb(0x21, 0x25, 0x29),
        gutter: rgb(0x9a, 0xa0, 0xa6),
        selection: rgb(0xbb, 0xd6, 0xfb),
        match_highlight: rgb(0xff, 0xe8, 0x9a),
        current_match: rgb(0xff, 0xb7, 0x4d),
        accent: rgb(0x1a, 0x73, 0xe8),
        muted: rgb(0x80, 0x86, 0x8b),
        panel_background: rgb(0xee, 0xef, 0xf1),
        success: rgb(0x28, 0xa7, 0x45),
        warning: rgb(0xf0, 0xad, 0x4e),
        error: rgb(0xd9, 0x34, 0x2d),
    }
}
