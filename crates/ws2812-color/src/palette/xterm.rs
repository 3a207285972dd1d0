//! The xterm 256-color palette under its conventional names.
//!
//! The conventional name list reuses names for different cells (there are
//! three `Purple`s and two `Blue3`s, for example). A constant whose name is
//! shared carries the xterm index as a suffix: [`BLUE3_19`] is cell 19 and
//! [`BLUE3_20`] is cell 20. Names that occur once keep the bare form.
//! [`from_name`] resolves a shared name to its lowest index.
//!
//! Cell 139 is called `Grey63` even though it is `#AF87AF`; the name is kept
//! as xterm users know it.

use crate::Color;

named_colors! {
    /// All 256 cells in index order, with their conventional names.
    TABLE;
    // 0..=15: system colors
    BLACK               => "Black",             0x000000;
    MAROON              => "Maroon",            0x800000;
    GREEN               => "Green",             0x008000;
    OLIVE               => "Olive",             0x808000;
    NAVY                => "Navy",              0x000080;
    PURPLE_5            => "Purple",            0x800080;
    TEAL                => "Teal",              0x008080;
    SILVER              => "Silver",            0xc0c0c0;
    GREY                => "Grey",              0x808080;
    RED                 => "Red",               0xff0000;
    LIME                => "Lime",              0x00ff00;
    YELLOW              => "Yellow",            0xffff00;
    BLUE                => "Blue",              0x0000ff;
    FUCHSIA             => "Fuchsia",           0xff00ff;
    AQUA                => "Aqua",              0x00ffff;
    WHITE               => "White",             0xffffff;
    // 16..=231: 6x6x6 color cube
    GREY0               => "Grey0",             0x000000;
    NAVYBLUE            => "NavyBlue",          0x00005f;
    DARKBLUE            => "DarkBlue",          0x000087;
    BLUE3_19            => "Blue3",             0x0000af;
    BLUE3_20            => "Blue3",             0x0000d7;
    BLUE1               => "Blue1",             0x0000ff;
    DARKGREEN           => "DarkGreen",         0x005f00;
    DEEPSKYBLUE4_23     => "DeepSkyBlue4",      0x005f5f;
    DEEPSKYBLUE4_24     => "DeepSkyBlue4",      0x005f87;
    DEEPSKYBLUE4_25     => "DeepSkyBlue4",      0x005faf;
    DODGERBLUE3         => "DodgerBlue3",       0x005fd7;
    DODGERBLUE2         => "DodgerBlue2",       0x005fff;
    GREEN4              => "Green4",            0x008700;
    SPRINGGREEN4        => "SpringGreen4",      0x00875f;
    TURQUOISE4          => "Turquoise4",        0x008787;
    DEEPSKYBLUE3_31     => "DeepSkyBlue3",      0x0087af;
    DEEPSKYBLUE3_32     => "DeepSkyBlue3",      0x0087d7;
    DODGERBLUE1         => "DodgerBlue1",       0x0087ff;
    GREEN3_34           => "Green3",            0x00af00;
    SPRINGGREEN3_35     => "SpringGreen3",      0x00af5f;
    DARKCYAN            => "DarkCyan",          0x00af87;
    LIGHTSEAGREEN       => "LightSeaGreen",     0x00afaf;
    DEEPSKYBLUE2        => "DeepSkyBlue2",      0x00afd7;
    DEEPSKYBLUE1        => "DeepSkyBlue1",      0x00afff;
    GREEN3_40           => "Green3",            0x00d700;
    SPRINGGREEN3_41     => "SpringGreen3",      0x00d75f;
    SPRINGGREEN2_42     => "SpringGreen2",      0x00d787;
    CYAN3               => "Cyan3",             0x00d7af;
    DARKTURQUOISE       => "DarkTurquoise",     0x00d7d7;
    TURQUOISE2          => "Turquoise2",        0x00d7ff;
    GREEN1              => "Green1",            0x00ff00;
    SPRINGGREEN2_47     => "SpringGreen2",      0x00ff5f;
    SPRINGGREEN1        => "SpringGreen1",      0x00ff87;
    MEDIUMSPRINGGREEN   => "MediumSpringGreen", 0x00ffaf;
    CYAN2               => "Cyan2",             0x00ffd7;
    CYAN1               => "Cyan1",             0x00ffff;
    DARKRED_52          => "DarkRed",           0x5f0000;
    DEEPPINK4_53        => "DeepPink4",         0x5f005f;
    PURPLE4_54          => "Purple4",           0x5f0087;
    PURPLE4_55          => "Purple4",           0x5f00af;
    PURPLE3             => "Purple3",           0x5f00d7;
    BLUEVIOLET          => "BlueViolet",        0x5f00ff;
    ORANGE4_58          => "Orange4",           0x5f5f00;
    GREY37              => "Grey37",            0x5f5f5f;
    MEDIUMPURPLE4       => "MediumPurple4",     0x5f5f87;
    SLATEBLUE3_61       => "SlateBlue3",        0x5f5faf;
    SLATEBLUE3_62       => "SlateBlue3",        0x5f5fd7;
    ROYALBLUE1          => "RoyalBlue1",        0x5f5fff;
    CHARTREUSE4         => "Chartreuse4",       0x5f8700;
    DARKSEAGREEN4_65    => "DarkSeaGreen4",     0x5f875f;
    PALETURQUOISE4      => "PaleTurquoise4",    0x5f8787;
    STEELBLUE           => "SteelBlue",         0x5f87af;
    STEELBLUE3          => "SteelBlue3",        0x5f87d7;
    CORNFLOWERBLUE      => "CornflowerBlue",    0x5f87ff;
    CHARTREUSE3_70      => "Chartreuse3",       0x5faf00;
    DARKSEAGREEN4_71    => "DarkSeaGreen4",     0x5faf5f;
    CADETBLUE_72        => "CadetBlue",         0x5faf87;
    CADETBLUE_73        => "CadetBlue",         0x5fafaf;
    SKYBLUE3            => "SkyBlue3",          0x5fafd7;
    STEELBLUE1_75       => "SteelBlue1",        0x5fafff;
    CHARTREUSE3_76      => "Chartreuse3",       0x5fd700;
    PALEGREEN3_77       => "PaleGreen3",        0x5fd75f;
    SEAGREEN3           => "SeaGreen3",         0x5fd787;
    AQUAMARINE3         => "Aquamarine3",       0x5fd7af;
    MEDIUMTURQUOISE     => "MediumTurquoise",   0x5fd7d7;
    STEELBLUE1_81       => "SteelBlue1",        0x5fd7ff;
    CHARTREUSE2_82      => "Chartreuse2",       0x5fff00;
    SEAGREEN2           => "SeaGreen2",         0x5fff5f;
    SEAGREEN1_84        => "SeaGreen1",         0x5fff87;
    SEAGREEN1_85        => "SeaGreen1",         0x5fffaf;
    AQUAMARINE1_86      => "Aquamarine1",       0x5fffd7;
    DARKSLATEGRAY2      => "DarkSlateGray2",    0x5fffff;
    DARKRED_88          => "DarkRed",           0x870000;
    DEEPPINK4_89        => "DeepPink4",         0x87005f;
    DARKMAGENTA_90      => "DarkMagenta",       0x870087;
    DARKMAGENTA_91      => "DarkMagenta",       0x8700af;
    DARKVIOLET_92       => "DarkViolet",        0x8700d7;
    PURPLE_93           => "Purple",            0x8700ff;
    ORANGE4_94          => "Orange4",           0x875f00;
    LIGHTPINK4          => "LightPink4",        0x875f5f;
    PLUM4               => "Plum4",             0x875f87;
    MEDIUMPURPLE3_97    => "MediumPurple3",     0x875faf;
    MEDIUMPURPLE3_98    => "MediumPurple3",     0x875fd7;
    SLATEBLUE1          => "SlateBlue1",        0x875fff;
    YELLOW4_100         => "Yellow4",           0x878700;
    WHEAT4              => "Wheat4",            0x87875f;
    GREY53              => "Grey53",            0x878787;
    LIGHTSLATEGREY      => "LightSlateGrey",    0x8787af;
    MEDIUMPURPLE        => "MediumPurple",      0x8787d7;
    LIGHTSLATEBLUE      => "LightSlateBlue",    0x8787ff;
    YELLOW4_106         => "Yellow4",           0x87af00;
    DARKOLIVEGREEN3_107 => "DarkOliveGreen3",   0x87af5f;
    DARKSEAGREEN        => "DarkSeaGreen",      0x87af87;
    LIGHTSKYBLUE3_109   => "LightSkyBlue3",     0x87afaf;
    LIGHTSKYBLUE3_110   => "LightSkyBlue3",     0x87afd7;
    SKYBLUE2            => "SkyBlue2",          0x87afff;
    CHARTREUSE2_112     => "Chartreuse2",       0x87d700;
    DARKOLIVEGREEN3_113 => "DarkOliveGreen3",   0x87d75f;
    PALEGREEN3_114      => "PaleGreen3",        0x87d787;
    DARKSEAGREEN3_115   => "DarkSeaGreen3",     0x87d7af;
    DARKSLATEGRAY3      => "DarkSlateGray3",    0x87d7d7;
    SKYBLUE1            => "SkyBlue1",          0x87d7ff;
    CHARTREUSE1         => "Chartreuse1",       0x87ff00;
    LIGHTGREEN_119      => "LightGreen",        0x87ff5f;
    LIGHTGREEN_120      => "LightGreen",        0x87ff87;
    PALEGREEN1_121      => "PaleGreen1",        0x87ffaf;
    AQUAMARINE1_122     => "Aquamarine1",       0x87ffd7;
    DARKSLATEGRAY1      => "DarkSlateGray1",    0x87ffff;
    RED3_124            => "Red3",              0xaf0000;
    DEEPPINK4_125       => "DeepPink4",         0xaf005f;
    MEDIUMVIOLETRED     => "MediumVioletRed",   0xaf0087;
    MAGENTA3_127        => "Magenta3",          0xaf00af;
    DARKVIOLET_128      => "DarkViolet",        0xaf00d7;
    PURPLE_129          => "Purple",            0xaf00ff;
    DARKORANGE3_130     => "DarkOrange3",       0xaf5f00;
    INDIANRED_131       => "IndianRed",         0xaf5f5f;
    HOTPINK3_132        => "HotPink3",          0xaf5f87;
    MEDIUMORCHID3       => "MediumOrchid3",     0xaf5faf;
    MEDIUMORCHID        => "MediumOrchid",      0xaf5fd7;
    MEDIUMPURPLE2_135   => "MediumPurple2",     0xaf5fff;
    DARKGOLDENROD       => "DarkGoldenrod",     0xaf8700;
    LIGHTSALMON3_137    => "LightSalmon3",      0xaf875f;
    ROSYBROWN           => "RosyBrown",         0xaf8787;
    GREY63              => "Grey63",            0xaf87af;
    MEDIUMPURPLE2_140   => "MediumPurple2",     0xaf87d7;
    MEDIUMPURPLE1       => "MediumPurple1",     0xaf87ff;
    GOLD3_142           => "Gold3",             0xafaf00;
    DARKKHAKI           => "DarkKhaki",         0xafaf5f;
    NAVAJOWHITE3        => "NavajoWhite3",      0xafaf87;
    GREY69              => "Grey69",            0xafafaf;
    LIGHTSTEELBLUE3     => "LightSteelBlue3",   0xafafd7;
    LIGHTSTEELBLUE      => "LightSteelBlue",    0xafafff;
    YELLOW3_148         => "Yellow3",           0xafd700;
    DARKOLIVEGREEN3_149 => "DarkOliveGreen3",   0xafd75f;
    DARKSEAGREEN3_150   => "DarkSeaGreen3",     0xafd787;
    DARKSEAGREEN2_151   => "DarkSeaGreen2",     0xafd7af;
    LIGHTCYAN3          => "LightCyan3",        0xafd7d7;
    LIGHTSKYBLUE1       => "LightSkyBlue1",     0xafd7ff;
    GREENYELLOW         => "GreenYellow",       0xafff00;
    DARKOLIVEGREEN2     => "DarkOliveGreen2",   0xafff5f;
    PALEGREEN1_156      => "PaleGreen1",        0xafff87;
    DARKSEAGREEN2_157   => "DarkSeaGreen2",     0xafffaf;
    DARKSEAGREEN1_158   => "DarkSeaGreen1",     0xafffd7;
    PALETURQUOISE1      => "PaleTurquoise1",    0xafffff;
    RED3_160            => "Red3",              0xd70000;
    DEEPPINK3_161       => "DeepPink3",         0xd7005f;
    DEEPPINK3_162       => "DeepPink3",         0xd70087;
    MAGENTA3_163        => "Magenta3",          0xd700af;
    MAGENTA3_164        => "Magenta3",          0xd700d7;
    MAGENTA2_165        => "Magenta2",          0xd700ff;
    DARKORANGE3_166     => "DarkOrange3",       0xd75f00;
    INDIANRED_167       => "IndianRed",         0xd75f5f;
    HOTPINK3_168        => "HotPink3",          0xd75f87;
    HOTPINK2            => "HotPink2",          0xd75faf;
    ORCHID              => "Orchid",            0xd75fd7;
    MEDIUMORCHID1_171   => "MediumOrchid1",     0xd75fff;
    ORANGE3             => "Orange3",           0xd78700;
    LIGHTSALMON3_173    => "LightSalmon3",      0xd7875f;
    LIGHTPINK3          => "LightPink3",        0xd78787;
    PINK3               => "Pink3",             0xd787af;
    PLUM3               => "Plum3",             0xd787d7;
    VIOLET              => "Violet",            0xd787ff;
    GOLD3_178           => "Gold3",             0xd7af00;
    LIGHTGOLDENROD3     => "LightGoldenrod3",   0xd7af5f;
    TAN                 => "Tan",               0xd7af87;
    MISTYROSE3          => "MistyRose3",        0xd7afaf;
    THISTLE3            => "Thistle3",          0xd7afd7;
    PLUM2               => "Plum2",             0xd7afff;
    YELLOW3_184         => "Yellow3",           0xd7d700;
    KHAKI3              => "Khaki3",            0xd7d75f;
    LIGHTGOLDENROD2_186 => "LightGoldenrod2",   0xd7d787;
    LIGHTYELLOW3        => "LightYellow3",      0xd7d7af;
    GREY84              => "Grey84",            0xd7d7d7;
    LIGHTSTEELBLUE1     => "LightSteelBlue1",   0xd7d7ff;
    YELLOW2             => "Yellow2",           0xd7ff00;
    DARKOLIVEGREEN1_191 => "DarkOliveGreen1",   0xd7ff5f;
    DARKOLIVEGREEN1_192 => "DarkOliveGreen1",   0xd7ff87;
    DARKSEAGREEN1_193   => "DarkSeaGreen1",     0xd7ffaf;
    HONEYDEW2           => "Honeydew2",         0xd7ffd7;
    LIGHTCYAN1          => "LightCyan1",        0xd7ffff;
    RED1                => "Red1",              0xff0000;
    DEEPPINK2           => "DeepPink2",         0xff005f;
    DEEPPINK1_198       => "DeepPink1",         0xff0087;
    DEEPPINK1_199       => "DeepPink1",         0xff00af;
    MAGENTA2_200        => "Magenta2",          0xff00d7;
    MAGENTA1            => "Magenta1",          0xff00ff;
    ORANGERED1          => "OrangeRed1",        0xff5f00;
    INDIANRED1_203      => "IndianRed1",        0xff5f5f;
    INDIANRED1_204      => "IndianRed1",        0xff5f87;
    HOTPINK_205         => "HotPink",           0xff5faf;
    HOTPINK_206         => "HotPink",           0xff5fd7;
    MEDIUMORCHID1_207   => "MediumOrchid1",     0xff5fff;
    DARKORANGE          => "DarkOrange",        0xff8700;
    SALMON1             => "Salmon1",           0xff875f;
    LIGHTCORAL          => "LightCoral",        0xff8787;
    PALEVIOLETRED1      => "PaleVioletRed1",    0xff87af;
    ORCHID2             => "Orchid2",           0xff87d7;
    ORCHID1             => "Orchid1",           0xff87ff;
    ORANGE1             => "Orange1",           0xffaf00;
    SANDYBROWN          => "SandyBrown",        0xffaf5f;
    LIGHTSALMON1        => "LightSalmon1",      0xffaf87;
    LIGHTPINK1          => "LightPink1",        0xffafaf;
    PINK1               => "Pink1",             0xffafd7;
    PLUM1               => "Plum1",             0xffafff;
    GOLD1               => "Gold1",             0xffd700;
    LIGHTGOLDENROD2_221 => "LightGoldenrod2",   0xffd75f;
    LIGHTGOLDENROD2_222 => "LightGoldenrod2",   0xffd787;
    NAVAJOWHITE1        => "NavajoWhite1",      0xffd7af;
    MISTYROSE1          => "MistyRose1",        0xffd7d7;
    THISTLE1            => "Thistle1",          0xffd7ff;
    YELLOW1             => "Yellow1",           0xffff00;
    LIGHTGOLDENROD1     => "LightGoldenrod1",   0xffff5f;
    KHAKI1              => "Khaki1",            0xffff87;
    WHEAT1              => "Wheat1",            0xffffaf;
    CORNSILK1           => "Cornsilk1",         0xffffd7;
    GREY100             => "Grey100",           0xffffff;
    // 232..=255: grayscale ramp
    GREY3               => "Grey3",             0x080808;
    GREY7               => "Grey7",             0x121212;
    GREY11              => "Grey11",            0x1c1c1c;
    GREY15              => "Grey15",            0x262626;
    GREY19              => "Grey19",            0x303030;
    GREY23              => "Grey23",            0x3a3a3a;
    GREY27              => "Grey27",            0x444444;
    GREY30              => "Grey30",            0x4e4e4e;
    GREY35              => "Grey35",            0x585858;
    GREY39              => "Grey39",            0x626262;
    GREY42              => "Grey42",            0x6c6c6c;
    GREY46              => "Grey46",            0x767676;
    GREY50              => "Grey50",            0x808080;
    GREY54              => "Grey54",            0x8a8a8a;
    GREY58              => "Grey58",            0x949494;
    GREY62              => "Grey62",            0x9e9e9e;
    GREY66              => "Grey66",            0xa8a8a8;
    GREY70              => "Grey70",            0xb2b2b2;
    GREY74              => "Grey74",            0xbcbcbc;
    GREY78              => "Grey78",            0xc6c6c6;
    GREY82              => "Grey82",            0xd0d0d0;
    GREY85              => "Grey85",            0xdadada;
    GREY89              => "Grey89",            0xe4e4e4;
    GREY93              => "Grey93",            0xeeeeee;
}

const _: () = assert!(TABLE.len() == 256);

/// The color of xterm cell `index`.
pub const fn from_index(index: u8) -> Color {
    TABLE[index as usize].1
}

/// The name of xterm cell `index`.
pub const fn name_of(index: u8) -> &'static str {
    TABLE[index as usize].0
}

/// Look up an xterm color by name, ignoring ASCII case.
///
/// Names shared by several cells resolve to the lowest index.
pub fn from_name(name: &str) -> Option<Color> {
    position(name).map(from_index)
}

/// The lowest xterm index carrying `name`, ignoring ASCII case.
pub fn position(name: &str) -> Option<u8> {
    TABLE
        .iter()
        .position(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
        .and_then(|index| u8::try_from(index).ok())
}
