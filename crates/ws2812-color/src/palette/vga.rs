//! The VGA colors, which double as the HTML 4 color keywords, plus `orange`.
//!
//! <http://www.blooberry.com/indexdot/color/vganame.htm>

named_colors! {
    /// Every VGA color with its lowercase name.
    VGA;
    BLACK   => "black",   0x000000;
    WHITE   => "white",   0xffffff;
    RED     => "red",     0xff0000;
    YELLOW  => "yellow",  0xffff00;
    LIME    => "lime",    0x00ff00;
    AQUA    => "aqua",    0x00ffff;
    BLUE    => "blue",    0x0000ff;
    FUCHSIA => "fuchsia", 0xff00ff;
    ORANGE  => "orange",  0xff8000;
    GRAY    => "gray",    0x808080;
    SILVER  => "silver",  0xc0c0c0;
    MAROON  => "maroon",  0x800000;
    OLIVE   => "olive",   0x808000;
    GREEN   => "green",   0x008000;
    TEAL    => "teal",    0x008080;
    NAVY    => "navy",    0x000080;
    PURPLE  => "purple",  0x800080;
}
