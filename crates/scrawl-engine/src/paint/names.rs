use super::Color;

const NAMED: &[(&str, Color)] = &[
    ("aqua", Color::new(0, 255, 255)),
    ("aquamarine", Color::new(127, 255, 212)),
    ("azure", Color::new(240, 255, 255)),
    ("beige", Color::new(245, 245, 220)),
    ("black", Color::new(0, 0, 0)),
    ("blue", Color::new(0, 0, 255)),
    ("brown", Color::new(165, 42, 42)),
    ("chartreuse", Color::new(127, 255, 0)),
    ("chocolate", Color::new(210, 105, 30)),
    ("coral", Color::new(255, 127, 80)),
    ("crimson", Color::new(220, 20, 60)),
    ("cyan", Color::new(0, 255, 255)),
    ("darkblue", Color::new(0, 0, 139)),
    ("darkgray", Color::new(169, 169, 169)),
    ("darkgreen", Color::new(0, 100, 0)),
    ("darkred", Color::new(139, 0, 0)),
    ("deeppink", Color::new(255, 20, 147)),
    ("dodgerblue", Color::new(30, 144, 255)),
    ("forestgreen", Color::new(34, 139, 34)),
    ("fuchsia", Color::new(255, 0, 255)),
    ("gold", Color::new(255, 215, 0)),
    ("goldenrod", Color::new(218, 165, 32)),
    ("gray", Color::new(190, 190, 190)),
    ("green", Color::new(0, 255, 0)),
    ("grey", Color::new(190, 190, 190)),
    ("hotpink", Color::new(255, 105, 180)),
    ("indigo", Color::new(75, 0, 130)),
    ("ivory", Color::new(255, 255, 240)),
    ("khaki", Color::new(240, 230, 140)),
    ("lavender", Color::new(230, 230, 250)),
    ("lightblue", Color::new(173, 216, 230)),
    ("lightgray", Color::new(211, 211, 211)),
    ("lightgreen", Color::new(144, 238, 144)),
    ("lime", Color::new(0, 255, 0)),
    ("limegreen", Color::new(50, 205, 50)),
    ("magenta", Color::new(255, 0, 255)),
    ("maroon", Color::new(176, 48, 96)),
    ("navy", Color::new(0, 0, 128)),
    ("olive", Color::new(128, 128, 0)),
    ("orange", Color::new(255, 165, 0)),
    ("orchid", Color::new(218, 112, 214)),
    ("pink", Color::new(255, 192, 203)),
    ("plum", Color::new(221, 160, 221)),
    ("purple", Color::new(160, 32, 240)),
    ("red", Color::new(255, 0, 0)),
    ("royalblue", Color::new(65, 105, 225)),
    ("salmon", Color::new(250, 128, 114)),
    ("seagreen", Color::new(46, 139, 87)),
    ("sienna", Color::new(160, 82, 45)),
    ("silver", Color::new(192, 192, 192)),
    ("skyblue", Color::new(135, 206, 235)),
    ("steelblue", Color::new(70, 130, 180)),
    ("tan", Color::new(210, 180, 140)),
    ("teal", Color::new(0, 128, 128)),
    ("tomato", Color::new(255, 99, 71)),
    ("turquoise", Color::new(64, 224, 208)),
    ("violet", Color::new(238, 130, 238)),
    ("wheat", Color::new(245, 222, 179)),
    ("white", Color::new(255, 255, 255)),
    ("yellow", Color::new(255, 255, 0)),
];

/// ASCII case-insensitive lookup.
pub(super) fn lookup_name(name: &str) -> Option<Color> {
    NAMED
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|&(_, c)| c)
}
