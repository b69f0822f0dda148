//! Built-in single-stroke lettering.
//!
//! The corpus of drawing text (title block labels, notes, dimension values)
//! is uppercase drafting lettering, so glyphs are stored as polyline stroke
//! tables on a 4-wide, 6-tall grid and scaled at draw time. No font file or
//! rasterizer is involved; strokes go through the same path pipeline as the
//! geometry. ASCII lowercase maps to uppercase; `μ` and other non-ASCII
//! glyphs are looked up as-is.

/// Glyph strokes: each inner slice is one polyline in grid units,
/// x rightward 0..=4, y upward 0..=6 with the baseline at 0.
pub(crate) type Strokes = &'static [&'static [(f32, f32)]];

/// Grid width of one glyph cell including inter-letter gap.
pub(crate) const ADVANCE: f32 = 6.0;

/// Grid height of a capital letter.
pub(crate) const CAP_HEIGHT: f32 = 6.0;

/// Look up the stroke table for a character.
///
/// Returns `None` for a space (advance with no ink). Unknown characters get
/// a placeholder box.
pub(crate) fn strokes(c: char) -> Option<Strokes> {
    let c = c.to_ascii_uppercase();
    let table: Strokes = match c {
        ' ' => return None,
        'A' => &[&[(0.0, 0.0), (2.0, 6.0), (4.0, 0.0)], &[(1.0, 3.0), (3.0, 3.0)]],
        'B' => &[
            &[(0.0, 0.0), (0.0, 6.0), (3.0, 6.0), (4.0, 5.0), (4.0, 4.0), (3.0, 3.0), (0.0, 3.0)],
            &[(3.0, 3.0), (4.0, 2.0), (4.0, 1.0), (3.0, 0.0), (0.0, 0.0)],
        ],
        'C' => &[&[
            (4.0, 1.0), (3.0, 0.0), (1.0, 0.0), (0.0, 1.0), (0.0, 5.0), (1.0, 6.0), (3.0, 6.0), (4.0, 5.0),
        ]],
        'D' => &[&[(0.0, 0.0), (0.0, 6.0), (2.0, 6.0), (4.0, 4.0), (4.0, 2.0), (2.0, 0.0), (0.0, 0.0)]],
        'E' => &[&[(4.0, 0.0), (0.0, 0.0), (0.0, 6.0), (4.0, 6.0)], &[(0.0, 3.0), (3.0, 3.0)]],
        'F' => &[&[(0.0, 0.0), (0.0, 6.0), (4.0, 6.0)], &[(0.0, 3.0), (3.0, 3.0)]],
        'G' => &[&[
            (4.0, 5.0), (3.0, 6.0), (1.0, 6.0), (0.0, 5.0), (0.0, 1.0), (1.0, 0.0), (3.0, 0.0), (4.0, 1.0),
            (4.0, 3.0), (2.0, 3.0),
        ]],
        'H' => &[&[(0.0, 0.0), (0.0, 6.0)], &[(4.0, 0.0), (4.0, 6.0)], &[(0.0, 3.0), (4.0, 3.0)]],
        'I' => &[&[(1.0, 0.0), (3.0, 0.0)], &[(2.0, 0.0), (2.0, 6.0)], &[(1.0, 6.0), (3.0, 6.0)]],
        'J' => &[&[(0.0, 1.0), (1.0, 0.0), (3.0, 0.0), (4.0, 1.0), (4.0, 6.0)]],
        'K' => &[&[(0.0, 0.0), (0.0, 6.0)], &[(0.0, 3.0), (4.0, 6.0)], &[(0.0, 3.0), (4.0, 0.0)]],
        'L' => &[&[(0.0, 6.0), (0.0, 0.0), (4.0, 0.0)]],
        'M' => &[&[(0.0, 0.0), (0.0, 6.0), (2.0, 3.0), (4.0, 6.0), (4.0, 0.0)]],
        'N' => &[&[(0.0, 0.0), (0.0, 6.0), (4.0, 0.0), (4.0, 6.0)]],
        'O' => &[&[
            (1.0, 0.0), (0.0, 1.0), (0.0, 5.0), (1.0, 6.0), (3.0, 6.0), (4.0, 5.0), (4.0, 1.0), (3.0, 0.0),
            (1.0, 0.0),
        ]],
        'P' => &[&[(0.0, 0.0), (0.0, 6.0), (3.0, 6.0), (4.0, 5.0), (4.0, 4.0), (3.0, 3.0), (0.0, 3.0)]],
        'Q' => &[
            &[
                (1.0, 0.0), (0.0, 1.0), (0.0, 5.0), (1.0, 6.0), (3.0, 6.0), (4.0, 5.0), (4.0, 1.0),
                (3.0, 0.0), (1.0, 0.0),
            ],
            &[(2.0, 2.0), (4.0, 0.0)],
        ],
        'R' => &[
            &[(0.0, 0.0), (0.0, 6.0), (3.0, 6.0), (4.0, 5.0), (4.0, 4.0), (3.0, 3.0), (0.0, 3.0)],
            &[(2.0, 3.0), (4.0, 0.0)],
        ],
        'S' => &[&[
            (4.0, 5.0), (3.0, 6.0), (1.0, 6.0), (0.0, 5.0), (0.0, 4.0), (1.0, 3.0), (3.0, 3.0), (4.0, 2.0),
            (4.0, 1.0), (3.0, 0.0), (1.0, 0.0), (0.0, 1.0),
        ]],
        'T' => &[&[(0.0, 6.0), (4.0, 6.0)], &[(2.0, 6.0), (2.0, 0.0)]],
        'U' => &[&[(0.0, 6.0), (0.0, 1.0), (1.0, 0.0), (3.0, 0.0), (4.0, 1.0), (4.0, 6.0)]],
        'V' => &[&[(0.0, 6.0), (2.0, 0.0), (4.0, 6.0)]],
        'W' => &[&[(0.0, 6.0), (1.0, 0.0), (2.0, 4.0), (3.0, 0.0), (4.0, 6.0)]],
        'X' => &[&[(0.0, 0.0), (4.0, 6.0)], &[(0.0, 6.0), (4.0, 0.0)]],
        'Y' => &[&[(0.0, 6.0), (2.0, 3.0), (4.0, 6.0)], &[(2.0, 3.0), (2.0, 0.0)]],
        'Z' => &[&[(0.0, 6.0), (4.0, 6.0), (0.0, 0.0), (4.0, 0.0)]],
        '0' => &[
            &[
                (1.0, 0.0), (0.0, 1.0), (0.0, 5.0), (1.0, 6.0), (3.0, 6.0), (4.0, 5.0), (4.0, 1.0),
                (3.0, 0.0), (1.0, 0.0),
            ],
            &[(1.0, 1.0), (3.0, 5.0)],
        ],
        '1' => &[&[(1.0, 5.0), (2.0, 6.0), (2.0, 0.0)], &[(1.0, 0.0), (3.0, 0.0)]],
        '2' => &[&[(0.0, 5.0), (1.0, 6.0), (3.0, 6.0), (4.0, 5.0), (4.0, 4.0), (0.0, 0.0), (4.0, 0.0)]],
        '3' => &[
            &[(0.0, 5.0), (1.0, 6.0), (3.0, 6.0), (4.0, 5.0), (4.0, 4.0), (3.0, 3.0), (1.0, 3.0)],
            &[(3.0, 3.0), (4.0, 2.0), (4.0, 1.0), (3.0, 0.0), (1.0, 0.0), (0.0, 1.0)],
        ],
        '4' => &[&[(3.0, 0.0), (3.0, 6.0), (0.0, 2.0), (4.0, 2.0)]],
        '5' => &[&[
            (4.0, 6.0), (0.0, 6.0), (0.0, 4.0), (3.0, 4.0), (4.0, 3.0), (4.0, 1.0), (3.0, 0.0), (1.0, 0.0),
            (0.0, 1.0),
        ]],
        '6' => &[&[
            (4.0, 5.0), (3.0, 6.0), (1.0, 6.0), (0.0, 5.0), (0.0, 1.0), (1.0, 0.0), (3.0, 0.0), (4.0, 1.0),
            (4.0, 2.0), (3.0, 3.0), (0.0, 3.0),
        ]],
        '7' => &[&[(0.0, 6.0), (4.0, 6.0), (1.0, 0.0)]],
        '8' => &[
            &[
                (1.0, 3.0), (0.0, 4.0), (0.0, 5.0), (1.0, 6.0), (3.0, 6.0), (4.0, 5.0), (4.0, 4.0),
                (3.0, 3.0), (1.0, 3.0),
            ],
            &[
                (1.0, 3.0), (0.0, 2.0), (0.0, 1.0), (1.0, 0.0), (3.0, 0.0), (4.0, 1.0), (4.0, 2.0),
                (3.0, 3.0),
            ],
        ],
        '9' => &[&[
            (0.0, 1.0), (1.0, 0.0), (3.0, 0.0), (4.0, 1.0), (4.0, 5.0), (3.0, 6.0), (1.0, 6.0), (0.0, 5.0),
            (0.0, 4.0), (1.0, 3.0), (4.0, 3.0),
        ]],
        '.' => &[&[(1.8, 0.0), (2.2, 0.0), (2.2, 0.5), (1.8, 0.5), (1.8, 0.0)]],
        ',' => &[&[(2.2, 0.5), (1.7, -0.8)]],
        ':' => &[&[(2.0, 1.0), (2.0, 1.6)], &[(2.0, 4.0), (2.0, 4.6)]],
        ';' => &[&[(2.0, 4.0), (2.0, 4.6)], &[(2.2, 1.0), (1.7, -0.3)]],
        '-' => &[&[(1.0, 3.0), (3.0, 3.0)]],
        '+' => &[&[(2.0, 1.0), (2.0, 5.0)], &[(0.0, 3.0), (4.0, 3.0)]],
        '±' => &[
            &[(2.0, 2.0), (2.0, 6.0)],
            &[(0.0, 4.0), (4.0, 4.0)],
            &[(0.0, 0.0), (4.0, 0.0)],
        ],
        '°' => &[&[(1.4, 5.2), (2.0, 5.8), (2.6, 5.2), (2.0, 4.6), (1.4, 5.2)]],
        '²' => &[&[(1.0, 5.0), (1.5, 6.0), (2.5, 6.0), (3.0, 5.0), (1.0, 3.0), (3.0, 3.0)]],
        '/' => &[&[(0.0, 0.0), (4.0, 6.0)]],
        '(' => &[&[(3.0, 6.0), (2.0, 4.0), (2.0, 2.0), (3.0, 0.0)]],
        ')' => &[&[(1.0, 6.0), (2.0, 4.0), (2.0, 2.0), (1.0, 0.0)]],
        'μ' => &[
            &[(0.0, 4.0), (0.0, -2.0)],
            &[(4.0, 4.0), (4.0, 0.0)],
            &[(0.0, 1.0), (1.0, 0.0), (3.0, 0.0), (4.0, 1.0)],
        ],
        // Placeholder box for anything else.
        _ => &[&[(0.0, 0.0), (4.0, 0.0), (4.0, 6.0), (0.0, 6.0), (0.0, 0.0)]],
    };
    Some(table)
}

/// Rendered width of `text` at cap height `size` pixels.
pub(crate) fn text_width(text: &str, size: f32) -> f32 {
    let scale = size / CAP_HEIGHT;
    #[allow(clippy::cast_precision_loss)]
    let n = text.chars().count() as f32;
    n * ADVANCE * scale
}
