//! Glyph font discovery
//!
//! Chess symbols (U+2654..U+265F) are missing from egui's bundled fonts, so a
//! system font that carries them is looked up on disk. A font named on the
//! command line is tried first. When nothing usable is found the board falls
//! back to letter glyphs.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, ensure, Context, Result};
use bevy::prelude::*;

/// Well-known locations of fonts with chess symbols
const FONT_CANDIDATES: &[&str] = &[
    "assets/fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/noto/NotoSansSymbols2-Regular.ttf",
    "/usr/share/fonts/noto/NotoSansSymbols2-Regular.ttf",
    "/usr/share/fonts/truetype/ancient-scripts/Symbola_hint.ttf",
    "/Library/Fonts/Arial Unicode.ttf",
    "/System/Library/Fonts/Supplemental/Arial Unicode.ttf",
    "C:\\Windows\\Fonts\\seguisym.ttf",
    "C:\\Windows\\Fonts\\DejaVuSans.ttf",
];

/// sfnt version tags of TrueType, OpenType and collection files
const FONT_MAGIC: [[u8; 4]; 4] = [*b"\x00\x01\x00\x00", *b"OTTO", *b"true", *b"ttcf"];

/// Font file requested with `--font`, if any
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct FontOverride(pub Option<PathBuf>);

/// A font file read into memory
#[derive(Debug, Clone)]
pub struct GlyphFont {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

impl GlyphFont {
    /// Short name used as the egui font key
    pub fn name(&self) -> String {
        self.path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "glyph-font".to_string())
    }
}

pub fn load_font(path: &Path) -> Result<GlyphFont> {
    let bytes = fs::read(path).with_context(|| format!("reading font {}", path.display()))?;
    ensure!(
        bytes.len() >= 4 && FONT_MAGIC.iter().any(|magic| bytes[..4] == magic[..]),
        "{} is not a TrueType/OpenType font",
        path.display()
    );
    Ok(GlyphFont {
        path: path.to_path_buf(),
        bytes,
    })
}

/// First loadable font among `explicit` and the built-in candidates
pub fn discover_glyph_font(explicit: Option<&Path>) -> Result<GlyphFont> {
    let candidates = explicit
        .into_iter()
        .map(Path::to_path_buf)
        .chain(FONT_CANDIDATES.iter().map(PathBuf::from));

    let mut tried = 0;
    for path in candidates {
        tried += 1;
        match load_font(&path) {
            Ok(font) => return Ok(font),
            Err(e) => {
                if explicit == Some(path.as_path()) {
                    warn!("[FONTS] {:#}", e);
                } else {
                    debug!("[FONTS] {:#}", e);
                }
            }
        }
    }
    bail!("no chess glyph font found among {} candidates", tried)
}
