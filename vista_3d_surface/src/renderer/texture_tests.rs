/// Tests for texture types

use super::*;

struct PlainTexture {
    info: TextureInfo,
}

impl Texture for PlainTexture {
    fn info(&self) -> &TextureInfo {
        &self.info
    }
}

// ============================================================================
// Tests: TextureInfo
// ============================================================================

#[test]
fn test_texture_info_through_trait() {
    let texture = PlainTexture {
        info: TextureInfo {
            width: 1200,
            height: 1200,
            format: TextureFormat::R8G8B8A8_UNORM,
        },
    };

    let texture: &dyn Texture = &texture;
    assert_eq!(texture.info().width, 1200);
    assert_eq!(texture.info().height, 1200);
    assert_eq!(texture.info().format, TextureFormat::R8G8B8A8_UNORM);
}

// ============================================================================
// Tests: Enums
// ============================================================================

#[test]
fn test_filter_modes_are_distinct() {
    assert_ne!(FilterMode::Nearest, FilterMode::Linear);
}

#[test]
fn test_wrap_modes_are_distinct() {
    assert_ne!(WrapMode::ClampToEdge, WrapMode::Repeat);
    assert_ne!(WrapMode::Repeat, WrapMode::MirroredRepeat);
}

#[test]
fn test_formats_are_distinct() {
    assert_ne!(TextureFormat::R8G8B8A8_UNORM, TextureFormat::R8G8B8A8_SRGB);
    assert_ne!(TextureFormat::R8G8B8A8_UNORM, TextureFormat::B8G8R8A8_UNORM);
}
