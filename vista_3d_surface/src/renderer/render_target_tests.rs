/// Tests for render target types

use super::*;

// ============================================================================
// Tests: TargetUsage flags
// ============================================================================

#[test]
fn test_usage_flags_compose() {
    let usage = TargetUsage::SAMPLED | TargetUsage::COLOR_ATTACHMENT;
    assert!(usage.contains(TargetUsage::SAMPLED));
    assert!(usage.contains(TargetUsage::COLOR_ATTACHMENT));
}

#[test]
fn test_usage_flags_are_disjoint() {
    assert!(!TargetUsage::SAMPLED.contains(TargetUsage::COLOR_ATTACHMENT));
    assert!(!TargetUsage::COLOR_ATTACHMENT.contains(TargetUsage::SAMPLED));
}

#[test]
fn test_empty_usage_contains_nothing() {
    let usage = TargetUsage::empty();
    assert!(!usage.contains(TargetUsage::SAMPLED));
}

// ============================================================================
// Tests: Descriptor
// ============================================================================

#[test]
fn test_desc_round_trips_fields() {
    let desc = RenderTargetDesc {
        width: 1200,
        height: 1200,
        min_filter: FilterMode::Linear,
        mag_filter: FilterMode::Nearest,
        format: TextureFormat::R8G8B8A8_UNORM,
        usage: TargetUsage::SAMPLED | TargetUsage::COLOR_ATTACHMENT,
    };

    assert_eq!(desc.width, 1200);
    assert_eq!(desc.height, 1200);
    assert_eq!(desc.min_filter, FilterMode::Linear);
    assert_eq!(desc.mag_filter, FilterMode::Nearest);
    assert_eq!(desc.format, TextureFormat::R8G8B8A8_UNORM);
    assert!(desc.usage.contains(TargetUsage::SAMPLED));
}
