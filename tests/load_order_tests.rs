//! Integration tests for load-order mechanism selection: the binary-version
//! threshold, the at-threshold build comparison, and the fallback when the
//! version record cannot be read.

mod common;

use common::GameFixture;
use proptest::prelude::*;
use skyrim_support::plugin::{GamePlugin, LoadOrderMechanism};
use skyrim_support::services::file_version::FixedFileVersion;
use skyrim_support::GameSkyrim;
use std::fs;

/// Drop a fake game binary carrying a fixed-version record into the fixture.
fn write_game_binary(fixture: &GameFixture, ms: u32, ls: u32) {
    let mut bytes = vec![0u8; 128];
    bytes.extend_from_slice(&0xFEEF_04BDu32.to_le_bytes());
    bytes.extend_from_slice(&0x0001_0000u32.to_le_bytes());
    bytes.extend_from_slice(&ms.to_le_bytes());
    bytes.extend_from_slice(&ls.to_le_bytes());
    bytes.extend_from_slice(&[0u8; 64]);
    fs::write(fixture.game_dir.join("TESV.exe"), bytes).unwrap();
}

#[test]
fn test_new_binary_orders_by_plugins_txt() {
    let fixture = GameFixture::new();
    write_game_binary(&fixture, 0x0001_0005, 0);
    let game = fixture.init_game();

    assert_eq!(game.load_order_mechanism(), LoadOrderMechanism::PluginsTxt);
}

#[test]
fn test_threshold_build_orders_by_plugins_txt() {
    let fixture = GameFixture::new();
    write_game_binary(&fixture, 0x0001_0004, 0x001A_0000);
    let game = fixture.init_game();

    assert_eq!(game.load_order_mechanism(), LoadOrderMechanism::PluginsTxt);
}

#[test]
fn test_threshold_major_minor_with_older_build_falls_back_to_file_time() {
    let fixture = GameFixture::new();
    write_game_binary(&fixture, 0x0001_0004, 0x0019_0000);
    let game = fixture.init_game();

    assert_eq!(game.load_order_mechanism(), LoadOrderMechanism::FileTime);
}

#[test]
fn test_old_binary_orders_by_file_time() {
    let fixture = GameFixture::new();
    write_game_binary(&fixture, 0x0001_0003, 0xFFFF_FFFF);
    let game = fixture.init_game();

    assert_eq!(game.load_order_mechanism(), LoadOrderMechanism::FileTime);
}

#[test]
fn test_missing_binary_falls_back_to_file_time() {
    let fixture = GameFixture::new();
    let game = fixture.init_game();

    assert_eq!(game.load_order_mechanism(), LoadOrderMechanism::FileTime);
}

#[test]
fn test_binary_without_version_record_falls_back_to_file_time() {
    let fixture = GameFixture::new();
    fs::write(fixture.game_dir.join("TESV.exe"), vec![0u8; 512]).unwrap();
    let game = fixture.init_game();

    assert_eq!(game.load_order_mechanism(), LoadOrderMechanism::FileTime);
}

proptest! {
    #[test]
    fn test_any_version_above_the_major_minor_word_uses_plugins_txt(
        ms in 0x0001_0005u32..,
        ls in any::<u32>(),
    ) {
        prop_assert_eq!(
            GameSkyrim::mechanism_for_version(FixedFileVersion::new(ms, ls)),
            LoadOrderMechanism::PluginsTxt
        );
    }

    #[test]
    fn test_any_version_below_the_major_minor_word_uses_file_time(
        ms in 0u32..0x0001_0004,
        ls in any::<u32>(),
    ) {
        prop_assert_eq!(
            GameSkyrim::mechanism_for_version(FixedFileVersion::new(ms, ls)),
            LoadOrderMechanism::FileTime
        );
    }

    #[test]
    fn test_at_the_major_minor_word_the_build_word_decides(ls in any::<u32>()) {
        let expected = if ls >= 0x001A_0000 {
            LoadOrderMechanism::PluginsTxt
        } else {
            LoadOrderMechanism::FileTime
        };
        prop_assert_eq!(
            GameSkyrim::mechanism_for_version(FixedFileVersion::new(0x0001_0004, ls)),
            expected
        );
    }
}
