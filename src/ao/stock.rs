//! Asset ids of the built-in avatar animations the overrider knows about.

use uuid::Uuid;

pub const WALK: Uuid = Uuid::from_u128(0x6ed24bd8_91aa_4b12_ccc7_c97c857ab4e0);
pub const RUN: Uuid = Uuid::from_u128(0x05ddbff8_aaa9_92a1_2b74_8fe77a29b445);
pub const PRE_JUMP: Uuid = Uuid::from_u128(0x7a4e87fe_de39_6fcb_6223_024b00893244);
pub const JUMP: Uuid = Uuid::from_u128(0x2305bd75_1ca9_b03b_1faa_b176b8a8c49e);
pub const TURNLEFT: Uuid = Uuid::from_u128(0x56e0ba0d_4a9f_7f27_6117_32f2ebbf6135);
pub const TURNRIGHT: Uuid = Uuid::from_u128(0x2d6daa51_3192_6794_8e2e_a15f8338ec30);

pub const SIT: Uuid = Uuid::from_u128(0x1a5fe8ac_a804_8a5d_7cbd_56bd83184568);
pub const SIT_FEMALE: Uuid = Uuid::from_u128(0xb1709c8d_ecd3_54a1_4f28_d55ac0840782);
pub const SIT_GENERIC: Uuid = Uuid::from_u128(0x245f3c54_f1c0_bf2e_811f_46d8eeb386e7);
pub const SIT_GROUND: Uuid = Uuid::from_u128(0x1c7600d6_661f_b87b_efe2_d7421eb93c86);
pub const SIT_GROUND_CONSTRAINED: Uuid = Uuid::from_u128(0x1a2bd58e_87ff_0df8_0b4c_53e047b0bb6e);

pub const HOVER: Uuid = Uuid::from_u128(0x4ae8016b_31b9_03bb_c401_b1ea941db41d);
pub const HOVER_DOWN: Uuid = Uuid::from_u128(0x20f063ea_8306_2562_0b07_5c853b37b31e);
pub const HOVER_UP: Uuid = Uuid::from_u128(0x62c5de58_cb33_5743_3d07_9e4cd4352864);

pub const CROUCH: Uuid = Uuid::from_u128(0x201f3fdf_cb1f_dbec_201f_7333e328ae7c);
pub const CROUCHWALK: Uuid = Uuid::from_u128(0x47f5f6fb_22e5_ae44_f871_73aaaf4a6022);

pub const FALLDOWN: Uuid = Uuid::from_u128(0x666307d9_a860_572d_6fd4_c3ab8865c094);
pub const STANDUP: Uuid = Uuid::from_u128(0x3da1d753_028a_5446_24f3_9c9b856d9422);
pub const LAND: Uuid = Uuid::from_u128(0x7a17b059_12b2_41b1_570a_186368b6aa6f);

pub const FLY: Uuid = Uuid::from_u128(0xaec4610c_757f_bc4e_c092_c6e9caf18daf);
pub const FLYSLOW: Uuid = Uuid::from_u128(0x2b5a38b2_5e00_3a97_a495_4c826bc443e6);

/// Plain stand. Never overridden directly; stands go through the rotation.
pub const STAND: Uuid = Uuid::from_u128(0x2408fe9e_df1d_1d7d_f4ff_1384fa7b350f);
