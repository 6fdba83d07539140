// Cartridge header layout, absolute offsets into the ROM image.
pub const LOGO_START_ADDR: usize = 0x0104;
pub const LOGO_END_ADDR: usize = 0x0133;
pub const LOGO_LEN: usize = 48;

pub const TITLE_START_ADDR: usize = 0x0134;
pub const TITLE_END_ADDR: usize = 0x0142;
pub const TITLE_LEN: usize = TITLE_END_ADDR - TITLE_START_ADDR;

pub const GAMEBOY_TYPE_ADDR: usize = 0x0143;
pub const LICENSEE_NEW_HIGH_ADDR: usize = 0x0144;
pub const LICENSEE_NEW_LOW_ADDR: usize = 0x0145;
pub const SGB_COMPATIBILITY_ADDR: usize = 0x0146;
pub const CARTRIDGE_TYPE_ADDR: usize = 0x0147;
pub const ROM_SIZE_ADDR: usize = 0x0148;
pub const RAM_SIZE_ADDR: usize = 0x0149;
pub const JAPANESE_CODE_ADDR: usize = 0x014A;
pub const LICENSEE_OLD_ADDR: usize = 0x014B;
pub const MASK_ROM_VERSION_ADDR: usize = 0x014C;
pub const COMPLEMENT_CHECK_ADDR: usize = 0x014D;
pub const CHECKSUM_ADDR: usize = 0x014E;

/// Range summed by the boot ROM's header check.
pub const HEADER_CHECK_START_ADDR: usize = 0x0134;
pub const HEADER_CHECK_END_ADDR: usize = 0x014C;

/// Smallest image that holds every single-byte header field.
pub const HEADER_END_ADDR: usize = 0x014F;
/// Smallest image that also holds both bytes of the global checksum.
pub const CHECKSUM_END_ADDR: usize = 0x0150;

/// The boot ROM compares this to its own copy; if it doesn't match, the GB won't boot.
pub const NINTENDO_LOGO: [u8; LOGO_LEN] = [
    0xCE, 0xED, 0x66, 0x66, 0xCC, 0x0D, 0x00, 0x0B, 0x03, 0x73, 0x00, 0x83, 0x00, 0x0C, 0x00, 0x0D,
    0x00, 0x08, 0x11, 0x1F, 0x88, 0x89, 0x00, 0x0E, 0xDC, 0xCC, 0x6E, 0xE6, 0xDD, 0xDD, 0xD9, 0x99,
    0xBB, 0xBB, 0x67, 0x63, 0x6E, 0x0E, 0xEC, 0xCC, 0xDD, 0xDC, 0x99, 0x9F, 0xBB, 0xB9, 0x33, 0x3E,
];

pub const GAME_BOY_FILE_EXT: &str = "gb";
pub const GAME_BOY_COLOR_FILE_EXT: &str = "gbc";

/// A register is a pair of bytes.
pub const REGISTER_SIZE: usize = 2;
pub const MAX_BIT_INDEX: u8 = 7;
