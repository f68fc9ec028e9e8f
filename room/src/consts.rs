pub const ROUND_SECS: u8 = 60;

pub const MAX_CANVAS_SIDE: u32 = 4096;

pub const ROOM_CHANNEL_SIZE: usize = 64;

pub const CONFIG_DIR: &str = "dng";
pub const CONFIG_FILE: &str = "config.toml";
