use serde_derive::Deserialize;
use serde_derive::Serialize;

use log::error;
use std::fs::File;
use std::io::prelude::*;

use crate::param;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UtilConfig {
    #[serde(default = "default_ffmpeg_path")]
    ffmpeg_path: String,
    #[serde(default = "default_sample_rate")]
    sample_rate: u32,
    #[serde(default = "default_qr_width")]
    qr_width: u32,
    #[serde(default = "default_qr_height")]
    qr_height: u32,
    #[serde(default = "default_qr_margin")]
    qr_margin: u32,
    #[serde(default)]
    strict_access: bool,
}

fn default_ffmpeg_path() -> String {
    "ffmpeg".to_string()
}

fn default_sample_rate() -> u32 {
    param::DEFAULT_SAMPLE_RATE
}

fn default_qr_width() -> u32 {
    param::QR_IMAGE_WIDTH
}

fn default_qr_height() -> u32 {
    param::QR_IMAGE_HEIGHT
}

fn default_qr_margin() -> u32 {
    param::QR_IMAGE_MARGIN
}

impl UtilConfig {
    pub fn new() -> Self {
        Self {
            ffmpeg_path: default_ffmpeg_path(),
            sample_rate: default_sample_rate(),
            qr_width: default_qr_width(),
            qr_height: default_qr_height(),
            qr_margin: default_qr_margin(),
            strict_access: false,
        }
    }

    pub fn from_toml(filename: &str) -> Self {
        let mut file = match File::open(filename) {
            Ok(f) => f,
            Err(e) => panic!("no such file {} exception:{}", filename, e),
        };
        let mut str_val = String::new();
        match file.read_to_string(&mut str_val) {
            Ok(s) => s,
            Err(e) => panic!("Error Reading file: {}", e),
        };

        match toml::from_str(&str_val) {
            Ok(t) => t,
            Err(_) => {
                error!("无法成功从配置文件构建配置对象，使用默认配置");
                UtilConfig::new()
            }
        }
    }
}

impl Default for UtilConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl UtilConfig {
    pub fn ffmpeg_path(&self) -> &str {
        &self.ffmpeg_path
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn qr_width(&self) -> u32 {
        self.qr_width
    }

    pub fn qr_height(&self) -> u32 {
        self.qr_height
    }

    pub fn qr_margin(&self) -> u32 {
        self.qr_margin
    }

    pub fn strict_access(&self) -> bool {
        self.strict_access
    }
}
