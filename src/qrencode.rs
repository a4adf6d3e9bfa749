//! 二维码图像生成。
//!
//! 将文本内容编码为二维码并渲染为PNG图像。纠错等级固定为最高的H级
//! （30%），图像尺寸与空白区宽度来自[`UtilConfig`]。

use std::io::Write;

use bytes::Bytes;
use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder};
use qrcode::{Color, EcLevel, QrCode};

use crate::config::UtilConfig;
use crate::exception::Exception;

/// 将内容编码为二维码PNG并写入`writer`。
///
/// 目标尺寸向下取整到模块宽度的整数倍，保证每个模块由整数个像素
/// 构成。内容过长无法编码时返回`EncodeFailed`。
pub fn encode<W: Write>(
    contents: &str,
    writer: &mut W,
    config: &UtilConfig,
) -> Result<(), Exception> {
    let code = QrCode::with_error_correction_level(contents.as_bytes(), EcLevel::H)
        .map_err(|e| Exception::EncodeFailed(e.to_string()))?;
    let colors = code.to_colors();
    let modules = code.width() as u32;
    let margin = config.qr_margin();
    // 含空白区的总模块数
    let total = modules + margin * 2;
    let target = config.qr_width().min(config.qr_height());
    let scale = (target / total).max(1);
    let size = total * scale;

    let mut pixels = Vec::with_capacity((size * size) as usize);
    for y in 0..size {
        for x in 0..size {
            let module_x = (x / scale) as i64 - margin as i64;
            let module_y = (y / scale) as i64 - margin as i64;
            let dark = module_x >= 0
                && module_y >= 0
                && (module_x as u32) < modules
                && (module_y as u32) < modules
                && colors[(module_y as u32 * modules + module_x as u32) as usize] == Color::Dark;
            pixels.push(if dark { 0u8 } else { 255u8 });
        }
    }

    PngEncoder::new(writer)
        .write_image(&pixels, size, size, ColorType::L8)
        .map_err(|e| Exception::EncodeFailed(e.to_string()))
}

/// 将内容编码为二维码PNG并返回图像字节。
pub fn encode_to_bytes(contents: &str, config: &UtilConfig) -> Result<Bytes, Exception> {
    let mut buffer = Vec::new();
    encode(contents, &mut buffer, config)?;
    Ok(Bytes::from(buffer))
}
