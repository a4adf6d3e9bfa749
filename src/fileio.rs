//! 文件的缓冲读写辅助。

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use log::error;

use crate::exception::Exception;

/// 读写使用的缓冲区大小
pub const BUFFER_SIZE: usize = 10240;

/// 把`input`的全部内容写入文件`dest`，返回写入的字节数。
///
/// 目标文件已存在时被覆盖。
pub fn write_from<R: Read>(dest: &Path, input: &mut R) -> Result<u64, Exception> {
    let mut file = match File::create(dest) {
        Ok(f) => f,
        Err(e) => {
            error!("文件{}是目录或无法打开：{}", dest.display(), e);
            return Err(Exception::Io(e.to_string()));
        }
    };
    let mut buffer = [0u8; BUFFER_SIZE];
    let mut byte_count = 0u64;
    loop {
        let bytes_read = input.read(&mut buffer).map_err(|e| Exception::Io(e.to_string()))?;
        if bytes_read == 0 {
            break;
        }
        file.write_all(&buffer[..bytes_read])
            .map_err(|e| Exception::Io(e.to_string()))?;
        byte_count += bytes_read as u64;
    }
    file.flush().map_err(|e| Exception::Io(e.to_string()))?;
    Ok(byte_count)
}

/// 把文件`src`的全部内容读入`output`，返回读出的字节数。
pub fn read_into<W: Write>(src: &Path, output: &mut W) -> Result<u64, Exception> {
    let mut file = match File::open(src) {
        Ok(f) => f,
        Err(e) => {
            error!("文件{}不存在或无法读取：{}", src.display(), e);
            return Err(Exception::Io(e.to_string()));
        }
    };
    let mut buffer = [0u8; BUFFER_SIZE];
    let mut byte_count = 0u64;
    loop {
        let bytes_read = file.read(&mut buffer).map_err(|e| Exception::Io(e.to_string()))?;
        if bytes_read == 0 {
            break;
        }
        output
            .write_all(&buffer[..bytes_read])
            .map_err(|e| Exception::Io(e.to_string()))?;
        byte_count += bytes_read as u64;
    }
    Ok(byte_count)
}
