//! 分隔符的生成与 `Content-Type` 的拼装。

use rand::Rng;

const BOUNDARY_PREFIX: &str = "-----------------------";
const BOUNDARY_DIGITS: usize = 24;

/// 用给定随机源生成分隔符：23 个 `-` 后接 24 位十进制数字。
///
/// 随机源由调用方注入，测试可传入固定种子的 `StdRng` 得到可复现的分隔符。
pub fn generate_boundary<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut boundary = String::with_capacity(BOUNDARY_PREFIX.len() + BOUNDARY_DIGITS);
    boundary.push_str(BOUNDARY_PREFIX);
    for _ in 0..BOUNDARY_DIGITS {
        boundary.push(char::from(b'0' + rng.gen_range(0..10u8)));
    }
    boundary
}

/// 使用线程本地随机源生成分隔符。
pub fn random_boundary() -> String {
    generate_boundary(&mut rand::thread_rng())
}

pub fn multipart_content_type(boundary: &str) -> String {
    format!("multipart/byteranges; boundary={boundary}")
}
