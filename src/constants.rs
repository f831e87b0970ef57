/// 载体通道在 RGBA 像素中的索引，即绿色通道。
/// 按 0xAARRGGBB 打包成 32 位值时，该字节位于第 8–15 位，
/// 解码等价于对打包值右移 8 位后取最低字节。
pub const CARRIER_CHANNEL: usize = 1;

/// Alpha 通道在 RGBA 像素中的索引。
/// 按 0xAARRGGBB 打包成 32 位值时位于第 24–31 位。
pub const ALPHA_CHANNEL: usize = 3;

/// 有效载荷像素的 Alpha 值：完全不透明。
/// 网格中未写入的像素保持全零，Alpha 为 0 的像素
/// 即为解码时数据结束的哨兵。
pub const OPAQUE_ALPHA: u8 = 0xFF;
