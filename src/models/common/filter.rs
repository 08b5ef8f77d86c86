use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

/// 查询过滤参数的反序列化：缺省或空值视为未过滤
///
/// `?id=` 与未提供 `id` 等价；非空但无法解析的值返回错误（由查询错误处理器转为 400）。
pub fn deserialize_optional_filter<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        Some(value) if !value.trim().is_empty() => value
            .parse::<T>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}
