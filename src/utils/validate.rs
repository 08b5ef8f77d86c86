use once_cell::sync::Lazy;
use regex::Regex;

/// 课程/学生名称的最大长度（字符数）
pub const MAX_NAME_LENGTH: usize = 100;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.@+-]{1,150}$").expect("Invalid username regex"));

pub fn validate_username(username: &str) -> Result<(), &'static str> {
    if !USERNAME_RE.is_match(username) {
        return Err(
            "Username must be 1-150 characters of letters, digits and @/./+/-/_ only",
        );
    }
    Ok(())
}

/// 名称校验：去除首尾空白后非空，且不超过最大长度
pub fn validate_name(name: &str) -> Result<(), &'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Name must not be blank");
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err("Name must be at most 100 characters");
    }
    Ok(())
}
