const FALLBACK_USER: &str = "unknown";

pub fn current_user() -> String {
    resolve_user(|key| std::env::var(key).ok(), passwd_name)
}

// USER, then LOGNAME, then the passwd entry for the real uid
pub fn resolve_user(
    lookup: impl Fn(&str) -> Option<String>,
    passwd: impl FnOnce() -> Option<String>,
) -> String {
    ["USER", "LOGNAME"]
        .iter()
        .find_map(|key| lookup(key).filter(|v| !v.is_empty()))
        .or_else(passwd)
        .unwrap_or_else(|| FALLBACK_USER.to_string())
}

#[cfg(unix)]
fn passwd_name() -> Option<String> {
    use std::ffi::CStr;

    let uid = unsafe { libc::getuid() };
    let mut buf_len = 1024;

    while buf_len <= 1 << 16 {
        let mut buf: Vec<libc::c_char> = vec![0; buf_len];
        let mut pwd: libc::passwd = unsafe { std::mem::zeroed() };
        let mut result: *mut libc::passwd = std::ptr::null_mut();

        let rc = unsafe { libc::getpwuid_r(uid, &mut pwd, buf.as_mut_ptr(), buf.len(), &mut result) };
        if rc == libc::ERANGE {
            buf_len *= 2;
            continue;
        }
        if rc != 0 || result.is_null() || pwd.pw_name.is_null() {
            return None;
        }

        // pw_name points into `buf`, which is still alive here
        let name = unsafe { CStr::from_ptr(pwd.pw_name) };
        return Some(name.to_string_lossy().into_owned());
    }

    None
}

#[cfg(not(unix))]
fn passwd_name() -> Option<String> {
    std::env::var("USERNAME").ok()
}
