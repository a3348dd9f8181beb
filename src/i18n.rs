// ==========================================
// 국제화 (i18n) 모듈
// ==========================================
// rust-i18n 사용, 한국어(기본) / 영어 지원
// 메시지 조회는 호출 위치에서 rust_i18n::t! 직접 사용
// 주의: rust_i18n::i18n! 매크로는 lib.rs 에서 초기화
// ==========================================

/// 지원 언어 코드
pub const SUPPORTED_LOCALES: [&str; 2] = ["ko", "en"];

/// 기본 언어
pub const DEFAULT_LOCALE: &str = "ko";

/// 현재 언어
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 언어 설정 (프로세스 전역, 시작 시 1회)
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// 언어 태그를 지원 언어 코드로 변환 (`en-US` → `en`, 미지원 → None)
pub fn supported_locale(tag: &str) -> Option<&'static str> {
    let primary = tag
        .trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();

    SUPPORTED_LOCALES
        .iter()
        .copied()
        .find(|supported| *supported == primary)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Mutex;

    // rust-i18n 의 locale 은 전역 상태이고 테스트는 병렬 실행되므로
    // 언어를 바꾸는 테스트는 이 잠금으로 직렬화
    pub(crate) static LOCALE_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_set_locale() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("en");
        assert_eq!(current_locale(), "en");

        set_locale(DEFAULT_LOCALE);
        assert_eq!(current_locale(), "ko");
    }

    #[test]
    fn test_supported_locale() {
        assert_eq!(supported_locale("ko"), Some("ko"));
        assert_eq!(supported_locale("en-US"), Some("en"));
        assert_eq!(supported_locale(" EN_gb "), Some("en"));
        assert_eq!(supported_locale("zh-CN"), None);
        assert_eq!(supported_locale(""), None);
    }
}
