//! 터미널 출력 포맷팅 유틸리티
//!
//! DI 레지스트리 초기화 과정의 진행 상황을 보기 좋게 출력합니다.
//! 포맷팅과 출력을 분리해 두어 포맷 결과는 테스트할 수 있습니다.

const BOX_WIDTH: usize = 50;

/// 박스로 둘러싼 제목 문자열을 만듭니다 (3줄).
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║              SERVICE REGISTRY READY              ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn format_boxed_title(title: &str) -> String {
    let border = "═".repeat(BOX_WIDTH);
    // 이모지는 터미널에서 두 칸을 차지하므로 한 칸 덜 채웁니다.
    let inner = if title.is_ascii() { BOX_WIDTH } else { BOX_WIDTH - 1 };

    format!("╔{border}╗\n║{title:^inner$}║\n╚{border}╝")
}

pub fn print_boxed_title(title: &str) {
    println!("{}", format_boxed_title(title));
}

pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 레지스트리 초기화 요약
pub fn print_final_summary(repos: usize, services: usize) {
    println!();
    print_boxed_title("🎉 SERVICE REGISTRY INITIALIZED");
    println!("   📦 Repositories: {}", repos);
    println!("   🔧 Services: {}", services);
    println!("   🚀 Total Components: {}", repos + services);
    println!();
}

pub fn print_cache_initialized(cache_type: &str, count: usize) {
    println!("   ├─ {} Cache: {} entries loaded", cache_type, count);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxed_title_is_centered() {
        let boxed = format_boxed_title("READY");
        let lines: Vec<&str> = boxed.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with('╔') && lines[0].ends_with('╗'));
        assert_eq!(lines[1].chars().count(), BOX_WIDTH + 2);
        assert!(lines[1].contains("READY"));
    }
}
